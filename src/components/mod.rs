//! UI Components
//!
//! Presentation-only Leptos components; every one of them reads the global
//! state and renders it, no fetch logic lives here.

pub mod case_map;
pub mod chart;
pub mod country_select;
pub mod loading;
pub mod stat_card;
pub mod table;

pub use case_map::CaseMap;
pub use chart::Chart;
pub use country_select::CountrySelect;
pub use loading::Loading;
pub use stat_card::StatCard;
pub use table::LiveTable;
