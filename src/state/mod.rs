//! State Management
//!
//! Global application state and the selection/refresh flow that drives it.

pub mod controller;
pub mod global;

pub use global::{
    provide_global_state, Country, CountryInfo, GlobalState, MetricKind, Phase, RegionCode,
    RegionSummary, Timeline, Viewport,
};
