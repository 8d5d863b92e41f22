//! disease.sh API client
//!
//! Fetch functions for the external statistics service.

pub mod client;

pub use client::{
    fetch_countries, fetch_country_summary, fetch_global_summary, fetch_historical, fetch_summary,
    FetchError,
};
