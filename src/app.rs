//! App Root Component
//!
//! Main application component: provides global state, kicks off the initial
//! load once, and lays out the dashboard.

use leptos::*;

use crate::components::{CaseMap, Chart, CountrySelect, LiveTable, Loading, StatCard};
use crate::state::controller;
use crate::state::global::{GlobalState, MetricKind, Phase};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    crate::state::provide_global_state();

    // One-shot initial load: worldwide summary, country list, and history
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    controller::init(&state);

    view! {
        <div class="app">
            <div class="app-left">
                <header class="app-header">
                    <h1>"COVID-19 Tracker"</h1>
                    <CountrySelect />
                </header>

                <div class="app-stats">
                    <StatCard title="Coronavirus Cases" kind=MetricKind::Cases />
                    <StatCard title="Recovered" kind=MetricKind::Recovered />
                    <StatCard title="Deaths" kind=MetricKind::Deaths />
                </div>

                <CaseMap />
            </div>

            <div class="app-right">
                <h3>"Live Cases by Country"</h3>
                <LiveTable />

                <h3 class="app-chart-title">
                    {move || format!("Worldwide new {}", state.metric.get().label())}
                </h3>
                <Chart />
            </div>

            <Footer />
        </div>
    }
}

/// Footer with data source, last refresh time, and load status
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="app-footer">
            <span>"Data: disease.sh"</span>

            // API-side refresh time of the displayed summary
            <span>
                {move || {
                    state
                        .summary
                        .get()
                        .and_then(|summary| summary.updated)
                        .and_then(chrono::DateTime::from_timestamp_millis)
                        .map(|dt| format!("Last updated: {}", dt.format("%H:%M:%S")))
                        .unwrap_or_else(|| "Not updated yet".to_string())
                }}
            </span>

            // A failed fetch only stops the spinner; the view keeps its
            // last known-good data
            {move || {
                if matches!(state.phase.get(), Phase::Loading | Phase::Uninitialized) {
                    view! {
                        <span class="app-footer-status">
                            <Loading />
                            "Loading..."
                        </span>
                    }
                    .into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </footer>
    }
}
