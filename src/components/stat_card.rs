//! Stat Card Component
//!
//! One card per metric showing today's new count and the cumulative total.
//! Clicking a card makes its metric the one the map and chart emphasize.

use leptos::*;

use crate::state::global::{GlobalState, MetricKind};
use crate::stats::format_stat;

/// Stat card for a single metric
#[component]
pub fn StatCard(
    /// Card heading
    title: &'static str,
    /// Metric this card displays and selects
    kind: MetricKind,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let active = create_memo(move |_| state.metric.get() == kind);

    let daily = create_memo(move |_| {
        state
            .summary
            .get()
            .map(|summary| summary.daily(kind))
    });

    let total = create_memo(move |_| {
        state
            .summary
            .get()
            .map(|summary| summary.total(kind))
    });

    let on_click = move |_| state.metric.set(kind);

    view! {
        <div
            on:click=on_click
            class=move || {
                if active.get() {
                    "stat-card stat-card-active"
                } else {
                    "stat-card"
                }
            }
            style=move || {
                if active.get() {
                    format!("border-top-color: {}", kind.color())
                } else {
                    String::new()
                }
            }
        >
            <span class="stat-card-title">{title}</span>

            // Today's new count, in the metric accent
            <span class="stat-card-daily" style=format!("color: {}", kind.color())>
                {move || format_stat(daily.get())}
            </span>

            <span class="stat-card-total">
                {move || format!("{} Total", format_stat(total.get()))}
            </span>
        </div>
    }
}
