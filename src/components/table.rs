//! Live Table Component
//!
//! Countries ranked by cumulative case count, highest first. Rows come
//! pre-sorted from the controller; this component only renders them.

use leptos::*;

use crate::state::global::GlobalState;
use crate::stats::format_stat;

/// Ranked live-cases table
#[component]
pub fn LiveTable() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="live-table">
            {move || {
                let rows = state.table_rows.get();

                if rows.is_empty() {
                    return view! {
                        <p class="live-table-empty">"No country data yet"</p>
                    }
                    .into_view();
                }

                rows.into_iter()
                    .map(|row| {
                        view! {
                            <div class="live-table-row">
                                <span>{row.country}</span>
                                <strong>{format_stat(Some(row.cases))}</strong>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
