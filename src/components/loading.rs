//! Loading Component

use leptos::*;

/// Inline loading spinner shown while a fetch is in flight
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <span class="loading-spinner" />
    }
}
