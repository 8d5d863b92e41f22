//! Country Select Component
//!
//! Dropdown of the worldwide aggregate plus every country with an ISO2 code.
//! Changing the selection asks the controller to re-fetch; the displayed
//! value only moves once that fetch succeeds.

use leptos::*;

use crate::state::controller;
use crate::state::global::{GlobalState, RegionCode, WORLDWIDE};

/// Region selection dropdown
#[component]
pub fn CountrySelect() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let entries = create_memo(move |_| {
        state
            .countries
            .get()
            .iter()
            .filter_map(|country| {
                country
                    .country_info
                    .iso2
                    .clone()
                    .map(|iso2| (country.country.clone(), iso2))
            })
            .collect::<Vec<_>>()
    });

    let change_state = state.clone();
    let on_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        controller::select_region(&change_state, RegionCode::from_value(&value));
    };

    view! {
        <select
            class="country-select"
            on:change=on_change
            prop:value=move || state.selected.get().as_value().to_string()
        >
            <option value=WORLDWIDE>"Worldwide"</option>
            {move || {
                entries
                    .get()
                    .into_iter()
                    .map(|(name, iso2)| {
                        view! { <option value=iso2>{name}</option> }
                    })
                    .collect_view()
            }}
        </select>
    }
}
