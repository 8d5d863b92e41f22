//! Selection Controller
//!
//! Orchestrates the fetch/refresh flow behind [`GlobalState`]: one-shot
//! startup loading, region selection, and the transitions between the
//! Uninitialized/Loading/Ready/Error phases. All state mutation happens
//! here, synchronously, after a fetch resolves or a user event fires.

use leptos::logging;
use leptos::*;

use crate::api::{self, FetchError};
use crate::state::global::{
    Country, GlobalState, Phase, RegionCode, RegionSummary, Timeline, Viewport,
};
use crate::stats::sort_by_cases;

/// Kick off the initial load. Runs once; later calls are no-ops.
///
/// The summary and country-list fetches are independent tasks that may
/// resolve in either order; each lands in its own piece of state and
/// readiness is re-checked after each. The historical fetch feeds the chart
/// only and never gates readiness.
pub fn init(state: &GlobalState) {
    if state.phase.get_untracked() != Phase::Uninitialized {
        return;
    }
    state.phase.set(Phase::Loading);

    let summary_state = state.clone();
    spawn_local(async move {
        let result = api::fetch_global_summary().await;
        apply_summary(&summary_state, RegionCode::Worldwide, result);
    });

    let countries_state = state.clone();
    spawn_local(async move {
        let result = api::fetch_countries().await;
        apply_countries(&countries_state, result);
    });

    let history_state = state.clone();
    spawn_local(async move {
        let result = api::fetch_historical(api::client::HISTORY_DAYS).await;
        apply_history(&history_state, result);
    });
}

/// Handle a dropdown selection: fetch the summary for the chosen region and
/// swap the displayed data when it arrives.
///
/// There is no cancellation; if the user re-selects while a fetch is still
/// outstanding, whichever response resolves last wins.
pub fn select_region(state: &GlobalState, region: RegionCode) {
    state.phase.set(Phase::Loading);

    let state = state.clone();
    spawn_local(async move {
        let result = api::fetch_summary(&region).await;
        apply_summary(&state, region, result);
    });
}

/// Apply a resolved summary fetch.
///
/// On success the summary, viewport, and selected region are swapped in one
/// batch so no render observes them mismatched. On failure the phase flips
/// to Error and everything previously displayed stays as it was.
pub(crate) fn apply_summary(
    state: &GlobalState,
    region: RegionCode,
    result: Result<RegionSummary, FetchError>,
) {
    match result {
        Ok(summary) => {
            batch(|| {
                state.viewport.set(Viewport::for_summary(&region, &summary));
                state.selected.set(region);
                state.summary.set(Some(summary));
            });
            maybe_ready(state);
        }
        Err(err) => {
            logging::error!("summary fetch failed: {err}");
            state.phase.set(Phase::Error);
        }
    }
}

/// Apply the resolved country-list fetch: raw order for the map and
/// dropdown, case-sorted rows for the table.
pub(crate) fn apply_countries(state: &GlobalState, result: Result<Vec<Country>, FetchError>) {
    match result {
        Ok(countries) => {
            batch(|| {
                state.table_rows.set(sort_by_cases(&countries));
                state.countries.set(countries);
            });
            maybe_ready(state);
        }
        Err(err) => {
            logging::error!("country list fetch failed: {err}");
            state.phase.set(Phase::Error);
        }
    }
}

/// Apply the resolved historical fetch. Failure leaves the chart empty and
/// the phase untouched.
pub(crate) fn apply_history(state: &GlobalState, result: Result<Timeline, FetchError>) {
    match result {
        Ok(timeline) => state.history.set(Some(timeline)),
        Err(err) => logging::warn!("historical fetch failed: {err}"),
    }
}

/// Flip to Ready once both initial pieces have landed. Also covers later
/// selection changes, where the country list is already present.
fn maybe_ready(state: &GlobalState) {
    let loaded = state.summary.with_untracked(|s| s.is_some())
        && state.countries.with_untracked(|c| !c.is_empty());
    if loaded {
        state.phase.set(Phase::Ready);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::global::CountryInfo;

    fn in_runtime(f: impl FnOnce()) {
        let runtime = create_runtime();
        f();
        runtime.dispose();
    }

    fn country(name: &str, iso2: &str, cases: f64) -> Country {
        Country {
            country: name.to_string(),
            country_info: CountryInfo {
                iso2: Some(iso2.to_string()),
                lat: 0.0,
                long: 0.0,
            },
            cases,
            ..Country::default()
        }
    }

    fn seeded_state() -> GlobalState {
        let state = GlobalState::new();
        state.phase.set(Phase::Loading);
        apply_summary(
            &state,
            RegionCode::Worldwide,
            Ok(RegionSummary {
                cases: 1000.0,
                today_cases: 10.0,
                ..RegionSummary::default()
            }),
        );
        apply_countries(
            &state,
            Ok(vec![
                country("Alfa", "AL", 50.0),
                country("Bravo", "BR", 200.0),
            ]),
        );
        state
    }

    #[test]
    fn test_ready_requires_both_initial_pieces() {
        in_runtime(|| {
            let state = GlobalState::new();
            state.phase.set(Phase::Loading);

            apply_summary(&state, RegionCode::Worldwide, Ok(RegionSummary::default()));
            assert_eq!(state.phase.get_untracked(), Phase::Loading);

            apply_countries(&state, Ok(vec![country("Alfa", "AL", 50.0)]));
            assert_eq!(state.phase.get_untracked(), Phase::Ready);
        });
    }

    #[test]
    fn test_initial_pieces_resolve_in_either_order() {
        in_runtime(|| {
            let state = GlobalState::new();
            state.phase.set(Phase::Loading);

            apply_countries(&state, Ok(vec![country("Alfa", "AL", 50.0)]));
            assert_eq!(state.phase.get_untracked(), Phase::Loading);

            apply_summary(&state, RegionCode::Worldwide, Ok(RegionSummary::default()));
            assert_eq!(state.phase.get_untracked(), Phase::Ready);
        });
    }

    #[test]
    fn test_countries_seed_table_sorted_and_raw_order() {
        in_runtime(|| {
            let state = seeded_state();

            let raw: Vec<String> = state
                .countries
                .get_untracked()
                .iter()
                .map(|c| c.country.clone())
                .collect();
            assert_eq!(raw, vec!["Alfa", "Bravo"]);

            let ranked: Vec<String> = state
                .table_rows
                .get_untracked()
                .iter()
                .map(|c| c.country.clone())
                .collect();
            assert_eq!(ranked, vec!["Bravo", "Alfa"]);
        });
    }

    #[test]
    fn test_selection_swaps_summary_viewport_and_region_together() {
        in_runtime(|| {
            let state = seeded_state();

            let fetched = RegionSummary {
                cases: 777.0,
                country_info: Some(CountryInfo {
                    iso2: Some("BR".to_string()),
                    lat: -14.235,
                    long: -51.9253,
                }),
                ..RegionSummary::default()
            };
            apply_summary(
                &state,
                RegionCode::Country("BR".to_string()),
                Ok(fetched.clone()),
            );

            assert_eq!(state.phase.get_untracked(), Phase::Ready);
            assert_eq!(
                state.selected.get_untracked(),
                RegionCode::Country("BR".to_string())
            );
            // The new fetch result exactly, no merge with prior data
            assert_eq!(state.summary.get_untracked(), Some(fetched));

            let viewport = state.viewport.get_untracked();
            assert_eq!(viewport.lat, -14.235);
            assert_eq!(viewport.long, -51.9253);
            assert_eq!(viewport.zoom, 4.0);
        });
    }

    #[test]
    fn test_worldwide_selection_resets_viewport() {
        in_runtime(|| {
            let state = seeded_state();

            // Move to a country first
            apply_summary(
                &state,
                RegionCode::Country("BR".to_string()),
                Ok(RegionSummary {
                    country_info: Some(CountryInfo {
                        iso2: Some("BR".to_string()),
                        lat: -14.235,
                        long: -51.9253,
                    }),
                    ..RegionSummary::default()
                }),
            );
            assert_ne!(state.viewport.get_untracked(), Viewport::world());

            apply_summary(&state, RegionCode::Worldwide, Ok(RegionSummary::default()));
            assert_eq!(state.viewport.get_untracked(), Viewport::world());
            assert_eq!(state.selected.get_untracked(), RegionCode::Worldwide);
        });
    }

    #[test]
    fn test_failed_selection_keeps_displayed_data() {
        in_runtime(|| {
            let state = seeded_state();
            let summary_before = state.summary.get_untracked();
            let viewport_before = state.viewport.get_untracked();

            apply_summary(
                &state,
                RegionCode::Country("FR".to_string()),
                Err(FetchError::Network("connection refused".to_string())),
            );

            assert_eq!(state.phase.get_untracked(), Phase::Error);
            assert_eq!(state.summary.get_untracked(), summary_before);
            assert_eq!(state.viewport.get_untracked(), viewport_before);
            assert_eq!(state.selected.get_untracked(), RegionCode::Worldwide);
        });
    }

    #[test]
    fn test_failed_history_only_logs() {
        in_runtime(|| {
            let state = seeded_state();

            apply_history(&state, Err(FetchError::Parse("bad body".to_string())));
            assert_eq!(state.phase.get_untracked(), Phase::Ready);
            assert_eq!(state.history.get_untracked(), None);

            let timeline = Timeline::default();
            apply_history(&state, Ok(timeline.clone()));
            assert_eq!(state.history.get_untracked(), Some(timeline));
        });
    }
}
