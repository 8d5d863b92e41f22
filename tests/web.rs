//! DOM smoke test, run with a wasm test runner
//! (`wasm-pack test --headless --chrome`).

#![cfg(target_arch = "wasm32")]

use leptos::*;
use wasm_bindgen_test::*;

use covid_tracker::components::LiveTable;
use covid_tracker::state::{Country, CountryInfo, GlobalState};

wasm_bindgen_test_configure!(run_in_browser);

fn country(name: &str, cases: f64) -> Country {
    Country {
        country: name.to_string(),
        country_info: CountryInfo::default(),
        cases,
        ..Country::default()
    }
}

#[wasm_bindgen_test]
fn live_table_renders_ranked_rows() {
    mount_to_body(|| {
        let state = GlobalState::new();
        state
            .table_rows
            .set(vec![country("Bravo", 200.0), country("Alfa", 50.0)]);
        provide_context(state);
        view! { <LiveTable /> }
    });

    let document = web_sys::window().unwrap().document().unwrap();
    let text = document
        .body()
        .unwrap()
        .text_content()
        .unwrap_or_default();

    let bravo = text.find("Bravo").expect("Bravo row missing");
    let alfa = text.find("Alfa").expect("Alfa row missing");
    assert!(bravo < alfa, "rows out of rank order");
    assert!(text.contains("200"));
}
