//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the view-model types
//! deserialized from the disease.sh API.

use std::collections::HashMap;

use chrono::NaiveDate;
use leptos::*;

/// Lifecycle of the dashboard data.
///
/// `Error` never clears previously fetched data; the view keeps showing its
/// last known-good state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Uninitialized,
    Loading,
    Ready,
    Error,
}

/// The region whose summary is displayed: the worldwide aggregate or a
/// single country identified by its ISO2 code.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RegionCode {
    #[default]
    Worldwide,
    Country(String),
}

/// Sentinel value the dropdown uses for the worldwide aggregate.
pub const WORLDWIDE: &str = "worldwide";

impl RegionCode {
    /// Parse a dropdown value into a region code.
    pub fn from_value(value: &str) -> Self {
        if value == WORLDWIDE {
            Self::Worldwide
        } else {
            Self::Country(value.to_string())
        }
    }

    /// The dropdown value for this region.
    pub fn as_value(&self) -> &str {
        match self {
            Self::Worldwide => WORLDWIDE,
            Self::Country(code) => code,
        }
    }

    pub fn is_worldwide(&self) -> bool {
        matches!(self, Self::Worldwide)
    }
}

/// Which sub-metric the chart and map emphasize. Selected by clicking a stat
/// card; does not affect what is fetched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MetricKind {
    #[default]
    Cases,
    Recovered,
    Deaths,
}

impl MetricKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cases => "cases",
            Self::Recovered => "recovered",
            Self::Deaths => "deaths",
        }
    }

    /// Accent color used by the chart line, map circles, and active card.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Cases => "#cc1034",
            Self::Recovered => "#7dd71d",
            Self::Deaths => "#fb4443",
        }
    }

    /// Pixel scale applied to the square root of a count when sizing map
    /// circles. Rarer metrics get a larger scale so they stay visible.
    pub fn radius_scale(&self) -> f64 {
        match self {
            Self::Cases => 0.004,
            Self::Recovered => 0.006,
            Self::Deaths => 0.012,
        }
    }
}

/// Summary counts for one region, replaced wholesale on every fetch.
///
/// Shared shape of `GET /all` and `GET /countries/{code}`; the worldwide
/// response carries no `countryInfo`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSummary {
    /// Epoch milliseconds of the API's last refresh
    #[serde(default)]
    pub updated: Option<i64>,
    #[serde(default)]
    pub cases: f64,
    #[serde(default)]
    pub today_cases: f64,
    #[serde(default)]
    pub recovered: f64,
    #[serde(default)]
    pub today_recovered: f64,
    #[serde(default)]
    pub deaths: f64,
    #[serde(default)]
    pub today_deaths: f64,
    #[serde(default)]
    pub country_info: Option<CountryInfo>,
}

impl RegionSummary {
    /// Cumulative count for the given metric.
    pub fn total(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::Cases => self.cases,
            MetricKind::Recovered => self.recovered,
            MetricKind::Deaths => self.deaths,
        }
    }

    /// Today's new count for the given metric.
    pub fn daily(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::Cases => self.today_cases,
            MetricKind::Recovered => self.today_recovered,
            MetricKind::Deaths => self.today_deaths,
        }
    }
}

/// Coordinates and ISO code nested under `countryInfo` in the API.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct CountryInfo {
    #[serde(default)]
    pub iso2: Option<String>,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub long: f64,
}

/// Raw per-country record from `GET /countries`. Fetched once at startup and
/// read-only afterward; the dropdown and table are derived views of it.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// Display name
    pub country: String,
    #[serde(default)]
    pub country_info: CountryInfo,
    #[serde(default)]
    pub cases: f64,
    #[serde(default)]
    pub today_cases: f64,
    #[serde(default)]
    pub recovered: f64,
    #[serde(default)]
    pub today_recovered: f64,
    #[serde(default)]
    pub deaths: f64,
    #[serde(default)]
    pub today_deaths: f64,
}

impl Country {
    /// Cumulative count for the given metric.
    pub fn metric(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::Cases => self.cases,
            MetricKind::Recovered => self.recovered,
            MetricKind::Deaths => self.deaths,
        }
    }
}

/// Map center and zoom level. Swapped together with the summary on region
/// change, never adjusted piecemeal.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    pub lat: f64,
    pub long: f64,
    pub zoom: f64,
}

/// Zoom applied when centering on a selected country.
const COUNTRY_ZOOM: f64 = 4.0;

impl Default for Viewport {
    fn default() -> Self {
        Self::world()
    }
}

impl Viewport {
    /// The fixed worldwide view: mid-Atlantic center, zoomed out.
    pub fn world() -> Self {
        Self {
            lat: 34.80746,
            long: -40.4796,
            zoom: 3.0,
        }
    }

    /// Viewport for a freshly fetched summary: the worldwide default for the
    /// aggregate, the summary's own location otherwise. A country summary
    /// without coordinates falls back to the worldwide view.
    pub fn for_summary(region: &RegionCode, summary: &RegionSummary) -> Self {
        if region.is_worldwide() {
            return Self::world();
        }
        match &summary.country_info {
            Some(info) => Self {
                lat: info.lat,
                long: info.long,
                zoom: COUNTRY_ZOOM,
            },
            None => Self::world(),
        }
    }
}

/// Cumulative per-day series from `GET /historical/all`, keyed by `M/D/YY`
/// date strings.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct Timeline {
    #[serde(default)]
    pub cases: HashMap<String, f64>,
    #[serde(default)]
    pub recovered: HashMap<String, f64>,
    #[serde(default)]
    pub deaths: HashMap<String, f64>,
}

impl Timeline {
    /// Chronologically sorted cumulative series for one metric. Keys that do
    /// not parse as dates are skipped.
    pub fn series(&self, kind: MetricKind) -> Vec<(NaiveDate, f64)> {
        let raw = match kind {
            MetricKind::Cases => &self.cases,
            MetricKind::Recovered => &self.recovered,
            MetricKind::Deaths => &self.deaths,
        };

        let mut points: Vec<(NaiveDate, f64)> = raw
            .iter()
            .filter_map(|(key, value)| {
                NaiveDate::parse_from_str(key, "%m/%d/%y")
                    .ok()
                    .map(|date| (date, *value))
            })
            .collect();

        points.sort_by_key(|(date, _)| *date);
        points
    }
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Where the dashboard is in its load cycle
    pub phase: RwSignal<Phase>,
    /// Region whose summary is displayed; only changes on a successful fetch
    pub selected: RwSignal<RegionCode>,
    /// Last fetched summary for the selected region
    pub summary: RwSignal<Option<RegionSummary>>,
    /// Raw country list in API order, used by the map and the dropdown
    pub countries: RwSignal<Vec<Country>>,
    /// Country list sorted by descending case count, used by the table
    pub table_rows: RwSignal<Vec<Country>>,
    /// Map center and zoom, derived from the summary on region change
    pub viewport: RwSignal<Viewport>,
    /// Sub-metric emphasized by the chart and map
    pub metric: RwSignal<MetricKind>,
    /// Worldwide cumulative history backing the chart
    pub history: RwSignal<Option<Timeline>>,
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            phase: create_rw_signal(Phase::default()),
            selected: create_rw_signal(RegionCode::default()),
            summary: create_rw_signal(None),
            countries: create_rw_signal(Vec::new()),
            table_rows: create_rw_signal(Vec::new()),
            viewport: create_rw_signal(Viewport::default()),
            metric: create_rw_signal(MetricKind::default()),
            history: create_rw_signal(None),
        }
    }
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}
