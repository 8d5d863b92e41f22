//! Stat formatting and ordering helpers
//!
//! Pure functions shared by the cards, table, and chart. None of these
//! perform I/O; fetch failures never reach this layer.

use chrono::NaiveDate;

use crate::state::Country;

/// Rendered in place of a count that is absent or not a finite, non-negative
/// number.
pub const PLACEHOLDER: &str = "—";

/// Format a raw count for display with thousands separators.
///
/// `None`, NaN, infinities, and negative values all render as [`PLACEHOLDER`].
pub fn format_stat(stat: Option<f64>) -> String {
    match stat {
        Some(value) if value.is_finite() && value >= 0.0 => group_thousands(value.trunc() as u64),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Insert `,` separators every three digits.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Order countries by cumulative case count, highest first.
///
/// Returns a new vector; the input keeps its API order for the map and
/// dropdown. The sort is stable, so countries with equal counts keep their
/// relative input order.
pub fn sort_by_cases(countries: &[Country]) -> Vec<Country> {
    let mut sorted = countries.to_vec();
    sorted.sort_by(|a, b| b.cases.total_cmp(&a.cases));
    sorted
}

/// Day-over-day deltas of a cumulative series.
///
/// Each output point carries the later date of its pair. Negative deltas
/// (upstream data corrections) are passed through unchanged.
pub fn daily_deltas(series: &[(NaiveDate, f64)]) -> Vec<(NaiveDate, f64)> {
    series
        .windows(2)
        .map(|pair| (pair[1].0, pair[1].1 - pair[0].1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CountryInfo;

    fn country(name: &str, cases: f64) -> Country {
        Country {
            country: name.to_string(),
            country_info: CountryInfo::default(),
            cases,
            ..Country::default()
        }
    }

    #[test]
    fn test_format_stat_groups_thousands() {
        assert_eq!(format_stat(Some(1000.0)), "1,000");
        assert_eq!(format_stat(Some(10.0)), "10");
        assert_eq!(format_stat(Some(0.0)), "0");
        assert_eq!(format_stat(Some(1_234_567.0)), "1,234,567");
    }

    #[test]
    fn test_format_stat_round_trips() {
        for n in [0u64, 7, 999, 1_000, 65_536, 987_654_321] {
            let formatted = format_stat(Some(n as f64));
            let parsed: u64 = formatted.replace(',', "").parse().unwrap();
            assert_eq!(parsed, n);
        }
    }

    #[test]
    fn test_format_stat_placeholder() {
        assert_eq!(format_stat(None), PLACEHOLDER);
        assert_eq!(format_stat(Some(f64::NAN)), PLACEHOLDER);
        assert_eq!(format_stat(Some(f64::INFINITY)), PLACEHOLDER);
        assert_eq!(format_stat(Some(-1.0)), PLACEHOLDER);
    }

    #[test]
    fn test_sort_by_cases_descending_and_stable() {
        let input = vec![country("A", 50.0), country("B", 200.0), country("C", 50.0)];
        let sorted = sort_by_cases(&input);

        let names: Vec<&str> = sorted.iter().map(|c| c.country.as_str()).collect();
        // Ties keep input order: A before C
        assert_eq!(names, vec!["B", "A", "C"]);

        // Input untouched
        assert_eq!(input[0].country, "A");

        // Permutation with non-increasing counts
        assert_eq!(sorted.len(), input.len());
        for pair in sorted.windows(2) {
            assert!(pair[0].cases >= pair[1].cases);
        }
    }

    #[test]
    fn test_daily_deltas() {
        let date = |d: u32| NaiveDate::from_ymd_opt(2021, 6, d).unwrap();
        let series = vec![(date(1), 100.0), (date(2), 150.0), (date(3), 140.0)];

        let deltas = daily_deltas(&series);
        assert_eq!(deltas, vec![(date(2), 50.0), (date(3), -10.0)]);
        assert!(daily_deltas(&series[..1]).is_empty());
    }
}
