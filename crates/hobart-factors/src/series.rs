//! Series preparation for momentum and charting.
//!
//! None of these helpers fail: unparsable dates sort last and keep their raw
//! text as a label, and non-finite values are filtered out.

use crate::normalize::to_number;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use hobart_data::PricePoint;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse an ISO-ish date or timestamp.
///
/// Offset timestamps keep their written wall-clock time; the offset is
/// dropped rather than converted to UTC.
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_local());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Price points sorted ascending by date.
///
/// Unparsable dates sort after every parsable one, by raw text. The sort is
/// stable, so duplicate dates keep their input order.
pub fn sort_by_date(points: &[PricePoint]) -> Vec<PricePoint> {
    let mut sorted = points.to_vec();
    sorted.sort_by_cached_key(|point| {
        let parsed = parse_date(&point.date);
        (parsed.is_none(), parsed, point.date.clone())
    });
    sorted
}

/// Closing prices of sorted points; absent closes become NaN so labels stay
/// aligned for [`filter_series`].
pub fn close_series(points: &[PricePoint]) -> (Vec<String>, Vec<f64>) {
    points
        .iter()
        .map(|point| {
            (
                point.date.clone(),
                to_number(point.close.as_ref()).unwrap_or(f64::NAN),
            )
        })
        .unzip()
}

/// Reduce `items` to at most `max_points` evenly spaced elements.
///
/// Indices are `round(i * (n - 1) / (max_points - 1))`, so the first and last
/// elements are always kept. `max_points == 0` yields nothing and
/// `max_points == 1` yields only the first element.
pub fn downsample<T: Clone>(items: &[T], max_points: usize) -> Vec<T> {
    let n = items.len();
    if n <= max_points {
        return items.to_vec();
    }
    match max_points {
        0 => Vec::new(),
        1 => items[..1].to_vec(),
        _ => {
            let step = (n - 1) as f64 / (max_points - 1) as f64;
            (0..max_points)
                .map(|i| (i as f64 * step).round() as usize)
                .map(|index| items[index.min(n - 1)].clone())
                .collect()
        }
    }
}

/// Drop non-finite values, keeping labels aligned.
///
/// Pairs beyond the shorter of the two inputs are ignored.
pub fn filter_series(labels: &[String], values: &[f64]) -> (Vec<String>, Vec<f64>) {
    labels
        .iter()
        .zip(values)
        .filter(|(_, value)| value.is_finite())
        .map(|(label, value)| (label.clone(), *value))
        .unzip()
}

/// Short chart label such as `Jan 5, 2024`.
///
/// Falls back to the first ten characters of the raw text.
pub fn format_date_label(raw: &str) -> String {
    parse_date(raw).map_or_else(
        || raw.chars().take(10).collect(),
        |date| date.format("%b %-d, %Y").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_downsample_keeps_endpoints() {
        let items: Vec<i32> = (1..=10).collect();
        let sampled = downsample(&items, 5);
        assert_eq!(sampled.len(), 5);
        assert_eq!(sampled.first(), Some(&1));
        assert_eq!(sampled.last(), Some(&10));
        assert!(sampled.windows(2).all(|w| w[0] < w[1]));
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(2, 2)]
    #[case(10, 10)]
    #[case(20, 10)]
    fn test_downsample_lengths(#[case] max_points: usize, #[case] expected: usize) {
        let items: Vec<i32> = (1..=10).collect();
        assert_eq!(downsample(&items, max_points).len(), expected);
    }

    #[test]
    fn test_downsample_single_point_is_first() {
        assert_eq!(downsample(&[7, 8, 9], 1), vec![7]);
    }

    #[test]
    fn test_filter_series_drops_non_finite() {
        let labels: Vec<String> = ["a", "b", "c", "d"].map(String::from).to_vec();
        let values = [1.0, f64::NAN, f64::INFINITY, 4.0];
        let (labels, values) = filter_series(&labels, &values);
        assert_eq!(labels, vec!["a", "d"]);
        assert_eq!(values, vec![1.0, 4.0]);
    }

    #[test]
    fn test_filter_series_length_mismatch() {
        let labels: Vec<String> = ["a", "b", "c"].map(String::from).to_vec();
        let (labels, values) = filter_series(&labels, &[1.0]);
        assert_eq!(labels, vec!["a"]);
        assert_eq!(values, vec![1.0]);
    }

    #[rstest]
    #[case("2024-01-05", "Jan 5, 2024")]
    #[case("2024-12-31T15:30:00Z", "Dec 31, 2024")]
    #[case("2024-12-31T20:00:00-08:00", "Dec 31, 2024")]
    #[case("2025-01-01T02:00:00+09:00", "Jan 1, 2025")]
    #[case("2024-03-09 16:00:00", "Mar 9, 2024")]
    #[case("20240704", "Jul 4, 2024")]
    #[case("not a date at all", "not a date")]
    #[case("Q3", "Q3")]
    fn test_format_date_label(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(format_date_label(raw), expected);
    }

    #[test]
    fn test_sort_by_date() {
        let points = vec![
            PricePoint::new("garbage", 3.0),
            PricePoint::new("2024-06-01", 2.0),
            PricePoint::new("2024-01-01", 1.0),
        ];
        let dates: Vec<_> = sort_by_date(&points)
            .into_iter()
            .map(|point| point.date)
            .collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-06-01", "garbage"]);
    }

    #[test]
    fn test_close_series_marks_missing_as_nan() {
        let mut missing = PricePoint::new("2024-01-02", 0.0);
        missing.close = None;
        let (labels, values) = close_series(&[PricePoint::new("2024-01-01", 5.0), missing]);
        assert_eq!(labels.len(), 2);
        assert!(values[1].is_nan());
    }
}
