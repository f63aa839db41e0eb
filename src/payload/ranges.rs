//! Parser for the compact uptime-range string.

use crate::numeric::format_number;

/// Decoded `custom_uptime_ranges` value: one percentage per window day plus
/// the site's overall percentage.
///
/// The wire format is hyphen-joined percentages in window order with one
/// trailing overall value, e.g. `"95-100-98"` for a two-day window.
#[derive(Debug, Clone, PartialEq)]
pub struct UptimeRanges {
    /// Per-day percentages, index-aligned with the window. Always exactly
    /// `day_count` entries; positions the wire string did not cover read 0.
    pub daily: Vec<f64>,
    /// Overall percentage for the whole site.
    pub overall: f64,
}

impl UptimeRanges {
    /// Parse the wire string, sizing the per-day list to `day_count`.
    ///
    /// A missing or malformed string degrades to zeros; surplus tokens
    /// beyond the window are dropped.
    pub fn parse(raw: Option<&str>, day_count: usize) -> Self {
        let mut tokens: Vec<&str> = raw.unwrap_or("").split('-').collect();

        // The trailing token is the overall percent, not a day value.
        let overall = tokens.pop().map(format_number).unwrap_or(0.0);

        let mut daily: Vec<f64> = tokens.into_iter().map(format_number).collect();
        daily.resize(day_count, 0.0);

        Self { daily, overall }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_daily_and_overall() {
        let ranges = UptimeRanges::parse(Some("95-100-98"), 2);
        assert_eq!(ranges.daily, vec![95.0, 100.0]);
        assert_eq!(ranges.overall, 98.0);
    }

    #[test]
    fn test_parse_missing_string() {
        let ranges = UptimeRanges::parse(None, 3);
        assert_eq!(ranges.daily, vec![0.0, 0.0, 0.0]);
        assert_eq!(ranges.overall, 0.0);
    }

    #[test]
    fn test_parse_short_string_pads_with_zero() {
        // Only one day value plus the overall; the second day reads 0.
        let ranges = UptimeRanges::parse(Some("99.5-98"), 2);
        assert_eq!(ranges.daily, vec![99.5, 0.0]);
        assert_eq!(ranges.overall, 98.0);
    }

    #[test]
    fn test_parse_long_string_drops_surplus() {
        let ranges = UptimeRanges::parse(Some("1-2-3-4-50"), 2);
        assert_eq!(ranges.daily, vec![1.0, 2.0]);
        assert_eq!(ranges.overall, 50.0);
    }

    #[test]
    fn test_parse_garbage_tokens_read_zero() {
        let ranges = UptimeRanges::parse(Some("abc-100-xyz"), 2);
        assert_eq!(ranges.daily, vec![0.0, 100.0]);
        assert_eq!(ranges.overall, 0.0);
    }

    #[test]
    fn test_parse_empty_string() {
        // "" splits into a single empty token which becomes the overall
        let ranges = UptimeRanges::parse(Some(""), 2);
        assert_eq!(ranges.daily, vec![0.0, 0.0]);
        assert_eq!(ranges.overall, 0.0);
    }
}
