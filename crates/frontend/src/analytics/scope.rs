//! Filter scope: the (store, date range) pair that parameterizes every
//! analytics fetch.

use chrono::{DateTime, Duration, Months, SecondsFormat, Utc};

/// Relative date windows offered by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    Last7Days,
    Last30Days,
    Last90Days,
    Last6Months,
}

impl DateRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateRange::Last7Days => "7d",
            DateRange::Last30Days => "30d",
            DateRange::Last90Days => "90d",
            DateRange::Last6Months => "6m",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateRange::Last7Days => "Last 7 days",
            DateRange::Last30Days => "Last 30 days",
            DateRange::Last90Days => "Last 90 days",
            DateRange::Last6Months => "Last 6 months",
        }
    }

    pub fn all() -> Vec<DateRange> {
        vec![
            DateRange::Last7Days,
            DateRange::Last30Days,
            DateRange::Last90Days,
            DateRange::Last6Months,
        ]
    }

    /// Parse a range code. Unrecognized values fall back to the 30-day window.
    pub fn from_code_or_default(code: &str) -> Self {
        match code {
            "7d" => DateRange::Last7Days,
            "30d" => DateRange::Last30Days,
            "90d" => DateRange::Last90Days,
            "6m" => DateRange::Last6Months,
            _ => DateRange::Last30Days,
        }
    }

    /// Resolve the window against a concrete "now": `(start, end)` with
    /// `start <= end == now`.
    pub fn window(&self, now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = match self {
            DateRange::Last7Days => now - Duration::days(7),
            DateRange::Last30Days => now - Duration::days(30),
            DateRange::Last90Days => now - Duration::days(90),
            DateRange::Last6Months => now
                .checked_sub_months(Months::new(6))
                .unwrap_or_else(|| now - Duration::days(183)),
        };
        (start, now)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterScope {
    /// String-encoded store id; seeded from the first store once the catalog
    /// has loaded.
    pub store_id: String,
    pub date_range: DateRange,
}

impl Default for FilterScope {
    fn default() -> Self {
        Self {
            store_id: "1".to_string(),
            date_range: DateRange::Last30Days,
        }
    }
}

impl FilterScope {
    /// Query-string tail shared by all four scoped fetches
    pub fn query_string(&self, now: DateTime<Utc>) -> String {
        let (start, end) = self.date_range.window(now);
        format!(
            "store_id={}&date_start={}&date_end={}",
            self.store_id,
            urlencoding::encode(&start.to_rfc3339_opts(SecondsFormat::Millis, true)),
            urlencoding::encode(&end.to_rfc3339_opts(SecondsFormat::Millis, true)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_seven_day_window() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        let (start, end) = DateRange::Last7Days.window(now);
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 8, 0, 0, 0).unwrap());
        assert_eq!(end, now);
    }

    #[test]
    fn test_six_month_window_uses_calendar_months() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 0).unwrap();
        let (start, _) = DateRange::Last6Months.window(now);
        assert_eq!(start, Utc.with_ymd_and_hms(2023, 9, 15, 12, 30, 0).unwrap());
    }

    #[test]
    fn test_start_never_exceeds_end() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        for range in DateRange::all() {
            let (start, end) = range.window(now);
            assert!(start <= end);
            assert_eq!(end, now);
        }
    }

    #[test]
    fn test_unrecognized_code_falls_back_to_thirty_days() {
        assert_eq!(DateRange::from_code_or_default("7d"), DateRange::Last7Days);
        assert_eq!(DateRange::from_code_or_default("6m"), DateRange::Last6Months);
        assert_eq!(
            DateRange::from_code_or_default("1y"),
            DateRange::Last30Days
        );
        assert_eq!(DateRange::from_code_or_default(""), DateRange::Last30Days);
    }

    #[test]
    fn test_query_string_contains_scope() {
        let scope = FilterScope {
            store_id: "3".to_string(),
            date_range: DateRange::Last7Days,
        };
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        let query = scope.query_string(now);
        assert!(query.starts_with("store_id=3&date_start="));
        assert!(query.contains("2024-03-08T00%3A00%3A00"));
        assert!(query.contains("&date_end="));
        assert!(query.contains("2024-03-15T00%3A00%3A00"));
    }
}
