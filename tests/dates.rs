#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use dosa::libs::dates::{date_key, last_7_days, relative_time, to_date_key};

    const MINUTE_MS: i64 = 60_000;
    const HOUR_MS: i64 = 3_600_000;
    const DAY_MS: i64 = 86_400_000;

    #[test]
    fn test_date_key_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(date_key(date), "2025-03-07");
    }

    #[test]
    fn test_to_date_key_is_idempotent_on_canonical_input() {
        assert_eq!(to_date_key("2025-03-07").as_deref(), Some("2025-03-07"));
        assert_eq!(to_date_key(" 2025-12-31 ").as_deref(), Some("2025-12-31"));
        assert!(to_date_key("07/03/2025").is_none());
        assert!(to_date_key("not a date").is_none());
    }

    #[test]
    fn test_last_7_days_oldest_first() {
        let anchor = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let days = last_7_days(anchor);
        assert_eq!(days.len(), 7);
        assert_eq!(days.first().map(String::as_str), Some("2025-01-04"));
        assert_eq!(days.last().map(String::as_str), Some("2025-01-10"));
    }

    #[test]
    fn test_last_7_days_crosses_month_boundary() {
        let anchor = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        let days = last_7_days(anchor);
        assert_eq!(days.first().map(String::as_str), Some("2025-02-24"));
        assert_eq!(days.last().map(String::as_str), Some("2025-03-02"));
    }

    #[test]
    fn test_relative_time_just_now() {
        let now = 1_700_000_000_000;
        assert_eq!(relative_time(now, now), "Just now");
        assert_eq!(relative_time(now - 59_000, now), "Just now");
    }

    #[test]
    fn test_relative_time_minutes() {
        let now = 1_700_000_000_000;
        // 90 seconds rounds down to a single minute
        assert_eq!(relative_time(now - 90_000, now), "1m ago");
        assert_eq!(relative_time(now - 59 * MINUTE_MS, now), "59m ago");
    }

    #[test]
    fn test_relative_time_hour_boundary_is_half_open() {
        let now = 1_700_000_000_000;
        assert_eq!(relative_time(now - 60 * MINUTE_MS, now), "1h ago");
        assert_eq!(relative_time(now - 23 * HOUR_MS, now), "23h ago");
    }

    #[test]
    fn test_relative_time_days() {
        let now = 1_700_000_000_000;
        assert_eq!(relative_time(now - 24 * HOUR_MS, now), "1d ago");
        assert_eq!(relative_time(now - 6 * DAY_MS, now), "6d ago");
    }

    #[test]
    fn test_relative_time_falls_back_to_date() {
        let now = 1_700_000_000_000;
        let label = relative_time(now - 7 * DAY_MS, now);
        assert!(!label.ends_with("ago"), "expected a plain date, got {label}");
        assert!(!label.is_empty());
    }
}
