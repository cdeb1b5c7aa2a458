#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate, Weekday};
    use tidbok::libs::clock::{diff_minutes, format_hm, format_hours, iso_week, week_window, year_week};

    #[test]
    fn test_diff_minutes_regular_day() {
        assert_eq!(diff_minutes("09:00", "17:30").unwrap(), 510);
        assert_eq!(diff_minutes("08:15", "08:45").unwrap(), 30);
    }

    #[test]
    fn test_diff_minutes_allows_negative_and_zero() {
        // Negative results are valid at this level; manual-entry validation
        // rejects them further up.
        assert_eq!(diff_minutes("17:00", "09:00").unwrap(), -480);
        assert_eq!(diff_minutes("12:00", "12:00").unwrap(), 0);
    }

    #[test]
    fn test_diff_minutes_rejects_garbage() {
        assert!(diff_minutes("nine", "17:00").is_err());
        assert!(diff_minutes("09:00", "25:99").is_err());
    }

    #[test]
    fn test_format_hm_zero_padding() {
        assert_eq!(format_hm(0), "00:00");
        assert_eq!(format_hm(5), "00:05");
        assert_eq!(format_hm(90), "01:30");
    }

    #[test]
    fn test_format_hm_does_not_wrap_hours() {
        assert_eq!(format_hm(1500), "25:00");
        assert_eq!(format_hm(24 * 60), "24:00");
    }

    #[test]
    fn test_format_hm_clamps_negative() {
        assert_eq!(format_hm(-30), "00:00");
    }

    #[test]
    fn test_format_hours_two_decimals() {
        assert_eq!(format_hours(90), "1.50");
        assert_eq!(format_hours(0), "0.00");
        assert_eq!(format_hours(125), "2.08");
    }

    #[test]
    fn test_iso_week_year_boundary() {
        // The first of January can belong to the previous ISO week-year.
        let date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        assert_eq!(iso_week(date), (2020, 53));
        assert_eq!(year_week(date), "2020-W53");
    }

    #[test]
    fn test_iso_week_mid_year() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(iso_week(date), (2024, 10));
        assert_eq!(year_week(date), "2024-W10");
    }

    #[test]
    fn test_year_week_zero_pads_single_digit_weeks() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert_eq!(year_week(date), "2024-W02");
    }

    #[test]
    fn test_week_window_starts_monday() {
        // 2024-03-07 is a Thursday.
        let reference = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let (monday, sunday) = week_window(reference);
        assert_eq!(monday, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
        assert_eq!(sunday, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert_eq!(monday.weekday(), Weekday::Mon);
        assert_eq!(sunday.weekday(), Weekday::Sun);
    }

    #[test]
    fn test_week_window_on_monday_and_sunday() {
        let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        assert_eq!(week_window(monday).0, monday);

        let sunday = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(week_window(sunday), (monday, sunday));
    }
}
