#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use kekatime::libs::time::{format_break_minutes, format_clock, format_duration, ms_to_hms, ClockFormat, Hms};

    #[test]
    fn test_ms_to_hms_floors() {
        assert_eq!(ms_to_hms(3_725_999), Hms { h: 1, m: 2, s: 5 });
        assert_eq!(ms_to_hms(999), Hms { h: 0, m: 0, s: 0 });
    }

    #[test]
    fn test_negative_durations_are_zero() {
        assert_eq!(ms_to_hms(-5_000), Hms { h: 0, m: 0, s: 0 });
        assert_eq!(format_duration(&Duration::seconds(-30)), "00:00:00");
        assert_eq!(format_break_minutes(&Duration::minutes(-3)), "0 min");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(&(Duration::hours(8) + Duration::minutes(30))), "08:30:00");
        assert_eq!(format_duration(&Duration::hours(27)), "27:00:00");
    }

    #[test]
    fn test_format_break_minutes() {
        assert_eq!(format_break_minutes(&Duration::seconds(45 * 60 + 59)), "45 min");
    }

    #[test]
    fn test_format_clock() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let midnight = day.and_hms_opt(0, 7, 1).unwrap();
        let noon = day.and_hms_opt(12, 0, 0).unwrap();

        assert_eq!(format_clock(&midnight, ClockFormat::H12), "12:07:01 AM");
        assert_eq!(format_clock(&midnight, ClockFormat::H24), "00:07:01");
        assert_eq!(format_clock(&noon, ClockFormat::H12), "12:00:00 PM");
    }

    #[test]
    fn test_clock_format_from_str() {
        assert_eq!("24h".parse::<ClockFormat>(), Ok(ClockFormat::H24));
        assert_eq!("12H".parse::<ClockFormat>(), Ok(ClockFormat::H12));
        assert!("36h".parse::<ClockFormat>().is_err());
    }
}
