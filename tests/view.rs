#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use kekatime::libs::controller::{FetchStatus, TickerView};
    use kekatime::libs::metrics::Checkout;
    use kekatime::libs::settings::Settings;
    use kekatime::libs::time::ClockFormat;
    use kekatime::libs::view::View;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 3).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    fn running(first_punch: Option<NaiveDateTime>) -> TickerView {
        TickerView {
            running_gross: Duration::hours(2),
            running_effective: Duration::hours(2),
            breaks: Duration::zero(),
            is_punched_in: first_punch.is_some(),
            expected_checkout: Checkout::At(at(17, 35)),
            first_punch,
        }
    }

    fn settings(clock_format: ClockFormat) -> Settings {
        Settings {
            clock_format,
            ..Settings::default()
        }
    }

    #[test]
    fn test_check_in_follows_clock_format() {
        let view = running(Some(at(9, 5)));
        assert_eq!(View::check_in(&view, &settings(ClockFormat::H24)), "09:05:00");
        assert_eq!(View::check_in(&view, &settings(ClockFormat::H12)), "9:05:00 AM");
    }

    #[test]
    fn test_check_in_placeholder_before_first_punch() {
        assert_eq!(View::check_in(&running(None), &settings(ClockFormat::H24)), "--");
    }

    #[test]
    fn test_chip_line_shows_check_in() {
        let line = View::chip_line(&running(Some(at(9, 5))), &settings(ClockFormat::H24), &FetchStatus::Fresh);
        assert!(line.starts_with("● in 09:05:00"), "{}", line);
        assert!(line.contains("checkout 17:35:00"), "{}", line);
    }

    #[test]
    fn test_chip_line_flags_unavailable_data() {
        let view = running(Some(at(9, 5)));
        let settings = settings(ClockFormat::H24);

        let failed = View::chip_line(&view, &settings, &FetchStatus::Unavailable("HTTP 503".to_string()));
        assert!(failed.starts_with("⚠️ ● in 09:05:00"), "{}", failed);

        for status in [FetchStatus::Idle, FetchStatus::Fresh] {
            assert!(!View::chip_line(&view, &settings, &status).contains('⚠'));
        }
    }
}
