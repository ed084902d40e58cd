#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use kekatime::libs::metrics::compute_metrics;
    use kekatime::libs::punch::PunchEvent;
    use kekatime::libs::settings::Settings;
    use kekatime::libs::ticker::{next_tick_delay, run, Ticker};
    use std::cell::Cell;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 3).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_idle_until_reseeded() {
        let mut ticker = Ticker::new();
        assert!(!ticker.is_running());
        assert!(ticker.tick(at(9, 0, 0)).is_none());
        assert!(ticker.reading().is_none());
    }

    #[test]
    fn test_reseed_matches_snapshot() {
        let events = vec![
            PunchEvent::punch_in(at(9, 0, 0)),
            PunchEvent::punch_out(at(10, 0, 0)),
            PunchEvent::punch_in(at(10, 30, 0)),
        ];
        let now = at(11, 0, 0);
        let snapshot = compute_metrics(&events, now, &Settings::default());

        let mut ticker = Ticker::new();
        ticker.reseed(&snapshot, now);
        let reading = ticker.reading().unwrap();

        assert_eq!(reading.running_gross, snapshot.gross);
        assert_eq!(reading.running_effective, snapshot.effective);
        assert_eq!(reading.breaks, snapshot.breaks);
        assert_eq!(ticker.state().unwrap().last_tick, now);
    }

    #[test]
    fn test_tick_advances_effective_only_while_punched_in() {
        let now = at(9, 30, 0);
        let punched_in = compute_metrics(&[PunchEvent::punch_in(at(9, 0, 0))], now, &Settings::default());
        let punched_out = compute_metrics(
            &[PunchEvent::punch_in(at(9, 0, 0)), PunchEvent::punch_out(at(9, 20, 0))],
            now,
            &Settings::default(),
        );

        let mut ticker = Ticker::new();
        ticker.reseed(&punched_in, now);
        let reading = ticker.tick(at(9, 30, 5)).unwrap();
        assert_eq!(reading.running_gross, Duration::minutes(30) + Duration::seconds(5));
        assert_eq!(reading.running_effective, Duration::minutes(30) + Duration::seconds(5));

        ticker.reseed(&punched_out, now);
        let reading = ticker.tick(at(9, 30, 5)).unwrap();
        assert_eq!(reading.running_gross, Duration::minutes(20) + Duration::seconds(5));
        assert_eq!(reading.running_effective, Duration::minutes(20));
        assert_eq!(reading.breaks, Duration::seconds(5));
    }

    #[test]
    fn test_backwards_clock_step_is_ignored() {
        let now = at(9, 30, 0);
        let snapshot = compute_metrics(&[PunchEvent::punch_in(at(9, 0, 0))], now, &Settings::default());

        let mut ticker = Ticker::new();
        ticker.reseed(&snapshot, now);
        let reading = ticker.tick(at(9, 29, 0)).unwrap();
        assert_eq!(reading.running_gross, Duration::minutes(30));

        // counting resumes from the new clock reading
        let reading = ticker.tick(at(9, 29, 1)).unwrap();
        assert_eq!(reading.running_gross, Duration::minutes(30) + Duration::seconds(1));
    }

    #[test]
    fn test_next_tick_delay_aligns_to_second_boundary() {
        let base = at(9, 0, 0);
        assert_eq!(next_tick_delay(base), std::time::Duration::from_millis(1000));
        assert_eq!(next_tick_delay(base + Duration::milliseconds(250)), std::time::Duration::from_millis(750));
        assert_eq!(next_tick_delay(base + Duration::milliseconds(999)), std::time::Duration::from_millis(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_stops_on_shutdown() {
        let ticks = Cell::new(0);
        let counter = &ticks;
        let shutdown = tokio::time::sleep(std::time::Duration::from_millis(3_500));

        run(|| at(9, 0, 0), move || async move { counter.set(counter.get() + 1) }, shutdown).await;

        assert_eq!(ticks.get(), 3);
    }
}
