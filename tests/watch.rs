#[cfg(test)]
mod tests {
    use anyhow::Result;
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use kekatime::api::{AttendanceSource, FetchError};
    use kekatime::commands::watch::Watcher;
    use kekatime::libs::clock::Clock;
    use kekatime::libs::controller::{FetchStatus, SessionController};
    use kekatime::libs::notify::{NotificationSink, Permission};
    use kekatime::libs::punch::{PunchRecord, PunchStatus};
    use kekatime::libs::settings::Settings;
    use parking_lot::Mutex;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 3).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    fn morning() -> Vec<PunchRecord> {
        vec![PunchRecord::new(at(9, 0, 0), PunchStatus::In)]
    }

    #[derive(Clone)]
    struct ManualClock(Arc<Mutex<NaiveDateTime>>);

    impl ManualClock {
        fn advance(&self, by: Duration) {
            *self.0.lock() += by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> NaiveDateTime {
            *self.0.lock()
        }
    }

    /// Replays queued answers and moves the clock by `latency` on every fetch.
    struct SlowSource {
        clock: ManualClock,
        latency: Duration,
        answers: Mutex<VecDeque<Result<Vec<PunchRecord>, FetchError>>>,
        calls: AtomicUsize,
    }

    impl SlowSource {
        fn new(clock: &ManualClock, latency: Duration) -> Self {
            Self {
                clock: clock.clone(),
                latency,
                answers: Mutex::new(VecDeque::new()),
                calls: AtomicUsize::new(0),
            }
        }

        fn then(self, answer: Result<Vec<PunchRecord>, FetchError>) -> Self {
            self.answers.lock().push_back(answer);
            self
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl AttendanceSource for SlowSource {
        async fn fetch_punch_records(&self, _date: NaiveDate) -> Result<Vec<PunchRecord>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.clock.advance(self.latency);
            self.answers
                .lock()
                .pop_front()
                .unwrap_or_else(|| Err(FetchError::Other("unscripted fetch".to_string())))
        }

        async fn fetch_punch_status(&self) -> Result<bool, FetchError> {
            Ok(true)
        }
    }

    struct SilentSink;

    impl NotificationSink for SilentSink {
        fn permission(&self) -> Permission {
            Permission::Denied
        }

        async fn request_permission(&mut self) -> Permission {
            Permission::Denied
        }

        fn show(&mut self, _title: &str, _body: &str) -> Result<()> {
            Ok(())
        }
    }

    fn watcher(source: SlowSource, clock: &ManualClock) -> Watcher<SlowSource, ManualClock, SilentSink> {
        Watcher::new(
            SessionController::with_clock(source, Settings::default(), clock.clone()),
            SilentSink,
        )
    }

    fn calls(watcher: &Watcher<SlowSource, ManualClock, SilentSink>) -> usize {
        watcher.controller().source().calls()
    }

    #[tokio::test]
    async fn test_tick_revalidates_once_cache_is_stale() {
        let clock = ManualClock(Arc::new(Mutex::new(at(9, 30, 0))));
        let source = SlowSource::new(&clock, Duration::milliseconds(400))
            .then(Ok(morning()))
            .then(Ok(morning()));
        let watcher = watcher(source, &clock);

        assert!(watcher.on_tick().await.is_some());
        assert_eq!(calls(&watcher), 1);

        clock.advance(Duration::seconds(299));
        watcher.on_tick().await;
        assert_eq!(calls(&watcher), 1);

        clock.advance(Duration::seconds(1));
        watcher.on_tick().await;
        assert_eq!(calls(&watcher), 2);
    }

    #[tokio::test]
    async fn test_refresh_request_forces_fetch_on_next_tick() {
        let clock = ManualClock(Arc::new(Mutex::new(at(9, 30, 0))));
        let source = SlowSource::new(&clock, Duration::zero())
            .then(Ok(morning()))
            .then(Ok(morning()));
        let watcher = watcher(source, &clock);

        watcher.on_tick().await;
        clock.advance(Duration::seconds(1));
        watcher.on_tick().await;
        assert_eq!(calls(&watcher), 1);

        watcher.refresh_handle().store(true, Ordering::SeqCst);
        clock.advance(Duration::seconds(1));
        watcher.on_tick().await;
        assert_eq!(calls(&watcher), 2);

        clock.advance(Duration::seconds(1));
        watcher.on_tick().await;
        assert_eq!(calls(&watcher), 2);
    }

    #[tokio::test]
    async fn test_failed_refresh_marks_chip_unavailable() {
        let clock = ManualClock(Arc::new(Mutex::new(at(9, 30, 0))));
        let source = SlowSource::new(&clock, Duration::zero())
            .then(Ok(morning()))
            .then(Err(FetchError::Status(503)));
        let watcher = watcher(source, &clock);

        let healthy = watcher.on_tick().await.unwrap();
        assert!(!healthy.contains('⚠'), "{}", healthy);

        watcher.refresh_handle().store(true, Ordering::SeqCst);
        clock.advance(Duration::seconds(1));
        let degraded = watcher.on_tick().await.unwrap();

        assert!(matches!(watcher.controller().status(), FetchStatus::Unavailable(_)));
        assert!(degraded.starts_with("⚠️"), "{}", degraded);
    }

    #[tokio::test]
    async fn test_nothing_to_draw_before_first_successful_fetch() {
        let clock = ManualClock(Arc::new(Mutex::new(at(9, 30, 0))));
        let source = SlowSource::new(&clock, Duration::zero()).then(Err(FetchError::Unauthorized));
        let watcher = watcher(source, &clock);

        assert!(watcher.on_tick().await.is_none());
    }
}
