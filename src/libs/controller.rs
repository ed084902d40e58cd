//! Session controller: the single owner of cached punch data, ticker counters
//! and the notification latch.
//!
//! ## Fetch policy
//!
//! ```text
//! get_snapshot(force = false)
//!   ├─ fetch in flight          → snapshot from the current cache (coalesced)
//!   ├─ cache younger than 5 min → snapshot from the cache
//!   │  (age counts from when its request was issued)
//!   └─ otherwise                → fetch, write cache, reseed ticker
//! get_snapshot(force = true)    → always fetch
//! ```
//!
//! A failed fetch never clears good data: the status turns
//! [`FetchStatus::Unavailable`] and the previous cache keeps being served.
//!
//! ## Out-of-order responses
//!
//! Each fetch takes a request number. A response is written only if its
//! number is greater than that of the response already cached, so the most
//! recently *requested* data wins: a slow normal refresh landing after a newer
//! forced refresh is discarded.
//!
//! ## Locking
//!
//! State sits behind one mutex that is never held across an `.await`; several
//! requests may be driven concurrently on the same task and only interleave at
//! the fetch boundaries.

use crate::api::{AttendanceSource, FetchError};
use crate::libs::clock::{Clock, SystemClock};
use crate::libs::messages::Message;
use crate::libs::metrics::{compute_metrics, Checkout, MetricsSnapshot};
use crate::libs::notify::NotificationSink;
use crate::libs::progress::{progress, NotificationLatch, Progress};
use crate::libs::punch::{PremiseGroup, PunchLog, PunchRecord};
use crate::libs::settings::Settings;
use crate::libs::ticker::{Ticker, TickerReading};
use crate::{msg_debug, msg_error, msg_warning};
use chrono::{Duration, NaiveDateTime};
use parking_lot::Mutex;

/// How long fetched records satisfy non-forced requests.
pub const FRESHNESS_WINDOW_SECS: i64 = 5 * 60;

/// Outcome of the most recent data fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// Nothing fetched yet.
    #[default]
    Idle,
    Fresh,
    /// The last fetch failed; earlier data, if any, is still served.
    Unavailable(String),
}

/// What the chip renders every second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickerView {
    pub running_gross: Duration,
    pub running_effective: Duration,
    pub breaks: Duration,
    pub is_punched_in: bool,
    pub expected_checkout: Checkout,
    /// Check-in time of the day, if any IN was punched.
    pub first_punch: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
struct CachedDay {
    records: Vec<PunchRecord>,
    requested_at: NaiveDateTime,
    request: u64,
}

#[derive(Debug, Default)]
struct ControllerState {
    settings: Settings,
    cache: Option<CachedDay>,
    in_flight: usize,
    requests: u64,
    /// Responses to requests up to this number are dropped (set on reset).
    discard_up_to: u64,
    status: FetchStatus,
    ticker: Ticker,
    latch: NotificationLatch,
    punch_badge: Option<bool>,
}

impl ControllerState {
    fn snapshot_at(&self, now: NaiveDateTime) -> MetricsSnapshot {
        match &self.cache {
            Some(day) => compute_metrics(&day.records.normalize(), now, &self.settings),
            None => MetricsSnapshot::empty(),
        }
    }

    fn is_fresh(&self, now: NaiveDateTime) -> bool {
        self.cache
            .as_ref()
            .is_some_and(|day| now - day.requested_at < Duration::seconds(FRESHNESS_WINDOW_SECS))
    }

    fn view(&self, reading: TickerReading, now: NaiveDateTime) -> TickerView {
        let snapshot = self.snapshot_at(now);
        TickerView {
            running_gross: reading.running_gross,
            running_effective: reading.running_effective,
            breaks: reading.breaks,
            is_punched_in: reading.is_punched_in,
            expected_checkout: snapshot.expected_checkout,
            first_punch: snapshot.first_punch,
        }
    }
}

pub struct SessionController<S, C = SystemClock> {
    source: S,
    clock: C,
    state: Mutex<ControllerState>,
}

impl<S: AttendanceSource> SessionController<S, SystemClock> {
    pub fn new(source: S, settings: Settings) -> Self {
        Self::with_clock(source, settings, SystemClock)
    }
}

impl<S: AttendanceSource, C: Clock> SessionController<S, C> {
    pub fn with_clock(source: S, settings: Settings, clock: C) -> Self {
        Self {
            source,
            clock,
            state: Mutex::new(ControllerState {
                settings: settings.validated(),
                ..ControllerState::default()
            }),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn settings(&self) -> Settings {
        self.state.lock().settings.clone()
    }

    pub fn status(&self) -> FetchStatus {
        self.state.lock().status.clone()
    }

    /// Clock-in state last reported by the portal, if known.
    pub fn punch_badge(&self) -> Option<bool> {
        self.state.lock().punch_badge
    }

    /// Cached records, grouped by premise for the details view.
    pub fn premises(&self) -> Vec<PremiseGroup> {
        match &self.state.lock().cache {
            Some(day) => day.records.by_premise(),
            None => Vec::new(),
        }
    }

    /// Returns the metrics of the day, fetching when the cache is missing,
    /// stale or `force` is set.
    pub async fn get_snapshot(&self, force: bool) -> MetricsSnapshot {
        let (request, requested_at) = {
            let mut state = self.state.lock();
            let now = self.clock.now();

            if !force && state.in_flight > 0 {
                msg_debug!(Message::FetchCoalesced);
                return state.snapshot_at(now);
            }
            if !force && state.is_fresh(now) {
                return state.snapshot_at(now);
            }

            state.in_flight += 1;
            state.requests += 1;
            msg_debug!(Message::FetchStarted(state.requests, force));
            (state.requests, now)
        };

        let result = self.source.fetch_punch_records(requested_at.date()).await;

        let written = {
            let mut state = self.state.lock();
            state.in_flight -= 1;
            match result {
                Ok(records) => {
                    let newest = state.cache.as_ref().map_or(state.discard_up_to, |day| day.request);
                    if request > newest {
                        state.cache = Some(CachedDay {
                            records,
                            requested_at,
                            request,
                        });
                        state.status = FetchStatus::Fresh;
                        true
                    } else {
                        msg_debug!(Message::StaleResponseDiscarded(request, newest));
                        false
                    }
                }
                Err(e) => {
                    if matches!(e, FetchError::Unauthorized) {
                        msg_warning!(Message::TokenRejected);
                    }
                    msg_warning!(Message::FetchFailed(e.to_string()));
                    state.status = FetchStatus::Unavailable(e.to_string());
                    false
                }
            }
        };

        if written {
            match self.source.fetch_punch_status().await {
                Ok(clocked_in) => self.state.lock().punch_badge = Some(clocked_in),
                Err(e) => msg_error!(Message::PunchStatusFailed(e.to_string())),
            }
        }

        let mut state = self.state.lock();
        let now = self.clock.now();
        let snapshot = state.snapshot_at(now);
        if written {
            state.ticker.reseed(&snapshot, now);
        }
        snapshot
    }

    /// Drops cached data and ticker counters, keeping the settings. Fetches
    /// still in flight are discarded when they land.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        let settings = state.settings.clone();
        *state = ControllerState {
            settings,
            in_flight: state.in_flight,
            requests: state.requests,
            discard_up_to: state.requests,
            ..ControllerState::default()
        };
    }

    /// Current ticker counters; `None` until the first successful fetch.
    pub fn get_ticker_view(&self) -> Option<TickerView> {
        let state = self.state.lock();
        let reading = state.ticker.reading()?;
        Some(state.view(reading, self.clock.now()))
    }

    /// Advances the ticker to now and returns the updated view.
    pub fn tick(&self) -> Option<TickerView> {
        let mut state = self.state.lock();
        let now = self.clock.now();
        let reading = state.ticker.tick(now)?;
        Some(state.view(reading, now))
    }

    /// Applies new settings and recomputes the metrics from the cache without fetching.
    pub fn on_settings_changed(&self, settings: Settings) -> Option<MetricsSnapshot> {
        let mut state = self.state.lock();
        state.settings = settings.validated();
        state.cache.as_ref()?;
        Some(state.snapshot_at(self.clock.now()))
    }

    pub fn get_progress(&self, effective: Duration) -> Progress {
        progress(effective, self.state.lock().settings.target())
    }

    /// Shows the completion notice through `sink` at most once per punched-in
    /// session. Returns `true` when a notice was shown.
    pub async fn notify_if_done<N: NotificationSink>(&self, sink: &mut N, view: &TickerView) -> bool {
        let pending = {
            let mut state = self.state.lock();
            let settings = state.settings.clone();
            state
                .latch
                .pending(view.running_gross, view.running_effective, view.is_punched_in, &settings)
        };
        if !pending || !sink.ensure_permission().await {
            return false;
        }

        let title = Message::WorkHoursCompletedTitle.to_string();
        let body = Message::WorkHoursCompletedBody.to_string();
        if let Err(e) = sink.show(&title, &body) {
            msg_error!(Message::NotificationFailed(e.to_string()));
            return false;
        }
        self.state.lock().latch.fire();
        true
    }
}
