//! Per-second live counters between metrics refreshes.
//!
//! Recomputing the metrics from the raw log every second is unnecessary: the
//! ticker advances two running counters by the real wall-clock delta since the
//! previous tick and trusts the punched-in flag of the last refresh.
//!
//! ```text
//!   reseed(snapshot, t0)          tick(t1)                tick(t2)
//!   gross     = snapshot.gross    gross     += t1 - t0    gross     += t2 - t1
//!   effective = snapshot.eff.     effective += t1 - t0    effective += t2 - t1
//!                                 (only while punched in)
//! ```
//!
//! Ticks are scheduled on wall-clock second boundaries: the next delay is
//! recomputed every time as `1000 - (now_ms mod 1000)`, so a late timer never
//! accumulates into drift.

use crate::libs::metrics::MetricsSnapshot;
use chrono::{Duration, NaiveDateTime, Timelike};
use std::future::Future;

const TICK_MS: u64 = 1_000;

/// Counters owned by a running ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickerState {
    pub running_gross: Duration,
    pub running_effective: Duration,
    pub last_tick: NaiveDateTime,
}

/// Ticker counters as seen by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickerReading {
    pub running_gross: Duration,
    pub running_effective: Duration,
    pub breaks: Duration,
    pub is_punched_in: bool,
}

/// Idle until the first reseed, then running for the rest of the session.
#[derive(Debug, Clone, Default)]
pub struct Ticker {
    state: Option<TickerState>,
    punched_in: bool,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<TickerState> {
        self.state
    }

    /// Synchronises the counters with a freshly computed snapshot.
    pub fn reseed(&mut self, snapshot: &MetricsSnapshot, now: NaiveDateTime) {
        self.state = Some(TickerState {
            running_gross: snapshot.gross,
            running_effective: snapshot.effective,
            last_tick: now,
        });
        self.punched_in = snapshot.is_punched_in;
    }

    /// Advances the counters by the time elapsed since the previous tick.
    ///
    /// Returns `None` while idle.
    pub fn tick(&mut self, now: NaiveDateTime) -> Option<TickerReading> {
        let punched_in = self.punched_in;
        let state = self.state.as_mut()?;

        // The wall clock may step backwards (NTP, suspend); counters only move forward.
        let delta = (now - state.last_tick).max(Duration::zero());
        state.last_tick = now;
        state.running_gross += delta;
        if punched_in {
            state.running_effective += delta;
        }
        self.reading()
    }

    pub fn reading(&self) -> Option<TickerReading> {
        self.state.map(|state| TickerReading {
            running_gross: state.running_gross,
            running_effective: state.running_effective,
            breaks: (state.running_gross - state.running_effective).max(Duration::zero()),
            is_punched_in: self.punched_in,
        })
    }
}

/// Delay until the next wall-clock second boundary.
pub fn next_tick_delay(now: NaiveDateTime) -> std::time::Duration {
    let ms_into_second = (now.nanosecond() / 1_000_000) as u64 % TICK_MS;
    std::time::Duration::from_millis(TICK_MS - ms_into_second)
}

/// Drives `on_tick` once per second until `shutdown` resolves.
///
/// `now` supplies the wall clock used for alignment. `on_tick` may await
/// (fetches, notifications); the following delay is computed after it returns.
pub async fn run<N, T, F, S>(now: N, mut on_tick: T, shutdown: S)
where
    N: Fn() -> NaiveDateTime,
    T: FnMut() -> F,
    F: Future<Output = ()>,
    S: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    loop {
        let delay = next_tick_delay(now());
        tokio::select! {
            _ = &mut shutdown => break,
            _ = tokio::time::sleep(delay) => on_tick().await,
        }
    }
}
