//! Periodic statistics refresh for the dashboard route.
//!
//! DESIGN
//! ======
//! `start` arms a single interval timer, and only on the dashboard route.
//! Each tick spawns one fetch-and-project cycle. A tick or a manual
//! [`StatsPoller::refresh`] that arrives while a cycle is still waiting on the
//! network is skipped, so at most one stats request is outstanding and an
//! older response can never land after a newer one.
//!
//! ERROR HANDLING
//! ==============
//! Failed cycles are logged and otherwise ignored; the next tick retries on
//! its own schedule with no backoff. Nothing is surfaced to the user.

#[cfg(test)]
#[path = "poller_test.rs"]
mod poller_test;

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use futures::task::{LocalSpawn, LocalSpawnExt, SpawnError};
use futures::{Stream, StreamExt, pin_mut};

use super::snapshot::{StatField, StatsSnapshot};
use crate::config::RuntimeConfig;
use crate::net::api::{ApiError, JsonTransport, decode};

/// Page elements that display the counters.
pub trait StatsBoard {
    /// Set the text of the element tagged for `field`.
    ///
    /// Returns `false` when the page has no such element.
    fn set_stat(&self, field: StatField, text: &str) -> bool;
}

/// Source of periodic timer ticks.
pub trait Ticker {
    type Ticks: Stream<Item = ()> + 'static;

    fn every(&self, period: Duration) -> Self::Ticks;
}

/// Result of [`StatsPoller::start`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollStart {
    Armed,
    NotDashboard,
    AlreadyArmed,
}

struct PollCycle<T, B> {
    transport: T,
    board: B,
    endpoint: String,
    in_flight: Cell<bool>,
}

/// Clears the in-flight flag when a cycle ends or is dropped.
struct InFlight<'a>(&'a Cell<bool>);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<T: JsonTransport, B: StatsBoard> PollCycle<T, B> {
    /// Run one cycle, or return `None` if another is still outstanding.
    async fn run(&self) -> Option<Result<StatsSnapshot, ApiError>> {
        if self.in_flight.replace(true) {
            return None;
        }
        let _flag = InFlight(&self.in_flight);
        Some(self.fetch_and_project().await)
    }

    async fn fetch_and_project(&self) -> Result<StatsSnapshot, ApiError> {
        let body = self.transport.get_json(&self.endpoint).await?;
        let snapshot: StatsSnapshot = decode(body)?;
        project(&self.board, &snapshot);
        Ok(snapshot)
    }
}

fn project<B: StatsBoard>(board: &B, snapshot: &StatsSnapshot) {
    for field in StatField::ALL {
        if !board.set_stat(field, &snapshot.get(field).to_string()) {
            log::debug!("no element for stat {field}");
        }
    }
}

pub struct StatsPoller<T, B, K, P> {
    cycle: Rc<PollCycle<T, B>>,
    ticker: K,
    spawner: P,
    config: RuntimeConfig,
    armed: Cell<bool>,
}

impl<T, B, K, P> StatsPoller<T, B, K, P>
where
    T: JsonTransport + 'static,
    B: StatsBoard + 'static,
    K: Ticker,
    P: LocalSpawn + Clone + 'static,
{
    #[must_use]
    pub fn new(transport: T, board: B, ticker: K, spawner: P, config: &RuntimeConfig) -> Self {
        Self {
            cycle: Rc::new(PollCycle {
                transport,
                board,
                endpoint: config.stats_endpoint.clone(),
                in_flight: Cell::new(false),
            }),
            ticker,
            spawner,
            config: config.clone(),
            armed: Cell::new(false),
        }
    }

    /// Arm the refresh timer with the configured interval.
    ///
    /// # Errors
    ///
    /// Returns [`SpawnError`] if the tick loop cannot be scheduled.
    pub fn start(&self, current_path: &str) -> Result<PollStart, SpawnError> {
        self.start_with_interval(current_path, self.config.poll_interval())
    }

    /// Arm the refresh timer if `current_path` is the dashboard route.
    ///
    /// # Errors
    ///
    /// Returns [`SpawnError`] if the tick loop cannot be scheduled.
    pub fn start_with_interval(&self, current_path: &str, interval: Duration) -> Result<PollStart, SpawnError> {
        if !self.config.is_dashboard(current_path) {
            log::debug!("stats refresh not armed on {current_path}");
            return Ok(PollStart::NotDashboard);
        }
        if self.armed.replace(true) {
            return Ok(PollStart::AlreadyArmed);
        }

        let ticks = self.ticker.every(interval);
        let cycle = Rc::clone(&self.cycle);
        let spawner = self.spawner.clone();
        let scheduled = self.spawner.spawn_local(async move {
            pin_mut!(ticks);
            while ticks.next().await.is_some() {
                if cycle.in_flight.get() {
                    log::debug!("stats refresh still in flight, skipping tick");
                    continue;
                }
                let task = Rc::clone(&cycle);
                let spawned = spawner.spawn_local(async move {
                    match task.run().await {
                        None => log::debug!("stats refresh still in flight, skipping tick"),
                        Some(Err(err)) => log::warn!("failed to update stats: {err}"),
                        Some(Ok(_)) => {}
                    }
                });
                if let Err(err) = spawned {
                    log::error!("failed to schedule stats refresh: {err}");
                }
            }
        });
        if let Err(err) = scheduled {
            self.armed.set(false);
            return Err(err);
        }

        log::info!("stats refresh armed every {}ms", interval.as_millis());
        Ok(PollStart::Armed)
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.get()
    }

    /// Fetch the statistics once and write them into the page.
    ///
    /// Works whether or not the timer is armed. Returns `Ok(None)` without
    /// fetching when a cycle is already outstanding; that cycle's response
    /// updates the page.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode failure.
    pub async fn refresh(&self) -> Result<Option<StatsSnapshot>, ApiError> {
        self.cycle.run().await.transpose()
    }
}
