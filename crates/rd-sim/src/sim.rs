//! The `Sim` struct and its event loop.

use tracing::info;

use rd_core::Tick;
use rd_dispatch::Dispatcher;
use rd_event::{Event, EventQueue};
use rd_monitor::{Monitor, Report};

use crate::{SimConfig, SimError, SimObserver, SimResult};

/// The simulation runner.
///
/// Owns all state for one run: the pending events, the dispatcher (and
/// through it every driver and passenger), and the monitor.  Nothing leaks
/// between runs.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub config: SimConfig,

    /// Timestamp of the most recently processed event.
    pub now: Tick,

    pub queue: EventQueue,

    pub dispatcher: Dispatcher,

    pub monitor: Monitor,

    pub(crate) processed: u64,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Process events until the queue is empty or the next event lies past
    /// `config.end_tick`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(
            queued = self.queue.len(),
            drivers = self.dispatcher.fleet().driver_count(),
            passengers = self.dispatcher.fleet().passenger_count(),
            "simulation starting"
        );
        while self.step(observer)?.is_some() {}
        observer.on_sim_end(self.now, &self.monitor);
        info!(
            now = %self.now,
            processed = self.processed,
            remaining = self.queue.len(),
            "simulation finished"
        );
        Ok(())
    }

    /// Pop the earliest event, run it, and queue what it produced.
    ///
    /// Returns the event that ran, or `None` if nothing is left inside the
    /// horizon.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Option<Event>> {
        match self.queue.next_tick() {
            Some(tick) if self.config.admits(tick) => {}
            _ => return Ok(None),
        }
        let Some(event) = self.queue.pop() else {
            return Ok(None);
        };

        self.now = event.timestamp();
        let successors = event.run(&mut self.dispatcher, &mut self.monitor);
        self.processed += 1;
        observer.on_event(&event, &successors, self.dispatcher.fleet());

        // All or nothing: a rejected successor leaves the queue untouched.
        if let Some(stale) = successors.iter().find(|e| e.timestamp() < self.now) {
            return Err(SimError::EventInPast { now: self.now, scheduled: stale.timestamp() });
        }
        self.queue.extend(successors);
        Ok(Some(event))
    }

    /// Queue an event.  Events earlier than the current time are rejected.
    pub fn schedule(&mut self, event: Event) -> SimResult<()> {
        let scheduled = event.timestamp();
        if scheduled < self.now {
            return Err(SimError::EventInPast { now: self.now, scheduled });
        }
        self.queue.push(event);
        Ok(())
    }

    /// Summary statistics over everything recorded so far.
    pub fn report(&self) -> SimResult<Report> {
        Ok(self.monitor.report()?)
    }

    /// Number of events run so far.
    pub fn processed(&self) -> u64 {
        self.processed
    }
}
