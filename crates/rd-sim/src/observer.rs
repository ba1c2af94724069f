//! Simulation observer trait for progress reporting and data collection.

use rd_agent::Fleet;
use rd_core::Tick;
use rd_event::Event;
use rd_monitor::Monitor;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] and
/// [`Sim::step`][crate::Sim::step].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_event(&mut self, event: &Event, successors: &[Event], _fleet: &Fleet) {
///         println!("{event} → {} new events", successors.len());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after `event` ran, with the events it scheduled.  `fleet`
    /// reflects the state after the transition.
    fn on_event(&mut self, _event: &Event, _successors: &[Event], _fleet: &Fleet) {}

    /// Called once when `run` stops, either because the queue is empty or
    /// because the next event lies past `end_tick`.
    fn on_sim_end(&mut self, _final_tick: Tick, _monitor: &Monitor) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
