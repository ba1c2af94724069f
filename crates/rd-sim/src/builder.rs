//! Fluent builder for constructing a [`Sim`].

use rd_agent::Fleet;
use rd_core::Tick;
use rd_dispatch::Dispatcher;
use rd_event::{Event, EventQueue, Scenario};
use rd_monitor::Monitor;

use crate::{Sim, SimConfig, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(scenario)
///     .config(SimConfig { end_tick: Some(Tick(100)) })
///     .build()?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    fleet:  Fleet,
    events: Vec<Event>,
}

impl SimBuilder {
    pub fn new(scenario: Scenario) -> Self {
        Self::from_parts(scenario.fleet, scenario.events)
    }

    /// Build from a fleet and its initial events directly.
    pub fn from_parts(fleet: Fleet, events: Vec<Event>) -> Self {
        Self {
            config: SimConfig::default(),
            fleet,
            events,
        }
    }

    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    /// Check that every initial event refers to entities in the fleet and
    /// queue the events in the order given.
    pub fn build(self) -> SimResult<Sim> {
        for event in &self.events {
            let driver_ok = event
                .driver()
                .is_none_or(|d| d.index() < self.fleet.driver_count());
            let passenger_ok = event
                .passenger()
                .is_none_or(|p| p.index() < self.fleet.passenger_count());
            if !(driver_ok && passenger_ok) {
                return Err(SimError::UnknownEntity { event: event.to_string() });
            }
        }

        let queue: EventQueue = self.events.into_iter().collect();

        Ok(Sim {
            config:     self.config,
            now:        Tick::ZERO,
            queue,
            dispatcher: Dispatcher::new(self.fleet),
            monitor:    Monitor::new(),
            processed:  0,
        })
    }
}
