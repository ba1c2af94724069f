//! The `Monitor`: an append-only activity log keyed by (category, actor).
//!
//! # Statistics
//!
//! ```text
//! wait time       = activity[1].time − activity[0].time   per passenger with ≥ 2 entries
//! total distance  = Σ |loc[i+1] − loc[i]|                 per driver, all consecutive pairs
//! trip distance   = Σ |loc[i+1] − loc[i]|                 per driver, pairs (Pickup, Dropoff)
//! ```
//!
//! Wait time is averaged over passengers that stopped waiting.  Both
//! distances are averaged over *every* driver with recorded activity, so
//! drivers that never completed a trip pull the trip average down.

use std::fmt;

use rustc_hash::FxHashMap;

use rd_core::{Location, Tick};

use crate::{Activity, Category, Description, MonitorError, MonitorResult};

/// Aggregate statistics over a finished run.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    pub average_passenger_wait_time:   f64,
    pub average_driver_total_distance: f64,
    pub average_driver_trip_distance:  f64,
}

type ActorLog = FxHashMap<String, Vec<Activity>>;

#[derive(Debug, Default)]
pub struct Monitor {
    passengers: ActorLog,
    drivers:    ActorLog,
}

impl Monitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an activity to `actor`'s log, creating the log on first use.
    pub fn notify(
        &mut self,
        time:        Tick,
        category:    Category,
        description: Description,
        actor:       &str,
        location:    Location,
    ) {
        let activity = Activity {
            time,
            description,
            actor: actor.to_owned(),
            location,
        };
        self.log_mut(category)
            .entry(activity.actor.clone())
            .or_default()
            .push(activity);
    }

    /// Activities recorded for `actor`, oldest first.  Empty if unknown.
    pub fn activities(&self, category: Category, actor: &str) -> &[Activity] {
        self.log(category).get(actor).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct actors with at least one activity.
    pub fn actor_count(&self, category: Category) -> usize {
        self.log(category).len()
    }

    /// Total number of recorded activities in `category`.
    pub fn activity_count(&self, category: Category) -> usize {
        self.log(category).values().map(Vec::len).sum()
    }

    // ── Statistics ────────────────────────────────────────────────────────

    /// All three statistics.  Fails if any of them would average over an
    /// empty set.
    pub fn report(&self) -> MonitorResult<Report> {
        Ok(Report {
            average_passenger_wait_time:   self.average_wait_time()?,
            average_driver_total_distance: self.average_total_distance()?,
            average_driver_trip_distance:  self.average_trip_distance()?,
        })
    }

    /// Mean time between a passenger's request and their pickup or cancel.
    pub fn average_wait_time(&self) -> MonitorResult<f64> {
        let waits: Vec<u64> = self
            .passengers
            .values()
            .filter(|log| log.len() >= 2)
            .map(|log| log[1].time.since(log[0].time))
            .collect();
        if waits.is_empty() {
            return Err(MonitorError::NoResolvedPassengers);
        }
        Ok(waits.iter().sum::<u64>() as f64 / waits.len() as f64)
    }

    /// Mean distance covered per driver between consecutive activities.
    pub fn average_total_distance(&self) -> MonitorResult<f64> {
        self.average_over_drivers(|_, _| true)
    }

    /// Mean distance covered per driver with a passenger on board.
    pub fn average_trip_distance(&self) -> MonitorResult<f64> {
        self.average_over_drivers(|from, to| {
            from.description == Description::Pickup && to.description == Description::Dropoff
        })
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn average_over_drivers<F>(&self, counts: F) -> MonitorResult<f64>
    where
        F: Fn(&Activity, &Activity) -> bool,
    {
        if self.drivers.is_empty() {
            return Err(MonitorError::NoDrivers);
        }
        let total: u64 = self
            .drivers
            .values()
            .flat_map(|log| log.windows(2))
            .filter(|pair| counts(&pair[0], &pair[1]))
            .map(|pair| pair[0].location.distance_to(pair[1].location))
            .sum();
        Ok(total as f64 / self.drivers.len() as f64)
    }

    fn log(&self, category: Category) -> &ActorLog {
        match category {
            Category::Passenger => &self.passengers,
            Category::Driver => &self.drivers,
        }
    }

    fn log_mut(&mut self, category: Category) -> &mut ActorLog {
        match category {
            Category::Passenger => &mut self.passengers,
            Category::Driver => &mut self.drivers,
        }
    }
}

impl fmt::Display for Monitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Monitor ({} drivers, {} passengers)",
            self.drivers.len(),
            self.passengers.len()
        )
    }
}
