//! The `Dispatcher` and its matching rules.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use tracing::debug;

use rd_agent::Fleet;
use rd_core::{DriverId, PassengerId};

/// Holds the registered drivers and the FIFO list of unmatched passengers.
///
/// The dispatcher also owns the [`Fleet`] so that every event transition can
/// reach entity state through one `&mut Dispatcher`.
///
/// # Invariants
///
/// - Every passenger on the waiting list has status `Waiting`.
/// - A passenger leaves the waiting list at most once (matched or cancelled).
/// - `drivers` lists each registered driver exactly once, in registration
///   order; that order breaks ties between equally fast drivers.
#[derive(Debug, Default)]
pub struct Dispatcher {
    fleet:      Fleet,
    drivers:    Vec<DriverId>,
    registered: FxHashSet<DriverId>,
    waiting:    VecDeque<PassengerId>,
}

impl Dispatcher {
    pub fn new(fleet: Fleet) -> Self {
        Self {
            fleet,
            ..Self::default()
        }
    }

    // ── Matching ──────────────────────────────────────────────────────────

    /// Find a driver for `passenger`.
    ///
    /// Among registered idle drivers, picks the one with the smallest travel
    /// time to the passenger's origin; the earliest-registered driver wins a
    /// tie.  The chosen driver is marked non-idle.  With no idle driver the
    /// passenger is appended to the waiting list and `None` is returned.
    pub fn request_driver(&mut self, passenger: PassengerId) -> Option<DriverId> {
        let rider = self.fleet.passenger(passenger);
        debug_assert!(rider.is_waiting(), "only waiting passengers can request a driver");
        let origin = rider.origin;

        let mut fastest: Option<(DriverId, u64)> = None;
        for &id in &self.drivers {
            let driver = self.fleet.driver(id);
            if !driver.is_idle {
                continue;
            }
            let eta = driver.travel_time(origin);
            match fastest {
                Some((_, best)) if best <= eta => {}
                _ => fastest = Some((id, eta)),
            }
        }

        match fastest {
            Some((id, eta)) => {
                self.fleet.driver_mut(id).is_idle = false;
                debug!(
                    passenger = %self.fleet.passenger(passenger).name,
                    driver = %self.fleet.driver(id).name,
                    eta,
                    "matched passenger to idle driver"
                );
                Some(id)
            }
            None => {
                self.waiting.push_back(passenger);
                debug!(
                    passenger = %self.fleet.passenger(passenger).name,
                    queue_len = self.waiting.len(),
                    "no idle driver; passenger waiting"
                );
                None
            }
        }
    }

    /// Register `driver` if it is new, then hand it the longest-waiting
    /// passenger, if any.
    ///
    /// Does not change the driver's state; the caller starts the drive.
    pub fn request_passenger(&mut self, driver: DriverId) -> Option<PassengerId> {
        self.register(driver);
        let passenger = self.waiting.pop_front()?;
        debug_assert!(
            self.fleet.passenger(passenger).is_waiting(),
            "waiting list held a passenger that is no longer waiting"
        );
        debug!(
            driver = %self.fleet.driver(driver).name,
            passenger = %self.fleet.passenger(passenger).name,
            "assigned waiting passenger to driver"
        );
        Some(passenger)
    }

    /// Remove `passenger` from the waiting list.  Unknown or already matched
    /// passengers are ignored.
    pub fn cancel_ride(&mut self, passenger: PassengerId) {
        if let Some(pos) = self.waiting.iter().position(|&p| p == passenger) {
            self.waiting.remove(pos);
        }
    }

    /// Add `driver` to the registry.  Returns `false` if it was already
    /// registered.
    pub fn register(&mut self, driver: DriverId) -> bool {
        if !self.registered.insert(driver) {
            return false;
        }
        self.drivers.push(driver);
        debug!(driver = %self.fleet.driver(driver).name, "driver registered");
        true
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn fleet_mut(&mut self) -> &mut Fleet {
        &mut self.fleet
    }

    pub fn is_registered(&self, driver: DriverId) -> bool {
        self.registered.contains(&driver)
    }

    /// Registered drivers in registration order.
    pub fn registered_drivers(&self) -> &[DriverId] {
        &self.drivers
    }

    /// Waiting passengers, longest-waiting first.
    pub fn waiting_passengers(&self) -> impl Iterator<Item = PassengerId> + '_ {
        self.waiting.iter().copied()
    }

    pub fn waiting_count(&self) -> usize {
        self.waiting.len()
    }
}
