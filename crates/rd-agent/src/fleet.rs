//! The arena that owns every driver and passenger of a run.

use rustc_hash::FxHashMap;
use tracing::warn;

use rd_core::{DriverId, PassengerId, RdError, RdResult};

use crate::{Driver, Passenger};

/// Owns all entities; ids are slots into the two `Vec`s.
///
/// Names are interned so that the same external identity always resolves to
/// the same id.
#[derive(Default, Debug)]
pub struct Fleet {
    drivers:         Vec<Driver>,
    passengers:      Vec<Passenger>,
    driver_index:    FxHashMap<String, DriverId>,
    passenger_index: FxHashMap<String, PassengerId>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `driver`, or return the id of the existing driver with the same
    /// name.  The first definition of a name wins.
    pub fn add_driver(&mut self, driver: Driver) -> DriverId {
        if let Some(&id) = self.driver_index.get(&driver.name) {
            let existing = &self.drivers[id.index()];
            if existing.location != driver.location || existing.speed() != driver.speed() {
                warn!(
                    driver = %driver.name,
                    "driver redefined with a different location or speed; keeping the first"
                );
            }
            return id;
        }
        let id = DriverId(self.drivers.len() as u32);
        self.driver_index.insert(driver.name.clone(), id);
        self.drivers.push(driver);
        id
    }

    /// Insert `passenger`.  Passenger names must be unique.
    pub fn add_passenger(&mut self, passenger: Passenger) -> RdResult<PassengerId> {
        if self.passenger_index.contains_key(&passenger.name) {
            return Err(RdError::DuplicatePassenger(passenger.name));
        }
        let id = PassengerId(self.passengers.len() as u32);
        self.passenger_index.insert(passenger.name.clone(), id);
        self.passengers.push(passenger);
        Ok(id)
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// # Panics
    /// Panics if `id` was not issued by this fleet.
    #[inline]
    pub fn driver(&self, id: DriverId) -> &Driver {
        &self.drivers[id.index()]
    }

    #[inline]
    pub fn driver_mut(&mut self, id: DriverId) -> &mut Driver {
        &mut self.drivers[id.index()]
    }

    /// # Panics
    /// Panics if `id` was not issued by this fleet.
    #[inline]
    pub fn passenger(&self, id: PassengerId) -> &Passenger {
        &self.passengers[id.index()]
    }

    #[inline]
    pub fn passenger_mut(&mut self, id: PassengerId) -> &mut Passenger {
        &mut self.passengers[id.index()]
    }

    pub fn driver_id(&self, name: &str) -> Option<DriverId> {
        self.driver_index.get(name).copied()
    }

    pub fn passenger_id(&self, name: &str) -> Option<PassengerId> {
        self.passenger_index.get(name).copied()
    }

    pub fn driver_count(&self) -> usize {
        self.drivers.len()
    }

    pub fn passenger_count(&self) -> usize {
        self.passengers.len()
    }

    pub fn drivers(&self) -> impl Iterator<Item = (DriverId, &Driver)> {
        self.drivers
            .iter()
            .enumerate()
            .map(|(i, d)| (DriverId(i as u32), d))
    }

    pub fn passengers(&self) -> impl Iterator<Item = (PassengerId, &Passenger)> {
        self.passengers
            .iter()
            .enumerate()
            .map(|(i, p)| (PassengerId(i as u32), p))
    }
}
