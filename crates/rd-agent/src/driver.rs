//! Driver records and their movement transitions.
//!
//! A driver alternates between two shapes:
//!
//! ```text
//! idle:  destination = None,     passenger = None
//! drive: destination = Some(..), passenger = None      (start_drive / end_drive)
//! trip:  destination = Some(..), passenger = Some(..)  (start_trip  / end_trip)
//! ```
//!
//! `is_idle` is cleared by the dispatcher at match time, one step before
//! `start_drive` sets the destination, and is set again by `end_drive` /
//! `end_trip`.

use std::fmt;

use rd_core::{Location, PassengerId, ticks_for_distance};

#[derive(Clone, Debug)]
pub struct Driver {
    /// Identity from the event file.  Used for equality, registration and
    /// monitor keys.
    pub name: String,
    pub location: Location,
    /// Eligible for matching.
    pub is_idle: bool,
    speed: u64,
    destination: Option<Location>,
    passenger: Option<PassengerId>,
}

impl Driver {
    /// # Panics
    /// Panics if `speed == 0`.
    pub fn new(name: impl Into<String>, location: Location, speed: u64) -> Self {
        let name = name.into();
        assert!(speed > 0, "driver {name} must have a positive speed");
        Self {
            name,
            location,
            is_idle: true,
            speed,
            destination: None,
            passenger: None,
        }
    }

    #[inline]
    pub fn speed(&self) -> u64 {
        self.speed
    }

    #[inline]
    pub fn destination(&self) -> Option<Location> {
        self.destination
    }

    /// The passenger currently on board, if any.
    #[inline]
    pub fn passenger(&self) -> Option<PassengerId> {
        self.passenger
    }

    /// Ticks to reach `destination` from the current location.
    pub fn travel_time(&self, destination: Location) -> u64 {
        ticks_for_distance(self.location.distance_to(destination), self.speed)
    }

    /// Begin an empty drive towards `location` and return its duration.
    ///
    /// # Panics
    /// Panics if the driver is already heading somewhere.
    pub fn start_drive(&mut self, location: Location) -> u64 {
        assert!(
            self.destination.is_none(),
            "driver {} started a drive while already en route",
            self.name
        );
        self.is_idle = false;
        self.destination = Some(location);
        self.travel_time(location)
    }

    /// Arrive at the drive's destination and become idle.
    ///
    /// # Panics
    /// Panics if no drive is in progress.
    pub fn end_drive(&mut self) {
        let Some(destination) = self.destination.take() else {
            panic!("driver {} ended a drive without a destination", self.name);
        };
        self.location = destination;
        self.is_idle = true;
    }

    /// Take `passenger` on board and head for `destination`; returns the
    /// trip duration.
    ///
    /// # Panics
    /// Panics if the driver is already heading somewhere.
    pub fn start_trip(&mut self, passenger: PassengerId, destination: Location) -> u64 {
        assert!(
            self.destination.is_none(),
            "driver {} started a trip while already en route",
            self.name
        );
        self.passenger = Some(passenger);
        self.start_drive(destination)
    }

    /// Drop the passenger at the trip destination and become idle.
    ///
    /// # Panics
    /// Panics if no trip is in progress.
    pub fn end_trip(&mut self) {
        assert!(
            self.passenger.take().is_some(),
            "driver {} ended a trip without a passenger",
            self.name
        );
        self.end_drive();
    }
}

impl PartialEq for Driver {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Driver {}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Driver: {}", self.name)
    }
}
