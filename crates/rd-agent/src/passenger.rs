//! Passenger records.

use std::fmt;

use rd_core::Location;

/// Where a passenger is in their lifecycle.
///
/// `Waiting` is the only non-terminal state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PassengerStatus {
    Waiting,
    Cancelled,
    Satisfied,
}

/// A rider who requested a trip from `origin` to `destination`.
#[derive(Clone, Debug)]
pub struct Passenger {
    /// Identity from the event file.  Used for equality and monitor keys.
    pub name: String,
    /// Ticks the passenger waits before cancelling.
    pub patience: u64,
    pub origin: Location,
    pub destination: Location,
    status: PassengerStatus,
}

impl Passenger {
    pub fn new(
        name:        impl Into<String>,
        patience:    u64,
        origin:      Location,
        destination: Location,
    ) -> Self {
        Self {
            name: name.into(),
            patience,
            origin,
            destination,
            status: PassengerStatus::Waiting,
        }
    }

    #[inline]
    pub fn status(&self) -> PassengerStatus {
        self.status
    }

    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.status == PassengerStatus::Waiting
    }

    /// Waiting → Cancelled.
    ///
    /// # Panics
    /// Panics if the passenger is not waiting.
    pub fn cancel(&mut self) {
        assert!(self.is_waiting(), "passenger {} cancelled while {:?}", self.name, self.status);
        self.status = PassengerStatus::Cancelled;
    }

    /// Waiting → Satisfied.
    ///
    /// # Panics
    /// Panics if the passenger is not waiting.
    pub fn board(&mut self) {
        assert!(self.is_waiting(), "passenger {} boarded while {:?}", self.name, self.status);
        self.status = PassengerStatus::Satisfied;
    }
}

impl PartialEq for Passenger {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Passenger {}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Passenger: {}", self.name)
    }
}
