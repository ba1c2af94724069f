//! Activity records.

use std::fmt;

use rd_core::{Location, Tick};

/// Which kind of actor an activity belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    Passenger,
    Driver,
}

/// What the actor did.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Description {
    Request,
    Cancel,
    Pickup,
    Dropoff,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Passenger => "passenger",
            Category::Driver => "driver",
        })
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Description::Request => "request",
            Description::Cancel => "cancel",
            Description::Pickup => "pickup",
            Description::Dropoff => "dropoff",
        })
    }
}

/// One immutable entry in the monitor's log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Activity {
    pub time:        Tick,
    pub description: Description,
    pub actor:       String,
    pub location:    Location,
}
