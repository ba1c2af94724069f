//! Events and their state transitions.
//!
//! Every transition re-checks the passenger's status before acting: a
//! `Cancellation` is scheduled for every request and simply does nothing if
//! the passenger was already picked up, and a `Pickup` finds out on arrival
//! whether its passenger gave up in the meantime.

use std::fmt;

use tracing::debug;

use rd_agent::Fleet;
use rd_core::{DriverId, PassengerId, Tick};
use rd_dispatch::Dispatcher;
use rd_monitor::{Category, Description, Monitor};

/// Discriminant of [`Event`], for logging and output.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    PassengerRequest,
    DriverRequest,
    Cancellation,
    Pickup,
    Dropoff,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EventKind::PassengerRequest => "PassengerRequest",
            EventKind::DriverRequest => "DriverRequest",
            EventKind::Cancellation => "Cancellation",
            EventKind::Pickup => "Pickup",
            EventKind::Dropoff => "Dropoff",
        })
    }
}

/// Something that happens at a given tick.
///
/// Entities are referenced by id; their state lives in the dispatcher's
/// fleet.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// A passenger asks for a ride.
    PassengerRequest { at: Tick, passenger: PassengerId },
    /// A driver asks for a passenger (first appearance, or after finishing).
    DriverRequest { at: Tick, driver: DriverId },
    /// A passenger's patience runs out.
    Cancellation { at: Tick, passenger: PassengerId },
    /// A driver reaches a passenger's origin.
    Pickup { at: Tick, passenger: PassengerId, driver: DriverId },
    /// A driver reaches a passenger's destination.
    Dropoff { at: Tick, driver: DriverId, passenger: PassengerId },
}

impl Event {
    #[inline]
    pub fn timestamp(&self) -> Tick {
        match *self {
            Event::PassengerRequest { at, .. }
            | Event::DriverRequest { at, .. }
            | Event::Cancellation { at, .. }
            | Event::Pickup { at, .. }
            | Event::Dropoff { at, .. } => at,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Event::PassengerRequest { .. } => EventKind::PassengerRequest,
            Event::DriverRequest { .. } => EventKind::DriverRequest,
            Event::Cancellation { .. } => EventKind::Cancellation,
            Event::Pickup { .. } => EventKind::Pickup,
            Event::Dropoff { .. } => EventKind::Dropoff,
        }
    }

    pub fn driver(&self) -> Option<DriverId> {
        match *self {
            Event::DriverRequest { driver, .. }
            | Event::Pickup { driver, .. }
            | Event::Dropoff { driver, .. } => Some(driver),
            Event::PassengerRequest { .. } | Event::Cancellation { .. } => None,
        }
    }

    pub fn passenger(&self) -> Option<PassengerId> {
        match *self {
            Event::PassengerRequest { passenger, .. }
            | Event::Cancellation { passenger, .. }
            | Event::Pickup { passenger, .. }
            | Event::Dropoff { passenger, .. } => Some(passenger),
            Event::DriverRequest { .. } => None,
        }
    }

    /// Apply this event to the world, report activities to `monitor`, and
    /// return the events it causes, in scheduling order.
    ///
    /// # Panics
    /// Panics if the event finds the driver in a state its transition cannot
    /// start from (e.g. a `Pickup` for a driver that is not en route).  That
    /// means an invariant was broken upstream.
    pub fn run(&self, dispatcher: &mut Dispatcher, monitor: &mut Monitor) -> Vec<Event> {
        debug!(event = %self.named(dispatcher.fleet()), "running event");
        match *self {
            Event::PassengerRequest { at, passenger } => {
                passenger_request(at, passenger, dispatcher, monitor)
            }
            Event::DriverRequest { at, driver } => driver_request(at, driver, dispatcher, monitor),
            Event::Cancellation { at, passenger } => {
                cancellation(at, passenger, dispatcher, monitor);
                Vec::new()
            }
            Event::Pickup { at, passenger, driver } => {
                pickup(at, passenger, driver, dispatcher, monitor)
            }
            Event::Dropoff { at, driver, passenger } => {
                dropoff(at, driver, passenger, dispatcher, monitor)
            }
        }
    }
}

impl Event {
    /// This event with its driver and passenger shown by name, e.g.
    /// `T6 -- D1: Request a passenger`.
    pub fn named<'a>(&'a self, fleet: &'a Fleet) -> NamedEvent<'a> {
        NamedEvent { event: self, fleet }
    }

    fn describe(
        &self,
        f:         &mut fmt::Formatter<'_>,
        driver:    &dyn fmt::Display,
        passenger: &dyn fmt::Display,
    ) -> fmt::Result {
        let at = self.timestamp();
        match self {
            Event::PassengerRequest { .. } => write!(f, "{at} -- {passenger}: Request a driver"),
            Event::DriverRequest { .. } => write!(f, "{at} -- {driver}: Request a passenger"),
            Event::Cancellation { .. } => write!(f, "{at} -- {passenger}: Cancel the request"),
            Event::Pickup { .. } => write!(f, "{at} -- {driver}: Pick up {passenger}"),
            Event::Dropoff { .. } => write!(f, "{at} -- {driver}: Drop off {passenger}"),
        }
    }
}

/// Shows arena slots, e.g. `T6 -- DriverId(0): Request a passenger`.
impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let driver = self.driver().map_or_else(String::new, |d| d.to_string());
        let passenger = self.passenger().map_or_else(String::new, |p| p.to_string());
        self.describe(f, &driver, &passenger)
    }
}

/// See [`Event::named`].
pub struct NamedEvent<'a> {
    event: &'a Event,
    fleet: &'a Fleet,
}

impl fmt::Display for NamedEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let driver = self.event.driver().map_or("", |d| self.fleet.driver(d).name.as_str());
        let passenger = self
            .event
            .passenger()
            .map_or("", |p| self.fleet.passenger(p).name.as_str());
        self.event.describe(f, &driver, &passenger)
    }
}

// ── Transitions ───────────────────────────────────────────────────────────────

fn passenger_request(
    at:         Tick,
    passenger:  PassengerId,
    dispatcher: &mut Dispatcher,
    monitor:    &mut Monitor,
) -> Vec<Event> {
    let rider = dispatcher.fleet().passenger(passenger);
    debug_assert!(rider.is_waiting(), "passenger {} requested twice", rider.name);
    let (origin, patience) = (rider.origin, rider.patience);
    monitor.notify(at, Category::Passenger, Description::Request, &rider.name, origin);

    let mut next = Vec::with_capacity(2);
    if let Some(driver) = dispatcher.request_driver(passenger) {
        let eta = dispatcher.fleet_mut().driver_mut(driver).start_drive(origin);
        next.push(Event::Pickup { at: at + eta, passenger, driver });
    }
    next.push(Event::Cancellation { at: at + patience, passenger });
    next
}

fn driver_request(
    at:         Tick,
    driver:     DriverId,
    dispatcher: &mut Dispatcher,
    monitor:    &mut Monitor,
) -> Vec<Event> {
    let cab = dispatcher.fleet().driver(driver);
    let idle = cab.is_idle;
    monitor.notify(at, Category::Driver, Description::Request, &cab.name, cab.location);

    // Matched by a same-tick passenger request before this re-request ran.
    if !idle {
        debug!(driver = %cab.name, "driver already dispatched; skipping request");
        dispatcher.register(driver);
        return Vec::new();
    }

    let Some(passenger) = dispatcher.request_passenger(driver) else {
        return Vec::new();
    };
    let fleet = dispatcher.fleet_mut();
    let origin = fleet.passenger(passenger).origin;
    let eta = fleet.driver_mut(driver).start_drive(origin);
    vec![Event::Pickup { at: at + eta, passenger, driver }]
}

fn cancellation(
    at:         Tick,
    passenger:  PassengerId,
    dispatcher: &mut Dispatcher,
    monitor:    &mut Monitor,
) {
    let rider = dispatcher.fleet().passenger(passenger);
    if !rider.is_waiting() {
        return;
    }
    monitor.notify(at, Category::Passenger, Description::Cancel, &rider.name, rider.origin);
    dispatcher.cancel_ride(passenger);
    dispatcher.fleet_mut().passenger_mut(passenger).cancel();
}

fn pickup(
    at:         Tick,
    passenger:  PassengerId,
    driver:     DriverId,
    dispatcher: &mut Dispatcher,
    monitor:    &mut Monitor,
) -> Vec<Event> {
    let fleet = dispatcher.fleet_mut();
    fleet.driver_mut(driver).end_drive();
    let cab = fleet.driver(driver);
    monitor.notify(at, Category::Driver, Description::Pickup, &cab.name, cab.location);

    let rider = fleet.passenger(passenger);
    if !rider.is_waiting() {
        debug!(passenger = %rider.name, driver = %cab.name, "passenger gone on arrival");
        return vec![Event::DriverRequest { at, driver }];
    }

    monitor.notify(at, Category::Passenger, Description::Pickup, &rider.name, rider.origin);
    let destination = rider.destination;
    fleet.passenger_mut(passenger).board();
    let trip = fleet.driver_mut(driver).start_trip(passenger, destination);
    vec![Event::Dropoff { at: at + trip, driver, passenger }]
}

fn dropoff(
    at:         Tick,
    driver:     DriverId,
    passenger:  PassengerId,
    dispatcher: &mut Dispatcher,
    monitor:    &mut Monitor,
) -> Vec<Event> {
    let fleet = dispatcher.fleet_mut();
    let cab = fleet.driver(driver);
    debug_assert_eq!(cab.passenger(), Some(passenger), "dropoff for a passenger not on board");
    let destination = fleet.passenger(passenger).destination;
    monitor.notify(at, Category::Driver, Description::Dropoff, &cab.name, destination);
    fleet.driver_mut(driver).end_trip();
    vec![Event::DriverRequest { at, driver }]
}
