//! `rd-agent` — entity records for the ride-dispatch simulator.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`passenger`] | `Passenger`, `PassengerStatus`                            |
//! | [`driver`]    | `Driver` and its drive/trip transitions                   |
//! | [`fleet`]     | `Fleet` — arena owning every entity, interned by name     |
//!
//! Entities are referenced from events and from the dispatcher by
//! [`DriverId`](rd_core::DriverId) / [`PassengerId`](rd_core::PassengerId),
//! never by pointer.

pub mod driver;
pub mod fleet;
pub mod passenger;


pub use driver::Driver;
pub use fleet::Fleet;
pub use passenger::{Passenger, PassengerStatus};
