//! `rd-event` — the discrete-event core of the ride-dispatch simulator.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`event`]  | `Event` (closed sum type), `EventKind`, `Event::run`       |
//! | [`queue`]  | `EventQueue` (`BTreeMap<Tick, VecDeque<Event>>`)           |
//! | [`loader`] | `Scenario`, `load_events_path`, `load_events_reader`       |
//! | [`error`]  | `EventError`, `EventResult<T>`                             |
//!
//! # Transition table
//!
//! ```text
//! PassengerRequest(t,p)  → Pickup(t+eta,p,d) if matched; always Cancellation(t+patience,p)
//! DriverRequest(t,d)     → Pickup(t+eta,p,d) if a passenger was waiting
//! Cancellation(t,p)      → ∅   (no-op unless p is still waiting)
//! Pickup(t,p,d)          → Dropoff(t+trip,d,p) if p still waiting, else DriverRequest(t,d)
//! Dropoff(t,d,p)         → DriverRequest(t,d)
//! ```
//!
//! No transition schedules an event before its own timestamp.

pub mod error;
pub mod event;
pub mod loader;
pub mod queue;


pub use error::{EventError, EventResult};
pub use event::{Event, EventKind, NamedEvent};
pub use loader::{Scenario, load_events_path, load_events_reader};
pub use queue::EventQueue;
