//! `rd-dispatch` — the matcher between ride requests and drivers.
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`dispatcher`] | `Dispatcher`                                          |
//!
//! The dispatcher has no notion of time.  It answers three questions for the
//! event engine (`rd-event`):
//!
//! ```text
//! request_driver(p)     → fastest idle driver, or p joins the waiting list
//! request_passenger(d)  → register d; head of the waiting list, if any
//! cancel_ride(p)        → drop p from the waiting list if it is there
//! ```

pub mod dispatcher;

#[cfg(test)]
mod tests;

pub use dispatcher::Dispatcher;
