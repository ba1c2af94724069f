//! `rd-core` — foundational types for the ride-dispatch simulator.
//!
//! This crate is a dependency of every other `rd-*` crate.  It has no `rd-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `DriverId`, `PassengerId`                             |
//! | [`geo`]         | `Location`, Manhattan distance, `row,col` parsing     |
//! | [`time`]        | `Tick`, `ticks_for_distance`                          |
//! | [`error`]       | `RdError`, `RdResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RdError, RdResult};
pub use geo::{Location, manhattan_distance};
pub use ids::{DriverId, PassengerId};
pub use time::{Tick, ticks_for_distance};
