//! `rd-monitor` — records what happened and summarises it.
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`activity`] | `Activity`, `Category`, `Description`                   |
//! | [`monitor`]  | `Monitor` (append-only log), `Report`                   |
//! | [`error`]    | `MonitorError`, `MonitorResult<T>`                      |

pub mod activity;
pub mod error;
pub mod monitor;


pub use activity::{Activity, Category, Description};
pub use error::{MonitorError, MonitorResult};
pub use monitor::{Monitor, Report};
