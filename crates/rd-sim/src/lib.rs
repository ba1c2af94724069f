//! `rd-sim` — event loop orchestrator for the ride-dispatch simulator.
//!
//! # Loop
//!
//! ```text
//! while let Some(event) = queue.pop():
//!   ① stop if event.timestamp > config.end_tick (event stays queued)
//!   ② now ← event.timestamp
//!   ③ successors ← event.run(&mut dispatcher, &mut monitor)
//!   ④ observer.on_event(event, successors)
//!   ⑤ queue.extend(successors)   (rejects anything before `now`)
//! ```
//!
//! One event runs to completion before the next is popped; there is no
//! concurrency anywhere in the loop.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rd_event::load_events_path;
//! use rd_sim::{NoopObserver, SimBuilder};
//!
//! let scenario = load_events_path(Path::new("events.txt"))?;
//! let mut sim = SimBuilder::new(scenario).build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("{:?}", sim.report()?);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
