//! Run configuration.

use rd_core::Tick;

/// Top-level simulation configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Last tick to process.  Events after it stay in the queue.  `None`
    /// runs until the queue is empty.
    pub end_tick: Option<Tick>,
}

impl SimConfig {
    /// Whether an event at `tick` is inside the configured horizon.
    #[inline]
    pub fn admits(&self, tick: Tick) -> bool {
        self.end_tick.is_none_or(|end| tick <= end)
    }
}
