//! Simulation time model.
//!
//! Time is a monotonically increasing integer `Tick`.  Events are scheduled
//! at absolute ticks; durations (travel time, patience) are plain `u64`
//! offsets added to a tick.  Integer time keeps scheduling exact.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation timestamp.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick `n` steps after `self`, or `None` past the end of time.
    #[inline]
    pub fn checked_add(self, n: u64) -> Option<Tick> {
        self.0.checked_add(n).map(Tick)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

/// Saturates at `u64::MAX`, so a successor is never scheduled before the
/// event that produced it.
impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0.saturating_add(rhs))
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Travel time ──────────────────────────────────────────────────────────────

/// Ticks needed to cover `distance` blocks at `speed` blocks per tick,
/// rounded to the nearest tick with ties going to the even neighbour.
///
/// Computed in integer arithmetic so the result never depends on float
/// rounding: `5 / 2 → 2`, `7 / 2 → 4`, `7 / 3 → 2`.
///
/// # Panics
/// Panics if `speed == 0`.
#[inline]
pub fn ticks_for_distance(distance: u64, speed: u64) -> u64 {
    assert!(speed > 0, "travel speed must be positive");
    let quotient = distance / speed;
    let twice_rem = 2 * (distance % speed);
    if twice_rem > speed || (twice_rem == speed && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}
