//! Grid locations and the Manhattan metric.

use std::fmt;
use std::str::FromStr;

use crate::RdError;

/// An immutable point on the city grid.  Equality is structural.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub row: i64,
    pub col: i64,
}

impl Location {
    /// Largest accepted `|row|` or `|col|`.  Keeps every Manhattan distance
    /// between two parsed locations inside `u64`.
    pub const MAX_COORDINATE: u64 = u64::MAX / 4;

    #[inline]
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Number of grid blocks between `self` and `other` (|Δrow| + |Δcol|).
    #[inline]
    pub fn distance_to(self, other: Location) -> u64 {
        self.row
            .abs_diff(other.row)
            .saturating_add(self.col.abs_diff(other.col))
    }
}

/// Free-function form of [`Location::distance_to`].
#[inline]
pub fn manhattan_distance(origin: Location, destination: Location) -> u64 {
    origin.distance_to(destination)
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Parses the `row,col` token format used by event files.
///
/// Components between the first and the last are ignored, so `1,9,2` is
/// `(1,2)`.  A token without a comma uses the same value for both axes.
/// Coordinates beyond [`Location::MAX_COORDINATE`] are rejected.
impl FromStr for Location {
    type Err = RdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        let (first, last) = match (parts.first(), parts.last()) {
            (Some(f), Some(l)) => (f.trim(), l.trim()),
            _ => return Err(RdError::Parse(format!("empty location {s:?}"))),
        };
        let parse = |v: &str| {
            let n = v.parse::<i64>().map_err(|_| {
                RdError::Parse(format!("invalid location {s:?}: expected \"row,col\" integers"))
            })?;
            if n.unsigned_abs() > Location::MAX_COORDINATE {
                return Err(RdError::Parse(format!(
                    "location {s:?} is off the grid: |coordinate| must be at most {}",
                    Location::MAX_COORDINATE
                )));
            }
            Ok(n)
        };
        Ok(Location::new(parse(first)?, parse(last)?))
    }
}
