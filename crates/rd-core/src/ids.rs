//! Strongly typed identifier wrappers.
//!
//! Entities live in an arena (`rd_agent::Fleet`); everything else holds these
//! `Copy` ids as non-owning references.  The inner integer is the arena slot.
//! External identity (the name from the event file) lives on the entity.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Arena slot of a driver in the fleet.
    pub struct DriverId(u32);
}

typed_id! {
    /// Arena slot of a passenger in the fleet.
    pub struct PassengerId(u32);
}
