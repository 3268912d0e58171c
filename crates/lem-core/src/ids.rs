//! Strongly typed, zero-cost identifier wrappers.
//!
//! Room and tunnel ids are dense zero-based indices assigned in input order,
//! so they index `Vec`s directly via `.index()`.  Ant ids are one-based
//! because that is how ants are numbered in move tokens (`L1-room`); use
//! `.slot()` to index per-ant storage.

use std::fmt;

/// Generate a typed index wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID", equal to `u32::MAX`.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[inline(always)]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a room in the colony, in declaration order.
    pub struct RoomId(u32);
}

typed_id! {
    /// Index of a tunnel in the colony, in declaration order.
    pub struct TunnelId(u32);
}

// ── AntId ─────────────────────────────────────────────────────────────────────

/// One-based ant number.  Ants are numbered `1..=N` when scheduling begins.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AntId(pub u32);

impl AntId {
    /// The ant stored at zero-based `slot`.
    #[inline]
    pub fn from_slot(slot: usize) -> AntId {
        AntId(slot as u32 + 1)
    }

    /// Zero-based position in per-ant storage.
    ///
    /// # Panics
    /// Panics in debug mode for `AntId(0)`, which is never assigned.
    #[inline]
    pub fn slot(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Display for AntId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AntId({})", self.0)
    }
}
