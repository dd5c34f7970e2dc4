//! Output formatting flags
//!
//! A small bitset controlling the line header (date, time, sub-second
//! resolution, UTC) and the caller-location style (full path or final
//! segment). Flags combine with `|` and are fixed at construction.

use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};

/// Formatting flag bitset for [`Logger`](crate::Logger) construction.
///
/// # Examples
///
/// ```
/// use linelog::Flags;
///
/// let flags = Flags::STD | Flags::MICROSECONDS | Flags::SHORT_FILE;
/// assert!(flags.contains(Flags::DATE));
/// assert!(flags.contains(Flags::SHORT_FILE));
/// assert!(!flags.contains(Flags::UTC));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Flags(u32);

impl Flags {
    /// No header, no location prefix.
    pub const NONE: Flags = Flags(0);
    /// Calendar date in the header: `2009/01/23`.
    pub const DATE: Flags = Flags(1);
    /// Time of day in the header: `01:23:23`.
    pub const TIME: Flags = Flags(1 << 1);
    /// Microsecond resolution: `01:23:23.123123`. Assumes [`Flags::TIME`].
    pub const MICROSECONDS: Flags = Flags(1 << 2);
    /// Full file path in the location prefix: `/a/b/c/d.rs:23`.
    pub const LONG_FILE: Flags = Flags(1 << 3);
    /// Final path element only: `d.rs:23`. Overrides [`Flags::LONG_FILE`].
    pub const SHORT_FILE: Flags = Flags(1 << 4);
    /// Use UTC rather than the local time zone for date and time.
    pub const UTC: Flags = Flags(1 << 5);
    /// Default preset: date and time.
    pub const STD: Flags = Flags(Self::DATE.0 | Self::TIME.0);

    /// True if every bit of `other` is set in `self`.
    #[inline]
    pub fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if any bit of `other` is set in `self`.
    #[inline]
    pub fn intersects(self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }

    /// Raw bit representation.
    #[inline]
    pub fn bits(self) -> u32 {
        self.0
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std_preset() {
        assert!(Flags::STD.contains(Flags::DATE));
        assert!(Flags::STD.contains(Flags::TIME));
        assert!(!Flags::STD.contains(Flags::MICROSECONDS));
        assert!(!Flags::STD.contains(Flags::UTC));
    }

    #[test]
    fn test_combine() {
        let mut flags = Flags::DATE;
        flags |= Flags::SHORT_FILE;
        assert!(flags.contains(Flags::DATE | Flags::SHORT_FILE));
        assert!(flags.intersects(Flags::SHORT_FILE | Flags::LONG_FILE));
        assert!(!flags.contains(Flags::LONG_FILE));
    }

    #[test]
    fn test_none_is_empty() {
        assert_eq!(Flags::NONE.bits(), 0);
        assert!(!Flags::NONE.intersects(Flags::STD));
        assert_eq!(Flags::default(), Flags::NONE);
    }
}
