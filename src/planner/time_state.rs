use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

/// Flags describing how a task is placed in time
///
/// Flags combine with `|` and intersect with `&`. They are policy hints for
/// an external scheduler; nothing in this crate acts on them.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TimeState(u8);

impl TimeState {
    /// No special time handling
    pub const NONE: TimeState = TimeState(0);
    /// Start date and deadline are fixed and must not be rescheduled
    pub const USE_CONCRETE_DATE: TimeState = TimeState(1);
    /// Missing the deadline fails the task instead of being tolerated
    pub const HAS_STRICT_DEADLINE: TimeState = TimeState(2);
    /// The task recurs every week
    pub const REPEAT_WEEKLY: TimeState = TimeState(4);

    const NAMED: [(TimeState, &'static str); 3] = [
        (TimeState::USE_CONCRETE_DATE, "USE_CONCRETE_DATE"),
        (TimeState::HAS_STRICT_DEADLINE, "HAS_STRICT_DEADLINE"),
        (TimeState::REPEAT_WEEKLY, "REPEAT_WEEKLY"),
    ];

    const ALL_BITS: u8 = 1 | 2 | 4;

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Build a flag set from raw bits, rejecting unknown bits
    pub const fn from_bits(bits: u8) -> Option<TimeState> {
        if bits & !Self::ALL_BITS == 0 {
            Some(TimeState(bits))
        } else {
            None
        }
    }

    /// Build a flag set from raw bits, dropping unknown bits
    pub const fn from_bits_truncate(bits: u8) -> TimeState {
        TimeState(bits & Self::ALL_BITS)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check whether every flag in `other` is set
    pub const fn contains(self, other: TimeState) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: TimeState) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: TimeState) {
        self.0 &= !other.0;
    }
}

impl BitOr for TimeState {
    type Output = TimeState;

    fn bitor(self, rhs: TimeState) -> TimeState {
        TimeState(self.0 | rhs.0)
    }
}

impl BitOrAssign for TimeState {
    fn bitor_assign(&mut self, rhs: TimeState) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for TimeState {
    type Output = TimeState;

    fn bitand(self, rhs: TimeState) -> TimeState {
        TimeState(self.0 & rhs.0)
    }
}

impl BitAndAssign for TimeState {
    fn bitand_assign(&mut self, rhs: TimeState) {
        self.0 &= rhs.0;
    }
}

impl TryFrom<u8> for TimeState {
    type Error = String;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        TimeState::from_bits(bits)
            .ok_or_else(|| format!("Invalid time flags {:#04b}: unknown bits set", bits))
    }
}

impl From<TimeState> for u8 {
    fn from(flags: TimeState) -> u8 {
        flags.0
    }
}

impl fmt::Display for TimeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NONE");
        }
        let names: Vec<&str> = Self::NAMED
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        f.write_str(&names.join(" | "))
    }
}

impl fmt::Debug for TimeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeState({})", self)
    }
}
