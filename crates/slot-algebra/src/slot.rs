//! The `Slot` value type -- a closed pair of UTC instants with half-open
//! overlap semantics.
//!
//! A slot represents one contiguous span of ground-station channel time:
//! an availability window, a booking, or a pass-over period. Slots carry no
//! identity and no lifecycle; every operation in this crate takes slots by
//! value and returns new ones.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// A time slot `(start, end)`.
///
/// Stored as a closed pair, but overlap checks treat slots as half-open:
/// two slots that merely touch (`a.end == b.start`) do NOT overlap.
///
/// Well-formed slots satisfy `start <= end`. Zero-length slots are
/// degenerate but not forbidden; `checked` rejects only `start > end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Slot {
    /// Create a slot without validating the `start <= end` invariant.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Create a slot, rejecting `start > end`.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidArgument` when `start > end`.
    pub fn checked(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        let slot = Self { start, end };
        slot.validate()?;
        Ok(slot)
    }

    /// Check the `start <= end` invariant on an existing slot.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidArgument` when `start > end`.
    pub fn validate(&self) -> Result<()> {
        if self.start > self.end {
            return Err(SlotError::InvalidArgument(format!(
                "slot starts after it ends ({} > {})",
                self.start, self.end
            )));
        }
        Ok(())
    }

    /// Duration of the slot in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Whether two slots overlap.
    ///
    /// Two slots overlap iff `a.start < b.end && b.start < a.end`.
    /// This excludes the adjacent case where one ends exactly when the
    /// other starts.
    pub fn overlaps(&self, other: &Slot) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `other` lies entirely within this slot (boundaries included).
    pub fn contains(&self, other: &Slot) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Translate the slot by a whole number of days, preserving time-of-day.
    pub fn shift_days(&self, days: i64) -> Slot {
        let offset = Duration::days(days);
        Slot {
            start: self.start + offset,
            end: self.end + offset,
        }
    }
}
