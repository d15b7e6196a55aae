//! Translate a slot by whole days to land it inside a reference window.
//!
//! Used to project a recurring-rule slot, recorded against some past day,
//! onto a future window that may be hundreds of days ahead. Only whole-day
//! offsets are applied, so the slot's time-of-day is preserved exactly.

use crate::error::Result;
use crate::slot::Slot;

/// Translate `slot` by whole days so it falls inside (or overlaps) `window`.
///
/// The initial offset is the day difference between `window.start`'s date
/// and `slot.start`'s date. If the translated slot still misses the window
/// because of its time-of-day (ending at or before `window.start`, or
/// starting at or after `window.end` -- touching does not count as overlap),
/// it is nudged by one day in the needed direction. The correction is always
/// within one day of the initial estimate, so at most two nudges are tried.
///
/// # Errors
/// Returns `SlotError::InvalidArgument` if either argument has
/// `start > end`.
pub fn position(window: Slot, slot: Slot) -> Result<Slot> {
    window.validate()?;
    slot.validate()?;

    let days = (window.start.date_naive() - slot.start.date_naive()).num_days();
    let mut shifted = slot.shift_days(days);

    for _ in 0..2 {
        if shifted.end <= window.start {
            shifted = shifted.shift_days(1);
        } else if shifted.start >= window.end {
            shifted = shifted.shift_days(-1);
        } else {
            break;
        }
    }

    Ok(shifted)
}
