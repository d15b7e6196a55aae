//! Channel availability pipelines built from the slot primitives.
//!
//! The booking layer feeds this module rule-generated availability slots and
//! booking/blackout slots; it gets back the time a ground-station channel is
//! actually free within a reporting window. Three compositions cover the
//! common call sites: subtract-and-clip, first-fit lookup, and projection of
//! recorded rule slots onto a future window.

use crate::cutoff::cutoff;
use crate::error::{Result, SlotError};
use crate::merge::merge;
use crate::normalize::normalize;
use crate::position::position;
use crate::slot::Slot;

/// Compute the available sub-slots of `window`.
///
/// Normalizes both inputs, subtracts the minus slots from the positive
/// slots, and clips every surviving slot to the window. Slots that fall
/// entirely outside the window are dropped, not reported as errors.
///
/// Both input lists must be sorted ascending by `start` (the precondition
/// shared by [`normalize`] and [`merge`]).
///
/// # Errors
/// Returns `SlotError::InvalidArgument` if the window has `start > end`.
pub fn available_slots(window: Slot, p_slots: &[Slot], m_slots: &[Slot]) -> Result<Vec<Slot>> {
    window.validate()?;

    let positives = normalize(p_slots);
    let minuses = normalize(m_slots);
    let remaining = merge(&positives, &minuses);

    let mut clipped = Vec::with_capacity(remaining.len());
    for slot in remaining {
        match cutoff(window, slot) {
            Ok(s) => clipped.push(s),
            Err(SlotError::OutOfRange(_)) => {}
            Err(e) => return Err(e),
        }
    }
    Ok(clipped)
}

/// Find the first available slot of at least `min_duration_minutes` within
/// the window.
///
/// Delegates to [`available_slots`] and returns the first slot meeting the
/// minimum duration requirement, if any.
///
/// # Errors
/// Returns `SlotError::InvalidArgument` if the window has `start > end`.
pub fn first_available(
    window: Slot,
    p_slots: &[Slot],
    m_slots: &[Slot],
    min_duration_minutes: i64,
) -> Result<Option<Slot>> {
    Ok(available_slots(window, p_slots, m_slots)?
        .into_iter()
        .find(|slot| slot.duration_minutes() >= min_duration_minutes))
}

/// Project recorded rule slots onto a future window.
///
/// Each slot is translated by whole days onto the window via [`position`],
/// then clipped to it. Slots whose translation still misses the window
/// (possible when the window is shorter than a day) are dropped. The
/// returned slots keep the input order.
///
/// # Errors
/// Returns `SlotError::InvalidArgument` if the window or any slot has
/// `start > end`.
pub fn project_onto(window: Slot, slots: &[Slot]) -> Result<Vec<Slot>> {
    window.validate()?;

    let mut projected = Vec::with_capacity(slots.len());
    for &slot in slots {
        let moved = position(window, slot)?;
        match cutoff(window, moved) {
            Ok(s) => projected.push(s),
            Err(SlotError::OutOfRange(_)) => {}
            Err(e) => return Err(e),
        }
    }
    Ok(projected)
}
