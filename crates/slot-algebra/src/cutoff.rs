//! Clip a single slot to fit inside a bounding window.

use crate::error::{Result, SlotError};
use crate::slot::Slot;

/// Clip `slot` so it fits within `window`.
///
/// Start and end clipping are independent: a slot that fully contains the
/// window is clipped on both sides and comes back equal to the window. A
/// slot already inside the window is returned unchanged.
///
/// # Errors
/// - `SlotError::InvalidArgument` if either argument has `start > end`
///   (checked before any comparison).
/// - `SlotError::OutOfRange` if the slot has zero overlap with the window;
///   touching the window boundary counts as zero overlap.
pub fn cutoff(window: Slot, slot: Slot) -> Result<Slot> {
    window.validate()?;
    slot.validate()?;

    if slot.end <= window.start {
        return Err(SlotError::OutOfRange(
            "slot ends at or before the window starts".to_string(),
        ));
    }
    if slot.start >= window.end {
        return Err(SlotError::OutOfRange(
            "slot starts at or after the window ends".to_string(),
        ));
    }

    Ok(Slot::new(
        slot.start.max(window.start),
        slot.end.min(window.end),
    ))
}
