//! Collapse overlapping or touching slots into minimal disjoint form.
//!
//! A single left-to-right sweep over a list the caller has already sorted by
//! start time. Touching counts as overlapping: `(a, b)` and `(b, c)` coalesce
//! into `(a, c)`.

use crate::slot::Slot;

/// Merge overlapping or adjacent slots into the minimal equivalent set of
/// disjoint slots, preserving total coverage.
///
/// The input must be sorted ascending by `start`; this precondition is
/// documented, not checked, and results on unsorted input are unspecified.
/// An empty input normalizes to an empty list.
///
/// Runs in O(n) over the input.
pub fn normalize(slots: &[Slot]) -> Vec<Slot> {
    if slots.len() < 2 {
        return slots.to_vec();
    }

    let mut result: Vec<Slot> = Vec::with_capacity(slots.len());
    let mut current = slots[0];

    for &slot in &slots[1..] {
        if current.end < slot.start {
            // Gap before the next slot -- the accumulator is final.
            result.push(current);
            current = slot;
        } else if current.end <= slot.end {
            // Overlapping or touching, and the candidate extends coverage.
            current.end = slot.end;
        }
        // Otherwise the candidate is nested inside the accumulator.
    }

    result.push(current);
    result
}
