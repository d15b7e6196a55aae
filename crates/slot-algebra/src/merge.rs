//! Subtract exclusion slots from availability slots.
//!
//! Given "positive" slots (nominally available time) and "minus" slots
//! (bookings, blackouts), compute the positive time not covered by any minus
//! slot. A positive slot can survive whole, come out trimmed, be split in
//! two around a contained minus slot, or vanish entirely.
//!
//! The relative placement of the working positive against the current minus
//! is classified once per comparison into [`Placement`] and dispatched from a
//! single `match`, so the advance-positive / advance-minus decisions are
//! explicit rather than threaded through loop flags.

use crate::slot::Slot;

/// Relative placement of a positive slot against a minus slot.
///
/// Boundary equality (`p.end == m.start` or `p.start == m.end`) counts as
/// disjoint: slots are half-open in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    /// Positive ends at or before the minus starts.
    DisjointBefore,
    /// Positive starts at or after the minus ends.
    DisjointAfter,
    /// Positive starts first and ends inside the minus.
    TailClipped,
    /// Positive starts first and ends after the minus: split around it.
    Straddles,
    /// Positive starts inside the minus and extends beyond it.
    HeadClipped,
    /// Positive lies entirely within the minus.
    Swallowed,
}

fn classify(p: &Slot, m: &Slot) -> Placement {
    if p.end <= m.start {
        Placement::DisjointBefore
    } else if p.start >= m.end {
        Placement::DisjointAfter
    } else if p.start < m.start && p.end <= m.end {
        Placement::TailClipped
    } else if p.start < m.start {
        Placement::Straddles
    } else if p.end > m.end {
        Placement::HeadClipped
    } else {
        Placement::Swallowed
    }
}

/// Remove every minus slot's span from the positive slots.
///
/// Both lists must be sorted ascending by `start` (documented precondition,
/// not checked). Either list may be empty: no positives yields an empty
/// result, and no minuses returns the positives unchanged.
///
/// Runs in O(p + m) via a two-pointer sweep over both sorted lists.
pub fn merge(p_slots: &[Slot], m_slots: &[Slot]) -> Vec<Slot> {
    if p_slots.is_empty() {
        return Vec::new();
    }
    if m_slots.is_empty() {
        return p_slots.to_vec();
    }

    let mut result: Vec<Slot> = Vec::with_capacity(p_slots.len());
    let mut minus_idx = 0usize;

    for &original in p_slots {
        // The working positive shrinks as minus slots carve into it.
        let mut p = original;
        loop {
            let Some(m) = m_slots.get(minus_idx) else {
                // Minuses exhausted -- whatever is left of p survives.
                result.push(p);
                break;
            };
            match classify(&p, m) {
                Placement::DisjointBefore => {
                    result.push(p);
                    break;
                }
                Placement::DisjointAfter => {
                    // This minus can no longer affect any later positive
                    // either, since positives only move forward.
                    minus_idx += 1;
                }
                Placement::TailClipped => {
                    result.push(Slot::new(p.start, m.start));
                    break;
                }
                Placement::Straddles => {
                    // Emit the head; the tail beyond the minus may still
                    // collide with a later minus, so keep sweeping with it.
                    result.push(Slot::new(p.start, m.start));
                    p = Slot::new(m.end, p.end);
                }
                Placement::HeadClipped => {
                    p = Slot::new(m.end, p.end);
                    minus_idx += 1;
                }
                Placement::Swallowed => break,
            }
        }
    }

    result
}
