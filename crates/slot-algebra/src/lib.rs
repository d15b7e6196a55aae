//! # slot-algebra
//!
//! Interval algebra for ground-station availability slots.
//!
//! A slot is a span of UTC time on a ground-station channel: a nominal
//! availability window, a booking, a blackout, a pass-over period. This
//! crate is the pure computational core a scheduling layer calls into --
//! four stateless operations over caller-owned slot lists, plus the
//! pipelines that compose them. No persistence, no transport, no clock:
//! every temporal reference point arrives as an explicit argument.
//!
//! All operations allocate and return new values and never mutate their
//! inputs, so they are safe to call concurrently without coordination.
//!
//! ## Modules
//!
//! - [`slot`] — the `Slot` value type and its helpers
//! - [`normalize`] — collapse overlapping/touching slots into disjoint form
//! - [`merge`] — subtract exclusion slots from availability slots
//! - [`cutoff`] — clip a slot to a bounding window
//! - [`position`] — whole-day translation of a slot onto a reference window
//! - [`availability`] — pipelines composing the four primitives
//! - [`error`] — error types

pub mod availability;
pub mod cutoff;
pub mod error;
pub mod merge;
pub mod normalize;
pub mod position;
pub mod slot;

pub use availability::{available_slots, first_available, project_onto};
pub use cutoff::cutoff;
pub use error::SlotError;
pub use merge::merge;
pub use normalize::normalize;
pub use position::position;
pub use slot::Slot;
