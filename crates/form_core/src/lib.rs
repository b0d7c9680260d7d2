//! # form_core
//!
//! UI-agnostic state/validation layer for the RSVP form widget.
//!
//! This crate provides the fundamental building blocks for the dynamic
//! guest-field logic:
//! - [`Attendance`]: the tri-state attendance gate
//! - [`GuestRoster`]: the ordered list of guest records and its
//!   reconciliation planning (grow/shrink deltas)
//! - [`normalize_guest_count`]: clamping of the raw guest-count input
//! - [`DietaryCatalog`]: the fixed ordered dietary-option catalog
//! - [`FormSnapshot`] / [`validate`]: pre-submission validation
//!
//! ## Design Principles
//!
//! This crate is intentionally UI-agnostic and does not depend on:
//! - Any rendering technology (DOM, egui, etc.)
//! - Any event or listener mechanism
//! - Platform-specific APIs
//!
//! It depends only on `std` and provides pure form semantics that can be
//! tested independently. The integration layer (`rsvp_widget`) translates
//! the deltas and effects produced here into rendering-surface calls.

mod attendance;
mod catalog;
mod config;
mod count;
mod roster;
mod snapshot;

pub use attendance::Attendance;
pub use catalog::{CatalogError, DietaryCatalog, DietaryChoice, DietaryOption};
pub use config::FormConfig;
pub use count::{CountInput, normalize_guest_count, parse_leading_int};
pub use roster::{GuestRecord, GuestRoster, NoteState, RosterDelta, note_state};
pub use snapshot::{FormSnapshot, SubmitError, validate};
