//! RSVP form widget.
//!
//! Binds the UI-agnostic [`form_core`] state layer to a rendering surface.
//! The surface is an external collaborator behind the [`FormSurface`]
//! trait: the widget manipulates it only through a minimal
//! create/update/remove contract and never depends on a specific rendering
//! technology.
//!
//! The embedding glue pushes user events into the
//! [`GuestFieldController`] as [`FormEvent`] values; each event runs to
//! completion synchronously, leaving the roster and the rendered blocks in
//! agreement before the next event can be processed.

mod controller;
mod event;
mod mount;
mod submit;
mod surface;

pub use controller::GuestFieldController;
pub use event::FormEvent;
pub use mount::{Mount, MountError};
pub use submit::{LogSubmitter, SubmissionPayload, Submit, SubmittedGuest};
pub use surface::{FieldHandle, FormSurface, GuestBlockHandles, GuestBlockTemplate};

// Re-export the core types callers need alongside the controller.
pub use form_core::{Attendance, DietaryChoice, FormConfig, GuestRecord, SubmitError};
