//! Submission-time snapshot and validation.
//!
//! The snapshot is assembled only when the user attempts to submit; it is
//! never persisted. Validation defends against a desynchronization between
//! the numeric guest-count field and the actually rendered blocks, and
//! duplicates the surface's per-field required checks for defense in depth.

use crate::attendance::Attendance;
use crate::catalog::DietaryChoice;
use crate::roster::GuestRecord;

/// Full form state at the moment of a submission attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormSnapshot {
    pub attendance: Attendance,
    /// Count parsed from the guest-count field at submit time; `None` when
    /// the field was empty or unparseable.
    pub declared_count: Option<u8>,
    pub guests: Vec<GuestRecord>,
    pub song_request: String,
}

/// Reasons a submission attempt is rejected. All are recoverable: state is
/// left untouched and the user may retry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// The guest-count field and the rendered block count disagree.
    GuestCountMismatch {
        declared: Option<u8>,
        rendered: u8,
    },
    AttendanceUnanswered,
    EmptyGuestName { index: u8 },
    MissingDietaryChoice { index: u8 },
    MissingDietaryNote { index: u8 },
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::GuestCountMismatch { declared, rendered } => match declared {
                Some(declared) => write!(
                    f,
                    "guest count mismatch: field says {declared}, {rendered} block(s) rendered"
                ),
                None => write!(
                    f,
                    "guest count mismatch: field is empty, {rendered} block(s) rendered"
                ),
            },
            SubmitError::AttendanceUnanswered => {
                write!(f, "attendance has not been answered")
            }
            SubmitError::EmptyGuestName { index } => {
                write!(f, "guest {index} has no name")
            }
            SubmitError::MissingDietaryChoice { index } => {
                write!(f, "guest {index} has no dietary choice selected")
            }
            SubmitError::MissingDietaryNote { index } => {
                write!(f, "guest {index} chose \"other\" but gave no note")
            }
        }
    }
}

impl std::error::Error for SubmitError {}

/// Validate a submission attempt against the snapshot.
///
/// The count/block desync check runs first; per-field checks follow in
/// block order so the first offending guest is reported.
pub fn validate(snapshot: &FormSnapshot) -> Result<(), SubmitError> {
    match snapshot.attendance {
        Attendance::Unknown => return Err(SubmitError::AttendanceUnanswered),
        Attendance::NotAttending => return Ok(()),
        Attendance::Attending => {}
    }

    let rendered = snapshot.guests.len() as u8;
    if snapshot.declared_count != Some(rendered) {
        return Err(SubmitError::GuestCountMismatch {
            declared: snapshot.declared_count,
            rendered,
        });
    }

    for guest in &snapshot.guests {
        if guest.name.trim().is_empty() {
            return Err(SubmitError::EmptyGuestName { index: guest.index });
        }
        if guest.dietary == DietaryChoice::Unselected {
            return Err(SubmitError::MissingDietaryChoice { index: guest.index });
        }
        if guest.dietary.requires_note() && guest.dietary_note.trim().is_empty() {
            return Err(SubmitError::MissingDietaryNote { index: guest.index });
        }
    }

    Ok(())
}
