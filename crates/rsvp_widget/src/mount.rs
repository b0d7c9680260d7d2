//! Mount-point resolution.
//!
//! At construction the widget resolves every fixed element it will touch.
//! A missing mount aborts initialization entirely: no listeners, no field
//! setup, no partial state.

use crate::surface::{FieldHandle, FormSurface};

/// Fixed elements the surface must provide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mount {
    /// The form element itself (submit/reset origin).
    Form,
    /// Section wrapping the guest-count input (visibility target).
    GuestCountSection,
    /// The numeric guest-count input.
    GuestCountInput,
    /// Container the guest blocks are rendered into.
    GuestContainer,
    /// Section wrapping the song-request input (visibility target).
    SongSection,
    /// The song-request free-text input.
    SongInput,
}

/// Structural setup failure; fatal to the whole widget instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountError {
    Missing(Mount),
}

impl std::fmt::Display for MountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MountError::Missing(mount) => {
                write!(f, "required mount point missing: {mount:?}")
            }
        }
    }
}

impl std::error::Error for MountError {}

/// Resolved handles for the mounts the controller manipulates.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FormMounts {
    pub guest_count_section: FieldHandle,
    pub guest_count_input: FieldHandle,
    pub song_section: FieldHandle,
    pub song_input: FieldHandle,
}

/// Resolve all mounts up front. `Form` and `GuestContainer` are only
/// checked for presence; the surface owns block placement.
pub(crate) fn resolve_mounts<S: FormSurface>(surface: &mut S) -> Result<FormMounts, MountError> {
    fn require<S: FormSurface>(surface: &mut S, mount: Mount) -> Result<FieldHandle, MountError> {
        surface.resolve_mount(mount).ok_or_else(|| {
            log::error!(target: "rsvp.mount", "required mount point missing: {mount:?}");
            MountError::Missing(mount)
        })
    }

    require(surface, Mount::Form)?;
    let guest_count_section = require(surface, Mount::GuestCountSection)?;
    let guest_count_input = require(surface, Mount::GuestCountInput)?;
    require(surface, Mount::GuestContainer)?;
    let song_section = require(surface, Mount::SongSection)?;
    let song_input = require(surface, Mount::SongInput)?;

    Ok(FormMounts {
        guest_count_section,
        guest_count_input,
        song_section,
        song_input,
    })
}
