//! User events the embedding glue routes into the controller.

/// One user-generated event.
///
/// Field values carry the surface's current text at the time of the event.
/// `ResetCompleted` must be delivered by the surface after its own native
/// field clearing has finished, so the controller observes post-reset
/// values rather than racing them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    /// The attendance control was answered.
    AttendanceChanged { attending: bool },
    /// Live edit of the guest-count field (fires per keystroke).
    GuestCountInput { raw: String },
    /// The guest-count field lost focus.
    GuestCountBlur { raw: String },
    /// A guest's name field changed. `index` is the 1-based block index.
    GuestNameChanged { index: u8, value: String },
    /// A guest's dietary select changed; `value` is the option value.
    DietaryChanged { index: u8, value: String },
    /// A guest's dietary note field changed.
    GuestNoteChanged { index: u8, value: String },
    /// The song-request field changed.
    SongChanged { value: String },
    /// The user attempted to submit the form.
    SubmitRequested,
    /// The surface finished its native form reset.
    ResetCompleted,
}
