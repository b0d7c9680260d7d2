//! Attendance gate state.
//!
//! The attendance answer drives the visibility of the guest-count input and
//! its dependent sections. It starts [`Attendance::Unknown`] and moves to
//! [`Attendance::Attending`] or [`Attendance::NotAttending`] when the user
//! answers; there is no user-driven transition back to `Unknown` (only a
//! full form reset returns there).

/// Tri-state attendance answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Attendance {
    /// The user has not answered the attendance question yet.
    #[default]
    Unknown,
    Attending,
    NotAttending,
}

impl Attendance {
    /// Construct from the boolean answer of the attendance control.
    #[inline]
    pub fn answered(attending: bool) -> Self {
        if attending {
            Attendance::Attending
        } else {
            Attendance::NotAttending
        }
    }

    /// Returns `true` only for [`Attendance::Attending`].
    #[inline]
    pub fn is_attending(self) -> bool {
        matches!(self, Attendance::Attending)
    }
}
