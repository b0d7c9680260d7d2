//! Guest roster and reconciliation planning.
//!
//! The roster is the ordered sequence of guest records, exclusively owned
//! by the controller. Indices are 1-based and positional, not stable
//! identities: shrinking then regrowing produces fresh default records,
//! never restored ones.

use crate::catalog::DietaryChoice;

/// One guest's entered fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuestRecord {
    /// 1-based position of this guest's block.
    pub index: u8,
    pub name: String,
    pub dietary: DietaryChoice,
    /// Free-text note; only meaningful while `dietary` is `Other`.
    pub dietary_note: String,
}

impl GuestRecord {
    fn new(index: u8) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }
}

/// Plan produced by [`GuestRoster::resize`], to be applied to the
/// rendering surface.
///
/// `created` holds ascending indices of freshly appended records;
/// `removed` holds the dropped indices in removal order (highest first).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RosterDelta {
    pub created: Vec<u8>,
    pub removed: Vec<u8>,
}

impl RosterDelta {
    pub fn is_noop(&self) -> bool {
        self.created.is_empty() && self.removed.is_empty()
    }
}

/// Visibility/required-ness of one guest's note field, derived purely from
/// the dietary choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoteState {
    pub visible: bool,
    pub required: bool,
}

/// The note field is visible and required exactly when `Other` is chosen.
#[inline]
pub fn note_state(choice: DietaryChoice) -> NoteState {
    let other = choice.requires_note();
    NoteState {
        visible: other,
        required: other,
    }
}

/// Ordered list of guest records.
///
/// Invariant: records are stored in ascending index order 1..=len with no
/// gaps, so `guests[i].index == i + 1` always holds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuestRoster {
    guests: Vec<GuestRecord>,
}

impl GuestRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> u8 {
        self.guests.len() as u8
    }

    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }

    pub fn guests(&self) -> &[GuestRecord] {
        &self.guests
    }

    /// Look up a record by its 1-based index.
    pub fn get(&self, index: u8) -> Option<&GuestRecord> {
        let slot = usize::from(index.checked_sub(1)?);
        self.guests.get(slot)
    }

    fn get_mut(&mut self, index: u8) -> Option<&mut GuestRecord> {
        let slot = usize::from(index.checked_sub(1)?);
        self.guests.get_mut(slot)
    }

    /// Grow or shrink the roster to exactly `target` records.
    ///
    /// Growing appends fresh defaults; shrinking discards the removed
    /// records' values permanently. Equal target is a strict no-op so
    /// surviving records are never disturbed.
    pub fn resize(&mut self, target: u8) -> RosterDelta {
        let current = self.len();
        let mut delta = RosterDelta::default();

        if target > current {
            for index in current + 1..=target {
                self.guests.push(GuestRecord::new(index));
                delta.created.push(index);
            }
        } else if target < current {
            // Remove from the highest index down, like the rendered blocks.
            for index in (target + 1..=current).rev() {
                self.guests.pop();
                delta.removed.push(index);
            }
        }

        delta
    }

    /// Set a guest's name. Returns `false` for a stale index.
    pub fn set_name(&mut self, index: u8, name: &str) -> bool {
        match self.get_mut(index) {
            Some(guest) => {
                guest.name.clear();
                guest.name.push_str(name);
                true
            }
            None => false,
        }
    }

    /// Set a guest's dietary choice and return the resulting note-field
    /// state. Moving away from `Other` resets the note to empty. Returns
    /// `None` for a stale index. Sibling records are never touched.
    pub fn set_dietary(&mut self, index: u8, choice: DietaryChoice) -> Option<NoteState> {
        let guest = self.get_mut(index)?;
        guest.dietary = choice;

        let note = note_state(choice);
        if !note.visible {
            guest.dietary_note.clear();
        }
        Some(note)
    }

    /// Set a guest's dietary note. Returns `false` for a stale index.
    pub fn set_note(&mut self, index: u8, note: &str) -> bool {
        match self.get_mut(index) {
            Some(guest) => {
                guest.dietary_note.clear();
                guest.dietary_note.push_str(note);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(roster: &GuestRoster) -> Vec<u8> {
        roster.guests().iter().map(|g| g.index).collect()
    }

    #[test]
    fn grow_appends_ascending_fresh_records() {
        let mut roster = GuestRoster::new();
        let delta = roster.resize(3);

        assert_eq!(delta.created, vec![1, 2, 3]);
        assert!(delta.removed.is_empty());
        assert_eq!(indices(&roster), vec![1, 2, 3]);
        assert!(roster.guests().iter().all(|g| {
            g.name.is_empty()
                && g.dietary == DietaryChoice::Unselected
                && g.dietary_note.is_empty()
        }));
    }

    #[test]
    fn shrink_removes_highest_indices_first() {
        let mut roster = GuestRoster::new();
        roster.resize(5);
        let delta = roster.resize(2);

        assert_eq!(delta.removed, vec![5, 4, 3]);
        assert!(delta.created.is_empty());
        assert_eq!(indices(&roster), vec![1, 2]);
    }

    #[test]
    fn equal_target_is_a_noop() {
        let mut roster = GuestRoster::new();
        roster.resize(4);
        roster.set_name(2, "Maria");

        let delta = roster.resize(4);
        assert!(delta.is_noop());
        assert_eq!(roster.get(2).unwrap().name, "Maria");
    }

    #[test]
    fn shrink_then_grow_yields_fresh_defaults() {
        let mut roster = GuestRoster::new();
        roster.resize(5);
        roster.set_name(4, "João");
        roster.set_dietary(4, DietaryChoice::Other);
        roster.set_note(4, "sem sal");

        roster.resize(2);
        roster.resize(5);

        let guest = roster.get(4).unwrap();
        assert!(guest.name.is_empty());
        assert_eq!(guest.dietary, DietaryChoice::Unselected);
        assert!(guest.dietary_note.is_empty());
    }

    #[test]
    fn choosing_other_shows_and_requires_the_note() {
        let mut roster = GuestRoster::new();
        roster.resize(2);

        let note = roster.set_dietary(1, DietaryChoice::Other).unwrap();
        assert_eq!(
            note,
            NoteState {
                visible: true,
                required: true
            }
        );
    }

    #[test]
    fn leaving_other_clears_the_note_value() {
        let mut roster = GuestRoster::new();
        roster.resize(1);
        roster.set_dietary(1, DietaryChoice::Other);
        roster.set_note(1, "low sodium");

        let note = roster.set_dietary(1, DietaryChoice::Vegan).unwrap();
        assert_eq!(
            note,
            NoteState {
                visible: false,
                required: false
            }
        );
        assert!(roster.get(1).unwrap().dietary_note.is_empty());
    }

    #[test]
    fn dietary_change_does_not_affect_siblings() {
        let mut roster = GuestRoster::new();
        roster.resize(3);
        roster.set_dietary(2, DietaryChoice::Other);
        roster.set_note(2, "nut allergy");

        roster.set_dietary(1, DietaryChoice::Vegan);

        let sibling = roster.get(2).unwrap();
        assert_eq!(sibling.dietary, DietaryChoice::Other);
        assert_eq!(sibling.dietary_note, "nut allergy");
    }

    #[test]
    fn stale_indices_are_rejected() {
        let mut roster = GuestRoster::new();
        roster.resize(2);

        assert!(!roster.set_name(3, "late"));
        assert!(roster.set_dietary(0, DietaryChoice::Vegan).is_none());
        assert!(roster.get(3).is_none());
    }
}
