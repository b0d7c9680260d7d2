//! The guest-field controller.
//!
//! Owns the attendance gate, the guest roster, and the handles of the
//! rendered blocks, and keeps them in agreement: `blocks.len()` equals the
//! roster length immediately after every event completes.

use form_core::{
    Attendance, CountInput, DietaryChoice, FormConfig, FormSnapshot, GuestRecord, GuestRoster,
    SubmitError, normalize_guest_count, parse_leading_int, validate,
};

use crate::event::FormEvent;
use crate::mount::{FormMounts, MountError, resolve_mounts};
use crate::submit::SubmissionPayload;
use crate::surface::{FormSurface, GuestBlockHandles, GuestBlockTemplate};

/// Dynamic guest-field controller for one form instance.
///
/// Constructed with [`GuestFieldController::mount`]; afterwards the
/// embedding glue feeds it user events through
/// [`GuestFieldController::handle`]. Each event runs to completion
/// synchronously, so callers never observe a half-reconciled form.
pub struct GuestFieldController {
    config: FormConfig,
    mounts: FormMounts,
    attendance: Attendance,
    roster: GuestRoster,
    /// Rendered block handles, parallel to the roster (ascending index).
    blocks: Vec<GuestBlockHandles>,
    song_request: String,
}

impl GuestFieldController {
    /// Resolve mount points and put the form into its initial state: the
    /// guest-count input disabled and not required, dependent sections
    /// hidden, no guest blocks.
    ///
    /// Fails without touching the surface if any mount is missing.
    pub fn mount<S: FormSurface>(surface: &mut S, config: FormConfig) -> Result<Self, MountError> {
        let mounts = resolve_mounts(surface)?;

        // Guest count stays locked until attendance is answered.
        surface.set_enabled(mounts.guest_count_input, false);
        surface.set_required(mounts.guest_count_input, false);
        surface.set_visible(mounts.guest_count_section, false);
        surface.set_visible(mounts.song_section, false);

        log::debug!(target: "rsvp.mount", "rsvp form initialized");

        Ok(Self {
            config,
            mounts,
            attendance: Attendance::Unknown,
            roster: GuestRoster::new(),
            blocks: Vec::new(),
            song_request: String::new(),
        })
    }

    pub fn attendance(&self) -> Attendance {
        self.attendance
    }

    pub fn guests(&self) -> &[GuestRecord] {
        self.roster.guests()
    }

    /// Number of currently rendered guest blocks.
    pub fn block_count(&self) -> u8 {
        self.blocks.len() as u8
    }

    /// Route one user event.
    ///
    /// Returns `Ok(Some(payload))` only for a successfully validated
    /// submission; the caller hands the payload to its submission
    /// collaborator. A rejected submission returns the reason and leaves
    /// all state unchanged.
    pub fn handle<S: FormSurface>(
        &mut self,
        surface: &mut S,
        event: FormEvent,
    ) -> Result<Option<SubmissionPayload>, SubmitError> {
        match event {
            FormEvent::AttendanceChanged { attending } => {
                self.set_attendance(surface, attending);
            }

            FormEvent::GuestCountInput { raw } => {
                // Clamp-on-blur policy: mid-typing we reconcile against the
                // clamped value but never rewrite the field under the user.
                match normalize_guest_count(&raw, self.config.min_guests, self.config.max_guests) {
                    CountInput::Pending => self.reconcile(surface, 0),
                    CountInput::Value { count, corrected } => {
                        if corrected {
                            log::trace!(
                                target: "rsvp.count",
                                "raw {raw:?} clamped to {count} (write-back deferred to blur)"
                            );
                        }
                        self.reconcile(surface, count);
                    }
                }
            }

            FormEvent::GuestCountBlur { raw } => {
                // Blur is the commit point: an out-of-range or partial
                // number is finally clamped and reflected back into the
                // field. An empty field stays pending.
                if let CountInput::Value { count, .. } =
                    normalize_guest_count(&raw, self.config.min_guests, self.config.max_guests)
                {
                    surface.set_value(self.mounts.guest_count_input, &count.to_string());
                    self.reconcile(surface, count);
                }
            }

            FormEvent::GuestNameChanged { index, value } => {
                if !self.roster.set_name(index, &value) {
                    log::trace!(target: "rsvp.reconcile", "name change for stale guest {index} ignored");
                }
            }

            FormEvent::DietaryChanged { index, value } => {
                self.set_dietary(surface, index, &value);
            }

            FormEvent::GuestNoteChanged { index, value } => {
                if !self.roster.set_note(index, &value) {
                    log::trace!(target: "rsvp.reconcile", "note change for stale guest {index} ignored");
                }
            }

            FormEvent::SongChanged { value } => {
                self.song_request = value;
            }

            FormEvent::SubmitRequested => return self.submit(surface).map(Some),

            FormEvent::ResetCompleted => {
                // The surface has already cleared native field values; only
                // the controller state and the dynamic blocks remain.
                self.reconcile(surface, 0);
                self.attendance = Attendance::Unknown;
                self.song_request.clear();
                surface.set_enabled(self.mounts.guest_count_input, false);
                surface.set_required(self.mounts.guest_count_input, false);
                surface.set_visible(self.mounts.guest_count_section, false);
                surface.set_visible(self.mounts.song_section, false);
            }
        }

        Ok(None)
    }

    fn set_attendance<S: FormSurface>(&mut self, surface: &mut S, attending: bool) {
        self.attendance = Attendance::answered(attending);
        let m = self.mounts;

        if attending {
            surface.set_visible(m.guest_count_section, true);
            surface.set_visible(m.song_section, true);
            surface.set_enabled(m.guest_count_input, true);
            surface.set_required(m.guest_count_input, true);

            // A previously entered count survives the gate; reconcile
            // against its clamped value.
            let raw = surface.get_value(m.guest_count_input).map(str::to_owned);
            if let Some(raw) = raw
                && let CountInput::Value { count, .. } =
                    normalize_guest_count(&raw, self.config.min_guests, self.config.max_guests)
            {
                self.reconcile(surface, count);
            }
        } else {
            surface.set_visible(m.guest_count_section, false);
            surface.set_visible(m.song_section, false);
            surface.set_enabled(m.guest_count_input, false);
            surface.set_required(m.guest_count_input, false);
            surface.set_value(m.guest_count_input, "");
            surface.set_value(m.song_input, "");
            self.song_request.clear();
            self.reconcile(surface, 0);
        }
    }

    fn set_dietary<S: FormSurface>(&mut self, surface: &mut S, index: u8, value: &str) {
        let choice = DietaryChoice::from_value(value);
        let Some(note) = self.roster.set_dietary(index, choice) else {
            log::trace!(target: "rsvp.reconcile", "dietary change for stale guest {index} ignored");
            return;
        };

        // Only this guest's note field is touched; siblings keep theirs.
        if let Some(block) = self.blocks.get(usize::from(index - 1)).copied() {
            surface.set_visible(block.note_group, note.visible);
            surface.set_required(block.note, note.required);
            if !note.visible {
                surface.set_value(block.note, "");
            }
        }
    }

    /// Bring the rendered blocks in line with `target`.
    ///
    /// Equal target is a strict no-op: surviving blocks are never
    /// re-rendered or re-wired, so user-entered values stay untouched.
    fn reconcile<S: FormSurface>(&mut self, surface: &mut S, target: u8) {
        let current = self.roster.len();
        let delta = self.roster.resize(target);
        if delta.is_noop() {
            return;
        }

        log::trace!(target: "rsvp.reconcile", "guest blocks {current} -> {target}");

        for _ in &delta.removed {
            if let Some(block) = self.blocks.pop() {
                surface.remove_block(block);
            }
        }

        for &index in &delta.created {
            let template = GuestBlockTemplate {
                index,
                dietary_options: self.config.catalog.options(),
            };
            let block = surface.create_block(&template);
            self.blocks.push(block);
        }

        debug_assert_eq!(self.blocks.len(), usize::from(self.roster.len()));
    }

    fn submit<S: FormSurface>(
        &mut self,
        surface: &mut S,
    ) -> Result<SubmissionPayload, SubmitError> {
        let declared_count = surface
            .get_value(self.mounts.guest_count_input)
            .and_then(parse_leading_int)
            .and_then(|value| u8::try_from(value).ok());

        let snapshot = FormSnapshot {
            attendance: self.attendance,
            declared_count,
            guests: self.roster.guests().to_vec(),
            song_request: self.song_request.clone(),
        };

        if let Err(err) = validate(&snapshot) {
            log::warn!(target: "rsvp.submit", "submission rejected: {err}");
            return Err(err);
        }

        let payload = SubmissionPayload::from_snapshot(&snapshot);
        log::debug!(
            target: "rsvp.submit",
            "submission validated: attending={}, {} guest(s)",
            payload.attending,
            payload.guests.len()
        );
        Ok(payload)
    }
}
