//! Submission payload and the external submission collaborator.
//!
//! The controller's only obligation is to produce a validated payload and
//! to not submit when validation fails. Actual delivery (network call,
//! mailer, form service) is out of scope; [`LogSubmitter`] is the shipped
//! demo-mode stub.

use form_core::FormSnapshot;
use serde::Serialize;

/// Flattened, validated field set handed to the submission collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    pub attending: bool,
    pub guest_count: u8,
    pub guests: Vec<SubmittedGuest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub song_request: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubmittedGuest {
    pub index: u8,
    pub name: String,
    pub dietary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_note: Option<String>,
}

impl SubmissionPayload {
    /// Flatten an already-validated snapshot.
    pub(crate) fn from_snapshot(snapshot: &FormSnapshot) -> Self {
        let guests: Vec<SubmittedGuest> = snapshot
            .guests
            .iter()
            .map(|guest| SubmittedGuest {
                index: guest.index,
                name: guest.name.clone(),
                dietary: guest.dietary.value().to_string(),
                dietary_note: guest
                    .dietary
                    .requires_note()
                    .then(|| guest.dietary_note.clone()),
            })
            .collect();

        Self {
            attending: snapshot.attendance.is_attending(),
            guest_count: guests.len() as u8,
            guests,
            song_request: (!snapshot.song_request.trim().is_empty())
                .then(|| snapshot.song_request.clone()),
        }
    }

    /// Flatten to form-data style name/value pairs, using the field names
    /// of the original form markup.
    pub fn fields(&self) -> Vec<(String, String)> {
        let mut fields = Vec::with_capacity(2 + self.guests.len() * 3);
        fields.push((
            "attendance".to_string(),
            if self.attending { "sim" } else { "nao" }.to_string(),
        ));
        fields.push(("guest-count".to_string(), self.guest_count.to_string()));

        for guest in &self.guests {
            let i = guest.index;
            fields.push((format!("guest-name-{i}"), guest.name.clone()));
            fields.push((format!("guest-dietary-{i}"), guest.dietary.clone()));
            if let Some(note) = &guest.dietary_note {
                fields.push((format!("guest-dietary-other-{i}"), note.clone()));
            }
        }

        if let Some(song) = &self.song_request {
            fields.push(("song-request".to_string(), song.clone()));
        }

        fields
    }
}

/// External submission collaborator.
pub trait Submit {
    fn submit(&mut self, payload: &SubmissionPayload);
}

/// Demo-mode submitter: records the payload in the log and does nothing
/// else.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSubmitter;

impl Submit for LogSubmitter {
    fn submit(&mut self, payload: &SubmissionPayload) {
        log::info!(
            target: "rsvp.submit",
            "form submitted (demo mode): attending={}, {} guest(s)",
            payload.attending,
            payload.guests.len()
        );
    }
}
