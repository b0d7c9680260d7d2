use form_test_support::FakeSurface;
use rsvp_widget::{
    FormConfig, FormEvent, FormSurface, GuestFieldController, Mount, Submit, SubmissionPayload,
    SubmitError,
};

fn mounted() -> (FakeSurface, GuestFieldController) {
    let mut surface = FakeSurface::new();
    let controller = GuestFieldController::mount(&mut surface, FormConfig::default())
        .expect("all mounts present");
    (surface, controller)
}

fn event(
    surface: &mut FakeSurface,
    controller: &mut GuestFieldController,
    event: FormEvent,
) -> Option<SubmissionPayload> {
    controller.handle(surface, event).expect("event accepted")
}

/// Drive the form to a complete two-guest attending state.
fn filled_form() -> (FakeSurface, GuestFieldController) {
    let (mut surface, mut controller) = mounted();
    event(
        &mut surface,
        &mut controller,
        FormEvent::AttendanceChanged { attending: true },
    );

    let input = surface.mount(Mount::GuestCountInput);
    surface.set_value(input, "2");
    event(
        &mut surface,
        &mut controller,
        FormEvent::GuestCountInput {
            raw: "2".to_string(),
        },
    );

    for (index, name, dietary) in [(1u8, "Ana", "vegan"), (2, "Rui", "other")] {
        event(
            &mut surface,
            &mut controller,
            FormEvent::GuestNameChanged {
                index,
                value: name.to_string(),
            },
        );
        event(
            &mut surface,
            &mut controller,
            FormEvent::DietaryChanged {
                index,
                value: dietary.to_string(),
            },
        );
    }
    event(
        &mut surface,
        &mut controller,
        FormEvent::GuestNoteChanged {
            index: 2,
            value: "no cilantro".to_string(),
        },
    );
    event(
        &mut surface,
        &mut controller,
        FormEvent::SongChanged {
            value: "Fado".to_string(),
        },
    );

    (surface, controller)
}

#[test]
fn valid_submission_produces_the_flattened_payload() {
    let (mut surface, mut controller) = filled_form();

    let payload = controller
        .handle(&mut surface, FormEvent::SubmitRequested)
        .expect("validation passes")
        .expect("payload produced");

    assert_eq!(
        payload.fields(),
        vec![
            ("attendance".to_string(), "sim".to_string()),
            ("guest-count".to_string(), "2".to_string()),
            ("guest-name-1".to_string(), "Ana".to_string()),
            ("guest-dietary-1".to_string(), "vegan".to_string()),
            ("guest-name-2".to_string(), "Rui".to_string()),
            ("guest-dietary-2".to_string(), "other".to_string()),
            ("guest-dietary-other-2".to_string(), "no cilantro".to_string()),
            ("song-request".to_string(), "Fado".to_string()),
        ]
    );
}

#[test]
fn payload_serializes_for_the_submission_collaborator() {
    let (mut surface, mut controller) = filled_form();
    let payload = controller
        .handle(&mut surface, FormEvent::SubmitRequested)
        .unwrap()
        .unwrap();

    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "attending": true,
            "guest_count": 2,
            "guests": [
                { "index": 1, "name": "Ana", "dietary": "vegan" },
                {
                    "index": 2,
                    "name": "Rui",
                    "dietary": "other",
                    "dietary_note": "no cilantro"
                },
            ],
            "song_request": "Fado",
        })
    );
}

#[test]
fn payload_reaches_a_submit_collaborator() {
    #[derive(Default)]
    struct Recorder {
        payloads: Vec<SubmissionPayload>,
    }

    impl Submit for Recorder {
        fn submit(&mut self, payload: &SubmissionPayload) {
            self.payloads.push(payload.clone());
        }
    }

    let (mut surface, mut controller) = filled_form();
    let mut recorder = Recorder::default();

    if let Some(payload) = controller
        .handle(&mut surface, FormEvent::SubmitRequested)
        .unwrap()
    {
        recorder.submit(&payload);
    }

    assert_eq!(recorder.payloads.len(), 1);
    assert_eq!(recorder.payloads[0].guest_count, 2);
}

#[test]
fn count_field_desync_blocks_submission() {
    let (mut surface, mut controller) = filled_form();

    // Simulate a desync: the field says 3 but only 2 blocks were ever
    // reconciled (no input event reached the controller).
    let input = surface.mount(Mount::GuestCountInput);
    surface.set_value(input, "3");

    let err = controller
        .handle(&mut surface, FormEvent::SubmitRequested)
        .unwrap_err();
    assert_eq!(
        err,
        SubmitError::GuestCountMismatch {
            declared: Some(3),
            rendered: 2
        }
    );

    // No payload was produced and state is untouched; the user may retry.
    assert_eq!(surface.live_blocks(), 2);
    assert_eq!(controller.guests().len(), 2);
    surface.set_value(input, "2");
    assert!(
        controller
            .handle(&mut surface, FormEvent::SubmitRequested)
            .unwrap()
            .is_some()
    );
}

#[test]
fn unanswered_attendance_blocks_submission() {
    let (mut surface, mut controller) = mounted();

    let err = controller
        .handle(&mut surface, FormEvent::SubmitRequested)
        .unwrap_err();
    assert_eq!(err, SubmitError::AttendanceUnanswered);
}

#[test]
fn not_attending_submission_carries_no_guests() {
    let (mut surface, mut controller) = mounted();
    event(
        &mut surface,
        &mut controller,
        FormEvent::AttendanceChanged { attending: false },
    );

    let payload = controller
        .handle(&mut surface, FormEvent::SubmitRequested)
        .unwrap()
        .unwrap();

    assert!(!payload.attending);
    assert_eq!(payload.guest_count, 0);
    assert!(payload.guests.is_empty());
}

#[test]
fn blank_guest_name_blocks_submission() {
    let (mut surface, mut controller) = filled_form();
    event(
        &mut surface,
        &mut controller,
        FormEvent::GuestNameChanged {
            index: 1,
            value: "   ".to_string(),
        },
    );

    let err = controller
        .handle(&mut surface, FormEvent::SubmitRequested)
        .unwrap_err();
    assert_eq!(err, SubmitError::EmptyGuestName { index: 1 });
    assert_eq!(surface.live_blocks(), 2);
}

#[test]
fn other_without_note_blocks_submission() {
    let (mut surface, mut controller) = filled_form();
    event(
        &mut surface,
        &mut controller,
        FormEvent::GuestNoteChanged {
            index: 2,
            value: String::new(),
        },
    );

    let err = controller
        .handle(&mut surface, FormEvent::SubmitRequested)
        .unwrap_err();
    assert_eq!(err, SubmitError::MissingDietaryNote { index: 2 });
}
