use pretty_assertions::assert_eq;
use showcase_core::{
    update, FileMeta, Notification, SlotEffect, SlotMsg, SlotState, UploadError, UploadLimits,
};

const PNG_URI: &str = "data:image/png;base64,iVBORw0KGgo=";
const GIF_URI: &str = "data:image/gif;base64,R0lGODlh";

fn png(size: u64) -> FileMeta {
    FileMeta::new("photo.png", "image/png", size)
}

fn start(state: SlotState, file: FileMeta) -> (SlotState, u64) {
    let (state, effects) = update(state, SlotMsg::FileChosen(file));
    let ticket = effects
        .iter()
        .find_map(|effect| match effect {
            SlotEffect::StartRead { ticket, .. } => Some(*ticket),
            _ => None,
        })
        .expect("start read effect");
    (state, ticket)
}

fn finish(
    state: SlotState,
    ticket: u64,
    result: Result<&str, UploadError>,
) -> (SlotState, Vec<SlotEffect>) {
    update(
        state,
        SlotMsg::ReadFinished {
            ticket,
            result: result.map(str::to_string),
        },
    )
}

fn loaded_slot(uri: &str) -> SlotState {
    let (state, ticket) = start(SlotState::new(UploadLimits::default()), png(2048));
    let (mut state, _) = finish(state, ticket, Ok(uri));
    state.consume_dirty();
    state
}

#[test]
fn successful_read_shows_preview_and_one_success() {
    let (state, ticket) = start(SlotState::new(UploadLimits::default()), png(2 * 1024 * 1024));
    assert!(state.is_loading());

    let (mut state, effects) = finish(state, ticket, Ok(PNG_URI));

    assert_eq!(
        effects,
        vec![SlotEffect::Notify(Notification::success(
            "Image uploaded successfully!"
        ))]
    );
    assert!(!state.is_loading());
    assert!(state.has_image());
    assert_eq!(state.preview(), Some(PNG_URI));
    let view = state.view();
    assert!(view.shows_remove_control());
    assert_eq!(view.background_image().unwrap(), format!("url({PNG_URI})"));
    assert!(state.consume_dirty());
}

#[test]
fn failed_read_on_empty_slot_returns_to_empty() {
    let (state, ticket) = start(SlotState::new(UploadLimits::default()), png(10));
    let (state, effects) = finish(
        state,
        ticket,
        Err(UploadError::ReadFailure("disk went away".into())),
    );

    assert_eq!(
        effects,
        vec![SlotEffect::Notify(Notification::error("Error uploading image"))]
    );
    assert!(!state.is_loading());
    assert!(!state.has_image());
    assert_eq!(state.preview(), None);
}

#[test]
fn failed_read_keeps_prior_image() {
    let state = loaded_slot(PNG_URI);
    let (state, ticket) = start(state, png(10));
    assert!(state.is_loading());
    assert_eq!(state.preview(), Some(PNG_URI));

    let (state, effects) = finish(state, ticket, Err(UploadError::ReadFailure("boom".into())));

    assert_eq!(effects.len(), 1);
    assert!(!state.is_loading());
    assert_eq!(state.preview(), Some(PNG_URI));
    assert!(state.view().shows_remove_control());
}

#[test]
fn empty_data_uri_counts_as_failure() {
    let (state, ticket) = start(SlotState::new(UploadLimits::default()), png(0));
    let (state, effects) = finish(state, ticket, Ok(""));

    assert_eq!(
        effects,
        vec![SlotEffect::Notify(Notification::error("Error uploading image"))]
    );
    assert!(!state.has_image());
}

#[test]
fn second_upload_replaces_preview_and_keeps_single_control() {
    let state = loaded_slot(PNG_URI);
    let attached = state.view().shows_remove_control();
    assert!(attached);

    let (state, ticket) = start(state, png(10));
    let (state, _) = finish(state, ticket, Ok(GIF_URI));

    assert_eq!(state.preview(), Some(GIF_URI));
    assert_eq!(
        state.view().reconcile_remove_control(attached),
        showcase_core::ControlChange::Keep
    );
}

#[test]
fn newer_upload_supersedes_pending_read() {
    let (state, first) = start(SlotState::new(UploadLimits::default()), png(10));
    let (state, effects) = update(state, SlotMsg::FileChosen(png(20)));

    assert_eq!(
        effects,
        vec![
            SlotEffect::CancelRead { ticket: first },
            SlotEffect::StartRead {
                ticket: first + 1,
                file: png(20),
            },
        ]
    );

    // The superseded completion is ignored entirely.
    let (mut state, effects) = finish(state, first, Ok(PNG_URI));
    assert!(effects.is_empty());
    assert!(state.is_loading());
    assert!(!state.has_image());
    assert!(state.consume_dirty(), "dirty from the second start");

    let (state, effects) = finish(state, first + 1, Ok(GIF_URI));
    assert_eq!(effects.len(), 1);
    assert_eq!(state.preview(), Some(GIF_URI));
}

#[test]
fn removal_clears_preview_and_resets_picker() {
    let state = loaded_slot(PNG_URI);
    let (mut state, effects) = update(state, SlotMsg::RemoveClicked);

    assert_eq!(
        effects,
        vec![
            SlotEffect::ResetPicker,
            SlotEffect::Notify(Notification::info("Image removed")),
        ]
    );
    assert!(!state.has_image());
    assert_eq!(state.preview(), None);
    assert!(!state.view().shows_remove_control());
    assert!(state.consume_dirty());

    // A second removal finds an empty slot.
    let (_state, effects) = update(state, SlotMsg::RemoveClicked);
    assert!(effects.is_empty());
}

#[test]
fn removal_while_reloading_cancels_pending_read() {
    let state = loaded_slot(PNG_URI);
    let (state, ticket) = start(state, png(10));
    let (state, effects) = update(state, SlotMsg::RemoveClicked);

    assert_eq!(effects[0], SlotEffect::CancelRead { ticket });
    assert!(!state.is_loading());

    let (state, effects) = finish(state, ticket, Ok(GIF_URI));
    assert!(effects.is_empty());
    assert!(!state.has_image());
}

#[test]
fn tickets_keep_increasing_across_cycles() {
    let (state, first) = start(SlotState::new(UploadLimits::default()), png(1));
    let (state, _) = finish(state, first, Ok(PNG_URI));
    let (state, _) = update(state, SlotMsg::RemoveClicked);
    let (_state, second) = start(state, png(1));
    assert!(second > first);
}
