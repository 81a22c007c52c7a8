use crate::upload::validate;
use crate::{FileMeta, Notification, SlotEffect, SlotMsg, SlotState, UploadError};

pub const UPLOAD_SUCCESS_TEXT: &str = "Image uploaded successfully!";
pub const IMAGE_REMOVED_TEXT: &str = "Image removed";

/// Pure update function: applies a message to a slot and returns any effects.
pub fn update(mut state: SlotState, msg: SlotMsg) -> (SlotState, Vec<SlotEffect>) {
    let effects = match msg {
        SlotMsg::Activated => vec![SlotEffect::OpenPicker],
        SlotMsg::DragOver => {
            state.set_armed(true);
            Vec::new()
        }
        SlotMsg::DragLeft => {
            state.set_armed(false);
            Vec::new()
        }
        SlotMsg::Dropped(first) => {
            state.set_armed(false);
            match first {
                Some(file) => offer(&mut state, file),
                None => Vec::new(),
            }
        }
        SlotMsg::FileChosen(file) => offer(&mut state, file),
        SlotMsg::ReadFinished { ticket, result } => {
            if !state.finish_read(ticket) {
                // Superseded or cancelled read; the slot has moved on.
                return (state, Vec::new());
            }
            match result {
                Ok(uri) if !uri.is_empty() => {
                    state.set_preview(uri);
                    vec![SlotEffect::Notify(Notification::success(
                        UPLOAD_SUCCESS_TEXT,
                    ))]
                }
                Ok(_) => read_failed(&UploadError::ReadFailure("empty data uri".into())),
                Err(err) => read_failed(&err),
            }
        }
        SlotMsg::RemoveClicked => {
            if !state.has_image() {
                return (state, Vec::new());
            }
            let mut effects = Vec::with_capacity(3);
            if let Some(ticket) = state.clear() {
                effects.push(SlotEffect::CancelRead { ticket });
            }
            effects.push(SlotEffect::ResetPicker);
            effects.push(SlotEffect::Notify(Notification::info(IMAGE_REMOVED_TEXT)));
            effects
        }
    };

    (state, effects)
}

fn offer(state: &mut SlotState, file: FileMeta) -> Vec<SlotEffect> {
    if let Err(err) = validate(&file, state.limits()) {
        return vec![SlotEffect::Notify(Notification::error(err.user_message()))];
    }

    // Last write wins: a newer candidate supersedes a read still in flight.
    let (ticket, superseded) = state.begin_read();
    let mut effects = Vec::with_capacity(2);
    if let Some(old) = superseded {
        effects.push(SlotEffect::CancelRead { ticket: old });
    }
    effects.push(SlotEffect::StartRead { ticket, file });
    effects
}

fn read_failed(err: &UploadError) -> Vec<SlotEffect> {
    vec![SlotEffect::Notify(Notification::error(err.user_message()))]
}
