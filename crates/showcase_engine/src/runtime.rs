use std::collections::HashMap;

use showcase_core::{
    update, ReadTicket, SlotEffect, SlotMsg, SlotState, SlotView, UploadError, UploadLimits,
};
use showcase_logging::{showcase_debug, showcase_info, showcase_warn};
use tokio_util::sync::CancellationToken;

use crate::reader::SourceFile;
use crate::surface::{NotificationSink, SlotSurface};
use crate::task::ReadJob;

pub type SlotId = usize;

/// Owns one upload slot: runs the pure update, executes its effects against
/// the surface and sink, and hands out read jobs for the host to spawn.
pub struct SlotRuntime<F> {
    id: SlotId,
    state: SlotState,
    in_flight: HashMap<ReadTicket, CancellationToken>,
    _file: std::marker::PhantomData<fn(F)>,
}

impl<F: SourceFile> SlotRuntime<F> {
    pub fn new(id: SlotId, limits: UploadLimits) -> Self {
        Self {
            id,
            state: SlotState::new(limits),
            in_flight: HashMap::new(),
            _file: std::marker::PhantomData,
        }
    }

    pub fn id(&self) -> SlotId {
        self.id
    }

    pub fn state(&self) -> &SlotState {
        &self.state
    }

    pub fn view(&self) -> SlotView {
        self.state.view()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Renders the current view without applying a message. Hosts call this
    /// once after wiring so the surface matches the initial state.
    pub fn refresh(&self, surface: &dyn SlotSurface) {
        surface.render(&self.state.view());
    }

    /// Applies a message that carries no file handle.
    pub fn dispatch(
        &mut self,
        msg: SlotMsg,
        surface: &dyn SlotSurface,
        sink: &dyn NotificationSink,
    ) -> Option<ReadJob<F>> {
        self.apply(msg, None, surface, sink)
    }

    /// The picker yielded `file`.
    pub fn choose_file(
        &mut self,
        file: F,
        surface: &dyn SlotSurface,
        sink: &dyn NotificationSink,
    ) -> Option<ReadJob<F>> {
        let meta = file.meta();
        self.apply(SlotMsg::FileChosen(meta), Some(file), surface, sink)
    }

    /// Files were dropped on the slot. Only the first one is considered.
    pub fn drop_files<I>(
        &mut self,
        files: I,
        surface: &dyn SlotSurface,
        sink: &dyn NotificationSink,
    ) -> Option<ReadJob<F>>
    where
        I: IntoIterator<Item = F>,
    {
        let first = files.into_iter().next();
        let meta = first.as_ref().map(SourceFile::meta);
        self.apply(SlotMsg::Dropped(meta), first, surface, sink)
    }

    fn apply(
        &mut self,
        msg: SlotMsg,
        mut file: Option<F>,
        surface: &dyn SlotSurface,
        sink: &dyn NotificationSink,
    ) -> Option<ReadJob<F>> {
        if let SlotMsg::ReadFinished { ticket, .. } = &msg {
            if self.in_flight.remove(ticket).is_none() {
                showcase_debug!("slot {} ignoring stale read #{}", self.id, ticket);
            }
        }

        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        let mut job = None;
        let mut follow_up = None;
        for effect in effects {
            match effect {
                SlotEffect::OpenPicker => surface.open_picker(),
                SlotEffect::ResetPicker => surface.reset_picker(),
                SlotEffect::Notify(notification) => sink.notify(notification),
                SlotEffect::CancelRead { ticket } => {
                    if let Some(token) = self.in_flight.remove(&ticket) {
                        showcase_debug!("slot {} cancelling read #{}", self.id, ticket);
                        token.cancel();
                    }
                }
                SlotEffect::StartRead { ticket, file: meta } => match file.take() {
                    Some(handle) => {
                        showcase_info!(
                            "slot {} reading {:?} ({} bytes, {}) as #{}",
                            self.id,
                            meta.name,
                            meta.size,
                            meta.mime_type,
                            ticket
                        );
                        let token = CancellationToken::new();
                        self.in_flight.insert(ticket, token.clone());
                        job = Some(ReadJob::new(ticket, handle, token));
                    }
                    None => {
                        showcase_warn!("slot {} has no file handle for read #{}", self.id, ticket);
                        follow_up = Some(SlotMsg::ReadFinished {
                            ticket,
                            result: Err(UploadError::ReadFailure(
                                "file handle unavailable".into(),
                            )),
                        });
                    }
                },
            }
        }

        if self.state.consume_dirty() {
            surface.render(&self.state.view());
        }

        match follow_up {
            Some(msg) => self.apply(msg, None, surface, sink),
            None => job,
        }
    }
}

impl<F> Drop for SlotRuntime<F> {
    fn drop(&mut self) {
        for (_, token) in self.in_flight.drain() {
            token.cancel();
        }
    }
}
