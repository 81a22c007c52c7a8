use crate::upload::UploadLimits;
use crate::view_model::SlotView;

/// Identifies one read attempt on a slot. Later tickets supersede earlier ones.
pub type ReadTicket = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlotState {
    limits: UploadLimits,
    preview: Option<String>,
    pending: Option<ReadTicket>,
    armed: bool,
    next_ticket: ReadTicket,
    dirty: bool,
}

impl SlotState {
    pub fn new(limits: UploadLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    pub fn view(&self) -> SlotView {
        SlotView {
            armed: self.armed,
            loading: self.pending.is_some(),
            preview_uri: self.preview.clone(),
        }
    }

    pub fn limits(&self) -> &UploadLimits {
        &self.limits
    }

    pub fn has_image(&self) -> bool {
        self.preview.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    /// Returns whether the state changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_armed(&mut self, armed: bool) {
        if self.armed != armed {
            self.armed = armed;
            self.dirty = true;
        }
    }

    /// Issues a fresh ticket and marks the slot as loading. Returns the ticket
    /// it supersedes, if a read was still in flight.
    pub(crate) fn begin_read(&mut self) -> (ReadTicket, Option<ReadTicket>) {
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        let superseded = self.pending.replace(ticket);
        self.dirty = true;
        (ticket, superseded)
    }

    /// Ends the read identified by `ticket`. False when the ticket is stale.
    pub(crate) fn finish_read(&mut self, ticket: ReadTicket) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;
        self.dirty = true;
        true
    }

    pub(crate) fn set_preview(&mut self, uri: String) {
        self.preview = Some(uri);
        self.dirty = true;
    }

    /// Clears the preview and abandons any read in flight.
    pub(crate) fn clear(&mut self) -> Option<ReadTicket> {
        self.preview = None;
        self.dirty = true;
        self.pending.take()
    }
}
