use crate::{FileMeta, Notification, ReadTicket};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotEffect {
    OpenPicker,
    /// Clear the file input so the same file can be chosen again.
    ResetPicker,
    StartRead { ticket: ReadTicket, file: FileMeta },
    CancelRead { ticket: ReadTicket },
    Notify(Notification),
}
