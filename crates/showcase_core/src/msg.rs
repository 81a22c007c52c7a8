use crate::{FileMeta, ReadTicket, UploadError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotMsg {
    /// Visitor clicked the placeholder itself.
    Activated,
    /// A drag is hovering over the placeholder.
    DragOver,
    /// The drag left the placeholder without dropping.
    DragLeft,
    /// Files were dropped; carries the first one, if any.
    Dropped(Option<FileMeta>),
    /// The file picker yielded a file.
    FileChosen(FileMeta),
    /// An asynchronous read completed, successfully or not.
    ReadFinished {
        ticket: ReadTicket,
        result: Result<String, UploadError>,
    },
    /// Visitor clicked the removal control.
    RemoveClicked,
}
