use showcase_core::{ReadTicket, SlotMsg, UploadError};
use tokio_util::sync::CancellationToken;

use crate::reader::ImageReader;

/// One in-flight read. The owning slot keeps a clone of `token` and cancels it
/// when the read is superseded, the image is removed, or the slot goes away.
pub struct ReadJob<F> {
    ticket: ReadTicket,
    file: F,
    token: CancellationToken,
}

impl<F> ReadJob<F> {
    pub(crate) fn new(ticket: ReadTicket, file: F, token: CancellationToken) -> Self {
        Self {
            ticket,
            file,
            token,
        }
    }

    pub fn ticket(&self) -> ReadTicket {
        self.ticket
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Runs the read to completion. `None` when cancelled first; the reader's
    /// future is dropped in that case.
    pub async fn run<R>(self, reader: &R) -> Option<SlotMsg>
    where
        R: ImageReader<F> + ?Sized,
    {
        let ReadJob {
            ticket,
            file,
            token,
        } = self;
        let result = token
            .run_until_cancelled(reader.read_data_uri(&file))
            .await?;
        Some(SlotMsg::ReadFinished {
            ticket,
            result: result.map_err(|err| UploadError::ReadFailure(err.to_string())),
        })
    }
}
