use showcase_core::FileMeta;
use thiserror::Error;

use crate::data_uri::encode_data_uri;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    #[error("read failed: {0}")]
    Io(String),
    #[error("read aborted")]
    Aborted,
}

/// A file handle offered to a slot.
pub trait SourceFile {
    fn meta(&self) -> FileMeta;
}

/// Reads a whole file and encodes it as a data URI.
///
/// Dropping the returned future must abandon the read.
#[async_trait::async_trait(?Send)]
pub trait ImageReader<F> {
    async fn read_data_uri(&self, file: &F) -> Result<String, ReadError>;
}

/// File whose contents are already in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryFile {
    pub meta: FileMeta,
    pub bytes: Vec<u8>,
}

impl MemoryFile {
    pub fn new(name: &str, mime_type: &str, bytes: Vec<u8>) -> Self {
        Self {
            meta: FileMeta::new(name, mime_type, bytes.len() as u64),
            bytes,
        }
    }
}

impl SourceFile for MemoryFile {
    fn meta(&self) -> FileMeta {
        self.meta.clone()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MemoryReader;

#[async_trait::async_trait(?Send)]
impl ImageReader<MemoryFile> for MemoryReader {
    async fn read_data_uri(&self, file: &MemoryFile) -> Result<String, ReadError> {
        Ok(encode_data_uri(&file.meta.mime_type, &file.bytes))
    }
}
