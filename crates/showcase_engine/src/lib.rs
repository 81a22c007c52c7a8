//! Showcase engine: executes slot effects and drives notifications.
mod data_uri;
mod reader;
mod runtime;
mod surface;
mod task;
mod toast;

pub use data_uri::encode_data_uri;
pub use reader::{ImageReader, MemoryFile, MemoryReader, ReadError, SourceFile};
pub use runtime::{SlotId, SlotRuntime};
pub use surface::{NotificationSink, SlotSurface};
pub use task::ReadJob;
pub use toast::{Sleeper, ToastSurface, Toaster};
