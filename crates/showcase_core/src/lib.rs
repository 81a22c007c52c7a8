//! Showcase core: pure state machines and view models for the portfolio page.
mod effect;
mod msg;
mod nav;
mod notification;
mod scroll;
mod state;
mod toast;
mod update;
mod upload;
mod view_model;

pub use effect::SlotEffect;
pub use msg::SlotMsg;
pub use nav::{anchor_fragment, NavMenu, NavMsg};
pub use notification::{Notification, NotificationKind};
pub use scroll::{
    active_section, scroll_target, should_enter, should_reveal, timeline_delay_ms, timeline_visible,
    visible_fraction, HeaderStyle, ScrollSettings, SectionBounds,
};
pub use state::{ReadTicket, SlotState};
pub use toast::{
    ActiveToast, NotificationCenter, ShowOutcome, ToastId, ToastPhase, ToastStep, ToastTimings,
};
pub use update::{update, IMAGE_REMOVED_TEXT, UPLOAD_SUCCESS_TEXT};
pub use upload::{validate, FileMeta, UploadError, UploadLimits, DEFAULT_MAX_UPLOAD_BYTES};
pub use view_model::{
    ControlChange, SlotView, CLASS_DRAG_OVER, CLASS_HAS_IMAGE, CLASS_LOADING,
};

/// Re-exported so hosts can resolve link targets without a direct dependency.
pub use url::Url;
