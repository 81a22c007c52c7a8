use showcase_core::{Notification, SlotView};

/// Where a slot's visual state and file picker live.
pub trait SlotSurface {
    fn render(&self, view: &SlotView);
    fn open_picker(&self);
    fn reset_picker(&self);
}

pub trait NotificationSink {
    fn notify(&self, notification: Notification);
}
