use std::cell::RefCell;
use std::time::Duration;

use showcase_core::{Notification, NotificationCenter, ToastId, ToastStep, ToastTimings};
use showcase_logging::showcase_debug;

/// Display side of the notification sink.
pub trait ToastSurface {
    fn mount(&self, id: ToastId, notification: &Notification);
    fn reveal(&self, id: ToastId);
    fn hide(&self, id: ToastId);
    fn unmount(&self, id: ToastId);
}

#[async_trait::async_trait(?Send)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

/// Drives notifications through mount, reveal, hide and unmount.
pub struct Toaster<S, T> {
    center: RefCell<NotificationCenter>,
    timings: ToastTimings,
    surface: S,
    sleeper: T,
}

impl<S: ToastSurface, T: Sleeper> Toaster<S, T> {
    pub fn new(timings: ToastTimings, surface: S, sleeper: T) -> Self {
        Self {
            center: RefCell::new(NotificationCenter::new()),
            timings,
            surface,
            sleeper,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn visible(&self) -> Option<Notification> {
        self.center
            .borrow()
            .current()
            .map(|active| active.notification.clone())
    }

    /// Shows `notification` and resolves once it has been unmounted or evicted.
    pub async fn present(&self, notification: Notification) {
        let shown = self.center.borrow_mut().show(notification.clone());
        if let Some(evicted) = shown.evicted {
            self.surface.unmount(evicted);
        }
        self.surface.mount(shown.id, &notification);

        let delays = [
            self.timings.enter_delay(),
            self.timings.hold(),
            self.timings.exit(),
        ];
        for delay in delays {
            self.sleeper.sleep(delay).await;
            let step = self.center.borrow_mut().advance(shown.id);
            match step {
                ToastStep::Reveal => self.surface.reveal(shown.id),
                ToastStep::Hide => self.surface.hide(shown.id),
                ToastStep::Remove => self.surface.unmount(shown.id),
                ToastStep::Stale => {
                    showcase_debug!("notification #{} superseded", shown.id);
                    return;
                }
            }
        }
    }
}
