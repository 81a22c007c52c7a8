#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::sync::Once;

use showcase_core::{ControlChange, Notification, SlotView};
use showcase_engine::{NotificationSink, SlotSurface};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(showcase_logging::initialize_for_tests);
}

/// Surface that records what a DOM placeholder would show.
#[derive(Default)]
pub struct RecordingSurface {
    pub renders: RefCell<Vec<SlotView>>,
    pub pickers_opened: Cell<usize>,
    pub picker_resets: Cell<usize>,
    pub remove_controls: Cell<usize>,
    pub attachments: Cell<usize>,
}

impl RecordingSurface {
    pub fn last_view(&self) -> SlotView {
        self.renders.borrow().last().cloned().unwrap_or_default()
    }

    pub fn saw_loading(&self) -> bool {
        self.renders.borrow().iter().any(|view| view.loading)
    }
}

impl SlotSurface for RecordingSurface {
    fn render(&self, view: &SlotView) {
        match view.reconcile_remove_control(self.remove_controls.get() > 0) {
            ControlChange::Attach => {
                self.remove_controls.set(self.remove_controls.get() + 1);
                self.attachments.set(self.attachments.get() + 1);
            }
            ControlChange::Detach => self.remove_controls.set(0),
            ControlChange::Keep => {}
        }
        self.renders.borrow_mut().push(view.clone());
    }

    fn open_picker(&self) {
        self.pickers_opened.set(self.pickers_opened.get() + 1);
    }

    fn reset_picker(&self) {
        self.picker_resets.set(self.picker_resets.get() + 1);
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub notifications: RefCell<Vec<Notification>>,
}

impl RecordingSink {
    pub fn take(&self) -> Vec<Notification> {
        self.notifications.borrow_mut().drain(..).collect()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        self.notifications.borrow_mut().push(notification);
    }
}
