//! Single-slot notification center.
//!
//! At most one notification is on screen. Showing a new one evicts the
//! current one immediately; timers scheduled for the evicted notification
//! then find a stale id and do nothing.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::Notification;

pub type ToastId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastTimings {
    /// Delay between mounting and sliding in.
    pub enter_delay_ms: u64,
    /// Time from mounting until the slide-out starts.
    pub visible_ms: u64,
    /// Length of the slide-out transition before unmounting.
    pub exit_ms: u64,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            enter_delay_ms: 100,
            visible_ms: 3000,
            exit_ms: 300,
        }
    }
}

impl ToastTimings {
    pub fn enter_delay(&self) -> Duration {
        Duration::from_millis(self.enter_delay_ms)
    }

    pub fn hold(&self) -> Duration {
        Duration::from_millis(self.visible_ms.saturating_sub(self.enter_delay_ms))
    }

    pub fn exit(&self) -> Duration {
        Duration::from_millis(self.exit_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Visible,
    Leaving,
}

/// Transition produced by [`NotificationCenter::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStep {
    Reveal,
    Hide,
    Remove,
    /// The id no longer refers to the visible notification.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveToast {
    pub id: ToastId,
    pub notification: Notification,
    pub phase: ToastPhase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowOutcome {
    pub id: ToastId,
    pub evicted: Option<ToastId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationCenter {
    current: Option<ActiveToast>,
    next_id: ToastId,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&ActiveToast> {
        self.current.as_ref()
    }

    pub fn show(&mut self, notification: Notification) -> ShowOutcome {
        self.next_id += 1;
        let id = self.next_id;
        let evicted = self
            .current
            .replace(ActiveToast {
                id,
                notification,
                phase: ToastPhase::Entering,
            })
            .map(|old| old.id);
        ShowOutcome { id, evicted }
    }

    /// Moves the notification `id` to its next phase.
    pub fn advance(&mut self, id: ToastId) -> ToastStep {
        let Some(active) = self.current.as_mut().filter(|active| active.id == id) else {
            return ToastStep::Stale;
        };
        match active.phase {
            ToastPhase::Entering => {
                active.phase = ToastPhase::Visible;
                ToastStep::Reveal
            }
            ToastPhase::Visible => {
                active.phase = ToastPhase::Leaving;
                ToastStep::Hide
            }
            ToastPhase::Leaving => {
                self.current = None;
                ToastStep::Remove
            }
        }
    }
}
