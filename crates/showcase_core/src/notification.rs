use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Warning,
}

impl NotificationKind {
    /// Suffix used in the `notification-{kind}` class.
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warning",
        }
    }

    pub fn background_color(self) -> &'static str {
        match self {
            NotificationKind::Success => "#10b981",
            NotificationKind::Error => "#ef4444",
            NotificationKind::Info => "#3b82f6",
            NotificationKind::Warning => "#f59e0b",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(kind: NotificationKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(NotificationKind::Warning, text)
    }

    pub fn class_name(&self) -> String {
        format!("notification notification-{}", self.kind.as_str())
    }
}
