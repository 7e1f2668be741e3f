use crate::domain::model::InquiryRequest;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::Serialize;

/// Delivers a validated inquiry somewhere. The only await point of a submit.
#[async_trait]
pub trait OutboundAction: Send + Sync {
    async fn send(&self, request: &InquiryRequest) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A transient, user-facing toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// Fire-and-forget sink for notifications; the form never waits on it.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
