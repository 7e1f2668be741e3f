use crate::domain::ports::{Notification, NotificationLevel, Notifier};
use tokio::sync::mpsc;

/// Writes notifications to the log.
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => tracing::info!("✅ {}", notification.message),
            NotificationLevel::Error => tracing::warn!("❌ {}", notification.message),
        }
    }
}

pub const DEFAULT_TOAST_CAPACITY: usize = 16;

/// Forwards notifications to whoever renders toasts. The queue is bounded;
/// a toast that does not fit is dropped instead of blocking the form.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::Sender<Notification>,
}

impl ChannelNotifier {
    pub fn channel() -> (Self, mpsc::Receiver<Notification>) {
        Self::with_capacity(DEFAULT_TOAST_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> (Self, mpsc::Receiver<Notification>) {
        // tokio 的 channel 容量不可為 0
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        match self.tx.try_send(notification) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(dropped)) => {
                tracing::debug!("Notification dropped, toast queue full: {}", dropped.message)
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                tracing::debug!("Notification dropped: no toast receiver")
            }
        }
    }
}
