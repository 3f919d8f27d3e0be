use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::models::ids::CustomerId;
use crate::ports::outbound::notification_sender::NotificationSender;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentNotification {
    pub customer_id: CustomerId,
    pub message: String,
}

/// Keeps every message it is asked to send, in order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<SentNotification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<SentNotification> {
        self.lock().clone()
    }

    pub fn sent_to(&self, customer_id: CustomerId) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|n| n.customer_id == customer_id)
            .map(|n| n.message.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drains the recorded messages.
    pub fn take(&self) -> Vec<SentNotification> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<SentNotification>> {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl NotificationSender for RecordingNotifier {
    fn send(&self, customer_id: CustomerId, message: &str) -> anyhow::Result<()> {
        self.lock().push(SentNotification {
            customer_id,
            message: message.to_string(),
        });
        Ok(())
    }
}
