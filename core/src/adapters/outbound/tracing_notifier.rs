use tracing::info;

use crate::domain::models::ids::CustomerId;
use crate::ports::outbound::notification_sender::NotificationSender;

/// Emits every notification as a `lodgr::notify` tracing event.
///
/// Stands in for a real delivery channel; whatever subscriber is installed
/// decides where the messages end up.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl NotificationSender for TracingNotifier {
    fn send(&self, customer_id: CustomerId, message: &str) -> anyhow::Result<()> {
        info!(target: "lodgr::notify", %customer_id, "{message}");
        Ok(())
    }
}
