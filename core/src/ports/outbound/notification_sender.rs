use crate::domain::models::ids::CustomerId;

/// Delivers a human-readable message to a customer.
///
/// The ledger fires and forgets: an `Err` is logged and never undoes the
/// booking change that triggered the message.
pub trait NotificationSender: Send + Sync {
    fn send(&self, customer_id: CustomerId, message: &str) -> anyhow::Result<()>;
}
