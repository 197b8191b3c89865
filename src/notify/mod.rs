pub mod dry_run;

use async_trait::async_trait;

use crate::types::notification::Notification;

pub type DynamicNotifier = Box<dyn Notifier + Send + Sync>;

/// Best-effort delivery of a bookable-offering alert.
///
/// Implementations log delivery failures and return; nothing is retried and
/// nothing is reported back to the caller.
#[async_trait]
pub trait Notifier {
    async fn notify(&self, notification: &Notification);
}
