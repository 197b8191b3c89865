use async_trait::async_trait;
use tracing::info;

use crate::notify::Notifier;
use crate::types::notification::Notification;

#[derive(Debug, Default)]
pub struct DryRunNotifier;

#[async_trait]
impl Notifier for DryRunNotifier {
    async fn notify(&self, notification: &Notification) {
        info!(
            hospital = %notification.hospital_name,
            title = %notification.title,
            "dry run notification:\n{}",
            notification.content()
        );
    }
}
