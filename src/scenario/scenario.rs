use anyhow::Result;

use crate::{
    config::watcher_config::WebhookConfig,
    dingtalk::{dingtalk_config::DingTalkConfig, dingtalk_notifier::DingTalkNotifier},
    notify::{DynamicNotifier, dry_run::DryRunNotifier},
    scenario::notifiers::NotifierKind,
};

pub struct Scenario;

impl Scenario {
    pub fn notifier(kind: NotifierKind, webhook: &WebhookConfig) -> Result<DynamicNotifier> {
        tracing::info!(notifier = %kind, "creating notifier");

        let notifier: DynamicNotifier = match kind {
            NotifierKind::DryRun => Box::new(DryRunNotifier),
            NotifierKind::DingTalk => {
                let config = DingTalkConfig::from_env()?;

                Box::new(DingTalkNotifier::new(config, webhook)?)
            }
        };

        Ok(notifier)
    }
}
