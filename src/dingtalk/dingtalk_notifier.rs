use std::fmt;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, warn};
use url::Url;

use crate::config::watcher_config::WebhookConfig;
use crate::dingtalk::{dingtalk_config::DingTalkConfig, utils::sign_webhook};
use crate::notify::Notifier;
use crate::types::notification::Notification;

/// Posts text messages to a DingTalk group robot.
#[derive(Clone)]
pub struct DingTalkNotifier {
    http: reqwest::Client,
    webhook_url: Url,
    access_token: String,
    secret: Option<String>,
}

impl DingTalkNotifier {
    pub fn new(config: DingTalkConfig, webhook: &WebhookConfig) -> Result<Self> {
        let webhook_url = Url::parse(&webhook.url)
            .with_context(|| format!("invalid webhook url {}", webhook.url))?;

        let http = reqwest::Client::builder()
            .timeout(webhook.timeout())
            .build()
            .context("failed to build webhook http client")?;

        Ok(Self {
            http,
            webhook_url,
            access_token: config.access_token,
            secret: config.secret,
        })
    }

    fn request_url(&self, timestamp_ms: i64) -> Result<Url> {
        let mut url = self.webhook_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("access_token", &self.access_token);

            if let Some(secret) = &self.secret {
                let sign = sign_webhook(timestamp_ms, secret)?;
                query.append_pair("timestamp", &timestamp_ms.to_string());
                query.append_pair("sign", &sign);
            }
        }

        Ok(url)
    }

    pub async fn post(&self, notification: &Notification) -> Result<DingTalkReply> {
        let url = self.request_url(chrono::Utc::now().timestamp_millis())?;

        let response = self
            .http
            .post(url)
            .json(&notification.text_message())
            .send()
            .await
            .context("webhook POST failed")?;

        let status = response.status();
        let text = response.text().await.context("read webhook response failed")?;

        info!(%status, raw = %text, "webhook response");

        if !status.is_success() {
            anyhow::bail!("webhook http error {status}: {text}");
        }

        /* NOTE: a body that is not the usual errcode/errmsg object is not a delivery failure */
        Ok(serde_json::from_str(&text).unwrap_or_default())
    }
}

impl fmt::Debug for DingTalkNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DingTalkNotifier")
            .field("webhook_url", &self.webhook_url.as_str())
            .field("access_token", &"<redacted>")
            .field("signed", &self.secret.is_some())
            .finish()
    }
}

#[async_trait]
impl Notifier for DingTalkNotifier {
    async fn notify(&self, notification: &Notification) {
        match self.post(notification).await {
            Ok(reply) if reply.errcode != 0 => {
                warn!(errcode = reply.errcode, errmsg = %reply.errmsg, "webhook rejected notification");
            }
            Ok(_) => {}
            Err(error) => {
                warn!(hospital = %notification.hospital_name, "notification not delivered: {error:#}");
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DingTalkReply {
    pub errcode: i64,
    pub errmsg: String,
}
