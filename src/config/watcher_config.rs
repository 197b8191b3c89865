use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WatcherConfig {
    pub upstream: UpstreamConfig,
    pub webhook: WebhookConfig,
    pub watch: WatchConfig,
}

/// The cn2030 subscribe service. Header values mimic the WeChat mini-program
/// the service expects; requests without them are rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub endpoint: String,
    /// JSON array string: `[province, city, county]`.
    pub city: String,
    pub city_code: String,
    pub product: String,
    pub lat: f64,
    pub lng: f64,
    pub referer: String,
    pub user_agent: String,
    pub host: Option<String>,
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://cloud.cn2030.com/sc/wx/HandlerSubscribe.ashx".to_string(),
            city: r#"["广西壮族自治区","南宁市",""]"#.to_string(),
            city_code: "450100".to_string(),
            product: "1".to_string(),
            lat: 22.547216796875,
            lng: 113.94323920355903,
            referer: "https://servicewechat.com/wx2c7f0f3c30d99445/91/page-frame.html".to_string(),
            user_agent: "Mozilla/5.0 (iPhone; CPU iPhone OS 15_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148 MicroMessenger/8.0.16(0x18001032) NetType/WIFI Language/zh_CN".to_string(),
            host: Some("cloud.cn2030.com".to_string()),
            timeout_secs: 5,
        }
    }
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    pub url: String,
    pub timeout_secs: u64,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: "https://oapi.dingtalk.com/robot/send".to_string(),
            timeout_secs: 5,
        }
    }
}

impl WebhookConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Case-sensitive substring an offering's text must contain.
    pub marker: String,
    pub refresh_interval_secs: u64,
    pub pacing_millis: u64,
    pub snapshot_wait_secs: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            marker: "九价".to_string(),
            refresh_interval_secs: 5,
            pacing_millis: 1000,
            snapshot_wait_secs: 5,
        }
    }
}

impl WatchConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_millis)
    }

    pub fn snapshot_wait(&self) -> Duration {
        Duration::from_secs(self.snapshot_wait_secs)
    }
}

impl WatcherConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::info!(path = %path.display(), "config file not found, using built-in defaults");
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;

        let config = Self::parse(&raw)
            .with_context(|| format!("failed to load config {}", path.display()))?;

        Ok(config)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let config: WatcherConfig =
            serde_yaml::from_str(raw).context("failed to parse watcher config")?;

        config
            .validate()
            .context("watcher config validation failed")?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.upstream.endpoint.trim().is_empty() {
            bail!("upstream.endpoint must not be empty");
        }
        if self.upstream.timeout_secs == 0 {
            bail!("upstream.timeout_secs must be > 0");
        }
        if self.webhook.url.trim().is_empty() {
            bail!("webhook.url must not be empty");
        }
        if self.webhook.timeout_secs == 0 {
            bail!("webhook.timeout_secs must be > 0");
        }
        if self.watch.marker.is_empty() {
            bail!("watch.marker must not be empty");
        }
        if self.watch.refresh_interval_secs == 0 {
            bail!("watch.refresh_interval_secs must be > 0");
        }
        if self.watch.pacing_millis == 0 {
            bail!("watch.pacing_millis must be > 0");
        }
        if self.watch.snapshot_wait_secs == 0 {
            bail!("watch.snapshot_wait_secs must be > 0");
        }
        Ok(())
    }
}
