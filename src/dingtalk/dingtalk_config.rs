use std::env;

pub struct DingTalkConfig {
    pub access_token: String,
    pub secret: Option<String>,
}

impl DingTalkConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let access_token = env::var("DINGTALK_ACCESS_TOKEN")
            .map_err(|_| anyhow::anyhow!("DINGTALK_ACCESS_TOKEN not set"))?;

        let secret = env::var("DINGTALK_SECRET")
            .ok()
            .filter(|secret| !secret.is_empty());

        Ok(Self {
            access_token,
            secret,
        })
    }
}
