use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HOST, HeaderMap, HeaderValue, REFERER, USER_AGENT};
use serde::de::DeserializeOwned;

use crate::config::watcher_config::UpstreamConfig;
use crate::hospitals::{fetch_error::FetchError, hospital_source::HospitalSource};
use crate::types::{hospital::HospitalSnapshot, hospital_detail::HospitalDetail};

/// Client for the cn2030 `HandlerSubscribe.ashx` endpoints.
#[derive(Clone, Debug)]
pub struct Cn2030Client {
    http: reqwest::Client,
    endpoint: String,
    city: String,
    city_code: String,
    product: String,
    lat: String,
    lng: String,
}

impl Cn2030Client {
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .default_headers(Self::fixed_headers(config)?)
            .timeout(config.timeout())
            .build()
            .context("failed to build cn2030 http client")?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            city: config.city.clone(),
            city_code: config.city_code.clone(),
            product: config.product.clone(),
            lat: config.lat.to_string(),
            lng: config.lng.to_string(),
        })
    }

    fn fixed_headers(config: &UpstreamConfig) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            REFERER,
            HeaderValue::from_str(&config.referer).context("invalid referer header value")?,
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).context("invalid user agent header value")?,
        );
        if let Some(host) = &config.host {
            headers.insert(
                HOST,
                HeaderValue::from_str(host).context("invalid host header value")?,
            );
        }

        Ok(headers)
    }

    fn list_query(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("act", "CustomerList"),
            ("city", self.city.as_str()),
            ("lat", self.lat.as_str()),
            ("lng", self.lng.as_str()),
            ("id", "0"),
            ("cityCode", self.city_code.as_str()),
            ("product", self.product.as_str()),
        ]
    }

    async fn get_json<T: DeserializeOwned>(&self, query: &[(&str, &str)]) -> Result<T, FetchError> {
        let response = self.http.get(&self.endpoint).query(query).send().await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(FetchError::Upstream {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        match serde_json::from_slice(&body) {
            Ok(parsed) => Ok(parsed),
            Err(error) => {
                tracing::error!(%error, raw = %String::from_utf8_lossy(&body), "failed to parse cn2030 JSON response");
                Err(error.into())
            }
        }
    }
}

#[async_trait]
impl HospitalSource for Cn2030Client {
    async fn fetch_list(&self) -> Result<HospitalSnapshot, FetchError> {
        let snapshot: HospitalSnapshot = self.get_json(&self.list_query()).await?;

        tracing::debug!(
            hospitals = snapshot.len(),
            status = snapshot.status,
            msg = %snapshot.msg,
            "fetched hospital list"
        );

        Ok(snapshot)
    }

    async fn fetch_detail(&self, hospital_id: i64) -> Result<HospitalDetail, FetchError> {
        let id = hospital_id.to_string();
        let query = [
            ("act", "CustomerProduct"),
            ("lat", self.lat.as_str()),
            ("lng", self.lng.as_str()),
            ("id", id.as_str()),
        ];

        self.get_json(&query).await
    }
}
