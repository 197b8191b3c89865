use serde::Deserialize;
use serde_json::Value;

use crate::types::nullable::null_as_default;

/// Response of the `CustomerList` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HospitalSnapshot {
    #[serde(deserialize_with = "null_as_default")]
    pub list: Vec<HospitalSummary>,
    #[serde(deserialize_with = "null_as_default")]
    pub status: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub msg: String,
}

impl HospitalSnapshot {
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HospitalSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub cname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub addr: String,
    #[serde(rename = "SmallPic", deserialize_with = "null_as_default")]
    pub small_pic: String,
    #[serde(rename = "BigPic")]
    pub big_pic: Option<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub lat: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub lng: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub tel: String,
    #[serde(deserialize_with = "null_as_default")]
    pub addr2: String,
    #[serde(deserialize_with = "null_as_default")]
    pub province: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub city: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub county: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub sort: i64,
    #[serde(rename = "DistanceShow", deserialize_with = "null_as_default")]
    pub distance_show: i64,
    #[serde(rename = "PayMent", deserialize_with = "null_as_default")]
    pub payment: String,
    #[serde(rename = "IdcardLimit", deserialize_with = "null_as_default")]
    pub idcard_limit: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub notice: String,
    #[serde(deserialize_with = "null_as_default")]
    pub distance: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<Value>,
}
