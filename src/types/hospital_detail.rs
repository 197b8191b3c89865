use serde::Deserialize;
use serde_json::Value;

use crate::types::nullable::null_as_default;

/// Response of the `CustomerProduct` endpoint for a single hospital.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HospitalDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub tel: String,
    #[serde(deserialize_with = "null_as_default")]
    pub addr: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub lat: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub lng: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub distance: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub payment: Payment,
    #[serde(rename = "BigPic")]
    pub big_pic: Option<Value>,
    #[serde(rename = "IdcardLimit", deserialize_with = "null_as_default")]
    pub idcard_limit: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub notice: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: i64,
    #[serde(rename = "list", deserialize_with = "null_as_default")]
    pub offerings: Vec<Offering>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Payment {
    #[serde(deserialize_with = "null_as_default")]
    pub alipay: String,
    #[serde(rename = "WechatPay", deserialize_with = "null_as_default")]
    pub wechat_pay: String,
    #[serde(rename = "UnionPay", deserialize_with = "null_as_default")]
    pub union_pay: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cashier: String,
}

/// A bookable product listed by a hospital.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Offering {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    /// Free-text product description, e.g. "九价人乳头瘤病毒疫苗".
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: String,
    #[serde(deserialize_with = "null_as_default")]
    pub descript: String,
    #[serde(deserialize_with = "null_as_default")]
    pub warn: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(rename = "questionnaireId", deserialize_with = "null_as_default")]
    pub questionnaire_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub remarks: String,
    #[serde(rename = "NumbersVaccine", deserialize_with = "null_as_default")]
    pub numbers_vaccine: Vec<NumberedValue>,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    /// Status label shown on the booking button ("立即预约", "暂未开始", ...).
    /// The upstream field name is misspelled.
    #[serde(rename = "BtnLable", deserialize_with = "null_as_default")]
    pub btn_label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub enable: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NumberedValue {
    #[serde(deserialize_with = "null_as_default")]
    pub cname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_detail_with_offerings() {
        let raw = r#"{
            "tel": "0771-1234567",
            "addr": "1 Main St",
            "cname": "Clinic A",
            "lat": 22.8,
            "lng": 108.3,
            "distance": 1200,
            "payment": {"alipay": "1", "WechatPay": "1", "UnionPay": "0", "cashier": "0"},
            "BigPic": "",
            "IdcardLimit": false,
            "notice": "",
            "status": 200,
            "list": [
                {"id": 1, "text": "九价人乳头瘤病毒疫苗", "price": "1318", "descript": "",
                 "warn": "", "tags": ["进口"], "questionnaireId": 42, "remarks": "",
                 "NumbersVaccine": [{"cname": "第1针", "value": 1}],
                 "date": "2021-12-01", "BtnLable": "立即预约", "enable": true}
            ]
        }"#;

        let detail: HospitalDetail = serde_json::from_str(raw).unwrap();

        assert_eq!(detail.cname, "Clinic A");
        assert_eq!(detail.payment.wechat_pay, "1");
        assert_eq!(detail.offerings.len(), 1);

        let offering = &detail.offerings[0];
        assert_eq!(offering.btn_label, "立即预约");
        assert_eq!(offering.questionnaire_id, 42);
        assert_eq!(offering.numbers_vaccine[0].value, 1);
        assert!(offering.enable);
    }

    #[test]
    fn missing_offerings_decode_as_empty() {
        let detail: HospitalDetail =
            serde_json::from_str(r#"{"cname": "Clinic A", "payment": null}"#).unwrap();

        assert!(detail.offerings.is_empty());
        assert_eq!(detail.payment.alipay, "");
    }
}
