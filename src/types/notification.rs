use serde::Serialize;

use crate::types::{hospital_detail::HospitalDetail, hospital_detail::Offering};

/// A bookable-offering alert. Transient: built, sent once, dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub hospital_name: String,
    pub tel: String,
    pub addr: String,
    pub title: String,
    pub status_label: String,
}

impl Notification {
    pub fn for_offering(detail: &HospitalDetail, offering: &Offering) -> Self {
        Self {
            hospital_name: detail.cname.clone(),
            tel: detail.tel.clone(),
            addr: detail.addr.clone(),
            title: offering.text.clone(),
            status_label: offering.btn_label.clone(),
        }
    }

    pub fn content(&self) -> String {
        format!(
            "医院名: {}\n电话: {}\n地址: {}\n标题: {}\n状态: {}",
            self.hospital_name, self.tel, self.addr, self.title, self.status_label
        )
    }

    pub fn text_message(&self) -> TextMessage {
        TextMessage {
            msgtype: "text",
            text: TextContent {
                content: self.content(),
            },
        }
    }
}

/// `{"msgtype": "text", "text": {"content": ...}}` envelope expected by the
/// group-chat robot.
#[derive(Debug, Serialize)]
pub struct TextMessage {
    pub msgtype: &'static str,
    pub text: TextContent,
}

#[derive(Debug, Serialize)]
pub struct TextContent {
    pub content: String,
}
