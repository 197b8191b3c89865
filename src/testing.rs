use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;
use tokio::time::Instant;

use crate::hospitals::{fetch_error::FetchError, hospital_source::HospitalSource};
use crate::notify::Notifier;
use crate::types::{
    hospital::{HospitalSnapshot, HospitalSummary},
    hospital_detail::{HospitalDetail, Offering},
    notification::Notification,
};

/// In-memory upstream. Unknown or explicitly failed ids answer with an
/// upstream error; list responses are served from a queue.
#[derive(Default)]
pub struct MockHospitalSource {
    lists: Mutex<VecDeque<Result<HospitalSnapshot, FetchError>>>,
    details: Mutex<HashMap<i64, HospitalDetail>>,
    detail_calls: Mutex<Vec<(i64, Instant)>>,
    list_calls: Mutex<usize>,
}

impl MockHospitalSource {
    pub fn push_list(&self, list: Result<HospitalSnapshot, FetchError>) {
        self.lists.lock().unwrap().push_back(list);
    }

    pub fn set_detail(&self, hospital_id: i64, detail: HospitalDetail) {
        self.details.lock().unwrap().insert(hospital_id, detail);
    }

    pub fn fail_detail(&self, hospital_id: i64) {
        self.details.lock().unwrap().remove(&hospital_id);
    }

    pub fn detail_calls(&self) -> Vec<i64> {
        self.detail_calls.lock().unwrap().iter().map(|(id, _)| *id).collect()
    }

    pub fn detail_call_times(&self) -> Vec<Instant> {
        self.detail_calls.lock().unwrap().iter().map(|(_, at)| *at).collect()
    }

    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }
}

pub fn upstream_error() -> FetchError {
    FetchError::Upstream {
        status: StatusCode::BAD_GATEWAY,
        body: "bad gateway".to_string(),
    }
}

#[async_trait]
impl HospitalSource for MockHospitalSource {
    async fn fetch_list(&self) -> Result<HospitalSnapshot, FetchError> {
        *self.list_calls.lock().unwrap() += 1;

        self.lists
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(upstream_error()))
    }

    async fn fetch_detail(&self, hospital_id: i64) -> Result<HospitalDetail, FetchError> {
        self.detail_calls
            .lock()
            .unwrap()
            .push((hospital_id, Instant::now()));

        self.details
            .lock()
            .unwrap()
            .get(&hospital_id)
            .cloned()
            .ok_or_else(upstream_error)
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Arc<Mutex<Vec<Notification>>> {
        self.sent.clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, notification: &Notification) {
        self.sent.lock().unwrap().push(notification.clone());
    }
}

pub fn snapshot_of(hospitals: &[(i64, &str)]) -> HospitalSnapshot {
    HospitalSnapshot {
        list: hospitals
            .iter()
            .map(|(id, name)| HospitalSummary {
                id: *id,
                cname: name.to_string(),
                ..Default::default()
            })
            .collect(),
        status: 200,
        msg: "ok".to_string(),
    }
}

pub fn detail_with(name: &str, offerings: Vec<Offering>) -> HospitalDetail {
    HospitalDetail {
        cname: name.to_string(),
        offerings,
        ..Default::default()
    }
}

pub fn offering(text: &str, enable: bool, btn_label: &str) -> Offering {
    Offering {
        text: text.to_string(),
        enable,
        btn_label: btn_label.to_string(),
        ..Default::default()
    }
}
