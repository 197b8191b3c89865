use std::sync::Arc;

use async_trait::async_trait;

use crate::hospitals::fetch_error::FetchError;
use crate::types::{hospital::HospitalSnapshot, hospital_detail::HospitalDetail};

pub type SharedHospitalSource = Arc<dyn HospitalSource>;

#[async_trait]
pub trait HospitalSource: Send + Sync {
    async fn fetch_list(&self) -> Result<HospitalSnapshot, FetchError>;
    async fn fetch_detail(&self, hospital_id: i64) -> Result<HospitalDetail, FetchError>;
}
