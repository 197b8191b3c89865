use std::time::Duration;

use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use crate::config::watcher_config::WatchConfig;
use crate::hospitals::{
    fetch_error::FetchError, hospital_source::SharedHospitalSource, snapshot_slot::SnapshotSlot,
};
use crate::inspector::offering_check::{OfferingCheck, OfferingDecision};
use crate::notify::DynamicNotifier;
use crate::types::{
    hospital::{HospitalSnapshot, HospitalSummary},
    notification::Notification,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    pub hospitals: usize,
    pub fetched: usize,
    pub failed: usize,
    pub notified: usize,
}

/// Walks the latest hospital list one hospital at a time and notifies on
/// bookable offerings of the target product.
pub struct Inspector {
    source: SharedHospitalSource,
    notifier: DynamicNotifier,
    slot: SnapshotSlot,
    check: OfferingCheck,
    pacing: Duration,
    snapshot_wait: Duration,
}

impl Inspector {
    pub fn new(
        source: SharedHospitalSource,
        notifier: DynamicNotifier,
        slot: SnapshotSlot,
        config: &WatchConfig,
    ) -> Self {
        Self {
            source,
            notifier,
            slot,
            check: OfferingCheck::new(config.marker.clone()),
            pacing: config.pacing(),
            snapshot_wait: config.snapshot_wait(),
        }
    }

    pub async fn run(&self) {
        loop {
            let Some(snapshot) = self.slot.read_latest() else {
                info!("no hospital list yet, waiting");
                tokio::time::sleep(self.snapshot_wait).await;
                continue;
            };

            if snapshot.is_empty() {
                info!(status = snapshot.status, msg = %snapshot.msg, "hospital list is empty, waiting");
                tokio::time::sleep(self.snapshot_wait).await;
                continue;
            }

            let pass_id = Uuid::new_v4();
            let summary = self
                .inspect_pass(&snapshot)
                .instrument(info_span!("pass", %pass_id))
                .await;

            info!(%pass_id, ?summary, "inspection pass finished");
        }
    }

    pub async fn inspect_pass(&self, snapshot: &HospitalSnapshot) -> PassSummary {
        let mut summary = PassSummary {
            hospitals: snapshot.len(),
            ..Default::default()
        };

        for hospital in &snapshot.list {
            /* NOTE: courtesy delay toward the upstream, one request per pacing interval */
            tokio::time::sleep(self.pacing).await;

            match self.inspect_hospital(hospital).await {
                Ok(notified) => {
                    summary.fetched += 1;
                    summary.notified += notified;
                }
                Err(error) => {
                    summary.failed += 1;
                    warn!(
                        hospital_id = hospital.id,
                        hospital = %hospital.cname,
                        timeout = error.is_timeout(),
                        "failed to fetch hospital detail: {error}"
                    );
                }
            }
        }

        summary
    }

    async fn inspect_hospital(&self, hospital: &HospitalSummary) -> Result<usize, FetchError> {
        let detail = self.source.fetch_detail(hospital.id).await?;

        info!(hospital = %detail.cname, tel = %detail.tel, "inspecting hospital");

        let mut notified = 0;
        for offering in &detail.offerings {
            let decision = self.check.evaluate(offering);

            if let OfferingDecision::Listed {
                title,
                status_label,
            }
            | OfferingDecision::Bookable {
                title,
                status_label,
            } = &decision
            {
                info!("{title}: {status_label}");
            }

            if matches!(decision, OfferingDecision::Bookable { .. }) {
                self.notifier
                    .notify(&Notification::for_offering(&detail, offering))
                    .await;
                notified += 1;
            }
        }

        Ok(notified)
    }
}
