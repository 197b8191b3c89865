use std::time::Duration;

use anyhow::{Context, Result};
use tokio::task::JoinHandle;
use tracing::info;

use crate::hospitals::{hospital_source::SharedHospitalSource, snapshot_slot::SnapshotSlot};

/// Producer side: republishes the hospital list on a fixed interval.
///
/// The first failed fetch ends the task with an error. There is no retry; the
/// supervisor in `main` treats that error as fatal for the process.
pub struct Refresher {
    source: SharedHospitalSource,
    slot: SnapshotSlot,
    interval: Duration,
}

impl Refresher {
    pub fn new(source: SharedHospitalSource, slot: SnapshotSlot, interval: Duration) -> Self {
        Self {
            source,
            slot,
            interval,
        }
    }

    pub fn spawn(self) -> JoinHandle<Result<()>> {
        tokio::spawn(async move { self.run().await })
    }

    pub async fn run(&self) -> Result<()> {
        loop {
            let snapshot = self
                .source
                .fetch_list()
                .await
                .context("failed to fetch hospital list")?;

            info!(hospitals = snapshot.len(), "publishing hospital list");
            self.slot.publish(snapshot);

            tokio::time::sleep(self.interval).await;
        }
    }
}
