use std::sync::Arc;

use tokio::sync::watch;

use crate::types::hospital::HospitalSnapshot;

/// Holds the most recently published hospital list.
///
/// Publishing swaps the whole `Arc`, so a reader either sees the previous
/// snapshot or the new one, never a mix. Clones share the same slot.
#[derive(Debug, Clone)]
pub struct SnapshotSlot {
    tx: watch::Sender<Option<Arc<HospitalSnapshot>>>,
}

impl Default for SnapshotSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotSlot {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    pub fn publish(&self, snapshot: HospitalSnapshot) {
        /* NOTE: send_replace stores the value even when nobody is subscribed */
        self.tx.send_replace(Some(Arc::new(snapshot)));
    }

    pub fn read_latest(&self) -> Option<Arc<HospitalSnapshot>> {
        self.tx.borrow().clone()
    }
}
