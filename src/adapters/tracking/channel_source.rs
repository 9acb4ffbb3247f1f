//! In-process position source.
//!
//! Each watch gets its own bounded channel. [`ChannelPositionSource::publish`]
//! fans a sample out to every active watch; clearing a watch drops its
//! sender so the receiving side sees the stream end.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::domain::foundation::WatchId;
use crate::domain::tracking::{PositionSample, TrackingError};
use crate::ports::{PositionSource, PositionWatch};

/// Samples buffered per watch before `publish` starts dropping.
const WATCH_BUFFER: usize = 256;

#[derive(Debug, Clone, Default)]
pub struct ChannelPositionSource {
    next_id: Arc<AtomicU64>,
    watches: Arc<Mutex<HashMap<WatchId, mpsc::Sender<PositionSample>>>>,
}

impl ChannelPositionSource {
    pub fn new() -> Self {
        Self::default()
    }

    fn watches(&self) -> MutexGuard<'_, HashMap<WatchId, mpsc::Sender<PositionSample>>> {
        self.watches.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Delivers a sample to every active watch. Returns how many received it.
    pub fn publish(&self, sample: PositionSample) -> usize {
        let mut watches = self.watches();
        let mut delivered = 0;
        watches.retain(|id, tx| match tx.try_send(sample) {
            Ok(()) => {
                delivered += 1;
                true
            }
            Err(mpsc::error::TrySendError::Full(_)) => {
                warn!(watch = %id, "Position watch buffer full, sample dropped");
                true
            }
            Err(mpsc::error::TrySendError::Closed(_)) => false,
        });
        delivered
    }

    /// Number of subscriptions not yet cleared.
    pub fn active_watches(&self) -> usize {
        self.watches().len()
    }
}

impl PositionSource for ChannelPositionSource {
    fn watch(&self) -> Result<PositionWatch, TrackingError> {
        let id = WatchId::new(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let (tx, rx) = mpsc::channel(WATCH_BUFFER);
        self.watches().insert(id, tx);
        debug!(watch = %id, "Position watch started");
        Ok(PositionWatch::new(id, rx))
    }

    fn clear_watch(&self, id: WatchId) {
        if self.watches().remove(&id).is_some() {
            debug!(watch = %id, "Position watch cleared");
        }
    }
}
