//! Position Source Port - Live device position subscriptions.
//!
//! A source hands out one [`PositionWatch`] per tracked trip and must be
//! told when the watch is cleared so it stops producing samples.

use tokio::sync::mpsc;

use crate::domain::foundation::WatchId;
use crate::domain::tracking::{PositionSample, TrackingError};

/// Port for acquiring and releasing position subscriptions.
pub trait PositionSource: Send + Sync {
    /// Starts a new subscription.
    fn watch(&self) -> Result<PositionWatch, TrackingError>;

    /// Stops the subscription. Clearing an unknown id is a no-op.
    fn clear_watch(&self, id: WatchId);
}

/// One live subscription: its id and the stream of samples it yields.
#[derive(Debug)]
pub struct PositionWatch {
    pub id: WatchId,
    pub samples: mpsc::Receiver<PositionSample>,
}

impl PositionWatch {
    pub fn new(id: WatchId, samples: mpsc::Receiver<PositionSample>) -> Self {
        Self { id, samples }
    }
}
