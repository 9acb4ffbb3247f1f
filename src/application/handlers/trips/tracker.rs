//! TripTracker - Live location tracking with scoped position watches.
//!
//! [`TripTracker::start`] acquires a watch from the position source and
//! wraps it in an [`ActiveTrack`]. The watch is released exactly once,
//! either by [`ActiveTrack::stop`] or when the handle is dropped.

use std::sync::Arc;

use tokio::sync::mpsc::{self, error::TryRecvError};
use tracing::{debug, info, warn};

use crate::domain::foundation::{Timestamp, WatchId};
use crate::domain::session::SessionContext;
use crate::domain::tracking::{PositionSample, Track, TrackingError};
use crate::domain::trip::{TransportMode, TripRecord};
use crate::ports::PositionSource;

/// Starts tracks for sessions that consented to location tracking.
pub struct TripTracker {
    source: Arc<dyn PositionSource>,
}

impl TripTracker {
    pub fn new(source: Arc<dyn PositionSource>) -> Self {
        Self { source }
    }

    pub fn start(
        &self,
        session: &SessionContext,
        mode: TransportMode,
    ) -> Result<ActiveTrack, TrackingError> {
        if !session.consent_given {
            return Err(TrackingError::ConsentRequired);
        }

        let watch = self.source.watch()?;
        info!(watch = %watch.id, mode = %mode, "Trip tracking started");

        Ok(ActiveTrack {
            source: Arc::clone(&self.source),
            watch_id: watch.id,
            samples: watch.samples,
            track: Some(Track::begin(
                session.anonymous_id.clone(),
                mode,
                Timestamp::now(),
            )),
            released: false,
        })
    }
}

/// A track in progress. Owns its position watch.
pub struct ActiveTrack {
    source: Arc<dyn PositionSource>,
    watch_id: WatchId,
    samples: mpsc::Receiver<PositionSample>,
    track: Option<Track>,
    released: bool,
}

impl ActiveTrack {
    pub fn watch_id(&self) -> WatchId {
        self.watch_id
    }

    /// Samples recorded so far.
    pub fn sample_count(&self) -> usize {
        self.track.as_ref().map_or(0, Track::len)
    }

    /// Records a sample directly, bypassing the watch.
    pub fn record(&mut self, sample: PositionSample) -> Result<(), TrackingError> {
        match self.track.as_mut() {
            Some(track) => track.record(sample),
            None => Err(TrackingError::source_unavailable("track already finished")),
        }
    }

    /// Records every sample already delivered to the watch. Returns how many
    /// were accepted.
    pub fn drain(&mut self) -> usize {
        let mut accepted = 0;
        loop {
            match self.samples.try_recv() {
                Ok(sample) => {
                    if self.accept(sample) {
                        accepted += 1;
                    }
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        accepted
    }

    /// Waits for the next valid sample from the watch and records it.
    ///
    /// Returns `None` once the source ends the stream.
    pub async fn next_sample(&mut self) -> Option<PositionSample> {
        loop {
            let sample = self.samples.recv().await?;
            if self.accept(sample) {
                return Some(sample);
            }
        }
    }

    /// Ends tracking and produces the trip record.
    ///
    /// Pending samples are recorded first, then the watch is released.
    pub fn stop(mut self) -> Result<TripRecord, TrackingError> {
        self.drain();
        self.release();

        let track = self
            .track
            .take()
            .ok_or_else(|| TrackingError::source_unavailable("track already finished"))?;
        let record = track.finish(Timestamp::now())?;

        info!(trip = %record.id, points = record.path.len(), "Trip tracking stopped");
        Ok(record)
    }

    fn accept(&mut self, sample: PositionSample) -> bool {
        match self.record(sample) {
            Ok(()) => true,
            Err(err) => {
                warn!(watch = %self.watch_id, error = %err, "Position sample skipped");
                false
            }
        }
    }

    fn release(&mut self) {
        if !self.released {
            self.source.clear_watch(self.watch_id);
            self.released = true;
            debug!(watch = %self.watch_id, "Position watch released");
        }
    }
}

impl Drop for ActiveTrack {
    fn drop(&mut self) {
        self.release();
    }
}
