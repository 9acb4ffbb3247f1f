//! In-memory buffer of samples for one tracked trip.

use serde::{Deserialize, Serialize};

use super::TrackingError;
use crate::domain::foundation::{AnonymousId, Coordinates, Timestamp, TripId};
use crate::domain::trip::{PathPoint, TransportMode, TripRecord};

/// Fewest samples that make a trip.
pub const MIN_SAMPLES: usize = 2;

/// One fix reported by a position source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionSample {
    pub coordinates: Coordinates,
    pub recorded_at: Timestamp,
}

impl PositionSample {
    pub fn new(coordinates: Coordinates, recorded_at: Timestamp) -> Self {
        Self {
            coordinates,
            recorded_at,
        }
    }

    /// Sample stamped with the current time.
    pub fn now(coordinates: Coordinates) -> Self {
        Self::new(coordinates, Timestamp::now())
    }
}

/// Samples accumulated while a watch is active.
///
/// # Invariants
///
/// - samples are kept in arrival order
/// - every stored sample has in-range coordinates
#[derive(Debug, Clone)]
pub struct Track {
    traveler: AnonymousId,
    mode: TransportMode,
    started_at: Timestamp,
    samples: Vec<PositionSample>,
}

impl Track {
    pub fn begin(traveler: AnonymousId, mode: TransportMode, started_at: Timestamp) -> Self {
        Self {
            traveler,
            mode,
            started_at,
            samples: Vec::new(),
        }
    }

    /// Appends a sample; out-of-range coordinates are refused.
    pub fn record(&mut self, sample: PositionSample) -> Result<(), TrackingError> {
        sample.coordinates.validate()?;
        self.samples.push(sample);
        Ok(())
    }

    pub fn samples(&self) -> &[PositionSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    /// Bundles the samples into one trip record.
    ///
    /// Origin and destination are the first and last sample, labelled by
    /// coordinates. The time window runs from track start to `ended_at`.
    pub fn finish(self, ended_at: Timestamp) -> Result<TripRecord, TrackingError> {
        let (first, last) = match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) if self.samples.len() >= MIN_SAMPLES => (*first, *last),
            _ => {
                return Err(TrackingError::NotEnoughSamples {
                    required: MIN_SAMPLES,
                    recorded: self.samples.len(),
                })
            }
        };

        let end_time = if ended_at.is_before(&self.started_at) {
            self.started_at
        } else {
            ended_at
        };

        Ok(TripRecord {
            id: TripId::new(),
            origin: first.coordinates.label(),
            destination: last.coordinates.label(),
            start_time: self.started_at,
            end_time,
            mode: self.mode,
            travelers: vec![self.traveler],
            path: self
                .samples
                .iter()
                .map(|s| PathPoint::new(s.coordinates, s.recorded_at))
                .collect(),
        })
    }
}
