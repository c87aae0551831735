use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use crate::common::landmark::HandObservation;

/// One processed camera frame as seen by the decision pipeline: the hands
/// the landmark provider found, plus when the frame arrived.
#[derive(Clone, Debug)]
pub struct Frame {
    frame_id: Uuid,
    hands: Arc<[HandObservation]>,
    captured_at: DateTime<Utc>,
    timestamp: Instant,
}

impl Frame {
    pub fn new(hands: Vec<HandObservation>, captured_at: DateTime<Utc>, timestamp: Instant) -> Self {
        Self {
            frame_id: Uuid::new_v4(),
            hands: hands.into(),
            captured_at,
            timestamp,
        }
    }

    /// Frame stamped with the current wall clock at the given monotonic time.
    pub fn at(hands: Vec<HandObservation>, timestamp: Instant) -> Self {
        Self::new(hands, Utc::now(), timestamp)
    }

    pub fn get_frame_id(&self) -> Uuid {
        self.frame_id
    }

    pub fn hands(&self) -> &[HandObservation] {
        &self.hands
    }

    pub fn has_hands(&self) -> bool {
        !self.hands.is_empty()
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    /// Monotonic timestamp used for debounce and hold timing.
    pub fn timestamp(&self) -> Instant {
        self.timestamp
    }
}
