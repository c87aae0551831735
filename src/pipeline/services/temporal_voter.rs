use indexmap::IndexMap;
use std::collections::VecDeque;

use crate::common::{Gesture, GestureObservation};

/// Majority vote over the most recent gesture observations.
///
/// Per-frame classification flickers between neighbouring finger counts
/// while fingers move; voting over a short window settles it at the cost of
/// up to `window_size` frames of lag.
pub struct TemporalVoter {
    window: VecDeque<GestureObservation>,
    window_size: usize,
}

impl TemporalVoter {
    pub fn new(window_size: usize) -> Self {
        Self {
            window: VecDeque::with_capacity(window_size),
            window_size,
        }
    }

    /// Push an observation, evicting the oldest one once the window is full.
    pub fn push(&mut self, observation: GestureObservation) {
        if self.window.len() >= self.window_size {
            self.window.pop_front();
        }
        self.window.push_back(observation);
    }

    /// Most frequent gesture in the window.
    ///
    /// Ties go to the gesture that appears first in window order. The finger
    /// count reported is the one stored with that gesture's first entry.
    pub fn majority(&self) -> GestureObservation {
        // IndexMap keeps first-seen order, which is the tie-break order
        let mut counts: IndexMap<Gesture, (usize, u8)> = IndexMap::new();
        for observation in &self.window {
            counts
                .entry(observation.gesture)
                .or_insert((0, observation.finger_count))
                .0 += 1;
        }

        let mut winner: Option<(Gesture, usize, u8)> = None;
        for (gesture, (count, finger_count)) in &counts {
            match winner {
                Some((_, best, _)) if *count <= best => {}
                _ => winner = Some((*gesture, *count, *finger_count)),
            }
        }

        winner
            .map(|(gesture, _, finger_count)| GestureObservation::new(gesture, finger_count))
            .unwrap_or_else(GestureObservation::none)
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn observations(&self) -> impl Iterator<Item = &GestureObservation> {
        self.window.iter()
    }
}
