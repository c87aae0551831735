use crate::common::{Frame, GestureObservation, MediaCommand};
use crate::pipeline::services::NO_ACTION_LABEL;
use std::sync::Arc;
use std::time::Instant;

/// Context object that flows through the processing pipeline
/// Contains all the state needed for processing a single frame
#[derive(Clone, Debug)]
pub struct FrameContext {
    pub frame: Arc<Frame>,
    /// Extended fingers per detected hand, in provider order
    pub finger_counts: Vec<u8>,
    /// Raw per-frame classification; `None` when no hand was detected
    pub observation: Option<GestureObservation>,
    /// Majority vote over the window after this frame was added
    pub stabilized: Option<GestureObservation>,
    pub command: Option<MediaCommand>,
    pub current_action: &'static str,
    pub metrics: FrameMetrics,
    pub processing_start: Instant,
}

impl FrameContext {
    pub fn new(frame: Frame) -> Self {
        Self {
            frame: Arc::new(frame),
            finger_counts: Vec::new(),
            observation: None,
            stabilized: None,
            command: None,
            current_action: NO_ACTION_LABEL,
            metrics: FrameMetrics::new(),
            processing_start: Instant::now(),
        }
    }

    pub fn total_fingers(&self) -> u8 {
        self.finger_counts
            .iter()
            .fold(0u8, |total, count| total.saturating_add(*count))
    }
}

/// Metrics collected during frame processing
#[derive(Debug, Clone, Default)]
pub struct FrameMetrics {
    pub finger_count_duration_us: u64,
    pub classification_duration_us: u64,
    pub voting_duration_us: u64,
    pub dispatch_duration_us: u64,
    pub total_processing_duration_us: u64,
}

impl FrameMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_duration(&mut self, step: ProcessingStepType, duration_us: u64) {
        match step {
            ProcessingStepType::FingerCount => self.finger_count_duration_us = duration_us,
            ProcessingStepType::Classification => self.classification_duration_us = duration_us,
            ProcessingStepType::Voting => self.voting_duration_us = duration_us,
            ProcessingStepType::Dispatch => self.dispatch_duration_us = duration_us,
        }
    }

    pub fn finalize(&mut self, start_time: Instant) {
        self.total_processing_duration_us = start_time.elapsed().as_micros() as u64;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessingStepType {
    FingerCount,
    Classification,
    Voting,
    Dispatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_fingers_sums_all_hands() {
        let mut context = FrameContext::new(Frame::at(Vec::new(), Instant::now()));
        assert_eq!(context.total_fingers(), 0);
        context.finger_counts = vec![5, 2];
        assert_eq!(context.total_fingers(), 7);
    }

    #[test]
    fn record_duration_targets_one_step() {
        let mut metrics = FrameMetrics::new();
        metrics.record_duration(ProcessingStepType::Voting, 42);
        assert_eq!(metrics.voting_duration_us, 42);
        assert_eq!(metrics.dispatch_duration_us, 0);
    }
}
