use crate::error::AppError;
use crate::pipeline::frame_context::{FrameContext, ProcessingStepType};
use crate::pipeline::processing_step::ProcessingStep;
use crate::pipeline::services::FingerCounter;
use async_trait::async_trait;
use std::time::Instant;

/// Counts extended fingers on every hand in the frame
pub struct FingerCountStep {
    counter: FingerCounter,
}

impl FingerCountStep {
    pub fn new() -> Self {
        Self {
            counter: FingerCounter::new(),
        }
    }
}

impl Default for FingerCountStep {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProcessingStep for FingerCountStep {
    async fn process(&mut self, context: &mut FrameContext) -> Result<(), AppError> {
        let step_start = Instant::now();

        context.finger_counts = context
            .frame
            .hands()
            .iter()
            .map(|hand| self.counter.count(hand))
            .collect();

        if !context.finger_counts.is_empty() {
            tracing::debug!(
                "Frame {}: fingers per hand {:?}",
                context.frame.get_frame_id(),
                context.finger_counts
            );
        }

        let duration = step_start.elapsed().as_micros() as u64;
        context
            .metrics
            .record_duration(ProcessingStepType::FingerCount, duration);

        Ok(())
    }

    fn name(&self) -> &'static str {
        "FingerCountStep"
    }
}
