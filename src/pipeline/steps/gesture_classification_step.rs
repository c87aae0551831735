use crate::error::AppError;
use crate::pipeline::frame_context::{FrameContext, ProcessingStepType};
use crate::pipeline::processing_step::ProcessingStep;
use crate::pipeline::services::GestureClassifier;
use async_trait::async_trait;
use std::time::Instant;

/// Classifies the frame's total finger count. Frames without hands produce
/// no observation.
pub struct GestureClassificationStep {
    classifier: GestureClassifier,
}

impl GestureClassificationStep {
    pub fn new() -> Self {
        Self {
            classifier: GestureClassifier::new(),
        }
    }
}

impl Default for GestureClassificationStep {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProcessingStep for GestureClassificationStep {
    async fn process(&mut self, context: &mut FrameContext) -> Result<(), AppError> {
        let step_start = Instant::now();

        context.observation = if context.frame.has_hands() {
            Some(self.classifier.classify(context.total_fingers()))
        } else {
            None
        };

        let duration = step_start.elapsed().as_micros() as u64;
        context
            .metrics
            .record_duration(ProcessingStepType::Classification, duration);

        Ok(())
    }

    fn name(&self) -> &'static str {
        "GestureClassificationStep"
    }
}
