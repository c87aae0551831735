use crate::common::Gesture;
use crate::error::AppError;
use crate::pipeline::frame_context::{FrameContext, ProcessingStepType};
use crate::pipeline::processing_step::ProcessingStep;
use crate::pipeline::services::{ActionDispatcher, DispatchState};
use async_trait::async_trait;
use std::time::Instant;

/// Owns the dispatch state between frames and runs the dispatcher on every
/// frame whose stabilized gesture is not `None`.
///
/// A stabilized `None` is skipped entirely, so it neither fires nor cancels a
/// pause hold in progress.
pub struct DispatchStep {
    dispatcher: ActionDispatcher,
    state: DispatchState,
}

impl DispatchStep {
    pub fn new(dispatcher: ActionDispatcher) -> Self {
        Self {
            dispatcher,
            state: DispatchState::default(),
        }
    }

    pub fn state(&self) -> &DispatchState {
        &self.state
    }
}

#[async_trait]
impl ProcessingStep for DispatchStep {
    async fn process(&mut self, context: &mut FrameContext) -> Result<(), AppError> {
        let step_start = Instant::now();

        if let Some(stabilized) = context.stabilized {
            if stabilized.gesture != Gesture::None {
                let dispatch =
                    self.dispatcher
                        .step(self.state, stabilized.gesture, context.frame.timestamp());
                self.state = dispatch.state;
                context.command = dispatch.command;
            }
        }
        context.current_action = self.state.current_action;

        let duration = step_start.elapsed().as_micros() as u64;
        context
            .metrics
            .record_duration(ProcessingStepType::Dispatch, duration);

        Ok(())
    }

    fn name(&self) -> &'static str {
        "DispatchStep"
    }
}
