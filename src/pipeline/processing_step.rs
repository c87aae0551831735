use crate::config::Configuration;
use crate::error::AppError;
use crate::pipeline::frame_context::FrameContext;
use crate::pipeline::services::{ActionDispatcher, TemporalVoter};
use crate::pipeline::steps::{
    DispatchStep, FingerCountStep, GestureClassificationStep, VotingStep,
};
use async_trait::async_trait;

/// Chain of Responsibility pattern for processing pipeline
#[async_trait]
pub trait ProcessingStep: Send + Sync {
    async fn process(&mut self, context: &mut FrameContext) -> Result<(), AppError>;
    fn name(&self) -> &'static str;
}

/// A pipeline that processes frames through a chain of steps
pub struct ProcessingPipeline {
    steps: Vec<Box<dyn ProcessingStep>>,
}

impl ProcessingPipeline {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Finger count, classification, voting and dispatch, in that order.
    pub fn standard(configuration: &Configuration) -> Self {
        Self::new()
            .add_step(Box::new(FingerCountStep::new()))
            .add_step(Box::new(GestureClassificationStep::new()))
            .add_step(Box::new(VotingStep::new(TemporalVoter::new(
                configuration.voting.window_size,
            ))))
            .add_step(Box::new(DispatchStep::new(ActionDispatcher::from_config(
                &configuration.dispatch,
            ))))
    }

    pub fn add_step(mut self, step: Box<dyn ProcessingStep>) -> Self {
        self.steps.push(step);
        self
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub async fn process(&mut self, mut context: FrameContext) -> Result<FrameContext, AppError> {
        for step in &mut self.steps {
            tracing::debug!("Processing step: {}", step.name());
            step.process(&mut context).await?;
        }
        context.metrics.finalize(context.processing_start);
        Ok(context)
    }
}

impl Default for ProcessingPipeline {
    fn default() -> Self {
        Self::new()
    }
}
