use crate::error::AppError;
use crate::pipeline::frame_context::{FrameContext, ProcessingStepType};
use crate::pipeline::processing_step::ProcessingStep;
use crate::pipeline::services::TemporalVoter;
use async_trait::async_trait;
use std::time::Instant;

/// Feeds observations into the voting window and records the majority.
/// The window only moves on frames that carry an observation.
pub struct VotingStep {
    voter: TemporalVoter,
}

impl VotingStep {
    pub fn new(voter: TemporalVoter) -> Self {
        Self { voter }
    }

    pub fn voter(&self) -> &TemporalVoter {
        &self.voter
    }
}

#[async_trait]
impl ProcessingStep for VotingStep {
    async fn process(&mut self, context: &mut FrameContext) -> Result<(), AppError> {
        let step_start = Instant::now();

        context.stabilized = match context.observation {
            Some(observation) => {
                self.voter.push(observation);
                let stabilized = self.voter.majority();
                if stabilized.gesture != observation.gesture {
                    tracing::debug!(
                        "Raw gesture {} outvoted by {} ({}/{} frames in window)",
                        observation.gesture,
                        stabilized.gesture,
                        self.voter
                            .observations()
                            .filter(|o| o.gesture == stabilized.gesture)
                            .count(),
                        self.voter.len()
                    );
                }
                Some(stabilized)
            }
            None => None,
        };

        let duration = step_start.elapsed().as_micros() as u64;
        context
            .metrics
            .record_duration(ProcessingStepType::Voting, duration);

        Ok(())
    }

    fn name(&self) -> &'static str {
        "VotingStep"
    }
}
