pub mod frame_context;
pub mod processing_step;
pub mod services;
pub mod steps;

pub use frame_context::{FrameContext, FrameMetrics, ProcessingStepType};
pub use processing_step::{ProcessingPipeline, ProcessingStep};
pub use services::{ActionDispatcher, DispatchState, FingerCounter, GestureClassifier, TemporalVoter};
