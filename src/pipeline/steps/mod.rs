pub mod dispatch_step;
pub mod finger_count_step;
pub mod gesture_classification_step;
pub mod voting_step;

pub use dispatch_step::DispatchStep;
pub use finger_count_step::FingerCountStep;
pub use gesture_classification_step::GestureClassificationStep;
pub use voting_step::VotingStep;
