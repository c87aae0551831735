pub mod action_dispatcher;
pub mod finger_counter;
pub mod gesture_classifier;
pub mod temporal_voter;

pub use action_dispatcher::{ActionDispatcher, Dispatch, DispatchState, NO_ACTION_LABEL};
pub use finger_counter::FingerCounter;
pub use gesture_classifier::GestureClassifier;
pub use temporal_voter::TemporalVoter;
