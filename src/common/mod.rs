pub mod frame;
pub mod gesture;
pub mod landmark;

pub use frame::Frame;
pub use gesture::{Gesture, GestureObservation, MediaCommand, MediaKey};
pub use landmark::{HAND_LANDMARK_COUNT, HandObservation, Landmark, landmarks};
