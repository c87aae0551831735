use crate::common::{Gesture, GestureObservation};

/// Maps the total finger count of a frame to a gesture. Pure lookup, no state.
#[derive(Debug, Default, Clone, Copy)]
pub struct GestureClassifier;

impl GestureClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, total_fingers: u8) -> GestureObservation {
        let gesture = match total_fingers {
            1 => Gesture::Pause,
            2 => Gesture::Advance,
            3 => Gesture::Reverse,
            4 => Gesture::VolumeUp,
            5 => Gesture::VolumeDown,
            6 => Gesture::SpeedUp,
            7.. => Gesture::SlowDown,
            0 => Gesture::None,
        };
        GestureObservation::new(gesture, total_fingers)
    }
}
