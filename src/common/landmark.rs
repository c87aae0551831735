use crate::error::AppError;

/// Number of landmarks the hand model reports per hand.
pub const HAND_LANDMARK_COUNT: usize = 21;

/// Hand landmark indices (MediaPipe hand landmark model convention)
#[allow(dead_code)]
pub mod landmarks {
    pub const WRIST: usize = 0;
    pub const THUMB_CMC: usize = 1;
    pub const THUMB_MCP: usize = 2;
    pub const THUMB_IP: usize = 3;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_FINGER_MCP: usize = 5;
    pub const INDEX_FINGER_PIP: usize = 6;
    pub const INDEX_FINGER_DIP: usize = 7;
    pub const INDEX_FINGER_TIP: usize = 8;
    pub const MIDDLE_FINGER_MCP: usize = 9;
    pub const MIDDLE_FINGER_PIP: usize = 10;
    pub const MIDDLE_FINGER_DIP: usize = 11;
    pub const MIDDLE_FINGER_TIP: usize = 12;
    pub const RING_FINGER_MCP: usize = 13;
    pub const RING_FINGER_PIP: usize = 14;
    pub const RING_FINGER_DIP: usize = 15;
    pub const RING_FINGER_TIP: usize = 16;
    pub const PINKY_MCP: usize = 17;
    pub const PINKY_PIP: usize = 18;
    pub const PINKY_DIP: usize = 19;
    pub const PINKY_TIP: usize = 20;
}

/// A point on the hand in image-normalized coordinates (0.0 to 1.0).
///
/// `y` grows downwards, so a smaller `y` is higher on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    /// Depth relative to the wrist; carried through but not used
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }
}

/// One detected hand: all 21 landmarks in anatomical index order.
#[derive(Clone, Debug, PartialEq)]
pub struct HandObservation {
    landmarks: [Landmark; HAND_LANDMARK_COUNT],
    handedness: Option<String>,
    score: Option<f32>,
}

impl HandObservation {
    pub fn new(landmarks: [Landmark; HAND_LANDMARK_COUNT]) -> Self {
        Self {
            landmarks,
            handedness: None,
            score: None,
        }
    }

    pub fn with_handedness(mut self, handedness: impl Into<String>) -> Self {
        self.handedness = Some(handedness.into());
        self
    }

    pub fn with_score(mut self, score: f32) -> Self {
        self.score = Some(score);
        self
    }

    pub fn landmark(&self, index: usize) -> &Landmark {
        &self.landmarks[index]
    }

    pub fn landmarks(&self) -> &[Landmark; HAND_LANDMARK_COUNT] {
        &self.landmarks
    }

    pub fn handedness(&self) -> Option<&str> {
        self.handedness.as_deref()
    }

    pub fn score(&self) -> Option<f32> {
        self.score
    }
}

impl TryFrom<Vec<Landmark>> for HandObservation {
    type Error = AppError;

    fn try_from(points: Vec<Landmark>) -> Result<Self, Self::Error> {
        let len = points.len();
        let landmarks: [Landmark; HAND_LANDMARK_COUNT] =
            points.try_into().map_err(|_| AppError::MalformedHand(len))?;
        Ok(Self::new(landmarks))
    }
}
