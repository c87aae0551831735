//! Line protocol spoken with the landmark provider.
//!
//! One JSON object per line on the provider's stdout:
//!
//! ```text
//! {"type":"ready"}
//! {"type":"frame","timestamp_ms":1234,"hands":[{"handedness":"Right","score":0.97,"landmarks":[{"x":0.41,"y":0.77,"z":0.0}, ...]}]}
//! {"type":"quit"}
//! {"type":"camera_error","message":"camera 0 returned no frame"}
//! ```
//!
//! Coordinates are normalized to the (already mirrored) frame, 0.0 to 1.0.
//!
//! In the other direction we write one line to the provider's stdin each
//! time the current action changes, for its preview overlay:
//!
//! ```text
//! {"type":"action","label":"Fast forward"}
//! ```

use serde::{Deserialize, Serialize};

use crate::common::{HandObservation, Landmark};
use crate::error::AppError;

#[derive(Deserialize, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProviderMessage {
    /// Provider finished loading its model
    Ready,
    Frame {
        /// Provider-side capture time; only differences between frames matter
        #[serde(default)]
        timestamp_ms: Option<u64>,
        #[serde(default)]
        hands: Vec<HandJson>,
    },
    /// Quit key pressed in the provider's preview window
    Quit,
    CameraError {
        message: String,
    },
}

/// Messages sent to the provider.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostMessage {
    Action { label: String },
}

impl HostMessage {
    pub fn action(label: &str) -> Self {
        HostMessage::Action {
            label: label.to_string(),
        }
    }

    /// Encoded line, newline included.
    pub fn to_line(&self) -> Result<Vec<u8>, AppError> {
        let mut line = serde_json::to_vec(self)
            .map_err(|e| AppError::Provider(format!("Failed to encode {:?}: {}", self, e)))?;
        line.push(b'\n');
        Ok(line)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct HandJson {
    #[serde(default)]
    pub handedness: Option<String>,
    #[serde(default)]
    pub score: Option<f32>,
    pub landmarks: Vec<LandmarkJson>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LandmarkJson {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl TryFrom<HandJson> for HandObservation {
    type Error = AppError;

    fn try_from(hand: HandJson) -> Result<Self, Self::Error> {
        let points: Vec<Landmark> = hand
            .landmarks
            .iter()
            .map(|lm| Landmark {
                x: lm.x,
                y: lm.y,
                z: lm.z,
            })
            .collect();

        let mut observation = HandObservation::try_from(points)?;
        if let Some(handedness) = hand.handedness {
            observation = observation.with_handedness(handedness);
        }
        if let Some(score) = hand.score {
            observation = observation.with_score(score);
        }
        Ok(observation)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::pipeline::services::finger_counter::tests::hand_showing;

    /// Provider JSON for a hand as produced by `hand_showing`.
    pub(crate) fn hand_json_from(hand: &HandObservation) -> String {
        let points: Vec<String> = hand
            .landmarks()
            .iter()
            .map(|lm| format!(r#"{{"x":{},"y":{},"z":{}}}"#, lm.x, lm.y, lm.z))
            .collect();
        format!(r#"{{"handedness":"Right","score":0.95,"landmarks":[{}]}}"#, points.join(","))
    }

    pub(crate) fn two_finger_hand_json() -> String {
        hand_json_from(&hand_showing(2))
    }

    #[test]
    fn generated_hand_round_trips() {
        let hand: HandJson = serde_json::from_str(&two_finger_hand_json()).unwrap();
        let observation = HandObservation::try_from(hand).unwrap();
        assert_eq!(observation.landmarks(), hand_showing(2).landmarks());
    }

    #[test]
    fn parses_control_messages() {
        let ready: ProviderMessage = serde_json::from_str(r#"{"type":"ready"}"#).unwrap();
        assert_eq!(ready, ProviderMessage::Ready);

        let quit: ProviderMessage = serde_json::from_str(r#"{"type":"quit"}"#).unwrap();
        assert_eq!(quit, ProviderMessage::Quit);

        let error: ProviderMessage =
            serde_json::from_str(r#"{"type":"camera_error","message":"no frame"}"#).unwrap();
        assert_eq!(
            error,
            ProviderMessage::CameraError {
                message: "no frame".to_string()
            }
        );
    }

    #[test]
    fn frame_without_hands_defaults_to_empty() {
        let frame: ProviderMessage = serde_json::from_str(r#"{"type":"frame"}"#).unwrap();
        assert_eq!(
            frame,
            ProviderMessage::Frame {
                timestamp_ms: None,
                hands: Vec::new()
            }
        );
    }

    #[test]
    fn action_message_encodes_as_one_line() {
        let line = HostMessage::action("Volume up").to_line().unwrap();
        assert_eq!(line, b"{\"type\":\"action\",\"label\":\"Volume up\"}\n".to_vec());
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert!(serde_json::from_str::<ProviderMessage>(r#"{"type":"hello"}"#).is_err());
    }

    #[test]
    fn hand_json_keeps_metadata() {
        let hand = HandJson {
            handedness: Some("Left".to_string()),
            score: Some(0.9),
            landmarks: vec![LandmarkJson { x: 0.1, y: 0.2, z: 0.0 }; 21],
        };
        let observation = HandObservation::try_from(hand).unwrap();
        assert_eq!(observation.handedness(), Some("Left"));
        assert_eq!(observation.score(), Some(0.9));
        assert_eq!(observation.landmark(0), &Landmark::new(0.1, 0.2));
    }
}
