use crate::common::{HandObservation, landmarks};

/// (tip, lower joint) landmark pairs for index, middle, ring and little finger.
const FINGER_JOINTS: [(usize, usize); 4] = [
    (landmarks::INDEX_FINGER_TIP, landmarks::INDEX_FINGER_PIP),
    (landmarks::MIDDLE_FINGER_TIP, landmarks::MIDDLE_FINGER_PIP),
    (landmarks::RING_FINGER_TIP, landmarks::RING_FINGER_PIP),
    (landmarks::PINKY_TIP, landmarks::PINKY_PIP),
];

/// Counts extended fingers on a single hand, 0 to 5.
///
/// The thumb test compares horizontal positions and assumes a mirrored,
/// front-facing camera: the thumb counts as extended when its tip lies to
/// the left of its IP joint. A rear camera or an unmirrored feed flips the
/// result for the thumb only.
#[derive(Debug, Default, Clone, Copy)]
pub struct FingerCounter;

impl FingerCounter {
    pub fn new() -> Self {
        Self
    }

    pub fn count(&self, hand: &HandObservation) -> u8 {
        let thumb = hand.landmark(landmarks::THUMB_TIP).x < hand.landmark(landmarks::THUMB_IP).x;

        let fingers = FINGER_JOINTS
            .iter()
            .filter(|(tip, joint)| hand.landmark(*tip).y < hand.landmark(*joint).y)
            .count() as u8;

        fingers + u8::from(thumb)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::common::Landmark;

    /// Builds a hand with the thumb and the first `fingers` of
    /// index/middle/ring/little raised.
    pub(crate) fn hand_with(thumb: bool, fingers: usize) -> HandObservation {
        let mut points = [Landmark::new(0.5, 0.5); 21];
        points[landmarks::THUMB_IP] = Landmark::new(0.40, 0.6);
        points[landmarks::THUMB_TIP] = if thumb {
            Landmark::new(0.30, 0.6)
        } else {
            Landmark::new(0.45, 0.6)
        };
        for (i, (tip, joint)) in FINGER_JOINTS.iter().enumerate() {
            points[*joint] = Landmark::new(0.5, 0.55);
            points[*tip] = if i < fingers {
                Landmark::new(0.5, 0.35)
            } else {
                Landmark::new(0.5, 0.65)
            };
        }
        HandObservation::new(points)
    }

    /// Hand showing `count` extended fingers, thumb last.
    pub(crate) fn hand_showing(count: u8) -> HandObservation {
        match count {
            0..=4 => hand_with(false, count as usize),
            _ => hand_with(true, 4),
        }
    }

    #[test]
    fn closed_fist_counts_zero() {
        assert_eq!(FingerCounter::new().count(&hand_with(false, 0)), 0);
    }

    #[test]
    fn open_hand_counts_five() {
        assert_eq!(FingerCounter::new().count(&hand_with(true, 4)), 5);
    }

    #[test]
    fn thumb_alone_counts_one() {
        assert_eq!(FingerCounter::new().count(&hand_with(true, 0)), 1);
    }

    #[test]
    fn thumb_to_the_right_of_its_joint_is_folded() {
        // unmirrored feed: same open hand, thumb mirrored to the other side
        let mut hand = *hand_with(true, 4).landmarks();
        hand[landmarks::THUMB_TIP].x = 0.5;
        assert_eq!(FingerCounter::new().count(&HandObservation::new(hand)), 4);
    }

    #[test]
    fn tip_level_with_joint_is_not_extended() {
        let mut hand = *hand_with(false, 0).landmarks();
        hand[landmarks::INDEX_FINGER_TIP].y = hand[landmarks::INDEX_FINGER_PIP].y;
        assert_eq!(FingerCounter::new().count(&HandObservation::new(hand)), 0);
    }

    #[test]
    fn hand_showing_matches_requested_count() {
        let counter = FingerCounter::new();
        for n in 0..=5 {
            assert_eq!(counter.count(&hand_showing(n)), n);
        }
    }
}
