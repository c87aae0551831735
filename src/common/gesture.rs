use std::fmt;

/// Discrete hand-shape label derived from the total extended-finger count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gesture {
    #[default]
    None,
    Pause,
    Advance,
    Reverse,
    VolumeUp,
    VolumeDown,
    SpeedUp,
    SlowDown,
}

impl Gesture {
    pub fn label(&self) -> &'static str {
        match self {
            Gesture::None => "none",
            Gesture::Pause => "pause",
            Gesture::Advance => "advance",
            Gesture::Reverse => "reverse",
            Gesture::VolumeUp => "volume-up",
            Gesture::VolumeDown => "volume-down",
            Gesture::SpeedUp => "speed-up",
            Gesture::SlowDown => "slow-down",
        }
    }

    /// Media command bound to this gesture. Speed gestures are recognised
    /// but have no binding.
    pub fn command(&self) -> Option<MediaCommand> {
        match self {
            Gesture::Pause => Some(MediaCommand::TogglePause),
            Gesture::Advance => Some(MediaCommand::SeekForward),
            Gesture::Reverse => Some(MediaCommand::SeekBackward),
            Gesture::VolumeUp => Some(MediaCommand::VolumeUp),
            Gesture::VolumeDown => Some(MediaCommand::VolumeDown),
            Gesture::None | Gesture::SpeedUp | Gesture::SlowDown => None,
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A gesture together with the finger count it was classified from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GestureObservation {
    pub gesture: Gesture,
    pub finger_count: u8,
}

impl GestureObservation {
    pub fn new(gesture: Gesture, finger_count: u8) -> Self {
        Self {
            gesture,
            finger_count,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }
}

/// Player command produced by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaCommand {
    TogglePause,
    SeekForward,
    SeekBackward,
    VolumeUp,
    VolumeDown,
}

impl MediaCommand {
    pub fn key(&self) -> MediaKey {
        match self {
            MediaCommand::TogglePause => MediaKey::Space,
            MediaCommand::SeekForward => MediaKey::Right,
            MediaCommand::SeekBackward => MediaKey::Left,
            MediaCommand::VolumeUp => MediaKey::Up,
            MediaCommand::VolumeDown => MediaKey::Down,
        }
    }

    /// Text shown in the overlay once the command has been sent.
    pub fn label(&self) -> &'static str {
        match self {
            MediaCommand::TogglePause => "Paused",
            MediaCommand::SeekForward => "Fast forward",
            MediaCommand::SeekBackward => "Rewind",
            MediaCommand::VolumeUp => "Volume up",
            MediaCommand::VolumeDown => "Volume down",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKey {
    Space,
    Left,
    Right,
    Up,
    Down,
}

impl MediaKey {
    pub fn name(&self) -> &'static str {
        match self {
            MediaKey::Space => "space",
            MediaKey::Left => "left",
            MediaKey::Right => "right",
            MediaKey::Up => "up",
            MediaKey::Down => "down",
        }
    }
}

impl fmt::Display for MediaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_gestures_map_to_player_keys() {
        let keys: Vec<_> = [
            Gesture::Pause,
            Gesture::Advance,
            Gesture::Reverse,
            Gesture::VolumeUp,
            Gesture::VolumeDown,
        ]
        .iter()
        .map(|g| g.command().map(|c| c.key().name()))
        .collect();

        assert_eq!(
            keys,
            vec![
                Some("space"),
                Some("right"),
                Some("left"),
                Some("up"),
                Some("down")
            ]
        );
    }

    #[test]
    fn speed_gestures_have_no_binding() {
        assert_eq!(Gesture::SpeedUp.command(), None);
        assert_eq!(Gesture::SlowDown.command(), None);
        assert_eq!(Gesture::None.command(), None);
    }
}
