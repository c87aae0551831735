use std::time::{Duration, Instant};

use crate::common::{Gesture, MediaCommand};
use crate::config::DispatchConfig;

/// Label shown before anything has been dispatched.
pub const NO_ACTION_LABEL: &str = "None";

/// Debounce and hold bookkeeping carried from one frame to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchState {
    /// When the last action of any kind was dispatched
    pub last_dispatch: Option<Instant>,
    /// Start of the current uninterrupted pause hold
    pub pause_hold_start: Option<Instant>,
    /// Display label of the last dispatched action
    pub current_action: &'static str,
}

impl Default for DispatchState {
    fn default() -> Self {
        Self {
            last_dispatch: None,
            pause_hold_start: None,
            current_action: NO_ACTION_LABEL,
        }
    }
}

/// Result of feeding one stabilized gesture to the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    pub state: DispatchState,
    pub command: Option<MediaCommand>,
}

/// Turns the stabilized gesture stream into rate-limited player commands.
///
/// Every command except pause is debounced against the last dispatch of any
/// kind. Pause must be held without interruption for the full hold time; it
/// then fires once and a fresh hold is needed to fire again.
#[derive(Debug, Clone, Copy)]
pub struct ActionDispatcher {
    debounce: Duration,
    pause_hold: Duration,
}

impl ActionDispatcher {
    pub fn new(debounce: Duration, pause_hold: Duration) -> Self {
        Self {
            debounce,
            pause_hold,
        }
    }

    pub fn from_config(config: &DispatchConfig) -> Self {
        Self::new(config.debounce(), config.pause_hold())
    }

    pub fn step(&self, state: DispatchState, gesture: Gesture, now: Instant) -> Dispatch {
        if gesture == Gesture::Pause {
            return self.step_pause(state, now);
        }

        let mut state = DispatchState {
            pause_hold_start: None,
            ..state
        };

        let Some(command) = gesture.command() else {
            return Dispatch {
                state,
                command: None,
            };
        };

        let since_last = state
            .last_dispatch
            .map(|last| now.saturating_duration_since(last));
        if since_last.is_some_and(|elapsed| elapsed < self.debounce) {
            tracing::debug!("Debouncing {} ({:?} since last action)", gesture, since_last);
            return Dispatch {
                state,
                command: None,
            };
        }

        tracing::info!(
            "Gesture {} detected, pressing '{}' ({})",
            gesture,
            command.key(),
            command.label()
        );
        state.last_dispatch = Some(now);
        state.current_action = command.label();
        Dispatch {
            state,
            command: Some(command),
        }
    }

    fn step_pause(&self, mut state: DispatchState, now: Instant) -> Dispatch {
        let Some(hold_start) = state.pause_hold_start else {
            tracing::debug!("Pause hold started");
            state.pause_hold_start = Some(now);
            return Dispatch {
                state,
                command: None,
            };
        };

        if now.saturating_duration_since(hold_start) < self.pause_hold {
            return Dispatch {
                state,
                command: None,
            };
        }

        let command = MediaCommand::TogglePause;
        tracing::info!(
            "Pause held for {:?}, pressing '{}' ({})",
            self.pause_hold,
            command.key(),
            command.label()
        );
        state.pause_hold_start = None;
        state.last_dispatch = Some(now);
        state.current_action = command.label();
        Dispatch {
            state,
            command: Some(command),
        }
    }
}

impl Default for ActionDispatcher {
    fn default() -> Self {
        Self::from_config(&DispatchConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    /// Feed `gesture` at each offset (ms from `origin`), collecting commands.
    fn run(
        dispatcher: &ActionDispatcher,
        mut state: DispatchState,
        origin: Instant,
        frames: &[(u64, Gesture)],
    ) -> (DispatchState, Vec<(u64, MediaCommand)>) {
        let mut commands = Vec::new();
        for (offset, gesture) in frames {
            let dispatch = dispatcher.step(state, *gesture, origin + ms(*offset));
            state = dispatch.state;
            if let Some(command) = dispatch.command {
                commands.push((*offset, command));
            }
        }
        (state, commands)
    }

    fn held(gesture: Gesture, from: u64, to: u64, every: u64) -> Vec<(u64, Gesture)> {
        (from..=to).step_by(every as usize).map(|t| (t, gesture)).collect()
    }

    #[test]
    fn first_action_fires_immediately() {
        let dispatcher = ActionDispatcher::default();
        let dispatch = dispatcher.step(DispatchState::default(), Gesture::Advance, Instant::now());
        assert_eq!(dispatch.command, Some(MediaCommand::SeekForward));
        assert_eq!(dispatch.state.current_action, "Fast forward");
    }

    #[test]
    fn advance_within_debounce_fires_once() {
        let dispatcher = ActionDispatcher::default();
        let origin = Instant::now();
        let (_, commands) = run(
            &dispatcher,
            DispatchState::default(),
            origin,
            &[(0, Gesture::Advance), (499, Gesture::Advance)],
        );
        assert_eq!(commands, vec![(0, MediaCommand::SeekForward)]);
    }

    #[test]
    fn advance_after_debounce_fires_twice() {
        let dispatcher = ActionDispatcher::default();
        let origin = Instant::now();
        let (_, commands) = run(
            &dispatcher,
            DispatchState::default(),
            origin,
            &[(0, Gesture::Advance), (500, Gesture::Advance)],
        );
        assert_eq!(
            commands,
            vec![(0, MediaCommand::SeekForward), (500, MediaCommand::SeekForward)]
        );
    }

    #[test]
    fn debounce_is_shared_across_gestures() {
        let dispatcher = ActionDispatcher::default();
        let origin = Instant::now();
        let (state, commands) = run(
            &dispatcher,
            DispatchState::default(),
            origin,
            &[
                (0, Gesture::VolumeUp),
                (200, Gesture::VolumeDown),
                (400, Gesture::Reverse),
                (600, Gesture::Reverse),
            ],
        );
        assert_eq!(
            commands,
            vec![(0, MediaCommand::VolumeUp), (600, MediaCommand::SeekBackward)]
        );
        assert_eq!(state.current_action, "Rewind");
    }

    #[test]
    fn pause_held_short_of_hold_time_does_nothing() {
        let dispatcher = ActionDispatcher::default();
        let (state, commands) = run(
            &dispatcher,
            DispatchState::default(),
            Instant::now(),
            &held(Gesture::Pause, 0, 2900, 100),
        );
        assert!(commands.is_empty());
        assert!(state.pause_hold_start.is_some());
        assert_eq!(state.current_action, NO_ACTION_LABEL);
    }

    #[test]
    fn pause_fires_once_per_full_hold() {
        let dispatcher = ActionDispatcher::default();
        let (state, commands) = run(
            &dispatcher,
            DispatchState::default(),
            Instant::now(),
            &held(Gesture::Pause, 0, 6100, 100),
        );
        // hold restarts on the frame after the first press (3100ms)
        assert_eq!(
            commands,
            vec![(3000, MediaCommand::TogglePause), (6100, MediaCommand::TogglePause)]
        );
        assert_eq!(state.pause_hold_start, None);
        assert_eq!(state.current_action, "Paused");
    }

    #[test]
    fn interrupted_pause_hold_starts_over() {
        let dispatcher = ActionDispatcher::default();
        let mut frames = held(Gesture::Pause, 0, 2000, 100);
        frames.push((2100, Gesture::Advance));
        frames.extend(held(Gesture::Pause, 2200, 4200, 100));

        let (_, commands) = run(&dispatcher, DispatchState::default(), Instant::now(), &frames);
        assert_eq!(commands, vec![(2100, MediaCommand::SeekForward)]);
    }

    #[test]
    fn pause_updates_shared_debounce() {
        let dispatcher = ActionDispatcher::default();
        let mut frames = held(Gesture::Pause, 0, 3000, 100);
        frames.push((3200, Gesture::Advance));
        frames.push((3500, Gesture::Advance));

        let (_, commands) = run(&dispatcher, DispatchState::default(), Instant::now(), &frames);
        assert_eq!(
            commands,
            vec![(3000, MediaCommand::TogglePause), (3500, MediaCommand::SeekForward)]
        );
    }

    #[test]
    fn pause_ignores_debounce() {
        let dispatcher = ActionDispatcher::default();
        let mut frames = vec![(0, Gesture::Advance)];
        frames.extend(held(Gesture::Pause, 100, 3100, 100));

        let (_, commands) = run(&dispatcher, DispatchState::default(), Instant::now(), &frames);
        assert_eq!(
            commands,
            vec![(0, MediaCommand::SeekForward), (3100, MediaCommand::TogglePause)]
        );
    }

    #[test]
    fn unbound_gestures_only_cancel_the_hold() {
        let dispatcher = ActionDispatcher::default();
        let origin = Instant::now();
        let (state, commands) = run(
            &dispatcher,
            DispatchState::default(),
            origin,
            &[
                (0, Gesture::Pause),
                (100, Gesture::SpeedUp),
                (200, Gesture::SlowDown),
                (300, Gesture::None),
            ],
        );
        assert!(commands.is_empty());
        assert_eq!(state, DispatchState::default());
    }
}
