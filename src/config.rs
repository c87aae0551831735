use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::Level;

use crate::error::AppError;

const ENV_PREFIX: &str = "GESTURE_REMOTE";

/// Top-level runtime configuration.
///
/// Every section falls back to its defaults, so an empty file (or no file at
/// all) yields the stock setup: webcam 0 at 640x480, mirrored, two hands,
/// a ten-frame voting window, a 0.5s debounce and a 3s pause hold.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub provider: ProviderConfig,
    pub voting: VotingConfig,
    pub dispatch: DispatchConfig,
    pub logging: LoggingConfig,
}

// ============================================================================
// Provider Config
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Executable that streams hand landmarks as JSON lines on stdout.
    /// Defaults to the bundled `demos/hand_landmarks.py` run with python3.
    pub program: String,
    /// Extra arguments placed before the generated ones (e.g. a script path)
    pub args: Vec<String>,
    pub camera: u32,
    pub frame_width: u32,
    pub frame_height: u32,
    /// Flip frames horizontally before inference (front-facing camera)
    pub mirror: bool,
    pub max_hands: usize,
    pub detection_confidence: f32,
    pub tracking_confidence: f32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            program: "python3".to_string(),
            args: vec!["demos/hand_landmarks.py".to_string()],
            camera: 0,
            frame_width: 640,
            frame_height: 480,
            mirror: true,
            max_hands: 2,
            detection_confidence: 0.7,
            tracking_confidence: 0.5,
        }
    }
}

impl ProviderConfig {
    /// Full argument list handed to the provider process.
    pub fn command_args(&self) -> Vec<String> {
        let mut args = self.args.clone();
        args.extend([
            "--camera".to_string(),
            self.camera.to_string(),
            "--width".to_string(),
            self.frame_width.to_string(),
            "--height".to_string(),
            self.frame_height.to_string(),
            "--max-hands".to_string(),
            self.max_hands.to_string(),
            "--min-detection-confidence".to_string(),
            self.detection_confidence.to_string(),
            "--min-tracking-confidence".to_string(),
            self.tracking_confidence.to_string(),
        ]);
        if self.mirror {
            args.push("--mirror".to_string());
        }
        args
    }
}

// ============================================================================
// Voting / Dispatch Config
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VotingConfig {
    pub window_size: usize,
}

impl Default for VotingConfig {
    fn default() -> Self {
        Self { window_size: 10 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Minimum gap between two dispatched actions
    pub debounce_ms: u64,
    /// How long the pause gesture must be held before it fires
    pub pause_hold_ms: u64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 500,
            pause_hold_ms: 3000,
        }
    }
}

impl DispatchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn pause_hold(&self) -> Duration {
        Duration::from_millis(self.pause_hold_ms)
    }
}

// ============================================================================
// Logging Config
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of "trace", "debug", "info", "warn", "error"
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn max_level(&self) -> Result<Level, AppError> {
        self.level
            .parse::<Level>()
            .map_err(|_| AppError::InvalidConfig(format!("Unknown log level '{}'", self.level)))
    }
}

impl Configuration {
    /// Layer the optional TOML file and `GESTURE_REMOTE__*` environment
    /// variables over the defaults, then validate the result.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("provider.args"),
            )
            .build()?;

        let configuration: Configuration = settings.try_deserialize()?;
        configuration.validate()?;
        Ok(configuration)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), AppError> {
        if self.provider.program.trim().is_empty() {
            return Err(AppError::InvalidConfig(
                "Provider program must not be empty".to_string(),
            ));
        }

        if self.provider.frame_width == 0 || self.provider.frame_height == 0 {
            return Err(AppError::InvalidConfig(
                "Frame dimensions must be greater than 0".to_string(),
            ));
        }

        if self.provider.max_hands == 0 {
            return Err(AppError::InvalidConfig(
                "Max hands must be greater than 0".to_string(),
            ));
        }

        for (name, value) in [
            ("Detection confidence", self.provider.detection_confidence),
            ("Tracking confidence", self.provider.tracking_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(AppError::InvalidConfig(format!(
                    "{} must be between 0.0 and 1.0",
                    name
                )));
            }
        }

        if self.voting.window_size == 0 {
            return Err(AppError::InvalidConfig(
                "Voting window size must be greater than 0".to_string(),
            ));
        }

        if self.dispatch.pause_hold_ms == 0 {
            return Err(AppError::InvalidConfig(
                "Pause hold must be greater than 0".to_string(),
            ));
        }

        self.logging.max_level()?;

        Ok(())
    }
}
