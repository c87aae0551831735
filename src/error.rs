use thiserror::Error;

// Main Application Error Type

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration Error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Landmark provider error: {0}")]
    Provider(String),
    #[error("Hand observation must have 21 landmarks, got {0}")]
    MalformedHand(usize),
    #[error("Keyboard error: {0}")]
    Keyboard(String),
    #[error("Pipeline error: {0}")]
    Pipeline(String),
}
