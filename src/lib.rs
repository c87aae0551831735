//! Hand-gesture remote control for media players.
//!
//! An external provider streams hand landmarks from the webcam; each frame
//! is reduced to a finger count, classified, stabilized by majority vote
//! and turned into a debounced key press:
//!
//! | Fingers | Gesture | Key |
//! |---|---|---|
//! | 1 (held 3s) | pause | space |
//! | 2 | advance | right |
//! | 3 | reverse | left |
//! | 4 | volume-up | up |
//! | 5 | volume-down | down |
//! | 6 | speed-up | (none) |
//! | 7+ | slow-down | (none) |

pub mod common;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod intake;
pub mod output;
pub mod pipeline;

pub use config::Configuration;
pub use coordinator::{Coordinator, CoordinatorBuilder, RunSummary, StopReason};
pub use error::AppError;
