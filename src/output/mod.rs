//! Boundary to the OS key-injection layer and the action overlay.

pub mod action_display;
#[cfg(feature = "keyboard")]
pub mod enigo_sink;
pub mod key_sink;
pub mod log_sink;
pub mod recording_sink;

pub use action_display::{ActionDisplay, ProviderDisplay};
#[cfg(feature = "keyboard")]
pub use enigo_sink::EnigoKeySink;
pub use key_sink::KeySink;
pub use log_sink::LogKeySink;
pub use recording_sink::RecordingKeySink;
