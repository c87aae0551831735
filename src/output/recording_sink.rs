use std::sync::{Arc, Mutex};

use crate::common::MediaKey;
use crate::error::AppError;
use crate::output::key_sink::KeySink;

/// Records presses instead of injecting them, for tests. Clones share the
/// same record, so a caller can keep one handle and give another to the
/// coordinator.
#[derive(Clone, Default)]
pub struct RecordingKeySink {
    pressed: Arc<Mutex<Vec<MediaKey>>>,
}

impl RecordingKeySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pressed(&self) -> Vec<MediaKey> {
        self.pressed
            .lock()
            .map(|keys| keys.clone())
            .unwrap_or_default()
    }
}

impl KeySink for RecordingKeySink {
    fn press(&mut self, key: MediaKey) -> Result<(), AppError> {
        tracing::debug!("Recorded key press '{}'", key);
        self.pressed
            .lock()
            .map_err(|e| AppError::Keyboard(format!("Recorded key list poisoned: {}", e)))?
            .push(key);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "RecordingKeySink"
    }
}
