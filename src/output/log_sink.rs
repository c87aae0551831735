use crate::common::MediaKey;
use crate::error::AppError;
use crate::output::key_sink::KeySink;

/// Dry-run sink: logs each press and keeps nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogKeySink;

impl LogKeySink {
    pub fn new() -> Self {
        Self
    }
}

impl KeySink for LogKeySink {
    fn press(&mut self, key: MediaKey) -> Result<(), AppError> {
        tracing::info!("[dry-run] key press '{}'", key);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "LogKeySink"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_press_succeeds() {
        let mut sink = LogKeySink::new();
        for key in [MediaKey::Space, MediaKey::Left, MediaKey::Right, MediaKey::Up, MediaKey::Down] {
            assert!(sink.press(key).is_ok());
        }
    }
}
