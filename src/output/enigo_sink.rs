use enigo::{Direction, Enigo, Key, Keyboard, Settings};

use crate::common::MediaKey;
use crate::error::AppError;
use crate::output::key_sink::KeySink;

/// Injects key clicks into whatever window has focus, using enigo.
pub struct EnigoKeySink {
    enigo: Enigo,
}

impl EnigoKeySink {
    pub fn new() -> Result<Self, AppError> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| AppError::Keyboard(format!("Failed to initialize Enigo: {}", e)))?;
        Ok(Self { enigo })
    }

    fn key_for(key: MediaKey) -> Key {
        match key {
            MediaKey::Space => Key::Space,
            MediaKey::Left => Key::LeftArrow,
            MediaKey::Right => Key::RightArrow,
            MediaKey::Up => Key::UpArrow,
            MediaKey::Down => Key::DownArrow,
        }
    }
}

impl KeySink for EnigoKeySink {
    fn press(&mut self, key: MediaKey) -> Result<(), AppError> {
        self.enigo
            .key(Self::key_for(key), Direction::Click)
            .map_err(|e| AppError::Keyboard(format!("Failed to send key '{}': {}", key, e)))
    }

    fn name(&self) -> &'static str {
        "EnigoKeySink"
    }
}
