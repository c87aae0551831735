use std::future::Future;
use std::path::Path;
use std::pin::Pin;

use tokio::fs::File;

use crate::error::AppError;
use crate::intake::frame_source::{FrameSource, SourceEvent};
use crate::intake::landmark_stream_reader::LandmarkStreamReader;

/// Recorded provider session read back from a JSON-lines file.
///
/// Frames carrying `timestamp_ms` are replayed on their recorded clock, so
/// debounce and hold timing behave exactly as they did live.
pub struct ReplaySource {
    reader: LandmarkStreamReader<File>,
}

impl ReplaySource {
    pub async fn open(path: &Path, max_hands: usize) -> Result<Self, AppError> {
        let file = File::open(path).await.map_err(|e| {
            AppError::Provider(format!("Failed to open replay '{}': {}", path.display(), e))
        })?;
        tracing::info!("Replaying landmark session from {}", path.display());
        Ok(Self {
            reader: LandmarkStreamReader::new(file, max_hands),
        })
    }
}

impl FrameSource for ReplaySource {
    fn read<'a>(
        &'a mut self,
    ) -> Pin<Box<dyn Future<Output = Result<Option<SourceEvent>, AppError>> + Send + 'a>> {
        self.reader.read()
    }
}
