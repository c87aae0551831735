use std::future::Future;
use std::pin::Pin;

use crate::common::Frame;
use crate::error::AppError;

/// What the landmark provider handed us next.
#[derive(Debug, Clone)]
pub enum SourceEvent {
    Frame(Frame),
    /// The user asked to quit from the provider side
    Quit,
    /// The camera stopped delivering frames; not recoverable
    CameraFailure(String),
}

/// Anything that yields hand-landmark frames: the live provider process or a
/// recorded session. `Ok(None)` means the stream ended.
pub trait FrameSource: Send {
    fn read<'a>(
        &'a mut self,
    ) -> Pin<Box<dyn Future<Output = Result<Option<SourceEvent>, AppError>> + Send + 'a>>;
}
