use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;

use tokio::process::{Child, ChildStdin, ChildStdout, Command};

use crate::config::ProviderConfig;
use crate::error::AppError;
use crate::intake::frame_source::{FrameSource, SourceEvent};
use crate::intake::landmark_stream_reader::LandmarkStreamReader;
use crate::output::ProviderDisplay;

/// Live landmark provider running as a child process.
///
/// The child owns the camera, the hand model and the preview window. We read
/// landmarks from its stdout and send the action label to its stdin. It is
/// killed when the source is dropped.
pub struct SubprocessSource {
    child: Child,
    reader: LandmarkStreamReader<ChildStdout>,
    stdin: Option<ChildStdin>,
}

impl SubprocessSource {
    pub fn spawn(config: &ProviderConfig) -> Result<Self, AppError> {
        let args = config.command_args();
        tracing::info!("Starting landmark provider: {} {}", config.program, args.join(" "));

        let mut child = Command::new(&config.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                AppError::Provider(format!("Failed to start '{}': {}", config.program, e))
            })?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| AppError::Provider("Provider stdout not captured".to_string()))?;

        let stdin = child.stdin.take();

        Ok(Self {
            child,
            reader: LandmarkStreamReader::new(stdout, config.max_hands),
            stdin,
        })
    }

    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }

    /// Display that draws the action label in the provider's preview.
    /// Only the first call returns it.
    pub fn take_display(&mut self) -> Option<ProviderDisplay<ChildStdin>> {
        self.stdin.take().map(ProviderDisplay::new)
    }

    async fn next_event(&mut self) -> Result<Option<SourceEvent>, AppError> {
        let event = self.reader.next_event().await?;
        if event.is_none() {
            match self.child.try_wait() {
                Ok(Some(status)) => tracing::info!("Landmark provider exited: {}", status),
                Ok(None) => tracing::warn!("Landmark provider closed its output"),
                Err(e) => tracing::warn!("Could not query landmark provider status: {}", e),
            }
        }
        Ok(event)
    }
}

impl FrameSource for SubprocessSource {
    fn read<'a>(
        &'a mut self,
    ) -> Pin<Box<dyn Future<Output = Result<Option<SourceEvent>, AppError>> + Send + 'a>> {
        Box::pin(self.next_event())
    }
}
