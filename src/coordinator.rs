use crate::{
    config::Configuration,
    error::AppError,
    intake::{FrameSource, SourceEvent},
    output::{ActionDisplay, KeySink},
    pipeline::{FrameContext, ProcessingPipeline, services::NO_ACTION_LABEL},
};
use tokio_util::sync::CancellationToken;

/// Why the frame loop ended.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StopReason {
    #[default]
    EndOfStream,
    Cancelled,
    Quit,
    CameraFailure(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub frames_with_hands: u64,
    pub commands: u64,
    pub stop_reason: StopReason,
}

/// Runs the single-threaded frame loop: read landmarks, run the pipeline,
/// press whatever key the dispatcher asked for.
pub struct Coordinator {
    source: Box<dyn FrameSource>,
    key_sink: Box<dyn KeySink>,
    display: Option<Box<dyn ActionDisplay>>,
    pipeline: ProcessingPipeline,
    cancel_token: CancellationToken,
}

impl Coordinator {
    fn new(
        source: Box<dyn FrameSource>,
        key_sink: Box<dyn KeySink>,
        display: Option<Box<dyn ActionDisplay>>,
        pipeline: ProcessingPipeline,
    ) -> Self {
        Self {
            source,
            key_sink,
            display,
            pipeline,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Shows the label on the display, if any. A display that fails once is
    /// dropped for the rest of the run.
    async fn show_action(&mut self, label: &str) {
        let Some(display) = self.display.as_mut() else {
            return;
        };
        let result = display.show(label).await;
        if let Err(e) = result {
            let display_name = display.name();
            tracing::warn!("{} stopped accepting action labels: {}", display_name, e);
            self.display = None;
        }
    }

    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub async fn run(mut self) -> Result<RunSummary, AppError> {
        tracing::info!("Frame loop started, sending keys via {}", self.key_sink.name());
        let mut summary = RunSummary::default();
        let mut shown_action = NO_ACTION_LABEL;
        self.show_action(shown_action).await;

        summary.stop_reason = loop {
            let event = tokio::select! {
                biased;
                _ = self.cancel_token.cancelled() => break StopReason::Cancelled,
                event = self.source.read() => event?,
            };

            let frame = match event {
                Some(SourceEvent::Frame(frame)) => frame,
                Some(SourceEvent::Quit) => break StopReason::Quit,
                Some(SourceEvent::CameraFailure(message)) => {
                    tracing::error!("Camera read failed: {}", message);
                    break StopReason::CameraFailure(message);
                }
                None => break StopReason::EndOfStream,
            };

            summary.frames += 1;
            if frame.has_hands() {
                summary.frames_with_hands += 1;
            }

            let context = match self.pipeline.process(FrameContext::new(frame)).await {
                Ok(context) => context,
                Err(e) => {
                    tracing::error!("Pipeline error: {}", e);
                    continue;
                }
            };
            tracing::trace!(
                "Frame {} processed in {}us",
                context.frame.get_frame_id(),
                context.metrics.total_processing_duration_us
            );

            if let Some(command) = context.command {
                summary.commands += 1;
                if let Err(e) = self.key_sink.press(command.key()) {
                    tracing::warn!("Key press for {:?} failed: {}", command, e);
                }
            }

            if context.current_action != shown_action {
                shown_action = context.current_action;
                tracing::info!(
                    "Action: {} (at {})",
                    shown_action,
                    context.frame.captured_at().format("%H:%M:%S%.3f")
                );
                self.show_action(shown_action).await;
            }
        };

        tracing::info!(
            "Frame loop stopped ({:?}): {} frames, {} with hands, {} commands",
            summary.stop_reason,
            summary.frames,
            summary.frames_with_hands,
            summary.commands
        );
        Ok(summary)
    }

    pub fn stop(&self) {
        self.cancel_token.cancel();
    }
}

impl Drop for Coordinator {
    fn drop(&mut self) {
        self.stop();
    }
}

pub struct CoordinatorBuilder {
    configuration: Configuration,
    source: Option<Box<dyn FrameSource>>,
    key_sink: Option<Box<dyn KeySink>>,
    display: Option<Box<dyn ActionDisplay>>,
    pipeline: Option<ProcessingPipeline>,
}

impl CoordinatorBuilder {
    pub fn new(configuration: Configuration) -> Self {
        Self {
            configuration,
            source: None,
            key_sink: None,
            display: None,
            pipeline: None,
        }
    }

    pub fn source(mut self, source: Box<dyn FrameSource>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn key_sink(mut self, key_sink: Box<dyn KeySink>) -> Self {
        self.key_sink = Some(key_sink);
        self
    }

    pub fn action_display(mut self, display: Box<dyn ActionDisplay>) -> Self {
        self.display = Some(display);
        self
    }

    // Replaces the standard pipeline built from the configuration.
    pub fn pipeline(mut self, pipeline: ProcessingPipeline) -> Self {
        self.pipeline = Some(pipeline);
        self
    }

    pub fn build(self) -> Result<Coordinator, AppError> {
        let source = self
            .source
            .ok_or(AppError::Pipeline("Frame source not set".to_string()))?;
        let key_sink = self
            .key_sink
            .ok_or(AppError::Pipeline("Key sink not set".to_string()))?;
        let pipeline = match self.pipeline {
            Some(pipeline) => pipeline,
            None => ProcessingPipeline::standard(&self.configuration),
        };
        Ok(Coordinator::new(source, key_sink, self.display, pipeline))
    }
}
