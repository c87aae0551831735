use std::future::Future;
use std::pin::Pin;
use std::time::{Duration, Instant};

use chrono::Utc;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

use crate::common::{Frame, HandObservation};
use crate::error::AppError;
use crate::intake::frame_source::{FrameSource, SourceEvent};
use crate::intake::wire::ProviderMessage;

/// Decodes the provider's JSON line protocol from any async byte stream.
///
/// Bad lines (invalid JSON or invalid UTF-8) are logged and skipped rather
/// than ending the session, and hands that do not carry exactly 21
/// landmarks are dropped.
pub struct LandmarkStreamReader<T>
where
    T: AsyncRead + Unpin + Send,
{
    stream: BufReader<T>,
    line: Vec<u8>,
    max_hands: usize,
    line_number: usize,
    /// (arrival instant, provider timestamp) of the first timestamped frame
    clock_origin: Option<(Instant, u64)>,
}

impl<T: AsyncRead + Unpin + Send> LandmarkStreamReader<T> {
    pub fn new(stream: T, max_hands: usize) -> Self {
        Self {
            stream: BufReader::new(stream),
            line: Vec::new(),
            max_hands,
            line_number: 0,
            clock_origin: None,
        }
    }

    /// Maps the provider timestamp onto our monotonic clock, anchored at the
    /// first timestamped frame. Frames without one use their arrival time.
    fn frame_instant(&mut self, timestamp_ms: Option<u64>) -> Instant {
        let arrived = Instant::now();
        match timestamp_ms {
            Some(ms) => {
                let (origin, first_ms) = *self.clock_origin.get_or_insert((arrived, ms));
                origin + Duration::from_millis(ms.saturating_sub(first_ms))
            }
            None => arrived,
        }
    }

    fn decode_line(&mut self, line: &[u8]) -> Option<SourceEvent> {
        let message = match serde_json::from_slice::<ProviderMessage>(line) {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!(
                    "Skipping malformed provider line {}: {}",
                    self.line_number,
                    e
                );
                return None;
            }
        };

        match message {
            ProviderMessage::Ready => {
                tracing::info!("Landmark provider ready");
                None
            }
            ProviderMessage::Quit => Some(SourceEvent::Quit),
            ProviderMessage::CameraError { message } => Some(SourceEvent::CameraFailure(message)),
            ProviderMessage::Frame {
                timestamp_ms,
                hands,
            } => {
                if hands.len() > self.max_hands {
                    tracing::debug!(
                        "Provider reported {} hands, keeping the first {}",
                        hands.len(),
                        self.max_hands
                    );
                }
                let hands: Vec<HandObservation> = hands
                    .into_iter()
                    .take(self.max_hands)
                    .filter_map(|hand| match HandObservation::try_from(hand) {
                        Ok(observation) => Some(observation),
                        Err(e) => {
                            tracing::warn!("Dropping hand on line {}: {}", self.line_number, e);
                            None
                        }
                    })
                    .collect();
                let timestamp = self.frame_instant(timestamp_ms);
                Some(SourceEvent::Frame(Frame::new(hands, Utc::now(), timestamp)))
            }
        }
    }

    pub async fn next_event(&mut self) -> Result<Option<SourceEvent>, AppError> {
        loop {
            self.line.clear();
            if self.stream.read_until(b'\n', &mut self.line).await? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let line = std::mem::take(&mut self.line);
            let event = match line.trim_ascii() {
                [] => None,
                trimmed => self.decode_line(trimmed),
            };
            self.line = line;

            if event.is_some() {
                return Ok(event);
            }
        }
    }
}

impl<T: AsyncRead + Unpin + Send> FrameSource for LandmarkStreamReader<T> {
    fn read<'a>(
        &'a mut self,
    ) -> Pin<Box<dyn Future<Output = Result<Option<SourceEvent>, AppError>> + Send + 'a>> {
        Box::pin(self.next_event())
    }
}
