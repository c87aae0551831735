use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::AppError;
use crate::intake::wire::HostMessage;

/// Where the current action label is shown, next to the key sink.
#[async_trait]
pub trait ActionDisplay: Send {
    async fn show(&mut self, label: &str) -> Result<(), AppError>;
    fn name(&self) -> &'static str;
}

/// Sends the label to the landmark provider, which draws it on its preview.
pub struct ProviderDisplay<W>
where
    W: AsyncWrite + Unpin + Send,
{
    writer: W,
}

impl<W: AsyncWrite + Unpin + Send> ProviderDisplay<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

#[async_trait]
impl<W: AsyncWrite + Unpin + Send> ActionDisplay for ProviderDisplay<W> {
    async fn show(&mut self, label: &str) -> Result<(), AppError> {
        let line = HostMessage::action(label).to_line()?;
        self.writer.write_all(&line).await?;
        self.writer.flush().await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ProviderDisplay"
    }
}
