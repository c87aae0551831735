use crate::common::MediaKey;
use crate::error::AppError;

/// Destination for simulated key presses. Presses are fire-and-forget from
/// the loop's point of view: failures are logged, never retried.
pub trait KeySink {
    fn press(&mut self, key: MediaKey) -> Result<(), AppError>;
    fn name(&self) -> &'static str;
}
