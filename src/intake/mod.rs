//! Boundary to the external landmark provider (camera + hand model).

pub mod frame_source;
pub mod landmark_stream_reader;
pub mod replay_source;
pub mod subprocess_source;
pub mod wire;

pub use frame_source::{FrameSource, SourceEvent};
pub use landmark_stream_reader::LandmarkStreamReader;
pub use replay_source::ReplaySource;
pub use subprocess_source::SubprocessSource;
