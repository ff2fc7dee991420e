//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases in `sl-app` and the
//! adapters in `sl-infra`. Image ports are synchronous: decoding, resizing
//! and encoding are CPU-bound and run to completion or fail. Only the
//! progress reporter talks to the network and is async.

mod artifact_writer;
mod clock;
mod image_codec;
mod image_normalizer;
mod placeholder_canvas;
mod progress_reporter;

pub use artifact_writer::ArtifactWriterPort;
pub use clock::*;
pub use image_codec::{ImageDecoderPort, ImageEncoderPort};
pub use image_normalizer::ImageNormalizerPort;
pub use placeholder_canvas::PlaceholderCanvasPort;
pub use progress_reporter::ProgressReporterPort;
