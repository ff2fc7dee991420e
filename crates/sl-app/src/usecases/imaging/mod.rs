//! Campaign imaging use cases
//!
//! ```text
//! GenerationResponse
//!         |
//! ExtractGeneratedImageUseCase   -> campaign_{id}_{token}.webp (+ .png)
//!         | nothing usable
//! RenderPlaceholderUseCase       -> enhanced_placeholder_{id}_{token}.png
//! ```
//!
//! `ProduceCampaignImageUseCase` chains the two and reports progress.

pub mod extract_generated_image;
pub mod outcome;
pub mod produce_campaign_image;
pub mod render_placeholder;

#[cfg(test)]
pub(crate) mod test_support;

pub use extract_generated_image::{ExtractGeneratedImageUseCase, ExtractionSettings};
pub use outcome::{CampaignImage, ExtractionFailure, ExtractionOutcome, ImageSource, NoImageReason};
pub use produce_campaign_image::ProduceCampaignImageUseCase;
pub use render_placeholder::{PlaceholderSettings, RenderPlaceholderUseCase};
