//! # sl-core
//!
//! Core domain models and ports for Solara campaign imaging.
//!
//! This crate contains pure domain logic without any codec or I/O dependencies.

// Public module exports
pub mod artifact;
pub mod generation;
pub mod ids;
pub mod image;
pub mod placeholder;
pub mod ports;
pub mod progress;

// Re-export commonly used types at the crate root
pub use artifact::{ArtifactName, SavedArtifact};
pub use generation::{GenerationResponse, ResponsePart};
pub use ids::CampaignId;
pub use image::{ColorMode, EncodeFormat, ImageAsset, PixelBuffer, SizeBound};
pub use placeholder::{PlaceholderBranding, PlaceholderLayout};
pub use progress::{CampaignStatus, CampaignStep, ProgressUpdate};
