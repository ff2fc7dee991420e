//! Solara imaging application layer
//!
//! Use cases that turn a generation response into a stored campaign image,
//! falling back to a branded placeholder. Adapters are injected as
//! `sl_core::ports` trait objects.

pub mod usecases;

pub use usecases::imaging::{
    CampaignImage, ExtractGeneratedImageUseCase, ExtractionOutcome, ImageSource,
    ProduceCampaignImageUseCase, RenderPlaceholderUseCase,
};
