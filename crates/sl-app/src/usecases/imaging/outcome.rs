//! Results of the imaging use cases.
//! 图像用例的结果类型。

use sl_core::artifact::SavedArtifact;

/// Why a generation response produced no image. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoImageReason {
    NoCandidates,
    NoParts,
    NoImagePart,
}

/// Reason an inline image was found but could not be persisted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractionFailure {
    #[error("failed to decode inline image: {0}")]
    Decode(String),
    #[error("failed to normalize image: {0}")]
    Normalize(String),
    #[error("failed to encode image: {0}")]
    Encode(String),
    #[error("failed to write artifact: {0}")]
    Write(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    Saved(SavedArtifact),
    NoImage(NoImageReason),
    Failed(ExtractionFailure),
}

impl ExtractionOutcome {
    /// Canonical web filename, or `None` when nothing usable was produced.
    pub fn into_filename(self) -> Option<String> {
        match self {
            Self::Saved(saved) => Some(saved.web.into_inner()),
            Self::NoImage(_) | Self::Failed(_) => None,
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved(_))
    }
}

/// Where the image attached to a campaign came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Generated,
    Placeholder,
    /// The placeholder itself failed; the filename is empty.
    Unavailable,
}

/// The image a campaign ends up with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignImage {
    pub filename: String,
    pub source: ImageSource,
}

impl CampaignImage {
    pub fn generated(filename: String) -> Self {
        Self {
            filename,
            source: ImageSource::Generated,
        }
    }

    /// An empty filename means the placeholder could not be produced.
    pub fn from_placeholder(filename: String) -> Self {
        let source = if filename.is_empty() {
            ImageSource::Unavailable
        } else {
            ImageSource::Placeholder
        };
        Self { filename, source }
    }

    pub fn is_available(&self) -> bool {
        self.source != ImageSource::Unavailable
    }
}
