mod asset;
mod size_bound;

pub use asset::{ColorMode, ImageAsset, ImageAssetError, PixelBuffer};
pub use size_bound::SizeBound;

/// Output encodings written for every generated artifact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EncodeFormat {
    /// Lossless container at the default (mid-range) compression level.
    Png,
    /// Lossy web format, quality in `0.0..=100.0`.
    WebpLossy { quality: f32 },
}

impl EncodeFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::WebpLossy { .. } => "webp",
        }
    }
}
