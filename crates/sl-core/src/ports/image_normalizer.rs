use anyhow::Result;

use crate::image::{ImageAsset, SizeBound};

/// Canonicalises a decoded bitmap for web delivery.
///
/// Implementations must return an opaque truecolor image whose dimensions
/// fit inside `bound`, downscaling (never upscaling) with the aspect ratio
/// preserved, and sharpened after any resize.
///
/// An error means the bitmap itself could not be represented; callers fold
/// it into their own failure handling.
pub trait ImageNormalizerPort: Send + Sync {
    fn normalize(&self, asset: ImageAsset, bound: SizeBound) -> Result<ImageAsset>;
}
