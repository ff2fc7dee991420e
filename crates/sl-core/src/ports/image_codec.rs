use anyhow::Result;

use crate::image::{EncodeFormat, ImageAsset};

/// Decodes encoded image bytes (PNG, JPEG, WebP, ...) into a bitmap.
///
/// 将编码后的图像字节解码为位图。
pub trait ImageDecoderPort: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<ImageAsset>;
}

/// Encodes a bitmap into one of the artifact formats.
///
/// 将位图编码为产物格式。
pub trait ImageEncoderPort: Send + Sync {
    fn encode(&self, asset: &ImageAsset, format: EncodeFormat) -> Result<Vec<u8>>;
}
