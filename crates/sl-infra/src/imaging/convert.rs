//! Conversions between the domain bitmap and `image` buffers.

use anyhow::{anyhow, Result};
use image::{DynamicImage, GenericImageView, GrayAlphaImage, GrayImage, RgbImage, RgbaImage};
use sl_core::image::{ImageAsset, PixelBuffer};

/// Palette images come out as RGBA.
pub(crate) fn to_dynamic(asset: ImageAsset) -> Result<DynamicImage> {
    let (width, height) = asset.dimensions();
    let image = match asset.expand_palette().into_pixels() {
        PixelBuffer::Rgb8(data) => RgbImage::from_raw(width, height, data).map(DynamicImage::ImageRgb8),
        PixelBuffer::Rgba8(data) => {
            RgbaImage::from_raw(width, height, data).map(DynamicImage::ImageRgba8)
        }
        PixelBuffer::Luma8(data) => {
            GrayImage::from_raw(width, height, data).map(DynamicImage::ImageLuma8)
        }
        PixelBuffer::LumaA8(data) => {
            GrayAlphaImage::from_raw(width, height, data).map(DynamicImage::ImageLumaA8)
        }
        // expanded above
        PixelBuffer::Indexed { .. } => None,
    };
    image.ok_or_else(|| anyhow!("pixel buffer does not fit {width}x{height}"))
}

/// Higher bit depths are reduced to 8 bits per channel.
pub(crate) fn from_dynamic(image: DynamicImage) -> Result<ImageAsset> {
    let (width, height) = image.dimensions();
    let pixels = match image {
        DynamicImage::ImageRgb8(buffer) => PixelBuffer::Rgb8(buffer.into_raw()),
        DynamicImage::ImageRgba8(buffer) => PixelBuffer::Rgba8(buffer.into_raw()),
        DynamicImage::ImageLuma8(buffer) => PixelBuffer::Luma8(buffer.into_raw()),
        DynamicImage::ImageLumaA8(buffer) => PixelBuffer::LumaA8(buffer.into_raw()),
        other if other.color().has_alpha() => PixelBuffer::Rgba8(other.to_rgba8().into_raw()),
        other => PixelBuffer::Rgb8(other.to_rgb8().into_raw()),
    };
    Ok(ImageAsset::new(width, height, pixels)?)
}
