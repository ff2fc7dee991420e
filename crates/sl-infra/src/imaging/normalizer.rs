//! Web-delivery normalizer for decoded images
//! 面向 Web 交付的图像规范化器
//!
//! 1. Flatten to opaque truecolor (alpha and palette images composite onto white)
//! 2. Downscale into the size bound with Lanczos3, never upscale
//! 3. Unsharp mask, always

use anyhow::Result;
use image::imageops::{self, FilterType};
use image::{RgbImage, RgbaImage};
use tracing::debug;

use sl_core::image::{ColorMode, ImageAsset, PixelBuffer, SizeBound};
use sl_core::ports::ImageNormalizerPort;

use super::convert::to_dynamic;
use super::sharpen::UnsharpMask;

pub struct ImageNormalizer {
    sharpen: UnsharpMask,
}

impl ImageNormalizer {
    pub fn new(sharpen: UnsharpMask) -> Self {
        Self { sharpen }
    }
}

impl Default for ImageNormalizer {
    fn default() -> Self {
        Self::new(UnsharpMask::default())
    }
}

impl ImageNormalizerPort for ImageNormalizer {
    fn normalize(&self, asset: ImageAsset, bound: SizeBound) -> Result<ImageAsset> {
        let source_mode = asset.color_mode();
        let (width, height) = asset.dimensions();

        let opaque = flatten_to_rgb(asset)?;

        let (target_width, target_height) = bound.fit(width, height);
        let resized = if (target_width, target_height) == (width, height) {
            opaque
        } else {
            imageops::resize(&opaque, target_width, target_height, FilterType::Lanczos3)
        };

        let sharpened = self.sharpen.apply(&resized);

        debug!(
            ?source_mode,
            from = %format!("{width}x{height}"),
            to = %format!("{target_width}x{target_height}"),
            "Normalized image"
        );

        Ok(ImageAsset::new(
            target_width,
            target_height,
            PixelBuffer::Rgb8(sharpened.into_raw()),
        )?)
    }
}

fn flatten_to_rgb(asset: ImageAsset) -> Result<RgbImage> {
    let needs_composite = matches!(
        asset.color_mode(),
        ColorMode::TruecolorAlpha | ColorMode::GrayscaleAlpha | ColorMode::Palette
    );
    let image = to_dynamic(asset)?;

    if needs_composite {
        Ok(composite_on_white(&image.into_rgba8()))
    } else {
        Ok(image.into_rgb8())
    }
}

/// Alpha-composite onto an opaque white background of the same size.
fn composite_on_white(rgba: &RgbaImage) -> RgbImage {
    let mut out = RgbImage::new(rgba.width(), rgba.height());
    for (dst, src) in out.pixels_mut().zip(rgba.pixels()) {
        let alpha = u32::from(src[3]);
        for channel in 0..3 {
            let blended = u32::from(src[channel]) * alpha + 255 * (255 - alpha);
            dst[channel] = ((blended + 127) / 255) as u8;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(asset: &ImageAsset, x: u32, y: u32) -> [u8; 3] {
        let PixelBuffer::Rgb8(data) = asset.pixels() else {
            panic!("expected truecolor output");
        };
        let offset = ((y * asset.width() + x) * 3) as usize;
        [data[offset], data[offset + 1], data[offset + 2]]
    }

    #[test]
    fn test_transparent_pixels_become_white() {
        let asset = ImageAsset::new(4, 4, PixelBuffer::Rgba8(vec![0; 4 * 4 * 4])).unwrap();
        let out = ImageNormalizer::default()
            .normalize(asset, SizeBound::default())
            .unwrap();

        assert_eq!(out.color_mode(), ColorMode::Truecolor);
        assert_eq!(pixel(&out, 1, 1), [255, 255, 255]);
    }

    #[test]
    fn test_opaque_alpha_keeps_color() {
        let data = [200u8, 10, 10, 255].repeat(16);
        let asset = ImageAsset::new(4, 4, PixelBuffer::Rgba8(data)).unwrap();
        let out = ImageNormalizer::default()
            .normalize(asset, SizeBound::default())
            .unwrap();

        assert_eq!(pixel(&out, 2, 2), [200, 10, 10]);
    }

    #[test]
    fn test_half_alpha_blends_with_white() {
        let rgba = RgbaImage::from_pixel(1, 1, image::Rgba([0, 0, 0, 128]));
        let rgb = composite_on_white(&rgba);
        assert_eq!(rgb.get_pixel(0, 0).0, [127, 127, 127]);
    }

    #[test]
    fn test_palette_is_composited() {
        let asset = ImageAsset::new(
            2,
            2,
            PixelBuffer::Indexed {
                indices: vec![0, 0, 0, 0],
                palette: vec![[0, 0, 255, 0]],
            },
        )
        .unwrap();
        let out = ImageNormalizer::default()
            .normalize(asset, SizeBound::default())
            .unwrap();

        assert_eq!(out.color_mode(), ColorMode::Truecolor);
        assert_eq!(pixel(&out, 0, 0), [255, 255, 255]);
    }

    #[test]
    fn test_grayscale_becomes_truecolor() {
        let asset = ImageAsset::new(3, 3, PixelBuffer::Luma8(vec![90; 9])).unwrap();
        let out = ImageNormalizer::default()
            .normalize(asset, SizeBound::default())
            .unwrap();

        assert_eq!(out.color_mode(), ColorMode::Truecolor);
        assert_eq!(pixel(&out, 1, 1), [90, 90, 90]);
    }

    #[test]
    fn test_oversized_image_is_downscaled_with_aspect_ratio() {
        let asset = ImageAsset::filled_rgb(2400, 1000, [10, 20, 30]).unwrap();
        let out = ImageNormalizer::default()
            .normalize(asset, SizeBound::default())
            .unwrap();

        assert_eq!(out.dimensions(), (1200, 500));
    }

    #[test]
    fn test_small_image_is_not_upscaled_but_is_sharpened() {
        let data: Vec<u8> = (0..10u32)
            .flat_map(|_| (0..10u32).flat_map(|x| if x < 5 { [60u8; 3] } else { [190u8; 3] }))
            .collect();
        let asset = ImageAsset::new(10, 10, PixelBuffer::Rgb8(data)).unwrap();

        let out = ImageNormalizer::default()
            .normalize(asset.clone(), SizeBound::default())
            .unwrap();

        assert_eq!(out.dimensions(), (10, 10));
        assert_ne!(out.pixels(), asset.pixels());
    }
}
