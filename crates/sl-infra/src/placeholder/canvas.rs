//! Branded gradient canvas for the placeholder fallback
//! 占位图渐变画布

use anyhow::Result;
use image::{DynamicImage, Rgb, RgbImage};
use sl_core::image::ImageAsset;
use sl_core::placeholder::PlaceholderLayout;
use sl_core::ports::PlaceholderCanvasPort;

use super::glyphs::{draw_text, text_width};
use crate::imaging::from_dynamic;

const SHADOW_OFFSET_PX: u32 = 2;
const SHADOW_COLOR: Rgb<u8> = Rgb([0xcc, 0xcc, 0xcc]);
const TEXT_COLOR: Rgb<u8> = Rgb([0x33, 0x33, 0x33]);
const GLYPH_SCALE: u32 = 2;

/// Vertical gradient from `(240, 248, 255)` at the top toward
/// `(255, 255, 255)`, one color per scanline.
pub(crate) fn gradient_color(y: u32, height: u32) -> Rgb<u8> {
    let red = 240 + (y * 15 / height.max(1)).min(15);
    let green = (red + 8).min(255);
    Rgb([red as u8, green as u8, 255])
}

#[derive(Debug, Default, Clone, Copy)]
pub struct GradientPlaceholderCanvas;

impl GradientPlaceholderCanvas {
    pub fn new() -> Self {
        Self
    }
}

impl PlaceholderCanvasPort for GradientPlaceholderCanvas {
    fn render(&self, layout: &PlaceholderLayout) -> Result<ImageAsset> {
        let mut canvas = RgbImage::from_fn(layout.width, layout.height, |_, y| {
            gradient_color(y, layout.height)
        });

        for line in &layout.lines {
            let width = text_width(&line.text, GLYPH_SCALE);
            let x = layout.width.saturating_sub(width) / 2;

            draw_text(
                &mut canvas,
                x + SHADOW_OFFSET_PX,
                line.y + SHADOW_OFFSET_PX,
                &line.text,
                SHADOW_COLOR,
                GLYPH_SCALE,
            );
            draw_text(&mut canvas, x, line.y, &line.text, TEXT_COLOR, GLYPH_SCALE);
        }

        from_dynamic(DynamicImage::ImageRgb8(canvas))
    }
}
