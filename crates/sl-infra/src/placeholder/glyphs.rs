//! 8x8 bitmap text drawing.

use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgb, RgbImage};

const GLYPH_SIZE: u32 = 8;
const FALLBACK_CHAR: char = '?';

/// Rows top to bottom, bit 0 is the leftmost pixel.
fn glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| BASIC_FONTS.get(FALLBACK_CHAR))
        .unwrap_or([0; 8])
}

/// Rendered width of `text` in pixels at the given scale.
pub(crate) fn text_width(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * GLYPH_SIZE * scale
}

/// Draw `text` with its top-left corner at `(x, y)`. Pixels outside the
/// canvas are clipped.
pub(crate) fn draw_text(canvas: &mut RgbImage, x: u32, y: u32, text: &str, color: Rgb<u8>, scale: u32) {
    let advance = GLYPH_SIZE * scale;
    for (index, c) in text.chars().enumerate() {
        let origin_x = x + index as u32 * advance;
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_SIZE {
                if bits & (1 << col) == 0 {
                    continue;
                }
                let px = origin_x + col * scale;
                let py = y + row as u32 * scale;
                fill_block(canvas, px, py, scale, color);
            }
        }
    }
}

fn fill_block(canvas: &mut RgbImage, x: u32, y: u32, size: u32, color: Rgb<u8>) {
    for dy in 0..size {
        for dx in 0..size {
            let (px, py) = (x + dx, y + dy);
            if px < canvas.width() && py < canvas.height() {
                canvas.put_pixel(px, py, color);
            }
        }
    }
}
