use image::{imageops, RgbImage};

/// Unsharp mask: `out = in + (in - blur(in)) * amount` wherever the
/// difference reaches `threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnsharpMask {
    /// Gaussian sigma of the blur, in pixels.
    pub radius: f32,
    pub amount_percent: u32,
    pub threshold: u8,
}

impl UnsharpMask {
    pub fn apply(&self, image: &RgbImage) -> RgbImage {
        let blurred = imageops::blur(image, self.radius);
        let threshold = i64::from(self.threshold);
        let amount = i64::from(self.amount_percent);

        let mut sharpened = image.clone();
        for (out, (src, blur)) in sharpened
            .pixels_mut()
            .zip(image.pixels().zip(blurred.pixels()))
        {
            for channel in 0..3 {
                out[channel] = sharpen_channel(src[channel], blur[channel], amount, threshold);
            }
        }
        sharpened
    }
}

// i64 keeps `diff * amount` exact for any u32 amount
fn sharpen_channel(original: u8, blurred: u8, amount: i64, threshold: i64) -> u8 {
    let original = i64::from(original);
    let diff = original - i64::from(blurred);
    if diff.abs() < threshold {
        return original as u8;
    }
    (original + diff * amount / 100).clamp(0, 255) as u8
}

impl Default for UnsharpMask {
    fn default() -> Self {
        Self {
            radius: 0.5,
            amount_percent: 150,
            threshold: 3,
        }
    }
}
