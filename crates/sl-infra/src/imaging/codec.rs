use anyhow::{anyhow, Context, Result};
use sl_core::image::{EncodeFormat, ImageAsset, PixelBuffer};
use sl_core::ports::{ImageDecoderPort, ImageEncoderPort};

use super::convert::{from_dynamic, to_dynamic};

/// Decoder for inline payloads and encoder for the two artifact formats.
///
/// - PNG: `png` crate, default (mid-range) compression, every color mode.
/// - WebP: lossy via libwebp; non-truecolor input is expanded to RGBA first.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageCodec;

impl ImageCodec {
    pub fn new() -> Self {
        Self
    }
}

impl ImageDecoderPort for ImageCodec {
    fn decode(&self, bytes: &[u8]) -> Result<ImageAsset> {
        let decoded = image::load_from_memory(bytes).context("decode inline image bytes")?;
        from_dynamic(decoded)
    }
}

impl ImageEncoderPort for ImageCodec {
    fn encode(&self, asset: &ImageAsset, format: EncodeFormat) -> Result<Vec<u8>> {
        match format {
            EncodeFormat::Png => encode_png(asset),
            EncodeFormat::WebpLossy { quality } => encode_webp_lossy(asset, quality),
        }
    }
}

fn encode_png(asset: &ImageAsset) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut bytes, asset.width(), asset.height());
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Default);

        let data: &[u8] = match asset.pixels() {
            PixelBuffer::Rgb8(data) => {
                encoder.set_color(png::ColorType::Rgb);
                data
            }
            PixelBuffer::Rgba8(data) => {
                encoder.set_color(png::ColorType::Rgba);
                data
            }
            PixelBuffer::Luma8(data) => {
                encoder.set_color(png::ColorType::Grayscale);
                data
            }
            PixelBuffer::LumaA8(data) => {
                encoder.set_color(png::ColorType::GrayscaleAlpha);
                data
            }
            PixelBuffer::Indexed { indices, palette } => {
                encoder.set_color(png::ColorType::Indexed);
                encoder.set_palette(
                    palette
                        .iter()
                        .flat_map(|entry| [entry[0], entry[1], entry[2]])
                        .collect::<Vec<u8>>(),
                );
                encoder.set_trns(palette.iter().map(|entry| entry[3]).collect::<Vec<u8>>());
                indices
            }
        };

        let mut writer = encoder.write_header().context("write png header")?;
        writer
            .write_image_data(data)
            .context("write png image data")?;
        writer.finish().context("finish png stream")?;
    }
    Ok(bytes)
}

fn encode_webp_lossy(asset: &ImageAsset, quality: f32) -> Result<Vec<u8>> {
    let (width, height) = asset.dimensions();
    let quality = quality.clamp(0.0, 100.0);

    let memory = match asset.pixels() {
        PixelBuffer::Rgb8(data) => {
            webp::Encoder::from_rgb(data, width, height).encode_simple(false, quality)
        }
        PixelBuffer::Rgba8(data) => {
            webp::Encoder::from_rgba(data, width, height).encode_simple(false, quality)
        }
        _ => {
            let rgba = to_dynamic(asset.clone())?.into_rgba8();
            let encoded =
                webp::Encoder::from_rgba(rgba.as_raw(), width, height).encode_simple(false, quality);
            encoded
        }
    }
    .map_err(|err| anyhow!("webp encoding failed: {err:?}"))?;

    Ok(memory.to_vec())
}
