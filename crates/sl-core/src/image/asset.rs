//! Decoded bitmap value object.
//! 解码后的位图值对象。

use thiserror::Error;

/// Color mode of an [`ImageAsset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Truecolor,
    TruecolorAlpha,
    Grayscale,
    GrayscaleAlpha,
    Palette,
}

impl ColorMode {
    pub fn has_alpha(&self) -> bool {
        matches!(self, Self::TruecolorAlpha | Self::GrayscaleAlpha)
    }
}

/// 8-bit pixel storage, row-major, no padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBuffer {
    Rgb8(Vec<u8>),
    Rgba8(Vec<u8>),
    Luma8(Vec<u8>),
    LumaA8(Vec<u8>),
    /// One index byte per pixel into an RGBA palette.
    Indexed {
        indices: Vec<u8>,
        palette: Vec<[u8; 4]>,
    },
}

impl PixelBuffer {
    fn channels(&self) -> usize {
        match self {
            Self::Rgb8(_) => 3,
            Self::Rgba8(_) => 4,
            Self::Luma8(_) => 1,
            Self::LumaA8(_) => 2,
            Self::Indexed { .. } => 1,
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Rgb8(data) | Self::Rgba8(data) | Self::Luma8(data) | Self::LumaA8(data) => {
                data.len()
            }
            Self::Indexed { indices, .. } => indices.len(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageAssetError {
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    EmptyDimensions { width: u32, height: u32 },

    #[error("pixel buffer has {actual} bytes, expected {expected}")]
    BufferLength { expected: usize, actual: usize },

    #[error("palette index {index} out of range for palette of {palette_len} entries")]
    PaletteIndex { index: u8, palette_len: usize },
}

/// An in-memory decoded bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    width: u32,
    height: u32,
    pixels: PixelBuffer,
}

impl ImageAsset {
    pub fn new(width: u32, height: u32, pixels: PixelBuffer) -> Result<Self, ImageAssetError> {
        if width == 0 || height == 0 {
            return Err(ImageAssetError::EmptyDimensions { width, height });
        }

        let expected = width as usize * height as usize * pixels.channels();
        if pixels.len() != expected {
            return Err(ImageAssetError::BufferLength {
                expected,
                actual: pixels.len(),
            });
        }

        if let PixelBuffer::Indexed { indices, palette } = &pixels {
            if let Some(&index) = indices.iter().find(|&&i| i as usize >= palette.len()) {
                return Err(ImageAssetError::PaletteIndex {
                    index,
                    palette_len: palette.len(),
                });
            }
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Uniform truecolor canvas.
    pub fn filled_rgb(width: u32, height: u32, rgb: [u8; 3]) -> Result<Self, ImageAssetError> {
        let data = rgb
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 3)
            .collect();
        Self::new(width, height, PixelBuffer::Rgb8(data))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn color_mode(&self) -> ColorMode {
        match self.pixels {
            PixelBuffer::Rgb8(_) => ColorMode::Truecolor,
            PixelBuffer::Rgba8(_) => ColorMode::TruecolorAlpha,
            PixelBuffer::Luma8(_) => ColorMode::Grayscale,
            PixelBuffer::LumaA8(_) => ColorMode::GrayscaleAlpha,
            PixelBuffer::Indexed { .. } => ColorMode::Palette,
        }
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn into_pixels(self) -> PixelBuffer {
        self.pixels
    }

    /// Promote a palette image to truecolor+alpha using its RGBA palette.
    /// Other modes are returned unchanged.
    pub fn expand_palette(self) -> Self {
        match self.pixels {
            PixelBuffer::Indexed { indices, palette } => {
                let data = indices
                    .iter()
                    .flat_map(|&i| palette[i as usize])
                    .collect();
                Self {
                    width: self.width,
                    height: self.height,
                    pixels: PixelBuffer::Rgba8(data),
                }
            }
            pixels => Self {
                width: self.width,
                height: self.height,
                pixels,
            },
        }
    }
}
