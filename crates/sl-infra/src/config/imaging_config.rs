use serde::Deserialize;
use sl_core::image::{EncodeFormat, SizeBound};
use sl_core::placeholder::PlaceholderBranding;
use std::time::Duration;

use crate::imaging::UnsharpMask;

/// Imaging pipeline settings. Every field falls back to [`ImagingConfig::defaults`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImagingConfig {
    pub imaging: ImagingSection,
    pub placeholder: PlaceholderSection,
    pub progress: ProgressSection,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImagingSection {
    pub max_width: u32,
    pub max_height: u32,
    /// 0.0 - 100.0
    pub webp_quality: f32,
    pub sharpen_radius: f32,
    pub sharpen_amount_percent: u32,
    pub sharpen_threshold: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlaceholderSection {
    /// Square canvas edge in pixels.
    pub canvas_size: u32,
    pub brand_label: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProgressSection {
    /// Empty disables progress reporting.
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ImagingConfig {
    /// v1 默认值
    pub fn defaults() -> Self {
        Self {
            imaging: ImagingSection::default(),
            placeholder: PlaceholderSection::default(),
            progress: ProgressSection::default(),
        }
    }

    pub fn size_bound(&self) -> SizeBound {
        SizeBound::new(self.imaging.max_width, self.imaging.max_height)
    }

    pub fn webp_format(&self) -> EncodeFormat {
        EncodeFormat::WebpLossy {
            quality: self.imaging.webp_quality,
        }
    }

    pub fn unsharp_mask(&self) -> UnsharpMask {
        UnsharpMask {
            radius: self.imaging.sharpen_radius,
            amount_percent: self.imaging.sharpen_amount_percent,
            threshold: self.imaging.sharpen_threshold,
        }
    }

    pub fn branding(&self) -> PlaceholderBranding {
        PlaceholderBranding {
            label: self.placeholder.brand_label.clone(),
            subtitle: self.placeholder.subtitle.clone(),
        }
    }

    pub fn progress_timeout(&self) -> Duration {
        Duration::from_secs(self.progress.timeout_secs)
    }
}

impl Default for ImagingConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Default for ImagingSection {
    fn default() -> Self {
        let sharpen = UnsharpMask::default();
        Self {
            max_width: 1200,
            max_height: 1200,
            webp_quality: 85.0,
            sharpen_radius: sharpen.radius,
            sharpen_amount_percent: sharpen.amount_percent,
            sharpen_threshold: sharpen.threshold,
        }
    }
}

impl Default for PlaceholderSection {
    fn default() -> Self {
        let branding = PlaceholderBranding::default();
        Self {
            canvas_size: 1024,
            brand_label: branding.label,
            subtitle: branding.subtitle,
        }
    }
}

impl Default for ProgressSection {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: 10,
        }
    }
}
