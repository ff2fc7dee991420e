use serde::{Deserialize, Serialize};

/// Upper bound for output dimensions. Images are never upscaled to meet it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeBound {
    pub max_width: u32,
    pub max_height: u32,
}

impl SizeBound {
    pub const fn new(max_width: u32, max_height: u32) -> Self {
        Self {
            max_width,
            max_height,
        }
    }

    pub fn contains(&self, width: u32, height: u32) -> bool {
        width <= self.max_width && height <= self.max_height
    }

    /// Largest size with the same aspect ratio that fits inside the bound.
    /// Returns the input unchanged when it already fits. A zero limit is
    /// treated as 1 so the result is never empty.
    pub fn fit(&self, width: u32, height: u32) -> (u32, u32) {
        let max_width = self.max_width.max(1);
        let max_height = self.max_height.max(1);
        if width <= max_width && height <= max_height {
            return (width, height);
        }

        let scale = (max_width as f64 / width as f64).min(max_height as f64 / height as f64);
        let target_width = ((width as f64 * scale).round() as u32).clamp(1, max_width);
        let target_height = ((height as f64 * scale).round() as u32).clamp(1, max_height);
        (target_width, target_height)
    }
}

impl Default for SizeBound {
    fn default() -> Self {
        Self::new(1200, 1200)
    }
}
