use anyhow::Result;

use crate::image::ImageAsset;
use crate::placeholder::PlaceholderLayout;

/// Draws the placeholder background and text for a given layout.
pub trait PlaceholderCanvasPort: Send + Sync {
    fn render(&self, layout: &PlaceholderLayout) -> Result<ImageAsset>;
}
