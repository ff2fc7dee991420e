//! Branded fallback image for campaigns without a generated asset.
//! 无生成图片时的品牌占位图。

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};

use sl_core::artifact::ArtifactName;
use sl_core::ids::CampaignId;
use sl_core::image::EncodeFormat;
use sl_core::placeholder::{
    local_timestamp, placeholder_lines, PlaceholderBranding, PlaceholderLayout,
};
use sl_core::ports::{ArtifactWriterPort, ClockPort, ImageEncoderPort, PlaceholderCanvasPort};

pub const DEFAULT_CANVAS_SIZE: u32 = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderSettings {
    pub canvas_size: u32,
    pub branding: PlaceholderBranding,
}

impl Default for PlaceholderSettings {
    fn default() -> Self {
        Self {
            canvas_size: DEFAULT_CANVAS_SIZE,
            branding: PlaceholderBranding::default(),
        }
    }
}

/// Render, encode and write the placeholder PNG.
/// 渲染、编码并写入占位图 PNG。
pub struct RenderPlaceholderUseCase {
    canvas: Arc<dyn PlaceholderCanvasPort>,
    encoder: Arc<dyn ImageEncoderPort>,
    writer: Arc<dyn ArtifactWriterPort>,
    clock: Arc<dyn ClockPort>,
    settings: PlaceholderSettings,
}

impl RenderPlaceholderUseCase {
    pub fn new(
        canvas: Arc<dyn PlaceholderCanvasPort>,
        encoder: Arc<dyn ImageEncoderPort>,
        writer: Arc<dyn ArtifactWriterPort>,
        clock: Arc<dyn ClockPort>,
        settings: PlaceholderSettings,
    ) -> Self {
        Self {
            canvas,
            encoder,
            writer,
            clock,
            settings,
        }
    }

    /// Returns the bare filename, or an empty string if anything failed.
    /// This is the last fallback, so errors are logged and never returned.
    #[tracing::instrument(
        name = "usecase.imaging.render_placeholder.execute",
        skip_all,
        fields(campaign_id = %campaign_id)
    )]
    pub fn execute(&self, campaign_id: &CampaignId, output_dir: &Path, prompt: &str) -> String {
        match self.render_and_write(campaign_id, output_dir, prompt) {
            Ok(name) => {
                info!(filename = %name, "Created enhanced placeholder");
                name.into_inner()
            }
            Err(err) => {
                error!(error = %format!("{err:#}"), "Failed to create placeholder");
                String::new()
            }
        }
    }

    fn render_and_write(
        &self,
        campaign_id: &CampaignId,
        output_dir: &Path,
        prompt: &str,
    ) -> Result<ArtifactName> {
        let generated_at = local_timestamp(self.clock.now_ms());
        let lines = placeholder_lines(&self.settings.branding, campaign_id, prompt, generated_at);
        let size = self.settings.canvas_size;
        let layout = PlaceholderLayout::new(size, size, &lines);

        let canvas = self
            .canvas
            .render(&layout)
            .context("render placeholder canvas")?;
        let bytes = self
            .encoder
            .encode(&canvas, EncodeFormat::Png)
            .context("encode placeholder as png")?;

        let name = ArtifactName::placeholder(campaign_id);
        self.writer
            .write(output_dir, name.as_str(), &bytes)
            .with_context(|| format!("write placeholder {name}"))?;
        Ok(name)
    }
}
