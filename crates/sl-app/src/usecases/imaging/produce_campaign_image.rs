//! Extract-or-fallback orchestration with progress notifications.
//! 提取或回退到占位图，并上报进度。

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use sl_core::generation::GenerationResponse;
use sl_core::ids::CampaignId;
use sl_core::ports::ProgressReporterPort;
use sl_core::progress::{CampaignStatus, CampaignStep, ProgressUpdate};

use super::extract_generated_image::ExtractGeneratedImageUseCase;
use super::outcome::CampaignImage;
use super::render_placeholder::RenderPlaceholderUseCase;

/// Produces the image a campaign ends up with. Always yields a
/// [`CampaignImage`]; the generated asset is preferred and the branded
/// placeholder is the fallback.
///
/// Progress is reported before extraction (`generating_image`) and after the
/// image is settled (`finalizing`). A rejected update is logged and does not
/// affect the result.
pub struct ProduceCampaignImageUseCase {
    extract: Arc<ExtractGeneratedImageUseCase>,
    placeholder: Arc<RenderPlaceholderUseCase>,
    progress: Arc<dyn ProgressReporterPort>,
}

impl ProduceCampaignImageUseCase {
    pub fn new(
        extract: Arc<ExtractGeneratedImageUseCase>,
        placeholder: Arc<RenderPlaceholderUseCase>,
        progress: Arc<dyn ProgressReporterPort>,
    ) -> Self {
        Self {
            extract,
            placeholder,
            progress,
        }
    }

    #[tracing::instrument(
        name = "usecase.imaging.produce_campaign_image.execute",
        skip_all,
        fields(campaign_id = %campaign_id)
    )]
    pub async fn execute(
        &self,
        response: &GenerationResponse,
        campaign_id: &CampaignId,
        output_dir: &Path,
        prompt: &str,
    ) -> CampaignImage {
        self.report(campaign_id, CampaignStep::GeneratingImage).await;

        let image = match self
            .extract
            .execute(response, campaign_id, output_dir, prompt)
            .into_filename()
        {
            Some(filename) => CampaignImage::generated(filename),
            None => {
                info!("No generated image, falling back to placeholder");
                let image = CampaignImage::from_placeholder(
                    self.placeholder.execute(campaign_id, output_dir, prompt),
                );
                if !image.is_available() {
                    warn!("Campaign finished without an image");
                }
                image
            }
        };

        self.report(campaign_id, CampaignStep::Finalizing).await;
        image
    }

    async fn report(&self, campaign_id: &CampaignId, step: CampaignStep) {
        let update = ProgressUpdate::at_step(CampaignStatus::Processing, step);
        if !self.progress.report(campaign_id, &update).await {
            debug!(step = ?step, "Progress update not accepted, continuing");
        }
    }
}
