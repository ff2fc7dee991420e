//! # Dependency Injection / 依赖注入模块
//!
//! The only place that depends on `sl-infra` and `sl-app` together. It
//! turns an [`ImagingConfig`] into ready-to-run use cases and makes no
//! decisions beyond assembly.

use std::sync::Arc;

use sl_app::usecases::imaging::{
    ExtractGeneratedImageUseCase, ExtractionSettings, PlaceholderSettings,
    ProduceCampaignImageUseCase, RenderPlaceholderUseCase,
};
use sl_core::ports::ProgressReporterPort;
use sl_infra::fs::FsArtifactWriter;
use sl_infra::http::{DisabledProgressReporter, HttpProgressReporter};
use sl_infra::imaging::{ImageCodec, ImageNormalizer};
use sl_infra::placeholder::GradientPlaceholderCanvas;
use sl_infra::{ImagingConfig, SystemClock};

pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Progress reporter initialization failed: {0}")]
    ProgressReporterInit(String),
}

pub struct ImagingUseCases {
    pub extract: Arc<ExtractGeneratedImageUseCase>,
    pub placeholder: Arc<RenderPlaceholderUseCase>,
    pub produce: ProduceCampaignImageUseCase,
}

fn create_progress_reporter(
    config: &ImagingConfig,
) -> WiringResult<Arc<dyn ProgressReporterPort>> {
    let base_url = config.progress.base_url.trim();
    if base_url.is_empty() {
        return Ok(Arc::new(DisabledProgressReporter));
    }
    let reporter = HttpProgressReporter::new(base_url, config.progress_timeout())
        .map_err(|e| WiringError::ProgressReporterInit(format!("{e:#}")))?;
    Ok(Arc::new(reporter))
}

pub fn wire_use_cases(config: &ImagingConfig) -> WiringResult<ImagingUseCases> {
    let codec = Arc::new(ImageCodec::new());
    let writer = Arc::new(FsArtifactWriter::new());

    let extract = Arc::new(ExtractGeneratedImageUseCase::new(
        codec.clone(),
        Arc::new(ImageNormalizer::new(config.unsharp_mask())),
        codec.clone(),
        writer.clone(),
        ExtractionSettings {
            bound: config.size_bound(),
            web_format: config.webp_format(),
        },
    ));

    let placeholder = Arc::new(RenderPlaceholderUseCase::new(
        Arc::new(GradientPlaceholderCanvas::new()),
        codec,
        writer,
        Arc::new(SystemClock),
        PlaceholderSettings {
            canvas_size: config.placeholder.canvas_size,
            branding: config.branding(),
        },
    ));

    let produce = ProduceCampaignImageUseCase::new(
        extract.clone(),
        placeholder.clone(),
        create_progress_reporter(config)?,
    );

    Ok(ImagingUseCases {
        extract,
        placeholder,
        produce,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sl_core::ids::CampaignId;
    use tempfile::TempDir;

    #[test]
    fn test_wire_with_defaults() {
        let use_cases = wire_use_cases(&ImagingConfig::defaults()).unwrap();
        let dir = TempDir::new().unwrap();

        let filename = use_cases
            .placeholder
            .execute(&CampaignId::from("wired"), dir.path(), "");

        assert!(filename.starts_with("enhanced_placeholder_wired_"));
        assert!(dir.path().join(&filename).is_file());
    }

    #[test]
    fn test_wire_with_progress_endpoint() {
        let mut config = ImagingConfig::defaults();
        config.progress.base_url = "http://127.0.0.1:9".to_string();
        assert!(wire_use_cases(&config).is_ok());
    }

    #[test]
    fn test_placeholder_canvas_size_comes_from_config() {
        let mut config = ImagingConfig::defaults();
        config.placeholder.canvas_size = 256;
        let use_cases = wire_use_cases(&config).unwrap();
        let dir = TempDir::new().unwrap();

        let filename = use_cases
            .placeholder
            .execute(&CampaignId::from("small"), dir.path(), "");

        let img = image::open(dir.path().join(filename)).unwrap();
        assert_eq!((img.width(), img.height()), (256, 256));
    }
}
