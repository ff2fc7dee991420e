//! Pull the first inline image out of a generation response and persist it.
//! 从生成响应中提取第一张内联图片并保存。

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use sl_core::artifact::{ArtifactName, SavedArtifact};
use sl_core::generation::{
    GenerationResponse, InlineImageData, PartsAvailability, ResponsePart,
};
use sl_core::ids::CampaignId;
use sl_core::image::{EncodeFormat, SizeBound};
use sl_core::placeholder::prompt_preview;
use sl_core::ports::{
    ArtifactWriterPort, ImageDecoderPort, ImageEncoderPort, ImageNormalizerPort,
};

use super::outcome::{ExtractionFailure, ExtractionOutcome, NoImageReason};

const TEXT_PREVIEW_CHARS: usize = 100;
pub const DEFAULT_WEBP_QUALITY: f32 = 85.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractionSettings {
    pub bound: SizeBound,
    pub web_format: EncodeFormat,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            bound: SizeBound::default(),
            web_format: EncodeFormat::WebpLossy {
                quality: DEFAULT_WEBP_QUALITY,
            },
        }
    }
}

/// Extract and persist the generated image of a campaign.
/// 提取并保存活动的生成图片。
///
/// Only the first inline image part of the first candidate is persisted.
/// Any later image parts are ignored. The normalized bitmap is written twice:
/// a lossless PNG byproduct first, then the web copy whose name is returned.
/// Both names carry their own random token.
pub struct ExtractGeneratedImageUseCase {
    decoder: Arc<dyn ImageDecoderPort>,
    normalizer: Arc<dyn ImageNormalizerPort>,
    encoder: Arc<dyn ImageEncoderPort>,
    writer: Arc<dyn ArtifactWriterPort>,
    settings: ExtractionSettings,
}

impl ExtractGeneratedImageUseCase {
    pub fn new(
        decoder: Arc<dyn ImageDecoderPort>,
        normalizer: Arc<dyn ImageNormalizerPort>,
        encoder: Arc<dyn ImageEncoderPort>,
        writer: Arc<dyn ArtifactWriterPort>,
        settings: ExtractionSettings,
    ) -> Self {
        Self {
            decoder,
            normalizer,
            encoder,
            writer,
            settings,
        }
    }

    /// Never fails: every problem is logged and folded into the outcome.
    #[tracing::instrument(
        name = "usecase.imaging.extract_generated_image.execute",
        skip_all,
        fields(campaign_id = %campaign_id)
    )]
    pub fn execute(
        &self,
        response: &GenerationResponse,
        campaign_id: &CampaignId,
        output_dir: &Path,
        prompt: &str,
    ) -> ExtractionOutcome {
        let parts = match response.first_candidate_parts() {
            PartsAvailability::NoCandidates => {
                warn!("No candidates in generation response");
                return ExtractionOutcome::NoImage(NoImageReason::NoCandidates);
            }
            PartsAvailability::NoParts => {
                warn!("First candidate has no content parts");
                return ExtractionOutcome::NoImage(NoImageReason::NoParts);
            }
            PartsAvailability::Parts(parts) => parts,
        };

        debug!(
            parts = parts.len(),
            prompt = %prompt_preview(prompt),
            "Scanning generation response"
        );

        for part in parts {
            match part {
                ResponsePart::Text { text } => {
                    info!(preview = %text_preview(text), "Generation returned text");
                }
                ResponsePart::InlineData { inline_data } => {
                    info!(
                        mime_type = %inline_data.mime_type,
                        encoded_size = inline_data.data.len(),
                        "Found inline image data"
                    );
                    // the first image part ends the scan even when its payload is bad
                    return match self.persist(inline_data, campaign_id, output_dir) {
                        Ok(saved) => ExtractionOutcome::Saved(saved),
                        Err(failure) => {
                            error!(error = %failure, "Error processing generated image");
                            ExtractionOutcome::Failed(failure)
                        }
                    };
                }
                ResponsePart::Other(_) => {
                    debug!("Skipping unrecognized response part");
                }
            }
        }

        warn!("No image data found in generation response");
        ExtractionOutcome::NoImage(NoImageReason::NoImagePart)
    }

    fn persist(
        &self,
        inline_data: &InlineImageData,
        campaign_id: &CampaignId,
        output_dir: &Path,
    ) -> Result<SavedArtifact, ExtractionFailure> {
        let bytes = inline_data
            .decode_data()
            .map_err(|e| ExtractionFailure::Decode(format!("invalid base64 payload: {e}")))?;
        let decoded = self
            .decoder
            .decode(&bytes)
            .map_err(|e| ExtractionFailure::Decode(format!("{e:#}")))?;
        let normalized = self
            .normalizer
            .normalize(decoded, self.settings.bound)
            .map_err(|e| ExtractionFailure::Normalize(format!("{e:#}")))?;
        let (width, height) = normalized.dimensions();

        let lossless = ArtifactName::generated(campaign_id, EncodeFormat::Png);
        let lossless_bytes = self
            .encoder
            .encode(&normalized, EncodeFormat::Png)
            .map_err(|e| ExtractionFailure::Encode(format!("{e:#}")))?;
        self.writer
            .write(output_dir, lossless.as_str(), &lossless_bytes)
            .map_err(|e| ExtractionFailure::Write(format!("{e:#}")))?;

        // the PNG stays on disk if anything below fails
        let web = ArtifactName::generated(campaign_id, self.settings.web_format);
        let web_bytes = self
            .encoder
            .encode(&normalized, self.settings.web_format)
            .map_err(|e| ExtractionFailure::Encode(format!("{e:#}")))?;
        self.writer
            .write(output_dir, web.as_str(), &web_bytes)
            .map_err(|e| ExtractionFailure::Write(format!("{e:#}")))?;

        info!(
            filename = %web,
            width,
            height,
            original_size = bytes.len(),
            lossless_size = lossless_bytes.len(),
            web_size = web_bytes.len(),
            "Saved generated image"
        );

        Ok(SavedArtifact {
            web,
            lossless,
            width,
            height,
            original_size_bytes: bytes.len(),
            web_size_bytes: web_bytes.len(),
            lossless_size_bytes: lossless_bytes.len(),
        })
    }
}

fn text_preview(text: &str) -> String {
    text.chars().take(TEXT_PREVIEW_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::imaging::test_support::*;
    use std::path::PathBuf;

    fn use_case(
        decoder: MockDecoder,
        normalizer: MockNormalizer,
        encoder: MockEncoder,
        writer: MockWriter,
    ) -> ExtractGeneratedImageUseCase {
        ExtractGeneratedImageUseCase::new(
            Arc::new(decoder),
            Arc::new(normalizer),
            Arc::new(encoder),
            Arc::new(writer),
            ExtractionSettings::default(),
        )
    }

    fn untouched() -> ExtractGeneratedImageUseCase {
        let mut decoder = MockDecoder::new();
        decoder.expect_decode().never();
        let mut writer = MockWriter::new();
        writer.expect_write().never();
        use_case(decoder, MockNormalizer::new(), MockEncoder::new(), writer)
    }

    fn run(uc: &ExtractGeneratedImageUseCase, response: &GenerationResponse) -> ExtractionOutcome {
        uc.execute(
            response,
            &CampaignId::from("cmp"),
            Path::new("/tmp/out"),
            "a prompt",
        )
    }

    #[test]
    fn test_no_candidates() {
        let outcome = run(&untouched(), &GenerationResponse::default());
        assert_eq!(outcome, ExtractionOutcome::NoImage(NoImageReason::NoCandidates));
    }

    #[test]
    fn test_no_parts() {
        let outcome = run(&untouched(), &GenerationResponse::from_parts(vec![]));
        assert_eq!(outcome, ExtractionOutcome::NoImage(NoImageReason::NoParts));
    }

    #[test]
    fn test_text_only_response_has_no_image() {
        let response = GenerationResponse::from_parts(vec![
            ResponsePart::text("here is your campaign copy"),
            ResponsePart::Other(serde_json::json!({"thought": true})),
        ]);
        let outcome = run(&untouched(), &response);
        assert_eq!(outcome, ExtractionOutcome::NoImage(NoImageReason::NoImagePart));
    }

    #[test]
    fn test_text_before_image_does_not_stop_scan() {
        let response = GenerationResponse::from_parts(vec![
            ResponsePart::text("caption"),
            ResponsePart::inline_image("image/png", vec![1, 2, 3]),
        ]);
        let uc = use_case(
            decoder_returning_small_asset(),
            passthrough_normalizer(),
            fixed_size_encoder(),
            accepting_writer(),
        );

        let ExtractionOutcome::Saved(saved) = run(&uc, &response) else {
            panic!("expected saved artifact");
        };
        assert!(saved.filename().starts_with("campaign_cmp_"));
        assert!(saved.filename().ends_with(".webp"));
        assert!(saved.lossless.as_str().ends_with(".png"));
        assert_eq!((saved.width, saved.height), (4, 3));
        assert_eq!(saved.original_size_bytes, 3);
        assert_eq!(saved.lossless_size_bytes, 7);
        assert_eq!(saved.web_size_bytes, 5);
    }

    #[test]
    fn test_first_image_part_wins() {
        let response = GenerationResponse::from_parts(vec![
            ResponsePart::inline_image("image/png", vec![1]),
            ResponsePart::inline_image("image/png", vec![2]),
        ]);
        let mut decoder = MockDecoder::new();
        decoder
            .expect_decode()
            .withf(|bytes| bytes == [1])
            .times(1)
            .returning(|_| Ok(small_asset()));
        let mut writer = MockWriter::new();
        writer
            .expect_write()
            .times(2)
            .returning(|dir, name, _| Ok(dir.join(name)));

        let uc = use_case(decoder, passthrough_normalizer(), fixed_size_encoder(), writer);
        assert!(run(&uc, &response).is_saved());
    }

    #[test]
    fn test_malformed_base64_fails_without_trying_later_parts() {
        let response = GenerationResponse::from_parts(vec![
            ResponsePart::InlineData {
                inline_data: InlineImageData {
                    mime_type: "image/png".to_string(),
                    data: "!!!not-base64!!!".to_string(),
                },
            },
            ResponsePart::inline_image("image/png", vec![1, 2, 3]),
        ]);

        let outcome = run(&untouched(), &response);

        assert!(matches!(
            outcome,
            ExtractionOutcome::Failed(ExtractionFailure::Decode(ref reason)) if reason.contains("base64")
        ));
        assert_eq!(outcome.into_filename(), None);
    }

    #[test]
    fn test_normalizer_receives_configured_bound() {
        let response =
            GenerationResponse::from_parts(vec![ResponsePart::inline_image("image/png", vec![9])]);
        let mut normalizer = MockNormalizer::new();
        normalizer
            .expect_normalize()
            .withf(|_, bound| *bound == SizeBound::new(1200, 1200))
            .times(1)
            .returning(|asset, _| Ok(asset));

        let uc = use_case(
            decoder_returning_small_asset(),
            normalizer,
            fixed_size_encoder(),
            accepting_writer(),
        );
        assert!(run(&uc, &response).is_saved());
    }

    #[test]
    fn test_decode_failure_writes_nothing() {
        let response =
            GenerationResponse::from_parts(vec![ResponsePart::inline_image("image/png", vec![0])]);
        let mut decoder = MockDecoder::new();
        decoder
            .expect_decode()
            .returning(|_| Err(anyhow::anyhow!("not an image")));
        let mut writer = MockWriter::new();
        writer.expect_write().never();

        let uc = use_case(decoder, MockNormalizer::new(), MockEncoder::new(), writer);
        let outcome = run(&uc, &response);

        assert!(matches!(
            outcome,
            ExtractionOutcome::Failed(ExtractionFailure::Decode(ref reason)) if reason.contains("not an image")
        ));
        assert_eq!(outcome.into_filename(), None);
    }

    #[test]
    fn test_web_write_failure_keeps_png_and_returns_no_filename() {
        let response =
            GenerationResponse::from_parts(vec![ResponsePart::inline_image("image/png", vec![0])]);
        let mut writer = MockWriter::new();
        writer
            .expect_write()
            .withf(|_, name, _| name.ends_with(".png"))
            .times(1)
            .returning(|dir, name, _| Ok(dir.join(name)));
        writer
            .expect_write()
            .withf(|_, name, _| name.ends_with(".webp"))
            .times(1)
            .returning(|_, _, _| Err(anyhow::anyhow!("disk full")));

        let uc = use_case(
            decoder_returning_small_asset(),
            passthrough_normalizer(),
            fixed_size_encoder(),
            writer,
        );
        let outcome = run(&uc, &response);

        assert!(matches!(
            outcome,
            ExtractionOutcome::Failed(ExtractionFailure::Write(_))
        ));
    }

    #[test]
    fn test_encode_failure_is_reported() {
        let response =
            GenerationResponse::from_parts(vec![ResponsePart::inline_image("image/png", vec![0])]);
        let mut encoder = MockEncoder::new();
        encoder
            .expect_encode()
            .returning(|_, _| Err(anyhow::anyhow!("encoder exploded")));
        let mut writer = MockWriter::new();
        writer.expect_write().never();

        let uc = use_case(
            decoder_returning_small_asset(),
            passthrough_normalizer(),
            encoder,
            writer,
        );
        assert!(matches!(
            run(&uc, &response),
            ExtractionOutcome::Failed(ExtractionFailure::Encode(_))
        ));
    }

    #[test]
    fn test_files_go_to_requested_directory() {
        let response =
            GenerationResponse::from_parts(vec![ResponsePart::inline_image("image/png", vec![0])]);
        let mut writer = MockWriter::new();
        writer
            .expect_write()
            .withf(|dir, _, _| dir == Path::new("/tmp/out"))
            .times(2)
            .returning(|dir, name, _| Ok(PathBuf::from(dir).join(name)));

        let uc = use_case(
            decoder_returning_small_asset(),
            passthrough_normalizer(),
            fixed_size_encoder(),
            writer,
        );
        assert!(run(&uc, &response).is_saved());
    }

    #[test]
    fn test_text_preview_is_capped() {
        let long = "x".repeat(250);
        assert_eq!(text_preview(&long).chars().count(), TEXT_PREVIEW_CHARS);
        assert_eq!(text_preview("short"), "short");
    }
}
