//! Port mocks shared by the imaging use case tests.

use std::path::{Path, PathBuf};

use sl_core::ids::CampaignId;
use sl_core::image::{EncodeFormat, ImageAsset, SizeBound};
use sl_core::placeholder::PlaceholderLayout;
use sl_core::ports::{
    ArtifactWriterPort, ClockPort, ImageDecoderPort, ImageEncoderPort, ImageNormalizerPort,
    PlaceholderCanvasPort, ProgressReporterPort,
};
use sl_core::progress::ProgressUpdate;

mockall::mock! {
    pub Decoder {}
    impl ImageDecoderPort for Decoder {
        fn decode(&self, bytes: &[u8]) -> anyhow::Result<ImageAsset>;
    }
}

mockall::mock! {
    pub Normalizer {}
    impl ImageNormalizerPort for Normalizer {
        fn normalize(&self, asset: ImageAsset, bound: SizeBound) -> anyhow::Result<ImageAsset>;
    }
}

mockall::mock! {
    pub Encoder {}
    impl ImageEncoderPort for Encoder {
        fn encode(&self, asset: &ImageAsset, format: EncodeFormat) -> anyhow::Result<Vec<u8>>;
    }
}

mockall::mock! {
    pub Writer {}
    impl ArtifactWriterPort for Writer {
        fn write(&self, output_dir: &Path, filename: &str, bytes: &[u8]) -> anyhow::Result<PathBuf>;
    }
}

mockall::mock! {
    pub Canvas {}
    impl PlaceholderCanvasPort for Canvas {
        fn render(&self, layout: &PlaceholderLayout) -> anyhow::Result<ImageAsset>;
    }
}

mockall::mock! {
    pub Reporter {}
    #[async_trait::async_trait]
    impl ProgressReporterPort for Reporter {
        async fn report(&self, campaign_id: &CampaignId, update: &ProgressUpdate) -> bool;
    }
}

pub struct FixedClock(pub i64);

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

pub fn small_asset() -> ImageAsset {
    ImageAsset::filled_rgb(4, 3, [10, 20, 30]).unwrap()
}

pub fn decoder_returning_small_asset() -> MockDecoder {
    let mut decoder = MockDecoder::new();
    decoder.expect_decode().returning(|_| Ok(small_asset()));
    decoder
}

pub fn passthrough_normalizer() -> MockNormalizer {
    let mut normalizer = MockNormalizer::new();
    normalizer
        .expect_normalize()
        .returning(|asset, _| Ok(asset));
    normalizer
}

/// PNG payloads are 7 bytes, WebP payloads 5.
pub fn fixed_size_encoder() -> MockEncoder {
    let mut encoder = MockEncoder::new();
    encoder.expect_encode().returning(|_, format| match format {
        EncodeFormat::Png => Ok(vec![0u8; 7]),
        EncodeFormat::WebpLossy { .. } => Ok(vec![0u8; 5]),
    });
    encoder
}

pub fn accepting_writer() -> MockWriter {
    let mut writer = MockWriter::new();
    writer
        .expect_write()
        .returning(|dir, name, _| Ok(dir.join(name)));
    writer
}
