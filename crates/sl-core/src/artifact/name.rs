//! Artifact filename scheme.
//! 产物文件命名规则。
//!
//! - Generated: `campaign_{id}_{token}.{png|webp}`
//! - Placeholder: `enhanced_placeholder_{id}_{token}.png`
//!
//! Every name gets its own random token, so repeated or concurrent calls for
//! the same campaign never collide and never overwrite an earlier file.

use rand::Rng;
use std::fmt::{Display, Formatter};

use crate::ids::CampaignId;
use crate::image::EncodeFormat;

const GENERATED_PREFIX: &str = "campaign";
const PLACEHOLDER_PREFIX: &str = "enhanced_placeholder";

/// 8 lowercase hex characters drawn from the thread-local CSPRNG.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactToken(String);

impl ArtifactToken {
    pub fn random() -> Self {
        let value: u32 = rand::rng().random();
        Self(format!("{value:08x}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Bare filename of an artifact, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactName(String);

impl ArtifactName {
    pub fn generated(campaign_id: &CampaignId, format: EncodeFormat) -> Self {
        Self(format!(
            "{GENERATED_PREFIX}_{campaign_id}_{}.{}",
            ArtifactToken::random().as_str(),
            format.extension()
        ))
    }

    pub fn placeholder(campaign_id: &CampaignId) -> Self {
        Self(format!(
            "{PLACEHOLDER_PREFIX}_{campaign_id}_{}.{}",
            ArtifactToken::random().as_str(),
            EncodeFormat::Png.extension()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ArtifactName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ArtifactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
