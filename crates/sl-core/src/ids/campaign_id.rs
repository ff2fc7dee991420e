use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Campaign identifier supplied by the caller.
///
/// Opaque: only used to namespace artifact filenames and progress URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CampaignId(String);

impl CampaignId {
    pub fn new(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// First `max_chars` characters, for display on the placeholder.
    pub fn short(&self, max_chars: usize) -> String {
        self.0.chars().take(max_chars).collect()
    }
}

impl Display for CampaignId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CampaignId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CampaignId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for CampaignId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
