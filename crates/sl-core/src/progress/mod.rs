//! Campaign progress notifications.
//! 活动进度通知。

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStep {
    Queued,
    GeneratingText,
    GeneratingImage,
    Finalizing,
    Done,
}

impl CampaignStep {
    /// Percentage the dashboard associates with reaching this step.
    pub fn default_percentage(&self) -> u8 {
        match self {
            Self::Queued => 10,
            Self::GeneratingText => 40,
            Self::GeneratingImage => 80,
            Self::Finalizing => 95,
            Self::Done => 100,
        }
    }
}

/// Body of `PUT /internal/campaigns/{id}/progress`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    pub status: CampaignStatus,
    pub current_step: CampaignStep,
    pub progress_percentage: u8,
}

impl ProgressUpdate {
    pub fn new(status: CampaignStatus, current_step: CampaignStep, progress_percentage: u8) -> Self {
        Self {
            status,
            current_step,
            progress_percentage: progress_percentage.min(100),
        }
    }

    /// Update using the step's default percentage.
    pub fn at_step(status: CampaignStatus, current_step: CampaignStep) -> Self {
        Self::new(status, current_step, current_step.default_percentage())
    }
}
