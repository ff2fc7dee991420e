//! Campaign progress notifications over HTTP
//! 通过 HTTP 发送活动进度通知
//!
//! `PUT {base_url}/internal/campaigns/{id}/progress` with a JSON
//! [`ProgressUpdate`]. Only `200 OK` counts as success. Timeouts, transport
//! errors and other statuses are logged at warn and reported as `false`;
//! nothing is retried.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, info, warn};

use sl_core::ids::CampaignId;
use sl_core::ports::ProgressReporterPort;
use sl_core::progress::ProgressUpdate;

pub struct HttpProgressReporter {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpProgressReporter {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("build progress http client")?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            timeout,
        })
    }

    fn progress_url(&self, campaign_id: &CampaignId) -> String {
        format!(
            "{}/internal/campaigns/{}/progress",
            self.base_url.trim_end_matches('/'),
            campaign_id
        )
    }
}

#[async_trait]
impl ProgressReporterPort for HttpProgressReporter {
    #[tracing::instrument(
        name = "infra.progress.report",
        skip(self, campaign_id, update),
        fields(campaign_id = %campaign_id)
    )]
    async fn report(&self, campaign_id: &CampaignId, update: &ProgressUpdate) -> bool {
        let url = self.progress_url(campaign_id);
        info!(
            step = ?update.current_step,
            percentage = update.progress_percentage,
            "Updating progress"
        );

        let result = self
            .client
            .put(&url)
            .json(update)
            .timeout(self.timeout)
            .send()
            .await;

        match result {
            Ok(response) if response.status() == StatusCode::OK => {
                info!("Progress updated successfully");
                true
            }
            Ok(response) => {
                warn!(status = %response.status(), "Progress update failed");
                false
            }
            Err(err) if err.is_timeout() => {
                warn!(timeout_ms = self.timeout.as_millis() as u64, "Progress update timed out");
                false
            }
            Err(err) => {
                warn!(error = %err, "Failed to update progress");
                false
            }
        }
    }
}

/// Reporter used when no progress endpoint is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledProgressReporter;

#[async_trait]
impl ProgressReporterPort for DisabledProgressReporter {
    async fn report(&self, campaign_id: &CampaignId, update: &ProgressUpdate) -> bool {
        debug!(
            campaign_id = %campaign_id,
            step = ?update.current_step,
            "Progress reporting disabled, skipping update"
        );
        false
    }
}
