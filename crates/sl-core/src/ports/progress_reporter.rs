use async_trait::async_trait;
use std::sync::Arc;

use crate::ids::CampaignId;
use crate::progress::ProgressUpdate;

/// Fire-and-forget progress side channel.
///
/// Returns whether the update was accepted. Implementations never retry and
/// never propagate failures.
#[async_trait]
pub trait ProgressReporterPort: Send + Sync {
    async fn report(&self, campaign_id: &CampaignId, update: &ProgressUpdate) -> bool;
}

#[async_trait]
impl<T: ProgressReporterPort + ?Sized> ProgressReporterPort for Arc<T> {
    async fn report(&self, campaign_id: &CampaignId, update: &ProgressUpdate) -> bool {
        (**self).report(campaign_id, update).await
    }
}
