//! ID type wrappers for type safety.

pub mod campaign_id;

pub use campaign_id::CampaignId;
