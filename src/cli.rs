//! Command line surface of `solara-imaging`.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use sl_core::generation::GenerationResponse;
use sl_core::ids::CampaignId;

use crate::bootstrap::{resolve_config, wire_use_cases};

#[derive(Debug, Parser)]
#[command(name = "solara-imaging")]
#[command(about = "Campaign image extraction and placeholder rendering", long_about = None)]
pub struct Cli {
    /// TOML config file; built-in defaults apply when omitted
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Store the generated image from a saved response, or a placeholder
    Extract {
        /// JSON generation response
        #[arg(long)]
        response: PathBuf,
        #[arg(long)]
        campaign_id: String,
        #[arg(long)]
        output_dir: PathBuf,
        #[arg(long, default_value = "")]
        prompt: String,
    },
    /// Render the branded placeholder only
    Placeholder {
        #[arg(long)]
        campaign_id: String,
        #[arg(long)]
        output_dir: PathBuf,
        #[arg(long, default_value = "")]
        prompt: String,
    },
}

/// A missing or unparsable response is treated as empty so the campaign
/// still ends up with a placeholder.
pub fn read_response(path: &Path) -> GenerationResponse {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "Cannot read generation response");
            return GenerationResponse::default();
        }
    };
    serde_json::from_str(&content).unwrap_or_else(|err| {
        warn!(path = %path.display(), error = %err, "Cannot parse generation response");
        GenerationResponse::default()
    })
}

/// Runs a command and returns the bare filename, empty when no image could
/// be produced.
pub async fn run(cli: Cli) -> anyhow::Result<String> {
    let config = resolve_config(cli.config)?;
    let use_cases = wire_use_cases(&config)?;

    let filename = match cli.command {
        Commands::Extract {
            response,
            campaign_id,
            output_dir,
            prompt,
        } => {
            let response = read_response(&response);
            let image = use_cases
                .produce
                .execute(&response, &CampaignId::from(campaign_id), &output_dir, &prompt)
                .await;
            info!(source = ?image.source, "Campaign image ready");
            image.filename
        }
        Commands::Placeholder {
            campaign_id,
            output_dir,
            prompt,
        } => use_cases
            .placeholder
            .execute(&CampaignId::from(campaign_id), &output_dir, &prompt),
    };

    Ok(filename)
}
