//! # Configuration Loader / 配置加载器
//!
//! Reads the imaging TOML file into [`ImagingConfig`] and applies
//! environment overrides. Pure data loading: values are accepted as they
//! appear in the file, missing keys take their defaults.

use anyhow::Context;
use sl_infra::ImagingConfig;
use std::path::PathBuf;

/// Overrides `[progress] base_url`.
pub const PROGRESS_BASE_URL_ENV: &str = "SOLARA_PROGRESS_BASE_URL";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML for
/// [`ImagingConfig`].
pub fn load_config(config_path: PathBuf) -> anyhow::Result<ImagingConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    toml::from_str(&content).context("Failed to parse config as TOML")
}

/// Config file when given, defaults otherwise, then environment overrides.
pub fn resolve_config(config_path: Option<PathBuf>) -> anyhow::Result<ImagingConfig> {
    let config = match config_path {
        Some(path) => load_config(path)?,
        None => ImagingConfig::defaults(),
    };
    Ok(with_progress_base_url(
        config,
        std::env::var(PROGRESS_BASE_URL_ENV).ok(),
    ))
}

fn with_progress_base_url(mut config: ImagingConfig, base_url: Option<String>) -> ImagingConfig {
    if let Some(base_url) = base_url {
        config.progress.base_url = base_url;
    }
    config
}
