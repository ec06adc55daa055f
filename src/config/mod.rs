pub mod types;

use std::path::Path;

use crate::error::{OccupancyError, Result};
use types::Config;

pub const ENV_ACCOUNT_ID: &str = "HOSTAWAY_ACCOUNT_ID";
pub const ENV_API_SECRET: &str = "HOSTAWAY_API_SECRET";
pub const ENV_LISTING_IDS: &str = "HOSTAWAY_LISTING_IDS";
pub const ENV_SINK_DATABASE_ID: &str = "NOTION_DATABASE_ID";
pub const ENV_SINK_API_KEY: &str = "NOTION_API_KEY";

pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        OccupancyError::Config(format!(
            "failed to read config file {}: {e}",
            path.display()
        ))
    })?;
    let config: Config = serde_yml::from_str(&content)?;
    Ok(config)
}

/// Overlay environment values on top of the file config.
///
/// `lookup` is `std::env::var` in the binary; tests pass a map.
pub fn apply_env_overrides(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(id) = lookup(ENV_ACCOUNT_ID) {
        config.hostaway.account_id = id.trim().to_string();
    }
    if let Some(secret) = lookup(ENV_API_SECRET) {
        config.hostaway.api_secret = secret.trim().to_string();
    }
    if let Some(ids) = lookup(ENV_LISTING_IDS) {
        config.report.listing_ids = parse_listing_ids(&ids);
    }
    if let Some(db) = lookup(ENV_SINK_DATABASE_ID) {
        config.sink.database_id = Some(db);
    }
    if let Some(key) = lookup(ENV_SINK_API_KEY) {
        config.sink.api_key = Some(key);
    }
}

/// Split a comma-separated id list, trimming whitespace and dropping empties.
pub fn parse_listing_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect()
}
