//! Configuration loader
//!
//! Builds a [`GatewayConfig`] from environment variables or a config file.
//!
//! ## Loading Strategy
//! 1. Environment variables (a `.env` file in the working directory is read
//!    first, without overriding variables that are already set)
//! 2. If the required variables are missing, a config file
//! 3. JSON and TOML are both accepted, chosen by file extension
//!
//! ## Environment Variables
//! - `LEDGERBRIDGE_API_ID`: API identifier (required)
//! - `LEDGERBRIDGE_API_SECRET`: API secret (required)
//! - `LEDGERBRIDGE_PROVIDER`: provider name, defaults to `merit`
//! - `LEDGERBRIDGE_REGION`: regional endpoint, defaults to `ee`
//! - `LEDGERBRIDGE_TIMEOUT_SECS`: request timeout in seconds, defaults to 30
//! - `LEDGERBRIDGE_BASE_URL`: explicit API base URL, overrides the region
//!
//! ## File Locations
//! Without an explicit path the loader probes, in order:
//! 1. `./ledgerbridge.json`, `./ledgerbridge.toml`
//! 2. `./config.json`, `./config.toml`
//! 3. the same four names in the parent directory

use std::path::{Path, PathBuf};

use ledgerbridge_domain::constants::{
    DEFAULT_PROVIDER, DEFAULT_REGION, DEFAULT_REQUEST_TIMEOUT_SECS,
};
use ledgerbridge_domain::{AccountingError, GatewayConfig, Result};

pub const ENV_PROVIDER: &str = "LEDGERBRIDGE_PROVIDER";
pub const ENV_API_ID: &str = "LEDGERBRIDGE_API_ID";
pub const ENV_API_SECRET: &str = "LEDGERBRIDGE_API_SECRET";
pub const ENV_REGION: &str = "LEDGERBRIDGE_REGION";
pub const ENV_TIMEOUT_SECS: &str = "LEDGERBRIDGE_TIMEOUT_SECS";
pub const ENV_BASE_URL: &str = "LEDGERBRIDGE_BASE_URL";

const FILE_NAMES: [&str; 4] =
    ["ledgerbridge.json", "ledgerbridge.toml", "config.json", "config.toml"];

/// Load configuration, preferring the environment over files.
///
/// # Errors
/// `AccountingError::Config` when neither source yields a valid
/// configuration.
pub fn load() -> Result<GatewayConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Environment incomplete, trying config file");
            load_from_file(None)
        }
    }
}

/// Load configuration from `LEDGERBRIDGE_*` variables.
///
/// # Errors
/// `AccountingError::Config` when a required variable is missing or a value
/// does not parse.
pub fn load_from_env() -> Result<GatewayConfig> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Read .env file");
    }

    let api_id = env_var(ENV_API_ID)?;
    let api_secret = env_var(ENV_API_SECRET)?;
    let provider = env_opt(ENV_PROVIDER).unwrap_or_else(|| DEFAULT_PROVIDER.to_string());
    let region = env_opt(ENV_REGION).unwrap_or_else(|| DEFAULT_REGION.to_string());
    let request_timeout_secs = match env_opt(ENV_TIMEOUT_SECS) {
        Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
            AccountingError::Config(format!("Invalid {ENV_TIMEOUT_SECS} value {raw:?}: {e}"))
        })?,
        None => DEFAULT_REQUEST_TIMEOUT_SECS,
    };

    let config = GatewayConfig {
        provider,
        api_id,
        api_secret,
        region,
        request_timeout_secs,
        base_url: env_opt(ENV_BASE_URL),
    };
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file.
///
/// With `None`, the first file found by [`probe_config_paths`] is used.
///
/// # Errors
/// `AccountingError::Config` when the file is missing, unreadable, has an
/// unsupported extension, does not parse, or fails validation.
pub fn load_from_file(path: Option<PathBuf>) -> Result<GatewayConfig> {
    let config_path = match path {
        Some(p) if p.exists() => p,
        Some(p) => {
            return Err(AccountingError::Config(format!(
                "Config file not found: {}",
                p.display()
            )));
        }
        None => probe_config_paths().ok_or_else(|| {
            AccountingError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| AccountingError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse file contents, choosing the format from the extension of `path`.
fn parse_config(contents: &str, path: &Path) -> Result<GatewayConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| AccountingError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| AccountingError::Config(format!("Invalid JSON format: {e}"))),
        other => Err(AccountingError::Config(format!("Unsupported config format: {other}"))),
    }
}

/// First existing config file in the working directory or its parent.
pub fn probe_config_paths() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    probe_in(&cwd)
}

fn probe_in(dir: &Path) -> Option<PathBuf> {
    let parent = dir.parent();
    std::iter::once(dir)
        .chain(parent)
        .flat_map(|base| FILE_NAMES.into_iter().map(move |name| base.join(name)))
        .find(|candidate| candidate.is_file())
}

/// Required, non-empty environment variable.
fn env_var(key: &str) -> Result<String> {
    env_opt(key).ok_or_else(|| {
        AccountingError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Optional variable; empty or whitespace-only counts as unset.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}
