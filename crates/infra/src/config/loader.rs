//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `DEVFOLIO_DB_PATH` is unset, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//! 5. With no file anywhere, built-in defaults apply
//!
//! ## Environment Variables
//! - `DEVFOLIO_DB_PATH`: Database file path (required for env loading)
//! - `DEVFOLIO_DB_POOL_SIZE`: Connection pool size
//! - `DEVFOLIO_SERVER_HOST`: Listener host
//! - `DEVFOLIO_SERVER_PORT`: Listener port
//! - `DEVFOLIO_GITHUB_API_BASE`: GitHub REST API base URL
//! - `DEVFOLIO_GITHUB_CLIENT_ID`: OAuth app client id
//! - `DEVFOLIO_GITHUB_SECRET`: OAuth app client secret
//! - `DEVFOLIO_GITHUB_USER_AGENT`: User-Agent sent to GitHub
//! - `DEVFOLIO_GITHUB_TIMEOUT_SECS`: bound on each GitHub request
//!
//! Optional variables fall back to the [`Config`] defaults.
//!
//! ## File Locations
//! The loader checks the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./devfolio.json` or `./devfolio.toml` (current working directory)
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};
use std::str::FromStr;

use devfolio_domain::{Config, DevfolioError, Result};

const CONFIG_FILE_NAMES: [&str; 4] =
    ["config.json", "config.toml", "devfolio.json", "devfolio.toml"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `DevfolioError::Config` if an environment value or the chosen
/// file is invalid.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            match find_config_file() {
                Some(path) => load_from_file(Some(path)),
                None => {
                    tracing::info!("No config file found, using defaults");
                    Ok(Config::default())
                }
            }
        }
    }
}

/// Load configuration from environment variables
///
/// `DEVFOLIO_DB_PATH` must be present; every other variable is optional.
///
/// # Errors
/// Returns `DevfolioError::Config` if `DEVFOLIO_DB_PATH` is missing or a
/// numeric variable cannot be parsed.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::default();

    config.database.path = env_var("DEVFOLIO_DB_PATH")?;
    if let Some(pool_size) = env_parse::<u32>("DEVFOLIO_DB_POOL_SIZE", "pool size")? {
        config.database.pool_size = pool_size;
    }

    if let Some(host) = env_opt("DEVFOLIO_SERVER_HOST") {
        config.server.host = host;
    }
    if let Some(port) = env_parse::<u16>("DEVFOLIO_SERVER_PORT", "server port")? {
        config.server.port = port;
    }

    if let Some(base) = env_opt("DEVFOLIO_GITHUB_API_BASE") {
        config.github.api_base_url = base;
    }
    if let Some(client_id) = env_opt("DEVFOLIO_GITHUB_CLIENT_ID") {
        config.github.client_id = client_id;
    }
    if let Some(secret) = env_opt("DEVFOLIO_GITHUB_SECRET") {
        config.github.client_secret = secret;
    }
    if let Some(agent) = env_opt("DEVFOLIO_GITHUB_USER_AGENT") {
        config.github.user_agent = agent;
    }
    config.github.timeout_secs =
        env_parse::<u64>("DEVFOLIO_GITHUB_TIMEOUT_SECS", "GitHub timeout")?;

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, searches several locations for a config file.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `DevfolioError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(DevfolioError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => find_config_file().ok_or_else(|| {
            DevfolioError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| DevfolioError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| DevfolioError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| DevfolioError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(DevfolioError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the working directory, then the executable's directory, for a
/// config file.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn find_config_file() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    env_opt(key).ok_or_else(|| {
        DevfolioError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Optional environment variable; blank values count as unset.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Optional environment variable parsed into `T`.
fn env_parse<T>(key: &str, what: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_opt(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| DevfolioError::Config(format!("Invalid {what}: {e}")))
        })
        .transpose()
}
