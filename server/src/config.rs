//! Server configuration parsed from environment variables.
//!
//! Required: nothing. Optional:
//! - `PORT`: listen port, default 3000
//! - `TAPS_FILE`: YAML file with taps to register at startup
//! - `TAP_ONLINE_WINDOW_SECS`: how recent a tap's last report must be for it
//!   to count as online, default 120

use std::path::{Path, PathBuf};

use serde::Deserialize;
use uuid::Uuid;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TAP_ONLINE_WINDOW_SECS: u64 = 120;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("failed to read taps file {path}: {source}")]
    TapsFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse taps file {path}: {source}")]
    TapsFileParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub taps_file: Option<PathBuf>,
    pub tap_online_window_secs: u64,
}

impl ServerConfig {
    /// Build typed server config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let tap_online_window_secs =
            parse_or("TAP_ONLINE_WINDOW_SECS", lookup("TAP_ONLINE_WINDOW_SECS"), DEFAULT_TAP_ONLINE_WINDOW_SECS)?;
        if tap_online_window_secs == 0 {
            return Err(ConfigError::InvalidValue { key: "TAP_ONLINE_WINDOW_SECS", value: "0".into() });
        }
        let taps_file = lookup("TAPS_FILE")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Ok(Self { port, taps_file, tap_online_window_secs })
    }

    #[must_use]
    pub fn tap_online_window(&self) -> time::Duration {
        time::Duration::seconds(i64::try_from(self.tap_online_window_secs).unwrap_or(i64::MAX))
    }
}

fn parse_or<T: std::str::FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { key, value: value.to_owned() }),
    }
}

// =============================================================================
// TAP SEEDS
// =============================================================================

/// One tap listed in `TAPS_FILE`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TapSeed {
    /// Fixed identifier; a random one is assigned when absent.
    #[serde(default)]
    pub uuid: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
struct TapSeedFile {
    #[serde(default)]
    taps: Vec<TapSeed>,
}

/// Parse a YAML seed document.
pub fn parse_tap_seeds(raw: &str, path: &Path) -> Result<Vec<TapSeed>, ConfigError> {
    let file: TapSeedFile = serde_yaml::from_str(raw)
        .map_err(|source| ConfigError::TapsFileParse { path: path.to_path_buf(), source })?;
    Ok(file.taps)
}

/// Read and parse the YAML seed file at `path`.
pub fn load_tap_seeds(path: &Path) -> Result<Vec<TapSeed>, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::TapsFileRead { path: path.to_path_buf(), source })?;
    parse_tap_seeds(&raw, path)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
