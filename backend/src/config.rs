//! Desk configuration parsing and validation.
//!
//! This module centralises the environment-driven settings so they are
//! validated consistently and can be tested in isolation.

use std::path::PathBuf;
use std::time::Duration;

use mockable::Env;
use tracing::warn;
use url::Url;

const STORAGE_DIR_ENV: &str = "DESK_STORAGE_DIR";
const REMOTE_URL_ENV: &str = "DESK_REMOTE_URL";
const REMOTE_TIMEOUT_ENV: &str = "DESK_REMOTE_TIMEOUT_SECONDS";

const DEFAULT_STORAGE_DIR: &str = ".complaint-desk";
const DEFAULT_REMOTE_TIMEOUT_SECONDS: u64 = 30;

/// Desk settings derived from configuration toggles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskSettings {
    /// Directory holding the snapshot files.
    pub storage_dir: PathBuf,
    /// Base URL of the remote record collaborator; `None` runs the desk
    /// local-only.
    pub remote_url: Option<Url>,
    /// Per-request deadline for gateway calls.
    pub remote_timeout: Duration,
}

/// Errors raised while validating desk configuration.
#[derive(thiserror::Error, Debug)]
pub enum DeskConfigError {
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Build desk settings from environment variables.
///
/// Unset variables fall back to safe defaults (with a warning for the
/// storage directory); set-but-invalid values are hard errors so a typo
/// never silently reroutes persistence or the collaborator.
///
/// # Examples
///
/// ```rust
/// use complaint_desk::config::desk_settings_from_env;
/// use mockable::MockEnv;
///
/// let mut env = MockEnv::new();
/// env.expect_string().returning(|name| match name {
///     "DESK_STORAGE_DIR" => Some("/var/lib/complaint-desk".to_string()),
///     "DESK_REMOTE_TIMEOUT_SECONDS" => Some("10".to_string()),
///     _ => None,
/// });
///
/// let settings = desk_settings_from_env(&env).expect("settings parse");
/// assert!(settings.remote_url.is_none());
/// assert_eq!(settings.remote_timeout.as_secs(), 10);
/// ```
pub fn desk_settings_from_env<E: Env>(env: &E) -> Result<DeskSettings, DeskConfigError> {
    Ok(DeskSettings {
        storage_dir: storage_dir_from_env(env),
        remote_url: remote_url_from_env(env)?,
        remote_timeout: remote_timeout_from_env(env)?,
    })
}

fn storage_dir_from_env<E: Env>(env: &E) -> PathBuf {
    match env.string(STORAGE_DIR_ENV) {
        Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        Some(_) | None => {
            warn!("{STORAGE_DIR_ENV} not set; using {DEFAULT_STORAGE_DIR}");
            PathBuf::from(DEFAULT_STORAGE_DIR)
        }
    }
}

fn remote_url_from_env<E: Env>(env: &E) -> Result<Option<Url>, DeskConfigError> {
    let Some(value) = env.string(REMOTE_URL_ENV) else {
        return Ok(None);
    };
    Url::parse(&value)
        .map(Some)
        .map_err(|_| DeskConfigError::InvalidEnv {
            name: REMOTE_URL_ENV,
            value,
            expected: "an absolute http(s) URL",
        })
}

fn remote_timeout_from_env<E: Env>(env: &E) -> Result<Duration, DeskConfigError> {
    let Some(value) = env.string(REMOTE_TIMEOUT_ENV) else {
        return Ok(Duration::from_secs(DEFAULT_REMOTE_TIMEOUT_SECONDS));
    };
    match value.parse::<u64>() {
        Ok(seconds) if seconds > 0 => Ok(Duration::from_secs(seconds)),
        _ => Err(DeskConfigError::InvalidEnv {
            name: REMOTE_TIMEOUT_ENV,
            value,
            expected: "a positive integer number of seconds",
        }),
    }
}
