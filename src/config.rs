// src/config.rs
// Invoker configuration - resolved once at startup, no ambient env lookups later

use std::path::PathBuf;
use std::time::Duration;

/// Fallback executable name when neither `--es-path` nor `ES_PATH` is set.
/// Resolved through the platform `PATH` lookup at spawn time.
pub const DEFAULT_ES_PATH: &str = "es.exe";

/// Configuration for the `es.exe` invoker.
///
/// Resolution order for the executable path: explicit override (CLI flag or
/// `ES_PATH` env var, both carried by clap), then [`DEFAULT_ES_PATH`].
#[derive(Debug, Clone)]
pub struct EsConfig {
    /// Path to the Everything command-line client.
    pub es_path: PathBuf,
    /// Maximum wall-clock time for one invocation. `None` = wait until the
    /// child exits.
    pub timeout: Option<Duration>,
}

impl EsConfig {
    /// Build a config from optional overrides, applying documented defaults.
    /// A timeout of 0 seconds disables the bound.
    pub fn new(es_path: Option<PathBuf>, timeout_secs: Option<u64>) -> Self {
        Self {
            es_path: es_path.unwrap_or_else(|| PathBuf::from(DEFAULT_ES_PATH)),
            timeout: timeout_secs.filter(|s| *s > 0).map(Duration::from_secs),
        }
    }
}

impl Default for EsConfig {
    fn default() -> Self {
        Self::new(None, None)
    }
}
