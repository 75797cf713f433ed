use std::env;
use std::path::PathBuf;

use crate::RippleError;

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

fn env_u32_opt(key: &str) -> Result<Option<u32>, RippleError> {
    parse_u32_opt(key, env_opt(key))
}

/// A set but unparseable value is an error, never a silent `None`.
fn parse_u32_opt(key: &str, value: Option<String>) -> Result<Option<u32>, RippleError> {
    match value {
        None => Ok(None),
        Some(v) => v.trim().parse().map(Some).map_err(|_| {
            RippleError::InvalidConfig(format!("{}: expected a non-negative integer, got {:?}", key, v))
        }),
    }
}

// ── Top-level config ──────────────────────────────────────────

/// Run configuration resolved from the environment.
///
/// `degree` and `window` are overrides; when absent the batch log's
/// configuration record decides.
#[derive(Debug, Clone)]
pub struct Config {
    pub batch_log: PathBuf,
    pub stream_log: PathBuf,
    pub output: PathBuf,
    pub degree: Option<u32>,
    pub window: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            batch_log: PathBuf::from("log_input/batch_log.json"),
            stream_log: PathBuf::from("log_input/stream_log.json"),
            output: PathBuf::from("log_output/flagged_purchases.json"),
            degree: None,
            window: None,
        }
    }
}

impl Config {
    /// Build config from `RIPPLE_*` environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Result<Self, RippleError> {
        let defaults = Self::default();
        Ok(Self {
            batch_log: PathBuf::from(env_or(
                "RIPPLE_BATCH_LOG",
                &defaults.batch_log.to_string_lossy(),
            )),
            stream_log: PathBuf::from(env_or(
                "RIPPLE_STREAM_LOG",
                &defaults.stream_log.to_string_lossy(),
            )),
            output: PathBuf::from(env_or("RIPPLE_OUTPUT", &defaults.output.to_string_lossy())),
            degree: env_u32_opt("RIPPLE_DEGREE")?,
            window: env_u32_opt("RIPPLE_WINDOW")?,
        })
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  batch_log:   {}", self.batch_log.display());
        tracing::info!("  stream_log:  {}", self.stream_log.display());
        tracing::info!("  output:      {}", self.output.display());
        tracing::info!(
            "  overrides:   D={}, T={}",
            self.degree.map_or("(batch)".to_string(), |d| d.to_string()),
            self.window.map_or("(batch)".to_string(), |t| t.to_string()),
        );
    }
}
