// =============================================================================
// config.rs — KNOBS
// =============================================================================
//
// Five of them. Two tune the matcher, two tell the binary where the market
// catalog lives and how often to re-read it, one picks the log format.
//
// Every value can be overridden with a MARKET_MATCH_ environment variable,
// and a .env file is picked up if one is lying around. An unset variable
// means the default. A variable that is set but doesn't parse, or parses to
// something the matcher won't accept (a threshold of 7), is an error: the
// binary refuses to start rather than quietly running on defaults.
// =============================================================================

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{MatchError, Result};
use crate::matcher::MatcherConfig;

pub const MIN_CONFIDENCE_VAR: &str = "MARKET_MATCH_MIN_CONFIDENCE";
pub const MAX_RESULTS_VAR: &str = "MARKET_MATCH_MAX_RESULTS";
pub const CATALOG_PATH_VAR: &str = "MARKET_MATCH_CATALOG_PATH";
pub const CATALOG_REFRESH_SECS_VAR: &str = "MARKET_MATCH_CATALOG_REFRESH_SECS";
pub const LOG_JSON_VAR: &str = "MARKET_MATCH_LOG_JSON";

#[derive(Debug, Clone)]
pub struct Config {
    /// Minimum confidence a market needs to be reported. Default: 0.3
    pub min_confidence: f64,

    /// Cap on reported markets per post. Default: 5
    pub max_results: usize,

    /// JSON array of markets. Default: markets.json
    pub catalog_path: PathBuf,

    /// How often the binary re-reads the catalog file. Default: 300 seconds.
    pub catalog_refresh_interval: Duration,

    /// Emit logs as JSON lines instead of human-readable text. Default: false
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables with defaults.
    pub fn from_env() -> Result<Self> {
        // A missing .env is the normal case.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key → value source. `from_env` passes the process
    /// environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let config = Config {
            min_confidence: env_or_default(&lookup, MIN_CONFIDENCE_VAR, defaults.min_confidence)?,
            max_results: env_or_default(&lookup, MAX_RESULTS_VAR, defaults.max_results)?,
            catalog_path: env_or_default(&lookup, CATALOG_PATH_VAR, defaults.catalog_path)?,
            catalog_refresh_interval: Duration::from_secs(env_or_default(
                &lookup,
                CATALOG_REFRESH_SECS_VAR,
                defaults.catalog_refresh_interval.as_secs(),
            )?),
            log_json: env_or_default(&lookup, LOG_JSON_VAR, defaults.log_json)?,
        };

        config.matcher_config().validate()?;
        Ok(config)
    }

    pub fn matcher_config(&self) -> MatcherConfig {
        MatcherConfig {
            min_confidence: self.min_confidence,
            max_results: self.max_results,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let matcher = MatcherConfig::default();
        Config {
            min_confidence: matcher.min_confidence,
            max_results: matcher.max_results,
            catalog_path: PathBuf::from("markets.json"),
            catalog_refresh_interval: Duration::from_secs(300),
            log_json: false,
        }
    }
}

/// Parse `key` from `lookup`, falling back to `default` only when unset.
/// Blank and unparseable values are errors.
fn env_or_default<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid(key, raw.clone()));
    }
    trimmed.parse().map_err(|_| invalid(key, raw.clone()))
}

fn invalid(key: &str, value: String) -> MatchError {
    MatchError::InvalidConfig {
        key: key.to_string(),
        value,
    }
}
