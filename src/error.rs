// =============================================================================
// error.rs — THE SHORT LIST OF THINGS THAT CAN ACTUALLY GO WRONG
// =============================================================================
//
// Matching itself never fails. Bad dates, unknown categories and empty
// keyword lists all degrade to "no contribution". What CAN fail is wiring:
// a nonsense threshold, a pattern that doesn't compile, a catalog file that
// isn't there or isn't JSON.
// =============================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchError {
    /// `min_confidence` must be finite and inside [0, 1].
    #[error("min_confidence must be a finite value in [0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("max_results must be at least 1")]
    ZeroMaxResults,

    /// An environment variable was set to something that doesn't parse.
    #[error("invalid value for {key}: {value:?}")]
    InvalidConfig { key: String, value: String },

    #[error("invalid promotional pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("failed to build keyword automaton: {0}")]
    Automaton(#[from] aho_corasick::BuildError),

    #[error("failed to read market catalog: {0}")]
    CatalogIo(#[from] std::io::Error),

    #[error("failed to parse market catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MatchError>;
