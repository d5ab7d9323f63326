//! Errors raised while preparing or running an evaluation.

use thiserror::Error;

/// Faults that are not heuristic outcomes. The CLI turns each of these into
/// an "Internal error" verdict.
#[derive(Debug, Error)]
pub enum CheckError {
    /// A built-in URL or host pattern failed to compile.
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),
    /// Replacement rule tables could not be parsed.
    #[error("rule tables: {0}")]
    Rules(#[from] toml::de::Error),
}
