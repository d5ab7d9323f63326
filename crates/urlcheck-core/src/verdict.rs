//! Verdict record emitted once per evaluated URL.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency of an unsafe verdict. Ordered from least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::None => "none",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a single URL.
///
/// `safe` is true exactly when `level` is [`Severity::None`]; the constructors
/// below are the only way this crate builds a verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub safe: bool,
    pub level: Severity,
    pub reason: String,
}

impl Verdict {
    /// Default outcome when no heuristic fired.
    pub fn safe() -> Self {
        Self {
            safe: true,
            level: Severity::None,
            reason: "URL appears to be safe".to_string(),
        }
    }

    /// Unsafe verdict. A `Severity::None` level is bumped to `Medium` so the
    /// `safe`/`level` pairing cannot be broken.
    pub fn unsafe_with(level: Severity, reason: impl Into<String>) -> Self {
        let level = match level {
            Severity::None => Severity::Medium,
            other => other,
        };
        Self {
            safe: false,
            level,
            reason: reason.into(),
        }
    }

    pub fn no_url_provided() -> Self {
        Self::unsafe_with(Severity::Critical, "No URL provided")
    }

    pub fn invalid_format() -> Self {
        Self::unsafe_with(Severity::Critical, "Invalid URL format")
    }

    /// Verdict for a fault raised while evaluating; carries the fault's message.
    pub fn internal_error(message: impl fmt::Display) -> Self {
        Self::unsafe_with(Severity::Critical, format!("Internal error: {message}"))
    }

    /// Single-line JSON record with the fields `safe`, `level`, `reason`.
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
