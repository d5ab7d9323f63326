pub mod config;
pub mod logging;

pub mod checker;
pub mod error;
pub mod heuristics;
pub mod url_model;
pub mod verdict;

pub use checker::{check_url_safety, UrlChecker};
pub use config::RuleSet;
pub use error::CheckError;
pub use verdict::{Severity, Verdict};
