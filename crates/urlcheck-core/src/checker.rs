//! Entry points: validate a URL, then run the heuristic pipeline.

use crate::config::RuleSet;
use crate::error::CheckError;
use crate::heuristics;
use crate::url_model::{ParsedUrl, UrlSyntax};
use crate::verdict::Verdict;

/// Compiled patterns plus the rule tables they are checked against.
///
/// Immutable after construction; one checker can serve any number of URLs.
#[derive(Debug, Clone)]
pub struct UrlChecker {
    rules: RuleSet,
    syntax: UrlSyntax,
}

impl UrlChecker {
    pub fn new(rules: RuleSet) -> Result<Self, CheckError> {
        Ok(Self {
            rules,
            syntax: UrlSyntax::compile()?,
        })
    }

    /// Checker over the built-in rule tables.
    pub fn builtin() -> Result<Self, CheckError> {
        Self::new(RuleSet::default())
    }

    /// Classify `raw`. Malformed input yields the "Invalid URL format" verdict.
    pub fn check(&self, raw: &str) -> Verdict {
        match ParsedUrl::parse(&self.syntax, raw) {
            Some(url) => heuristics::evaluate(&url, &self.rules, &self.syntax),
            None => {
                tracing::debug!(input = raw, "rejected by url syntax");
                Verdict::invalid_format()
            }
        }
    }
}

/// One-shot check with the built-in rules.
pub fn check_url_safety(raw: &str) -> Result<Verdict, CheckError> {
    Ok(UrlChecker::builtin()?.check(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::Severity;

    #[test]
    fn invalid_format_short_circuits() {
        let checker = UrlChecker::builtin().unwrap();
        for raw in ["", "   ", "bit.ly/abc", "gopher://example.com", "https://a b.com"] {
            assert_eq!(checker.check(raw), Verdict::invalid_format(), "input {raw:?}");
        }
    }

    #[test]
    fn uppercase_scheme_valid_but_not_https() {
        let v = check_url_safety("HTTPS://example.com").unwrap();
        assert_eq!(v.level, Severity::Medium);
        assert_eq!(v.reason, "Connection is not secure (missing HTTPS)");
    }

    #[test]
    fn port_blocks_ip_literal_match() {
        // Host heuristics see "1.2.3.4:8443", which is not an IP literal.
        let v = check_url_safety("https://1.2.3.4:8443/").unwrap();
        assert!(v.safe);
    }

    #[test]
    fn checker_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UrlChecker>();
    }
}
