//! Ordered risk heuristics.
//!
//! Rules run in [`Heuristic::PIPELINE`] order and the first one that fires
//! decides the verdict. The order decides which reason is reported when
//! several rules would match, so it must not change.

mod checks;

pub use checks::{
    blacklisted_suffix, first_keyword, has_https_prefix, homograph_in, shortener_in,
    suspicious_tld,
};

use crate::config::RuleSet;
use crate::url_model::{ParsedUrl, UrlSyntax};
use crate::verdict::{Severity, Verdict};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    Scheme,
    IpLiteral,
    Shortener,
    Keyword,
    SuspiciousTld,
    Homograph,
    Blacklist,
}

impl Heuristic {
    pub const PIPELINE: [Heuristic; 7] = [
        Heuristic::Scheme,
        Heuristic::IpLiteral,
        Heuristic::Shortener,
        Heuristic::Keyword,
        Heuristic::SuspiciousTld,
        Heuristic::Homograph,
        Heuristic::Blacklist,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Scheme => "scheme",
            Heuristic::IpLiteral => "ip_literal",
            Heuristic::Shortener => "shortener",
            Heuristic::Keyword => "keyword",
            Heuristic::SuspiciousTld => "suspicious_tld",
            Heuristic::Homograph => "homograph",
            Heuristic::Blacklist => "blacklist",
        }
    }

    /// Verdict for `url` if this rule fires.
    pub fn apply(self, url: &ParsedUrl, rules: &RuleSet, syntax: &UrlSyntax) -> Option<Verdict> {
        match self {
            Heuristic::Scheme => (!has_https_prefix(&url.raw)).then(|| {
                Verdict::unsafe_with(Severity::Medium, "Connection is not secure (missing HTTPS)")
            }),
            Heuristic::IpLiteral => syntax.is_ip_literal(&url.host).then(|| {
                Verdict::unsafe_with(
                    Severity::High,
                    "Domain is an IP address (often used in phishing)",
                )
            }),
            Heuristic::Shortener => shortener_in(&url.host, rules)
                .map(|_| Verdict::unsafe_with(Severity::High, "URL uses known link shortener")),
            Heuristic::Keyword => first_keyword(&url.full_lower, rules).map(|k| {
                Verdict::unsafe_with(
                    Severity::High,
                    format!("Contains suspicious keyword: '{k}'"),
                )
            }),
            // Reports the host's last four characters, not the matched suffix.
            Heuristic::SuspiciousTld => suspicious_tld(&url.host, rules).map(|_| {
                Verdict::unsafe_with(
                    Severity::High,
                    format!("Suspicious domain extension: '{}'", url.host_tail(4)),
                )
            }),
            Heuristic::Homograph => homograph_in(&url.host, rules).map(|(lookalike, ascii)| {
                tracing::debug!(%lookalike, %ascii, "lookalike character in host");
                Verdict::unsafe_with(
                    Severity::High,
                    "Possible homograph attack (lookalike characters used)",
                )
            }),
            Heuristic::Blacklist => blacklisted_suffix(&url.host, rules).map(|d| {
                Verdict::unsafe_with(Severity::Critical, format!("Domain is blacklisted: '{d}'"))
            }),
        }
    }
}

/// Run the pipeline over a parsed URL. Falls back to [`Verdict::safe`].
pub fn evaluate(url: &ParsedUrl, rules: &RuleSet, syntax: &UrlSyntax) -> Verdict {
    for heuristic in Heuristic::PIPELINE {
        if let Some(verdict) = heuristic.apply(url, rules, syntax) {
            tracing::debug!(
                rule = heuristic.name(),
                host = %url.host,
                level = %verdict.level,
                "heuristic fired"
            );
            return verdict;
        }
    }
    tracing::debug!(host = %url.host, "no heuristic fired");
    Verdict::safe()
}
