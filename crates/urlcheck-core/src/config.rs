//! Rule tables: built-in lists and the TOML-loadable `RuleSet`.

use crate::error::CheckError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Substrings that flag a URL when found anywhere in it (lowercased).
/// Checked in this order; the first hit is the one reported.
pub const MALICIOUS_KEYWORDS: &[&str] = &[
    "phish",
    "login",
    "verify",
    "update",
    "account",
    "secure",
    "banking",
    "password",
    "signin",
    "malware",
    "scam",
    "confirm",
    "credentials",
    "support",
    "webscr",
    "spyware",
];

/// Host suffixes for top-level domains with a poor reputation.
pub const SUSPICIOUS_TLDS: &[&str] = &[
    ".zip", ".click", ".tk", ".ml", ".ga", ".cf", ".gq", ".ru", ".cn", ".xyz", ".top", ".buzz",
];

/// Link shortener hosts, matched as substrings of the host.
pub const SHORTENERS: &[&str] = &[
    "bit.ly",
    "tinyurl.com",
    "t.co",
    "goo.gl",
    "shorte.st",
    "ow.ly",
    "is.gd",
    "cutt.ly",
    "rebrand.ly",
];

/// Host suffixes that are always reported as critical.
pub const BLACKLISTED_DOMAINS: &[&str] = &["trycloudflare.com"];

/// Non-ASCII look-alike letters and the ASCII letter each imitates.
pub const HOMOGRAPHS: &[(char, char)] = &[
    ('а', 'a'),
    ('е', 'e'),
    ('і', 'i'),
    ('ο', 'o'),
    ('ѕ', 's'),
    ('ʋ', 'v'),
    ('ɡ', 'g'),
    ('ɩ', 'i'),
    ('Ɩ', 'l'),
];

/// Built-in rule tables, shared by every checker built with [`RuleSet::default`].
pub static BUILTIN_RULES: Lazy<RuleSet> = Lazy::new(RuleSet::builtin);

/// One homograph mapping: a look-alike character and its ASCII counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Homograph {
    pub lookalike: char,
    pub ascii: char,
}

/// Rule tables consulted by the heuristic pipeline.
///
/// The CLI always uses the built-in tables. Library users can load their own
/// from TOML with [`RuleSet::from_toml_str`]; missing sections fall back to
/// the built-in lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    pub malicious_keywords: Vec<String>,
    pub suspicious_tlds: Vec<String>,
    pub shorteners: Vec<String>,
    pub blacklisted_domains: Vec<String>,
    pub homographs: Vec<Homograph>,
}

impl RuleSet {
    fn builtin() -> Self {
        fn owned(list: &[&str]) -> Vec<String> {
            list.iter().map(|s| s.to_string()).collect()
        }
        Self {
            malicious_keywords: owned(MALICIOUS_KEYWORDS),
            suspicious_tlds: owned(SUSPICIOUS_TLDS),
            shorteners: owned(SHORTENERS),
            blacklisted_domains: owned(BLACKLISTED_DOMAINS),
            homographs: HOMOGRAPHS
                .iter()
                .map(|&(lookalike, ascii)| Homograph { lookalike, ascii })
                .collect(),
        }
    }

    /// Parse rule tables from TOML.
    pub fn from_toml_str(data: &str) -> Result<Self, CheckError> {
        let rules: RuleSet = toml::from_str(data)?;
        tracing::debug!(
            keywords = rules.malicious_keywords.len(),
            tlds = rules.suspicious_tlds.len(),
            shorteners = rules.shorteners.len(),
            blacklisted = rules.blacklisted_domains.len(),
            homographs = rules.homographs.len(),
            "loaded rule tables"
        );
        Ok(rules)
    }

    /// ASCII letter imitated by `c`, if `c` is a known look-alike.
    pub fn homograph_of(&self, c: char) -> Option<char> {
        self.homographs
            .iter()
            .find(|h| h.lookalike == c)
            .map(|h| h.ascii)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        BUILTIN_RULES.clone()
    }
}
