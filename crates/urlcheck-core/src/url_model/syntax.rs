//! Compiled URL and host patterns.

use crate::error::CheckError;
use regex::Regex;

/// Whole-URL shape: scheme, host, optional port, optional path/query/fragment.
/// Anchored both ends. Word characters are letters, numbers and `_` only, so
/// look-alike letters pass while combining marks and zero-width joiners do not.
const URL_PATTERN: &str = r"(?i)^(?P<scheme>https?|ftp)://(?P<host>[\p{L}\p{N}_\-.]+)(?::(?P<port>\d+))?(?P<path>/[\p{L}\p{N}_\-.~:/?#\[\]@!$&'()*+,;=]*)?$";

/// Four dot-separated groups of one to three digits. No 0-255 range check.
const IP_LITERAL_PATTERN: &str = r"^\d{1,3}(\.\d{1,3}){3}$";

/// Patterns shared by the validator and the heuristics.
#[derive(Debug, Clone)]
pub struct UrlSyntax {
    pub(crate) url: Regex,
    ip_literal: Regex,
}

impl UrlSyntax {
    pub fn compile() -> Result<Self, CheckError> {
        Ok(Self {
            url: Regex::new(URL_PATTERN)?,
            ip_literal: Regex::new(IP_LITERAL_PATTERN)?,
        })
    }

    /// Whether `raw` (already trimmed) is a well-formed URL.
    pub fn is_valid_url(&self, raw: &str) -> bool {
        self.url.is_match(raw)
    }

    pub fn is_ip_literal(&self, host: &str) -> bool {
        self.ip_literal.is_match(host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syntax() -> UrlSyntax {
        UrlSyntax::compile().unwrap()
    }

    #[test]
    fn accepts_supported_schemes_any_case() {
        let s = syntax();
        assert!(s.is_valid_url("https://example.com"));
        assert!(s.is_valid_url("http://example.com/"));
        assert!(s.is_valid_url("ftp://files.example.com/pub/x.iso"));
        assert!(s.is_valid_url("HTTPS://EXAMPLE.COM"));
        assert!(s.is_valid_url("HtTp://example.com"));
    }

    #[test]
    fn rejects_other_schemes() {
        let s = syntax();
        assert!(!s.is_valid_url("mailto:someone@example.com"));
        assert!(!s.is_valid_url("javascript:alert(1)"));
        assert!(!s.is_valid_url("file:///etc/passwd"));
        assert!(!s.is_valid_url("example.com"));
    }

    #[test]
    fn port_must_be_digits() {
        let s = syntax();
        assert!(s.is_valid_url("https://example.com:8443/path"));
        assert!(!s.is_valid_url("https://example.com:abc/path"));
        assert!(!s.is_valid_url("https://example.com:"));
    }

    #[test]
    fn partial_matches_rejected() {
        let s = syntax();
        assert!(!s.is_valid_url("https://example.com/with space"));
        assert!(!s.is_valid_url("https://exa mple.com"));
        assert!(!s.is_valid_url("https://example.com/\"quoted\""));
        assert!(!s.is_valid_url("https://user@example.com"));
        assert!(!s.is_valid_url("https://"));
    }

    #[test]
    fn path_accepts_common_punctuation() {
        let s = syntax();
        assert!(s.is_valid_url(
            "https://example.com/a-b_c.d~e/f?g=h&i=j;k#frag[0]@!$'()*+,="
        ));
    }

    #[test]
    fn invisible_and_combining_chars_rejected() {
        let s = syntax();
        assert!(!s.is_valid_url("https://exa\u{200C}mple.com"));
        assert!(!s.is_valid_url("https://exa\u{200D}mple.com"));
        assert!(!s.is_valid_url("https://e\u{0301}xample.com"));
        assert!(!s.is_valid_url("https://example.com/a\u{200C}b"));
    }

    #[test]
    fn percent_encoding_not_in_path_class() {
        assert!(!syntax().is_valid_url("https://example.com/a%20b"));
    }

    #[test]
    fn unicode_host_letters_accepted() {
        assert!(syntax().is_valid_url("https://pаypal.com"));
    }

    #[test]
    fn ip_literal_shape() {
        let s = syntax();
        assert!(s.is_ip_literal("192.168.1.1"));
        assert!(s.is_ip_literal("999.999.999.999"));
        assert!(!s.is_ip_literal("1.2.3"));
        assert!(!s.is_ip_literal("1.2.3.4.5"));
        assert!(!s.is_ip_literal("1.2.3.4:8080"));
        assert!(!s.is_ip_literal("1234.1.1.1"));
    }
}
