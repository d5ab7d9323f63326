//! Individual rule predicates. Each returns what matched, if anything.

use crate::config::RuleSet;

/// Literal, case-sensitive prefix test on the trimmed input.
pub fn has_https_prefix(raw: &str) -> bool {
    raw.starts_with("https://")
}

/// First shortener host found inside `host`.
pub fn shortener_in<'r>(host: &str, rules: &'r RuleSet) -> Option<&'r str> {
    rules
        .shorteners
        .iter()
        .map(String::as_str)
        .find(|s| host.contains(s))
}

/// First keyword, in declared order, contained in the lowercased URL.
pub fn first_keyword<'r>(full_lower: &str, rules: &'r RuleSet) -> Option<&'r str> {
    rules
        .malicious_keywords
        .iter()
        .map(String::as_str)
        .find(|k| full_lower.contains(k))
}

/// First suspicious TLD suffix the host ends with.
pub fn suspicious_tld<'r>(host: &str, rules: &'r RuleSet) -> Option<&'r str> {
    rules
        .suspicious_tlds
        .iter()
        .map(String::as_str)
        .find(|t| host.ends_with(t))
}

/// First look-alike character found in the host, with the ASCII letter it imitates.
pub fn homograph_in(host: &str, rules: &RuleSet) -> Option<(char, char)> {
    host.chars()
        .find_map(|c| rules.homograph_of(c).map(|ascii| (c, ascii)))
}

/// First blacklisted suffix, in declared order, the host ends with.
pub fn blacklisted_suffix<'r>(host: &str, rules: &'r RuleSet) -> Option<&'r str> {
    rules
        .blacklisted_domains
        .iter()
        .map(String::as_str)
        .find(|d| host.ends_with(d))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn https_prefix_is_case_sensitive() {
        assert!(has_https_prefix("https://example.com"));
        assert!(!has_https_prefix("HTTPS://example.com"));
        assert!(!has_https_prefix("http://example.com"));
        assert!(!has_https_prefix("ftp://example.com"));
    }

    #[test]
    fn shortener_substring_match() {
        let rules = RuleSet::default();
        assert_eq!(shortener_in("bit.ly", &rules), Some("bit.ly"));
        assert_eq!(shortener_in("go.bit.ly", &rules), Some("bit.ly"));
        // "t.co" is a substring of many hosts.
        assert_eq!(shortener_in("microsoft.com", &rules), Some("t.co"));
        assert_eq!(shortener_in("tco.example", &rules), None);
        assert_eq!(shortener_in("example.org", &rules), None);
    }

    #[test]
    fn keywords_follow_declared_order() {
        let rules = RuleSet::default();
        assert_eq!(
            first_keyword("https://secure-login.xyz", &rules),
            Some("login")
        );
        assert_eq!(
            first_keyword("https://example.com/account/phishy", &rules),
            Some("phish")
        );
        assert_eq!(first_keyword("https://example.com", &rules), None);
    }

    #[test]
    fn tld_suffix_match() {
        let rules = RuleSet::default();
        assert_eq!(suspicious_tld("free.prizes.buzz", &rules), Some(".buzz"));
        assert_eq!(suspicious_tld("archive.zip", &rules), Some(".zip"));
        assert_eq!(suspicious_tld("zip.example.com", &rules), None);
        assert_eq!(suspicious_tld("example.tk:8080", &rules), None);
    }

    #[test]
    fn homograph_detection() {
        let rules = RuleSet::default();
        assert_eq!(homograph_in("pаypal.com", &rules), Some(('а', 'a')));
        assert_eq!(homograph_in("gοοgle.com", &rules), Some(('ο', 'o')));
        assert_eq!(homograph_in("paypal.com", &rules), None);
    }

    #[test]
    fn blacklist_suffix() {
        let rules = RuleSet::default();
        assert_eq!(
            blacklisted_suffix("abc.trycloudflare.com", &rules),
            Some("trycloudflare.com")
        );
        assert_eq!(blacklisted_suffix("trycloudflare.com.example", &rules), None);
    }
}
