//! URL modeling: syntax validation and the parsed view used by heuristics.

mod syntax;

pub use syntax::UrlSyntax;

/// Read-only view of a syntactically valid URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    /// Trimmed input, case preserved.
    pub raw: String,
    /// Scheme, lowercased.
    pub scheme: String,
    /// Network location as written (host plus `:port` when present), lowercased.
    /// Host heuristics match against this.
    pub host: String,
    /// Port digits, if any.
    pub port: Option<String>,
    /// Path, query and fragment, lowercased. Empty when absent.
    pub path: String,
    /// Whole trimmed URL, lowercased. Keyword scans run over this.
    pub full_lower: String,
}

/// Whitespace plus the ASCII separator controls U+001C..=U+001F.
fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

impl ParsedUrl {
    /// Validate and split `raw`. Returns `None` when the input is not a
    /// well-formed URL; surrounding whitespace and separator controls are ignored.
    pub fn parse(syntax: &UrlSyntax, raw: &str) -> Option<Self> {
        let raw = raw.trim_matches(is_strippable);
        let caps = syntax.url.captures(raw)?;

        let scheme = caps.name("scheme")?.as_str().to_lowercase();
        let host = caps.name("host")?;
        let port = caps.name("port");
        // Authority runs from the host through the port digits, if any.
        let netloc = &raw[host.start()..port.map_or(host.end(), |m| m.end())];
        let port = port.map(|m| m.as_str().to_string());
        let path = caps
            .name("path")
            .map(|m| m.as_str().to_lowercase())
            .unwrap_or_default();

        Some(Self {
            raw: raw.to_string(),
            scheme,
            host: netloc.to_lowercase(),
            port,
            path,
            full_lower: raw.to_lowercase(),
        })
    }

    /// Last `n` characters of the host (fewer if the host is shorter).
    pub fn host_tail(&self, n: usize) -> &str {
        let count = self.host.chars().count();
        let skip = count.saturating_sub(n);
        match self.host.char_indices().nth(skip) {
            Some((idx, _)) => &self.host[idx..],
            None => "",
        }
    }
}
