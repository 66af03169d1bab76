//! Address-bar normalization and validation for the embedded browser.

use thiserror::Error;
use url::{Position, Url};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BrowserError {
    #[error("malformed address: {0}")]
    Malformed(#[from] url::ParseError),
    #[error("unsupported scheme `{0}`, only http and https can be opened")]
    UnsupportedScheme(String),
    #[error("the address has no host")]
    MissingHost,
}

/// A validated `http`/`https` address split into the parts the browser checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    pub scheme: String,
    /// Serialized host: IDNA-encoded domain, IPv4, or bracketed IPv6.
    pub host: String,
    /// `None` when absent or equal to the scheme default.
    pub port: Option<u16>,
    /// Path, query and fragment in serialized form.
    pub rest: String,
}

fn has_http_scheme(input: &str) -> bool {
    let lower = input
        .get(..8)
        .unwrap_or(input)
        .to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Trims the input and adds `https://` when no http(s) scheme is present.
///
/// Returns `None` for blank input, which the address bar ignores.
pub fn normalize_input(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if has_http_scheme(trimmed) {
        Some(trimmed.to_string())
    } else {
        Some(format!("https://{trimmed}"))
    }
}

/// Validates an absolute `http`/`https` address with the WHATWG URL parser, the same rules
/// an iframe applies to its `src`.
///
/// # Errors
///
/// Returns [`BrowserError::Malformed`] for anything the parser rejects, then checks that the
/// scheme is http(s) and a host is present.
pub fn validate(url: &str) -> Result<ParsedUrl, BrowserError> {
    let parsed = Url::parse(url).map_err(|err| match err {
        url::ParseError::EmptyHost => BrowserError::MissingHost,
        other => BrowserError::Malformed(other),
    })?;
    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(BrowserError::UnsupportedScheme(scheme.to_string()));
    }
    let host = match parsed.host_str() {
        Some(host) if !host.is_empty() => host.to_string(),
        _ => return Err(BrowserError::MissingHost),
    };

    Ok(ParsedUrl {
        scheme: scheme.to_string(),
        host,
        port: parsed.port(),
        rest: parsed[Position::BeforePath..].to_string(),
    })
}

/// Turns address-bar text into the URL to load.
///
/// `Ok(None)` means the input was blank and nothing should happen.
///
/// # Errors
///
/// Returns a [`BrowserError`] when the normalized address does not validate.
pub fn resolve_navigation(raw: &str) -> Result<Option<String>, BrowserError> {
    let Some(url) = normalize_input(raw) else {
        return Ok(None);
    };
    validate(&url)?;
    Ok(Some(url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bare_host_gets_https_prefix() {
        assert_eq!(
            resolve_navigation("example.com"),
            Ok(Some("https://example.com".to_string()))
        );
        assert_eq!(
            resolve_navigation("  en.wikipedia.org/wiki/Rust  "),
            Ok(Some("https://en.wikipedia.org/wiki/Rust".to_string()))
        );
    }

    #[test]
    fn existing_http_scheme_is_kept_case_insensitively() {
        assert_eq!(
            resolve_navigation("http://x.org"),
            Ok(Some("http://x.org".to_string()))
        );
        assert_eq!(
            resolve_navigation("HTTPS://Example.com/Path"),
            Ok(Some("HTTPS://Example.com/Path".to_string()))
        );
    }

    #[test]
    fn blank_input_is_ignored() {
        assert_eq!(resolve_navigation(""), Ok(None));
        assert_eq!(resolve_navigation("   \t"), Ok(None));
    }

    #[test]
    fn text_with_spaces_in_host_is_rejected() {
        assert!(matches!(
            resolve_navigation("not a url"),
            Err(BrowserError::Malformed(_))
        ));
    }

    #[test]
    fn addresses_accepted_by_browsers_validate() {
        let ipv6 = validate("http://[::1]:8080/").expect("ipv6 literal");
        assert_eq!(ipv6.host, "[::1]");
        assert_eq!(ipv6.port, Some(8080));

        let idn = validate("https://münchen.de").expect("international domain");
        assert_eq!(idn.host, "xn--mnchen-3ya.de");

        assert_eq!(
            resolve_navigation("example.com/a b"),
            Ok(Some("https://example.com/a b".to_string()))
        );
        assert!(validate("https://exa$mple.com").is_ok());
    }

    #[test]
    fn ports_must_fit_in_sixteen_bits() {
        let parsed = validate("http://localhost:8080/app").expect("valid port");
        assert_eq!(parsed.port, Some(8080));
        assert_eq!(parsed.rest, "/app");
        assert_eq!(validate("https://example.com:443").expect("default").port, None);

        assert_eq!(
            validate("http://localhost:70000"),
            Err(BrowserError::Malformed(url::ParseError::InvalidPort))
        );
        assert_eq!(
            validate("http://localhost:http"),
            Err(BrowserError::Malformed(url::ParseError::InvalidPort))
        );
    }

    #[test]
    fn hosts_are_checked() {
        assert_eq!(validate("https://"), Err(BrowserError::MissingHost));
        let parsed = validate("https://user@Example.COM?q=1").expect("userinfo is skipped");
        assert_eq!(parsed.host, "example.com");
        assert_eq!(parsed.rest, "/?q=1");
    }

    #[test]
    fn only_web_schemes_validate() {
        assert_eq!(
            validate("ftp://files.example.com"),
            Err(BrowserError::UnsupportedScheme("ftp".to_string()))
        );
        assert_eq!(
            validate("example.com"),
            Err(BrowserError::Malformed(url::ParseError::RelativeUrlWithoutBase))
        );
    }
}
