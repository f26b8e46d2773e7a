//! Subscription URL validation.
//!
//! # Responsibilities
//! - Undo an extra layer of percent-encoding on the query value
//! - Require an absolute URL with scheme and host
//! - Restrict schemes to http, https, ftp and ftps
//! - Match the whole string against a strict host/port/path pattern
//!
//! # Design Decisions
//! - Both the structural parse and the pattern must agree
//! - Hosts: dotted domain names, localhost, IPv4 literals, bracketed IPv6 literals

use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;
use thiserror::Error;
use url::Url;

/// Schemes a subscription may be fetched over.
pub const ALLOWED_SCHEMES: [&str; 4] = ["http", "https", "ftp", "ftps"];

static SUBSCRIPTION_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:http|ftp)s?://",
        r"(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+(?:[A-Z]{2,6}\.?|[A-Z0-9-]{2,}\.?)",
        r"|localhost",
        r"|\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}",
        r"|\[?[A-F0-9]*:[A-F0-9:]+\]?)",
        r"(?::\d+)?",
        r"(?:/?|[/?]\S+)$",
    ))
    .expect("subscription URL pattern is valid")
});

/// The subscription URL was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid subscription URL")]
pub struct InvalidUrl {
    /// The decoded input that failed validation.
    pub input: String,
}

/// Percent-decode `raw` once more, then validate it.
pub fn decode_subscription_url(raw: &str) -> Result<Url, InvalidUrl> {
    let decoded = percent_decode_str(raw).decode_utf8_lossy();
    validate_subscription_url(&decoded)
}

/// Validate an already-decoded subscription URL.
pub fn validate_subscription_url(input: &str) -> Result<Url, InvalidUrl> {
    let invalid = || InvalidUrl {
        input: input.to_string(),
    };

    let url = Url::parse(input).map_err(|_| invalid())?;
    let has_host = url.host_str().is_some_and(|host| !host.is_empty());

    if !has_host || !ALLOWED_SCHEMES.contains(&url.scheme()) || !SUBSCRIPTION_URL.is_match(input)
    {
        return Err(invalid());
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_subscription_urls() {
        for input in [
            "https://sub.example.com/api/v1/client/subscribe?token=abc123",
            "http://example.com",
            "http://example.com/",
            "https://EXAMPLE.COM/Path",
            "http://localhost:8080/sub.yaml",
            "http://127.0.0.1:25500/sub?target=clash",
            "http://[::1]:8080/sub",
            "ftp://files.example.org/clash.yaml",
            "ftps://files.example.org:990/clash.yaml",
        ] {
            assert!(validate_subscription_url(input).is_ok(), "rejected {input}");
        }
    }

    #[test]
    fn test_rejects_bad_urls() {
        for input in [
            "not-a-url",
            "",
            "example.com/sub",
            "file:///etc/passwd",
            "gopher://example.com/",
            "javascript:alert(1)",
            "http://",
            "http://exa mple.com/",
            "http://example.com/has space",
            "http://single/",
            "https://example.com:port/",
        ] {
            assert!(validate_subscription_url(input).is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn test_double_encoded_input_is_decoded() {
        let url = decode_subscription_url("https%3A%2F%2Fsub.example.com%2Flink%3Ftoken%3Dabc")
            .unwrap();
        assert_eq!(url.as_str(), "https://sub.example.com/link?token=abc");
    }

    #[test]
    fn test_error_carries_decoded_input() {
        let err = decode_subscription_url("not%2Da%2Durl").unwrap_err();
        assert_eq!(err.input, "not-a-url");
        assert_eq!(err.to_string(), "Invalid subscription URL");
    }
}
