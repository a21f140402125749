use thiserror::Error;
use url::Url;

/// The only host family accepted by the sanitizer.
pub const INSTAGRAM_DOMAIN: &str = "instagram.com";

/// Why an input was rejected. Every variant is recoverable by the user
/// re-entering input; the caller maps variants to user-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// Input was empty or whitespace-only.
    #[error("empty input")]
    EmptyInput,
    /// Input could not be parsed as an absolute URL, even after prepending
    /// a scheme.
    #[error("not a parseable url")]
    InvalidUrl,
    /// The URL parsed but its host is not `instagram.com` or a subdomain.
    #[error("host is not an instagram domain")]
    NotInstagramHost,
}

/// Turn raw user text into a privacy-stripped Instagram link.
///
/// Trims whitespace, prepends `https://` when no HTTP scheme is present,
/// parses with the WHATWG parser, and checks the host against
/// [`INSTAGRAM_DOMAIN`]. On success the result is the URL's origin plus its
/// path; query, fragment, and credentials are dropped, which is where share
/// links carry tracking and referrer identifiers.
///
/// The function is pure and idempotent on its own output: feeding a cleaned
/// link back in returns it unchanged.
pub fn sanitize(raw: &str) -> Result<String, RejectReason> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RejectReason::EmptyInput);
    }

    let candidate = if has_http_scheme(trimmed) {
        trimmed.to_owned()
    } else {
        format!("https://{trimmed}")
    };

    let url = Url::parse(&candidate).map_err(|_| RejectReason::InvalidUrl)?;
    let host = url.host_str().ok_or(RejectReason::InvalidUrl)?;
    if !is_instagram_host(host) {
        return Err(RejectReason::NotInstagramHost);
    }

    // Origin keeps scheme, host, and any non-default port; everything after
    // the path is intentionally discarded.
    Ok(format!(
        "{}{}",
        url.origin().ascii_serialization(),
        url.path()
    ))
}

fn has_http_scheme(input: &str) -> bool {
    let lower = input.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Anchored host check: exact domain or dot-prefixed suffix. A plain
/// substring match would also accept hosts like `evilinstagram.com`.
fn is_instagram_host(host: &str) -> bool {
    host == INSTAGRAM_DOMAIN || host.ends_with(&format!(".{INSTAGRAM_DOMAIN}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchored_host_match() {
        assert!(is_instagram_host("instagram.com"));
        assert!(is_instagram_host("www.instagram.com"));
        assert!(!is_instagram_host("evilinstagram.com"));
        assert!(!is_instagram_host("instagram.com.evil.com"));
    }

    #[test]
    fn scheme_detection_is_case_insensitive() {
        assert!(has_http_scheme("HTTP://x"));
        assert!(has_http_scheme("HttpS://x"));
        assert!(!has_http_scheme("ftp://x"));
        assert!(!has_http_scheme("instagram.com"));
    }
}
