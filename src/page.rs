//! Helpers for the page URLs stored in a lastpage tag.

/// Prepends `http://` when `url` does not already start with `http`.
pub fn normalize_url(url: &str) -> String {
    if looks_like_url(url) {
        url.to_string()
    } else {
        format!("http://{url}")
    }
}

/// Whether a stored value can be handed to a browser.
pub fn looks_like_url(value: &str) -> bool {
    value.starts_with("http")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url_adds_scheme() {
        assert_eq!(normalize_url("example.com"), "http://example.com");
    }

    #[test]
    fn test_normalize_url_keeps_http_and_https() {
        assert_eq!(normalize_url("http://a.org/x"), "http://a.org/x");
        assert_eq!(normalize_url("https://a.org/x"), "https://a.org/x");
    }

    #[test]
    fn test_looks_like_url() {
        assert!(looks_like_url("https://example.com"));
        assert!(!looks_like_url("notaurl"));
        assert!(!looks_like_url("ftp://example.com"));
    }
}
