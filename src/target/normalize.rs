/// Scheme assumed when a target does not carry one
pub const DEFAULT_SCHEME: &str = "http";

/// Returns true if `raw` starts with a scheme token followed by `://`
///
/// A scheme token is an ASCII letter followed by any number of ASCII
/// letters, digits, `+`, `-` or `.`.
pub fn has_scheme(raw: &str) -> bool {
    let Some((scheme, _)) = raw.split_once("://") else {
        return false;
    };

    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Prefixes the default scheme unless `raw` already has one
///
/// # Examples
///
/// ```
/// use urlhash::target::with_default_scheme;
///
/// assert_eq!(with_default_scheme("example.com/path"), "http://example.com/path");
/// assert_eq!(with_default_scheme("https://example.com"), "https://example.com");
/// ```
pub fn with_default_scheme(raw: &str) -> String {
    if has_scheme(raw) {
        raw.to_string()
    } else {
        format!("{}://{}", DEFAULT_SCHEME, raw)
    }
}
