//! Fetch targets
//!
//! A [`Target`] is one URL string supplied by the caller. The original string
//! is kept for reporting; the request URL carries the default scheme when the
//! caller left it out.

mod normalize;

pub use normalize::{has_scheme, with_default_scheme, DEFAULT_SCHEME};

use std::fmt;

/// One URL to fetch, immutable once created
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    original: String,
    request_url: String,
}

impl Target {
    /// Creates a target from a caller-supplied string
    ///
    /// # Examples
    ///
    /// ```
    /// use urlhash::Target;
    ///
    /// let target = Target::new("example.com/path");
    /// assert_eq!(target.original(), "example.com/path");
    /// assert_eq!(target.request_url(), "http://example.com/path");
    /// ```
    pub fn new(raw: impl Into<String>) -> Self {
        let original = raw.into();
        let request_url = with_default_scheme(&original);
        Self {
            original,
            request_url,
        }
    }

    /// The string exactly as the caller supplied it
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The URL the request is issued against
    pub fn request_url(&self) -> &str {
        &self.request_url
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl From<&str> for Target {
    fn from(raw: &str) -> Self {
        Target::new(raw)
    }
}

impl From<String> for Target {
    fn from(raw: String) -> Self {
        Target::new(raw)
    }
}
