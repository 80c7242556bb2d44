//! Anti-forgery Token Type
//!
//! The token is read once from the cookie string during initialization and
//! handed to whoever needs to echo it back; it is never re-read or rotated.

use super::cookie::read_cookie;
use std::fmt;

/// Name of the cookie that carries the CSRF token
pub const CSRF_COOKIE_NAME: &str = "csrftoken";
/// Name of the request header the token is echoed back in
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";

/// A server-issued anti-forgery token.
///
/// `Debug` is redacted so the value never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct AntiForgeryToken(String);

impl AntiForgeryToken {
    /// Wraps an already-known token value
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Reads the token from a cookie string using the `csrftoken` cookie.
    ///
    /// Returns `None` if the cookie string is empty or no entry matches.
    pub fn from_cookies(cookies: &str) -> Option<Self> {
        read_cookie(cookies, CSRF_COOKIE_NAME).map(Self)
    }

    /// The raw token value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AntiForgeryToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AntiForgeryToken(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cookies_reads_csrftoken() {
        let token = AntiForgeryToken::from_cookies("sessionid=1; csrftoken=abc%3Ddef").unwrap();
        assert_eq!(token.as_str(), "abc=def");
    }

    #[test]
    fn test_from_cookies_without_token() {
        assert!(AntiForgeryToken::from_cookies("sessionid=1").is_none());
        assert!(AntiForgeryToken::from_cookies("").is_none());
    }

    #[test]
    fn test_debug_is_redacted() {
        let token = AntiForgeryToken::new("secret");
        assert!(!format!("{:?}", token).contains("secret"));
    }
}
