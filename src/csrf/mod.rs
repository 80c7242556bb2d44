//! Anti-forgery (CSRF) Token Module
//!
//! This module contains everything needed to obtain the CSRF token that
//! guards cart mutations:
//! - Cookie string parsing (`read_cookie`)
//! - The token value type and the cookie/header names it travels under

pub mod cookie;
pub mod token;

// Re-export commonly used types and functions
pub use cookie::read_cookie;
pub use token::{AntiForgeryToken, CSRF_COOKIE_NAME, CSRF_HEADER_NAME};
