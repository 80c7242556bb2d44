//! Shopping Cart Business Logic Helpers
//!
//! This module contains helper functions for cart arithmetic, cookie handling
//! and request verification.

use super::{error::CartError, models::CartAction, models::SESSION_COOKIE_NAME};
use crate::csrf::{CSRF_COOKIE_NAME, CSRF_HEADER_NAME};
use axum::http::{header, HeaderMap, HeaderValue};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Lines of a single cart: product identifier to quantity
pub type CartLines = BTreeMap<String, u32>;

/// Generates a fresh random identifier for sessions and tokens
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Applies `action` to the line for `product_id`.
///
/// # Behaviour
///
/// * `Add` creates the line if needed and increments it.
/// * `Remove` decrements the line; a line that reaches zero is dropped.
///   Removing a product that is not in the cart is a no-op.
pub fn apply_action(lines: &mut CartLines, product_id: &str, action: CartAction) {
    match action {
        CartAction::Add => {
            *lines.entry(product_id.to_string()).or_insert(0) += 1;
        }
        CartAction::Remove => {
            if let Some(quantity) = lines.get_mut(product_id) {
                *quantity = quantity.saturating_sub(1);
                if *quantity == 0 {
                    lines.remove(product_id);
                }
            }
        }
    }
}

/// Total number of units across all lines
pub fn cart_total(lines: &CartLines) -> u32 {
    lines.values().sum()
}

/// Looks up a cookie by exact name across all `Cookie` headers.
///
/// The value is percent-decoded; undecodable values are ignored.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(|value| value.into_owned())
}

/// Returns the session id from the request cookies, or mints a new one.
///
/// The flag is `true` when the id was just created and must be sent back.
pub fn resolve_session_id(headers: &HeaderMap) -> (String, bool) {
    match cookie_value(headers, SESSION_COOKIE_NAME) {
        Some(id) if !id.is_empty() => (id, false),
        _ => (new_id(), true),
    }
}

/// Double-submit check: the `X-CSRFToken` header must equal the `csrftoken`
/// cookie, and neither may be empty.
pub fn verify_csrf(headers: &HeaderMap) -> Result<(), CartError> {
    let cookie = cookie_value(headers, CSRF_COOKIE_NAME).ok_or(CartError::CsrfFailed)?;
    let header = headers
        .get(CSRF_HEADER_NAME)
        .and_then(|value| value.to_str().ok())
        .ok_or(CartError::CsrfFailed)?;

    if cookie.is_empty() || cookie != header {
        return Err(CartError::CsrfFailed);
    }
    Ok(())
}

/// Appends a `Set-Cookie` header scoped to the whole site
pub fn append_cookie(headers: &mut HeaderMap, name: &str, value: &str, http_only: bool) {
    let mut cookie = format!("{}={}; Path=/; SameSite=Lax", name, value);
    if http_only {
        cookie.push_str("; HttpOnly");
    }

    match HeaderValue::from_str(&cookie) {
        Ok(value) => {
            headers.append(header::SET_COOKIE, value);
        }
        Err(e) => tracing::warn!(cookie = name, "unable to encode cookie: {e}"),
    }
}
