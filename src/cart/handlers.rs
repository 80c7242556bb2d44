//! REST API handlers for shopping cart operations
//!
//! This module implements the HTTP endpoint the cart update client talks to,
//! plus a read-only view of the current cart.

use super::{error::CartError, helpers::*, models::*, state::SharedState};
use crate::csrf::CSRF_COOKIE_NAME;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/update_item", post(update_item))
        .route("/update_item/", post(update_item)) // Trailing slash safety
        .route("/cart", get(view_cart))
}

/// Endpoint: POST /update_item
/// Adds or removes one unit of a product in the visitor's cart.
async fn update_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Result<Json<UpdateItemInput>, JsonRejection>,
) -> Result<Response, CartError> {
    verify_csrf(&headers)?;

    let Json(payload) = body.map_err(|e| {
        tracing::warn!("rejected cart update body: {}", e.body_text());
        CartError::InvalidRequest
    })?;

    let (session_id, is_new_session) = resolve_session_id(&headers);
    let cart_total = state.update_item(&session_id, &payload.product_id, payload.action)?;

    tracing::info!(
        cart_id = %session_id,
        product_id = %payload.product_id,
        action = ?payload.action,
        cart_total,
        "cart item updated"
    );

    let mut response = Json(UpdateItemResponse {
        status: STATUS_SUCCESS.to_string(),
        cart_total,
    })
    .into_response();

    if is_new_session {
        append_cookie(response.headers_mut(), SESSION_COOKIE_NAME, &session_id, true);
    }

    Ok(response)
}

/// Endpoint: GET /cart
/// Returns the visitor's cart and issues a CSRF cookie when none is present.
async fn view_cart(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);
    let items = state.lines(&session_id);
    let cart_total = items.iter().map(|line| line.quantity).sum();

    let mut response = Json(CartView {
        cart_id: session_id.clone(),
        items,
        cart_total,
    })
    .into_response();

    if is_new_session {
        append_cookie(response.headers_mut(), SESSION_COOKIE_NAME, &session_id, true);
    }

    // The token cookie must stay readable by page scripts, so no HttpOnly
    if cookie_value(&headers, CSRF_COOKIE_NAME).is_none() {
        append_cookie(response.headers_mut(), CSRF_COOKIE_NAME, &new_id(), false);
    }

    response
}
