//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to the shopping cart
//! business domain.

use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// Cookie that identifies the visitor's cart
pub const SESSION_COOKIE_NAME: &str = "cart_session";
/// Status reported by a successful update
pub const STATUS_SUCCESS: &str = "success";

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Mutation requested for a cart line
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CartAction {
    /// Increase the quantity by one
    Add,
    /// Decrease the quantity by one, dropping the line at zero
    Remove,
}

/// Body of `POST /update_item`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemInput {
    /// Product the action applies to
    pub product_id: String,

    /// Action to apply
    pub action: CartAction,
}

/// Response for a successful cart update
#[derive(Debug, Serialize)]
pub struct UpdateItemResponse {
    /// Status of the operation
    pub status: String,

    /// Total number of units in the cart after the update
    pub cart_total: u32,
}

/// A single line of a cart
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: String,
    pub quantity: u32,
}

/// Response for `GET /cart`
#[derive(Debug, Serialize)]
pub struct CartView {
    /// Cart identifier
    #[serde(rename = "cartId")]
    pub cart_id: String,

    /// Lines ordered by product identifier
    pub items: Vec<CartLine>,

    /// Total number of units in the cart
    pub cart_total: u32,
}
