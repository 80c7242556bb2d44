//! Cart Update Client Models
//!
//! Data structures describing a single cart mutation as sent by the client.

use serde::Serialize;

// =============================================================================
// Constants
// =============================================================================

/// Message shown to the user when the server accepts a mutation
pub const SUCCESS_MESSAGE: &str = "Added to cart successfully!";

// =============================================================================
// Request Models
// =============================================================================

/// One cart mutation, built fresh for every activation.
///
/// Only `productId` and `action` are serialized into the request body; the
/// target URL addresses the request.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartMutationRequest {
    /// Identifier of the product to mutate
    pub product_id: String,

    /// Action understood by the server (e.g. "add", "remove")
    pub action: String,

    /// Endpoint the mutation is POSTed to
    #[serde(skip)]
    pub target_url: String,
}

impl CartMutationRequest {
    /// Creates a new mutation request
    pub fn new(
        product_id: impl Into<String>,
        action: impl Into<String>,
        target_url: impl Into<String>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            action: action.into(),
            target_url: target_url.into(),
        }
    }
}
