//! Shopping Cart State Management
//!
//! This module manages the application state for shopping carts: the
//! per-session cart storage and the catalog of products that may be added.

use super::{
    error::CartError,
    helpers::{apply_action, cart_total, CartLines},
    models::{CartAction, CartLine},
};
use dashmap::DashMap;
use std::{collections::HashSet, sync::Arc};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state containing carts and the product catalog
pub struct AppState {
    /// In-memory storage for carts, keyed by session id.
    /// DashMap allows concurrent access without external Mutexes.
    pub carts: DashMap<String, CartLines>,

    /// Identifiers of products that can be put in a cart
    pub products: HashSet<String>,
}

impl AppState {
    /// Creates a new AppState with empty carts and the given catalog
    pub fn new<I, S>(products: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let products: HashSet<String> = products.into_iter().map(Into::into).collect();
        tracing::info!(products = products.len(), "cart catalog loaded");

        Self {
            carts: DashMap::new(),
            products,
        }
    }

    /// Applies `action` to `product_id` in the cart of `cart_id` and returns
    /// the new cart total.
    ///
    /// Only `Add` creates a cart, and a cart whose last line is removed is
    /// dropped from the store, so only carts holding items are kept. Carts are
    /// never expired otherwise; the store lives as long as the process.
    pub fn update_item(
        &self,
        cart_id: &str,
        product_id: &str,
        action: CartAction,
    ) -> Result<u32, CartError> {
        if !self.products.contains(product_id) {
            return Err(CartError::ProductNotFound);
        }

        let total = {
            let mut lines = match action {
                CartAction::Add => self.carts.entry(cart_id.to_string()).or_default(),
                CartAction::Remove => match self.carts.get_mut(cart_id) {
                    Some(lines) => lines,
                    None => return Ok(0),
                },
            };
            apply_action(&mut lines, product_id, action);
            cart_total(&lines)
        };

        // The entry guard must be released before removing from the map
        if total == 0 {
            self.carts.remove_if(cart_id, |_, lines| lines.is_empty());
        }
        Ok(total)
    }

    /// Current lines of a cart, ordered by product id; empty if unknown
    pub fn lines(&self, cart_id: &str) -> Vec<CartLine> {
        self.carts
            .get(cart_id)
            .map(|lines| {
                lines
                    .iter()
                    .map(|(product_id, quantity)| CartLine {
                        product_id: product_id.clone(),
                        quantity: *quantity,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}
