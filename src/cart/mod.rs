//! Shopping Cart Domain Module
//!
//! This module contains the server side of a cart mutation, including:
//! - Domain models (actions, update payloads, cart views)
//! - Business logic helpers (quantity arithmetic, cookies, CSRF check)
//! - Application state management
//! - REST API handlers

pub mod error;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use error::CartError;
pub use handlers::routes;
pub use state::{AppState, SharedState};
