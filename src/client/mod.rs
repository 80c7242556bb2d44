//! Cart Update Client Module
//!
//! This module contains the browser-side half of a cart mutation, including:
//! - The mutation request model (product, action, target URL)
//! - The notification port used to report outcomes
//! - The client that POSTs the mutation with the CSRF token attached

pub mod error;
pub mod models;
pub mod notify;
pub mod updater;

// Re-export commonly used types for convenience
pub use error::UpdateError;
pub use models::CartMutationRequest;
pub use notify::{Notifier, Severity, TerminalNotifier};
pub use updater::CartUpdateClient;
