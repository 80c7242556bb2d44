//! Cart Update Library
//!
//! This library provides a client that submits shopping cart mutations guarded
//! by a CSRF token, together with the cart service it talks to.

// Domain modules
pub mod cart;
pub mod client;
pub mod csrf;

// Infrastructure
pub mod app;
pub mod config;
pub mod observability;
pub mod router;
