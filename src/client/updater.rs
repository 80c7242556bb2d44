//! Cart Update Client
//!
//! Sends a single cart mutation to the server and reports the outcome through
//! the injected [`Notifier`]. There is no retry, timeout, or cancellation:
//! every call issues exactly one request and runs to completion.

use super::{
    error::UpdateError,
    models::{CartMutationRequest, SUCCESS_MESSAGE},
    notify::{Notifier, Severity},
};
use crate::csrf::{AntiForgeryToken, CSRF_HEADER_NAME};
use crate::observability::error_chain;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Client that submits cart mutations on behalf of the user.
///
/// The anti-forgery token is captured at construction time and reused for
/// every request.
pub struct CartUpdateClient {
    http: reqwest::Client,
    token: AntiForgeryToken,
    notifier: Arc<dyn Notifier>,
}

impl CartUpdateClient {
    /// Creates a client with a default HTTP client
    pub fn new(token: AntiForgeryToken, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_http_client(reqwest::Client::new(), token, notifier)
    }

    /// Creates a client around an existing `reqwest::Client`
    pub fn with_http_client(
        http: reqwest::Client,
        token: AntiForgeryToken,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            http,
            token,
            notifier,
        }
    }

    /// Handles one activation of the "add to cart" control.
    ///
    /// The three values come from the activated control; the token is the one
    /// the client was built with.
    pub async fn activate(
        &self,
        product_id: impl Into<String>,
        action: impl Into<String>,
        target_url: impl Into<String>,
    ) -> Result<Value, UpdateError> {
        let request = CartMutationRequest::new(product_id, action, target_url);
        self.submit(&request).await
    }

    /// Submits `request` and reports the outcome.
    ///
    /// # Behaviour
    ///
    /// * 2xx: a user notification is sent first, then the body is parsed as
    ///   JSON, logged, and returned.
    /// * Any other status: a user notification carrying the status code is
    ///   sent and the body is left unread.
    /// * Transport or JSON failures: a diagnostic notification only.
    ///
    /// The returned error has already been reported; callers are free to
    /// ignore it.
    pub async fn submit(&self, request: &CartMutationRequest) -> Result<Value, UpdateError> {
        debug!(
            product_id = %request.product_id,
            action = %request.action,
            url = %request.target_url,
            "submitting cart mutation"
        );

        let response = self
            .http
            .post(&request.target_url)
            .header(CSRF_HEADER_NAME, self.token.as_str())
            .json(request)
            .send()
            .await
            .map_err(|e| self.report(UpdateError::Transport(e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), url = %request.target_url, "cart update rejected");
            return Err(self.report(UpdateError::Rejected {
                status: status.as_u16(),
            }));
        }

        self.notifier.notify(Severity::User, SUCCESS_MESSAGE);

        let body = response
            .bytes()
            .await
            .map_err(|e| self.report(UpdateError::Transport(e)))?;
        let data: Value =
            serde_json::from_slice(&body).map_err(|e| self.report(UpdateError::Decode(e)))?;

        info!(%data, "cart updated");
        Ok(data)
    }

    /// Routes `error` to the channel matching its severity and hands it back
    fn report(&self, error: UpdateError) -> UpdateError {
        let message = match &error {
            UpdateError::Rejected { status } => format!("Server error: {}", status),
            other => format!("Cart update failed: {}", error_chain(other)),
        };
        self.notifier.notify(error.severity(), &message);
        error
    }
}
