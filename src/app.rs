//! Command runners for the `cart-update` binary.

use crate::{
    cart::AppState,
    client::{CartUpdateClient, TerminalNotifier, UpdateError},
    config::{ServeArgs, UpdateArgs},
    csrf::AntiForgeryToken,
    router::create_app_router,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("no `csrftoken` cookie in the supplied cookies")]
    MissingToken,

    #[error("failed to bind {addr}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error")]
    Serve(#[source] std::io::Error),

    #[error("cookie string cannot be sent as a header")]
    InvalidCookies(#[source] reqwest::header::InvalidHeaderValue),

    #[error("failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),

    #[error(transparent)]
    Update(#[from] UpdateError),
}

/// Runs the cart service until Ctrl+C is received
pub async fn serve(args: &ServeArgs) -> Result<(), AppError> {
    let state = Arc::new(AppState::new(args.products.iter().cloned()));
    let app = create_app_router(state);

    let addr = args.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| AppError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Serve)
}

/// Performs one cart update activation.
///
/// The outcome has already been shown to the user when this returns; the
/// error only drives the process exit code.
pub async fn update(args: &UpdateArgs) -> Result<(), AppError> {
    let token = AntiForgeryToken::from_cookies(&args.cookies).ok_or(AppError::MissingToken)?;
    let http = cookie_client(&args.cookies)?;
    let client = CartUpdateClient::with_http_client(http, token, Arc::new(TerminalNotifier));

    client
        .activate(args.product.as_str(), args.action.as_str(), args.url.as_str())
        .await?;
    Ok(())
}

/// HTTP client that sends `cookies` with every request, as a same-origin
/// page would, so the server can match the token cookie against the header.
fn cookie_client(cookies: &str) -> Result<reqwest::Client, AppError> {
    let mut headers = reqwest::header::HeaderMap::new();
    let value =
        reqwest::header::HeaderValue::from_str(cookies).map_err(AppError::InvalidCookies)?;
    headers.insert(reqwest::header::COOKIE, value);

    reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .map_err(AppError::HttpClient)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        // Without a signal handler the server runs until killed
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
