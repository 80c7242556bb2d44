use cart_update::app::{self, AppError};
use cart_update::config::{Command, Config};
use cart_update::observability;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration from .env and CLI arguments
    let config = Config::load().unwrap_or_else(|e| e.exit());

    if let Err(e) = observability::init(&config.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    let result = match &config.command {
        Command::Serve(args) => app::serve(args).await,
        Command::Update(args) => app::update(args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        // Already reported through the notifier
        Err(AppError::Update(_)) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{}", observability::error_chain(&e));
            ExitCode::FAILURE
        }
    }
}
