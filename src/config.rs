//! Command line and environment configuration

use clap::{Args, Parser, Subcommand};

/// Cart update client and cart service
#[derive(Debug, Parser)]
#[command(name = "cart-update", about = "Shopping cart update client and service", long_about = None)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the cart service
    Serve(ServeArgs),

    /// Submit one cart mutation, as if the "add to cart" button was clicked
    Update(UpdateArgs),
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Server host address
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port
    #[arg(short, long, env = "SERVER_PORT", default_value = "8000")]
    pub port: u16,

    /// Identifiers of the products that can be added to a cart
    #[arg(long, env = "CART_PRODUCTS", value_delimiter = ',', default_value = "1,2,3")]
    pub products: Vec<String>,
}

impl ServeArgs {
    /// Get the socket address for binding
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Product identifier
    #[arg(long)]
    pub product: String,

    /// Action to request (e.g. add, remove)
    #[arg(long, default_value = "add")]
    pub action: String,

    /// Endpoint the mutation is POSTed to
    #[arg(long, env = "CART_UPDATE_URL", default_value = "http://127.0.0.1:8000/update_item/")]
    pub url: String,

    /// Cookie string holding the `csrftoken` cookie (e.g. "csrftoken=abc; sessionid=x")
    #[arg(long, env = "CART_COOKIES", hide_env_values = true)]
    pub cookies: String,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
