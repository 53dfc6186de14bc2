//! Cryptographically random tokens for session keys and API tokens.
//!
//! A [`Token`] is generated from the operating system's random source and can be moved between
//! raw bytes, unpadded URL-safe base64 text and database scalar values. It also plugs into
//! `serde` (text for human readable formats, bytes otherwise) and `sqlx`.

pub mod config;
pub use config::{Config, ConfigError, ConfigResult};

pub mod error;
pub mod token;
pub use token::{LoadScalar, ScalarValue, ToScalar, Token, TokenError, TokenResult};

static APPLICATION_NAME: &str = "urltoken";

/// Installs the global tracing subscriber, reading `RUST_LOG` (also from `.env`).
pub fn init_tracing() {
    use tracing_error::ErrorLayer;
    use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

    // load .env file for RUST_LOG etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .with(ErrorLayer::default())
        .init();

    tracing::debug!("tracing initialized.");
}
