//! DPS Tools - Device provisioning helpers.
//!
//! This crate provides two independent utilities:
//!
//! - **sas**: Shared Access Signature token generation (HMAC-SHA256 over a
//!   resource URI and expiry)
//! - **format**: Transcription of `.crt`/`.pem`/`.key` files into quoted C
//!   string literals
//! - **config**: Token generator defaults with environment variable support
//! - **bootstrap**: Tracing initialization utilities
//!
//! # Features
//!
//! - `sas` - Token generation (enabled by default)
//! - `format` - Certificate/key formatting (enabled by default)
//! - `config` - Configuration utilities (enabled by default)
//! - `bootstrap` - Tracing setup (enabled by default)
//! - `json` - `serde` serialization of [`SasToken`]
//! - `cli` - The `sas-token` and `format-cert` binaries (enabled by default)
//! - `full` - All features
//!
//! # Example
//!
//! ```rust,ignore
//! use dps_tools::{generate_sas_token, registration_uri, TokenConfig};
//!
//! fn main() -> dps_tools::Result<()> {
//!     let config = TokenConfig::from_env();
//!     let uri = registration_uri("0ne0001234", "device-01");
//!     let token = generate_sas_token(
//!         &uri,
//!         config.require_key()?,
//!         config.policy_name.as_deref(),
//!         config.expiry_secs,
//!     )?;
//!     println!("{token}");
//!     Ok(())
//! }
//! ```

mod error;

#[cfg(feature = "sas")]
pub mod sas;

#[cfg(feature = "format")]
pub mod format;

#[cfg(feature = "config")]
pub mod config;

#[cfg(feature = "bootstrap")]
pub mod bootstrap;

pub use error::{Error, Result};

// Re-exports for convenience
#[cfg(feature = "sas")]
pub use sas::{generate_sas_token, generate_signing_key, registration_uri, SasToken};

#[cfg(feature = "format")]
pub use format::{Formatter, Summary};

#[cfg(feature = "config")]
pub use config::TokenConfig;

#[cfg(feature = "bootstrap")]
pub use bootstrap::{default_filter, init_tracing};
