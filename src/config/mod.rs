//! Application configuration.
//!
//! Layers, lowest to highest precedence: TOML file, the
//! `STOREFRONT_BACKEND_URL` environment variable, and the `--backend-url`
//! command line flag (applied by the binary).

mod loader;
mod types;

pub use loader::{ConfigError, BACKEND_URL_ENV};
pub use types::{BackendConfig, Config, UiConfig};
