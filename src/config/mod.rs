//! Configuration loading.
//!
//! Settings live in a TOML file; every field has a default so an absent or
//! partial file is fine.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CatalogConfig, Config, SearchConfig};
