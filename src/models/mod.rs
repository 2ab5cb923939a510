pub mod config;

pub use config::{CatalogConfig, DEFAULT_VARIANT};
