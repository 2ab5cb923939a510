//! Tonal - color inspection and tonal palettes
//!
//! Command line front end and preset catalogs on top of `tonal-color`.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod catalog;
pub mod error;
pub mod models;
pub mod report;

pub use tonal_color;
