//! # leafy-core
//!
//! Core types, settings, and error types for the Leafy admin back-office.
//! This crate has no HTTP dependencies and provides the foundation for the
//! client and admin crates.
//!
//! ## Modules
//!
//! - [`error`] - The workspace error enum and result alias
//! - [`settings`] - Back-office configuration with defaults
//! - [`settings_loader`] - TOML and environment loading for [`Settings`]
//! - [`logging`] - Tracing-based logging integration
//! - [`utils`] - Text helpers used when preparing rows for display

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;
pub mod utils;

// Re-export the most commonly used types at the crate root.
pub use error::{LeafyError, LeafyResult};
pub use settings::Settings;
