//! # leafy
//!
//! Administration back-office for the Leafy ILS library catalog.
//!
//! This is the meta-crate that re-exports the sub-crates. Depend on `leafy`
//! to get everything, or on individual crates for finer-grained control.
//!
//! ```rust,no_run
//! use leafy::admin::catalog::catalog_dashboard;
//! use leafy::core::{logging::setup_logging, settings_loader};
//!
//! # async fn run() -> Result<(), leafy::core::LeafyError> {
//! let settings = settings_loader::from_env();
//! setup_logging(&settings);
//! let dashboard = catalog_dashboard(&leafy::reqwest::Client::new(), &settings)?;
//! let listener = leafy::tokio::net::TcpListener::bind(&settings.listen_addr).await?;
//! leafy::axum::serve(listener, dashboard.into_axum_router()).await?;
//! # Ok(())
//! # }
//! ```

/// Error type, settings, logging and text helpers.
pub use leafy_core as core;

/// Entity trait, catalog models and the REST adapter.
pub use leafy_client as client;

/// CRUD bindings, field/action configuration and the dashboard router.
#[cfg(feature = "admin")]
pub use leafy_admin as admin;

/// The `leafy-admin` command framework and built-in commands.
#[cfg(feature = "cli")]
pub use leafy_cli as cli;

pub use async_trait;
pub use axum;
pub use chrono;
pub use reqwest;
pub use serde;
pub use serde_json;
pub use tokio;
pub use tracing;

pub use leafy_client::{Entity, EntityAdapter};
pub use leafy_core::{LeafyError, LeafyResult, Settings};
