//! # leafy-client
//!
//! Typed access to the Leafy ILS catalog REST API.
//!
//! - [`entity`] - The [`Entity`] trait every catalog record implements
//! - [`adapter`] - [`EntityAdapter`], one HTTP round trip per CRUD operation
//! - [`models`] - Catalog records: books, families, members, circulations
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use leafy_client::{EntityAdapter, models::Book};
//!
//! # async fn demo() -> leafy_core::LeafyResult<()> {
//! let http = reqwest::Client::new();
//! let books: EntityAdapter<Book> = EntityAdapter::new(http, "http://localhost:8000", "books")?;
//! let first_page = books.list(0, 100).await?;
//! let book = books.get(&1).await?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod entity;
pub mod models;

pub use adapter::EntityAdapter;
pub use entity::Entity;
