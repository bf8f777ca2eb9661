//! # leafy-admin
//!
//! The administration side of Leafy: declarative CRUD definitions wired to
//! the catalog REST API through [`leafy_client::EntityAdapter`].
//!
//! A UI asks a [`CrudDefinition`] to answer an [`Operation`]. Read operations
//! go to its [`StateProvider`], which returns a [`PaginatedResults`] envelope
//! or a single entity; write operations go to its [`StateProcessor`]. The
//! adapter-backed implementations of both live in [`binding`]. The
//! [`Dashboard`] groups CRUDs and serves them as a JSON router.

// - result_large_err: LeafyError is the workspace-wide error type
// - doc_markdown: field names in docs read better without backticks
#![allow(clippy::result_large_err)]
#![allow(clippy::doc_markdown)]

pub mod actions;
pub mod binding;
pub mod catalog;
pub mod crud;
pub mod dashboard;
pub mod display;
pub mod fields;
pub mod operation;
pub mod pagination;
pub mod state;

pub use actions::{ActionDescriptor, ActionKind};
pub use binding::{AdapterStateProcessor, AdapterStateProvider, ListOptions};
pub use crud::{CrudDefinition, CrudLabel, CrudSchema};
pub use dashboard::Dashboard;
pub use display::DisplayOptions;
pub use fields::{FieldDescriptor, FieldKind, FieldOptions};
pub use operation::{Operation, RequestParameters};
pub use pagination::PaginatedResults;
pub use state::{ProviderResult, StateProcessor, StateProvider};
