//! # leafy-cli
//!
//! The `leafy-admin` command-line utility.
//!
//! - **serve** - runs the dashboard router on the configured address
//! - **list / get / create / update / delete** - drive a catalog CRUD from the
//!   shell and print the result as pretty JSON
//!
//! Commands implement [`ManagementCommand`] and are dispatched by a
//! [`CommandRegistry`].
//!
//! ## Quick Start
//!
//! ```rust
//! use leafy_cli::command::CommandRegistry;
//! use leafy_cli::commands::register_builtin_commands;
//!
//! let mut registry = CommandRegistry::new();
//! register_builtin_commands(&mut registry);
//!
//! let names = registry.list_commands();
//! assert!(names.contains(&"serve"));
//! assert!(names.contains(&"list"));
//! ```

// - result_large_err: LeafyError is the workspace-wide error type
// - unused_async: command handlers keep one async signature
#![allow(clippy::result_large_err)]
#![allow(clippy::unused_async)]

pub mod command;
pub mod commands;

use std::path::Path;

use leafy_core::{settings_loader, LeafyResult, Settings};

pub use command::{CommandRegistry, ManagementCommand};

/// Loads settings from `config` (TOML) when given, otherwise from defaults;
/// `LEAFY_*` environment variables apply in both cases.
pub fn load_settings(config: Option<&Path>) -> LeafyResult<Settings> {
    match config {
        Some(path) => settings_loader::from_toml_file_with_env(path),
        None => Ok(settings_loader::from_env()),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_load_settings_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "brand_name = \"Médiathèque\"\nitems_per_page = 20").unwrap();
        let settings = load_settings(Some(file.path())).unwrap();
        assert_eq!(settings.brand_name, "Médiathèque");
        assert_eq!(settings.items_per_page, 20);
    }

    #[test]
    fn test_load_settings_missing_file() {
        assert!(load_settings(Some(Path::new("/nonexistent/leafy.toml"))).is_err());
    }
}
