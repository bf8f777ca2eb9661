//! Command framework.
//!
//! [`ManagementCommand`] defines one subcommand; [`CommandRegistry`] collects
//! them, builds the clap parser and dispatches to the matching handler.
//!
//! ## Defining a Custom Command
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use leafy_cli::command::ManagementCommand;
//! use leafy_core::{LeafyError, Settings};
//!
//! struct WhoAmI;
//!
//! #[async_trait]
//! impl ManagementCommand for WhoAmI {
//!     fn name(&self) -> &'static str { "whoami" }
//!     fn help(&self) -> &'static str { "Print the configured brand" }
//!
//!     async fn handle(
//!         &self,
//!         _matches: &clap::ArgMatches,
//!         settings: &Settings,
//!     ) -> Result<(), LeafyError> {
//!         println!("{}", settings.brand_name);
//!         Ok(())
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use leafy_core::{LeafyError, Settings};

/// A subcommand of the `leafy-admin` utility.
#[async_trait]
pub trait ManagementCommand: Send + Sync {
    /// The name used to invoke the command.
    fn name(&self) -> &'static str;

    /// A short help description.
    fn help(&self) -> &'static str;

    /// Adds arguments to the clap subcommand. Defaults to none.
    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd
    }

    /// Runs the command.
    async fn handle(&self, matches: &clap::ArgMatches, settings: &Settings)
        -> Result<(), LeafyError>;
}

/// The registered commands, keyed by name.
pub struct CommandRegistry {
    commands: HashMap<&'static str, Box<dyn ManagementCommand>>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Registers a command, replacing any command of the same name.
    pub fn register(&mut self, command: Box<dyn ManagementCommand>) {
        self.commands.insert(command.name(), command);
    }

    pub fn get(&self, name: &str) -> Option<&dyn ManagementCommand> {
        self.commands.get(name).map(AsRef::as_ref)
    }

    /// Returns the registered command names, sorted.
    pub fn list_commands(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Builds the top-level parser with one subcommand per registered
    /// command and a global `--config FILE` option.
    pub fn build_cli(&self) -> clap::Command {
        let mut app = clap::Command::new("leafy-admin")
            .about("Leafy ILS administration utility")
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                clap::Arg::new("config")
                    .long("config")
                    .short('c')
                    .global(true)
                    .value_name("FILE")
                    .value_parser(clap::value_parser!(PathBuf))
                    .help("TOML settings file"),
            );

        let mut entries: Vec<_> = self.commands.iter().collect();
        entries.sort_by_key(|(name, _)| **name);
        for (name, cmd) in entries {
            let subcmd = clap::Command::new(*name).about(cmd.help());
            app = app.subcommand(cmd.add_arguments(subcmd));
        }

        app
    }

    /// Dispatches to the subcommand selected in `matches`.
    pub async fn execute(
        &self,
        matches: &clap::ArgMatches,
        settings: &Settings,
    ) -> Result<(), LeafyError> {
        let (name, sub_matches) = matches.subcommand().ok_or_else(|| {
            LeafyError::ConfigurationError("No subcommand specified".to_string())
        })?;

        let cmd = self.get(name).ok_or_else(|| {
            LeafyError::ConfigurationError(format!("Unknown command: {name}"))
        })?;

        tracing::debug!(command = name, "Running command");
        cmd.handle(sub_matches, settings).await
    }
}
