//! Built-in commands.

pub mod records;
pub mod serve;

pub use records::{CreateCommand, DeleteCommand, GetCommand, ListCommand, UpdateCommand};
pub use serve::ServeCommand;

use crate::command::CommandRegistry;

/// Registers every built-in command into `registry`.
pub fn register_builtin_commands(registry: &mut CommandRegistry) {
    registry.register(Box::new(ServeCommand));
    registry.register(Box::new(ListCommand));
    registry.register(Box::new(GetCommand));
    registry.register(Box::new(CreateCommand));
    registry.register(Box::new(UpdateCommand));
    registry.register(Box::new(DeleteCommand));
}
