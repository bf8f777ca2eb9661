use std::path::PathBuf;

use leafy_cli::command::CommandRegistry;
use leafy_cli::commands::register_builtin_commands;
use leafy_cli::load_settings;
use leafy_core::logging::setup_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut registry = CommandRegistry::new();
    register_builtin_commands(&mut registry);

    let matches = registry.build_cli().get_matches();
    let config = matches.get_one::<PathBuf>("config").map(PathBuf::as_path);
    let settings = load_settings(config)?;
    setup_logging(&settings);

    registry.execute(&matches, &settings).await?;
    Ok(())
}
