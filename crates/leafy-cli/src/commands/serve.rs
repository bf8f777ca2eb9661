//! The `serve` command.
//!
//! Binds the catalog dashboard router to `listen_addr` (or `--addr`) and
//! serves it until the process is interrupted.

use async_trait::async_trait;
use leafy_admin::catalog::catalog_dashboard;
use leafy_core::{LeafyError, Settings};

use crate::command::ManagementCommand;

pub struct ServeCommand;

#[async_trait]
impl ManagementCommand for ServeCommand {
    fn name(&self) -> &'static str {
        "serve"
    }

    fn help(&self) -> &'static str {
        "Serves the admin dashboard"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            clap::Arg::new("addr")
                .long("addr")
                .value_name("HOST:PORT")
                .help("Address to bind to (defaults to listen_addr)"),
        )
    }

    async fn handle(
        &self,
        matches: &clap::ArgMatches,
        settings: &Settings,
    ) -> Result<(), LeafyError> {
        let addr = matches
            .get_one::<String>("addr")
            .map_or(settings.listen_addr.as_str(), String::as_str);

        let dashboard = catalog_dashboard(&reqwest::Client::new(), settings)?;
        let router = dashboard.into_axum_router();

        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(
            "Serving {} at http://{addr}{} (backend {})",
            settings.brand_name,
            settings.root_url,
            settings.api_base_url
        );
        axum::serve(listener, router).await?;
        Ok(())
    }
}
