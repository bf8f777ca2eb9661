//! Record commands: `list`, `get`, `create`, `update` and `delete`.
//!
//! Each command resolves a catalog CRUD by name, runs one operation through
//! the same provider/processor the dashboard uses, and prints the outcome as
//! pretty JSON.

use async_trait::async_trait;
use leafy_admin::catalog::catalog_dashboard;
use leafy_admin::{Dashboard, RequestParameters};
use leafy_core::{LeafyError, LeafyResult, Settings};
use serde_json::{json, Value};

use crate::command::ManagementCommand;

fn crud_arg() -> clap::Arg {
    clap::Arg::new("crud")
        .required(true)
        .help("CRUD name (books, families, members, circulations)")
}

fn id_arg() -> clap::Arg {
    clap::Arg::new("id").required(true).help("Record id")
}

fn data_arg() -> clap::Arg {
    clap::Arg::new("data")
        .long("data")
        .short('d')
        .required(true)
        .value_name("JSON")
        .help("Record fields as a JSON object")
}

fn required<'a>(matches: &'a clap::ArgMatches, name: &str) -> LeafyResult<&'a str> {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| LeafyError::InvalidParameter(format!("Missing argument <{name}>")))
}

fn parse_data(matches: &clap::ArgMatches) -> LeafyResult<Value> {
    Ok(serde_json::from_str(required(matches, "data")?)?)
}

fn print_json(value: &Value) -> LeafyResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Runs one record command against `dashboard` and returns what it prints.
///
/// `command` is one of `list`, `get`, `create`, `update`, `delete`.
pub async fn run_record_command(
    dashboard: &Dashboard,
    command: &str,
    matches: &clap::ArgMatches,
) -> LeafyResult<Value> {
    let crud = required(matches, "crud")?;
    match command {
        "list" => {
            let mut params = RequestParameters::new();
            if let Some(page) = matches.get_one::<String>("page") {
                params.insert("page", page.as_str());
            }
            let result = dashboard.provide(crud, "list", &params).await?;
            Ok(serde_json::to_value(result)?)
        }
        "get" => {
            let params = RequestParameters::new().with("id", required(matches, "id")?);
            let result = dashboard.provide(crud, "view", &params).await?;
            Ok(serde_json::to_value(result)?)
        }
        "create" => {
            let data = parse_data(matches)?;
            dashboard
                .process(crud, "new", Some(data), &RequestParameters::new())
                .await?;
            Ok(json!({"status": "created", "crud": crud}))
        }
        "update" => {
            let id = required(matches, "id")?;
            let data = parse_data(matches)?;
            let params = RequestParameters::new().with("id", id);
            dashboard.process(crud, "edit", Some(data), &params).await?;
            Ok(json!({"status": "updated", "crud": crud, "id": id}))
        }
        "delete" => {
            let id = required(matches, "id")?;
            let params = RequestParameters::new().with("id", id);
            dashboard.process(crud, "delete", None, &params).await?;
            Ok(json!({"status": "deleted", "crud": crud, "id": id}))
        }
        other => Err(LeafyError::UnknownOperation(other.to_string())),
    }
}

async fn run_and_print(
    command: &str,
    matches: &clap::ArgMatches,
    settings: &Settings,
) -> LeafyResult<()> {
    let dashboard = catalog_dashboard(&reqwest::Client::new(), settings)?;
    let output = run_record_command(&dashboard, command, matches).await?;
    print_json(&output)
}

/// `list <crud> [--page N]`
pub struct ListCommand;

#[async_trait]
impl ManagementCommand for ListCommand {
    fn name(&self) -> &'static str {
        "list"
    }

    fn help(&self) -> &'static str {
        "Prints one page of a CRUD's records"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(crud_arg()).arg(
            clap::Arg::new("page")
                .long("page")
                .short('p')
                .value_name("N")
                .help("1-based page number"),
        )
    }

    async fn handle(&self, matches: &clap::ArgMatches, settings: &Settings) -> LeafyResult<()> {
        run_and_print(self.name(), matches, settings).await
    }
}

/// `get <crud> <id>`
pub struct GetCommand;

#[async_trait]
impl ManagementCommand for GetCommand {
    fn name(&self) -> &'static str {
        "get"
    }

    fn help(&self) -> &'static str {
        "Prints one record"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(crud_arg()).arg(id_arg())
    }

    async fn handle(&self, matches: &clap::ArgMatches, settings: &Settings) -> LeafyResult<()> {
        run_and_print(self.name(), matches, settings).await
    }
}

/// `create <crud> --data JSON`
pub struct CreateCommand;

#[async_trait]
impl ManagementCommand for CreateCommand {
    fn name(&self) -> &'static str {
        "create"
    }

    fn help(&self) -> &'static str {
        "Creates a record"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(crud_arg()).arg(data_arg())
    }

    async fn handle(&self, matches: &clap::ArgMatches, settings: &Settings) -> LeafyResult<()> {
        run_and_print(self.name(), matches, settings).await
    }
}

/// `update <crud> <id> --data JSON`
pub struct UpdateCommand;

#[async_trait]
impl ManagementCommand for UpdateCommand {
    fn name(&self) -> &'static str {
        "update"
    }

    fn help(&self) -> &'static str {
        "Updates a record"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(crud_arg()).arg(id_arg()).arg(data_arg())
    }

    async fn handle(&self, matches: &clap::ArgMatches, settings: &Settings) -> LeafyResult<()> {
        run_and_print(self.name(), matches, settings).await
    }
}

/// `delete <crud> <id>`
pub struct DeleteCommand;

#[async_trait]
impl ManagementCommand for DeleteCommand {
    fn name(&self) -> &'static str {
        "delete"
    }

    fn help(&self) -> &'static str {
        "Deletes a record"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(crud_arg()).arg(id_arg())
    }

    async fn handle(&self, matches: &clap::ArgMatches, settings: &Settings) -> LeafyResult<()> {
        run_and_print(self.name(), matches, settings).await
    }
}
