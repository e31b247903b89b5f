//! # roster
//!
//! `roster serve` runs the employee REST API; `roster ui` runs the
//! interactive terminal client against it.

#![deny(unsafe_code)]

mod interactive;
mod serve;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use roster_core::constants::DEFAULT_API_BASE_URL;
use roster_settings::RosterSettings;

/// Employee records service.
#[derive(Parser, Debug)]
#[command(name = "roster", version, about = "Employee records service")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the REST API server.
    Serve(ServeArgs),
    /// Run the interactive terminal client.
    Ui(UiArgs),
}

/// Flags for `roster serve`; each one overrides the loaded settings.
#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Host to bind.
    #[arg(long)]
    host: Option<String>,

    /// Port to bind.
    #[arg(long)]
    port: Option<u16>,

    /// Path to the `SQLite` database file.
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Settings file (default `~/.roster/settings.json`).
    #[arg(long)]
    settings: Option<PathBuf>,
}

impl ServeArgs {
    fn apply(&self, settings: &mut RosterSettings) {
        if let Some(host) = &self.host {
            settings.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            settings.server.port = port;
        }
        if let Some(path) = &self.db_path {
            settings.database.path = path.to_string_lossy().into_owned();
        }
    }
}

/// Flags for `roster ui`.
#[derive(Args, Debug)]
struct UiArgs {
    /// Employee collection URL.
    #[arg(long, default_value = DEFAULT_API_BASE_URL)]
    api_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => serve::run(args).await,
        Command::Ui(args) => interactive::run(&args.api_url).await,
    }
}
