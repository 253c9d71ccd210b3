pub mod types;
pub mod config;
pub mod data;
pub mod options;
pub mod layout;
pub mod render;
pub mod server;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::types::Office;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the dashboard page and its API
    Serve {
        #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
        config: PathBuf,
    },
    /// Print the figures for one selection as JSON
    Render {
        #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
        config: PathBuf,
        #[arg(short, long)]
        year: u16,
        /// Office label ("POTUS Candidate") or slug ("potus")
        #[arg(short, long)]
        office: Office,
        #[arg(long)]
        candidate: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            tracing::info!(config = ?config, "starting dashboard");
            let app_config = config::AppConfig::load_or_default(&config)?;
            let data = data::load_data(&app_config)?;
            server::start_server(app_config, data).await?;
        }
        Commands::Render { config, year, office, candidate } => {
            let app_config = config::AppConfig::load_or_default(&config)?;
            let data = data::load_data(&app_config)?;
            let selection = render::Selection { year, office, candidate };
            let figures = render::render(&data, &app_config.map, &selection);
            println!("{}", serde_json::to_string_pretty(&figures)?);
        }
    }

    Ok(())
}
