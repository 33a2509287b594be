//! DeskPlan CLI
//!
//! Usage:
//!   deskplan [OPTIONS] <COMMAND>
//!
//! Commands:
//!   tidy         Arrange a layout, add missing cables and route them
//!   route        Print the routed path between two objects as JSON
//!   connections  Print the default peripheral connections as JSON
//!   catalog      List object categories with their default sizes

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use deskplan::{commands, init_logging, Config, BUILD_DATE, VERSION};

#[derive(Parser)]
#[command(name = "deskplan")]
#[command(about = "Desk layout planner: arrangement, cable routing and history")]
#[command(version = VERSION)]
struct Cli {
    /// Config file (JSON or TOML); defaults to the platform config directory
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Arrange a layout, add missing cables and route them
    Tidy {
        layout: PathBuf,
        /// Output file (stdout if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the routed path between two objects as JSON
    Route {
        layout: PathBuf,
        from: String,
        to: String,
        /// Insert gravity sag midpoints
        #[arg(long)]
        sag: bool,
    },
    /// Print the default peripheral connections as JSON
    Connections { layout: PathBuf },
    /// List object categories with their default sizes
    Catalog,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::load_or_default()?,
    };
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let cli = Cli::parse();
    tracing::debug!("deskplan {} (built {})", VERSION, BUILD_DATE);

    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Command::Tidy { layout, output } => {
            let (file, summary) = commands::run_tidy(&layout, &config)?;
            tracing::info!(
                "Placed {} objects, added {} cables, routed {}",
                summary.placed,
                summary.cables_added,
                summary.cables_routed
            );
            match output {
                Some(path) => file.save_to_file(&path)?,
                None => println!("{}", file.to_json_string()?),
            }
        }
        Command::Route {
            layout,
            from,
            to,
            sag,
        } => {
            let path = commands::run_route(&layout, &from, &to, sag, &config)?;
            println!("{}", serde_json::to_string_pretty(&path)?);
        }
        Command::Connections { layout } => {
            let connections = commands::run_connections(&layout)?;
            println!("{}", serde_json::to_string_pretty(&connections)?);
        }
        Command::Catalog => {
            for row in commands::catalog() {
                println!(
                    "{:<15} {:<15} {:.2} x {:.2} x {:.2}",
                    row.category.as_str(),
                    row.name,
                    row.scale[0],
                    row.scale[1],
                    row.scale[2]
                );
            }
        }
    }

    Ok(())
}
