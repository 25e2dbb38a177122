//! Inlay CLI - props-table documentation generator.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "inlay")]
#[command(about = "Generates component props tables for documentation pages")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to inlay.toml config file
    #[arg(short, long, default_value = "inlay.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a props-table setup in the current project
    Init {
        /// Skip prompts and overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Extract a prop catalog from component sources
    Extract {
        /// Components source directory (defaults to config)
        #[arg(short, long)]
        source: Option<PathBuf>,
    },

    /// Generate props-table files next to component pages
    Generate {
        /// Docs directory to scan (defaults to config)
        #[arg(short, long)]
        docs: Option<PathBuf>,

        /// Abort on the first unresolved component
        #[arg(long)]
        strict: bool,
    },

    /// Verify generated props tables are up to date
    Check {
        /// Docs directory to scan (defaults to config)
        #[arg(short, long)]
        docs: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(yes).await?;
        }
        Commands::Extract { source } => {
            commands::extract::run(&cli.config, source).await?;
        }
        Commands::Generate { docs, strict } => {
            commands::generate::run(&cli.config, docs, strict).await?;
        }
        Commands::Check { docs } => {
            commands::check::run(&cli.config, docs).await?;
        }
    }

    Ok(())
}
