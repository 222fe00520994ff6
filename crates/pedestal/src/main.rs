//! Pedestal CLI - documentation and example site generator for UI widget libraries.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "pedestal")]
#[command(about = "Documentation and example site generator for UI widget libraries")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to site.toml config file
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a site in the current project
    Init {
        /// Skip interactive prompts, overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Build the documentation site
    Build {
        /// Output directory (defaults to config or "website")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Reference the local library copy instead of the hosted artifact
        #[arg(long)]
        local: bool,
    },

    /// Build versioned library release artifacts
    Dist,
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
        Commands::Build { output, local } => {
            commands::build::run(&cli.config, output, local).await?;
        }
        Commands::Dist => {
            commands::dist::run(&cli.config).await?;
        }
    }

    Ok(())
}
