//! Scaffold CLI - site server and frame tooling for Scaffold-ETH 2.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "scaffold")]
#[command(about = "Scaffold-ETH 2 site server and frame tooling")]
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
    /// Write a default site.toml
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        yes: bool,
    },

    /// Serve the site, frame sequence and extension catalog
    Serve {
        /// Port to listen on (defaults to config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (defaults to config)
        #[arg(long)]
        host: Option<String>,

        /// Open browser on start
        #[arg(long)]
        open: bool,
    },

    /// Print the frame document for a step
    Frame {
        /// Step identifier (defaults to the first step)
        #[arg(short, long)]
        id: Option<String>,
    },

    /// List extensions matching a search
    Extensions {
        /// Search string (3 characters or more)
        #[arg(short, long, default_value = "")]
        query: String,
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

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
        Commands::Serve { port, host, open } => {
            commands::serve::run(&cli.config, port, host, open).await?;
        }
        Commands::Frame { id } => {
            commands::frame::run(&cli.config, id).await?;
        }
        Commands::Extensions { query } => {
            commands::extensions::run(&cli.config, &query).await?;
        }
    }

    Ok(())
}
