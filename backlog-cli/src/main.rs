//! Backlog CLI - Sync planning documents to GitHub issues
//!
//! Parses an initiative/epic/story overview document plus a requirements
//! document and files the hierarchy on a GitHub repository.

mod commands;

use backlog_core::{Config, Secrets};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::SyncArgs;

/// Backlog sync: planning documents to GitHub issues
#[derive(Parser, Debug)]
#[command(name = "backlog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Sync planning documents to the issue tracker
    #[command(visible_alias = "s")]
    Sync(SyncArgs),

    /// Create a secrets file template
    Init,

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("backlog {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Sync(args)) => {
            args.execute(cli.verbose).await?;
        }
        Some(Commands::Init) => {
            let path = Secrets::create_template()?;
            println!("Created secrets template at {}", path.display());
            println!("Edit it to add your GitHub token.");
        }
        Some(Commands::Config) => {
            let config = Config::load_with_overrides(None, None)?;

            println!("Backlog Configuration");
            println!("=====================");
            println!();
            println!(
                "repository:   {}",
                config.repository.as_deref().unwrap_or("(not set)")
            );
            println!("sprint_count: {}", config.sprint_count);
            println!();
            if let Some(path) = Config::default_config_path() {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
        None => {
            println!("Backlog - sync planning documents to GitHub issues");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
