//! CLI adapter for sonictrace
//!
//! Provides the command-line interface over the chunking engine.
//! Commands depend on `core/`; `core/` knows nothing about them.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (chunk engine)  |
//!              +--------+---------+
//!                       |
//!                       v
//!              +------------------+
//!              |      cli/        |
//!              | (clap adapter)   |
//!              +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// sonictrace - Manual chunking for RAG ingestion
///
/// Splits network-OS configuration manuals into section-aware,
/// token-budgeted chunks and writes them as JSON Lines for the
/// embedding and storage step.
#[derive(Parser, Debug)]
#[command(name = "sonictrace")]
#[command(version)]
#[command(about = "Section-aware manual chunker", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Log line format on stderr
    #[arg(long, global = true, default_value = "text")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Log format for the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Chunk manuals into JSON Lines
    Chunk(commands::ChunkArgs),

    /// Show how each line of a page is classified
    Classify(commands::ClassifyArgs),

    /// List configured vendors
    #[command(name = "list-vendors")]
    ListVendors(commands::VendorsArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  sonictrace completions bash > ~/.local/share/bash-completion/completions/sonictrace
    ///   zsh:   sonictrace completions zsh > ~/.zfunc/_sonictrace
    ///   fish:  sonictrace completions fish > ~/.config/fish/completions/sonictrace.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let xdg = XdgDirs::new();
    xdg.log_paths();

    let config = Config::load_with_xdg(&xdg)?;
    config.log_config();

    let services = Arc::new(Services::new(config)?);

    match cli.command {
        Commands::Chunk(args) => commands::chunk::execute(args, &services, cli.format).await,
        Commands::Classify(args) => commands::classify::execute(args, &services, cli.format).await,
        Commands::ListVendors(args) => {
            commands::vendors::execute(args, &services, cli.format).await
        }
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
