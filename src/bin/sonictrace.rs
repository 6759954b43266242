//! sonictrace - chunk network-OS manuals for RAG ingestion
//!
//! Reads vendor manuals (PDF or form-feed separated text), segments them
//! into numbered sections and writes token-budgeted chunks as JSON Lines.
//!
//! # Examples
//!
//! ```bash
//! # Chunk a SONiC manual into a file
//! sonictrace chunk manuals/sonic.pdf --vendor broadcom_sonic -o sonic.jsonl
//!
//! # Check how a page is classified
//! sonictrace classify manuals/eos.pdf --page 42 --vendor arista_eos
//!
//! # List configured vendors
//! sonictrace list-vendors
//! ```

use clap::Parser;
use sonictrace::cli::output::print_error;
use sonictrace::cli::{run, Cli, LogFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries chunk records
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "sonictrace=info".into());
    let registry = tracing_subscriber::registry().with(filter);
    match cli.log_format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }

    tracing::debug!("sonictrace {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
