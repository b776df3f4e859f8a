//! Gantry CLI - JSON-RPC service scaffold.

use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::format::FmtSpan;

mod commands;
mod output;

/// Gantry - minimal JSON-RPC 2.0 application scaffold.
#[derive(Debug, Parser)]
#[command(name = "gantry", version, about)]
struct Cli {
    /// Configuration file path.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format: plain (default) or json (for log aggregation).
    #[arg(long, global = true, default_value = "plain", value_parser = ["plain", "json"])]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scaffold a new gantry application project.
    Init(commands::init::InitArgs),
    /// Start the JSON-RPC HTTP server.
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = gantry_config::load_config(cli.config.as_deref())?;

    // Initialize tracing. Verbosity flags win over the configured level.
    let filter = match cli.verbose {
        0 if config.service.debug => "debug".to_string(),
        0 => config.logging.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    match cli.log_format.as_str() {
        "json" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .init(),
        _ => tracing_subscriber::fmt().with_env_filter(filter).init(),
    };

    tracing::debug!("gantry starting with config: {:?}", cli.config);

    match &cli.command {
        Commands::Init(args) => commands::init::execute(args),
        Commands::Serve(args) => commands::serve::execute(args, &config).await,
    }
}
