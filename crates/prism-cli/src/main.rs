use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod analyze;

#[derive(Debug, Parser)]
#[command(name = "prism-cli")]
#[command(about = "PRISM sourcing-candidate analysis pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze a JSON-lines product export and attach the derived signals.
    Analyze(analyze::AnalyzeArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = prism_core::load_app_config()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze(args) => analyze::run_analyze(&config, &args).await,
    }
}
