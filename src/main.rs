use clap::Parser;
use parlay_settle::cli::{Cli, Commands};
use parlay_settle::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize telemetry
    let _telemetry = parlay_settle::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Run(args) => {
            tracing::info!("Starting settlement scheduler");
            args.execute(&config).await?;
        }
        Commands::Settle(args) => {
            tracing::info!("Running one settlement pass");
            args.execute(&config).await?;
        }
        Commands::Resolve(args) => {
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
