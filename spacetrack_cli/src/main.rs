mod commands;
mod output;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use spacetrack_api::types::{Boxscore, Decay, Gp, SatCat};
use spacetrack_api::ClientConfig;

use crate::commands::Context;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "spacetrack")]
#[command(about = "Query orbital element and satellite catalog data from Space-Track")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "table", global = true)]
    output: OutputFormat,

    /// Service host, e.g. a mock server
    #[arg(long, env = "SPACETRACK_BASE_URL", global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value = "30", global = true)]
    timeout: u64,

    /// Print the query URL without sending it
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// General perturbations (OMM) element sets
    Gp(commands::query::QueryArgs),
    /// Satellite catalog entries
    Satcat(commands::query::QueryArgs),
    /// Reentry predictions and reports
    Decay(commands::query::QueryArgs),
    /// Object counts per country
    Boxscore(commands::query::QueryArgs),
    /// List the filterable columns of a data class
    Fields(commands::fields::FieldsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("spacetrack=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.base_url {
        Some(base_url) => ClientConfig::with_base_url(base_url),
        None => ClientConfig::default(),
    };
    config.timeout = Duration::from_secs(cli.timeout);

    let ctx = Context {
        config,
        dry_run: cli.dry_run,
    };

    match &cli.command {
        Commands::Gp(args) => commands::query::run::<Gp>(args, &ctx, cli.output).await?,
        Commands::Satcat(args) => commands::query::run::<SatCat>(args, &ctx, cli.output).await?,
        Commands::Decay(args) => commands::query::run::<Decay>(args, &ctx, cli.output).await?,
        Commands::Boxscore(args) => {
            commands::query::run::<Boxscore>(args, &ctx, cli.output).await?
        }
        Commands::Fields(args) => commands::fields::run(args)?,
    }

    Ok(())
}
