mod load;
mod output;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "landscan")]
#[command(about = "Normalize rural listing sheets for map, chart and card views")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List normalized records in source order
    Records {
        #[command(flatten)]
        source: SourceArgs,
        /// Print records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show averages, price per acre and the top-scoring listings
    Summary {
        #[command(flatten)]
        source: SourceArgs,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print bubble chart points (drive metric vs. price per acre) as JSON
    Chart {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Print map markers and fitted bounds as JSON
    Markers {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Print the effective header alias table
    Aliases,
}

/// Where to load the sheet from and how strictly to filter it.
#[derive(Debug, Clone, Default, Args)]
struct SourceArgs {
    /// Dataset name, resolved under the data directory or base URL
    /// (defaults to `LANDSCAN_DEFAULT_DATASET`)
    dataset: Option<String>,
    /// Read this sheet export instead of resolving a dataset name
    #[arg(long, conflicts_with_all = ["dataset", "url"])]
    file: Option<std::path::PathBuf>,
    /// Fetch this sheet export URL instead of resolving a dataset name
    #[arg(long, conflicts_with = "dataset")]
    url: Option<String>,
    /// Drop listings whose price is missing or zero
    #[arg(long)]
    require_positive_price: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = landscan_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Records { source, json }) => {
            let dataset = load::load_dataset(&config, &source).await?;
            output::print_records(&dataset, json)?;
        }
        Some(Commands::Summary { source, json }) => {
            let dataset = load::load_dataset(&config, &source).await?;
            output::print_summary(&dataset, json)?;
        }
        Some(Commands::Chart { source }) => {
            let dataset = load::load_dataset(&config, &source).await?;
            output::print_chart(&dataset)?;
        }
        Some(Commands::Markers { source }) => {
            let dataset = load::load_dataset(&config, &source).await?;
            output::print_markers(&dataset)?;
        }
        Some(Commands::Aliases) => {
            let aliases = load::field_aliases(&config)?;
            output::print_aliases(&aliases)?;
        }
        None => {
            let dataset = load::load_dataset(&config, &SourceArgs::default()).await?;
            output::print_summary(&dataset, false)?;
        }
    }

    Ok(())
}
