mod search;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pfsearch-cli")]
#[command(about = "Search propertyfinder.ae listings from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a filter search and print the aggregated listings as JSON
    Scrape {
        /// Main location, e.g. "Dubai"
        #[arg(long)]
        location: String,
        /// Listing option, e.g. "Rent" or "Buy"
        #[arg(long, default_value = "Rent")]
        option: String,
        /// Property type, e.g. "Apartment"
        #[arg(long, default_value = "Apartment")]
        property_type: String,
        /// Bedroom count or label (e.g. 2, studio)
        #[arg(long)]
        bedrooms: Option<String>,
        /// Sub-area name as listed by `sublocations`
        #[arg(long)]
        sub_location: Option<String>,
    },
    /// List the sub-locations offered for a main location
    Sublocations {
        /// Main location, e.g. "Dubai"
        #[arg(long)]
        location: String,
    },
    /// Probe a range of upstream zone ids and print the ones that resolve
    ProbeZones {
        /// First zone id to probe
        #[arg(long, default_value = "1")]
        from: u32,
        /// Last zone id to probe (inclusive)
        #[arg(long, default_value = "100")]
        to: u32,
        /// Maximum probes in flight
        #[arg(long, default_value = "8")]
        concurrency: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = pfsearch_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Scrape {
            location,
            option,
            property_type,
            bedrooms,
            sub_location,
        }) => {
            let filter =
                search::build_filter(location, option, property_type, bedrooms, sub_location);
            search::run_scrape(&config, &filter).await?;
        }
        Some(Commands::Sublocations { location }) => {
            search::run_sublocations(&config, &location).await?;
        }
        Some(Commands::ProbeZones {
            from,
            to,
            concurrency,
        }) => {
            search::run_probe_zones(&config, from, to, concurrency).await?;
        }
        None => println!("pfsearch-cli ready; run with --help for commands"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
