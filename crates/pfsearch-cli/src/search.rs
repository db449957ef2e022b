//! Command handlers for the CLI.
//!
//! Each handler builds a [`ListingSearch`] from the loaded configuration,
//! runs one operation and prints the result as pretty JSON on stdout. Logs
//! go to stderr so the output can be piped.

use pfsearch_core::{AppConfig, Bedrooms, SearchFilter};
use pfsearch_scraper::ListingSearch;

/// Builds a search filter from CLI arguments.
///
/// Numeric bedroom values (including `2.5` or `-1`) are sent as numbers,
/// anything else as a label.
pub(crate) fn build_filter(
    main_location: String,
    option: String,
    property_type: String,
    bedrooms: Option<String>,
    sub_location: Option<String>,
) -> SearchFilter {
    SearchFilter {
        main_location,
        option,
        property_type,
        bedrooms: bedrooms.map(|b| parse_bedrooms(&b)),
        sub_location,
    }
}

pub(crate) fn parse_bedrooms(raw: &str) -> Bedrooms {
    let trimmed = raw.trim();
    trimmed
        .parse::<serde_json::Number>()
        .map_or_else(|_| Bedrooms::Label(trimmed.to_owned()), Bedrooms::Count)
}

pub(crate) async fn run_scrape(config: &AppConfig, filter: &SearchFilter) -> anyhow::Result<()> {
    let search = ListingSearch::from_config(config)?;
    let response = search.scrape(filter).await?;

    tracing::info!(total = response.total_listings, "scrape finished");
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

pub(crate) async fn run_sublocations(config: &AppConfig, main_location: &str) -> anyhow::Result<()> {
    let search = ListingSearch::from_config(config)?;
    let response = search.list_sublocations(main_location).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

pub(crate) async fn run_probe_zones(
    config: &AppConfig,
    from: u32,
    to: u32,
    concurrency: usize,
) -> anyhow::Result<()> {
    anyhow::ensure!(from <= to, "--from ({from}) must not exceed --to ({to})");
    anyhow::ensure!(concurrency > 0, "--concurrency must be at least 1");

    let search = ListingSearch::from_config(config)?;
    let zones = search.probe_zones(from..=to, concurrency).await?;

    tracing::info!(probed = zone_count(from, to), found = zones.len(), "zone probe finished");
    println!("{}", serde_json::to_string_pretty(&zones)?);
    Ok(())
}

/// Number of ids in `from..=to`; the full `u32` range does not fit in a `u32`.
pub(crate) fn zone_count(from: u32, to: u32) -> u64 {
    u64::from(to) - u64::from(from) + 1
}
