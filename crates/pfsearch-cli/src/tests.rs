use super::*;
use pfsearch_core::Bedrooms;
use serde_json::Number;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["pfsearch-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_scrape_with_defaults() {
    let cli = Cli::try_parse_from(["pfsearch-cli", "scrape", "--location", "Dubai"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Scrape {
            ref location,
            ref option,
            ref property_type,
            bedrooms: None,
            sub_location: None,
        }) if location == "Dubai" && option == "Rent" && property_type == "Apartment"
    ));
}

#[test]
fn parses_scrape_with_all_filters() {
    let cli = Cli::try_parse_from([
        "pfsearch-cli",
        "scrape",
        "--location",
        "Dubai",
        "--option",
        "Buy",
        "--property-type",
        "Villa",
        "--bedrooms",
        "3",
        "--sub-location",
        "Dubai Marina",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Scrape {
            ref option,
            bedrooms: Some(ref b),
            sub_location: Some(ref s),
            ..
        }) if option == "Buy" && b == "3" && s == "Dubai Marina"
    ));
}

#[test]
fn scrape_requires_location() {
    assert!(Cli::try_parse_from(["pfsearch-cli", "scrape"]).is_err());
}

#[test]
fn parses_sublocations_command() {
    let cli = Cli::try_parse_from(["pfsearch-cli", "sublocations", "--location", "Ajman"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Sublocations { ref location }) if location == "Ajman"
    ));
}

#[test]
fn parses_probe_zones_defaults() {
    let cli =
        Cli::try_parse_from(["pfsearch-cli", "probe-zones"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::ProbeZones {
            from: 1,
            to: 100,
            concurrency: 8
        })
    ));
}

#[test]
fn parses_probe_zones_range() {
    let cli = Cli::try_parse_from([
        "pfsearch-cli",
        "probe-zones",
        "--from",
        "50",
        "--to",
        "60",
        "--concurrency",
        "2",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::ProbeZones {
            from: 50,
            to: 60,
            concurrency: 2
        })
    ));
}

#[test]
fn zone_count_covers_full_u32_range() {
    assert_eq!(search::zone_count(1, 100), 100);
    assert_eq!(search::zone_count(7, 7), 1);
    assert_eq!(search::zone_count(0, u32::MAX), 1 << 32);
}

#[test]
fn numeric_bedrooms_become_counts() {
    assert_eq!(
        search::parse_bedrooms("2"),
        Bedrooms::Count(Number::from(2u64))
    );
    assert_eq!(
        search::parse_bedrooms(" 4 "),
        Bedrooms::Count(Number::from(4u64))
    );
}

#[test]
fn fractional_and_negative_bedrooms_stay_numeric() {
    assert_eq!(search::parse_bedrooms("2.5").to_string(), "2.5");
    assert!(matches!(search::parse_bedrooms("-1"), Bedrooms::Count(_)));
}

#[test]
fn other_bedrooms_become_labels() {
    assert_eq!(
        search::parse_bedrooms("studio"),
        Bedrooms::Label("studio".to_owned())
    );
}

#[test]
fn build_filter_keeps_cli_values() {
    let filter = search::build_filter(
        "Dubai".to_owned(),
        "Rent".to_owned(),
        "Apartment".to_owned(),
        Some("1".to_owned()),
        None,
    );

    assert_eq!(filter.main_location, "Dubai");
    assert_eq!(filter.bedrooms, Some(Bedrooms::Count(Number::from(1u64))));
    assert!(filter.sub_location.is_none());
    assert!(filter.resolve().is_ok());
}
