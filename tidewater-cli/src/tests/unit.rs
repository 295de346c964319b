//! Focused unit tests covering CLI configuration conversion.

use super::*;
use crate::catalogue::{ImportConfig, RegionPortsArgs, RegionPortsConfig};
use crate::plan::{MultiConfig, RegionsConfig, RouteConfig};
use camino::Utf8PathBuf;
use ortho_config::{MergeComposer, OrthoConfig};
use rstest::rstest;
use serde_json::json;
use tidewater_core::{PlanError, RegistryError, ShipType, SqlitePortRegistryError};

fn assert_missing(err: CliError, expected_field: &str, expected_env: &str) {
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, expected_field);
            assert_eq!(env, expected_env);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case(None, Some("Oslo"), ARG_START, ENV_START)]
#[case(Some("Bergen"), None, ARG_DESTINATION, ENV_DESTINATION)]
fn route_requires_both_ports(
    #[case] start: Option<&str>,
    #[case] destination: Option<&str>,
    #[case] field: &str,
    #[case] env: &str,
) {
    let args = RouteArgs {
        start: start.map(str::to_owned),
        destination: destination.map(str::to_owned),
        ..RouteArgs::default()
    };
    let err = RouteConfig::try_from(args).expect_err("missing port should error");
    assert_missing(err, field, env);
}

#[rstest]
fn route_defaults_database_and_ship_type() {
    let args = RouteArgs {
        start: Some("Bergen".into()),
        destination: Some("Oslo".into()),
        ..RouteArgs::default()
    };
    let config = RouteConfig::try_from(args).expect("config should build");
    assert_eq!(config.ports_db, Utf8PathBuf::from(DEFAULT_PORTS_DB));
    assert_eq!(config.request.ship_type, ShipType::Standard);
}

#[rstest]
#[case("tanker", ShipType::Tanker)]
#[case(" Cargo ", ShipType::Cargo)]
#[case("hovercraft", ShipType::Standard)]
fn ship_type_labels_resolve_with_fallback(#[case] label: &str, #[case] expected: ShipType) {
    let args = RouteArgs {
        start: Some("Bergen".into()),
        destination: Some("Oslo".into()),
        ship_type: Some(label.into()),
        ..RouteArgs::default()
    };
    let config = RouteConfig::try_from(args).expect("config should build");
    assert_eq!(config.request.ship_type, expected);
}

#[rstest]
fn multi_splits_port_list_and_optimises_by_default() {
    let args = MultiArgs {
        ports: Some(" A, B ,,C ".into()),
        ..MultiArgs::default()
    };
    let config = MultiConfig::try_from(args).expect("config should build");
    assert_eq!(config.request.ports, ["A", "B", "C"]);
    assert!(config.request.optimize);
}

#[rstest]
fn multi_requires_port_list() {
    let err = MultiConfig::try_from(MultiArgs::default()).expect_err("missing ports");
    assert_missing(err, ARG_PORTS, ENV_PORTS);
}

#[rstest]
fn regions_default_to_three_ports_each() {
    let args = RegionsArgs {
        regions: Some("Norway,Denmark".into()),
        ..RegionsArgs::default()
    };
    let config = RegionsConfig::try_from(args).expect("config should build");
    assert_eq!(config.request.regions, ["Norway", "Denmark"]);
    assert_eq!(config.request.ports_per_region, 3);
}

#[rstest]
fn regions_require_region_list() {
    let err = RegionsConfig::try_from(RegionsArgs::default()).expect_err("missing regions");
    assert_missing(err, ARG_REGIONS, ENV_REGIONS);
}

#[rstest]
fn import_requires_csv_path() {
    let err = ImportConfig::try_from(ImportArgs::default()).expect_err("missing csv");
    assert_missing(err, ARG_CSV, ENV_CSV);
}

#[rstest]
fn region_ports_defaults_limit_and_trims_region() {
    let args = RegionPortsArgs {
        region: Some("  Norway ".into()),
        ..RegionPortsArgs::default()
    };
    let config = RegionPortsConfig::try_from(args).expect("config should build");
    assert_eq!(config.region, "Norway");
    assert_eq!(config.limit, 50);
    assert_eq!(config.ports_db, Utf8PathBuf::from(DEFAULT_PORTS_DB));
}

#[rstest]
#[case(None)]
#[case(Some("   "))]
fn region_ports_requires_region(#[case] region: Option<&str>) {
    let args = RegionPortsArgs {
        region: region.map(str::to_owned),
        ..RegionPortsArgs::default()
    };
    let err = RegionPortsConfig::try_from(args).expect_err("missing region");
    assert_missing(err, ARG_REGION, ENV_REGION);
}

#[rstest]
fn merge_layers_honours_precedence() {
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "start": "from-file",
            "destination": "Oslo",
            "ports_db": "file.db",
        }),
        None,
    );
    composer.push_environment(json!({
        "start": "Bergen",
        "ship_type": "cargo",
    }));
    composer.push_cli(json!({ "ports_db": "cli.db" }));

    let merged = RouteArgs::merge_from_layers(composer.layers()).expect("layers merge");
    let config = RouteConfig::try_from(merged).expect("merged config should build");
    assert_eq!(config.request.start, "Bergen");
    assert_eq!(config.request.destination, "Oslo");
    assert_eq!(config.request.ship_type, ShipType::Cargo);
    assert_eq!(config.ports_db, Utf8PathBuf::from("cli.db"));
}

#[rstest]
fn merge_layers_reject_mistyped_values() {
    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "ports_per_region": "three" }));
    let err = RegionsArgs::merge_from_layers(composer.layers())
        .map_err(CliError::from)
        .expect_err("invalid layer should fail");
    assert!(matches!(err, CliError::Configuration(_)));
}

#[rstest]
#[case(CliError::Plan(PlanError::PortNotFound { name: "Atlantis".into() }), EXIT_USAGE)]
#[case(CliError::Plan(PlanError::InsufficientRegions { found: 1 }), EXIT_USAGE)]
#[case(
    CliError::Plan(PlanError::from(RegistryError::unavailable("offline"))),
    EXIT_FAILURE
)]
#[case(
    CliError::PortDatabase(SqlitePortRegistryError::InvalidPageLimit { limit: 0 }),
    EXIT_USAGE
)]
#[case(
    CliError::MissingArgument { field: ARG_CSV, env: ENV_CSV },
    EXIT_USAGE
)]
#[case(CliError::InvalidRegionLimit { limit: 201 }, EXIT_USAGE)]
#[case(CliError::WriteReport(std::io::Error::other("closed")), EXIT_FAILURE)]
fn exit_codes_separate_input_errors_from_faults(#[case] err: CliError, #[case] expected: u8) {
    assert_eq!(err.exit_code(), expected);
}
