//! Route planning commands: `route`, `multi` and `regions`.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tidewater_core::{
    DEFAULT_PORTS_PER_REGION, MultiPortRequest, RegionRouteRequest, ShipType,
    SingleRouteRequest, SqlitePortRegistry, split_name_list,
};
use tidewater_planner::RoutePlanner;

use crate::fs::require_existing;
use crate::report::{MultiRouteReport, RegionRouteReport, SingleRouteReport};
use crate::{
    ARG_DESTINATION, ARG_PORTS, ARG_PORTS_DB, ARG_PORTS_PER_REGION, ARG_REGIONS, ARG_SHIP_TYPE,
    ARG_START, CliError, DEFAULT_PORTS_DB, ENV_DESTINATION, ENV_PORTS, ENV_REGIONS, ENV_START,
};

fn open_planner(ports_db: &Utf8Path) -> Result<RoutePlanner<SqlitePortRegistry>, CliError> {
    require_existing(ports_db, ARG_PORTS_DB)?;
    let registry = SqlitePortRegistry::open(ports_db.as_std_path())?;
    Ok(RoutePlanner::new(registry))
}

fn ship_type(label: Option<&str>) -> ShipType {
    label.map_or(ShipType::Standard, ShipType::resolve)
}

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "route",
    about = "Plan a direct voyage between two ports",
    long_about = "Plan a direct voyage between two named ports and estimate \
                  the fuel burned by the chosen ship type. Unknown ship types \
                  fall back to the standard coefficient."
)]
#[ortho_config(prefix = "TIDEWATER")]
pub(crate) struct RouteArgs {
    /// Departure port name.
    #[arg(long = ARG_START, value_name = "port")]
    #[serde(default)]
    pub(crate) start: Option<String>,
    /// Arrival port name.
    #[arg(long = ARG_DESTINATION, value_name = "port")]
    #[serde(default)]
    pub(crate) destination: Option<String>,
    /// Ship type: standard, cargo, tanker or passenger.
    #[arg(long = ARG_SHIP_TYPE, value_name = "type")]
    #[serde(default)]
    pub(crate) ship_type: Option<String>,
    /// Path to the SQLite port database.
    #[arg(long = ARG_PORTS_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) ports_db: Option<Utf8PathBuf>,
}

/// Resolved `route` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RouteConfig {
    pub(crate) request: SingleRouteRequest,
    pub(crate) ports_db: Utf8PathBuf,
}

impl RouteArgs {
    pub(crate) fn into_config(self) -> Result<RouteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RouteConfig::try_from(merged)
    }
}

impl TryFrom<RouteArgs> for RouteConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        let start = args.start.ok_or(CliError::MissingArgument {
            field: ARG_START,
            env: ENV_START,
        })?;
        let destination = args.destination.ok_or(CliError::MissingArgument {
            field: ARG_DESTINATION,
            env: ENV_DESTINATION,
        })?;
        Ok(Self {
            request: SingleRouteRequest {
                start,
                destination,
                ship_type: ship_type(args.ship_type.as_deref()),
            },
            ports_db: args
                .ports_db
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_PORTS_DB)),
        })
    }
}

pub(crate) fn run_route(args: RouteArgs) -> Result<SingleRouteReport, CliError> {
    let config = args.into_config()?;
    config.request.validate()?;
    let planner = open_planner(&config.ports_db)?;
    let route = planner.plan_single(&config.request)?;
    Ok(SingleRouteReport::from(&route))
}

/// CLI arguments for the `multi` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "multi",
    about = "Plan a voyage through several ports",
    long_about = "Plan a voyage through a comma-separated list of ports. \
                  With optimisation enabled (the default) the stops after \
                  the first are reordered by nearest neighbour."
)]
#[ortho_config(prefix = "TIDEWATER")]
pub(crate) struct MultiArgs {
    /// Comma-separated port names; the first is the departure port.
    #[arg(long = ARG_PORTS, value_name = "names")]
    #[serde(default)]
    pub(crate) ports: Option<String>,
    /// Ship type: standard, cargo, tanker or passenger.
    #[arg(long = ARG_SHIP_TYPE, value_name = "type")]
    #[serde(default)]
    pub(crate) ship_type: Option<String>,
    /// Reorder the stops by nearest neighbour (default: true).
    #[arg(long, value_name = "bool")]
    #[serde(default)]
    pub(crate) optimize: Option<bool>,
    /// Path to the SQLite port database.
    #[arg(long = ARG_PORTS_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) ports_db: Option<Utf8PathBuf>,
}

/// Resolved `multi` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MultiConfig {
    pub(crate) request: MultiPortRequest,
    pub(crate) ports_db: Utf8PathBuf,
}

impl MultiArgs {
    pub(crate) fn into_config(self) -> Result<MultiConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        MultiConfig::try_from(merged)
    }
}

impl TryFrom<MultiArgs> for MultiConfig {
    type Error = CliError;

    fn try_from(args: MultiArgs) -> Result<Self, Self::Error> {
        let ports = args.ports.ok_or(CliError::MissingArgument {
            field: ARG_PORTS,
            env: ENV_PORTS,
        })?;
        Ok(Self {
            request: MultiPortRequest {
                ports: split_name_list(&ports),
                ship_type: ship_type(args.ship_type.as_deref()),
                optimize: args.optimize.unwrap_or(true),
            },
            ports_db: args
                .ports_db
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_PORTS_DB)),
        })
    }
}

pub(crate) fn run_multi(args: MultiArgs) -> Result<MultiRouteReport, CliError> {
    let config = args.into_config()?;
    config.request.validate()?;
    let planner = open_planner(&config.ports_db)?;
    let route = planner.plan_multi(&config.request)?;
    Ok(MultiRouteReport::from(&route))
}

/// CLI arguments for the `regions` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "regions",
    about = "Plan a voyage through several regions",
    long_about = "Plan a voyage calling at up to N ports in each of a \
                  comma-separated list of regions or countries. Region names \
                  match stored labels by case-insensitive substring."
)]
#[ortho_config(prefix = "TIDEWATER")]
pub(crate) struct RegionsArgs {
    /// Comma-separated region or country names.
    #[arg(long = ARG_REGIONS, value_name = "names")]
    #[serde(default)]
    pub(crate) regions: Option<String>,
    /// Ship type: standard, cargo, tanker or passenger.
    #[arg(long = ARG_SHIP_TYPE, value_name = "type")]
    #[serde(default)]
    pub(crate) ship_type: Option<String>,
    /// Ports to visit per region, 1 to 10 (default: 3).
    #[arg(long = ARG_PORTS_PER_REGION, value_name = "count")]
    #[serde(default)]
    pub(crate) ports_per_region: Option<usize>,
    /// Path to the SQLite port database.
    #[arg(long = ARG_PORTS_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) ports_db: Option<Utf8PathBuf>,
}

/// Resolved `regions` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RegionsConfig {
    pub(crate) request: RegionRouteRequest,
    pub(crate) ports_db: Utf8PathBuf,
}

impl RegionsArgs {
    pub(crate) fn into_config(self) -> Result<RegionsConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RegionsConfig::try_from(merged)
    }
}

impl TryFrom<RegionsArgs> for RegionsConfig {
    type Error = CliError;

    fn try_from(args: RegionsArgs) -> Result<Self, Self::Error> {
        let regions = args.regions.ok_or(CliError::MissingArgument {
            field: ARG_REGIONS,
            env: ENV_REGIONS,
        })?;
        Ok(Self {
            request: RegionRouteRequest {
                regions: split_name_list(&regions),
                ship_type: ship_type(args.ship_type.as_deref()),
                ports_per_region: args.ports_per_region.unwrap_or(DEFAULT_PORTS_PER_REGION),
            },
            ports_db: args
                .ports_db
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_PORTS_DB)),
        })
    }
}

pub(crate) fn run_regions(args: RegionsArgs) -> Result<RegionRouteReport, CliError> {
    let config = args.into_config()?;
    config.request.validate()?;
    let planner = open_planner(&config.ports_db)?;
    let route = planner.plan_regions(&config.request)?;
    Ok(RegionRouteReport::new(
        &route,
        config.request.regions,
        config.request.ports_per_region,
    ))
}
