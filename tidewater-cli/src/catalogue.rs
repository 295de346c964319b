//! Catalogue commands: `ports`, `region-ports`, `list-regions` and `import`.

use std::ops::RangeInclusive;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tidewater_core::{PlanError, PortRegistry, SqlitePortRegistry};
use tidewater_data::import_ports_csv;

use crate::fs::require_existing;
use crate::report::{
    ImportReport, PortListReport, PortReport, RegionListReport, RegionPortsReport,
};
use crate::{
    ARG_CSV, ARG_PORTS_DB, ARG_REGION, CliError, DEFAULT_PORTS_DB, ENV_CSV, ENV_REGION,
};

/// Default page size for `ports`.
pub(crate) const DEFAULT_PAGE_LIMIT: usize = 10;
/// Accepted `--limit` values for `region-ports`.
pub(crate) const REGION_PORTS_LIMIT: RangeInclusive<usize> = 1..=200;
/// Default `--limit` for `region-ports`.
pub(crate) const DEFAULT_REGION_PORTS_LIMIT: usize = 50;

fn open_registry(ports_db: Option<Utf8PathBuf>) -> Result<SqlitePortRegistry, CliError> {
    let path = ports_db.unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_PORTS_DB));
    require_existing(&path, ARG_PORTS_DB)?;
    Ok(SqlitePortRegistry::open(path.as_std_path())?)
}

/// CLI arguments for the `ports` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "ports", about = "Page through the port catalogue")]
#[ortho_config(prefix = "TIDEWATER")]
pub(crate) struct PortsArgs {
    /// Ports per page, 1 to 100 (default: 10).
    #[arg(long, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Ports to skip before the page starts (default: 0).
    #[arg(long, value_name = "count")]
    #[serde(default)]
    pub(crate) offset: Option<usize>,
    /// Path to the SQLite port database.
    #[arg(long = ARG_PORTS_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) ports_db: Option<Utf8PathBuf>,
}

pub(crate) fn run_ports(args: PortsArgs) -> Result<PortListReport, CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let registry = open_registry(merged.ports_db)?;
    let ports = registry.list_ports(
        merged.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
        merged.offset.unwrap_or(0),
    )?;
    Ok(PortListReport {
        ports: ports.into_iter().map(PortReport::from).collect(),
    })
}

/// CLI arguments for the `region-ports` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "region-ports",
    about = "List the ports of one region or country",
    long_about = "List up to --limit ports (1 to 200, default 50) whose \
                  region or country label contains the given name, ignoring \
                  case, in catalogue order."
)]
#[ortho_config(prefix = "TIDEWATER")]
pub(crate) struct RegionPortsArgs {
    /// Region or country name to match.
    #[arg(long = ARG_REGION, value_name = "name")]
    #[serde(default)]
    pub(crate) region: Option<String>,
    /// Maximum number of ports, 1 to 200 (default: 50).
    #[arg(long, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Path to the SQLite port database.
    #[arg(long = ARG_PORTS_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) ports_db: Option<Utf8PathBuf>,
}

/// Resolved `region-ports` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RegionPortsConfig {
    pub(crate) region: String,
    pub(crate) limit: usize,
    pub(crate) ports_db: Utf8PathBuf,
}

impl RegionPortsArgs {
    pub(crate) fn into_config(self) -> Result<RegionPortsConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RegionPortsConfig::try_from(merged)
    }
}

impl TryFrom<RegionPortsArgs> for RegionPortsConfig {
    type Error = CliError;

    fn try_from(args: RegionPortsArgs) -> Result<Self, Self::Error> {
        let region = args
            .region
            .map(|raw| raw.trim().to_owned())
            .filter(|region| !region.is_empty())
            .ok_or(CliError::MissingArgument {
                field: ARG_REGION,
                env: ENV_REGION,
            })?;
        let limit = args.limit.unwrap_or(DEFAULT_REGION_PORTS_LIMIT);
        if !REGION_PORTS_LIMIT.contains(&limit) {
            return Err(CliError::InvalidRegionLimit { limit });
        }
        Ok(Self {
            region,
            limit,
            ports_db: args
                .ports_db
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_PORTS_DB)),
        })
    }
}

pub(crate) fn run_region_ports(args: RegionPortsArgs) -> Result<RegionPortsReport, CliError> {
    let config = args.into_config()?;
    let registry = open_registry(Some(config.ports_db))?;
    let ports = registry
        .list_by_region(&config.region, config.limit)
        .map_err(PlanError::from)?;
    if ports.is_empty() {
        return Err(PlanError::RegionEmpty {
            region: config.region,
        }
        .into());
    }
    Ok(RegionPortsReport {
        state: config.region,
        port_count: ports.len(),
        ports: ports.into_iter().map(PortReport::from).collect(),
    })
}

/// CLI arguments for the `list-regions` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "list-regions",
    about = "List the regions and countries in the catalogue"
)]
#[ortho_config(prefix = "TIDEWATER")]
pub(crate) struct ListRegionsArgs {
    /// Path to the SQLite port database.
    #[arg(long = ARG_PORTS_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) ports_db: Option<Utf8PathBuf>,
}

pub(crate) fn run_list_regions(args: ListRegionsArgs) -> Result<RegionListReport, CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let registry = open_registry(merged.ports_db)?;
    let states = registry.regions()?;
    Ok(RegionListReport {
        count: states.len(),
        states,
    })
}

/// CLI arguments for the `import` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "import",
    about = "Load a CSV port catalogue into the port database",
    long_about = "Replace the ports table of the SQLite database with the \
                  rows of a CSV catalogue (PortName, Country, Latitude, \
                  Longitude). Incomplete, invalid and duplicate rows are \
                  skipped and counted."
)]
#[ortho_config(prefix = "TIDEWATER")]
pub(crate) struct ImportArgs {
    /// Path to the CSV catalogue.
    #[arg(long = ARG_CSV, value_name = "path")]
    #[serde(default)]
    pub(crate) csv: Option<Utf8PathBuf>,
    /// Path to the SQLite port database to write.
    #[arg(long = ARG_PORTS_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) ports_db: Option<Utf8PathBuf>,
}

/// Resolved `import` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ImportConfig {
    pub(crate) csv: Utf8PathBuf,
    pub(crate) ports_db: Utf8PathBuf,
}

impl ImportArgs {
    pub(crate) fn into_config(self) -> Result<ImportConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ImportConfig::try_from(merged)
    }
}

impl TryFrom<ImportArgs> for ImportConfig {
    type Error = CliError;

    fn try_from(args: ImportArgs) -> Result<Self, Self::Error> {
        let csv = args.csv.ok_or(CliError::MissingArgument {
            field: ARG_CSV,
            env: ENV_CSV,
        })?;
        Ok(Self {
            csv,
            ports_db: args
                .ports_db
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_PORTS_DB)),
        })
    }
}

pub(crate) fn run_import(args: ImportArgs) -> Result<ImportReport, CliError> {
    let config = args.into_config()?;
    require_existing(&config.csv, ARG_CSV)?;
    let summary = import_ports_csv(&config.csv, &config.ports_db)?;
    Ok(ImportReport::from(summary))
}
