//! Command-line interface for the Tidewater voyage planner.
//!
//! Every subcommand prints a pretty JSON report to stdout. Options layer
//! through `ortho_config`: command-line flags override `TIDEWATER_*`
//! environment variables, which override configuration files.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod catalogue;
mod error;
mod fs;
mod plan;
mod report;

use catalogue::{ImportArgs, ListRegionsArgs, PortsArgs, RegionPortsArgs};
use plan::{MultiArgs, RegionsArgs, RouteArgs};

pub use error::{CliError, EXIT_FAILURE, EXIT_USAGE};

pub(crate) const ARG_START: &str = "start";
pub(crate) const ARG_DESTINATION: &str = "destination";
pub(crate) const ARG_PORTS: &str = "ports";
pub(crate) const ARG_REGIONS: &str = "regions";
pub(crate) const ARG_SHIP_TYPE: &str = "ship-type";
pub(crate) const ARG_PORTS_PER_REGION: &str = "ports-per-region";
pub(crate) const ARG_PORTS_DB: &str = "ports-db";
pub(crate) const ARG_CSV: &str = "csv";
pub(crate) const ARG_REGION: &str = "region";
pub(crate) const ENV_START: &str = "TIDEWATER_CMDS_ROUTE_START";
pub(crate) const ENV_DESTINATION: &str = "TIDEWATER_CMDS_ROUTE_DESTINATION";
pub(crate) const ENV_PORTS: &str = "TIDEWATER_CMDS_MULTI_PORTS";
pub(crate) const ENV_REGIONS: &str = "TIDEWATER_CMDS_REGIONS_REGIONS";
pub(crate) const ENV_CSV: &str = "TIDEWATER_CMDS_IMPORT_CSV";
pub(crate) const ENV_REGION: &str = "TIDEWATER_CMDS_REGION_PORTS_REGION";
pub(crate) const DEFAULT_PORTS_DB: &str = "ports.db";

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "TIDEWATER_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the stderr log subscriber.
///
/// Filter directives come from [`LOG_ENV`] (for example
/// `TIDEWATER_LOG=tidewater_planner=debug`) and default to warnings only.
/// Records emitted through the `log` facade are forwarded as well.
pub fn init_logging() -> Result<(), CliError> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init()
        .map_err(CliError::InitLogging)
}

/// Run the Tidewater CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    run_with(cli, &mut stdout)
}

fn run_with(cli: Cli, writer: &mut dyn Write) -> Result<(), CliError> {
    match cli.command {
        Command::Route(args) => write_report(writer, &plan::run_route(args)?),
        Command::Multi(args) => write_report(writer, &plan::run_multi(args)?),
        Command::Regions(args) => write_report(writer, &plan::run_regions(args)?),
        Command::Ports(args) => write_report(writer, &catalogue::run_ports(args)?),
        Command::RegionPorts(args) => {
            write_report(writer, &catalogue::run_region_ports(args)?)
        }
        Command::ListRegions(args) => write_report(writer, &catalogue::run_list_regions(args)?),
        Command::Import(args) => write_report(writer, &catalogue::run_import(args)?),
    }
}

fn write_report<T: Serialize>(writer: &mut dyn Write, report: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteReport)?;
    writer.write_all(b"\n").map_err(CliError::WriteReport)?;
    Ok(())
}

#[derive(Debug, Parser)]
#[command(
    name = "tidewater",
    about = "Voyage distance, fuel and port-ordering estimates",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan a direct voyage between two ports.
    Route(RouteArgs),
    /// Plan a voyage through several named ports.
    Multi(MultiArgs),
    /// Plan a voyage through the ports of several regions.
    Regions(RegionsArgs),
    /// Page through the port catalogue.
    Ports(PortsArgs),
    /// List the ports of one region or country.
    RegionPorts(RegionPortsArgs),
    /// List the regions and countries in the catalogue.
    ListRegions(ListRegionsArgs),
    /// Load a CSV port catalogue into the port database.
    Import(ImportArgs),
}

#[cfg(test)]
mod tests;
