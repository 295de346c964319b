//! JSON report shapes printed by the CLI.
//!
//! Distances and fuel figures are rounded to two decimals for display only;
//! the underlying route keeps full precision.

use serde::Serialize;
use tidewater_core::{Port, Route, RouteSegment, round_to_cents};
use tidewater_data::ImportSummary;

/// One leg of a printed route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentReport {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
    pub fuel_tons: f64,
}

impl From<&RouteSegment> for SegmentReport {
    fn from(segment: &RouteSegment) -> Self {
        Self {
            from: segment.from.clone(),
            to: segment.to.clone(),
            distance_km: round_to_cents(segment.distance_km),
            fuel_tons: segment.fuel_tons,
        }
    }
}

fn segments(route: &Route) -> Vec<SegmentReport> {
    route.segments().iter().map(SegmentReport::from).collect()
}

fn stop_names(route: &Route) -> Vec<String> {
    route.ports().iter().map(|port| port.name.clone()).collect()
}

/// Output of the `route` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SingleRouteReport {
    pub start_port: String,
    pub destination_port: String,
    pub total_distance_km: f64,
    pub total_fuel_tons: f64,
    pub ship_type: String,
    pub segments: Vec<SegmentReport>,
}

impl From<&Route> for SingleRouteReport {
    fn from(route: &Route) -> Self {
        let names = stop_names(route);
        Self {
            start_port: names.first().cloned().unwrap_or_default(),
            destination_port: names.last().cloned().unwrap_or_default(),
            total_distance_km: round_to_cents(route.total_distance_km()),
            total_fuel_tons: route.total_fuel_tons(),
            ship_type: route.ship_type().to_string(),
            segments: segments(route),
        }
    }
}

/// Output of the `multi` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiRouteReport {
    pub route: Vec<String>,
    pub total_distance_km: f64,
    pub total_fuel_tons: f64,
    pub ship_type: String,
    pub segments: Vec<SegmentReport>,
    pub optimized: bool,
}

impl From<&Route> for MultiRouteReport {
    fn from(route: &Route) -> Self {
        Self {
            route: stop_names(route),
            total_distance_km: round_to_cents(route.total_distance_km()),
            total_fuel_tons: route.total_fuel_tons(),
            ship_type: route.ship_type().to_string(),
            segments: segments(route),
            optimized: route.optimized(),
        }
    }
}

/// Output of the `regions` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionRouteReport {
    pub states: Vec<String>,
    pub route: Vec<String>,
    pub total_distance_km: f64,
    pub total_fuel_tons: f64,
    pub ship_type: String,
    pub segments: Vec<SegmentReport>,
    pub ports_per_state: usize,
}

impl RegionRouteReport {
    /// Describe `route`, planned over `regions` with `ports_per_region`.
    pub fn new(route: &Route, regions: Vec<String>, ports_per_region: usize) -> Self {
        Self {
            states: regions,
            route: stop_names(route),
            total_distance_km: round_to_cents(route.total_distance_km()),
            total_fuel_tons: route.total_fuel_tons(),
            ship_type: route.ship_type().to_string(),
            segments: segments(route),
            ports_per_state: ports_per_region,
        }
    }
}

/// One catalogue entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortReport {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Port> for PortReport {
    fn from(port: Port) -> Self {
        Self {
            latitude: port.latitude(),
            longitude: port.longitude(),
            name: port.name,
            country: port.region,
        }
    }
}

/// Output of the `ports` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortListReport {
    pub ports: Vec<PortReport>,
}

/// Output of the `region-ports` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionPortsReport {
    pub state: String,
    pub port_count: usize,
    pub ports: Vec<PortReport>,
}

/// Output of the `list-regions` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionListReport {
    pub states: Vec<String>,
    pub count: usize,
}

/// Output of the `import` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped_incomplete: usize,
    pub skipped_invalid: usize,
    pub skipped_duplicate: usize,
}

impl From<ImportSummary> for ImportReport {
    fn from(summary: ImportSummary) -> Self {
        Self {
            imported: summary.imported,
            skipped_incomplete: summary.skipped_incomplete,
            skipped_invalid: summary.skipped_invalid,
            skipped_duplicate: summary.skipped_duplicate,
        }
    }
}
