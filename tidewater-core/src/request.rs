//! Planning requests and their input validation.
//!
//! Each request type mirrors one planning operation. `validate` checks the
//! caller-supplied shape of the request before any registry lookup happens.

use std::ops::RangeInclusive;

use crate::{PlanError, ShipType};

/// Minimum number of port names for a multi-port route.
pub const MIN_ROUTE_PORTS: usize = 2;

/// Minimum number of regions for a multi-region route.
pub const MIN_ROUTE_REGIONS: usize = 2;

/// Accepted range for the number of ports drawn from each region.
pub const PORTS_PER_REGION: RangeInclusive<usize> = 1..=10;

/// Ports drawn from each region when the caller does not say otherwise.
pub const DEFAULT_PORTS_PER_REGION: usize = 3;

/// Split a comma-separated list, trimming entries and dropping empty ones.
///
/// # Examples
/// ```
/// use tidewater_core::split_name_list;
///
/// assert_eq!(split_name_list(" Rotterdam, ,Hamburg,"), vec!["Rotterdam", "Hamburg"]);
/// ```
pub fn split_name_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_owned)
        .collect()
}

/// A point-to-point route between two named ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleRouteRequest {
    /// Departure port name.
    pub start: String,
    /// Arrival port name.
    pub destination: String,
    /// Ship type used for fuel figures.
    pub ship_type: ShipType,
}

impl SingleRouteRequest {
    /// Check both names are present.
    pub fn validate(&self) -> Result<(), PlanError> {
        require_name(&self.start, "start port")?;
        require_name(&self.destination, "destination port")
    }
}

/// A route through an explicit list of named ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiPortRequest {
    /// Port names in caller order; the first is the anchor.
    pub ports: Vec<String>,
    /// Ship type used for fuel figures.
    pub ship_type: ShipType,
    /// Reorder the stops with the optimiser when more than two are given.
    pub optimize: bool,
}

impl MultiPortRequest {
    /// Check at least two non-blank names were supplied.
    ///
    /// # Examples
    /// ```
    /// use tidewater_core::{MultiPortRequest, PlanError, ShipType};
    ///
    /// let request = MultiPortRequest {
    ///     ports: vec!["Rotterdam".into()],
    ///     ship_type: ShipType::Cargo,
    ///     optimize: true,
    /// };
    /// assert!(matches!(
    ///     request.validate(),
    ///     Err(PlanError::InsufficientPorts { found: 1 })
    /// ));
    /// ```
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.ports.len() < MIN_ROUTE_PORTS {
            return Err(PlanError::InsufficientPorts {
                found: self.ports.len(),
            });
        }
        self.ports
            .iter()
            .try_for_each(|name| require_name(name, "port name"))
    }
}

/// A route visiting a handful of ports in each of several regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionRouteRequest {
    /// Region labels in caller order.
    pub regions: Vec<String>,
    /// Ship type used for fuel figures.
    pub ship_type: ShipType,
    /// Upper bound on ports drawn from each region.
    pub ports_per_region: usize,
}

impl RegionRouteRequest {
    /// Check the region count and the per-region port bound.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.regions.len() < MIN_ROUTE_REGIONS {
            return Err(PlanError::InsufficientRegions {
                found: self.regions.len(),
            });
        }
        if !PORTS_PER_REGION.contains(&self.ports_per_region) {
            return Err(PlanError::invalid_argument(format!(
                "ports per region must be between {} and {}, got {}",
                PORTS_PER_REGION.start(),
                PORTS_PER_REGION.end(),
                self.ports_per_region
            )));
        }
        self.regions
            .iter()
            .try_for_each(|region| require_name(region, "region"))
    }
}

fn require_name(name: &str, what: &str) -> Result<(), PlanError> {
    if name.trim().is_empty() {
        Err(PlanError::invalid_argument(format!("{what} must not be blank")))
    } else {
        Ok(())
    }
}
