//! Routes through an ordered sequence of ports.
//!
//! A [`Route`] is assembled once from its finalised port order and is not
//! mutated afterwards. Assembly derives one [`RouteSegment`] per consecutive
//! pair of ports and aggregates the totals.
//!
//! Total fuel is recomputed from the total distance rather than summed from
//! the already-rounded segment fuel figures, so `total_fuel_tons` may differ
//! from the segment sum by a few hundredths.

use thiserror::Error;

use crate::{Port, ShipType, distance_km, fuel_tons};

/// One leg of a route between two consecutive ports.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSegment {
    /// Name of the departure port.
    pub from: String,
    /// Name of the arrival port.
    pub to: String,
    /// Unrounded geodesic distance in kilometres.
    pub distance_km: f64,
    /// Fuel for this leg in tons, rounded to two decimals.
    pub fuel_tons: f64,
}

impl RouteSegment {
    /// Measure the leg between two ports.
    pub fn between(from: &Port, to: &Port, ship_type: ShipType) -> Self {
        let distance = distance_km(from.location, to.location);
        Self {
            from: from.name.clone(),
            to: to.name.clone(),
            distance_km: distance,
            fuel_tons: fuel_tons(distance, ship_type),
        }
    }
}

/// Errors returned by [`Route::assemble`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No ports were supplied.
    #[error("route must contain at least one port")]
    Empty,
}

/// An ordered voyage with per-leg and aggregate distance and fuel figures.
///
/// # Examples
/// ```
/// use tidewater_core::{Port, Route, ShipType};
///
/// # fn main() -> Result<(), tidewater_core::RouteError> {
/// let ports = vec![
///     Port::from_lat_lon("A", "Equator", 0.0, 0.0),
///     Port::from_lat_lon("B", "Equator", 0.0, 1.0),
/// ];
/// let route = Route::assemble(ports, ShipType::Standard, false)?;
///
/// assert_eq!(route.segments().len(), 1);
/// assert_eq!(route.port_names(), vec!["A", "B"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Route {
    ports: Vec<Port>,
    segments: Vec<RouteSegment>,
    total_distance_km: f64,
    total_fuel_tons: f64,
    ship_type: ShipType,
    optimized: bool,
}

impl Route {
    /// Build a route visiting `ports` in the given order.
    pub fn assemble(
        ports: Vec<Port>,
        ship_type: ShipType,
        optimized: bool,
    ) -> Result<Self, RouteError> {
        if ports.is_empty() {
            return Err(RouteError::Empty);
        }
        let segments: Vec<RouteSegment> = ports
            .windows(2)
            .filter_map(|pair| match pair {
                [from, to] => Some(RouteSegment::between(from, to, ship_type)),
                _ => None,
            })
            .collect();
        let total_distance_km: f64 = segments.iter().map(|segment| segment.distance_km).sum();
        let total_fuel_tons = fuel_tons(total_distance_km, ship_type);
        Ok(Self {
            ports,
            segments,
            total_distance_km,
            total_fuel_tons,
            ship_type,
            optimized,
        })
    }

    /// Ports in visiting order.
    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    /// Legs between consecutive ports.
    pub fn segments(&self) -> &[RouteSegment] {
        &self.segments
    }

    /// Sum of the unrounded segment distances.
    pub const fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    /// Fuel for the whole voyage, derived from the total distance.
    pub const fn total_fuel_tons(&self) -> f64 {
        self.total_fuel_tons
    }

    /// Ship type the fuel figures were computed for.
    pub const fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    /// Whether the port order came from an optimiser.
    pub const fn optimized(&self) -> bool {
        self.optimized
    }

    /// Port names in visiting order.
    pub fn port_names(&self) -> Vec<&str> {
        self.ports.iter().map(|port| port.name.as_str()).collect()
    }
}
