//! `RoutePlanner`: name resolution, stop ordering and route assembly.

use log::{debug, info};
use tidewater_core::{
    MultiPortRequest, PlanError, Port, PortRegistry, RegionRouteRequest, Route, RouteOptimizer,
    SingleRouteRequest,
};

use crate::NearestNeighbourOptimizer;

/// Builds routes from port and region names.
///
/// The planner is generic over its two collaborators: a [`PortRegistry`]
/// that resolves names to coordinates and a [`RouteOptimizer`] that orders
/// stops. Every operation validates its request before touching the
/// registry, and any failure aborts the call without a partial route.
#[derive(Debug, Clone)]
pub struct RoutePlanner<R, O = NearestNeighbourOptimizer>
where
    R: PortRegistry,
    O: RouteOptimizer,
{
    registry: R,
    optimizer: O,
}

impl<R> RoutePlanner<R>
where
    R: PortRegistry,
{
    /// Construct a planner ordering stops with [`NearestNeighbourOptimizer`].
    #[must_use]
    pub const fn new(registry: R) -> Self {
        Self::with_optimizer(registry, NearestNeighbourOptimizer)
    }
}

impl<R, O> RoutePlanner<R, O>
where
    R: PortRegistry,
    O: RouteOptimizer,
{
    /// Construct a planner with an explicit stop-ordering strategy.
    #[must_use]
    pub const fn with_optimizer(registry: R, optimizer: O) -> Self {
        Self {
            registry,
            optimizer,
        }
    }

    /// Registry used for lookups.
    #[must_use]
    pub const fn registry(&self) -> &R {
        &self.registry
    }

    /// Plan a direct voyage between two ports.
    ///
    /// # Errors
    /// Returns [`PlanError::PortNotFound`] naming the first unresolved port,
    /// or [`PlanError::RegistryUnavailable`] when a lookup fails.
    ///
    /// # Examples
    /// ```
    /// use tidewater_core::{ShipType, SingleRouteRequest, Port};
    /// use tidewater_core::test_support::MemoryRegistry;
    /// use tidewater_planner::RoutePlanner;
    ///
    /// let registry = MemoryRegistry::with_ports([
    ///     Port::from_lat_lon("A", "Equator", 0.0, 0.0),
    ///     Port::from_lat_lon("B", "Equator", 0.0, 1.0),
    /// ]);
    /// let planner = RoutePlanner::new(registry);
    /// let route = planner.plan_single(&SingleRouteRequest {
    ///     start: "a".into(),
    ///     destination: "B".into(),
    ///     ship_type: ShipType::Standard,
    /// })?;
    /// assert_eq!(route.port_names(), ["A", "B"]);
    /// assert_eq!(route.total_fuel_tons(), 5.57);
    /// # Ok::<(), tidewater_core::PlanError>(())
    /// ```
    pub fn plan_single(&self, request: &SingleRouteRequest) -> Result<Route, PlanError> {
        request.validate()?;
        let start = self.resolve(&request.start)?;
        let destination = self.resolve(&request.destination)?;
        let route = Route::assemble(vec![start, destination], request.ship_type, true)?;
        log_route("single", &route);
        Ok(route)
    }

    /// Plan a voyage through an explicit list of ports.
    ///
    /// Names resolve in input order. With `optimize` set and more than two
    /// ports, the stops are reordered by the optimizer with the first port
    /// kept as the anchor; otherwise the caller's order is used.
    ///
    /// # Errors
    /// Returns [`PlanError::InsufficientPorts`] for fewer than two names,
    /// [`PlanError::PortNotFound`] naming the first unresolved entry, or
    /// [`PlanError::RegistryUnavailable`] when a lookup fails.
    pub fn plan_multi(&self, request: &MultiPortRequest) -> Result<Route, PlanError> {
        request.validate()?;
        let ports = request
            .ports
            .iter()
            .map(|name| self.resolve(name))
            .collect::<Result<Vec<_>, _>>()?;

        let ordered = if request.optimize && ports.len() > 2 {
            self.optimizer.optimize(ports)
        } else {
            ports
        };
        let route = Route::assemble(ordered, request.ship_type, request.optimize)?;
        log_route("multi-port", &route);
        Ok(route)
    }

    /// Plan a voyage through up to `ports_per_region` ports of each region.
    ///
    /// Regions are fetched one after another in input order and their ports
    /// concatenated before the optimizer runs, so the first port of the
    /// first region anchors the route.
    ///
    /// # Errors
    /// Returns [`PlanError::InsufficientRegions`] for fewer than two regions,
    /// [`PlanError::InvalidArgument`] when `ports_per_region` is outside
    /// `1..=10`, [`PlanError::RegionEmpty`] naming the first region without
    /// ports, or [`PlanError::RegistryUnavailable`] when a fetch fails.
    pub fn plan_regions(&self, request: &RegionRouteRequest) -> Result<Route, PlanError> {
        request.validate()?;
        let mut ports = Vec::with_capacity(
            request
                .regions
                .len()
                .saturating_mul(request.ports_per_region),
        );
        for region in &request.regions {
            let found = self
                .registry
                .list_by_region(region, request.ports_per_region)?;
            debug!("region '{region}' yielded {} ports", found.len());
            if found.is_empty() {
                return Err(PlanError::RegionEmpty {
                    region: region.clone(),
                });
            }
            ports.extend(found);
        }

        let ordered = self.optimizer.optimize(ports);
        let route = Route::assemble(ordered, request.ship_type, true)?;
        log_route("multi-region", &route);
        Ok(route)
    }

    fn resolve(&self, name: &str) -> Result<Port, PlanError> {
        let port = self
            .registry
            .lookup_by_name(name)?
            .ok_or_else(|| PlanError::PortNotFound {
                name: name.to_owned(),
            })?;
        debug!(
            "resolved port '{name}' to {} ({}, {})",
            port.name,
            port.latitude(),
            port.longitude()
        );
        Ok(port)
    }
}

fn log_route(kind: &str, route: &Route) {
    info!(
        "planned {kind} route through {} ports: {:.2} km, {:.2} t of fuel ({})",
        route.ports().len(),
        route.total_distance_km(),
        route.total_fuel_tons(),
        route.ship_type()
    );
}

#[cfg(test)]
mod tests;
