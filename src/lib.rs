//! Facade crate for the Tidewater voyage planner.
//!
//! This crate re-exports the core domain types together with the route
//! planner, and exposes the SQLite port registry behind a feature flag.

#![forbid(unsafe_code)]

pub use tidewater_core::{
    MultiPortRequest, PlanError, Port, PortRegistry, RegionRouteRequest, RegistryError, Route,
    RouteError, RouteOptimizer, RouteSegment, ShipType, SingleRouteRequest, distance_km, fuel_tons,
};

#[cfg(feature = "store-sqlite")]
pub use tidewater_core::{SqlitePortRegistry, SqlitePortRegistryError};

pub use tidewater_planner::{IdentityOptimizer, NearestNeighbourOptimizer, RoutePlanner};
