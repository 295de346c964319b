//! Core domain types for the Tidewater voyage planner.
//!
//! The crate owns the pieces of route construction that carry domain rules:
//! geodesic distance, the per-ship-type fuel model, the route model and its
//! invariants, planning requests and their validation, and the two seams the
//! planner is built against: [`PortRegistry`] for port lookups and
//! [`RouteOptimizer`] for stop ordering.
//!
//! Nothing in this crate holds state between planning calls.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod distance;
mod error;
mod optimizer;
mod port;
pub mod registry;
mod request;
mod route;
mod ship;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use distance::distance_km;
pub use error::PlanError;
pub use optimizer::RouteOptimizer;
pub use port::{Port, PortLocationError};
pub use registry::{PortRegistry, RegistryError};
pub use request::{
    DEFAULT_PORTS_PER_REGION, MIN_ROUTE_PORTS, MIN_ROUTE_REGIONS, MultiPortRequest,
    PORTS_PER_REGION, RegionRouteRequest, SingleRouteRequest, split_name_list,
};
pub use route::{Route, RouteError, RouteSegment};
pub use ship::{ShipType, UnknownShipType, fuel_tons, round_to_cents};

#[cfg(feature = "store-sqlite")]
pub use registry::{SqlitePortRegistry, SqlitePortRegistryError};
