//! Route construction for Tidewater.
//!
//! This crate provides [`RoutePlanner`], which turns port or region names
//! into a [`Route`](tidewater_core::Route) by resolving them through a
//! [`PortRegistry`](tidewater_core::PortRegistry), optionally reordering the
//! stops, and measuring every leg. Stop ordering defaults to
//! [`NearestNeighbourOptimizer`], a greedy open-path heuristic anchored on the
//! first port.
//!
//! Planning is synchronous and keeps no state between calls.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod nearest;
mod planner;

pub use nearest::{IdentityOptimizer, NearestNeighbourOptimizer};
pub use planner::RoutePlanner;
