//! Tests for `RoutePlanner`.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use rstest::{fixture, rstest};
use tidewater_core::ShipType;
use tidewater_core::test_support::{FailingRegistry, MemoryRegistry};

use crate::IdentityOptimizer;

/// Counts calls and keeps the input order.
#[derive(Default)]
struct CountingOptimizer {
    calls: AtomicUsize,
}

impl RouteOptimizer for CountingOptimizer {
    fn optimize(&self, ports: Vec<Port>) -> Vec<Port> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        ports
    }
}

fn names(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|name| (*name).to_owned()).collect()
}

fn multi(ports: &[&str], optimize: bool) -> MultiPortRequest {
    MultiPortRequest {
        ports: names(ports),
        ship_type: ShipType::Standard,
        optimize,
    }
}

fn regions(raw: &[&str], ports_per_region: usize) -> RegionRouteRequest {
    RegionRouteRequest {
        regions: names(raw),
        ship_type: ShipType::Cargo,
        ports_per_region,
    }
}

#[fixture]
fn registry() -> MemoryRegistry {
    MemoryRegistry::with_ports([
        Port::from_lat_lon("A", "Equator", 0.0, 0.0),
        Port::from_lat_lon("B", "Equator", 0.0, 1.0),
        Port::from_lat_lon("C", "Equator", 0.0, 2.0),
        Port::from_lat_lon("Bergen", "Norway", 60.39, 5.32),
        Port::from_lat_lon("Oslo", "Norway", 59.91, 10.75),
        Port::from_lat_lon("Stavanger", "Norway", 58.97, 5.73),
        Port::from_lat_lon("Aarhus", "Denmark", 56.15, 10.21),
        Port::from_lat_lon("Copenhagen", "Denmark", 55.68, 12.57),
    ])
}

#[rstest]
fn single_route_has_one_segment(registry: MemoryRegistry) {
    let planner = RoutePlanner::new(registry);
    let route = planner
        .plan_single(&SingleRouteRequest {
            start: "bergen".into(),
            destination: "OSLO".into(),
            ship_type: ShipType::Tanker,
        })
        .expect("route");

    assert_eq!(route.port_names(), ["Bergen", "Oslo"]);
    let [segment] = route.segments() else {
        panic!("expected exactly one segment");
    };
    assert!((route.total_distance_km() - segment.distance_km).abs() < 1e-9);
    assert!((route.total_fuel_tons() - segment.fuel_tons).abs() < 1e-9);
    assert_eq!(route.ship_type(), ShipType::Tanker);
    assert!(route.optimized());
}

#[rstest]
#[case("Atlantis", "Oslo", "Atlantis")]
#[case("Oslo", "Atlantis", "Atlantis")]
fn single_route_reports_missing_port(
    registry: MemoryRegistry,
    #[case] start: &str,
    #[case] destination: &str,
    #[case] missing: &str,
) {
    let planner = RoutePlanner::new(registry);
    let err = planner
        .plan_single(&SingleRouteRequest {
            start: start.into(),
            destination: destination.into(),
            ship_type: ShipType::Standard,
        })
        .expect_err("missing port");
    assert!(matches!(err, PlanError::PortNotFound { name } if name == missing));
}

#[rstest]
fn ordered_equator_route_totals(registry: MemoryRegistry) {
    let planner = RoutePlanner::new(registry);
    let route = planner.plan_multi(&multi(&["A", "B", "C"], true)).expect("route");

    assert_eq!(route.port_names(), ["A", "B", "C"]);
    assert!((route.total_distance_km() - 222.638_981_6).abs() < 1e-3);
    assert!((route.total_fuel_tons() - 11.13).abs() < 1e-9);
    let segment_fuel: f64 = route.segments().iter().map(|s| s.fuel_tons).sum();
    assert!((segment_fuel - 11.14).abs() < 1e-9);
}

#[rstest]
fn optimizer_reorders_non_anchor_ports(registry: MemoryRegistry) {
    let planner = RoutePlanner::new(registry);
    let route = planner.plan_multi(&multi(&["A", "C", "B"], true)).expect("route");
    assert_eq!(route.port_names(), ["A", "B", "C"]);
    assert!(route.optimized());
}

#[rstest]
fn caller_order_kept_without_optimisation(registry: MemoryRegistry) {
    let planner = RoutePlanner::new(registry);
    let route = planner.plan_multi(&multi(&["A", "C", "B"], false)).expect("route");
    assert_eq!(route.port_names(), ["A", "C", "B"]);
    assert!(!route.optimized());
}

#[rstest]
#[case(&["A", "B"], true, 0)]
#[case(&["A", "C", "B"], false, 0)]
#[case(&["A", "C", "B"], true, 1)]
fn optimizer_runs_only_for_more_than_two_ports(
    registry: MemoryRegistry,
    #[case] ports: &[&str],
    #[case] optimize: bool,
    #[case] expected_calls: usize,
) {
    let planner = RoutePlanner::with_optimizer(registry, CountingOptimizer::default());
    planner.plan_multi(&multi(ports, optimize)).expect("route");
    assert_eq!(planner.optimizer.calls.load(Ordering::Relaxed), expected_calls);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
fn missing_port_is_named_regardless_of_position(registry: MemoryRegistry, #[case] at: usize) {
    let mut ports = vec!["A", "B", "C"];
    ports.insert(at, "Atlantis");
    let planner = RoutePlanner::new(registry);
    let err = planner.plan_multi(&multi(&ports, true)).expect_err("missing");
    assert!(matches!(err, PlanError::PortNotFound { name } if name == "Atlantis"));
}

#[rstest]
fn first_missing_port_wins(registry: MemoryRegistry) {
    let planner = RoutePlanner::new(registry);
    let err = planner
        .plan_multi(&multi(&["A", "Lemuria", "Atlantis"], true))
        .expect_err("missing");
    assert!(matches!(err, PlanError::PortNotFound { name } if name == "Lemuria"));
}

#[rstest]
#[case(&[])]
#[case(&["A"])]
fn multi_route_needs_two_ports(registry: MemoryRegistry, #[case] ports: &[&str]) {
    let planner = RoutePlanner::new(registry);
    let err = planner.plan_multi(&multi(ports, true)).expect_err("too few");
    assert!(matches!(err, PlanError::InsufficientPorts { found } if found == ports.len()));
}

#[rstest]
fn region_route_concatenates_in_region_order(registry: MemoryRegistry) {
    let planner = RoutePlanner::with_optimizer(registry, IdentityOptimizer);
    let route = planner
        .plan_regions(&regions(&["denmark", "NOR"], 2))
        .expect("route");
    assert_eq!(
        route.port_names(),
        ["Aarhus", "Copenhagen", "Bergen", "Oslo"]
    );
    assert_eq!(route.ship_type(), ShipType::Cargo);
    assert!(route.optimized());
}

#[rstest]
fn region_route_is_anchored_on_first_region(registry: MemoryRegistry) {
    let planner = RoutePlanner::new(registry);
    let route = planner
        .plan_regions(&regions(&["Norway", "Denmark"], 3))
        .expect("route");
    assert_eq!(route.ports().len(), 5);
    assert_eq!(route.port_names().first(), Some(&"Bergen"));
    assert_eq!(route.segments().len(), 4);
}

#[rstest]
fn empty_region_aborts_route(registry: MemoryRegistry) {
    let planner = RoutePlanner::new(registry);
    let err = planner
        .plan_regions(&regions(&["Norway", "Atlantis", "Denmark"], 3))
        .expect_err("empty region");
    assert!(matches!(err, PlanError::RegionEmpty { region } if region == "Atlantis"));
}

#[rstest]
#[case(0)]
#[case(11)]
fn region_route_rejects_port_bound(registry: MemoryRegistry, #[case] bound: usize) {
    let planner = RoutePlanner::new(registry);
    let err = planner
        .plan_regions(&regions(&["Norway", "Denmark"], bound))
        .expect_err("bound rejected");
    assert!(matches!(err, PlanError::InvalidArgument { .. }));
}

#[rstest]
#[case(1, 2)]
#[case(10, 5)]
fn region_route_accepts_port_bound(
    registry: MemoryRegistry,
    #[case] bound: usize,
    #[case] expected_ports: usize,
) {
    let planner = RoutePlanner::new(registry);
    let route = planner
        .plan_regions(&regions(&["Norway", "Denmark"], bound))
        .expect("route");
    assert_eq!(route.ports().len(), expected_ports);
}

#[rstest]
fn region_route_needs_two_regions(registry: MemoryRegistry) {
    let planner = RoutePlanner::new(registry);
    let err = planner
        .plan_regions(&regions(&["Norway"], 3))
        .expect_err("too few");
    assert!(matches!(err, PlanError::InsufficientRegions { found: 1 }));
}

#[rstest]
fn registry_faults_propagate_without_retry() {
    let planner = RoutePlanner::new(FailingRegistry::default());
    let err = planner
        .plan_multi(&multi(&["A", "B", "C"], true))
        .expect_err("fault");
    assert!(matches!(err, PlanError::RegistryUnavailable(_)));
    assert!(!err.is_client_error());
    assert_eq!(planner.registry().calls(), 1);
}

#[rstest]
fn validation_happens_before_lookup() {
    let planner = RoutePlanner::new(FailingRegistry::default());
    let err = planner
        .plan_regions(&regions(&["Norway", "Denmark"], 0))
        .expect_err("invalid");
    assert!(matches!(err, PlanError::InvalidArgument { .. }));
    assert_eq!(planner.registry().calls(), 0);
}
