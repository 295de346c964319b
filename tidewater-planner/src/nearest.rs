//! Greedy nearest-neighbour stop ordering.

use tidewater_core::{Port, RouteOptimizer, distance_km};

/// Orders ports by repeatedly travelling to the closest unvisited port.
///
/// The first port is the anchor and always leads the output. Inputs of two
/// ports or fewer are returned unchanged. Ties go to the candidate that
/// appears first in the input. The result is an open path with no return
/// leg to the anchor. Cost is `O(n²)` distance evaluations.
///
/// # Examples
/// ```
/// use tidewater_core::{Port, RouteOptimizer};
/// use tidewater_planner::NearestNeighbourOptimizer;
///
/// let ports = vec![
///     Port::from_lat_lon("A", "Equator", 0.0, 0.0),
///     Port::from_lat_lon("C", "Equator", 0.0, 2.0),
///     Port::from_lat_lon("B", "Equator", 0.0, 1.0),
/// ];
/// let names: Vec<_> = NearestNeighbourOptimizer
///     .optimize(ports)
///     .into_iter()
///     .map(|port| port.name)
///     .collect();
/// assert_eq!(names, ["A", "B", "C"]);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestNeighbourOptimizer;

impl RouteOptimizer for NearestNeighbourOptimizer {
    fn optimize(&self, ports: Vec<Port>) -> Vec<Port> {
        if ports.len() <= 2 {
            return ports;
        }
        let order = visiting_order(&ports);
        let mut slots: Vec<Option<Port>> = ports.into_iter().map(Some).collect();
        order
            .into_iter()
            .filter_map(|index| slots.get_mut(index).and_then(Option::take))
            .collect()
    }
}

/// Indices of `ports` in nearest-neighbour order, starting from index 0.
fn visiting_order(ports: &[Port]) -> Vec<usize> {
    let mut visited = vec![false; ports.len()];
    let mut order = Vec::with_capacity(ports.len());
    let mut current = 0_usize;
    if let Some(anchor) = visited.first_mut() {
        *anchor = true;
        order.push(current);
    }

    while order.len() < ports.len() {
        let Some(from) = ports.get(current) else {
            break;
        };
        let Some(next) = nearest_unvisited(ports, &visited, from) else {
            break;
        };
        if let Some(flag) = visited.get_mut(next) {
            *flag = true;
        }
        order.push(next);
        current = next;
    }
    order
}

/// Closest unvisited port to `from`; the earliest index wins ties.
fn nearest_unvisited(ports: &[Port], visited: &[bool], from: &Port) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, (candidate, seen)) in ports.iter().zip(visited).enumerate() {
        if *seen {
            continue;
        }
        let distance = distance_km(from.location, candidate.location);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}

/// Keeps the caller's port order.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityOptimizer;

impl RouteOptimizer for IdentityOptimizer {
    fn optimize(&self, ports: Vec<Port>) -> Vec<Port> {
        ports
    }
}
