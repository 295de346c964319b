use crate::Port;

/// Orders a set of ports into a travel sequence.
///
/// Implementations must return a permutation of the input: every entry,
/// duplicates included, appears exactly once in the output. The first input
/// port is the anchor and must stay first. Optimisers must be `Send + Sync`
/// so a planner can be shared across threads.
///
/// # Examples
///
/// ```rust
/// use tidewater_core::{Port, RouteOptimizer};
///
/// struct Reverse;
///
/// impl RouteOptimizer for Reverse {
///     fn optimize(&self, mut ports: Vec<Port>) -> Vec<Port> {
///         if ports.len() > 2 {
///             ports[1..].reverse();
///         }
///         ports
///     }
/// }
///
/// let ports = vec![
///     Port::from_lat_lon("A", "R", 0.0, 0.0),
///     Port::from_lat_lon("B", "R", 0.0, 1.0),
///     Port::from_lat_lon("C", "R", 0.0, 2.0),
/// ];
/// let names: Vec<_> = Reverse.optimize(ports).into_iter().map(|p| p.name).collect();
/// assert_eq!(names, ["A", "C", "B"]);
/// ```
pub trait RouteOptimizer: Send + Sync {
    /// Reorder `ports`, keeping the first entry in place.
    fn optimize(&self, ports: Vec<Port>) -> Vec<Port>;
}

impl<T: RouteOptimizer + ?Sized> RouteOptimizer for &T {
    fn optimize(&self, ports: Vec<Port>) -> Vec<Port> {
        (**self).optimize(ports)
    }
}

impl<T: RouteOptimizer + ?Sized> RouteOptimizer for Box<T> {
    fn optimize(&self, ports: Vec<Port>) -> Vec<Port> {
        (**self).optimize(ports)
    }
}
