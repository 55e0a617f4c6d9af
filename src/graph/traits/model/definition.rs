use crate::primitive::{Entry, Node};

use geo::Point;
use smallvec::SmallVec;

/// Neighbour lists are almost always short on road networks,
/// intersections rarely join more than a handful of segments.
pub type Neighbors<E> = SmallVec<[E; 8]>;

/// The road network as seen by the planner.
///
/// The planner never mutates the model. Search bookkeeping, including which
/// nodes are visited, lives with the search and is lent to the model through
/// the `is_visited` predicate of [`Model::expand_neighbors`].
pub trait Model<E>
where
    E: Entry,
{
    /// Resolves the node closest to a position given as a fraction of the
    /// graph's extent, where `(0, 0)` and `(1, 1)` are opposite corners.
    ///
    /// Returns `None` when the graph has no nodes.
    fn nearest_node(&self, fraction: Point) -> Option<&Node<E>>;

    /// Looks up a node by its identifier.
    fn node(&self, id: &E) -> Option<&Node<E>>;

    /// Collects the nodes reachable from `node` over a single segment,
    /// excluding any for which `is_visited` holds.
    fn expand_neighbors<F>(&self, node: &E, is_visited: F) -> Neighbors<E>
    where
        F: Fn(&E) -> bool;

    /// Symmetric distance between two nodes, in native units.
    ///
    /// Used both as the heuristic and as the cost of traversing a segment.
    #[inline]
    fn distance(&self, a: &Node<E>, b: &Node<E>) -> f64 {
        a.distance(b)
    }

    /// Multiplicative factor converting native distance into metres.
    fn metric_scale(&self) -> f64;
}
