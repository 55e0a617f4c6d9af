use crate::graph::Model;
use crate::primitive::{Entry, Node};

/// Straight-line estimate of the cost remaining from `node` to `end`.
///
/// Admissible whenever traversing a segment costs at least the straight-line
/// distance between its endpoints, which holds for any [`Model`] whose
/// segment cost and heuristic share the same [`Model::distance`].
#[inline]
pub fn straight_line<E, M>(model: &M, node: &Node<E>, end: &Node<E>) -> f64
where
    E: Entry,
    M: Model<E>,
{
    model.distance(node, end)
}
