use crate::primitive::{Entry, Node};

use geo::{coord, Point, Rect};
use petgraph::prelude::DiGraphMap;
use rstar::RTree;
use rustc_hash::{FxHashMap, FxHasher};

use std::fmt::{Debug, Formatter};
use std::hash::BuildHasherDefault;

/// Connectivity of the road network. Road segments carry no weight of their
/// own; traversal cost is the distance between the segment's endpoints.
pub type GraphStructure<E> = DiGraphMap<E, (), BuildHasherDefault<FxHasher>>;

/// In-memory road network.
///
/// Created through a [`GraphBuilder`](crate::graph::GraphBuilder), and consumed
/// by the planner through the [`Model`](crate::graph::Model) trait. The graph
/// itself holds no search state, so any number of searches may borrow it at once.
pub struct Graph<E>
where
    E: Entry,
{
    pub(crate) graph: GraphStructure<E>,
    pub(crate) hash: FxHashMap<E, Node<E>>,

    pub(crate) index: RTree<Node<E>>,
    pub(crate) extent: Option<Rect>,
    pub(crate) metric_scale: f64,
}

impl<E> Debug for Graph<E>
where
    E: Entry,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Graph with Nodes: {}, Segments: {}",
            self.hash.len(),
            self.graph.edge_count()
        )
    }
}

impl<E> Graph<E>
where
    E: Entry,
{
    pub fn index(&self) -> &RTree<Node<E>> {
        &self.index
    }

    pub fn size(&self) -> usize {
        self.hash.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hash.is_empty()
    }

    /// Bounding rectangle of every node position, absent for an empty graph.
    pub fn extent(&self) -> Option<Rect> {
        self.extent
    }

    #[inline]
    pub fn get_position(&self, node_index: &E) -> Option<Point<f64>> {
        self.hash.get(node_index).map(|node| node.position)
    }

    /// Whether a traversable segment leads from `source` to `target`.
    #[inline]
    pub fn is_adjacent(&self, source: &E, target: &E) -> bool {
        self.graph.contains_edge(*source, *target)
    }

    /// Converts a fraction of the graph extent into a native position.
    ///
    /// `(0, 0)` maps to the extent's minimum corner and `(1, 1)` to its
    /// maximum. Fractions outside of that range extrapolate linearly.
    /// Non-finite fractions have no position.
    pub fn denormalize(&self, fraction: Point) -> Option<Point> {
        if !fraction.x().is_finite() || !fraction.y().is_finite() {
            return None;
        }

        let extent = self.extent?;
        let (min, max) = (extent.min(), extent.max());

        Some(Point::from(coord! {
            x: min.x + fraction.x() * (max.x - min.x),
            y: min.y + fraction.y() * (max.y - min.y),
        }))
    }
}
