use crate::graph::traits::model::definition::{Model, Neighbors};
use crate::graph::Graph;
use crate::primitive::{Entry, Node};

use geo::Point;
use petgraph::Direction;

#[cfg(feature = "tracing")]
use tracing::Level;

impl<E> Model<E> for Graph<E>
where
    E: Entry,
{
    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::DEBUG, skip(self)))]
    #[inline]
    fn nearest_node(&self, fraction: Point) -> Option<&Node<E>> {
        let position = self.denormalize(fraction)?;
        self.index.nearest_neighbor(&position)
    }

    #[inline]
    fn node(&self, id: &E) -> Option<&Node<E>> {
        self.hash.get(id)
    }

    #[inline]
    fn expand_neighbors<F>(&self, node: &E, is_visited: F) -> Neighbors<E>
    where
        F: Fn(&E) -> bool,
    {
        if !self.graph.contains_node(*node) {
            return Neighbors::new();
        }

        self.graph
            .neighbors_directed(*node, Direction::Outgoing)
            .filter(|neighbor| !is_visited(neighbor))
            .collect()
    }

    #[inline]
    fn metric_scale(&self) -> f64 {
        self.metric_scale
    }
}
