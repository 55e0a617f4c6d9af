use crate::primitive::{Entry, Node};

use geo::LineString;

/// A route found by the planner.
///
/// Owns copies of the nodes it passes through, so it stays valid
/// regardless of what later happens to the graph or the planner.
#[derive(Debug, Clone, PartialEq)]
pub struct Route<E>
where
    E: Entry,
{
    /// Nodes in travel order, from the start node to the end node.
    pub nodes: Vec<Node<E>>,
    /// Total length of the route in metres.
    pub distance: f64,
}

impl<E> Route<E>
where
    E: Entry,
{
    pub fn new(nodes: Vec<Node<E>>, distance: f64) -> Self {
        Self { nodes, distance }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn start(&self) -> Option<&Node<E>> {
        self.nodes.first()
    }

    pub fn end(&self) -> Option<&Node<E>> {
        self.nodes.last()
    }

    /// Identifiers of the route's nodes, in travel order.
    pub fn ids(&self) -> impl Iterator<Item = E> + '_ {
        self.nodes.iter().map(|node| node.id)
    }

    /// The route's native positions as a [`LineString`].
    pub fn linestring(&self) -> LineString {
        self.nodes.iter().map(|node| node.position).collect()
    }
}
