use crate::graph::{Graph, GraphError, GraphStructure};
use crate::primitive::{Entry, Node};

use geo::{BoundingRect, MultiPoint, Point};
use itertools::Itertools;
use log::{debug, info};
use rstar::RTree;
use rustc_hash::FxHashMap;

use std::time::Instant;

const DEFAULT_METRIC_SCALE: f64 = 1.0;

#[derive(Debug, Copy, Clone)]
struct Segment<E> {
    source: E,
    target: E,
    one_way: bool,
}

/// Assembles a [`Graph`] from declared nodes and road segments.
///
/// Segments may be declared before the nodes they reference; references are
/// only checked once [`GraphBuilder::build`] is called.
///
/// ```rust
/// use geo::Point;
/// use route_planner::graph::GraphBuilder;
///
/// let graph = GraphBuilder::<u64>::new()
///     .node(0, Point::new(0.0, 0.0))
///     .node(1, Point::new(1.0, 0.0))
///     .node(2, Point::new(1.0, 1.0))
///     .way(&[0, 1, 2], false)
///     .metric_scale(250.0)
///     .build()
///     .expect("nodes are declared");
///
/// assert_eq!(graph.size(), 3);
/// ```
#[derive(Debug)]
pub struct GraphBuilder<E>
where
    E: Entry,
{
    nodes: FxHashMap<E, Node<E>>,
    segments: Vec<Segment<E>>,
    metric_scale: f64,
}

impl<E> Default for GraphBuilder<E>
where
    E: Entry,
{
    fn default() -> Self {
        Self {
            nodes: FxHashMap::default(),
            segments: Vec::new(),
            metric_scale: DEFAULT_METRIC_SCALE,
        }
    }
}

impl<E> GraphBuilder<E>
where
    E: Entry,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a node at a native position. Redeclaring an id moves the node.
    pub fn node(mut self, id: E, position: Point) -> Self {
        if self.nodes.insert(id, Node::new(position, id)).is_some() {
            debug!("Node {id:?} redeclared, keeping latest position");
        }

        self
    }

    /// Declares a two-way road segment between `a` and `b`.
    pub fn edge(self, a: E, b: E) -> Self {
        self.segment(a, b, false)
    }

    /// Declares a road segment only traversable from `source` to `target`.
    pub fn one_way(self, source: E, target: E) -> Self {
        self.segment(source, target, true)
    }

    /// Declares a road passing through `refs` in order, as a segment
    /// between every consecutive pair.
    pub fn way(mut self, refs: &[E], one_way: bool) -> Self {
        self.segments
            .extend(refs.iter().tuple_windows().map(|(a, b)| Segment {
                source: *a,
                target: *b,
                one_way,
            }));

        self
    }

    /// Sets the factor converting native distance into metres.
    pub fn metric_scale(self, metric_scale: f64) -> Self {
        Self {
            metric_scale,
            ..self
        }
    }

    fn segment(mut self, source: E, target: E, one_way: bool) -> Self {
        self.segments.push(Segment {
            source,
            target,
            one_way,
        });

        self
    }

    /// Validates the declarations and indexes them into a [`Graph`].
    pub fn build(self) -> Result<Graph<E>, GraphError> {
        let start_time = Instant::now();

        if !self.metric_scale.is_finite() || self.metric_scale <= 0.0 {
            return Err(GraphError::InvalidScale(self.metric_scale));
        }

        if let Some(node) = self.nodes.values().find(|node| {
            !node.position.x().is_finite() || !node.position.y().is_finite()
        }) {
            return Err(GraphError::InvalidPosition(node.id.identifier()));
        }

        let mut graph = GraphStructure::<E>::default();
        self.nodes.keys().for_each(|id| {
            graph.add_node(*id);
        });

        for segment in &self.segments {
            for endpoint in [segment.source, segment.target] {
                if !self.nodes.contains_key(&endpoint) {
                    return Err(GraphError::UnknownNode(endpoint.identifier()));
                }
            }

            graph.add_edge(segment.source, segment.target, ());
            if !segment.one_way {
                graph.add_edge(segment.target, segment.source, ());
            }
        }

        let extent = self
            .nodes
            .values()
            .map(|node| node.position)
            .collect::<MultiPoint>()
            .bounding_rect();

        let index = RTree::bulk_load(self.nodes.values().copied().collect());

        info!(
            "Built graph of {} nodes and {} segments in {:?}",
            self.nodes.len(),
            graph.edge_count(),
            start_time.elapsed()
        );

        Ok(Graph {
            graph,
            hash: self.nodes,
            index,
            extent,
            metric_scale: self.metric_scale,
        })
    }
}
