use crate::graph::Model;
use crate::planner::heuristic::straight_line;
use crate::planner::*;
use crate::primitive::Entry;

use log::{debug, info, warn};
use measure_time::debug_time;

#[cfg(feature = "tracing")]
use tracing::Level;

/// A* search between the two endpoints of a [`Query`].
///
/// A planner runs exactly one search. It borrows the model immutably and
/// keeps every piece of search bookkeeping to itself, so several planners
/// may search the same graph at once.
///
/// ```rust
/// use geo::Point;
/// use route_planner::graph::GraphBuilder;
/// use route_planner::planner::RoutePlanner;
///
/// let graph = GraphBuilder::<u64>::new()
///     .node(0, Point::new(0.0, 0.0))
///     .node(1, Point::new(1.0, 0.0))
///     .node(2, Point::new(1.0, 1.0))
///     .way(&[0, 1, 2], false)
///     .metric_scale(100.0)
///     .build()
///     .unwrap();
///
/// let mut planner = RoutePlanner::new(&graph, 0.0, 0.0, 100.0, 100.0).unwrap();
/// let route = planner.run_search().expect("nodes are connected");
///
/// assert_eq!(route.ids().collect::<Vec<_>>(), vec![0, 1, 2]);
/// assert_eq!(route.distance, 200.0);
/// ```
pub struct RoutePlanner<'a, E, M>
where
    E: Entry,
    M: Model<E>,
{
    model: &'a M,
    query: Query<E>,
    config: PlannerConfig,

    state: SearchState<E>,
    frontier: Frontier<E>,
    status: SearchStatus<E>,
    expansions: usize,
}

impl<'a, E, M> RoutePlanner<'a, E, M>
where
    E: Entry,
    M: Model<E>,
{
    /// Creates a planner between two coordinates, each given as a
    /// percentage `[0, 100]` of the map extent.
    pub fn new(
        model: &'a M,
        start_x: f64,
        start_y: f64,
        end_x: f64,
        end_y: f64,
    ) -> Result<Self, PlannerError> {
        let query = Query::resolve(model, start_x, start_y, end_x, end_y)?;
        Ok(Self::from_query(model, query))
    }

    /// Creates a planner between two already resolved nodes.
    pub fn from_query(model: &'a M, query: Query<E>) -> Self {
        let config = PlannerConfig::default();

        Self {
            model,
            query,
            config,
            state: SearchState::default(),
            frontier: Frontier::new(config.tie_break),
            status: SearchStatus::Init,
            expansions: 0,
        }
    }

    /// Replaces the configuration, discarding any progress already made.
    pub fn with_config(self, config: PlannerConfig) -> Self {
        Self {
            config,
            state: SearchState::default(),
            frontier: Frontier::new(config.tie_break),
            status: SearchStatus::Init,
            expansions: 0,
            ..self
        }
    }

    pub fn query(&self) -> &Query<E> {
        &self.query
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn status(&self) -> &SearchStatus<E> {
        &self.status
    }

    /// The route, once the search has found one.
    pub fn route(&self) -> Option<&Route<E>> {
        self.status.route()
    }

    /// Length of the route in metres, once the search has found one.
    pub fn total_distance(&self) -> Option<f64> {
        self.route().map(|route| route.distance)
    }

    /// Number of nodes expanded so far, including the start node.
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Number of nodes currently queued for expansion.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Every node discovered so far, in discovery order.
    pub fn visited(&self) -> impl Iterator<Item = &SearchRecord<E>> {
        self.state.records()
    }

    /// Runs the search to completion.
    ///
    /// Returns the route if the end node is reachable from the start node,
    /// and `None` if the frontier is exhausted first. Calling this again
    /// returns the same outcome without searching again.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = Level::INFO))]
    pub fn run_search(&mut self) -> Option<&Route<E>> {
        debug_time!("RoutePlanner::run_search");

        while !self.status.is_terminal() {
            self.step();
        }

        self.status.route()
    }

    /// Advances the search by a single transition and returns the new status.
    ///
    /// From `Init` this expands the start node. From `Expanding` this pops
    /// and expands one frontier node. Terminal states are returned unchanged.
    pub fn step(&mut self) -> &SearchStatus<E> {
        let next = match self.status {
            SearchStatus::Init => self.initialise(),
            SearchStatus::Expanding => self.expand_next(),
            SearchStatus::Found(_) | SearchStatus::Exhausted => return &self.status,
        };

        self.status = next;
        &self.status
    }

    fn initialise(&mut self) -> SearchStatus<E> {
        let Query { start, end } = self.query;
        debug!("Routing {:?} -> {:?}", start.id, end.id);

        let h = straight_line(self.model, &start, &end);
        let start_index = self.state.discover(start, 0.0, h, None);

        if self.query.is_trivial() {
            return self.found(start_index);
        }

        self.expand(start_index);
        SearchStatus::Expanding
    }

    fn expand_next(&mut self) -> SearchStatus<E> {
        while let Some(Popped { index, g }) = self.frontier.pop() {
            let record = self.state.record(index);

            // Superseded by a cheaper entry for the same node
            if record.closed || g > record.g {
                continue;
            }

            if record.node.id == self.query.end.id {
                return self.found(index);
            }

            self.expand(index);
            return SearchStatus::Expanding;
        }

        warn!(
            "No path found! {:?} -> {:?} after {} expansions",
            self.query.start.id, self.query.end.id, self.expansions
        );

        SearchStatus::Exhausted
    }

    /// Queues every unvisited neighbour of the node at `index`.
    fn expand(&mut self, index: usize) {
        self.state.close(index);
        self.expansions += 1;

        let current = *self.state.record(index);
        let relaxation = self.config.relaxation;

        let state = &self.state;
        let neighbors = self
            .model
            .expand_neighbors(&current.node.id, |id| match relaxation {
                Relaxation::FirstDiscovery => state.is_visited(id),
                Relaxation::Reopen => state.is_closed(id),
            });

        for id in neighbors {
            let Some(node) = self.model.node(&id).copied() else {
                debug!("Neighbour {id:?} of {:?} has no node, skipping", current.node.id);
                continue;
            };

            let g = current.g + self.model.distance(&current.node, &node);

            match (self.state.index_of(&id), relaxation) {
                (None, _) => {
                    let h = straight_line(self.model, &node, &self.query.end);
                    let discovered = self.state.discover(node, g, h, Some(index));
                    self.frontier.push(discovered, id, g, h);
                }
                (Some(existing), Relaxation::Reopen) => {
                    if self.state.relax(existing, g, index) {
                        let h = self.state.record(existing).h;
                        self.frontier.push(existing, id, g, h);
                    }
                }
                // The first discovery of a node is final
                (Some(_), Relaxation::FirstDiscovery) => {}
            }
        }
    }

    fn found(&self, end_index: usize) -> SearchStatus<E> {
        let route = self.reconstruct(end_index);

        info!(
            "Found route of {} nodes ({:.2}m) after {} expansions",
            route.len(),
            route.distance,
            self.expansions
        );

        SearchStatus::Found(route)
    }

    /// Walks the parent chain from the end node back to the start node.
    ///
    /// # Panics
    ///
    /// If the chain breaks or loops before reaching the start node. Every
    /// discovered node is given a parent which was discovered before it,
    /// so either case means the search state has been corrupted.
    fn reconstruct(&self, end_index: usize) -> Route<E> {
        let start = self.query.start.id;

        let mut distance = 0.0;
        let mut current = self.state.record(end_index);
        let mut path = vec![current.node];

        while current.node.id != start {
            let Some(parent) = current.parent else {
                panic!(
                    "parent chain broke at {:?} before reaching start {:?}",
                    current.node.id, start
                );
            };

            let previous = self.state.record(parent);
            distance += self.model.distance(&current.node, &previous.node);
            path.push(previous.node);

            if path.len() > self.state.len() {
                panic!("parent chain from {:?} never reaches start {start:?}", path[0].id);
            }

            current = previous;
        }

        path.reverse();
        Route::new(path, distance * self.model.metric_scale())
    }
}
