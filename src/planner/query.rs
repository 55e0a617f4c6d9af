use crate::graph::Model;
use crate::planner::PlannerError;
use crate::primitive::{Entry, Node};

use geo::Point;
use log::debug;

/// Query coordinates are given in percent of the map extent.
const PERCENT: f64 = 0.01;

/// The resolved endpoints of a search.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Query<E>
where
    E: Entry,
{
    pub start: Node<E>,
    pub end: Node<E>,
}

impl<E> Query<E>
where
    E: Entry,
{
    pub fn new(start: Node<E>, end: Node<E>) -> Self {
        Self { start, end }
    }

    /// Resolves a start and end coordinate, each given as a percentage
    /// `[0, 100]` of the map extent, to their nearest graph nodes.
    ///
    /// Coordinates outside of that range are not rejected; the model
    /// resolves whichever node lies closest to them.
    pub fn resolve<M>(
        model: &M,
        start_x: f64,
        start_y: f64,
        end_x: f64,
        end_y: f64,
    ) -> Result<Self, PlannerError>
    where
        M: Model<E>,
    {
        let start = Self::nearest(model, start_x, start_y)?;
        let end = Self::nearest(model, end_x, end_y)?;

        debug!("Resolved query {:?} -> {:?}", start.id, end.id);
        Ok(Self { start, end })
    }

    fn nearest<M>(model: &M, x: f64, y: f64) -> Result<Node<E>, PlannerError>
    where
        M: Model<E>,
    {
        model
            .nearest_node(Point::new(x * PERCENT, y * PERCENT))
            .copied()
            .ok_or(PlannerError::Unresolvable { x, y })
    }

    /// Whether the search is trivially complete before it begins.
    #[inline]
    pub fn is_trivial(&self) -> bool {
        self.start.id == self.end.id
    }
}
