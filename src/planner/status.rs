use crate::planner::Route;
use crate::primitive::Entry;

/// Progress of a search.
///
/// A search moves from [`Init`](SearchStatus::Init) into
/// [`Expanding`](SearchStatus::Expanding), and from there into exactly one
/// of the terminal states. Terminal states are never left.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchStatus<E>
where
    E: Entry,
{
    /// Endpoints resolved, nothing explored yet.
    Init,
    /// The frontier is being drained.
    Expanding,
    /// The end node was reached.
    Found(Route<E>),
    /// The frontier emptied before the end node was reached.
    Exhausted,
}

impl<E> SearchStatus<E>
where
    E: Entry,
{
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, SearchStatus::Found(_) | SearchStatus::Exhausted)
    }

    #[inline]
    pub fn route(&self) -> Option<&Route<E>> {
        match self {
            SearchStatus::Found(route) => Some(route),
            _ => None,
        }
    }
}
