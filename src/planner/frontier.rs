use crate::planner::TieBreak;
use crate::primitive::Entry;

use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Candidate<E> {
    f: f64,
    g: f64,
    key: Option<E>,
    index: usize,
}

impl<E> PartialEq for Candidate<E>
where
    E: Entry,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<E> Eq for Candidate<E> where E: Entry {}

impl<E> PartialOrd for Candidate<E>
where
    E: Entry,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Candidate<E>
where
    E: Entry,
{
    /// Reversed, so the max-heap yields the smallest `f`,
    /// and amongst equal `f` the smallest key.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.key.cmp(&self.key))
    }
}

/// A frontier entry as it left the queue.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Popped {
    /// Arena index of the node within the search state.
    pub index: usize,
    /// Cost-so-far of the node at the time it was queued. Entries whose
    /// cost has since been improved upon are stale.
    pub g: f64,
}

/// Open set of discovered but unexpanded nodes, yielding the minimum `f = g + h`.
#[derive(Debug)]
pub struct Frontier<E>
where
    E: Entry,
{
    heap: BinaryHeap<Candidate<E>>,
    tie_break: TieBreak,
}

impl<E> Frontier<E>
where
    E: Entry,
{
    pub fn new(tie_break: TieBreak) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(256),
            tie_break,
        }
    }

    pub fn push(&mut self, index: usize, id: E, g: f64, h: f64) {
        let key = match self.tie_break {
            TieBreak::Identifier => Some(id),
            TieBreak::Unspecified => None,
        };

        self.heap.push(Candidate {
            f: g + h,
            g,
            key,
            index,
        });
    }

    pub fn pop(&mut self) -> Option<Popped> {
        self.heap
            .pop()
            .map(|Candidate { index, g, .. }| Popped { index, g })
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
