use crate::primitive::{Entry, Node};

use indexmap::IndexMap;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;

type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Bookkeeping of a single node within one search.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SearchRecord<E>
where
    E: Entry,
{
    /// Snapshot of the node, copied out of the model on discovery.
    pub node: Node<E>,
    /// Cost of the best known path from the start, in native units.
    pub g: f64,
    /// Straight-line estimate to the end, computed once on discovery.
    pub h: f64,
    /// Arena index of the predecessor on the best known path.
    /// Only the start node has no parent.
    pub parent: Option<usize>,
    /// Set once the node has been expanded.
    pub closed: bool,
}

impl<E> SearchRecord<E>
where
    E: Entry,
{
    #[inline]
    pub fn f(&self) -> f64 {
        self.g + self.h
    }
}

/// Arena of every node a search has discovered, in discovery order.
///
/// A node is visited exactly when it has a record. Records are addressed by
/// their arena index, which is stable for the lifetime of the search.
#[derive(Debug)]
pub struct SearchState<E>
where
    E: Entry,
{
    records: FxIndexMap<E, SearchRecord<E>>,
}

impl<E> Default for SearchState<E>
where
    E: Entry,
{
    fn default() -> Self {
        Self {
            records: FxIndexMap::with_capacity_and_hasher(64, BuildHasherDefault::default()),
        }
    }
}

impl<E> SearchState<E>
where
    E: Entry,
{
    #[inline]
    pub fn is_visited(&self, id: &E) -> bool {
        self.records.contains_key(id)
    }

    #[inline]
    pub fn is_closed(&self, id: &E) -> bool {
        self.records.get(id).is_some_and(|record| record.closed)
    }

    #[inline]
    pub fn index_of(&self, id: &E) -> Option<usize> {
        self.records.get_index_of(id)
    }

    /// Returns the record at `index`.
    ///
    /// Indices are only ever handed out by [`SearchState::discover`],
    /// so an unknown index is a programming error and panics.
    #[inline]
    pub fn record(&self, index: usize) -> &SearchRecord<E> {
        &self.records[index]
    }

    /// Records a newly discovered node, marking it visited.
    /// Returns its arena index.
    pub fn discover(&mut self, node: Node<E>, g: f64, h: f64, parent: Option<usize>) -> usize {
        let (index, _) = self.records.insert_full(
            node.id,
            SearchRecord {
                node,
                g,
                h,
                parent,
                closed: false,
            },
        );

        index
    }

    /// Re-parents an open node if `g` improves on its known cost.
    /// Returns whether the record changed.
    pub fn relax(&mut self, index: usize, g: f64, parent: usize) -> bool {
        let Some((_, record)) = self.records.get_index_mut(index) else {
            return false;
        };

        if record.closed || g >= record.g {
            return false;
        }

        record.g = g;
        record.parent = Some(parent);
        true
    }

    #[inline]
    pub fn close(&mut self, index: usize) {
        if let Some((_, record)) = self.records.get_index_mut(index) {
            record.closed = true;
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every record, in discovery order.
    pub fn records(&self) -> impl Iterator<Item = &SearchRecord<E>> {
        self.records.values()
    }
}
