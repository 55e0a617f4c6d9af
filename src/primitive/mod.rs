use std::fmt::Debug;
use std::hash::Hash;

pub mod node;

pub use node::Node;

/// Identifier of a node within a road network.
///
/// Entries are cheap to copy and totally ordered, which allows them to key
/// graph structures and act as the deterministic tie-break when two frontier
/// nodes share the same priority.
pub trait Entry:
    Default + Copy + Clone + PartialEq + Eq + Ord + Hash + Debug + Send + Sync
{
    /// Signed form of the id, used when reporting it.
    /// Ids beyond `i64::MAX` saturate.
    fn identifier(&self) -> i64;
}

macro_rules! impl_entry {
    ($($ty:ty),*) => {
        $(
            impl Entry for $ty {
                #[inline]
                fn identifier(&self) -> i64 {
                    i64::try_from(*self).unwrap_or(i64::MAX)
                }
            }
        )*
    };
}

impl_entry!(u32, u64, usize, i64);
