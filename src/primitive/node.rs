use geo::{Distance, Euclidean, Point};
use rstar::{Envelope, AABB};
use std::fmt::Debug;

use crate::primitive::Entry;

/// The standardised node primitive containing a generic
/// identifier which must implement [Entry], and its position
/// within the graph's native coordinate space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Node<E>
where
    E: Entry,
{
    pub id: E,
    pub position: Point,
}

impl<E> Node<E>
where
    E: Entry,
{
    /// Constructs a `Node` from a native position and `id`.
    pub fn new(position: Point, id: E) -> Self {
        Self { id, position }
    }

    /// Straight-line distance to `other`, in native units.
    #[inline]
    pub fn distance(&self, other: &Node<E>) -> f64 {
        Euclidean.distance(self.position, other.position)
    }
}

impl<E> rstar::PointDistance for Node<E>
where
    E: Entry,
{
    fn distance_2(
        &self,
        point: &<Self::Envelope as Envelope>::Point,
    ) -> <<Self::Envelope as Envelope>::Point as rstar::Point>::Scalar {
        Euclidean.distance(self.position, *point).powi(2)
    }
}

impl<E> rstar::RTreeObject for Node<E>
where
    E: Entry,
{
    type Envelope = AABB<Point>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.position)
    }
}
