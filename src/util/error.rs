//! Error types returned by the collections in this crate.

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index or position fell outside of the valid range for a collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// An element was requested from a collection that doesn't contain any.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Attempted to remove an element from an empty collection!")]
pub struct EmptyCollection;

/// The requested capacity can't be represented by a valid memory layout.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

/// A [`Position`](crate::collections::contiguous::Position) was created before the last
/// reallocation of the collection it was used with.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Position from epoch {epoch} used with a collection at epoch {current}!")]
pub struct StalePosition {
    pub epoch: usize,
    pub current: usize,
}

#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum PositionError {
    IndexOutOfBounds(IndexOutOfBounds),
    StalePosition(StalePosition),
}
