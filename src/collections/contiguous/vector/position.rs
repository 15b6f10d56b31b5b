use std::cmp::Ordering;

/// A position within a [`Vector`](super::Vector), taking the place of a raw pointer iterator.
///
/// A Position is a plain index paired with the epoch of the Vector that produced it. Every
/// reallocation of a Vector advances its epoch, so a Position obtained before a reallocation is
/// rejected with [`StalePosition`](crate::util::error::StalePosition) instead of referring to
/// freed memory. Insertions and removals that don't reallocate keep the epoch, in which case a
/// Position continues to denote its index rather than the element that used to be there.
///
/// Positions are moved with [`next`](Position::next), [`prev`](Position::prev) and
/// [`offset`](Position::offset), and compared with the usual ordering operators, which order
/// by index first and epoch second.
///
/// # Examples
/// ```
/// # use stl_containers::collections::contiguous::Vector;
/// let vec = Vector::from([1, 2, 3]);
/// let mut pos = vec.begin();
/// let mut seen = Vec::new();
/// while pos != vec.end() {
///     seen.push(*vec.get_at(pos).unwrap());
///     pos = pos.next();
/// }
/// assert_eq!(seen, [1, 2, 3]);
/// assert_eq!(vec.end().distance(vec.begin()), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) index: usize,
    pub(crate) epoch: usize,
}

impl Position {
    pub(crate) const fn new(index: usize, epoch: usize) -> Position {
        Position { index, epoch }
    }

    /// Returns the index that this Position refers to.
    pub const fn index(self) -> usize {
        self.index
    }

    /// Returns the epoch of the Vector at the time this Position was created.
    pub const fn epoch(self) -> usize {
        self.epoch
    }

    /// Returns the Position directly after this one. The result is only checked against bounds
    /// when used.
    pub const fn next(self) -> Position {
        self.offset(1)
    }

    /// Returns the Position directly before this one, or [`None`] if this Position is at index 0.
    pub const fn prev(self) -> Option<Position> {
        match self.index.checked_sub(1) {
            Some(index) => Some(Position::new(index, self.epoch)),
            None => None,
        }
    }

    /// Moves this Position by `count` elements, saturating at index 0 and [`usize::MAX`].
    pub const fn offset(self, count: isize) -> Position {
        Position::new(self.index.saturating_add_signed(count), self.epoch)
    }

    /// Returns the signed number of elements between `other` and self, such that
    /// `other.offset(self.distance(other)) == self`.
    pub const fn distance(self, other: Position) -> isize {
        self.index.wrapping_sub(other.index) as isize
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index).then(self.epoch.cmp(&other.epoch))
    }
}
