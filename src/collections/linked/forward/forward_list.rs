use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;

use super::{CursorMut, Iter, IterMut, Link, Node, NodePtr};
use crate::collections::linked::{Length, ONE};
use crate::util::error::{CapacityOverflow, EmptyCollection, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// A list with links in one direction only, from the front to the back.
///
/// ForwardList keeps a pointer to its last node, so pushing onto either end is `O(1)`, but
/// removal is only possible at the front or directly after a known element. Edits in the middle
/// are made either by index, with [`insert_after`](ForwardList::insert_after) and
/// [`erase_after`](ForwardList::erase_after), or with a [`CursorMut`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ForwardList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `push_mid` | `O(n)` |
/// | `get` | `O(i)` |
/// | `insert_after` | `O(i)` |
/// | `erase_after` | `O(i)` |
/// | `contains` | `O(n)` |
///
/// # Examples
/// ```
/// # use stl_containers::collections::linked::ForwardList;
/// let mut list: ForwardList<i32> = (0..10).collect();
/// for index in [1, 2, 3] {
///     list.erase_after(index).unwrap();
/// }
/// assert_eq!(list.to_string(), "0->1->3->5->7->8->9->NULL");
/// ```
pub struct ForwardList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(Default, IsVariant)]
pub(crate) enum ListState<T> {
    #[default]
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> ForwardList<T> {
    /// Creates a new ForwardList with no elements.
    pub const fn new() -> ForwardList<T> {
        ForwardList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    pub const fn len(&self) -> usize {
        match &self.state {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub const fn front(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub const fn front_mut(&mut self) -> Option<&mut T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value_mut()),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub const fn back(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Add the provided element to the front of the ForwardList.
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => {
                contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();
                contents.head = NodePtr::from_node(Node {
                    value,
                    next: Some(contents.head),
                });
            },
        }
    }

    /// Add the provided element to the back of the ForwardList.
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.insert_after(contents.tail, value),
        }
    }

    /// Add the provided element to the middle of the ForwardList, so that it ends up at index
    /// `len / 2`.
    pub fn push_mid(&mut self, value: T) {
        match (self.len() / 2).checked_sub(1) {
            None => self.push_front(value),
            // The middle of a non-empty list is always in bounds.
            Some(prev) => self.insert_after(prev, value).throw(),
        }
    }

    /// Removes the first element from the list and returns it.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the list has no elements.
    pub fn pop_front(&mut self) -> Result<T, EmptyCollection> {
        self.state.unlink_after(None).ok_or(EmptyCollection)
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the ForwardList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the ForwardList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value_mut())
    }

    /// Inserts `value` directly after the element at `index`, so that it ends up at `index + 1`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if there is no element at `index`.
    pub fn insert_after(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        let prev = self.checked_seek(index)?;
        if let Full(contents) = &mut self.state {
            contents.insert_after(prev, value);
        }
        Ok(())
    }

    /// Removes and returns the element directly after the one at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] for the erased index if there is no element at `index + 1`.
    pub fn erase_after(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let len = self.len();
        let prev = self.checked_seek(index).map_err(|_| IndexOutOfBounds {
            index: index.saturating_add(1),
            len,
        })?;

        self.state
            .unlink_after(Some(prev))
            .ok_or(IndexOutOfBounds { index: index + 1, len })
    }

    /// Drops every element of the list.
    pub fn clear(&mut self) {
        drop(mem::take(self));
    }

    /// Returns a cursor starting before the front of the list.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            list: self,
            pos: None,
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodePtr<T>, IndexOutOfBounds> {
        match &self.state {
            Full(contents) if index < contents.len.get() => Ok(contents.seek(index)),
            _ => Err(IndexOutOfBounds { index, len: self.len() }),
        }
    }

    pub(crate) fn head(&self) -> Link<T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(*head),
        }
    }
}

impl<T: PartialEq> ForwardList<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> ListContents<T> {
    pub fn seek(&self, index: usize) -> NodePtr<T> {
        let mut node = self.head;
        for _ in 0..index {
            match node.next() {
                Some(next) => node = *next,
                None => break,
            }
        }
        node
    }

    /// Links a new node containing `value` directly after `prev`, which must belong to self.
    pub fn insert_after(&mut self, prev: NodePtr<T>, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node {
            value,
            next: *prev.next(),
        });
        *prev.next_mut() = Some(node);

        if prev == self.tail {
            self.tail = node;
        }
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        let node = NodePtr::from_node(Node { value, next: None });

        Full(ListContents {
            len: ONE,
            head: node,
            tail: node,
        })
    }

    /// Unlinks the node following `prev`, or the head if `prev` is [`None`], returning its value.
    /// `prev` must belong to this list.
    pub fn unlink_after(&mut self, prev: Link<T>) -> Option<T> {
        let Full(contents) = self else {
            return None;
        };

        let node = match prev {
            Some(prev) => (*prev.next())?,
            None => contents.head,
        };

        match contents.len.checked_sub(1) {
            Some(new_len) => {
                let next = *node.next();

                match (prev, next) {
                    (Some(prev), _) => *prev.next_mut() = next,
                    (None, Some(next)) => contents.head = next,
                    // The head of a list with more than one element is always followed by another.
                    (None, None) => {},
                }

                if node == contents.tail {
                    if let Some(prev) = prev {
                        contents.tail = prev;
                    }
                }

                contents.len = new_len;
            },
            None => *self = Empty,
        }

        Some(node.take_node().value)
    }
}

impl<T> Index<usize> for ForwardList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for ForwardList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ForwardList::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for ForwardList<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Extend<T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        let mut curr = self.head();
        while let Some(ptr) = curr {
            curr = ptr.take_node().next;
        }
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T: Hash> Hash for ForwardList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

// SAFETY: ForwardList uniquely owns its nodes, so it can be sent whenever the values can.
unsafe impl<T: Send> Send for ForwardList<T> {}
// SAFETY: ForwardList's safe API obeys all rules of the borrow checker, so no interior
// mutability occurs.
unsafe impl<T: Sync> Sync for ForwardList<T> {}

impl<T: Debug> Debug for ForwardList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForwardList")
            .field("contents", &self.iter())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for ForwardList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{value}->")?;
        }
        write!(f, "NULL")
    }
}
