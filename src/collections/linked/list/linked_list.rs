use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;

use super::{CursorMut, Iter, IterMut, Node, NodePtr};
use crate::collections::linked::{Length, ONE};
use crate::util::error::{CapacityOverflow, EmptyCollection, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// A list with links in both directions. See also: [`CursorMut`] for bi-directional traversal
/// with insertion and removal at the cursor.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `push_mid` | `O(n)` |
/// | `get` | `O(min(i, n-i))` |
/// | `insert` | `O(min(i, n-i))` |
/// | `remove` | `O(min(i, n-i))` |
/// | `replace` | `O(min(i, n-i))` |
/// | `append` | `O(1)` |
/// | `reverse` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// As a general note, modern computer architecture isn't kind to linked lists, (or more
/// importantly, favours contiguous collections) because all `O(i)` or `O(n)` operations will
/// consist primarily of cache misses. For this reason,
/// [`Vector`](crate::collections::contiguous::Vector) should be preferred for most applications
/// unless LinkedList and the accompanying [`CursorMut`] type's `O(1)` methods are being heavily
/// utilized.
pub struct LinkedList<T> {
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

impl<T> Clone for ListContents<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListContents<T> {}

impl<T> Clone for ListState<T> {
    fn clone(&self) -> Self {
        match self {
            Empty => Empty,
            Full(contents) => Full(*contents),
        }
    }
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the LinkedList contains no elements.
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

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub const fn back_mut(&mut self) -> Option<&mut T> {
        match &self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value_mut()),
        }
    }

    /// Add the provided element to the front of the LinkedList.
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.insert_before(contents.head, value),
        }
    }

    /// Add the provided element to the back of the LinkedList.
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.insert_after(contents.tail, value),
        }
    }

    /// Add the provided element to the middle of the LinkedList, so that it ends up at index
    /// `len / 2`.
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::linked::LinkedList;
    /// let mut list = LinkedList::from([1, 2, 3, 4]);
    /// list.push_mid(0);
    /// assert!(list.iter().eq(&[1, 2, 0, 3, 4]));
    /// ```
    pub fn push_mid(&mut self, value: T) {
        let index = self.len() / 2;
        self.insert(index, value);
    }

    /// Removes the first element from the list and returns it.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the list has no elements.
    pub fn pop_front(&mut self) -> Result<T, EmptyCollection> {
        match &self.state {
            Empty => Err(EmptyCollection),
            Full(ListContents { head, .. }) => {
                let head = *head;
                Ok(self.state.unlink(head))
            },
        }
    }

    /// Removes the last element from the list and returns it.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the list has no elements.
    pub fn pop_back(&mut self) -> Result<T, EmptyCollection> {
        match &self.state {
            Empty => Err(EmptyCollection),
            Full(ListContents { tail, .. }) => {
                let tail = *tail;
                Ok(self.state.unlink(tail))
            },
        }
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value_mut())
    }

    /// Inserts the provided value so that it ends up at `index`, which may be anywhere in
    /// `0..=len`.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided value at `index`, returning an [`Err`] rather than panicking if
    /// `index > len`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        let len = self.len();

        if index > len {
            return Err(IndexOutOfBounds { index, len });
        } else if index == len {
            self.push_back(value);
        } else if let Full(contents) = &mut self.state {
            let next = contents.seek(index);
            contents.insert_before(next, value);
        }

        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes and returns the element at `index`, returning an [`Err`] rather than panicking if
    /// it is out of bounds.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let node = self.checked_seek(index)?;
        Ok(self.state.unlink(node))
    }

    /// Replaces the element at `index` with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.try_replace(index, new_value).throw()
    }

    /// Replaces the element at `index`, returning an [`Err`] rather than panicking if it is out
    /// of bounds.
    pub fn try_replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(
            self.checked_seek(index)?.value_mut(),
            new_value,
        ))
    }

    /// Moves all elements of `other` onto the back of self.
    pub fn append(&mut self, mut other: LinkedList<T>) {
        match &mut self.state {
            Empty => mem::swap(self, &mut other),
            Full(self_contents) => match mem::take(&mut other.state) {
                Empty => {},
                Full(other_contents) => {
                    self_contents.len = self_contents.len
                        .checked_add(other_contents.len.get())
                        .ok_or(CapacityOverflow).throw();

                    *self_contents.tail.next_mut() = Some(other_contents.head);
                    *other_contents.head.prev_mut() = Some(self_contents.tail);
                    self_contents.tail = other_contents.tail;
                },
            },
        }
    }

    /// Drops every element of the list.
    pub fn clear(&mut self) {
        drop(mem::take(self));
    }

    /// Reverses the order of the list in place.
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::linked::LinkedList;
    /// let mut list = LinkedList::from([1, 2, 3]);
    /// list.reverse();
    /// assert!(list.iter().eq(&[3, 2, 1]));
    /// ```
    pub fn reverse(&mut self) {
        if let Full(contents) = &mut self.state {
            let mut curr = Some(contents.head);
            while let Some(node) = curr {
                curr = *node.next();
                mem::swap(node.prev_mut(), node.next_mut());
            }
            mem::swap(&mut contents.head, &mut contents.tail);
        }
    }

    /// Returns a cursor starting at the front element, or at the "ghost" position if the list is
    /// empty.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let pos = match &self.state {
            Empty => None,
            Full(contents) => Some((contents.head, 0)),
        };
        CursorMut { list: self, pos }
    }

    /// Returns a cursor starting at the back element, or at the "ghost" position if the list is
    /// empty.
    pub fn cursor_back_mut(&mut self) -> CursorMut<'_, T> {
        let pos = match &self.state {
            Empty => None,
            Full(contents) => Some((contents.tail, contents.last_index())),
        };
        CursorMut { list: self, pos }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> LinkedList<T> {
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> LinkedList<T> {
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodePtr<T>, IndexOutOfBounds> {
        match &self.state {
            Full(contents) if index < contents.len.get() => Ok(contents.seek(index)),
            _ => Err(IndexOutOfBounds { index, len: self.len() }),
        }
    }

    #[cfg(test)]
    #[allow(clippy::unwrap_used)]
    pub(crate) fn verify_double_links(&self) {
        match &self.state {
            Empty => {},
            Full(ListContents { head, tail, len }) => {
                assert!(head.prev().is_none());
                let mut curr = *head;
                let mut count = 1;
                while let Some(next) = curr.next() {
                    // UNWRAP: This needs to panic if prev is None.
                    assert!(next.prev().unwrap() == curr);
                    curr = *next;
                    count += 1;
                }
                assert!(*tail == curr);
                assert_eq!(count, len.get());
            },
        }
    }
}

impl<T> ListContents<T> {
    /// Finds the node at `index`, walking from whichever end of the list is closer.
    pub fn seek(&self, index: usize) -> NodePtr<T> {
        if index < self.len.get() / 2 {
            self.seek_fwd(index, self.head)
        } else {
            self.seek_bwd(self.last_index() - index, self.tail)
        }
    }

    pub fn seek_fwd(&self, count: usize, mut node: NodePtr<T>) -> NodePtr<T> {
        for _ in 0..count {
            match node.next() {
                Some(next) => node = *next,
                None => break,
            }
        }
        node
    }

    pub fn seek_bwd(&self, count: usize, mut node: NodePtr<T>) -> NodePtr<T> {
        for _ in 0..count {
            match node.prev() {
                Some(prev) => node = *prev,
                None => break,
            }
        }
        node
    }

    /// Links a new node containing `value` directly before `next`, which must belong to self.
    pub fn insert_before(&mut self, next: NodePtr<T>, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let prev = *next.prev();
        let node = NodePtr::from_node(Node {
            value,
            prev,
            next: Some(next),
        });

        match prev {
            Some(prev) => *prev.next_mut() = Some(node),
            None => self.head = node,
        }
        *next.prev_mut() = Some(node);
    }

    /// Links a new node containing `value` directly after `prev`, which must belong to self.
    pub fn insert_after(&mut self, prev: NodePtr<T>, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let next = *prev.next();
        let node = NodePtr::from_node(Node {
            value,
            prev: Some(prev),
            next,
        });

        match next {
            Some(next) => *next.prev_mut() = Some(node),
            None => self.tail = node,
        }
        *prev.next_mut() = Some(node);
    }

    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: None,
        });

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }

    pub const fn last_index(&self) -> usize {
        self.len.get() - 1
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    /// Unlinks `node` from the list and returns its value. `node` must belong to this list.
    pub fn unlink(&mut self, node: NodePtr<T>) -> T {
        if let Full(contents) = self {
            match contents.len.checked_sub(1) {
                Some(new_len) => {
                    let prev = *node.prev();
                    let next = *node.next();

                    match (prev, next) {
                        (Some(prev), Some(next)) => {
                            *prev.next_mut() = Some(next);
                            *next.prev_mut() = Some(prev);
                        },
                        (Some(prev), None) => {
                            *prev.next_mut() = None;
                            contents.tail = prev;
                        },
                        (None, Some(next)) => {
                            *next.prev_mut() = None;
                            contents.head = next;
                        },
                        // A lone node can't be part of a list with more than one element.
                        (None, None) => {},
                    }

                    contents.len = new_len;
                },
                None => *self = Empty,
            }
        }

        node.take_node().value
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        if let Full(ListContents { head, .. }) = self.state {
            let mut curr = Some(head);
            while let Some(ptr) = curr {
                let node = ptr.take_node();
                curr = node.next;
            }
        }
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

// SAFETY: LinkedList uniquely owns its nodes, so it can be sent whenever the values can.
unsafe impl<T: Send> Send for LinkedList<T> {}
// SAFETY: LinkedList's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs.
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &self.iter())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for LinkedList<T> {
    /// Formats the list as each element followed by an arrow, terminated by `NULL`.
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::linked::LinkedList;
    /// assert_eq!(LinkedList::from([1, 2]).to_string(), "1->2->NULL");
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{value}->")?;
        }
        write!(f, "NULL")
    }
}
