use std::fmt::{self, Debug, Formatter};

use super::{ForwardList, ListState, NodePtr};

/// A cursor over a [`ForwardList`] with mutable access to the list. Being singly linked, it can
/// only move forwards, and edits are made directly after the current element.
///
/// The cursor starts at a "ghost" position before the front of the list, where
/// [`insert_after`](CursorMut::insert_after) and [`remove_after`](CursorMut::remove_after) act on
/// the front. Moving past the back of the list returns to the ghost position.
///
/// # Examples
/// ```
/// # use stl_containers::collections::linked::ForwardList;
/// let mut list = ForwardList::from([1, 2, 3, 4]);
/// let mut cursor = list.cursor_mut();
/// while let Some(value) = cursor.peek_next() {
///     if *value % 2 == 0 {
///         cursor.remove_after();
///     } else {
///         cursor.move_next();
///     }
/// }
/// assert_eq!(list.to_string(), "1->3->NULL");
/// ```
pub struct CursorMut<'a, T> {
    pub(crate) list: &'a mut ForwardList<T>,
    /// The current node and its index, or [`None`] at the ghost position.
    pub(crate) pos: Option<(NodePtr<T>, usize)>,
}

impl<T> CursorMut<'_, T> {
    /// Returns the index of the current element, or [`None`] at the ghost position.
    pub fn index(&self) -> Option<usize> {
        self.pos.map(|(_, index)| index)
    }

    /// Returns a reference to the current element, or [`None`] at the ghost position.
    pub fn current(&self) -> Option<&T> {
        self.pos.map(|(node, _)| node.value())
    }

    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.pos.map(|(node, _)| node.value_mut())
    }

    /// Returns a reference to the element after the current one without moving the cursor.
    pub fn peek_next(&mut self) -> Option<&mut T> {
        let next = match self.pos {
            Some((node, _)) => *node.next(),
            None => self.list.head(),
        };
        next.map(|node| node.value_mut())
    }

    /// Moves the cursor to the next element, onto the ghost position from the back, or onto the
    /// front from the ghost position.
    pub fn move_next(&mut self) {
        self.pos = match self.pos {
            Some((node, index)) => node.next().map(|next| (next, index + 1)),
            None => self.list.head().map(|head| (head, 0)),
        };
    }

    /// Inserts `value` directly after the current element, or onto the front of the list at the
    /// ghost position.
    pub fn insert_after(&mut self, value: T) {
        match self.pos {
            Some((node, _)) => {
                if let ListState::Full(contents) = &mut self.list.state {
                    contents.insert_after(node, value);
                }
            },
            None => self.list.push_front(value),
        }
    }

    /// Removes and returns the element directly after the current one, or the front of the list
    /// at the ghost position. Returns [`None`] if there is no such element.
    pub fn remove_after(&mut self) -> Option<T> {
        self.list.state.unlink_after(self.pos.map(|(node, _)| node))
    }

    /// Returns a read-only view of the underlying list.
    pub fn as_list(&self) -> &ForwardList<T> {
        self.list
    }
}

impl<T: Debug> Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("list", &self.list)
            .field("index", &self.index())
            .finish()
    }
}
