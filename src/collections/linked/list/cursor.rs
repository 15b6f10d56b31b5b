use std::fmt::{self, Debug, Formatter};

use super::{LinkedList, ListContents, ListState, NodePtr};

/// A cursor over a [`LinkedList`] with mutable access to the list, able to move in both
/// directions and to insert or remove elements in `O(1)`.
///
/// Between the back and the front of the list, the cursor has an extra "ghost" position which
/// doesn't refer to an element. Moving forwards from the back, or backwards from the front, lands
/// on the ghost, and moving off of the ghost wraps around to the other end.
///
/// # Examples
/// ```
/// # use stl_containers::collections::linked::LinkedList;
/// let mut list = LinkedList::from([1, 2, 4]);
/// let mut cursor = list.cursor_front_mut();
/// cursor.move_next();
/// cursor.insert_after(3);
/// cursor.move_prev();
/// assert_eq!(cursor.remove_current(), Some(1));
/// assert_eq!(cursor.current(), Some(&2));
/// assert!(list.iter().eq(&[2, 3, 4]));
/// ```
pub struct CursorMut<'a, T> {
    pub(crate) list: &'a mut LinkedList<T>,
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

    /// Returns a mutable reference to the current element, or [`None`] at the ghost position.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.pos.map(|(node, _)| node.value_mut())
    }

    /// Returns a reference to the element after the current one without moving the cursor.
    pub fn peek_next(&mut self) -> Option<&mut T> {
        let next = match self.pos {
            Some((node, _)) => *node.next(),
            None => self.head(),
        };
        next.map(|node| node.value_mut())
    }

    /// Returns a reference to the element before the current one without moving the cursor.
    pub fn peek_prev(&mut self) -> Option<&mut T> {
        let prev = match self.pos {
            Some((node, _)) => *node.prev(),
            None => self.tail(),
        };
        prev.map(|node| node.value_mut())
    }

    /// Moves the cursor to the next element, onto the ghost position from the back, or onto the
    /// front from the ghost position.
    pub fn move_next(&mut self) {
        self.pos = match self.pos {
            Some((node, index)) => node.next().map(|next| (next, index + 1)),
            None => self.head().map(|head| (head, 0)),
        };
    }

    /// Moves the cursor to the previous element, onto the ghost position from the front, or onto
    /// the back from the ghost position.
    pub fn move_prev(&mut self) {
        self.pos = match self.pos {
            // The front node has no prev, so index is at least 1 whenever one exists.
            Some((node, index)) => node.prev().map(|prev| (prev, index - 1)),
            None => self.tail().map(|tail| (tail, self.list.len() - 1)),
        };
    }

    /// Inserts `value` directly before the current element. At the ghost position, the value is
    /// pushed onto the back of the list.
    pub fn insert_before(&mut self, value: T) {
        match self.pos {
            Some((node, index)) => {
                if let ListState::Full(contents) = &mut self.list.state {
                    contents.insert_before(node, value);
                }
                self.pos = Some((node, index + 1));
            },
            None => self.list.push_back(value),
        }
    }

    /// Inserts `value` directly after the current element. At the ghost position, the value is
    /// pushed onto the front of the list.
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

    /// Removes the current element and returns it, moving the cursor onto the following element.
    /// Returns [`None`] without modifying the list at the ghost position.
    pub fn remove_current(&mut self) -> Option<T> {
        let (node, index) = self.pos?;
        self.pos = node.next().map(|next| (next, index));
        Some(self.list.state.unlink(node))
    }

    /// Returns a read-only view of the underlying list.
    pub fn as_list(&self) -> &LinkedList<T> {
        self.list
    }

    fn head(&self) -> Option<NodePtr<T>> {
        match &self.list.state {
            ListState::Empty => None,
            ListState::Full(ListContents { head, .. }) => Some(*head),
        }
    }

    fn tail(&self) -> Option<NodePtr<T>> {
        match &self.list.state {
            ListState::Empty => None,
            ListState::Full(ListContents { tail, .. }) => Some(*tail),
        }
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
