//! Linked collection types: the singly linked [`ForwardList`] and the doubly linked
//! [`LinkedList`], each with an accompanying cursor type for `O(1)` edits in the middle of the
//! list.

pub mod forward;
pub mod list;

mod length;

#[doc(inline)]
pub use forward::ForwardList;
pub(crate) use length::*;
#[doc(inline)]
pub use list::LinkedList;
