//! Hand-written container types: a growable contiguous [`Vector`](collections::contiguous::Vector)
//! built on a fixed-size [`Array`](collections::contiguous::Array), a singly linked
//! [`ForwardList`](collections::linked::ForwardList) and a doubly linked
//! [`LinkedList`](collections::linked::LinkedList).
//!
//! # Purpose
//! Each container manages its own memory, so the crate doubles as a study of allocation, pointer
//! ownership, iterators and the invariants that keep them sound. The standard library's [`Vec`]
//! is never used to implement any of them.
//!
//! # Growth
//! A [`Vector`](collections::contiguous::Vector) allocates nothing until the first element is
//! added. When full, it reallocates to double its capacity, or to a minimum capacity of 5.
//!
//! # Positions
//! Rather than raw pointer iterators, a Vector hands out
//! [`Position`](collections::contiguous::Position)s: indices stamped with the Vector's epoch.
//! Every reallocation advances the epoch, so a Position that has been invalidated is rejected
//! with an error instead of reading freed memory.
//!
//! # Error Handling
//! Operations that can fail come in two flavours. The plain method panics with the error's
//! message (e.g. [`LinkedList::get`](collections::linked::LinkedList::get)), while a `try_`
//! method, or a method which is fallible by nature (e.g.
//! [`Vector::at`](collections::contiguous::Vector::at)), returns a [`Result`]. Errors are
//! strongly typed structs from the [`error`] module, often ZSTs, combined into enums where a
//! method can fail in more than one way.
//!
//! # Features
//! - `contiguous`: [`Array`](collections::contiguous::Array) and
//!   [`Vector`](collections::contiguous::Vector).
//! - `linked`: [`ForwardList`](collections::linked::ForwardList) and
//!   [`LinkedList`](collections::linked::LinkedList).
//!
//! Both are enabled by default.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;

#[doc(inline)]
pub use util::error;
