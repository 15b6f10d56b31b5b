//! Container types, grouped by how they store their elements.
//!
//! Contiguous types implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! provides slice functionality such as sorting and searching without rewriting it. Linked types
//! provide their own iterators and cursors instead.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
