//! A module containing [`Vector`] and associated types.
//!
//! [`Position`] replaces raw pointer iterators for positional insertion and removal. For owned
//! iteration, [`IntoIter`] is a re-export of [`array::IntoIter`](super::array::IntoIter), while
//! [`IterMut`](std::slice::IterMut) and [`Iter`](std::slice::Iter) from [`std::slice`] are used for
//! borrowed iteration.
//!
//! [`Vector`] and [`Position`] are also re-exported under the parent module.

mod iter;
mod position;
mod tests;
mod vector;

pub use iter::*;
pub use position::*;
pub use vector::*;
