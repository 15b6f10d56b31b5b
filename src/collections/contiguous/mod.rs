//! Contiguous collection types. Namely [`Array`] for collections sized once at runtime and
//! [`Vector`] for contiguous collections that vary in size.

pub mod array;
pub mod vector;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use vector::{Position, Vector};
