mod cursor;
mod forward_list;
mod iter;
mod node;

pub use cursor::*;
pub use forward_list::*;
pub use iter::*;
pub(crate) use node::*;
