mod doubly_linked_list;
mod iter;
mod length;
mod node;
mod tests;

pub use doubly_linked_list::*;
pub use iter::*;
pub(crate) use length::*;
pub(crate) use node::*;
