mod arena;
mod dlist;
mod queue;
mod slist;
mod sort;
mod stack;

pub use arena::{Arena, Node, NodeId};
pub use dlist::DList;
pub use queue::Queue;
pub use slist::SList;
pub use sort::{bubble_sort, insertion_sort, selection_sort};
pub use stack::Stack;
