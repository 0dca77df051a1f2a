pub use crate::tree::bst::BinarySearchTree;
pub use crate::tree::node::{Traversal, TreeIter};
pub use crate::tree::treap::Treap;

mod bst;
mod node;
mod treap;
