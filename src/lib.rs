#![allow(clippy::module_inception)]
#[macro_use]
extern crate quick_error;

pub use crate::linked_list::{ListIter, SortedList};
pub use crate::map::{Key, MResult, Map, MapError, Options, DEFAULT_PROBABILITY, MAX_HEIGHT};
pub use crate::skiplist::{SkipList, SkipListIter};
pub use crate::tree::{BinarySearchTree, Traversal, Treap, TreeIter};
pub use crate::utils::random::{Random, RandomGenerator};

mod linked_list;
mod map;
mod skiplist;
mod tree;
mod utils;
