use crate::map::Key;
use crate::utils::arena::NodeId;

/// A forward link, `None` is the nil sentinel that ends every level.
pub type Link = Option<NodeId>;

/// Where a search stopped on some level: the head sentinel or a real node.
///
/// The head has no key, so keys at the integer extremes never collide with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    Head,
    Node(NodeId),
}

pub struct Node<V> {
    pub key: Key,
    pub value: V,
    /// One successor per level, `forward.len()` is the node height.
    pub forward: Vec<Link>,
}

impl<V> Node<V> {
    pub fn new(key: Key, value: V, height: usize) -> Self {
        Node {
            key,
            value,
            forward: vec![None; height],
        }
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.forward.len()
    }

    #[inline]
    pub fn get_next(&self, n: usize) -> Link {
        self.forward[n]
    }

    #[inline]
    pub fn set_next(&mut self, n: usize, next: Link) {
        self.forward[n] = next;
    }
}
