use crate::map::{Key, Map};
use crate::tree::node::{Inserted, Traversal, Tree, TreeIter};
use crate::utils::random::{Random, RandomGenerator};

/// Binary search tree on keys that is also a max-heap on random priorities.
///
/// The random priorities make the shape that of a BST built from a random
/// insertion order, so the expected depth is logarithmic even for sorted
/// input. Rotations keep both orders after every insert and remove.
pub struct Treap<V, R = Random> {
    tree: Tree<V>,
    rnd: R,
}

impl<V> Treap<V, Random> {
    pub fn new() -> Self {
        Self::with_generator(Random::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_generator(Random::new(seed))
    }
}

impl<V> Default for Treap<V, Random> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, R> Treap<V, R> {
    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.len() == 0
    }

    pub fn get(&self, key: Key) -> Option<&V> {
        self.tree.get(key)
    }

    pub fn contains_key(&self, key: Key) -> bool {
        self.tree.get(key).is_some()
    }

    /// Remove `key` by rotating it down toward the child with the larger
    /// priority until it has at most one child, then unlinking it.
    pub fn remove(&mut self, key: Key) -> Option<V> {
        let (mut parent, id) = self.tree.find_with_parent(key)?;
        loop {
            let node = &self.tree.nodes[id];
            let (l, r) = match (node.left, node.right) {
                (Some(l), Some(r)) => (l, r),
                _ => return self.tree.splice_out(parent, id),
            };
            let up = if self.tree.nodes[l].priority < self.tree.nodes[r].priority {
                self.tree.rotate_left(id)
            } else {
                self.tree.rotate_right(id)
            };
            self.tree.replace_child(parent, id, Some(up));
            parent = Some(up);
        }
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    pub fn traverse(&self, order: Traversal) -> Vec<Key> {
        self.tree.traverse(order)
    }

    pub fn height(&self) -> usize {
        self.tree.height()
    }

    pub fn render(&self) -> String {
        self.tree.render()
    }

    pub fn iter(&self) -> TreeIter<'_, V> {
        self.tree.iter()
    }
}

impl<V, R: RandomGenerator> Treap<V, R> {
    pub fn with_generator(rnd: R) -> Self {
        Treap {
            tree: Tree::new(),
            rnd,
        }
    }

    /// Insert as a leaf, then rotate it up while its priority beats its
    /// parent's.
    pub fn insert(&mut self, key: Key, value: V) -> Option<V> {
        let priority = self.rnd.next_u32();
        let mut path = vec![];
        let id = match self.tree.insert_leaf(key, value, priority, &mut path) {
            Inserted::New(id) => id,
            Inserted::Replaced(old) => return Some(old),
        };
        while let Some(parent) = path.pop() {
            if self.tree.nodes[id].priority <= self.tree.nodes[parent].priority {
                break;
            }
            let up = if self.tree.nodes[parent].left == Some(id) {
                self.tree.rotate_right(parent)
            } else {
                self.tree.rotate_left(parent)
            };
            self.tree.replace_child(path.last().copied(), parent, Some(up));
        }
        None
    }
}

impl<V, R: RandomGenerator> Map<V> for Treap<V, R> {
    fn insert(&mut self, key: Key, value: V) {
        Treap::insert(self, key, value);
    }

    fn find(&self, key: Key) -> Option<V>
    where
        V: Clone,
    {
        self.get(key).cloned()
    }

    fn erase(&mut self, key: Key) -> bool {
        self.remove(key).is_some()
    }

    fn len(&self) -> usize {
        self.tree.len()
    }
}

impl<'a, V, R> IntoIterator for &'a Treap<V, R> {
    type Item = (Key, &'a V);
    type IntoIter = TreeIter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
