use crate::map::{Key, Map};
use crate::tree::node::{Inserted, Traversal, Tree, TreeIter};
use std::mem;

/// Unbalanced binary search tree. Sorted input makes it a list.
pub struct BinarySearchTree<V> {
    tree: Tree<V>,
}

impl<V> Default for BinarySearchTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> BinarySearchTree<V> {
    pub fn new() -> Self {
        BinarySearchTree { tree: Tree::new() }
    }

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

    pub fn insert(&mut self, key: Key, value: V) -> Option<V> {
        let mut path = vec![];
        match self.tree.insert_leaf(key, value, 0, &mut path) {
            Inserted::New(_) => None,
            Inserted::Replaced(old) => Some(old),
        }
    }

    /// Remove `key`. A node with two children takes over the entry of its
    /// in-order successor, which is unlinked instead.
    pub fn remove(&mut self, key: Key) -> Option<V> {
        let (parent, id) = self.tree.find_with_parent(key)?;
        let nodes = &self.tree.nodes;
        let right = match (nodes[id].left, nodes[id].right) {
            (Some(_), Some(r)) => r,
            _ => return self.tree.splice_out(parent, id),
        };

        let mut succ_parent = id;
        let mut succ = right;
        while let Some(l) = nodes[succ].left {
            succ_parent = succ;
            succ = l;
        }
        let succ_key = nodes[succ].key;
        let succ_value = self.tree.splice_out(Some(succ_parent), succ)?;
        let node = &mut self.tree.nodes[id];
        node.key = succ_key;
        Some(mem::replace(&mut node.value, succ_value))
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

impl<V> Map<V> for BinarySearchTree<V> {
    fn insert(&mut self, key: Key, value: V) {
        BinarySearchTree::insert(self, key, value);
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

impl<'a, V> IntoIterator for &'a BinarySearchTree<V> {
    type Item = (Key, &'a V);
    type IntoIter = TreeIter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
