use crate::map::Key;
use crate::utils::arena::{Arena, NodeId};

pub(crate) type Link = Option<NodeId>;

pub(crate) struct TreeNode<V> {
    pub key: Key,
    pub value: V,
    pub left: Link,
    pub right: Link,
    /// Heap priority, only meaningful inside a treap.
    pub priority: u32,
}

/// Order in which `traverse` visits the keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Traversal {
    Preorder,
    Inorder,
    Postorder,
}

pub(crate) enum Inserted<V> {
    New(NodeId),
    Replaced(V),
}

/// Binary tree storage and the walks shared by `BinarySearchTree` and `Treap`.
///
/// Every walk is iterative: sorted input degenerates a plain BST into a
/// list, and recursion that deep would overflow the stack.
pub(crate) struct Tree<V> {
    pub root: Link,
    pub nodes: Arena<TreeNode<V>>,
}

impl<V> Tree<V> {
    pub fn new() -> Self {
        Tree {
            root: None,
            nodes: Arena::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    pub fn get(&self, key: Key) -> Option<&V> {
        self.find_with_parent(key)
            .map(|(_, id)| &self.nodes[id].value)
    }

    /// The node holding `key` and its parent.
    pub fn find_with_parent(&self, key: Key) -> Option<(Link, NodeId)> {
        let mut parent = None;
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = &self.nodes[id];
            if key == node.key {
                return Some((parent, id));
            }
            parent = cur;
            cur = if key < node.key { node.left } else { node.right };
        }
        None
    }

    /// Plain BST insert. A new node becomes a leaf and `path` receives its
    /// ancestors, root first.
    pub fn insert_leaf(
        &mut self,
        key: Key,
        value: V,
        priority: u32,
        path: &mut Vec<NodeId>,
    ) -> Inserted<V> {
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = &mut self.nodes[id];
            if key == node.key {
                return Inserted::Replaced(std::mem::replace(&mut node.value, value));
            }
            path.push(id);
            cur = if key < node.key { node.left } else { node.right };
        }

        let id = self.nodes.alloc(TreeNode {
            key,
            value,
            left: None,
            right: None,
            priority,
        });
        match path.last() {
            None => self.root = Some(id),
            Some(&parent) => {
                let p = &mut self.nodes[parent];
                if key < p.key {
                    p.left = Some(id);
                } else {
                    p.right = Some(id);
                }
            }
        }
        Inserted::New(id)
    }

    /// Point `parent`'s link to `old` at `new` instead, or the root when
    /// `parent` is `None`.
    pub fn replace_child(&mut self, parent: Link, old: NodeId, new: Link) {
        match parent {
            None => self.root = new,
            Some(p) => {
                let p = &mut self.nodes[p];
                if p.left == Some(old) {
                    p.left = new;
                } else {
                    p.right = new;
                }
            }
        }
    }

    /// Unlink a node with at most one child, its child takes its place.
    pub fn splice_out(&mut self, parent: Link, id: NodeId) -> Option<V> {
        let node = &self.nodes[id];
        debug_assert!(node.left.is_none() || node.right.is_none());
        let child = node.left.or(node.right);
        self.replace_child(parent, id, child);
        self.nodes.release(id).map(|n| n.value)
    }

    /// ```text
    ///     x              r
    ///    / \            / \
    ///   a   r    =>    x   c
    ///      / \        / \
    ///     b   c      a   b
    /// ```
    /// Returns the new subtree root, the caller relinks it into the parent.
    pub fn rotate_left(&mut self, x: NodeId) -> NodeId {
        let r = match self.nodes[x].right {
            Some(r) => r,
            None => return x,
        };
        self.nodes[x].right = self.nodes[r].left;
        self.nodes[r].left = Some(x);
        r
    }

    /// Mirror of `rotate_left`.
    pub fn rotate_right(&mut self, x: NodeId) -> NodeId {
        let l = match self.nodes[x].left {
            Some(l) => l,
            None => return x,
        };
        self.nodes[x].left = self.nodes[l].right;
        self.nodes[l].right = Some(x);
        l
    }

    pub fn traverse(&self, order: Traversal) -> Vec<Key> {
        let mut keys = Vec::with_capacity(self.len());
        match order {
            Traversal::Preorder => {
                let mut stack: Vec<NodeId> = self.root.into_iter().collect();
                while let Some(id) = stack.pop() {
                    let node = &self.nodes[id];
                    keys.push(node.key);
                    stack.extend(node.right);
                    stack.extend(node.left);
                }
            }
            Traversal::Inorder => keys.extend(self.iter().map(|(k, _)| k)),
            Traversal::Postorder => {
                // root, right, left reversed is left, right, root
                let mut stack: Vec<NodeId> = self.root.into_iter().collect();
                while let Some(id) = stack.pop() {
                    let node = &self.nodes[id];
                    keys.push(node.key);
                    stack.extend(node.left);
                    stack.extend(node.right);
                }
                keys.reverse();
            }
        }
        keys
    }

    /// Number of nodes on the longest root to leaf path.
    pub fn height(&self) -> usize {
        let mut max = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            max = max.max(depth);
            let node = &self.nodes[id];
            stack.extend(node.left.map(|c| (c, depth + 1)));
            stack.extend(node.right.map(|c| (c, depth + 1)));
        }
        max
    }

    /// Sideways drawing, right subtree first, `X` marks an empty link.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![(String::new(), self.root, false)];
        while let Some((prefix, link, is_right)) = stack.pop() {
            let branch = if is_right { " ├──" } else { " └──" };
            let id = match link {
                Some(id) => id,
                None => {
                    out.push_str(&format!("{}{}─X\n", prefix, branch));
                    continue;
                }
            };
            let node = &self.nodes[id];
            out.push_str(&format!("{}{} {}\n", prefix, branch, node.key));
            let child = format!("{}{}", prefix, if is_right { " │  " } else { "    " });
            stack.push((child.clone(), node.left, false));
            stack.push((child, node.right, true));
        }
        out
    }

    pub fn iter(&self) -> TreeIter<'_, V> {
        let mut iter = TreeIter {
            nodes: &self.nodes,
            stack: vec![],
        };
        iter.push_left(self.root);
        iter
    }
}

/// In-order iterator over a tree.
pub struct TreeIter<'a, V> {
    nodes: &'a Arena<TreeNode<V>>,
    stack: Vec<NodeId>,
}

impl<'a, V> TreeIter<'a, V> {
    fn push_left(&mut self, mut link: Link) {
        while let Some(id) = link {
            self.stack.push(id);
            link = self.nodes[id].left;
        }
    }
}

impl<'a, V> Iterator for TreeIter<'a, V> {
    type Item = (Key, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = &self.nodes[id];
        self.push_left(node.right);
        Some((node.key, &node.value))
    }
}

#[cfg(test)]
mod tests {
    use super::{Inserted, Traversal, Tree};

    fn build(keys: &[i32]) -> Tree<i32> {
        let mut t = Tree::new();
        for &k in keys {
            let mut path = vec![];
            t.insert_leaf(k, k * 10, 0, &mut path);
        }
        t
    }

    #[test]
    fn test_insert_leaf_path() {
        let mut t = build(&[5, 3, 8]);
        let mut path = vec![];
        match t.insert_leaf(4, 40, 0, &mut path) {
            Inserted::New(_) => {}
            Inserted::Replaced(_) => panic!("4 is new"),
        }
        let keys: Vec<_> = path.iter().map(|&id| t.nodes[id].key).collect();
        assert_eq!(keys, vec![5, 3]);

        path.clear();
        match t.insert_leaf(8, 81, 0, &mut path) {
            Inserted::Replaced(v) => assert_eq!(v, 80),
            Inserted::New(_) => panic!("8 exists"),
        }
        assert_eq!(t.get(8), Some(&81));
        assert_eq!(t.len(), 4);
    }

    #[test]
    fn test_traversals() {
        //       4
        //     /   \
        //    2     6
        //   / \   / \
        //  1   3 5   7
        let t = build(&[4, 2, 6, 1, 3, 5, 7]);
        assert_eq!(t.traverse(Traversal::Preorder), vec![4, 2, 1, 3, 6, 5, 7]);
        assert_eq!(t.traverse(Traversal::Inorder), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(t.traverse(Traversal::Postorder), vec![1, 3, 2, 5, 7, 6, 4]);
        assert_eq!(t.height(), 3);
    }

    #[test]
    fn test_rotations() {
        let mut t = build(&[2, 1, 3]);
        let root = t.root.unwrap();
        let new_root = t.rotate_left(root);
        t.replace_child(None, root, Some(new_root));
        assert_eq!(t.traverse(Traversal::Preorder), vec![3, 2, 1]);
        assert_eq!(t.traverse(Traversal::Inorder), vec![1, 2, 3]);

        let root = t.root.unwrap();
        let new_root = t.rotate_right(root);
        t.replace_child(None, root, Some(new_root));
        assert_eq!(t.traverse(Traversal::Preorder), vec![2, 1, 3]);

        // nothing to rotate with
        let leaf = t.find_with_parent(1).unwrap().1;
        assert_eq!(t.rotate_left(leaf), leaf);
        assert_eq!(t.rotate_right(leaf), leaf);
    }

    #[test]
    fn test_render() {
        let t = build(&[2, 1, 3]);
        let expected = concat!(
            " └── 2\n",
            "     ├── 3\n",
            "     │   ├───X\n",
            "     │   └───X\n",
            "     └── 1\n",
            "         ├───X\n",
            "         └───X\n",
        );
        assert_eq!(t.render(), expected);
        assert_eq!(build(&[]).render(), " └───X\n");

        let left_spine = concat!(
            " └── 3\n",
            "     ├───X\n",
            "     └── 2\n",
            "         ├───X\n",
            "         └── 1\n",
            "             ├───X\n",
            "             └───X\n",
        );
        assert_eq!(build(&[3, 2, 1]).render(), left_spine);
    }

    #[test]
    fn test_degenerate_is_iterative() {
        let keys: Vec<i32> = (0..100_000).collect();
        let mut t = Tree::new();
        // build the spine by hand, insert_leaf would be quadratic here
        let mut prev = None;
        for &k in &keys {
            let id = t.nodes.alloc(super::TreeNode {
                key: k,
                value: (),
                left: None,
                right: None,
                priority: 0,
            });
            match prev {
                None => t.root = Some(id),
                Some(p) => t.nodes[p].right = Some(id),
            }
            prev = Some(id);
        }
        assert_eq!(t.height(), keys.len());
        assert_eq!(t.traverse(Traversal::Postorder).len(), keys.len());
        assert_eq!(t.iter().count(), keys.len());
    }
}
