use crate::map::Key;
use crate::skiplist::skipnode::{Link, Node};
use crate::utils::arena::Arena;

/// Walks level 0 from the first node to nil.
pub(crate) struct NodeIter<'a, V> {
    nodes: &'a Arena<Node<V>>,
    node: Link,
}

impl<'a, V> NodeIter<'a, V> {
    pub(crate) fn new(nodes: &'a Arena<Node<V>>, first: Link) -> Self {
        NodeIter { nodes, node: first }
    }
}

impl<'a, V> Iterator for NodeIter<'a, V> {
    type Item = &'a Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.nodes[self.node?];
        self.node = node.get_next(0);
        Some(node)
    }
}

/// Ascending iterator over the entries of a `SkipList`.
pub struct SkipListIter<'a, V> {
    inner: NodeIter<'a, V>,
    remaining: usize,
}

impl<'a, V> SkipListIter<'a, V> {
    pub(crate) fn new(inner: NodeIter<'a, V>, len: usize) -> Self {
        SkipListIter {
            inner,
            remaining: len,
        }
    }
}

impl<'a, V> Iterator for SkipListIter<'a, V> {
    type Item = (Key, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.inner.next()?;
        self.remaining = self.remaining.saturating_sub(1);
        Some((node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, V> ExactSizeIterator for SkipListIter<'a, V> {}

#[cfg(test)]
mod tests {
    use crate::map::Key;
    use crate::skiplist::SkipList;
    use crate::utils::random::Random;
    use crate::Options;

    fn build(keys: &[Key]) -> SkipList<Key> {
        let mut sl = SkipList::with_generator(Random::new(0xdead_beef), Options::default()).unwrap();
        for &k in keys {
            sl.insert(k, k * 10);
        }
        sl
    }

    #[test]
    fn test_basic() {
        let sl = build(&[4, 2, 8, 6]);
        let mut iter = sl.iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some((2, &20)));
        assert_eq!(iter.next(), Some((4, &40)));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next(), Some((6, &60)));
        assert_eq!(iter.next(), Some((8, &80)));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_empty() {
        let sl = build(&[]);
        assert_eq!(sl.iter().next(), None);
        assert_eq!(sl.keys().count(), 0);
    }

    #[test]
    fn test_into_iter() {
        let sl = build(&[3, 1, 2]);
        let mut seen = vec![];
        for (k, v) in &sl {
            seen.push((k, *v));
        }
        assert_eq!(seen, vec![(1, 10), (2, 20), (3, 30)]);
    }
}
