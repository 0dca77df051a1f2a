use crate::map::{Key, Map};
use crate::utils::arena::{Arena, NodeId};
use std::fmt;
use std::mem;
use std::ops::{Add, Sub};

struct ListNode<V> {
    key: Key,
    value: V,
    next: Option<NodeId>,
}

/// Singly linked list kept in ascending key order.
///
/// Every operation is a linear walk from the head that stops at the first
/// key not less than the target.
pub struct SortedList<V> {
    head: Option<NodeId>,
    tail: Option<NodeId>,
    nodes: Arena<ListNode<V>>,
}

impl<V> Default for SortedList<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> SortedList<V> {
    pub fn new() -> Self {
        SortedList {
            head: None,
            tail: None,
            nodes: Arena::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, key: Key) -> Option<&V> {
        match self.locate(key) {
            (_, Some(id)) if self.nodes[id].key == key => Some(&self.nodes[id].value),
            _ => None,
        }
    }

    pub fn contains_key(&self, key: Key) -> bool {
        self.get(key).is_some()
    }

    /// Insert the pair, returns the previous value when `key` was present.
    pub fn insert(&mut self, key: Key, value: V) -> Option<V> {
        let (prev, cur) = self.locate(key);
        if let Some(id) = cur {
            if self.nodes[id].key == key {
                return Some(mem::replace(&mut self.nodes[id].value, value));
            }
        }
        let id = self.nodes.alloc(ListNode {
            key,
            value,
            next: cur,
        });
        self.link_after(prev, id);
        if cur.is_none() {
            self.tail = Some(id);
        }
        None
    }

    /// Remove `key` and return its value.
    pub fn remove(&mut self, key: Key) -> Option<V> {
        let (prev, cur) = self.locate(key);
        let id = cur.filter(|&id| self.nodes[id].key == key)?;
        let next = self.nodes[id].next;
        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        if self.tail == Some(id) {
            self.tail = prev;
        }
        self.nodes.release(id).map(|n| n.value)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    pub fn iter(&self) -> ListIter<'_, V> {
        ListIter {
            nodes: &self.nodes,
            node: self.head,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.iter().map(|(k, _)| k)
    }

    /// Last node with a key less than `key` and its successor.
    fn locate(&self, key: Key) -> (Option<NodeId>, Option<NodeId>) {
        let mut prev = None;
        let mut cur = self.head;
        while let Some(id) = cur {
            let node = &self.nodes[id];
            if node.key >= key {
                break;
            }
            prev = cur;
            cur = node.next;
        }
        (prev, cur)
    }

    fn link_after(&mut self, prev: Option<NodeId>, id: NodeId) {
        match prev {
            Some(p) => self.nodes[p].next = Some(id),
            None => self.head = Some(id),
        }
    }

    /// Append a key known to be larger than every key in the list.
    fn push_back(&mut self, key: Key, value: V) {
        debug_assert!(self.tail.map_or(true, |t| self.nodes[t].key < key));
        let id = self.nodes.alloc(ListNode {
            key,
            value,
            next: None,
        });
        self.link_after(self.tail, id);
        self.tail = Some(id);
    }
}

impl<V: Clone> SortedList<V> {
    /// Sorted union of both lists. On a shared key the value of `self` is kept.
    pub fn merge(&self, other: &SortedList<V>) -> SortedList<V> {
        let mut result = SortedList::new();
        let mut lhs = self.iter().peekable();
        let mut rhs = other.iter().peekable();
        loop {
            let next = match (lhs.peek(), rhs.peek()) {
                (Some(&(a, _)), Some(&(b, _))) if a < b => lhs.next(),
                (Some(&(a, _)), Some(&(b, _))) if b < a => rhs.next(),
                (Some(_), Some(_)) => {
                    rhs.next();
                    lhs.next()
                }
                (Some(_), None) => lhs.next(),
                (None, Some(_)) => rhs.next(),
                (None, None) => break,
            };
            if let Some((k, v)) = next {
                result.push_back(k, v.clone());
            }
        }
        result
    }

    /// Copy of `self` without the keys present in `other`.
    pub fn difference(&self, other: &SortedList<V>) -> SortedList<V> {
        let mut result = self.clone();
        for k in other.keys() {
            result.remove(k);
        }
        result
    }
}

impl<V: Clone> Clone for SortedList<V> {
    fn clone(&self) -> Self {
        let mut list = SortedList {
            head: None,
            tail: None,
            nodes: Arena::with_capacity(self.len()),
        };
        for (k, v) in self.iter() {
            list.push_back(k, v.clone());
        }
        list
    }
}

impl<'a, V: Clone> Add for &'a SortedList<V> {
    type Output = SortedList<V>;

    fn add(self, rhs: Self) -> SortedList<V> {
        self.merge(rhs)
    }
}

impl<'a, V: Clone> Sub for &'a SortedList<V> {
    type Output = SortedList<V>;

    fn sub(self, rhs: Self) -> SortedList<V> {
        self.difference(rhs)
    }
}

impl<V> Map<V> for SortedList<V> {
    fn insert(&mut self, key: Key, value: V) {
        SortedList::insert(self, key, value);
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
        self.nodes.len()
    }
}

impl<V: fmt::Display> fmt::Display for SortedList<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, v) in self.iter() {
            write!(f, "{}:{} ", k, v)?;
        }
        Ok(())
    }
}

pub struct ListIter<'a, V> {
    nodes: &'a Arena<ListNode<V>>,
    node: Option<NodeId>,
}

impl<'a, V> Iterator for ListIter<'a, V> {
    type Item = (Key, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.nodes[self.node?];
        self.node = node.next;
        Some((node.key, &node.value))
    }
}

impl<'a, V> IntoIterator for &'a SortedList<V> {
    type Item = (Key, &'a V);
    type IntoIter = ListIter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
