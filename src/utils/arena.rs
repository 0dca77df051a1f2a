use std::ops::{Index, IndexMut};

/// Stable handle to a node stored in an [`Arena`].
pub type NodeId = usize;

/// Index-addressed node storage shared by every container in this crate.
///
/// Nodes refer to each other by `NodeId` instead of pointers. Releasing a
/// node empties its slot and pushes the index on a free list, so the next
/// allocation reuses it. A released id must not be dereferenced again; the
/// containers guarantee this by unlinking a node before releasing it.
pub struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<NodeId>,
    len: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Arena {
            slots: vec![],
            free: vec![],
            len: 0,
        }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Arena {
            slots: Vec::with_capacity(cap),
            free: vec![],
            len: 0,
        }
    }

    /// Store `item`, returns the id it can be reached by.
    pub fn alloc(&mut self, item: T) -> NodeId {
        self.len += 1;
        match self.free.pop() {
            Some(id) => {
                debug_assert!(self.slots[id].is_none());
                self.slots[id] = Some(item);
                id
            }
            None => {
                self.slots.push(Some(item));
                self.slots.len() - 1
            }
        }
    }

    /// Remove the node at `id` and hand it back, `None` if the slot is empty.
    pub fn release(&mut self, id: NodeId) -> Option<T> {
        let item = self.slots.get_mut(id)?.take()?;
        self.free.push(id);
        self.len -= 1;
        Some(item)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.slots.get(id).and_then(|s| s.as_ref())
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.slots.get_mut(id).and_then(|s| s.as_mut())
    }

    /// Number of live nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.len = 0;
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &T {
        match self.get(id) {
            Some(item) => item,
            None => panic!("arena slot {} is empty", id),
        }
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        match self.get_mut(id) {
            Some(item) => item,
            None => panic!("arena slot {} is empty", id),
        }
    }
}
