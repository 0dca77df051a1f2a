use crate::map::{Key, MResult, Map, MapError, Options};
use crate::skiplist::skiplist_iter::{NodeIter, SkipListIter};
use crate::skiplist::skipnode::{Link, Node, Position};
use crate::utils::arena::{Arena, NodeId};
use crate::utils::random::{Random, RandomGenerator};
use slog::{debug, info, Logger};
use std::collections::HashSet;
use std::fmt;
use std::mem;

/// A probabilistic ordered map from `Key` to `V`.
///
/// ```text
/// <head> ----------> [2] --------------------------------------------------> [9] ---------->
/// <head> ----------> [2] ------------------------------------[7] ----------> [9] ---------->
/// <head> ----------> [2] ----------> [4] ------------------> [7] ----------> [9] --> [10] ->
/// <head> --> [1] --> [2] --> [3] --> [4] --> [5] --> [6] --> [7] --> [8] --> [9] --> [10] ->
/// ```
///
/// Level 0 links every node in key order, each higher level links a thinned
/// subset. A new node reaches one more level with probability `p`, so searches,
/// inserts and erases are logarithmic on average without any rebalancing.
///
/// The head tower has exactly one entry per occupied level: it grows when a
/// taller node arrives and shrinks as soon as its top level runs straight into
/// nil after an erase.
pub struct SkipList<V, R = Random> {
    head: Vec<Link>,
    nodes: Arena<Node<V>>,
    size: usize,
    rnd: R,
    probability: f64,
    max_height: usize,
    logger: Logger,
}

impl<V> SkipList<V, Random> {
    /// Empty list with default options and an entropy-seeded generator.
    pub fn new() -> Self {
        let opt = Options::default();
        Self::build(Random::from_entropy(), &opt)
    }

    /// Empty list with the generator seeded from `opt.seed` when it is set.
    pub fn with_options(opt: Options) -> MResult<Self> {
        let rnd = match opt.seed {
            Some(seed) => Random::new(seed),
            None => Random::from_entropy(),
        };
        Self::with_generator(rnd, opt)
    }
}

impl<V> Default for SkipList<V, Random> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, R> SkipList<V, R> {
    fn build(rnd: R, opt: &Options) -> Self {
        let logger = opt.logger();
        debug!(logger, "new skip list"; "probability" => opt.probability, "max_height" => opt.max_height);
        SkipList {
            head: vec![],
            nodes: Arena::new(),
            size: 0,
            rnd,
            probability: opt.probability,
            max_height: opt.max_height,
            logger,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Level count of the head, that is the height of the tallest node.
    /// Zero when the list is empty.
    #[inline]
    pub fn max_level(&self) -> usize {
        self.head.len()
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn get(&self, key: Key) -> Option<&V> {
        self.find_equal(key, None).map(|id| &self.nodes[id].value)
    }

    pub fn get_mut(&mut self, key: Key) -> Option<&mut V> {
        let id = self.find_equal(key, None)?;
        Some(&mut self.nodes[id].value)
    }

    pub fn contains_key(&self, key: Key) -> bool {
        self.find_equal(key, None).is_some()
    }

    pub fn iter(&self) -> SkipListIter<'_, V> {
        SkipListIter::new(self.node_iter(), self.size)
    }

    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.node_iter().map(|n| n.key)
    }

    /// `(key, level count)` for every node in key order.
    pub fn heights(&self) -> impl Iterator<Item = (Key, usize)> + '_ {
        self.node_iter().map(|n| (n.key, n.height()))
    }

    /// Remove `key` and return its value.
    pub fn remove(&mut self, key: Key) -> Option<V> {
        let mut update = vec![Position::Head; self.head.len()];
        let id = self.find_equal(key, Some(&mut update[..]))?;
        // taken out first, its forward links stay readable on `node`
        let node = self.nodes.release(id)?;

        let height = node.height().min(update.len());
        for (level, &pos) in update.iter().enumerate().take(height) {
            if self.next(pos, level) != Some(id) {
                break;
            }
            self.set_next(pos, level, node.get_next(level));
        }
        self.size -= 1;
        self.shrink_levels();
        Some(node.value)
    }

    /// Drop every node and all levels.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head.clear();
        self.size = 0;
    }

    /// Rebuild every level above 0 so that level `k` links every `2^k`-th node.
    ///
    /// Order and contents are untouched, only the towers change. Later inserts
    /// still draw random heights, so the perfect shape only lasts until the
    /// next mutation. Meant for bulk loaded, read mostly lists.
    pub fn reconfigure(&mut self) {
        let mut cur = self.first();
        while let Some(id) = cur {
            let node = &mut self.nodes[id];
            node.forward.truncate(1);
            cur = node.get_next(0);
        }
        self.head.truncate(1);

        let mut level = 1;
        let mut stride = 2;
        while stride <= self.size && level < self.max_height {
            self.head.push(None);
            let mut prev = Position::Head;
            let mut position = 0;
            let mut cur = self.first();
            while let Some(id) = cur {
                position += 1;
                if position % stride == 0 {
                    self.nodes[id].forward.push(None);
                    self.set_next(prev, level, Some(id));
                    prev = Position::Node(id);
                }
                cur = self.nodes[id].get_next(0);
            }
            self.set_next(prev, level, None);
            level += 1;
            stride *= 2;
        }
        info!(self.logger, "reconfigure"; "size" => self.size, "levels" => self.head.len());
    }

    /// One row per level, top level first. The first column is the head, then
    /// one column per node: `-` when the node reaches the level.
    pub fn level_diagram(&self) -> String {
        let mut out = String::new();
        for level in (0..self.head.len()).rev() {
            out.push('-');
            for node in self.node_iter() {
                out.push(if node.height() > level { '-' } else { ' ' });
            }
            out.push('\n');
        }
        out
    }

    /// Walk every level and verify the structural invariants:
    /// strictly ascending keys, each level a subset of the one below, every
    /// node linked on all levels its tower reaches, the size counter and a
    /// non-empty top level.
    pub fn check(&self) -> MResult<()> {
        let height = self.head.len();

        let mut below = HashSet::with_capacity(self.size);
        let mut prev: Option<Key> = None;
        let mut cur = self.first();
        while let Some(id) = cur {
            let node = self.nodes.get(id).ok_or(MapError::DanglingLink(0))?;
            if let Some(p) = prev {
                if p >= node.key {
                    return Err(MapError::OutOfOrder(0, p, node.key));
                }
            }
            prev = Some(node.key);
            below.insert(id);
            cur = node.get_next(0);
        }
        if below.len() != self.size {
            return Err(MapError::SizeMismatch(self.size, below.len()));
        }
        if self.nodes.len() != self.size {
            return Err(MapError::SizeMismatch(self.size, self.nodes.len()));
        }

        for level in 1..height {
            let mut linked = HashSet::new();
            let mut prev: Option<Key> = None;
            let mut cur = self.head[level];
            while let Some(id) = cur {
                let node = self.nodes.get(id).ok_or(MapError::DanglingLink(level))?;
                if node.height() <= level || !below.contains(&id) {
                    return Err(MapError::LevelGap(level, node.key));
                }
                if let Some(p) = prev {
                    if p >= node.key {
                        return Err(MapError::OutOfOrder(level, p, node.key));
                    }
                }
                prev = Some(node.key);
                linked.insert(id);
                cur = node.get_next(level);
            }
            for &id in &below {
                let node = &self.nodes[id];
                if node.height() > level && !linked.contains(&id) {
                    return Err(MapError::Unreachable(level, node.key));
                }
            }
            below = linked;
        }
        // Nodes taller than the head are unreachable at their top levels.
        for &id in &below {
            let node = &self.nodes[id];
            if node.height() > height {
                return Err(MapError::Unreachable(height, node.key));
            }
        }

        if height > 0 && self.head[height - 1].is_none() {
            return Err(MapError::EmptyTopLevel(height - 1));
        }
        Ok(())
    }

    #[inline]
    fn first(&self) -> Link {
        self.head.first().copied().flatten()
    }

    fn node_iter(&self) -> NodeIter<'_, V> {
        NodeIter::new(&self.nodes, self.first())
    }

    #[inline]
    fn next(&self, pos: Position, level: usize) -> Link {
        match pos {
            Position::Head => self.head[level],
            Position::Node(id) => self.nodes[id].get_next(level),
        }
    }

    #[inline]
    fn set_next(&mut self, pos: Position, level: usize, next: Link) {
        match pos {
            Position::Head => self.head[level] = next,
            Position::Node(id) => self.nodes[id].set_next(level, next),
        }
    }

    /// Descend from the top level to level 0, moving right while the next key
    /// is less than `key`. Records the last position of every level in
    /// `update` and returns the level-0 successor, the first node whose key is
    /// greater than or equal to `key`.
    fn find_greater_or_equal(&self, key: Key, mut update: Option<&mut [Position]>) -> Link {
        let mut x = Position::Head;
        let mut next = None;
        for level in (0..self.head.len()).rev() {
            loop {
                next = self.next(x, level);
                match next {
                    Some(id) if self.nodes[id].key < key => x = Position::Node(id),
                    _ => break,
                }
            }
            if let Some(u) = update.as_deref_mut() {
                u[level] = x;
            }
        }
        next
    }

    fn find_equal(&self, key: Key, update: Option<&mut [Position]>) -> Option<NodeId> {
        self.find_greater_or_equal(key, update)
            .filter(|&id| self.nodes[id].key == key)
    }

    fn shrink_levels(&mut self) {
        let before = self.head.len();
        while let Some(None) = self.head.last() {
            self.head.pop();
        }
        if self.head.len() != before {
            debug!(self.logger, "shrink levels"; "from" => before, "to" => self.head.len());
        }
    }
}

impl<V, R: RandomGenerator> SkipList<V, R> {
    /// Empty list drawing its levels from `rnd`. `opt.seed` is ignored.
    pub fn with_generator(rnd: R, opt: Options) -> MResult<Self> {
        opt.validate()?;
        Ok(Self::build(rnd, &opt))
    }

    /// Insert the pair, returns the previous value when `key` was present.
    ///
    /// An existing key is overwritten in place and the towers stay as they are.
    pub fn insert(&mut self, key: Key, value: V) -> Option<V> {
        let mut update = vec![Position::Head; self.head.len()];
        if let Some(id) = self.find_equal(key, Some(&mut update[..])) {
            return Some(mem::replace(&mut self.nodes[id].value, value));
        }

        let height = self.random_height();
        if height > self.head.len() {
            debug!(self.logger, "grow levels"; "from" => self.head.len(), "to" => height);
            self.head.resize(height, None);
            update.resize(height, Position::Head);
        }

        let id = self.nodes.alloc(Node::new(key, value, height));
        for (level, &pos) in update.iter().enumerate().take(height) {
            let next = self.next(pos, level);
            self.nodes[id].set_next(level, next);
            self.set_next(pos, level, Some(id));
        }
        self.size += 1;
        None
    }

    fn random_height(&mut self) -> usize {
        let mut height = 1;
        while height < self.max_height && self.rnd.chance(self.probability) {
            height += 1;
        }
        height
    }
}

impl<V, R: RandomGenerator> Map<V> for SkipList<V, R> {
    fn insert(&mut self, key: Key, value: V) {
        SkipList::insert(self, key, value);
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
        self.size
    }
}

impl<'a, V, R> IntoIterator for &'a SkipList<V, R> {
    type Item = (Key, &'a V);
    type IntoIter = SkipListIter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: fmt::Display, R> fmt::Display for SkipList<V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.node_iter() {
            writeln!(
                f,
                "Key: {} Value: {} Level: {}",
                node.key,
                node.value,
                node.height() - 1
            )?;
        }
        Ok(())
    }
}
