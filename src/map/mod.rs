pub use crate::map::config::*;
pub use crate::map::errors::{MResult, MapError};
pub use crate::map::options::Options;

mod config;
mod errors;
mod options;

/// Keys are plain fixed-width signed integers.
pub type Key = i32;

/// The contract shared by every ordered container in this crate.
pub trait Map<V> {
    /// Insert the pair, overwriting the value if `key` is already present.
    fn insert(&mut self, key: Key, value: V);

    /// Return a copy of the value stored under `key`.
    fn find(&self, key: Key) -> Option<V>
    where
        V: Clone;

    /// Remove `key`, returns false if it was not present.
    fn erase(&mut self, key: Key) -> bool;

    /// Number of stored keys.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::{Key, Map};

    /// Behaviour every `Map` must share, run against an empty container.
    pub fn contract<M: Map<String>>(mut m: M) {
        assert!(m.is_empty());
        assert_eq!(m.find(1), None);
        assert!(!m.erase(1));

        // round trip
        for (k, v) in [(5, "a"), (1, "b"), (9, "c"), (3, "d")] {
            m.insert(k, v.to_string());
        }
        assert_eq!(m.len(), 4);
        assert_eq!(m.find(9), Some("c".to_string()));
        assert_eq!(m.find(4), None);

        // overwrite keeps the size
        m.insert(9, "cc".to_string());
        assert_eq!(m.len(), 4);
        assert_eq!(m.find(9), Some("cc".to_string()));

        // erase
        assert!(m.erase(1));
        assert!(!m.erase(1));
        assert_eq!(m.find(1), None);
        assert_eq!(m.len(), 3);
        for k in [3, 5, 9] {
            assert!(m.find(k).is_some());
        }

        // extremes are ordinary keys
        m.insert(Key::MIN, "min".to_string());
        m.insert(Key::MAX, "max".to_string());
        assert_eq!(m.find(Key::MIN), Some("min".to_string()));
        assert_eq!(m.find(Key::MAX), Some("max".to_string()));
        assert!(m.erase(Key::MIN));
        assert!(m.erase(Key::MAX));

        for k in [3, 5, 9] {
            assert!(m.erase(k));
        }
        assert!(m.is_empty());
    }

    /// Ordered, reversed and interleaved batches of inserts followed by lookups.
    pub fn batches<M: Map<String>>(mut m: M, n: Key) {
        let keys: Vec<Key> = (0..n).chain((n..2 * n).rev()).collect();
        for &k in &keys {
            m.insert(k, k.to_string());
        }
        assert_eq!(m.len(), keys.len());
        for &k in &keys {
            assert_eq!(m.find(k), Some(k.to_string()));
        }
        for k in (0..2 * n).step_by(2) {
            assert!(m.erase(k));
        }
        assert_eq!(m.len(), n as usize);
        for k in 0..2 * n {
            assert_eq!(m.find(k).is_some(), k % 2 == 1, "key {}", k);
        }
    }
}
