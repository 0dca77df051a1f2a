use crate::map::Key;
use std::result;

quick_error! {
    #[derive(Debug)]
    pub enum MapError {
        InvalidProbability(p: f64) {
            display("promotion probability {} is not in (0, 1)", p)
        }
        InvalidMaxHeight(h: usize) {
            display("max height must be at least 1, got {}", h)
        }
        // Structural checks, see `SkipList::check`.
        OutOfOrder(level: usize, prev: Key, next: Key) {
            display("level {} out of order: {} is followed by {}", level, prev, next)
        }
        LevelGap(level: usize, key: Key) {
            display("key {} is linked at level {} but missing below it", key, level)
        }
        Unreachable(level: usize, key: Key) {
            display("key {} reaches level {} but is not linked there", key, level)
        }
        SizeMismatch(expected: usize, actual: usize) {
            display("size counter is {} but level 0 holds {} nodes", expected, actual)
        }
        EmptyTopLevel(level: usize) {
            display("top level {} links head directly to nil", level)
        }
        DanglingLink(level: usize) {
            display("level {} links to a released node", level)
        }
    }
}

pub type MResult<T> = result::Result<T, MapError>;
