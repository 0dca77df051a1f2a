/// Chance that a new skip list node is promoted one more level.
pub const DEFAULT_PROBABILITY: f64 = 0.5;

/// Upper bound on a skip list node's level count. With `p = 0.5` a list
/// needs around 2^32 entries before this cap starts to matter.
pub const MAX_HEIGHT: usize = 32;
