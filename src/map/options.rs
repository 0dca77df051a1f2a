use crate::map::config::{DEFAULT_PROBABILITY, MAX_HEIGHT};
use crate::map::errors::{MResult, MapError};
use slog::Logger;

#[derive(Clone)]
pub struct Options {
    /// Chance that a freshly inserted skip list node reaches one more level.
    /// Lower values build sparser towers: less memory, longer searches.
    /// Must be in (0, 1).
    /// Default: 0.5
    pub probability: f64,
    /// Hard cap on the level count drawn for a new node.
    /// Default: 32
    pub max_height: usize,
    /// Seed for the default generator. `None` seeds from the OS.
    /// Ignored when a generator is injected with `with_generator`.
    /// Default: None
    pub seed: Option<u64>,
    /// Default: None, which discards everything.
    pub info_log: Option<Logger>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            probability: DEFAULT_PROBABILITY,
            max_height: MAX_HEIGHT,
            seed: None,
            info_log: None,
        }
    }
}

impl Options {
    pub fn validate(&self) -> MResult<()> {
        if !(self.probability > 0.0 && self.probability < 1.0) {
            return Err(MapError::InvalidProbability(self.probability));
        }
        if self.max_height == 0 {
            return Err(MapError::InvalidMaxHeight(self.max_height));
        }
        Ok(())
    }

    pub fn logger(&self) -> Logger {
        match &self.info_log {
            Some(l) => l.clone(),
            None => logger::discard(),
        }
    }
}
