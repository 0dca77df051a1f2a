pub mod arena;
pub mod random;
