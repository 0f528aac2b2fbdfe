//! Status phrases.
//!
//! The catalog is loaded once from YAML; the rotator hands out phrases
//! from it without repeating the previous one.

pub mod catalog;
pub mod rotator;

pub use catalog::*;
pub use rotator::*;
