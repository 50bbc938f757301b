//! Shared data model for Mystic Cave content.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{ValidationError, validate_world};
