//! String utilities.

mod escape;

pub use escape::{escape, escape_into};
