//! json-tree-util - string escaping and number formatting for json-tree.
//!
//! The emitters treat both modules as opaque collaborators: [`strings`]
//! produces complete JSON string literals, [`num`] produces shortest
//! round-trip decimal text for finite floats.

pub mod num;
pub mod strings;

// Re-exports for convenience
pub use num::format_f64;
pub use strings::{escape, escape_into};
