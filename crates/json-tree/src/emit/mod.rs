//! JSON text emission - compact (canonical) and pretty (indented).
//!
//! Both emitters walk the tree recursively, one call frame per nesting
//! level, writing into an owned [`json_tree_buffers::Writer`]. Leaf
//! formatting is delegated: strings to `json_tree_util::strings`, doubles to
//! `json_tree_util::num`. `Ref` nodes render as their target and leave no
//! trace in the output.
//!
//! There is no depth limit; a pathologically deep tree can exhaust the call
//! stack.

mod compact;
mod pretty;

pub use compact::CompactEmitter;
pub use pretty::PrettyEmitter;

use crate::{EmitError, Value};

/// Serialize `value` as canonical JSON text: RFC 8259 grammar, zero
/// structural whitespace, object members in ascending key order.
pub fn emit_compact(value: &Value) -> Result<String, EmitError> {
    let mut emitter = CompactEmitter::new();
    emitter.encode(value)
}

/// Serialize `value` as indented JSON text, `indent` spaces per nesting
/// level, starting at column zero.
pub fn emit_pretty(value: &Value, indent: usize) -> Result<String, EmitError> {
    emit_pretty_at(value, indent, 0)
}

/// Serialize `value` as indented JSON text whose first line is already
/// `current` columns deep, for embedding in surrounding output.
pub fn emit_pretty_at(value: &Value, indent: usize, current: usize) -> Result<String, EmitError> {
    let mut emitter = PrettyEmitter::new(indent);
    emitter.encode_at(value, current)
}
