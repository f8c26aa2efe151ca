//! json-tree - JSON document tree and its serialization core.
//!
//! A [`Value`] is a tagged document tree: null, booleans, 64-bit integers,
//! finite doubles, strings, insertion-ordered arrays, key-sorted objects, and
//! shared [`Value::Ref`] handles that alias a subtree without copying it.
//!
//! Emission comes in two forms: [`emit_compact`] produces canonical text with
//! zero structural whitespace, [`emit_pretty`] produces newline- and
//! space-indented text. Object members always serialize in ascending
//! lexicographic key order, so equal documents produce byte-identical text in
//! either mode.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use json_tree::{emit_compact, emit_pretty, Value};
//!
//! let mut members = BTreeMap::new();
//! members.insert("b".to_string(), Value::Int64(1));
//! members.insert("a".to_string(), Value::Int64(2));
//! let doc = Value::Object(members);
//!
//! assert_eq!(emit_compact(&doc).unwrap(), r#"{"a":2,"b":1}"#);
//! assert_eq!(
//!     emit_pretty(&doc, 2).unwrap(),
//!     "{\n  \"a\": 2,\n  \"b\": 1\n}"
//! );
//! ```

pub mod emit;
mod error;
mod result_state;
mod value;

pub use emit::{emit_compact, emit_pretty, emit_pretty_at, CompactEmitter, PrettyEmitter};
pub use error::EmitError;
pub use result_state::ResultState;
pub use value::Value;
