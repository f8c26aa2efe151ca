//! `PrettyEmitter` - indented, human-readable JSON text.

use std::collections::BTreeMap;

use json_tree_buffers::Writer;
use json_tree_util::{num, strings};

use crate::{EmitError, Value};

/// Renders a [`Value`] tree as indented JSON.
///
/// Entering a non-empty container grows the working indent by `indent`
/// spaces; each child sits on its own line at the grown indent, and the
/// closing bracket returns to the container's own indent. Empty containers
/// render as `[]` and `{}` with no newline, exactly as the compact form.
/// Object members are `"key": value` and appear in ascending key order.
///
/// Stripping every space and newline outside string literals from the output
/// yields the compact rendering of the same tree.
pub struct PrettyEmitter {
    pub writer: Writer,
    indent: usize,
}

impl PrettyEmitter {
    /// `indent` is the number of spaces added per nesting level. Zero is
    /// accepted and degenerates to multi-line output with no padding.
    pub fn new(indent: usize) -> Self {
        Self {
            writer: Writer::new(),
            indent,
        }
    }

    /// Serialize a whole document starting at column zero and drain it from
    /// the writer.
    pub fn encode(&mut self, value: &Value) -> Result<String, EmitError> {
        self.encode_at(value, 0)
    }

    /// Serialize a whole document whose first line is already `current`
    /// columns deep.
    pub fn encode_at(&mut self, value: &Value, current: usize) -> Result<String, EmitError> {
        self.writer.reset();
        self.write_any(value, current)?;
        Ok(self.writer.flush())
    }

    /// Append the rendering of `value` at the given indent to the writer.
    pub fn write_any(&mut self, value: &Value, current: usize) -> Result<(), EmitError> {
        match value {
            Value::Null => self.writer.ascii("null"),
            Value::Bool(b) => self.writer.ascii(if *b { "true" } else { "false" }),
            Value::Int64(i) => self.writer.ascii(&i.to_string()),
            Value::Double(f) => {
                if !f.is_finite() {
                    return Err(EmitError::NonFiniteNumber);
                }
                self.writer.ascii(&num::format_f64(*f));
            }
            Value::Str(s) => strings::escape_into(&mut self.writer, s),
            Value::Array(arr) => self.write_arr(arr, current)?,
            Value::Object(obj) => self.write_obj(obj, current)?,
            Value::Ref(target) => self.write_any(target, current)?,
        }
        Ok(())
    }

    fn write_arr(&mut self, arr: &[Value], current: usize) -> Result<(), EmitError> {
        self.writer.ch('[');
        if !arr.is_empty() {
            let inner = current + self.indent;
            for (i, item) in arr.iter().enumerate() {
                if i > 0 {
                    self.writer.ch(',');
                }
                self.writer.ch('\n');
                self.writer.pad(inner);
                self.write_any(item, inner)?;
            }
            self.writer.ch('\n');
            self.writer.pad(current);
        }
        self.writer.ch(']');
        Ok(())
    }

    fn write_obj(&mut self, obj: &BTreeMap<String, Value>, current: usize) -> Result<(), EmitError> {
        self.writer.ch('{');
        if !obj.is_empty() {
            let inner = current + self.indent;
            for (i, (key, val)) in obj.iter().enumerate() {
                if i > 0 {
                    self.writer.ch(',');
                }
                self.writer.ch('\n');
                self.writer.pad(inner);
                strings::escape_into(&mut self.writer, key);
                self.writer.ascii(": ");
                self.write_any(val, inner)?;
            }
            self.writer.ch('\n');
            self.writer.pad(current);
        }
        self.writer.ch('}');
        Ok(())
    }
}
