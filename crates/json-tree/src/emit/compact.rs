//! `CompactEmitter` - canonical JSON text with zero structural whitespace.

use std::collections::BTreeMap;

use json_tree_buffers::Writer;
use json_tree_util::{num, strings};

use crate::{EmitError, Value};

/// Renders a [`Value`] tree as canonical JSON: no structural whitespace, no
/// trailing commas, object members in ascending key order.
///
/// Output accumulates in the owned [`Writer`]; [`encode`](Self::encode)
/// drains it. The `write_*` methods are the streaming surface for callers
/// that flush the writer themselves.
pub struct CompactEmitter {
    pub writer: Writer,
}

impl Default for CompactEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl CompactEmitter {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Serialize a whole document and drain it from the writer.
    pub fn encode(&mut self, value: &Value) -> Result<String, EmitError> {
        self.writer.reset();
        self.write_any(value)?;
        Ok(self.writer.flush())
    }

    /// Append the rendering of `value` to the writer.
    pub fn write_any(&mut self, value: &Value) -> Result<(), EmitError> {
        match value {
            Value::Null => self.write_null(),
            Value::Bool(b) => self.write_boolean(*b),
            Value::Int64(i) => self.write_integer(*i),
            Value::Double(f) => self.write_double(*f)?,
            Value::Str(s) => self.write_str(s),
            Value::Array(arr) => self.write_arr(arr)?,
            Value::Object(obj) => self.write_obj(obj)?,
            Value::Ref(target) => self.write_any(target)?,
        }
        Ok(())
    }

    pub fn write_null(&mut self) {
        self.writer.ascii("null");
    }

    pub fn write_boolean(&mut self, b: bool) {
        self.writer.ascii(if b { "true" } else { "false" });
    }

    pub fn write_integer(&mut self, int: i64) {
        self.writer.ascii(&int.to_string());
    }

    pub fn write_double(&mut self, float: f64) -> Result<(), EmitError> {
        if !float.is_finite() {
            return Err(EmitError::NonFiniteNumber);
        }
        self.writer.ascii(&num::format_f64(float));
        Ok(())
    }

    /// The escaper supplies the surrounding quotes; nothing is added here.
    pub fn write_str(&mut self, s: &str) {
        strings::escape_into(&mut self.writer, s);
    }

    fn write_arr(&mut self, arr: &[Value]) -> Result<(), EmitError> {
        self.writer.ch('[');
        let last = arr.len().saturating_sub(1);
        for (i, item) in arr.iter().enumerate() {
            self.write_any(item)?;
            if i < last {
                self.writer.ch(',');
            }
        }
        self.writer.ch(']');
        Ok(())
    }

    fn write_obj(&mut self, obj: &BTreeMap<String, Value>) -> Result<(), EmitError> {
        self.writer.ch('{');
        let last = obj.len().saturating_sub(1);
        for (i, (key, val)) in obj.iter().enumerate() {
            self.write_str(key);
            self.writer.ch(':');
            self.write_any(val)?;
            if i < last {
                self.writer.ch(',');
            }
        }
        self.writer.ch('}');
        Ok(())
    }
}
