//! [`Value`] - the tagged-variant JSON document tree.

use std::collections::BTreeMap;
use std::rc::Rc;

/// A node of a JSON document tree.
///
/// Arrays keep their elements in insertion order. Objects do not: members
/// live in a `BTreeMap`, so they are kept - and serialized - in ascending
/// lexicographic key order no matter the order they were inserted in. Two
/// objects built from the same pairs in different orders are the same value.
///
/// [`Value::Ref`] shares a subtree owned elsewhere (another branch of the
/// same tree, or an external structure) without copying it. It is invisible
/// in serialized output and in comparisons; both see the target. Because a
/// target is immutable once wrapped in its `Rc`, a `Ref` cannot point back
/// into its own ancestry, so traversal always terminates.
#[derive(Debug, Clone)]
pub enum Value {
    /// JSON null.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed 64-bit integer.
    Int64(i64),
    /// Floating-point number. Must be finite to serialize; the emitters
    /// reject NaN and infinities with a typed error.
    Double(f64),
    /// String.
    Str(String),
    /// Array of values, insertion-ordered.
    Array(Vec<Value>),
    /// Object, keyed in ascending lexicographic order.
    Object(BTreeMap<String, Value>),
    /// Shared handle to a value owned elsewhere.
    Ref(Rc<Value>),
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl Value {
    /// Follow `Ref` links to the underlying node.
    pub fn follow(&self) -> &Value {
        let mut v = self;
        while let Value::Ref(target) = v {
            v = target.as_ref();
        }
        v
    }

    pub fn is_null(&self) -> bool {
        matches!(self.follow(), Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.follow() {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self.follow() {
            Value::Int64(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self.follow() {
            Value::Double(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self.follow() {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self.follow() {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self.follow() {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

/// Ref-transparent structural equality: a `Ref` compares as its target, so an
/// aliased subtree equals an inline copy of it.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self.follow(), other.follow()) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int64(a), Value::Int64(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int64(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int64(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(u: u32) -> Self {
        Value::Int64(i64::from(u))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Double(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(arr: Vec<Value>) -> Self {
        Value::Array(arr)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(obj: BTreeMap<String, Value>) -> Self {
        Value::Object(obj)
    }
}

impl From<Rc<Value>> for Value {
    fn from(target: Rc<Value>) -> Self {
        Value::Ref(target)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int64(i)
                } else {
                    // u64 beyond i64::MAX, or a float
                    Value::Double(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => Value::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int64(i) => serde_json::json!(i),
            Value::Double(f) => serde_json::json!(f),
            Value::Str(s) => serde_json::Value::String(s),
            Value::Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Object(obj) => serde_json::Value::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
            Value::Ref(target) => serde_json::Value::from(target.as_ref().clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_null() {
        assert!(Value::default().is_null());
    }

    #[test]
    fn object_discards_insertion_order() {
        let mut a = BTreeMap::new();
        a.insert("b".to_string(), Value::Int64(1));
        a.insert("a".to_string(), Value::Int64(2));

        let mut b = BTreeMap::new();
        b.insert("a".to_string(), Value::Int64(2));
        b.insert("b".to_string(), Value::Int64(1));

        assert_eq!(Value::Object(a.clone()), Value::Object(b));
        let keys: Vec<&str> = a.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn ref_is_transparent_in_equality() {
        let target = Rc::new(Value::from(vec![Value::Int64(1), Value::Bool(true)]));
        let aliased = Value::Ref(target.clone());
        let inline = Value::from(vec![Value::Int64(1), Value::Bool(true)]);
        assert_eq!(aliased, inline);
        assert_eq!(inline, aliased);

        let chained = Value::Ref(Rc::new(Value::Ref(target)));
        assert_eq!(chained, inline);
    }

    #[test]
    fn accessors_see_through_refs() {
        let v = Value::Ref(Rc::new(Value::Int64(7)));
        assert_eq!(v.as_i64(), Some(7));
        assert_eq!(v.as_bool(), None);
        assert_eq!(v.follow(), &Value::Int64(7));
    }

    #[test]
    fn from_serde_discards_member_order() {
        let parsed: serde_json::Value = serde_json::from_str(r#"{"b":1,"a":2}"#).unwrap();
        let v = Value::from(parsed);
        let obj = v.as_object().unwrap();
        let keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn from_serde_narrows_numbers() {
        let parsed: serde_json::Value = serde_json::from_str("[1,1.5,18446744073709551615]").unwrap();
        let v = Value::from(parsed);
        let arr = v.as_array().unwrap();
        assert_eq!(arr[0], Value::Int64(1));
        assert_eq!(arr[1], Value::Double(1.5));
        // u64 beyond i64::MAX narrows to a double
        assert_eq!(arr[2], Value::Double(18446744073709551615.0));
    }

    #[test]
    fn into_serde_follows_refs() {
        let target = Rc::new(Value::Int64(42));
        let v = Value::from(vec![Value::Ref(target.clone()), Value::Ref(target)]);
        let json = serde_json::Value::from(v);
        assert_eq!(json, serde_json::json!([42, 42]));
    }
}
