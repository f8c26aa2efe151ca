#![allow(dead_code)]

use std::collections::BTreeMap;

use json_tree::Value;

pub fn arr(items: Vec<Value>) -> Value {
    Value::Array(items)
}

pub fn obj(entries: &[(&str, Value)]) -> Value {
    let mut map = BTreeMap::new();
    for (key, val) in entries {
        map.insert(key.to_string(), val.clone());
    }
    Value::Object(map)
}

/// Remove every space and newline that sits outside a string literal.
/// String contents, including escaped quotes, are copied through verbatim.
pub fn strip_structural(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    let mut in_str = false;
    while let Some(c) = chars.next() {
        if in_str {
            out.push(c);
            if c == '\\' {
                if let Some(esc) = chars.next() {
                    out.push(esc);
                }
            } else if c == '"' {
                in_str = false;
            }
        } else {
            match c {
                '"' => {
                    in_str = true;
                    out.push(c);
                }
                ' ' | '\n' | '\t' | '\r' => {}
                _ => out.push(c),
            }
        }
    }
    out
}
