// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading rule trees and property declarations from JSON.
//!
//! In a rule document every object is a selector scope and every scalar is a
//! property value. Object key order is preserved, so document order becomes
//! rule registration order.
//!
//! ```rust
//! use cascade_property::Value;
//! use cascade_style::{RuleNode, rule_tree_from_json};
//!
//! let doc = serde_json::json!({
//!     "ul": { "gap": 2, "li, em": { "weight": 1.5 } }
//! });
//! let tree = rule_tree_from_json(&doc).unwrap();
//! let Some(RuleNode::Selector(ul)) = tree.get("ul") else { unreachable!() };
//! assert_eq!(ul.get("gap"), Some(&RuleNode::Property(Value::Integer(2))));
//! ```

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use cascade_property::{PropertyDeclaration, PropertyDeclarationBuilder, Value};
use serde_json::{Map, Number};

use crate::tree::{RuleNode, RuleTree};

/// What was wrong with a JSON document.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum JsonErrorKind {
    /// A document, scope or declaration that must be an object was not.
    NotAnObject,
    /// A `null` where a value was required.
    NullValue,
    /// An array where a scalar or object was required.
    UnsupportedValue,
    /// A number that fits neither `i64` nor `f64` exactly.
    InvalidNumber,
    /// A declaration field with the wrong type.
    InvalidField,
}

/// Error returned when a JSON document has an unusable shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonError {
    /// `/`-separated keys leading to the offending value; empty for the root.
    pub path: String,
    /// What was wrong with it.
    pub kind: JsonErrorKind,
}

impl JsonError {
    fn new(path: &str, kind: JsonErrorKind) -> Self {
        Self {
            path: String::from(path),
            kind,
        }
    }
}

impl fmt::Display for JsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            JsonErrorKind::NotAnObject => "expected an object",
            JsonErrorKind::NullValue => "null is not a value",
            JsonErrorKind::UnsupportedValue => "arrays are not supported",
            JsonErrorKind::InvalidNumber => "number out of range",
            JsonErrorKind::InvalidField => "declaration field has the wrong type",
        };
        if self.path.is_empty() {
            write!(f, "{what} at document root")
        } else {
            write!(f, "{what} at {:?}", self.path)
        }
    }
}

impl core::error::Error for JsonError {}

/// Converts a JSON object into a [`RuleTree`].
///
/// Objects become nested scopes; booleans, numbers and strings become property
/// values. `null` and arrays are rejected.
pub fn rule_tree_from_json(document: &serde_json::Value) -> Result<RuleTree, JsonError> {
    let map = as_object(document, "")?;
    tree_from_map(map, "")
}

impl TryFrom<&serde_json::Value> for RuleTree<Value> {
    type Error = JsonError;

    fn try_from(document: &serde_json::Value) -> Result<Self, Self::Error> {
        rule_tree_from_json(document)
    }
}

/// Converts a JSON object of property declarations.
///
/// Each entry maps a property name to an object with optional
/// `defaultValue` (a scalar) and `inherited` (a boolean) fields. Other fields
/// are ignored.
///
/// ```rust
/// use cascade_property::Value;
/// use cascade_style::declarations_from_json;
///
/// let doc = serde_json::json!({
///     "color": { "inherited": true },
///     "size": { "defaultValue": 0 }
/// });
/// let declarations = declarations_from_json(&doc).unwrap();
/// assert_eq!(declarations[0].0, "color");
/// assert!(declarations[0].1.inherited());
/// assert_eq!(declarations[1].1.default_value(), Some(&Value::Integer(0)));
/// ```
pub fn declarations_from_json(
    document: &serde_json::Value,
) -> Result<Vec<(String, PropertyDeclaration)>, JsonError> {
    let map = as_object(document, "")?;
    let mut declarations = Vec::with_capacity(map.len());
    for (name, fields) in map {
        let path = join(name, "");
        let fields = as_object(fields, &path)?;

        let mut declaration = PropertyDeclarationBuilder::new();
        if let Some(value) = fields.get("defaultValue") {
            declaration = declaration.default_value(scalar(value, &join("defaultValue", &path))?);
        }
        let inherited = match fields.get("inherited") {
            Some(serde_json::Value::Bool(inherited)) => *inherited,
            Some(_) => {
                return Err(JsonError::new(
                    &join("inherited", &path),
                    JsonErrorKind::InvalidField,
                ));
            }
            None => false,
        };

        declarations.push((name.clone(), declaration.inherited(inherited).build()));
    }
    Ok(declarations)
}

fn tree_from_map(map: &Map<String, serde_json::Value>, path: &str) -> Result<RuleTree, JsonError> {
    let mut tree = RuleTree::new();
    for (key, value) in map {
        let path = join(key, path);
        let node = match value {
            serde_json::Value::Object(scope) => RuleNode::Selector(tree_from_map(scope, &path)?),
            _ => RuleNode::Property(scalar(value, &path)?),
        };
        tree.insert(key.as_str(), node);
    }
    Ok(tree)
}

fn scalar(value: &serde_json::Value, path: &str) -> Result<Value, JsonError> {
    match value {
        serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_json::Value::Number(n) => number(n, path),
        serde_json::Value::String(s) => Ok(Value::String(s.clone())),
        serde_json::Value::Null => Err(JsonError::new(path, JsonErrorKind::NullValue)),
        serde_json::Value::Array(_) => Err(JsonError::new(path, JsonErrorKind::UnsupportedValue)),
        serde_json::Value::Object(_) => Err(JsonError::new(path, JsonErrorKind::InvalidField)),
    }
}

fn number(n: &Number, path: &str) -> Result<Value, JsonError> {
    if let Some(i) = n.as_i64() {
        return Ok(Value::Integer(i));
    }
    match n.as_f64() {
        Some(f) if n.is_f64() && f.is_finite() => Ok(Value::Float(f)),
        _ => Err(JsonError::new(path, JsonErrorKind::InvalidNumber)),
    }
}

fn as_object<'a>(
    value: &'a serde_json::Value,
    path: &str,
) -> Result<&'a Map<String, serde_json::Value>, JsonError> {
    value
        .as_object()
        .ok_or_else(|| JsonError::new(path, JsonErrorKind::NotAnObject))
}

fn join(key: &str, parent: &str) -> String {
    if parent.is_empty() {
        String::from(key)
    } else {
        format!("{parent}/{key}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use serde_json::json;

    #[test]
    fn keeps_document_order() {
        let tree = rule_tree_from_json(&json!({ "b": 1, "a": { "c": "x" }, "d": false })).unwrap();
        let keys: Vec<_> = tree.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, ["b", "a", "d"]);
        assert_eq!(tree.get("b"), Some(&RuleNode::Property(Value::Integer(1))));
    }

    #[test]
    fn numbers_keep_their_kind() {
        let tree = rule_tree_from_json(&json!({ "i": -3, "f": 2.5 })).unwrap();
        assert_eq!(tree.get("i"), Some(&RuleNode::Property(Value::Integer(-3))));
        assert_eq!(tree.get("f"), Some(&RuleNode::Property(Value::Float(2.5))));
    }

    #[test]
    fn oversized_integer_is_rejected() {
        let err = rule_tree_from_json(&json!({ "big": u64::MAX })).unwrap_err();
        assert_eq!(err.kind, JsonErrorKind::InvalidNumber);
    }

    #[test]
    fn null_leaf_reports_path() {
        let err = rule_tree_from_json(&json!({ "ul": { "li": { "x": null } } })).unwrap_err();
        assert_eq!(err, JsonError::new("ul/li/x", JsonErrorKind::NullValue));
        assert_eq!(err.to_string(), "null is not a value at \"ul/li/x\"");
    }

    #[test]
    fn array_is_rejected() {
        let err = RuleTree::<Value>::try_from(&json!({ "p": [1, 2] })).unwrap_err();
        assert_eq!(err.kind, JsonErrorKind::UnsupportedValue);
    }

    #[test]
    fn root_must_be_object() {
        let err = rule_tree_from_json(&json!(3)).unwrap_err();
        assert_eq!(err.kind, JsonErrorKind::NotAnObject);
        assert_eq!(err.to_string(), "expected an object at document root");
    }

    #[test]
    fn declaration_fields() {
        let declarations = declarations_from_json(&json!({
            "a": {},
            "b": { "defaultValue": "x", "inherited": true, "note": [1] }
        }))
        .unwrap();
        assert_eq!(declarations.len(), 2);
        assert!(!declarations[0].1.inherited());
        assert!(!declarations[0].1.has_default());
        assert_eq!(declarations[1].1.default_value(), Some(&Value::from("x")));
        assert!(declarations[1].1.inherited());
    }

    #[test]
    fn mistyped_declaration_fields() {
        let err = declarations_from_json(&json!({ "a": { "inherited": "yes" } })).unwrap_err();
        assert_eq!(err, JsonError::new("a/inherited", JsonErrorKind::InvalidField));

        let err = declarations_from_json(&json!({ "a": { "defaultValue": {} } })).unwrap_err();
        assert_eq!(err.kind, JsonErrorKind::InvalidField);

        let err = declarations_from_json(&json!({ "a": true })).unwrap_err();
        assert_eq!(err, JsonError::new("a", JsonErrorKind::NotAnObject));
    }
}
