//! JSON value types.
//!
//! This module defines the [`Value`] enum built by the parser, its
//! tag-checked mutators, and the canonical text serialization used as the
//! crate's only wire format.
//!
//! Two behaviors are deliberately narrower than RFC 8259 and are part of the
//! contract:
//!
//! - Object equality compares key sets only, never the values stored under
//!   those keys.
//! - Strings are written without escaping, mirroring the parser, which does
//!   not interpret escape sequences either.
use alloc::{collections::BTreeMap, string::String, vec::Vec};

use crate::error::{ValueError, ValueKind};

pub type Map = BTreeMap<String, Value>;
pub type Array = Vec<Value>;

static NULL: Value = Value::Null;

/// A dynamically typed JSON value.
///
/// A `Value` carries exactly one representation at a time:
///
/// - Null
/// - Boolean
/// - Number (always an `f64`)
/// - String
/// - Array
/// - Object
///
/// Composite values own their children; there is no sharing between trees.
///
/// # Nesting depth
///
/// Dropping a value is iterative and works at any depth. `Clone`, `Debug`,
/// `Display`, equality and serde serialization recurse once per level, so
/// on trees nested deeper than a few thousand levels they can exhaust the
/// thread's stack. Cap the depth with `ParserOptions::max_depth` when a
/// parsed tree will go through any of them.
///
/// # Examples
///
/// ```
/// use jsonstack::Value;
///
/// let mut v = Value::new_object();
/// v.add_child("key", Value::from("value")).unwrap();
/// assert_eq!(v.to_string(), r#"{"key":"value"}"#);
/// ```
// Enable serde support for tests and when the optional `serde` feature is
// activated by downstream crates.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug)]
pub enum Value {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Array),
    Object(Map),
}

/// A fresh value is an empty object, the same value auto-vivification
/// inserts.
impl Default for Value {
    fn default() -> Self {
        Self::Object(Map::new())
    }
}

/// Tears the tree down with a heap work-list, so dropping a value never
/// recurses once per nesting level.
impl Drop for Value {
    fn drop(&mut self) {
        let mut pending: Vec<Value> = match self {
            Self::Array(arr) if !arr.is_empty() => core::mem::take(arr),
            Self::Object(map) if !map.is_empty() => core::mem::take(map).into_values().collect(),
            _ => return,
        };
        while let Some(mut child) = pending.pop() {
            match &mut child {
                Self::Array(arr) => pending.append(arr),
                Self::Object(map) => pending.extend(core::mem::take(map).into_values()),
                _ => {}
            }
            // `child` is now a leaf or an empty container.
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(v: BTreeMap<String, Value>) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Creates an empty object.
    #[must_use]
    pub fn new_object() -> Self {
        Self::Object(Map::new())
    }

    /// Creates an empty array.
    #[must_use]
    pub fn new_array() -> Self {
        Self::Array(Array::new())
    }

    #[must_use]
    pub fn new_number(n: f64) -> Self {
        Self::Number(n)
    }

    #[must_use]
    pub fn new_string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    #[must_use]
    pub fn new_bool(b: bool) -> Self {
        Self::Boolean(b)
    }

    #[must_use]
    pub fn new_null() -> Self {
        Self::Null
    }

    /// Returns the tag of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
        }
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonstack::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Boolean(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonstack::Value;
    ///
    /// assert!(Value::default().is_object());
    /// assert!(!Value::Null.is_object());
    /// ```
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(m) => Some(m),
            _ => None,
        }
    }

    /// Re-tags a fresh value as an empty array.
    ///
    /// Only an empty object (the default value) or an already empty array can
    /// be converted; anything else would silently discard data.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Type`] and leaves the value untouched when it
    /// holds any other data.
    pub fn to_array(&mut self) -> Result<(), ValueError> {
        match self {
            Self::Object(map) if map.is_empty() => {
                *self = Self::new_array();
                Ok(())
            }
            Self::Array(arr) if arr.is_empty() => Ok(()),
            other => Err(ValueError::Type {
                found: other.kind(),
                target: ValueKind::Array,
            }),
        }
    }

    /// Re-tags the value as [`Null`](Value::Null), dropping its contents.
    pub fn to_null(&mut self) {
        *self = Self::Null;
    }

    /// Returns `true` if this is an object holding `key`.
    #[must_use]
    pub fn has_child(&self, key: &str) -> bool {
        matches!(self, Self::Object(map) if map.contains_key(key))
    }

    /// Inserts `key → child` into an object.
    ///
    /// # Errors
    ///
    /// [`ValueError::InvalidState`] if the value is not an object, and
    /// [`ValueError::DuplicateKey`] if `key` is already present.
    pub fn add_child(&mut self, key: impl Into<String>, child: Value) -> Result<(), ValueError> {
        let found = self.kind();
        let Self::Object(map) = self else {
            return Err(ValueError::InvalidState {
                operation: "add_child",
                expected: ValueKind::Object,
                found,
            });
        };
        match map.entry(key.into()) {
            alloc::collections::btree_map::Entry::Occupied(occ) => {
                Err(ValueError::DuplicateKey(occ.key().clone()))
            }
            alloc::collections::btree_map::Entry::Vacant(vac) => {
                vac.insert(child);
                Ok(())
            }
        }
    }

    /// Appends `child` to an array.
    ///
    /// # Errors
    ///
    /// [`ValueError::InvalidState`] if the value is not an array.
    pub fn append(&mut self, child: Value) -> Result<(), ValueError> {
        let found = self.kind();
        let Self::Array(arr) = self else {
            return Err(ValueError::InvalidState {
                operation: "append",
                expected: ValueKind::Array,
                found,
            });
        };
        arr.push(child);
        Ok(())
    }

    /// Looks up `key` without modifying the value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        match self {
            Self::Object(map) => map.get_mut(key),
            _ => None,
        }
    }

    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|arr| arr.get(index))
    }

    pub fn get_index_mut(&mut self, index: usize) -> Option<&mut Value> {
        match self {
            Self::Array(arr) => arr.get_mut(index),
            _ => None,
        }
    }

    /// Returns the child under `key`, inserting a fresh empty object when the
    /// key is absent.
    ///
    /// This is the lenient "build the tree as you navigate" accessor; use
    /// [`Value::get`] for lookups that must not mutate.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonstack::Value;
    ///
    /// let mut v = Value::new_object();
    /// v.vivify("a").unwrap().set("b", Value::from(1.0)).unwrap();
    /// assert_eq!(v.to_string(), r#"{"a":{"b":1}}"#);
    /// ```
    ///
    /// # Errors
    ///
    /// [`ValueError::InvalidState`] if the value is not an object.
    pub fn vivify(&mut self, key: &str) -> Result<&mut Value, ValueError> {
        let found = self.kind();
        let Self::Object(map) = self else {
            return Err(ValueError::InvalidState {
                operation: "vivify",
                expected: ValueKind::Object,
                found,
            });
        };
        Ok(map.entry(key.into()).or_default())
    }

    /// Returns the element at `index`, appending one fresh empty object when
    /// `index` is past the end. The appended element is what gets returned,
    /// whatever `index` was, so no gaps are ever created.
    ///
    /// # Errors
    ///
    /// [`ValueError::InvalidState`] if the value is not an array.
    pub fn vivify_index(&mut self, index: usize) -> Result<&mut Value, ValueError> {
        let found = self.kind();
        let Self::Array(arr) = self else {
            return Err(ValueError::InvalidState {
                operation: "vivify_index",
                expected: ValueKind::Array,
                found,
            });
        };
        if index >= arr.len() {
            arr.push(Value::default());
            let last = arr.len() - 1;
            return Ok(&mut arr[last]);
        }
        Ok(&mut arr[index])
    }

    /// Inserts or replaces `key` in an object, returning the replaced child.
    ///
    /// # Errors
    ///
    /// [`ValueError::InvalidState`] if the value is not an object.
    pub fn set(&mut self, key: impl Into<String>, child: Value) -> Result<Option<Value>, ValueError> {
        let found = self.kind();
        let Self::Object(map) = self else {
            return Err(ValueError::InvalidState {
                operation: "set",
                expected: ValueKind::Object,
                found,
            });
        };
        Ok(map.insert(key.into(), child))
    }

    /// Replaces the element at `index`, or appends `child` when `index` is
    /// past the end.
    ///
    /// # Errors
    ///
    /// [`ValueError::InvalidState`] if the value is not an array.
    pub fn set_index(&mut self, index: usize, child: Value) -> Result<(), ValueError> {
        let found = self.kind();
        let Self::Array(arr) = self else {
            return Err(ValueError::InvalidState {
                operation: "set_index",
                expected: ValueKind::Array,
                found,
            });
        };
        match arr.get_mut(index) {
            Some(slot) => *slot = child,
            None => arr.push(child),
        }
        Ok(())
    }

    /// Serializes the value in the canonical text form.
    ///
    /// Same output as the [`Display`](core::fmt::Display) impl.
    #[must_use]
    pub fn to_canonical_string(&self) -> String {
        alloc::string::ToString::to_string(self)
    }
}

impl PartialEq for Value {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            // Key presence only: values under matching keys are not compared.
            (Self::Object(a), Self::Object(b)) => {
                a.len() == b.len() && a.keys().all(|k| b.contains_key(k))
            }
            _ => false,
        }
    }
}

impl core::ops::Index<&str> for Value {
    type Output = Value;

    /// Missing keys and non-objects read as `null`.
    fn index(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&NULL)
    }
}

impl core::ops::IndexMut<&str> for Value {
    /// Auto-vivifying access, see [`Value::vivify`].
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object.
    fn index_mut(&mut self, key: &str) -> &mut Value {
        match self.vivify(key) {
            Ok(child) => child,
            Err(err) => panic!("{err}"),
        }
    }
}

impl core::ops::Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        self.get_index(index).unwrap_or(&NULL)
    }
}

impl core::ops::IndexMut<usize> for Value {
    /// Auto-vivifying access, see [`Value::vivify_index`].
    ///
    /// # Panics
    ///
    /// Panics if the value is not an array.
    fn index_mut(&mut self, index: usize) -> &mut Value {
        match self.vivify_index(index) {
            Ok(child) => child,
            Err(err) => panic!("{err}"),
        }
    }
}

const SEPARATOR: &str = ", ";

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Number(n) => write!(f, "{n}"),
            // No escaping: the parser reads strings verbatim up to the next
            // quote, so this is the exact inverse for quote-free text.
            Value::String(s) => write!(f, "\"{s}\""),
            Value::Array(arr) => {
                f.write_str("[")?;
                let mut first = true;
                for v in arr {
                    if !first {
                        f.write_str(SEPARATOR)?;
                    }
                    first = false;
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
            Value::Object(map) => {
                f.write_str("{")?;
                let mut first = true;
                for (k, v) in map {
                    if !first {
                        f.write_str(SEPARATOR)?;
                    }
                    first = false;
                    write!(f, "\"{k}\":{v}")?;
                }
                f.write_str("}")
            }
        }
    }
}
