//! Coercions between [`Value`] and Rust primitives.
//!
//! Every operator inspects the tag first. Arithmetic yields `None` unless the
//! value is a number, so a mistagged operand can never masquerade as zero or
//! `NaN`. Concatenation treats a non-string value as contributing nothing.
//!
//! ```
//! use jsonstack::Value;
//!
//! let n = Value::from(2.5);
//! assert_eq!(&n * 2.0, Some(5.0));
//! assert_eq!(1.0 - &n, Some(-1.5));
//! assert_eq!(&Value::from("x") + 1.0, None);
//!
//! let s = Value::from("foo");
//! assert_eq!(&s + "bar", "foobar");
//! assert_eq!("bar" + &s, "barfoo");
//! assert!(n == 2.5 && s == "foo");
//! ```
use alloc::string::String;
use core::ops::{Add, Div, Mul, Sub};

use crate::Value;

macro_rules! numeric_ops {
    ( $( $trait:ident :: $method:ident ),* $(,)? ) => {
        $(
            impl $trait<f64> for &Value {
                type Output = Option<f64>;

                fn $method(self, rhs: f64) -> Option<f64> {
                    self.as_f64().map(|lhs| $trait::$method(lhs, rhs))
                }
            }

            impl $trait<&Value> for f64 {
                type Output = Option<f64>;

                fn $method(self, rhs: &Value) -> Option<f64> {
                    rhs.as_f64().map(|rhs| $trait::$method(self, rhs))
                }
            }
        )*
    };
}

numeric_ops!(Add::add, Sub::sub, Mul::mul, Div::div);

impl Add<&str> for &Value {
    type Output = String;

    fn add(self, rhs: &str) -> String {
        let mut out = String::from(self.as_str().unwrap_or_default());
        out.push_str(rhs);
        out
    }
}

impl Add<&Value> for &str {
    type Output = String;

    fn add(self, rhs: &Value) -> String {
        let mut out = String::from(self);
        out.push_str(rhs.as_str().unwrap_or_default());
        out
    }
}

impl PartialEq<f64> for Value {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &f64) -> bool {
        self.as_f64().is_some_and(|n| n == *other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == Some(other.as_str())
    }
}

impl PartialEq<Value> for f64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for String {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

/// An absent value (`None`) equals a null-tagged value; a present one is
/// compared as usual.
///
/// ```
/// use jsonstack::Value;
///
/// assert!(Value::Null == None::<Value>);
/// assert!(Value::from(1.0) == Some(1.0));
/// assert!(Value::new_object() != None::<Value>);
/// ```
impl<T> PartialEq<Option<T>> for Value
where
    Value: PartialEq<T>,
{
    fn eq(&self, other: &Option<T>) -> bool {
        match other {
            None => self.is_null(),
            Some(v) => self == v,
        }
    }
}
