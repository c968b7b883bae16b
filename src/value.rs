//! Dynamically typed scalar values.
//!
//! [`Value`] is the single currency of the crate: literals extracted from
//! conditions, sampled feature values, arguments passed to the wrapped
//! function, and the labels it returns are all values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A scalar value.
///
/// Equality is structural: `Int(1)` and `Float(1.0)` are different values,
/// and `Bool(true)` is not `Int(1)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

/// A sequence of values aligned to a fixed feature ordering.
pub type Row = Vec<Value>;

impl Value {
    /// Numeric view of an `Int` or `Float`.
    ///
    /// Booleans and strings have no numeric view here; see [`Value::to_feature`]
    /// for the encoding used by models.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Bool(_) | Self::Str(_) => None,
        }
    }

    /// Numeric encoding used as a model feature: numbers as-is, booleans as 0/1.
    pub fn to_feature(&self) -> Option<f64> {
        match self {
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            other => other.as_f64(),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true for `Bool`, `Int` and `Str`, the label kinds that imply classification.
    pub fn is_discrete(&self) -> bool {
        !matches!(self, Self::Float(_))
    }

    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{:?}", v),
            Self::Str(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(v as f64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_views() {
        assert_eq!(Value::Int(3).as_f64(), Some(3.0));
        assert_eq!(Value::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(Value::Bool(true).as_f64(), None);
        assert_eq!(Value::Bool(true).to_feature(), Some(1.0));
        assert_eq!(Value::from("a").to_feature(), None);
    }

    #[test]
    fn discrete_kinds() {
        assert!(Value::Int(1).is_discrete());
        assert!(Value::Bool(false).is_discrete());
        assert!(Value::from("x").is_discrete());
        assert!(!Value::Float(1.0).is_discrete());
    }

    #[test]
    fn structural_equality() {
        assert_ne!(Value::Int(1), Value::Float(1.0));
        assert_ne!(Value::Bool(true), Value::Int(1));
        assert_eq!(Value::from("on"), Value::Str("on".into()));
    }

    #[test]
    fn serde_untagged_roundtrip() {
        let values = vec![Value::Bool(true), Value::Int(-2), Value::Float(0.5), Value::from("s")];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[true,-2,0.5,"s"]"#);
        let restored: Vec<Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, values);
    }
}
