//! The function being replicated.
//!
//! A [`Target`] pairs a callable with the Rust source text it was written
//! from. The callable receives its inputs as named [`Arguments`] and returns
//! one [`Value`]; the source is only needed when the input space is inferred.

use std::fmt;

use crate::error::BoxError;
use crate::value::Value;

/// Signature of a replicated function.
pub type TargetFn = dyn Fn(&Arguments<'_>) -> Result<Value, BoxError> + Send + Sync;

// =============================================================================
// Arguments
// =============================================================================

/// Errors raised by the typed accessors of [`Arguments`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArgumentError {
    #[error("missing argument '{0}'")]
    Missing(String),
    #[error("argument '{name}' should be {expected}, got {found}")]
    WrongType {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Named arguments for one call of a replicated function.
///
/// Borrows the feature names and one sampled row, so no per-call map is built.
#[derive(Debug, Clone, Copy)]
pub struct Arguments<'a> {
    names: &'a [String],
    values: &'a [Value],
}

impl<'a> Arguments<'a> {
    /// Pair names with values positionally. Extra entries on either side are ignored.
    pub fn new(names: &'a [String], values: &'a [Value]) -> Self {
        Self { names, values }
    }

    pub fn len(&self) -> usize {
        self.names.len().min(self.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Value)> + 'a {
        self.names.iter().map(String::as_str).zip(self.values)
    }

    pub fn get(&self, name: &str) -> Option<&'a Value> {
        self.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    /// The named value, or [`ArgumentError::Missing`].
    pub fn value(&self, name: &str) -> Result<&'a Value, ArgumentError> {
        self.get(name).ok_or_else(|| ArgumentError::Missing(name.to_string()))
    }

    /// Numeric argument; accepts `Int` and `Float`.
    pub fn f64(&self, name: &str) -> Result<f64, ArgumentError> {
        let value = self.value(name)?;
        value.as_f64().ok_or_else(|| wrong_type(name, "a number", value))
    }

    pub fn int(&self, name: &str) -> Result<i64, ArgumentError> {
        let value = self.value(name)?;
        value.as_i64().ok_or_else(|| wrong_type(name, "an int", value))
    }

    pub fn bool(&self, name: &str) -> Result<bool, ArgumentError> {
        let value = self.value(name)?;
        value.as_bool().ok_or_else(|| wrong_type(name, "a bool", value))
    }

    pub fn str(&self, name: &str) -> Result<&'a str, ArgumentError> {
        let value = self.value(name)?;
        value.as_str().ok_or_else(|| wrong_type(name, "a str", value))
    }
}

fn wrong_type(name: &str, expected: &'static str, found: &Value) -> ArgumentError {
    ArgumentError::WrongType {
        name: name.to_string(),
        expected,
        found: found.kind(),
    }
}

// =============================================================================
// Target
// =============================================================================

/// A function to replicate, with its optional source text.
///
/// # Example
///
/// ```
/// use replicant::{Arguments, Target, Value};
///
/// let target = Target::with_source(
///     "fn f(x: f64) -> &'static str { if x > 5.0 { \"high\" } else { \"low\" } }",
///     |args: &Arguments<'_>| {
///         Ok(Value::from(if args.f64("x")? > 5.0 { "high" } else { "low" }))
///     },
/// );
///
/// let names = vec!["x".to_string()];
/// let row = vec![Value::Float(7.0)];
/// assert_eq!(target.call(&Arguments::new(&names, &row)).unwrap(), Value::from("high"));
/// assert!(target.source().is_some());
/// ```
pub struct Target {
    func: Box<TargetFn>,
    source: Option<String>,
}

impl Target {
    /// Wrap a callable without source; its input space must be given explicitly.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&Arguments<'_>) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        Self {
            func: Box::new(func),
            source: None,
        }
    }

    /// Wrap a callable together with the Rust source of the function it implements.
    pub fn with_source<F>(source: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Arguments<'_>) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        Self {
            func: Box::new(func),
            source: Some(source.into()),
        }
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn call(&self, args: &Arguments<'_>) -> Result<Value, BoxError> {
        (self.func)(args)
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Target")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}
