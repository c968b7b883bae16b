//! Input spaces: ordered mappings from parameter name to [`Bound`].
//!
//! Insertion order is the feature order used by the sampler, the trainer and
//! the learned function, so [`InputSpace`] keeps entries in a vector rather
//! than a hash map.

use crate::bounds::{Bound, CategoricalBound, NumericBound};
use crate::config::ConfigError;
use crate::value::Value;

/// Ordered mapping from parameter name to bound.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSpace {
    entries: Vec<(String, Bound)>,
}

impl InputSpace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a bound.
    ///
    /// Replacing keeps the original position of the name.
    pub fn insert(&mut self, name: impl Into<String>, bound: impl Into<Bound>) {
        let name = name.into();
        let bound = bound.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = bound,
            None => self.entries.push((name, bound)),
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, bound: impl Into<Bound>) -> Self {
        self.insert(name, bound);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Bound> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, b)| b)
    }

    /// Parameter names in feature order.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(n, _)| n.clone()).collect()
    }

    pub fn bounds(&self) -> impl Iterator<Item = &Bound> {
        self.entries.iter().map(|(_, b)| b)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Bound)> {
        self.entries.iter().map(|(n, b)| (n.as_str(), b))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>, B: Into<Bound>> FromIterator<(S, B)> for InputSpace {
    fn from_iter<I: IntoIterator<Item = (S, B)>>(iter: I) -> Self {
        let mut space = Self::new();
        for (name, bound) in iter {
            space.insert(name, bound);
        }
        space
    }
}

// =============================================================================
// Explicit input-space values
// =============================================================================

/// A loosely typed input-space entry, as given in configuration.
///
/// Converted to a [`Bound`] by [`input_space_to_bounds`]:
/// - `Bound` is used as is
/// - `Tuple` of exactly two numbers becomes a [`NumericBound`]
/// - `List` becomes a [`CategoricalBound`]
/// - anything else is rejected
#[derive(Debug, Clone, PartialEq)]
pub enum SpaceValue {
    Bound(Bound),
    Tuple(Vec<Value>),
    List(Vec<Value>),
    Scalar(Value),
}

impl SpaceValue {
    fn describe(&self) -> String {
        fn join(values: &[Value]) -> String {
            values.iter().map(Value::to_string).collect::<Vec<_>>().join(", ")
        }
        match self {
            Self::Bound(b) => format!("{:?}", b),
            Self::Tuple(values) => format!("({})", join(values)),
            Self::List(values) => format!("[{}]", join(values)),
            Self::Scalar(v) => v.to_string(),
        }
    }

    /// Convert to a bound; `key` names the entry in errors.
    pub fn to_bound(&self, key: &str) -> Result<Bound, ConfigError> {
        match self {
            Self::Bound(b) => Ok(b.clone()),
            Self::Tuple(values) => match values.as_slice() {
                [lo, hi] => match (lo.as_f64(), hi.as_f64()) {
                    (Some(lo), Some(hi)) => Ok(Bound::Numeric(NumericBound::new(lo, hi))),
                    _ => Err(self.invalid(key)),
                },
                _ => Err(self.invalid(key)),
            },
            Self::List(values) => CategoricalBound::new(values.clone())
                .map(Bound::Categorical)
                .map_err(|_| ConfigError::EmptyCategorical { key: key.to_string() }),
            Self::Scalar(_) => Err(self.invalid(key)),
        }
    }

    fn invalid(&self, key: &str) -> ConfigError {
        ConfigError::InvalidInputSpace {
            key: key.to_string(),
            value: self.describe(),
        }
    }
}

impl From<Bound> for SpaceValue {
    fn from(b: Bound) -> Self {
        Self::Bound(b)
    }
}

impl From<NumericBound> for SpaceValue {
    fn from(b: NumericBound) -> Self {
        Self::Bound(b.into())
    }
}

impl From<CategoricalBound> for SpaceValue {
    fn from(b: CategoricalBound) -> Self {
        Self::Bound(b.into())
    }
}

impl<A: Into<Value>, B: Into<Value>> From<(A, B)> for SpaceValue {
    fn from((a, b): (A, B)) -> Self {
        Self::Tuple(vec![a.into(), b.into()])
    }
}

impl<V: Into<Value>> From<Vec<V>> for SpaceValue {
    fn from(values: Vec<V>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<Value> for SpaceValue {
    fn from(v: Value) -> Self {
        Self::Scalar(v)
    }
}

/// Convert explicit input-space entries into an [`InputSpace`], keeping order.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidInputSpace`] naming the first entry that cannot
/// be converted, or [`ConfigError::EmptyCategorical`] for an empty list.
pub fn input_space_to_bounds(entries: &[(String, SpaceValue)]) -> Result<InputSpace, ConfigError> {
    let mut space = InputSpace::new();
    for (key, value) in entries {
        space.insert(key.clone(), value.to_bound(key)?);
    }
    Ok(space)
}
