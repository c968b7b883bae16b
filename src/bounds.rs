//! Admissible value ranges for input parameters.
//!
//! A [`Bound`] is either a numeric interval or a categorical set. Both variants
//! can draw random samples and report their two boundary values, which the
//! sampler combines into corner rows.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Lower endpoint used when a numeric bound is built without one.
pub const DEFAULT_LOWER: f64 = 0.0;

/// Width used to derive a missing numeric endpoint from the present one.
pub const DEFAULT_SPAN: f64 = 10.0;

/// Errors raised when constructing a bound.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoundError {
    #[error("categorical bound requires at least one value")]
    EmptyCategorical,
}

// =============================================================================
// NumericBound
// =============================================================================

/// Closed numeric interval `[lower, upper]`.
///
/// `lower <= upper` is assumed but not enforced; sampling a reversed interval
/// draws from `[upper, lower]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericBound {
    lower: f64,
    upper: f64,
}

impl Default for NumericBound {
    fn default() -> Self {
        Self::from_partial(None, None)
    }
}

impl NumericBound {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Build from optional endpoints.
    ///
    /// A missing `lower` defaults to [`DEFAULT_LOWER`]; a missing `upper`
    /// defaults to `lower + DEFAULT_SPAN`.
    pub fn from_partial(lower: Option<f64>, upper: Option<f64>) -> Self {
        let lower = lower.unwrap_or(DEFAULT_LOWER);
        let upper = upper.unwrap_or(lower + DEFAULT_SPAN);
        Self { lower, upper }
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Draw one value uniformly from the interval.
    pub fn sample_one<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u = rng.r#gen::<f64>();
        // Interpolated; upper - lower can overflow for finite ends.
        let value = self.lower * (1.0 - u) + self.upper * u;
        value.clamp(self.lower.min(self.upper), self.lower.max(self.upper))
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

// =============================================================================
// CategoricalBound
// =============================================================================

/// Non-empty ordered set of admissible values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Value>", into = "Vec<Value>")]
pub struct CategoricalBound {
    values: Vec<Value>,
}

impl CategoricalBound {
    /// # Errors
    ///
    /// Returns [`BoundError::EmptyCategorical`] if `values` is empty.
    pub fn new(values: Vec<Value>) -> Result<Self, BoundError> {
        if values.is_empty() {
            return Err(BoundError::EmptyCategorical);
        }
        Ok(Self { values })
    }

    /// The `{true, false}` set used for boolean parameters.
    pub fn boolean() -> Self {
        Self {
            values: vec![Value::Bool(true), Value::Bool(false)],
        }
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.values.contains(value)
    }

    pub fn sample_one<R: Rng + ?Sized>(&self, rng: &mut R) -> Value {
        // Non-empty by construction.
        self.values
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| self.values[0].clone())
    }

    fn first(&self) -> &Value {
        &self.values[0]
    }

    fn last(&self) -> &Value {
        &self.values[self.values.len() - 1]
    }
}

impl TryFrom<Vec<Value>> for CategoricalBound {
    type Error = BoundError;

    fn try_from(values: Vec<Value>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<CategoricalBound> for Vec<Value> {
    fn from(bound: CategoricalBound) -> Self {
        bound.values
    }
}

// =============================================================================
// Bound
// =============================================================================

/// Admissible values for one input parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bound {
    Numeric(NumericBound),
    Categorical(CategoricalBound),
}

impl Bound {
    /// Shorthand for a numeric bound.
    pub fn numeric(lower: f64, upper: f64) -> Self {
        Self::Numeric(NumericBound::new(lower, upper))
    }

    /// Shorthand for a categorical bound.
    ///
    /// # Errors
    ///
    /// Returns [`BoundError::EmptyCategorical`] if no values are given.
    pub fn categorical<V: Into<Value>>(
        values: impl IntoIterator<Item = V>,
    ) -> Result<Self, BoundError> {
        let values = values.into_iter().map(Into::into).collect();
        CategoricalBound::new(values).map(Self::Categorical)
    }

    pub fn sample_one<R: Rng + ?Sized>(&self, rng: &mut R) -> Value {
        match self {
            Self::Numeric(b) => Value::Float(b.sample_one(rng)),
            Self::Categorical(b) => b.sample_one(rng),
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<Value> {
        (0..n).map(|_| self.sample_one(rng)).collect()
    }

    /// The two extreme values: `(lower, upper)` or `(first, last)`.
    pub fn boundary_values(&self) -> (Value, Value) {
        match self {
            Self::Numeric(b) => (Value::Float(b.lower), Value::Float(b.upper)),
            Self::Categorical(b) => (b.first().clone(), b.last().clone()),
        }
    }

    pub fn as_numeric(&self) -> Option<&NumericBound> {
        match self {
            Self::Numeric(b) => Some(b),
            Self::Categorical(_) => None,
        }
    }

    pub fn as_categorical(&self) -> Option<&CategoricalBound> {
        match self {
            Self::Categorical(b) => Some(b),
            Self::Numeric(_) => None,
        }
    }
}

impl From<NumericBound> for Bound {
    fn from(b: NumericBound) -> Self {
        Self::Numeric(b)
    }
}

impl From<CategoricalBound> for Bound {
    fn from(b: CategoricalBound) -> Self {
        Self::Categorical(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn rng() -> Xoshiro256PlusPlus {
        Xoshiro256PlusPlus::seed_from_u64(7)
    }

    #[test]
    fn numeric_defaults() {
        let bound = NumericBound::default();
        assert_eq!((bound.lower(), bound.upper()), (0.0, 10.0));

        let bound = NumericBound::from_partial(Some(4.0), None);
        assert_eq!((bound.lower(), bound.upper()), (4.0, 14.0));

        let bound = NumericBound::from_partial(None, Some(3.0));
        assert_eq!((bound.lower(), bound.upper()), (0.0, 3.0));
    }

    #[test]
    fn numeric_sampling_stays_in_range() {
        let bound = NumericBound::new(5.0, 7.0);
        let mut rng = rng();
        for _ in 0..1000 {
            assert!(bound.contains(bound.sample_one(&mut rng)));
        }
    }

    #[test]
    fn wide_numeric_interval_covers_both_halves() {
        let bound = NumericBound::new(-1e308, 1e308);
        let mut rng = rng();
        let samples: Vec<f64> = (0..200).map(|_| bound.sample_one(&mut rng)).collect();
        assert!(samples.iter().all(|v| v.is_finite() && bound.contains(*v)));
        assert!(samples.iter().any(|&v| v < 0.0));
        assert!(samples.iter().any(|&v| v > 0.0));
    }

    #[test]
    fn reversed_interval_samples_between_ends() {
        let bound = NumericBound::new(99.0, 1.0);
        let mut rng = rng();
        for _ in 0..100 {
            let v = bound.sample_one(&mut rng);
            assert!((1.0..=99.0).contains(&v));
        }
    }

    #[test]
    fn degenerate_numeric_interval() {
        let bound = NumericBound::new(2.0, 2.0);
        assert_eq!(bound.sample_one(&mut rng()), 2.0);
    }

    #[test]
    fn categorical_rejects_empty() {
        assert_eq!(CategoricalBound::new(vec![]), Err(BoundError::EmptyCategorical));
        assert!(Bound::categorical(Vec::<Value>::new()).is_err());
    }

    #[test]
    fn categorical_sampling_returns_members() {
        let bound = Bound::categorical(["a", "b", "c"]).unwrap();
        let mut rng = rng();
        let samples = bound.sample(50, &mut rng);
        assert_eq!(samples.len(), 50);
        let cat = bound.as_categorical().unwrap();
        assert!(samples.iter().all(|v| cat.contains(v)));
    }

    #[test]
    fn boundary_values_per_variant() {
        assert_eq!(
            Bound::numeric(1.0, 3.0).boundary_values(),
            (Value::Float(1.0), Value::Float(3.0))
        );
        assert_eq!(
            Bound::categorical(["grumpy", "meh", "happy"]).unwrap().boundary_values(),
            (Value::from("grumpy"), Value::from("happy"))
        );
        assert_eq!(
            CategoricalBound::boolean().values(),
            &[Value::Bool(true), Value::Bool(false)]
        );
    }

    #[test]
    fn categorical_deserialize_rejects_empty() {
        let err = serde_json::from_str::<CategoricalBound>("[]");
        assert!(err.is_err());
        let bound: Bound = serde_json::from_str(r#"{"numeric":{"lower":1.0,"upper":2.0}}"#).unwrap();
        assert_eq!(bound, Bound::numeric(1.0, 2.0));
    }
}
