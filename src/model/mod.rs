//! Model capability and the default decision-tree backend.
//!
//! # Overview
//!
//! - [`Model`]: anything that can `fit` rows to labels and `predict` labels
//! - [`ModelFactory`]: builds a model for a resolved [`TaskKind`] from named
//!   [`ModelOptions`]; implemented for closures
//! - [`tree`]: CART decision trees, the default backend
//!
//! # Example
//!
//! ```
//! use replicant::model::{Model, ModelOptions, TaskKind, ModelFactory, DecisionTreeFactory};
//! use replicant::Value;
//!
//! let options = ModelOptions::new().with("max_depth", 3);
//! let mut model = DecisionTreeFactory.create(TaskKind::Classification, &options).unwrap();
//!
//! let rows: Vec<Vec<Value>> = (0..10).map(|i| vec![Value::Int(i)]).collect();
//! let labels: Vec<Value> = (0..10).map(|i| Value::Bool(i > 4)).collect();
//! model.fit(&rows, &labels).unwrap();
//!
//! assert_eq!(model.predict(&[vec![Value::Int(8)]]).unwrap(), vec![Value::Bool(true)]);
//! ```

pub mod tree;

use std::fmt;

use crate::config::ConfigError;
use crate::error::BoxError;
use crate::value::{Row, Value};

pub use tree::{DecisionTreeClassifier, DecisionTreeFactory, DecisionTreeRegressor, TreeParams};

// =============================================================================
// TaskKind
// =============================================================================

/// Type of machine learning task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TaskKind {
    /// Discrete labels; predictions are one of the training labels.
    Classification,
    /// Continuous numeric labels.
    Regression,
}

impl TaskKind {
    /// Resolve the task from generated labels.
    ///
    /// Classification when every label is an integer, boolean or string;
    /// regression otherwise.
    pub fn from_labels(labels: &[Value]) -> Self {
        if labels.iter().all(Value::is_discrete) {
            Self::Classification
        } else {
            Self::Regression
        }
    }

    pub fn is_classification(&self) -> bool {
        matches!(self, Self::Classification)
    }

    pub fn is_regression(&self) -> bool {
        matches!(self, Self::Regression)
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Classification => "classifier",
            Self::Regression => "regressor",
        })
    }
}

// =============================================================================
// ModelError
// =============================================================================

/// Errors raised by models while fitting or predicting.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("cannot fit a model on an empty training set")]
    EmptyTrainingSet,
    #[error("got {rows} rows but {labels} labels")]
    LengthMismatch { rows: usize, labels: usize },
    #[error("row has {got} features, expected {expected}")]
    FeatureCountMismatch { expected: usize, got: usize },
    #[error("regression label {0} is not numeric")]
    NonNumericLabel(Value),
    #[error("model has not been fitted")]
    NotFitted,
    #[error("model returned no prediction")]
    EmptyPrediction,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Backend(BoxError),
}

// =============================================================================
// Model / ModelFactory
// =============================================================================

/// A trainable model.
///
/// Rows are aligned to a fixed feature order chosen by the caller; a model
/// must be given rows in the same order at predict time as at fit time.
pub trait Model: Send + Sync {
    /// Fit the model. Called exactly once per model by the pipeline.
    fn fit(&mut self, rows: &[Row], labels: &[Value]) -> Result<(), ModelError>;

    /// Predict one label per row.
    fn predict(&self, rows: &[Row]) -> Result<Vec<Value>, ModelError>;

    /// Human-readable name, used in logs and introspection.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// One-line description of the fitted model, if the model has one.
    fn summary(&self) -> Option<String> {
        None
    }
}

/// Builds a model for a resolved task.
///
/// Options are passed through verbatim; interpreting (or rejecting) them is up
/// to the factory.
pub trait ModelFactory: Send + Sync {
    fn create(&self, task: TaskKind, options: &ModelOptions) -> Result<Box<dyn Model>, ModelError>;
}

impl<F> ModelFactory for F
where
    F: Fn(TaskKind, &ModelOptions) -> Result<Box<dyn Model>, ModelError> + Send + Sync,
{
    fn create(&self, task: TaskKind, options: &ModelOptions) -> Result<Box<dyn Model>, ModelError> {
        self(task, options)
    }
}

// =============================================================================
// ModelOptions
// =============================================================================

/// Named model construction options, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelOptions {
    entries: Vec<(String, Value)>,
}

impl ModelOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, replacing any previous value.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
