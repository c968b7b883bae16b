//! The callable returned by replication.

use std::fmt;

use crate::error::Error;
use crate::model::{Model, ModelError, TaskKind};
use crate::value::{Row, Value};

/// A feature was covered by neither a positional nor a named argument.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvocationError {
    #[error("missing argument '{0}'")]
    MissingArgument(String),
}

/// Arguments of one call: positionals in order, then named arguments.
///
/// ```
/// use replicant::CallArgs;
///
/// let args = CallArgs::new().arg(1).kwarg("z", 3).kwarg("y", 2);
/// assert_eq!(args.positionals().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallArgs {
    positional: Vec<Value>,
    named: Vec<(String, Value)>,
}

impl CallArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only positional arguments.
    pub fn positional<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        Self {
            positional: values.into_iter().map(Into::into).collect(),
            named: Vec::new(),
        }
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Add a named argument.
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.named.push((name.into(), value.into()));
        self
    }

    pub fn positionals(&self) -> &[Value] {
        &self.positional
    }

    pub fn named(&self, name: &str) -> Option<&Value> {
        self.named.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }
}

/// A trained stand-in for the replicated function.
///
/// Holds the fitted model and the feature order it was trained with. Calls
/// assemble one row in that order and return the model's single prediction.
pub struct LearnedFunction {
    model: Box<dyn Model>,
    feature_names: Vec<String>,
    task: TaskKind,
}

impl LearnedFunction {
    pub fn new(model: Box<dyn Model>, feature_names: Vec<String>, task: TaskKind) -> Self {
        Self {
            model,
            feature_names,
            task,
        }
    }

    /// Predict for one call.
    ///
    /// # Errors
    ///
    /// [`InvocationError::MissingArgument`] naming the first uncovered feature,
    /// or the model's prediction error.
    pub fn call(&self, args: &CallArgs) -> Result<Value, Error> {
        let row = self.assemble_row(args)?;
        let prediction = self
            .model
            .predict(std::slice::from_ref(&row))?
            .into_iter()
            .next()
            .ok_or(ModelError::EmptyPrediction)?;
        Ok(prediction)
    }

    /// Map positionals to features in order, then fill the rest by name.
    ///
    /// Positionals beyond the feature count are ignored; a positional wins
    /// over a named argument for the same feature.
    pub fn assemble_row(&self, args: &CallArgs) -> Result<Row, InvocationError> {
        self.feature_names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                args.positional
                    .get(i)
                    .or_else(|| args.named(name))
                    .cloned()
                    .ok_or_else(|| InvocationError::MissingArgument(name.clone()))
            })
            .collect()
    }

    pub fn model(&self) -> &dyn Model {
        self.model.as_ref()
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn task(&self) -> TaskKind {
        self.task
    }
}

impl fmt::Debug for LearnedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LearnedFunction")
            .field("model", &self.model.name())
            .field("feature_names", &self.feature_names)
            .field("task", &self.task)
            .finish()
    }
}
