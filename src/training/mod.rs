//! Label generation and model fitting.
//!
//! - [`fit_function`]: label sampled rows by calling the target, resolve the
//!   task, build a model and fit it
//! - [`TrainingLogger`]: verbosity-gated logging for the whole pipeline

mod logger;

pub use logger::{TrainingLogger, Verbosity, BOUNDARY_WARN_FEATURES};

use crate::config::Task;
use crate::error::Error;
use crate::model::{DecisionTreeFactory, Model, ModelFactory, ModelOptions, TaskKind};
use crate::target::{Arguments, Target};
use crate::value::{Row, Value};
use crate::wrapper::LearnedFunction;

/// A fitted model with the feature order and task it was trained for.
pub struct FittedModel {
    pub model: Box<dyn Model>,
    pub feature_names: Vec<String>,
    pub task: TaskKind,
}

impl From<FittedModel> for LearnedFunction {
    fn from(fitted: FittedModel) -> Self {
        LearnedFunction::new(fitted.model, fitted.feature_names, fitted.task)
    }
}

impl std::fmt::Debug for FittedModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FittedModel")
            .field("model", &self.model.name())
            .field("feature_names", &self.feature_names)
            .field("task", &self.task)
            .finish()
    }
}

/// Call `target` once per row, in row order.
///
/// # Errors
///
/// The first failure, as [`Error::Function`] with the failing row index.
pub fn generate_labels(
    target: &Target,
    rows: &[Row],
    feature_names: &[String],
) -> Result<Vec<Value>, Error> {
    rows.iter()
        .enumerate()
        .map(|(row, values)| {
            target
                .call(&Arguments::new(feature_names, values))
                .map_err(|source| Error::Function { row, source })
        })
        .collect()
}

/// Label `rows` with `target` and fit a model on them.
///
/// `Task::Auto` is resolved from the labels after all of them exist. Without a
/// `factory`, [`DecisionTreeFactory`] builds the model from `options`.
pub fn fit_function(
    target: &Target,
    rows: &[Row],
    feature_names: &[String],
    task: Task,
    factory: Option<&dyn ModelFactory>,
    options: &ModelOptions,
) -> Result<FittedModel, Error> {
    let logger = TrainingLogger::new(Verbosity::Silent);
    fit_function_logged(target, rows, feature_names, task, factory, options, &logger)
}

/// [`fit_function`] reporting progress through `logger`.
pub fn fit_function_logged(
    target: &Target,
    rows: &[Row],
    feature_names: &[String],
    task: Task,
    factory: Option<&dyn ModelFactory>,
    options: &ModelOptions,
    logger: &TrainingLogger,
) -> Result<FittedModel, Error> {
    let labels = generate_labels(target, rows, feature_names)?;

    let kind = match task.explicit() {
        Some(kind) => {
            logger.log_task(kind, false);
            kind
        }
        None => {
            let kind = TaskKind::from_labels(&labels);
            logger.log_task(kind, true);
            kind
        }
    };

    let mut model = match factory {
        Some(factory) => factory.create(kind, options)?,
        None => DecisionTreeFactory.create(kind, options)?,
    };
    model.fit(rows, &labels)?;
    logger.log_model(model.as_ref(), rows.len());

    Ok(FittedModel {
        model,
        feature_names: feature_names.to_vec(),
        task: kind,
    })
}
