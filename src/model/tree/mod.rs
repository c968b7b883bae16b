//! CART decision trees: the default [`Model`](crate::model::Model) backend.
//!
//! - [`TreeParams`]: hyper-parameters, built from [`ModelOptions`]
//! - [`FeatureEncoder`]: `Value` rows to a dense `f64` matrix
//! - [`TreeGrower`]: exhaustive greedy split search over [`Criterion`] statistics
//! - [`Tree`]: structure-of-arrays storage used for prediction
//! - [`DecisionTreeClassifier`] / [`DecisionTreeRegressor`]: the estimators

mod criterion;
mod encode;
mod estimator;
mod grower;
mod params;
mod repr;

pub use criterion::{Criterion, Gini, Mse};
pub use encode::{FeatureEncoder, FeatureKind};
pub use estimator::{DecisionTreeClassifier, DecisionTreeRegressor, FittedTree};
pub use grower::{SplitInfo, TreeGrower};
pub use params::{ParamValidationError, TreeParams};
pub use repr::{NodeId, SampleAccessor, Tree, TreeBuilder};

use crate::model::{Model, ModelError, ModelFactory, ModelOptions, TaskKind};

/// Builds a [`DecisionTreeClassifier`] or [`DecisionTreeRegressor`] from
/// [`ModelOptions`].
///
/// Recognized options are listed on [`TreeParams`]; any other name is a
/// configuration error.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionTreeFactory;

impl ModelFactory for DecisionTreeFactory {
    fn create(&self, task: TaskKind, options: &ModelOptions) -> Result<Box<dyn Model>, ModelError> {
        let params = TreeParams::from_options(options)?;
        Ok(match task {
            TaskKind::Classification => Box::new(DecisionTreeClassifier::new(params)),
            TaskKind::Regression => Box::new(DecisionTreeRegressor::new(params)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn factory_picks_estimator_by_task() {
        let options = ModelOptions::new();
        let classifier = DecisionTreeFactory.create(TaskKind::Classification, &options).unwrap();
        let regressor = DecisionTreeFactory.create(TaskKind::Regression, &options).unwrap();
        assert_eq!(classifier.name(), "DecisionTreeClassifier");
        assert_eq!(regressor.name(), "DecisionTreeRegressor");
        assert!(classifier.summary().is_none());
    }

    #[test]
    fn factory_rejects_unknown_options() {
        let options = ModelOptions::new().with("n_estimators", 10);
        let err = DecisionTreeFactory
            .create(TaskKind::Regression, &options)
            .err()
            .unwrap();
        assert!(matches!(
            err,
            ModelError::Config(ConfigError::UnknownModelOption(ref name)) if name == "n_estimators"
        ));
    }
}
