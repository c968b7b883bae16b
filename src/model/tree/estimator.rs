//! Decision tree estimators implementing [`Model`].

use serde::{Deserialize, Serialize};

use crate::model::{Model, ModelError};
use crate::value::{Row, Value};

use super::criterion::{Gini, Mse};
use super::encode::FeatureEncoder;
use super::grower::TreeGrower;
use super::params::TreeParams;
use super::repr::Tree;

fn check_training_set(rows: &[Row], labels: &[Value]) -> Result<(), ModelError> {
    if rows.is_empty() {
        return Err(ModelError::EmptyTrainingSet);
    }
    if rows.len() != labels.len() {
        return Err(ModelError::LengthMismatch {
            rows: rows.len(),
            labels: labels.len(),
        });
    }
    Ok(())
}

/// Encoder and tree learned together by one `fit` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedTree<L> {
    encoder: FeatureEncoder,
    tree: Tree<L>,
}

impl<L> FittedTree<L> {
    pub fn encoder(&self) -> &FeatureEncoder {
        &self.encoder
    }

    pub fn tree(&self) -> &Tree<L> {
        &self.tree
    }

    fn predict_with<T>(&self, rows: &[Row], map: impl Fn(&L) -> T) -> Result<Vec<T>, ModelError> {
        let matrix = self.encoder.transform(rows)?;
        Ok(matrix
            .rows()
            .into_iter()
            .map(|row| map(self.tree.predict_row(&row)))
            .collect())
    }

    fn summary(&self) -> String {
        format!(
            "nodes={} leaves={} depth={}",
            self.tree.n_nodes(),
            self.tree.n_leaves(),
            self.tree.depth()
        )
    }
}

// =============================================================================
// DecisionTreeClassifier
// =============================================================================

/// CART classifier with Gini impurity.
///
/// Classes are the distinct training labels in first-seen order; every
/// prediction is one of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    params: TreeParams,
    classes: Vec<Value>,
    fitted: Option<FittedTree<usize>>,
}

impl DecisionTreeClassifier {
    pub fn new(params: TreeParams) -> Self {
        Self {
            params,
            classes: Vec::new(),
            fitted: None,
        }
    }

    pub fn params(&self) -> &TreeParams {
        &self.params
    }

    /// Distinct training labels. Empty before `fit`.
    pub fn classes(&self) -> &[Value] {
        &self.classes
    }

    pub fn fitted(&self) -> Option<&FittedTree<usize>> {
        self.fitted.as_ref()
    }

    fn encode_labels(labels: &[Value]) -> (Vec<Value>, Vec<usize>) {
        let mut classes: Vec<Value> = Vec::new();
        let encoded = labels
            .iter()
            .map(|label| match classes.iter().position(|c| c == label) {
                Some(idx) => idx,
                None => {
                    classes.push(label.clone());
                    classes.len() - 1
                }
            })
            .collect();
        (classes, encoded)
    }
}

impl Model for DecisionTreeClassifier {
    fn fit(&mut self, rows: &[Row], labels: &[Value]) -> Result<(), ModelError> {
        check_training_set(rows, labels)?;
        self.params
            .validate()
            .map_err(|e| ModelError::Backend(Box::new(e)))?;

        let encoder = FeatureEncoder::fit(rows)?;
        let features = encoder.transform(rows)?;
        let (classes, encoded) = Self::encode_labels(labels);

        let tree = TreeGrower::new(&self.params, features.view(), &encoded, Gini::new(classes.len()))
            .grow();
        self.classes = classes;
        self.fitted = Some(FittedTree { encoder, tree });
        Ok(())
    }

    fn predict(&self, rows: &[Row]) -> Result<Vec<Value>, ModelError> {
        let fitted = self.fitted.as_ref().ok_or(ModelError::NotFitted)?;
        fitted.predict_with(rows, |&class| self.classes[class].clone())
    }

    fn name(&self) -> &str {
        "DecisionTreeClassifier"
    }

    fn summary(&self) -> Option<String> {
        self.fitted
            .as_ref()
            .map(|f| format!("{} classes={}", f.summary(), self.classes.len()))
    }
}

// =============================================================================
// DecisionTreeRegressor
// =============================================================================

/// CART regressor with squared-error impurity.
///
/// Labels must be numeric (booleans count as 0/1). Predictions are always
/// [`Value::Float`] leaf means.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeRegressor {
    params: TreeParams,
    fitted: Option<FittedTree<f64>>,
}

impl DecisionTreeRegressor {
    pub fn new(params: TreeParams) -> Self {
        Self { params, fitted: None }
    }

    pub fn params(&self) -> &TreeParams {
        &self.params
    }

    pub fn fitted(&self) -> Option<&FittedTree<f64>> {
        self.fitted.as_ref()
    }
}

impl Model for DecisionTreeRegressor {
    fn fit(&mut self, rows: &[Row], labels: &[Value]) -> Result<(), ModelError> {
        check_training_set(rows, labels)?;
        self.params
            .validate()
            .map_err(|e| ModelError::Backend(Box::new(e)))?;

        let targets = labels
            .iter()
            .map(|v| v.to_feature().ok_or_else(|| ModelError::NonNumericLabel(v.clone())))
            .collect::<Result<Vec<f64>, _>>()?;
        let encoder = FeatureEncoder::fit(rows)?;
        let features = encoder.transform(rows)?;

        let tree = TreeGrower::new(&self.params, features.view(), &targets, Mse::new()).grow();
        self.fitted = Some(FittedTree { encoder, tree });
        Ok(())
    }

    fn predict(&self, rows: &[Row]) -> Result<Vec<Value>, ModelError> {
        let fitted = self.fitted.as_ref().ok_or(ModelError::NotFitted)?;
        fitted.predict_with(rows, |&mean| Value::Float(mean))
    }

    fn name(&self) -> &str {
        "DecisionTreeRegressor"
    }

    fn summary(&self) -> Option<String> {
        self.fitted.as_ref().map(FittedTree::summary)
    }
}
