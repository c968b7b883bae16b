//! Row encoding into a dense feature matrix.
//!
//! Numeric columns use [`Value::to_feature`] (booleans become 0/1). A column
//! holding any string during fit is categorical: each distinct string gets an
//! ordinal code in first-seen order. Values that cannot be encoded, such as
//! a string unseen during fit, become NaN and follow the tree's default
//! direction.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::model::ModelError;
use crate::value::{Row, Value};

/// Encoding of one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeatureKind {
    Numeric,
    Categorical { categories: Vec<String> },
}

impl FeatureKind {
    fn encode(&self, value: &Value) -> f64 {
        match self {
            Self::Numeric => value.to_feature().unwrap_or(f64::NAN),
            Self::Categorical { categories } => value
                .as_str()
                .and_then(|s| categories.iter().position(|c| c == s))
                .map_or(f64::NAN, |code| code as f64),
        }
    }
}

/// Fitted column encodings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureEncoder {
    kinds: Vec<FeatureKind>,
}

impl FeatureEncoder {
    /// Learn column encodings from training rows.
    ///
    /// # Errors
    ///
    /// [`ModelError::EmptyTrainingSet`] if `rows` is empty, or
    /// [`ModelError::FeatureCountMismatch`] if rows differ in length.
    pub fn fit(rows: &[Row]) -> Result<Self, ModelError> {
        let first = rows.first().ok_or(ModelError::EmptyTrainingSet)?;
        let n_features = first.len();

        let mut categories: Vec<Option<Vec<String>>> = vec![None; n_features];
        for row in rows {
            check_len(n_features, row)?;
            for (slot, value) in categories.iter_mut().zip(row) {
                if let Value::Str(s) = value {
                    let seen = slot.get_or_insert_with(Vec::new);
                    if !seen.contains(s) {
                        seen.push(s.clone());
                    }
                }
            }
        }

        let kinds = categories
            .into_iter()
            .map(|c| match c {
                Some(categories) => FeatureKind::Categorical { categories },
                None => FeatureKind::Numeric,
            })
            .collect();
        Ok(Self { kinds })
    }

    pub fn n_features(&self) -> usize {
        self.kinds.len()
    }

    pub fn kinds(&self) -> &[FeatureKind] {
        &self.kinds
    }

    /// Encode rows into a `[n_rows, n_features]` matrix.
    pub fn transform(&self, rows: &[Row]) -> Result<Array2<f64>, ModelError> {
        let n_features = self.n_features();
        let mut matrix = Array2::<f64>::zeros((rows.len(), n_features));
        for (mut out, row) in matrix.rows_mut().into_iter().zip(rows) {
            check_len(n_features, row)?;
            for ((slot, kind), value) in out.iter_mut().zip(&self.kinds).zip(row) {
                *slot = kind.encode(value);
            }
        }
        Ok(matrix)
    }
}

fn check_len(expected: usize, row: &Row) -> Result<(), ModelError> {
    if row.len() != expected {
        return Err(ModelError::FeatureCountMismatch {
            expected,
            got: row.len(),
        });
    }
    Ok(())
}
