//! Decision tree hyper-parameters.
//!
//! [`TreeParams`] can be built directly or from named [`ModelOptions`]:
//!
//! | option | type | default |
//! |---|---|---|
//! | `max_depth` | int, or absent for unlimited | unlimited |
//! | `min_samples_split` | int >= 2 | 2 |
//! | `min_samples_leaf` | int >= 1 | 1 |
//! | `min_impurity_decrease` | number >= 0 | 0.0 |

use crate::config::ConfigError;
use crate::model::ModelOptions;
use crate::value::Value;

/// Tree structure and stopping parameters.
///
/// # Example
///
/// ```
/// use replicant::model::TreeParams;
///
/// // Fully grown tree (the default)
/// let params = TreeParams::default();
/// assert_eq!(params.max_depth, None);
///
/// // Shallow tree
/// let params = TreeParams::with_max_depth(4);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TreeParams {
    /// Maximum depth. `None` grows until leaves are pure or too small.
    pub max_depth: Option<u32>,
    /// Minimum number of samples required to split a node. Default: 2.
    pub min_samples_split: usize,
    /// Minimum number of samples in each child of a split. Default: 1.
    pub min_samples_leaf: usize,
    /// Minimum weighted impurity decrease required to split. Default: 0.0.
    ///
    /// The decrease is weighted by the fraction of training samples reaching the node.
    pub min_impurity_decrease: f64,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
            min_impurity_decrease: 0.0,
        }
    }
}

impl TreeParams {
    pub fn with_max_depth(max_depth: u32) -> Self {
        Self {
            max_depth: Some(max_depth),
            ..Default::default()
        }
    }

    /// Validate parameters.
    ///
    /// # Errors
    ///
    /// Returns error if any parameter is out of range.
    pub fn validate(&self) -> Result<(), ParamValidationError> {
        if self.min_samples_split < 2 {
            return Err(ParamValidationError::InvalidMinSamplesSplit(self.min_samples_split));
        }
        if self.min_samples_leaf < 1 {
            return Err(ParamValidationError::InvalidMinSamplesLeaf(self.min_samples_leaf));
        }
        if !(self.min_impurity_decrease >= 0.0) {
            return Err(ParamValidationError::InvalidMinImpurityDecrease(
                self.min_impurity_decrease,
            ));
        }
        Ok(())
    }

    /// Build from named options, rejecting unknown names and ill-typed values.
    pub fn from_options(options: &ModelOptions) -> Result<Self, ConfigError> {
        let mut params = Self::default();
        for (name, value) in options.iter() {
            match name {
                "max_depth" => params.max_depth = Some(to_count(name, value)? as u32),
                "min_samples_split" => params.min_samples_split = to_count(name, value)?,
                "min_samples_leaf" => params.min_samples_leaf = to_count(name, value)?,
                "min_impurity_decrease" => {
                    params.min_impurity_decrease =
                        value.as_f64().ok_or_else(|| invalid(name, value))?
                }
                other => return Err(ConfigError::UnknownModelOption(other.to_string())),
            }
        }
        params.validate().map_err(Self::convert_param_error)?;
        Ok(params)
    }

    fn convert_param_error(e: ParamValidationError) -> ConfigError {
        let (name, value) = match e {
            ParamValidationError::InvalidMinSamplesSplit(v) => ("min_samples_split", v.to_string()),
            ParamValidationError::InvalidMinSamplesLeaf(v) => ("min_samples_leaf", v.to_string()),
            ParamValidationError::InvalidMinImpurityDecrease(v) => {
                ("min_impurity_decrease", v.to_string())
            }
        };
        ConfigError::InvalidModelOption {
            name: name.to_string(),
            value,
        }
    }
}

fn to_count(name: &str, value: &Value) -> Result<usize, ConfigError> {
    value
        .as_i64()
        .and_then(|v| usize::try_from(v).ok())
        .filter(|&v| v <= u32::MAX as usize)
        .ok_or_else(|| invalid(name, value))
}

fn invalid(name: &str, value: &Value) -> ConfigError {
    ConfigError::InvalidModelOption {
        name: name.to_string(),
        value: value.to_string(),
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Parameter validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamValidationError {
    /// min_samples_split must be >= 2.
    #[error("min_samples_split must be >= 2, got {0}")]
    InvalidMinSamplesSplit(usize),

    /// min_samples_leaf must be >= 1.
    #[error("min_samples_leaf must be >= 1, got {0}")]
    InvalidMinSamplesLeaf(usize),

    /// min_impurity_decrease must be >= 0.
    #[error("min_impurity_decrease must be >= 0, got {0}")]
    InvalidMinImpurityDecrease(f64),
}
