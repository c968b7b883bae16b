//! Pipeline configuration with builder pattern.
//!
//! [`ReplicatorConfig`] gathers every knob of the replicate pipeline and uses
//! the `bon` crate to generate a builder with validation at build time.
//!
//! # Example
//!
//! ```
//! use replicant::config::{Mode, ReplicatorConfig, Task};
//! use replicant::space::SpaceValue;
//!
//! // All defaults: infer bounds from source, auto task, 1000 samples
//! let config = ReplicatorConfig::builder().build().unwrap();
//!
//! // Black-box regression over an explicit range
//! let config = ReplicatorConfig::builder()
//!     .mode(Mode::Blackbox)
//!     .task(Task::Regressor)
//!     .input_space(vec![("x".to_string(), SpaceValue::from((-5, 5)))])
//!     .n_samples(5_000)
//!     .build()
//!     .unwrap();
//! ```

use std::fmt;
use std::str::FromStr;

use bon::Builder;

use crate::model::{ModelOptions, TaskKind};
use crate::space::SpaceValue;
use crate::training::Verbosity;

// =============================================================================
// ConfigError
// =============================================================================

/// Configuration errors. All are fatal and surface before any sampling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unsupported mode: {0:?}")]
    UnsupportedMode(String),
    #[error("unsupported task: {0:?}")]
    UnsupportedTask(String),
    #[error("input_space must be provided when using mode 'blackbox'")]
    MissingInputSpace,
    #[error("mode 'ast' requires function source when no input_space is given")]
    MissingSource,
    #[error("cannot convert input space value for '{key}': {value}")]
    InvalidInputSpace { key: String, value: String },
    #[error("categorical input space for '{key}' requires at least one value")]
    EmptyCategorical { key: String },
    #[error("n_samples must be at least 1")]
    InvalidSampleCount,
    #[error("{n_features} features need 2^{n_features} boundary rows (at most {max} features supported)")]
    TooManyFeatures { n_features: usize, max: usize },
    #[error("unknown model option: {0:?}")]
    UnknownModelOption(String),
    #[error("invalid value for model option {name:?}: {value}")]
    InvalidModelOption { name: String, value: String },
}

// =============================================================================
// Mode / Task
// =============================================================================

/// How the input space is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Infer bounds from the function's source unless an input space is given.
    #[default]
    Ast,
    /// Treat the function as opaque; an explicit input space is required.
    Blackbox,
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ast" => Ok(Self::Ast),
            "blackbox" => Ok(Self::Blackbox),
            other => Err(ConfigError::UnsupportedMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ast => "ast",
            Self::Blackbox => "blackbox",
        })
    }
}

/// Requested task type. `Auto` is resolved from the generated labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Task {
    Classifier,
    Regressor,
    #[default]
    Auto,
}

impl Task {
    /// The explicit task kind, or `None` for `Auto`.
    pub fn explicit(self) -> Option<TaskKind> {
        match self {
            Self::Classifier => Some(TaskKind::Classification),
            Self::Regressor => Some(TaskKind::Regression),
            Self::Auto => None,
        }
    }
}

impl FromStr for Task {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classifier" => Ok(Self::Classifier),
            "regressor" => Ok(Self::Regressor),
            "auto" => Ok(Self::Auto),
            other => Err(ConfigError::UnsupportedTask(other.to_string())),
        }
    }
}

impl From<TaskKind> for Task {
    fn from(kind: TaskKind) -> Self {
        match kind {
            TaskKind::Classification => Self::Classifier,
            TaskKind::Regression => Self::Regressor,
        }
    }
}

// =============================================================================
// ReplicatorConfig
// =============================================================================

/// Configuration for [`Replicator`](crate::Replicator).
///
/// # Structure
///
/// - **Input space**: `mode` and the optional explicit `input_space`
/// - **Task**: classification, regression, or resolved from labels
/// - **Sampling**: `n_samples` random rows (boundary rows are always added) and `seed`
/// - **Model**: `model_options` passed verbatim to the model factory
/// - **Logging**: `verbosity`
#[derive(Debug, Clone, Builder)]
#[builder(
    derive(Clone, Debug),
    finish_fn(vis = "", name = __build_internal)
)]
pub struct ReplicatorConfig {
    /// Input-space mode. Default: `Ast`.
    #[builder(default)]
    pub mode: Mode,

    /// Explicit input space, in feature order. Overrides inference when set.
    pub input_space: Option<Vec<(String, SpaceValue)>>,

    /// Task type. Default: `Auto`.
    #[builder(default)]
    pub task: Task,

    /// Number of random rows to sample. Default: 1000.
    #[builder(default = 1000)]
    pub n_samples: usize,

    /// Named options for model construction. Default: empty.
    #[builder(default)]
    pub model_options: ModelOptions,

    /// Sampler seed. Default: 42.
    #[builder(default = 42)]
    pub seed: u64,

    /// Verbosity level. Default: `Silent`.
    #[builder(default)]
    pub verbosity: Verbosity,
}

impl<S: replicator_config_builder::IsComplete> ReplicatorConfigBuilder<S> {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidSampleCount`] if `n_samples == 0`
    /// - [`ConfigError::MissingInputSpace`] for `Blackbox` without `input_space`
    pub fn build(self) -> Result<ReplicatorConfig, ConfigError> {
        let config = self.__build_internal();
        config.validate()?;
        Ok(config)
    }
}

impl Default for ReplicatorConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            input_space: None,
            task: Task::default(),
            n_samples: 1000,
            model_options: ModelOptions::default(),
            seed: 42,
            verbosity: Verbosity::default(),
        }
    }
}

impl ReplicatorConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.n_samples == 0 {
            return Err(ConfigError::InvalidSampleCount);
        }
        if self.mode == Mode::Blackbox && self.input_space.is_none() {
            return Err(ConfigError::MissingInputSpace);
        }
        Ok(())
    }
}
