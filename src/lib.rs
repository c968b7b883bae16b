//! replicant: replace a function with a model trained on its behavior.
//!
//! The pipeline infers (or takes) the range of plausible inputs for each
//! parameter, samples a synthetic dataset over that range, labels it by
//! calling the function, and fits a decision tree. The result is a
//! [`LearnedFunction`] that is called like the original.
//!
//! # Key Types
//!
//! - [`Replicator`] / [`ReplicatorConfig`] - The pipeline and its configuration
//! - [`Target`] - The function to replicate, with optional source text
//! - [`Bound`] / [`InputSpace`] - Admissible values per parameter
//! - [`DataSampler`] - Random rows plus every boundary combination
//! - [`Model`] / [`ModelFactory`] - Pluggable models; decision trees by default
//!
//! # Input-space inference
//!
//! In `Ast` mode the function's Rust source is parsed with `syn` and every
//! `if` test comparing a parameter against a literal becomes a constraint.
//! See the [`infer`] module.

// Re-export approx traits for users who want to compare predictions
pub use approx;

pub mod bounds;
pub mod config;
pub mod error;
pub mod infer;
pub mod model;
pub mod replicate;
pub mod sampler;
pub mod space;
pub mod target;
pub mod training;
pub mod value;
pub mod wrapper;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// Pipeline
pub use config::{ConfigError, Mode, ReplicatorConfig, Task};
pub use replicate::Replicator;
pub use target::{ArgumentError, Arguments, Target};
pub use wrapper::{CallArgs, InvocationError, LearnedFunction};

// Values and bounds
pub use bounds::{Bound, BoundError, CategoricalBound, NumericBound};
pub use space::{input_space_to_bounds, InputSpace, SpaceValue};
pub use value::{Row, Value};

// Stages
pub use infer::{infer_input_space, InferenceError};
pub use sampler::DataSampler;
pub use training::{fit_function, FittedModel, Verbosity};

// Models
pub use model::{Model, ModelError, ModelFactory, ModelOptions, TaskKind};

pub use error::{BoxError, Error, Result};
