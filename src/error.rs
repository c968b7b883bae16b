//! Crate-level error type.

use crate::bounds::BoundError;
use crate::config::ConfigError;
use crate::infer::InferenceError;
use crate::model::ModelError;
use crate::target::ArgumentError;
use crate::wrapper::InvocationError;

/// Boxed error returned by wrapped functions and custom model backends.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Any failure of the replication pipeline or a learned function.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Bound(#[from] BoundError),

    #[error(transparent)]
    Inference(#[from] InferenceError),

    #[error(transparent)]
    Invocation(#[from] InvocationError),

    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Model(#[from] ModelError),

    /// The wrapped function failed while labelling a sampled row.
    #[error("function failed on sampled row {row}: {source}")]
    Function {
        row: usize,
        #[source]
        source: BoxError,
    },
}

/// Result alias for crate-level operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
