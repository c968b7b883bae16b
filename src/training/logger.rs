//! Verbosity-gated progress logging.
//!
//! Messages are emitted as `tracing` events under the `replicant` target;
//! installing a subscriber is up to the application.

use crate::model::{Model, TaskKind};
use crate::space::InputSpace;

/// Feature count above which the boundary rows (2^k) dominate the dataset.
pub const BOUNDARY_WARN_FEATURES: usize = 16;

/// Verbosity level for pipeline output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// No output.
    #[default]
    Silent,
    /// Warnings only.
    Warning,
    /// Stage summaries.
    Info,
    /// Per-feature and per-model detail.
    Debug,
}

/// Logger for one replication run.
#[derive(Debug, Clone)]
pub struct TrainingLogger {
    verbosity: Verbosity,
}

impl TrainingLogger {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    #[inline]
    fn enabled(&self, level: Verbosity) -> bool {
        self.verbosity >= level
    }

    /// `origin` is `"explicit"` or `"inferred"`.
    pub fn log_input_space(&self, origin: &str, space: &InputSpace) {
        if self.enabled(Verbosity::Info) {
            tracing::info!(target: "replicant", origin, n_features = space.len(), "input space ready");
        }
        if self.enabled(Verbosity::Debug) {
            for (name, bound) in space.iter() {
                tracing::debug!(target: "replicant", feature = name, bound = ?bound, "bound");
            }
        }
    }

    pub fn log_sampling(&self, n_random: usize, n_features: usize) {
        if n_features > BOUNDARY_WARN_FEATURES && self.enabled(Verbosity::Warning) {
            tracing::warn!(
                target: "replicant",
                n_features,
                "{} features produce 2^{} boundary rows",
                n_features,
                n_features
            );
        }
        if self.enabled(Verbosity::Info) {
            let n_boundary = 1usize.checked_shl(n_features as u32).unwrap_or(usize::MAX);
            tracing::info!(target: "replicant", n_random, n_boundary, "sampling rows");
        }
    }

    /// `resolved` is true when the task was inferred from labels.
    pub fn log_task(&self, task: TaskKind, resolved: bool) {
        if self.enabled(Verbosity::Info) {
            tracing::info!(target: "replicant", %task, resolved, "task");
        }
    }

    pub fn log_model(&self, model: &dyn Model, n_rows: usize) {
        if self.enabled(Verbosity::Debug) {
            let summary = model.summary();
            tracing::debug!(
                target: "replicant",
                model = model.name(),
                n_rows,
                summary = summary.as_deref().unwrap_or("-"),
                "model fitted"
            );
        }
    }
}
