//! The end-to-end replication pipeline.
//!
//! ```text
//! explicit input space ─┐
//!                       ├─► InputSpace ─► DataSampler ─► fit_function ─► LearnedFunction
//! source ─► infer ──────┘
//! ```

use crate::config::{ConfigError, Mode, ReplicatorConfig};
use crate::error::Error;
use crate::infer::infer_input_space;
use crate::model::ModelFactory;
use crate::sampler::DataSampler;
use crate::space::{input_space_to_bounds, InputSpace};
use crate::target::Target;
use crate::training::{fit_function_logged, TrainingLogger};
use crate::wrapper::LearnedFunction;

/// Replaces a function with a model trained on its sampled behavior.
///
/// # Example
///
/// ```
/// use replicant::{CallArgs, Replicator, ReplicatorConfig, Target, Value};
///
/// let target = Target::with_source(
///     r#"fn f(x: f64) -> &'static str { if x > 5.0 { "high" } else { "low" } }"#,
///     |args| Ok(Value::from(if args.f64("x")? > 5.0 { "high" } else { "low" })),
/// );
///
/// let config = ReplicatorConfig::builder().n_samples(500).build().unwrap();
/// let learned = Replicator::new(config).replicate(&target).unwrap();
///
/// assert_eq!(learned.call(&CallArgs::new().kwarg("x", 7.0)).unwrap(), Value::from("high"));
/// assert_eq!(learned.call(&CallArgs::new().kwarg("x", 2.0)).unwrap(), Value::from("low"));
/// ```
pub struct Replicator {
    config: ReplicatorConfig,
    factory: Option<Box<dyn ModelFactory>>,
    logger: TrainingLogger,
}

impl Replicator {
    pub fn new(config: ReplicatorConfig) -> Self {
        let logger = TrainingLogger::new(config.verbosity);
        Self {
            config,
            factory: None,
            logger,
        }
    }

    /// Use `factory` instead of the default decision trees.
    pub fn with_model_factory(mut self, factory: impl ModelFactory + 'static) -> Self {
        self.factory = Some(Box::new(factory));
        self
    }

    pub fn config(&self) -> &ReplicatorConfig {
        &self.config
    }

    /// Resolve the input space for `target`.
    ///
    /// A non-empty explicit input space always wins. In `Ast` mode an absent or
    /// empty one falls back to inference from the target's source; in
    /// `Blackbox` mode an empty one is used as is.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingInputSpace`] in `Blackbox` mode without input space
    /// - [`ConfigError::MissingSource`] in `Ast` mode with neither input space nor source
    /// - conversion and inference errors
    pub fn input_space(&self, target: &Target) -> Result<InputSpace, Error> {
        let explicit = match (self.config.mode, &self.config.input_space) {
            (Mode::Blackbox, None) => return Err(ConfigError::MissingInputSpace.into()),
            (Mode::Blackbox, Some(entries)) => Some(entries),
            (Mode::Ast, Some(entries)) if !entries.is_empty() => Some(entries),
            (Mode::Ast, _) => None,
        };

        if let Some(entries) = explicit {
            let space = input_space_to_bounds(entries)?;
            self.logger.log_input_space("explicit", &space);
            return Ok(space);
        }

        let source = target.source().ok_or(ConfigError::MissingSource)?;
        let space = infer_input_space(source)?;
        self.logger.log_input_space("inferred", &space);
        Ok(space)
    }

    /// Run the pipeline once and return the learned function.
    pub fn replicate(&self, target: &Target) -> Result<LearnedFunction, Error> {
        let space = self.input_space(target)?;

        self.logger.log_sampling(self.config.n_samples, space.len());
        let mut sampler = DataSampler::with_seed(space, self.config.seed);
        let rows = sampler.sample(self.config.n_samples)?;

        let fitted = fit_function_logged(
            target,
            &rows,
            sampler.feature_names(),
            self.config.task,
            self.factory.as_deref(),
            &self.config.model_options,
            &self.logger,
        )?;
        Ok(fitted.into())
    }
}

impl std::fmt::Debug for Replicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Replicator")
            .field("config", &self.config)
            .field("custom_factory", &self.factory.is_some())
            .finish()
    }
}
