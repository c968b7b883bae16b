//! Synthetic dataset generation over an input space.
//!
//! [`DataSampler`] draws independent uniform rows and appends every corner of
//! the input space (the Cartesian product of each feature's two boundary
//! values), so the dataset always covers the extremes.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::config::ConfigError;
use crate::space::InputSpace;
use crate::value::{Row, Value};

/// Largest feature count whose 2^k boundary rows are countable in a `usize`.
pub const MAX_BOUNDARY_FEATURES: usize = usize::BITS as usize - 1;

/// A row as `(name, value)` pairs in feature order.
pub type NamedRow = Vec<(String, Value)>;

/// Samples rows from an [`InputSpace`].
///
/// Feature order is fixed at construction to the input space's insertion
/// order and never changes for the lifetime of the sampler.
pub struct DataSampler {
    space: InputSpace,
    feature_names: Vec<String>,
    rng: Xoshiro256PlusPlus,
}

impl DataSampler {
    /// Create a sampler with the default seed.
    pub fn new(space: InputSpace) -> Self {
        Self::with_seed(space, 42)
    }

    pub fn with_seed(space: InputSpace, seed: u64) -> Self {
        let feature_names = space.names();
        Self {
            space,
            feature_names,
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn input_space(&self) -> &InputSpace {
        &self.space
    }

    /// `n` random rows followed by all boundary combinations.
    ///
    /// Returns `n + 2^k` rows of length `k`, where `k` is the feature count.
    ///
    /// # Errors
    ///
    /// [`ConfigError::TooManyFeatures`] when `k` exceeds [`MAX_BOUNDARY_FEATURES`].
    pub fn sample(&mut self, n: usize) -> Result<Vec<Row>, ConfigError> {
        self.check_boundary_count()?;
        let mut rows = self.sample_random(n);
        rows.extend(self.boundary_combinations()?);
        Ok(rows)
    }

    /// Same rows as [`sample`](Self::sample), keyed by feature name.
    pub fn sample_dicts(&mut self, n: usize) -> Result<Vec<NamedRow>, ConfigError> {
        let rows = self.sample(n)?;
        Ok(rows
            .into_iter()
            .map(|row| self.feature_names.iter().cloned().zip(row).collect())
            .collect())
    }

    /// Number of boundary rows appended by [`sample`](Self::sample), or `None`
    /// when 2^k does not fit in a `usize`.
    pub fn n_boundary_combinations(&self) -> Option<usize> {
        u32::try_from(self.feature_names.len())
            .ok()
            .and_then(|k| 1usize.checked_shl(k))
    }

    fn check_boundary_count(&self) -> Result<usize, ConfigError> {
        self.n_boundary_combinations()
            .ok_or(ConfigError::TooManyFeatures {
                n_features: self.feature_names.len(),
                max: MAX_BOUNDARY_FEATURES,
            })
    }

    /// `n` rows, each feature drawn independently.
    pub fn sample_random(&mut self, n: usize) -> Vec<Row> {
        let rng = &mut self.rng;
        let space = &self.space;
        (0..n)
            .map(|_| space.bounds().map(|b| b.sample_one(&mut *rng)).collect())
            .collect()
    }

    /// Cartesian product of the per-feature `(low, high)` boundary pairs.
    ///
    /// The first feature varies slowest and the low value comes first, so the
    /// order is stable across calls.
    pub fn boundary_combinations(&self) -> Result<Vec<Row>, ConfigError> {
        let n_rows = self.check_boundary_count()?;
        let pairs: Vec<(Value, Value)> = self.space.bounds().map(|b| b.boundary_values()).collect();
        let k = pairs.len();
        Ok((0..n_rows)
            .map(|combo| {
                pairs
                    .iter()
                    .enumerate()
                    .map(|(j, (low, high))| {
                        if (combo >> (k - 1 - j)) & 1 == 1 {
                            high.clone()
                        } else {
                            low.clone()
                        }
                    })
                    .collect()
            })
            .collect())
    }
}
