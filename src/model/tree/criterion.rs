//! Impurity criteria with incremental node statistics.
//!
//! A criterion accumulates the labels of one side of a candidate split. The
//! grower moves labels from the right side to the left one at a time, so
//! `push`/`pop` are O(1) (O(classes) for the impurity).

/// Node statistics for an impurity measure.
pub trait Criterion: Clone {
    /// Encoded label.
    type Label: Copy;
    /// Value stored in a leaf.
    type Leaf: Clone + Default;

    /// Empty statistics of the same shape as `self`.
    fn empty(&self) -> Self;

    fn push(&mut self, label: Self::Label);

    fn pop(&mut self, label: Self::Label);

    fn count(&self) -> usize;

    /// Impurity of the accumulated labels. Zero when empty.
    fn impurity(&self) -> f64;

    fn is_pure(&self) -> bool;

    fn leaf_value(&self) -> Self::Leaf;
}

// =============================================================================
// Gini
// =============================================================================

/// Gini impurity over class indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Gini {
    counts: Vec<usize>,
    total: usize,
}

impl Gini {
    pub fn new(n_classes: usize) -> Self {
        Self {
            counts: vec![0; n_classes],
            total: 0,
        }
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }
}

impl Criterion for Gini {
    type Label = usize;
    type Leaf = usize;

    fn empty(&self) -> Self {
        Self::new(self.counts.len())
    }

    #[inline]
    fn push(&mut self, label: usize) {
        self.counts[label] += 1;
        self.total += 1;
    }

    #[inline]
    fn pop(&mut self, label: usize) {
        self.counts[label] -= 1;
        self.total -= 1;
    }

    fn count(&self) -> usize {
        self.total
    }

    fn impurity(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let n = self.total as f64;
        let sum_sq: f64 = self.counts.iter().map(|&c| (c as f64 / n).powi(2)).sum();
        1.0 - sum_sq
    }

    fn is_pure(&self) -> bool {
        self.counts.iter().any(|&c| c == self.total)
    }

    /// Majority class; ties go to the lowest class index.
    fn leaf_value(&self) -> usize {
        let mut best = 0;
        for (class, &count) in self.counts.iter().enumerate() {
            if count > self.counts[best] {
                best = class;
            }
        }
        best
    }
}

// =============================================================================
// Mse
// =============================================================================

/// Mean squared error (variance) over numeric labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mse {
    n: usize,
    sum: f64,
    sum_sq: f64,
}

impl Mse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mean(&self) -> f64 {
        if self.n == 0 {
            0.0
        } else {
            self.sum / self.n as f64
        }
    }
}

impl Criterion for Mse {
    type Label = f64;
    type Leaf = f64;

    fn empty(&self) -> Self {
        Self::new()
    }

    #[inline]
    fn push(&mut self, label: f64) {
        self.n += 1;
        self.sum += label;
        self.sum_sq += label * label;
    }

    #[inline]
    fn pop(&mut self, label: f64) {
        self.n -= 1;
        self.sum -= label;
        self.sum_sq -= label * label;
    }

    fn count(&self) -> usize {
        self.n
    }

    fn impurity(&self) -> f64 {
        if self.n == 0 {
            return 0.0;
        }
        let mean = self.mean();
        (self.sum_sq / self.n as f64 - mean * mean).max(0.0)
    }

    fn is_pure(&self) -> bool {
        if self.n == 0 {
            return true;
        }
        self.impurity() <= 1e-12 * (self.sum_sq / self.n as f64)
    }

    fn leaf_value(&self) -> f64 {
        self.mean()
    }
}
