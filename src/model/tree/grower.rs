//! Greedy CART tree growth.
//!
//! Nodes are expanded depth-first. Each node owns a contiguous range of a
//! single row-index buffer; applying a split partitions that range in place
//! into the two children's ranges.
//!
//! ```text
//! Before splitting node 0 (rows 0..8):
//!   indices: [0, 1, 2, 3, 4, 5, 6, 7]
//!
//! After x < t sends rows 1, 4, 6 left:
//!   indices: [1, 4, 6 | 3, 0, 5, 2, 7]
//!             left      right
//! ```

use ndarray::ArrayView2;

use super::criterion::Criterion;
use super::params::TreeParams;
use super::repr::{NodeId, Tree, TreeBuilder};

/// Best split found for a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitInfo {
    pub feature: u32,
    pub threshold: f64,
    /// Impurity decrease, unweighted by node size.
    pub gain: f64,
    /// Missing values go left.
    pub default_left: bool,
}

struct NodeTask {
    node: NodeId,
    begin: usize,
    end: usize,
    depth: u32,
}

/// Grows one tree from an encoded feature matrix and encoded labels.
pub struct TreeGrower<'a, C: Criterion> {
    params: &'a TreeParams,
    features: ArrayView2<'a, f64>,
    labels: &'a [C::Label],
    template: C,
    indices: Vec<usize>,
    /// Reused per node and feature: `(value, label)` of rows with a value.
    sorted: Vec<(f64, C::Label)>,
}

impl<'a, C: Criterion> TreeGrower<'a, C> {
    /// `template` is an empty criterion of the right shape (e.g. class count).
    pub fn new(
        params: &'a TreeParams,
        features: ArrayView2<'a, f64>,
        labels: &'a [C::Label],
        template: C,
    ) -> Self {
        debug_assert_eq!(features.nrows(), labels.len());
        Self {
            params,
            features,
            labels,
            template: template.empty(),
            indices: (0..labels.len()).collect(),
            sorted: Vec::with_capacity(labels.len()),
        }
    }

    pub fn grow(mut self) -> Tree<C::Leaf> {
        let n_total = self.labels.len();
        let mut builder = TreeBuilder::new();
        let root = builder.init_root();
        let mut stack = vec![NodeTask {
            node: root,
            begin: 0,
            end: n_total,
            depth: 0,
        }];

        while let Some(task) = stack.pop() {
            let stats = self.node_stats(task.begin, task.end);
            let split = if self.can_split(&stats, task.depth) {
                self.find_best_split(task.begin, task.end, &stats)
                    .filter(|s| self.accepts(s, task.end - task.begin, n_total))
            } else {
                None
            };

            let Some(split) = split else {
                builder.make_leaf(task.node, stats.leaf_value());
                continue;
            };

            let mid = self.partition(task.begin, task.end, &split);
            let (left, right) =
                builder.apply_split(task.node, split.feature, split.threshold, split.default_left);
            stack.push(NodeTask {
                node: right,
                begin: mid,
                end: task.end,
                depth: task.depth + 1,
            });
            stack.push(NodeTask {
                node: left,
                begin: task.begin,
                end: mid,
                depth: task.depth + 1,
            });
        }

        builder.build()
    }

    fn node_stats(&self, begin: usize, end: usize) -> C {
        let mut stats = self.template.empty();
        for &row in &self.indices[begin..end] {
            stats.push(self.labels[row]);
        }
        stats
    }

    fn can_split(&self, stats: &C, depth: u32) -> bool {
        let n = stats.count();
        if n < self.params.min_samples_split || n < 2 * self.params.min_samples_leaf {
            return false;
        }
        if self.params.max_depth.is_some_and(|max| depth >= max) {
            return false;
        }
        !stats.is_pure()
    }

    fn accepts(&self, split: &SplitInfo, n_node: usize, n_total: usize) -> bool {
        let weighted = (n_node as f64 / n_total as f64) * split.gain.max(0.0);
        weighted >= self.params.min_impurity_decrease
    }

    /// Exhaustive search over every feature and every threshold between two
    /// consecutive distinct values. Ties keep the first candidate found.
    fn find_best_split(&mut self, begin: usize, end: usize, node: &C) -> Option<SplitInfo> {
        let min_leaf = self.params.min_samples_leaf;
        let mut best: Option<SplitInfo> = None;

        for feature in 0..self.features.ncols() {
            self.sorted.clear();
            for &row in &self.indices[begin..end] {
                let x = self.features[[row, feature]];
                if !x.is_nan() {
                    self.sorted.push((x, self.labels[row]));
                }
            }
            let m = self.sorted.len();
            if m < 2 * min_leaf {
                continue;
            }
            self.sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

            let mut left = self.template.empty();
            let mut right = self.template.empty();
            for &(_, y) in &self.sorted {
                right.push(y);
            }
            let parent_impurity = right.impurity();
            let n_missing = node.count() - m;

            for i in 0..m - 1 {
                let (x, y) = self.sorted[i];
                left.push(y);
                right.pop(y);

                let next = self.sorted[i + 1].0;
                if next <= x {
                    continue;
                }
                let n_left = i + 1;
                let n_right = m - n_left;
                if n_left < min_leaf || n_right < min_leaf {
                    continue;
                }

                let child_impurity = (n_left as f64 * left.impurity()
                    + n_right as f64 * right.impurity())
                    / m as f64;
                let gain = parent_impurity - child_impurity;
                if best.is_some_and(|b| gain <= b.gain) {
                    continue;
                }
                best = Some(SplitInfo {
                    feature: feature as u32,
                    threshold: midpoint(x, next),
                    gain,
                    default_left: n_missing == 0 || n_left >= n_right,
                });
            }
        }

        best
    }

    /// Partition `indices[begin..end]` so left-going rows come first.
    /// Returns the start of the right range.
    fn partition(&mut self, begin: usize, end: usize, split: &SplitInfo) -> usize {
        let feature = split.feature as usize;
        let goes_left = |x: f64| {
            if x.is_nan() {
                split.default_left
            } else {
                x < split.threshold
            }
        };

        let mut mid = begin;
        for i in begin..end {
            let row = self.indices[i];
            if goes_left(self.features[[row, feature]]) {
                self.indices.swap(i, mid);
                mid += 1;
            }
        }
        mid
    }
}

/// A threshold `t` with `low < t <= high`.
fn midpoint(low: f64, high: f64) -> f64 {
    let t = low / 2.0 + high / 2.0;
    if t > low && t <= high {
        t
    } else {
        high
    }
}
