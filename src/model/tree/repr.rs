//! Structure-of-arrays tree storage and its builder.

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

/// Node index. The root is always node 0.
pub type NodeId = u32;

// ============================================================================
// SampleAccessor
// ============================================================================

/// Random access to the encoded features of one row.
pub trait SampleAccessor {
    fn feature(&self, index: usize) -> f64;
}

impl SampleAccessor for [f64] {
    #[inline]
    fn feature(&self, index: usize) -> f64 {
        self[index]
    }
}

impl<const N: usize> SampleAccessor for [f64; N] {
    #[inline]
    fn feature(&self, index: usize) -> f64 {
        self[index]
    }
}

impl SampleAccessor for ArrayView1<'_, f64> {
    #[inline]
    fn feature(&self, index: usize) -> f64 {
        self[index]
    }
}

// ============================================================================
// Tree
// ============================================================================

/// Immutable binary decision tree.
///
/// Each node is an index into parallel arrays. Split nodes send a row left
/// when `x[feature] < threshold`; rows with a missing (NaN) value follow
/// `default_left`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree<L> {
    split_indices: Vec<u32>,
    thresholds: Vec<f64>,
    left_children: Vec<NodeId>,
    right_children: Vec<NodeId>,
    default_left: Vec<bool>,
    is_leaf: Vec<bool>,
    leaf_values: Vec<L>,
}

impl<L> Tree<L> {
    pub fn n_nodes(&self) -> usize {
        self.is_leaf.len()
    }

    pub fn n_leaves(&self) -> usize {
        self.is_leaf.iter().filter(|&&leaf| leaf).count()
    }

    #[inline]
    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.is_leaf[node as usize]
    }

    #[inline]
    pub fn split_index(&self, node: NodeId) -> u32 {
        self.split_indices[node as usize]
    }

    #[inline]
    pub fn threshold(&self, node: NodeId) -> f64 {
        self.thresholds[node as usize]
    }

    #[inline]
    pub fn leaf_value(&self, node: NodeId) -> &L {
        &self.leaf_values[node as usize]
    }

    /// Depth of the deepest leaf. A single-leaf tree has depth 0.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(0 as NodeId, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            if self.is_leaf(node) {
                max_depth = max_depth.max(depth);
            } else {
                stack.push((self.left_children[node as usize], depth + 1));
                stack.push((self.right_children[node as usize], depth + 1));
            }
        }
        max_depth
    }

    /// Walk from the root to the leaf reached by `sample`.
    #[inline]
    pub fn traverse_to_leaf<S: SampleAccessor + ?Sized>(&self, sample: &S) -> NodeId {
        let mut node: NodeId = 0;
        while !self.is_leaf(node) {
            let fvalue = sample.feature(self.split_index(node) as usize);
            let idx = node as usize;
            node = if fvalue.is_nan() {
                if self.default_left[idx] {
                    self.left_children[idx]
                } else {
                    self.right_children[idx]
                }
            } else if fvalue < self.thresholds[idx] {
                self.left_children[idx]
            } else {
                self.right_children[idx]
            };
        }
        node
    }

    /// Leaf value for one encoded row.
    #[inline]
    pub fn predict_row<S: SampleAccessor + ?Sized>(&self, sample: &S) -> &L {
        self.leaf_value(self.traverse_to_leaf(sample))
    }
}

// ============================================================================
// TreeBuilder
// ============================================================================

/// Mutable tree under construction.
///
/// Nodes are allocated as leaves and turned into splits with
/// [`apply_split`](Self::apply_split), which allocates both children.
#[derive(Debug, Clone)]
pub struct TreeBuilder<L> {
    split_indices: Vec<u32>,
    thresholds: Vec<f64>,
    left_children: Vec<NodeId>,
    right_children: Vec<NodeId>,
    default_left: Vec<bool>,
    is_leaf: Vec<bool>,
    leaf_values: Vec<L>,
}

impl<L: Clone + Default> TreeBuilder<L> {
    pub fn new() -> Self {
        Self {
            split_indices: Vec::new(),
            thresholds: Vec::new(),
            left_children: Vec::new(),
            right_children: Vec::new(),
            default_left: Vec::new(),
            is_leaf: Vec::new(),
            leaf_values: Vec::new(),
        }
    }

    /// Allocate the root node and return its id.
    pub fn init_root(&mut self) -> NodeId {
        debug_assert!(self.is_leaf.is_empty(), "root already initialized");
        self.allocate()
    }

    fn allocate(&mut self) -> NodeId {
        let id = self.is_leaf.len() as NodeId;
        self.split_indices.push(0);
        self.thresholds.push(0.0);
        self.left_children.push(0);
        self.right_children.push(0);
        self.default_left.push(false);
        self.is_leaf.push(true);
        self.leaf_values.push(L::default());
        id
    }

    /// Turn `node` into a numeric split and return `(left, right)`.
    pub fn apply_split(
        &mut self,
        node: NodeId,
        feature: u32,
        threshold: f64,
        default_left: bool,
    ) -> (NodeId, NodeId) {
        let left = self.allocate();
        let right = self.allocate();
        let idx = node as usize;
        self.split_indices[idx] = feature;
        self.thresholds[idx] = threshold;
        self.left_children[idx] = left;
        self.right_children[idx] = right;
        self.default_left[idx] = default_left;
        self.is_leaf[idx] = false;
        (left, right)
    }

    pub fn make_leaf(&mut self, node: NodeId, value: L) {
        let idx = node as usize;
        self.is_leaf[idx] = true;
        self.leaf_values[idx] = value;
    }

    pub fn n_nodes(&self) -> usize {
        self.is_leaf.len()
    }

    pub fn build(self) -> Tree<L> {
        Tree {
            split_indices: self.split_indices,
            thresholds: self.thresholds,
            left_children: self.left_children,
            right_children: self.right_children,
            default_left: self.default_left,
            is_leaf: self.is_leaf,
            leaf_values: self.leaf_values,
        }
    }
}

impl<L: Clone + Default> Default for TreeBuilder<L> {
    fn default() -> Self {
        Self::new()
    }
}
