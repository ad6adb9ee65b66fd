//! ID3 decision tree induction

use crate::data::{majority, Category, Dataset};
use crate::error::{Id3Error, Result};
use crate::export::format_tree;
use crate::training::config::TreeConfig;
use crate::training::entropy::{information_gain, partition};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// Decision tree node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TreeNode {
    /// Leaf node with predicted label
    Leaf {
        label: Category,
        /// Attribute value on the edge from the parent; `None` at the root
        edge: Option<Category>,
        n_samples: usize,
    },
    /// Internal node splitting on a categorical attribute
    Decision {
        attribute: String,
        edge: Option<Category>,
        gain: f64,
        n_samples: usize,
        /// One child per observed value, in order of first appearance
        children: Vec<(Category, TreeNode)>,
    },
}

impl TreeNode {
    pub fn edge(&self) -> Option<&Category> {
        match self {
            TreeNode::Leaf { edge, .. } | TreeNode::Decision { edge, .. } => edge.as_ref(),
        }
    }

    pub fn n_samples(&self) -> usize {
        match self {
            TreeNode::Leaf { n_samples, .. } | TreeNode::Decision { n_samples, .. } => *n_samples,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    /// Child reached by following `value`, if any
    pub fn child(&self, value: &Category) -> Option<&TreeNode> {
        match self {
            TreeNode::Leaf { .. } => None,
            TreeNode::Decision { children, .. } => {
                children.iter().find(|(v, _)| v == value).map(|(_, node)| node)
            }
        }
    }

    fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Decision { children, .. } => {
                1 + children.iter().map(|(_, c)| c.depth()).max().unwrap_or(0)
            }
        }
    }

    fn count_leaves(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Decision { children, .. } => children.iter().map(|(_, c)| c.count_leaves()).sum(),
        }
    }

    fn count_nodes(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Decision { children, .. } => {
                1 + children.iter().map(|(_, c)| c.count_nodes()).sum::<usize>()
            }
        }
    }
}

/// Induce a tree over the rows in `subset`.
///
/// `candidates` are column indices in tie-break order and `target` is the
/// label column. `subset` must be non-empty. Base cases, in priority order:
/// a pure subset becomes a leaf with its single label, then an exhausted
/// attribute list becomes a leaf with the majority label. Otherwise the
/// attribute with the strictly highest gain (first one on ties) splits the
/// subset and each observed value gets its own subtree.
pub fn build_tree(
    data: &Dataset,
    subset: &[usize],
    candidates: &[usize],
    target: usize,
    edge: Option<Category>,
) -> TreeNode {
    let n_samples = subset.len();
    let labels: Vec<&Category> = data.column_values(target, subset).collect();

    if let Some(first) = labels.first() {
        if labels.iter().all(|l| l == first) {
            debug!(label = %first, n_samples, "Pure subset, emitting leaf");
            return TreeNode::Leaf {
                label: (*first).clone(),
                edge,
                n_samples,
            };
        }
    }

    let fallback = majority(labels.iter().copied()).cloned();

    if candidates.is_empty() {
        // An empty subset has no labels at all; callers never pass one.
        let label = fallback.unwrap_or_else(|| Category::new(""));
        debug!(label = %label, n_samples, "No attributes left, emitting majority leaf");
        return TreeNode::Leaf { label, edge, n_samples };
    }

    let mut best_pos = 0;
    let mut best_gain = f64::NEG_INFINITY;
    for (pos, &attr) in candidates.iter().enumerate() {
        let gain = information_gain(data, subset, attr, target);
        if gain > best_gain {
            best_gain = gain;
            best_pos = pos;
        }
    }
    let best_attr = candidates[best_pos];
    let attribute = data.columns()[best_attr].clone();
    debug!(attribute = %attribute, gain = best_gain, n_samples, "Selected split attribute");

    let remaining: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&a| a != best_attr)
        .collect();

    let children = partition(data, subset, best_attr)
        .into_iter()
        .map(|(value, rows)| {
            let child = if rows.is_empty() {
                warn!(attribute = %attribute, value = %value, "Empty partition, using parent majority");
                TreeNode::Leaf {
                    label: fallback.clone().unwrap_or_else(|| value.clone()),
                    edge: Some(value.clone()),
                    n_samples: 0,
                }
            } else {
                build_tree(data, &rows, &remaining, target, Some(value.clone()))
            };
            (value, child)
        })
        .collect();

    TreeNode::Decision {
        attribute,
        edge,
        gain: best_gain,
        n_samples,
        children,
    }
}

/// ID3 classifier over a categorical [`Dataset`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id3Tree {
    /// Tree root
    root: Option<TreeNode>,
    /// Column configuration
    pub config: TreeConfig,
    /// Resolved target column
    target: String,
    /// Resolved candidate attributes
    attributes: Vec<String>,
}

impl Id3Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: TreeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the target column
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.config = self.config.with_target(target);
        self
    }

    /// Set the candidate attributes
    pub fn with_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config = self.config.with_attributes(attributes);
        self
    }

    /// Fit the tree to a dataset
    pub fn fit(&mut self, data: &Dataset) -> Result<&mut Self> {
        if data.is_empty() {
            return Err(Id3Error::ValidationError("cannot build a tree from an empty dataset".to_string()));
        }

        let target = self
            .config
            .target_column
            .clone()
            .unwrap_or_else(|| data.default_target().to_string());
        let target_idx = data.column_index(&target)?;

        let attributes: Vec<String> = match &self.config.attributes {
            Some(attrs) => attrs.clone(),
            None => data.columns().iter().filter(|c| **c != target).cloned().collect(),
        };

        let mut seen = HashSet::new();
        let mut candidates = Vec::with_capacity(attributes.len());
        for name in &attributes {
            if *name == target {
                return Err(Id3Error::InvalidParameter {
                    name: "attributes".to_string(),
                    value: name.clone(),
                    reason: "the target column cannot be a split attribute".to_string(),
                });
            }
            if !seen.insert(name.as_str()) {
                return Err(Id3Error::InvalidParameter {
                    name: "attributes".to_string(),
                    value: name.clone(),
                    reason: "listed more than once".to_string(),
                });
            }
            candidates.push(data.column_index(name)?);
        }

        let subset: Vec<usize> = (0..data.n_rows()).collect();
        let root = build_tree(data, &subset, &candidates, target_idx, None);

        info!(
            target = %target,
            n_rows = data.n_rows(),
            n_attributes = candidates.len(),
            depth = root.depth(),
            leaves = root.count_leaves(),
            "Tree induced"
        );

        self.root = Some(root);
        self.target = target;
        self.attributes = attributes;
        Ok(self)
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_ref()
    }

    pub fn is_fitted(&self) -> bool {
        self.root.is_some()
    }

    /// Target column the tree predicts
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Attributes the tree was allowed to split on
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Predict the label of every row in `data`
    pub fn predict(&self, data: &Dataset) -> Result<Vec<Category>> {
        let root = self.root.as_ref().ok_or(Id3Error::ModelNotFitted)?;

        let index: HashMap<&str, usize> = data
            .columns()
            .iter()
            .enumerate()
            .map(|(i, c)| (c.as_str(), i))
            .collect();

        data.rows()
            .map(|row| Self::predict_row(root, row, &index))
            .collect()
    }

    fn predict_row(node: &TreeNode, row: &[Category], index: &HashMap<&str, usize>) -> Result<Category> {
        match node {
            TreeNode::Leaf { label, .. } => Ok(label.clone()),
            TreeNode::Decision { attribute, .. } => {
                let col = *index
                    .get(attribute.as_str())
                    .ok_or_else(|| Id3Error::FeatureNotFound(attribute.clone()))?;
                let value = &row[col];
                let child = node.child(value).ok_or_else(|| Id3Error::UnseenValue {
                    attribute: attribute.clone(),
                    value: value.to_string(),
                })?;
                Self::predict_row(child, row, index)
            }
        }
    }

    /// Fraction of rows whose prediction matches their recorded target
    pub fn accuracy(&self, data: &Dataset) -> Result<f64> {
        if data.is_empty() {
            return Err(Id3Error::ValidationError("cannot score an empty dataset".to_string()));
        }
        let target_idx = data.column_index(&self.target)?;
        let predictions = self.predict(data)?;
        let correct = predictions
            .iter()
            .zip(data.rows())
            .filter(|(p, row)| **p == row[target_idx])
            .count();
        Ok(correct as f64 / data.n_rows() as f64)
    }

    /// Render the tree as an indented trace
    pub fn format(&self) -> Result<String> {
        let root = self.root.as_ref().ok_or(Id3Error::ModelNotFitted)?;
        Ok(format_tree(root))
    }

    /// Get tree depth
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, TreeNode::depth)
    }

    /// Get number of leaves
    pub fn n_leaves(&self) -> usize {
        self.root.as_ref().map_or(0, TreeNode::count_leaves)
    }

    /// Get number of nodes
    pub fn n_nodes(&self) -> usize {
        self.root.as_ref().map_or(0, TreeNode::count_nodes)
    }

    /// Save the fitted tree as JSON
    pub fn save(&self, path: &str) -> Result<()> {
        if self.root.is_none() {
            return Err(Id3Error::ModelNotFitted);
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a tree saved with [`Id3Tree::save`]
    pub fn load(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let tree: Self = serde_json::from_str(&json)?;
        Ok(tree)
    }
}
