//! Tree induction module
//!
//! Provides the ID3 learner over categorical data:
//! - Shannon entropy and information gain
//! - Recursive partitioning into a [`TreeNode`] tree
//! - [`Id3Tree`] model wrapper with prediction and persistence

mod config;
pub mod entropy;
pub mod id3;

pub use config::TreeConfig;
pub use entropy::{entropy, information_gain, partition};
pub use id3::{build_tree, Id3Tree, TreeNode};
