//! id3-tree - ID3 decision tree induction
//!
//! Learns a decision tree from a categorical dataset by repeatedly
//! splitting on the attribute with the highest information gain, and
//! renders the result as an indented text trace.
//!
//! # Modules
//!
//! - [`data`] - Categorical values and datasets
//! - [`training`] - Entropy, information gain and tree induction
//! - [`export`] - Tree formatting and report files
//! - [`utils`] - CSV loading and prediction output
//! - [`cli`] - Command-line interface and batch driver
//!
//! # Example
//!
//! ```
//! use id3_tree::prelude::*;
//!
//! let data = Dataset::from_records(
//!     &["outlook", "play"],
//!     &[vec!["sunny", "no"], vec!["overcast", "yes"], vec!["sunny", "no"]],
//! )?;
//! let mut tree = Id3Tree::new();
//! tree.fit(&data)?;
//! assert_eq!(tree.format()?, "\noutlook = sunny: no\noutlook = overcast: yes");
//! # Ok::<(), id3_tree::Id3Error>(())
//! ```

// Core error handling
pub mod error;

pub mod data;
pub mod training;
pub mod export;
pub mod utils;

// Services
pub mod cli;

pub use error::{Id3Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{Id3Error, Result};

    pub use crate::data::{Category, Dataset};

    pub use crate::training::{build_tree, entropy, information_gain, Id3Tree, TreeConfig, TreeNode};

    pub use crate::export::{format_tree, format_tree_at, ReportWriter};

    pub use crate::utils::DataLoader;
}
