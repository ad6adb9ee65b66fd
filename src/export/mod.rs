//! Tree rendering and report output
//!
//! - [`format_tree`] renders a tree as an indented trace
//! - [`ReportWriter`] writes dataset + target + trace to a text file
//!
//! JSON persistence of fitted trees lives on
//! [`Id3Tree::save`](crate::training::Id3Tree::save).

mod formatter;
mod report;

pub use formatter::{format_tree, format_tree_at};
pub use report::ReportWriter;
