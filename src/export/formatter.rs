//! Indented text rendering of induced trees

use crate::training::TreeNode;
use std::fmt::{self, Write};

/// Render a tree starting at indentation level 0.
pub fn format_tree(node: &TreeNode) -> String {
    format_tree_at(node, 0)
}

/// Render a tree as a depth-first, pre-order trace.
///
/// A leaf renders as its bare label. A decision node renders one line per
/// child, each preceded by a newline:
///
/// ```text
/// <indent><attribute> = <value>: <child>
/// ```
///
/// where `<indent>` is two spaces per `level`. Children are rendered one
/// level deeper.
pub fn format_tree_at(node: &TreeNode, level: usize) -> String {
    match node {
        TreeNode::Leaf { label, .. } => label.to_string(),
        TreeNode::Decision { attribute, children, .. } => {
            let indent = "  ".repeat(level);
            let mut out = String::new();
            for (value, child) in children {
                // Writing into a String cannot fail.
                let _ = write!(
                    out,
                    "\n{}{} = {}: {}",
                    indent,
                    attribute,
                    value,
                    format_tree_at(child, level + 1)
                );
            }
            out
        }
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_tree(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Category;

    fn leaf(label: &str, edge: &str) -> TreeNode {
        TreeNode::Leaf {
            label: Category::new(label),
            edge: Some(Category::new(edge)),
            n_samples: 1,
        }
    }

    #[test]
    fn test_root_leaf_is_bare_label() {
        let root = TreeNode::Leaf {
            label: Category::new("yes"),
            edge: None,
            n_samples: 4,
        };
        assert_eq!(format_tree(&root), "yes");
        assert_eq!(root.to_string(), "yes");
    }

    #[test]
    fn test_nested_indentation() {
        let inner = TreeNode::Decision {
            attribute: "humidity".to_string(),
            edge: Some(Category::new("sunny")),
            gain: 0.97,
            n_samples: 2,
            children: vec![
                (Category::new("high"), leaf("no", "high")),
                (Category::new("normal"), leaf("yes", "normal")),
            ],
        };
        let root = TreeNode::Decision {
            attribute: "outlook".to_string(),
            edge: None,
            gain: 0.25,
            n_samples: 3,
            children: vec![
                (Category::new("sunny"), inner),
                (Category::new("overcast"), leaf("yes", "overcast")),
            ],
        };

        let expected = "\noutlook = sunny: \n  humidity = high: no\n  humidity = normal: yes\noutlook = overcast: yes";
        assert_eq!(format_tree(&root), expected);
    }

    #[test]
    fn test_start_level_offsets_indent() {
        let node = TreeNode::Decision {
            attribute: "windy".to_string(),
            edge: None,
            gain: 1.0,
            n_samples: 2,
            children: vec![(Category::new("TRUE"), leaf("no", "TRUE"))],
        };
        assert_eq!(format_tree_at(&node, 2), "\n    windy = TRUE: no");
    }
}
