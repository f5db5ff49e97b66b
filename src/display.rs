use std::fmt::Write;

use crate::TreeNodeRef;

pub struct TreeDisplay;

impl TreeDisplay {
    /// Render the subtree rooted at `node`, one node per line.
    ///
    /// ```text
    /// ┏ r
    /// ┣ a
    /// ┃ ┗ x
    /// ┗ b
    /// ```
    pub fn format<R>(node: &R, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    where
        R: TreeNodeRef,
        R::Data: std::fmt::Display,
    {
        // (node, prefix inherited from the ancestors, last child of its parent, is the start node)
        let mut stack: Vec<(R, String, bool, bool)> = vec![(node.clone(), String::new(), true, true)];

        while let Some((node, prefix, last, root)) = stack.pop() {
            let children = node.children();

            if root {
                f.write_char(if children.is_empty() { '━' } else { '┏' })?;
            } else {
                f.write_str(&prefix)?;
                f.write_char(if last { '┗' } else { '┣' })?;
            }

            writeln!(f, " {}", *node.value())?;

            let child_prefix = if root {
                String::new()
            } else if last {
                format!("{}  ", prefix)
            } else {
                format!("{}┃ ", prefix)
            };

            let count = children.len();
            for (index, child) in children.into_iter().enumerate().rev() {
                stack.push((child, child_prefix.clone(), index + 1 == count, false));
            }
        }

        Ok(())
    }
}
