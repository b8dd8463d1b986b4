//! Renders a tree's shape as nested indentation with branch-drawing
//! characters, for human inspection. The right subtree is printed above its
//! node, the left subtree below, so the output reads as the tree rotated a
//! quarter turn counter-clockwise. Rendering never mutates the tree.

use std::fmt;

use crate::tree::{Node, Tree};

impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => fmt::Display::fmt(root, f),
            None => Ok(()),
        }
    }
}

impl<T> fmt::Display for Node<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_subtree(f, self, "", true)
    }
}

fn write_subtree<T>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<T>,
    prefix: &str,
    is_left: bool,
) -> fmt::Result
where
    T: fmt::Display,
{
    if let Some(right) = node.right() {
        let deeper = format!("{}{}", prefix, if is_left { "│   " } else { "    " });
        write_subtree(f, right, &deeper, false)?;
    }
    writeln!(
        f,
        "{}{}{}",
        prefix,
        if is_left { "└── " } else { "┌── " },
        node.value()
    )?;
    if let Some(left) = node.left() {
        let deeper = format!("{}{}", prefix, if is_left { "    " } else { "│   " });
        write_subtree(f, left, &deeper, true)?;
    }
    Ok(())
}
