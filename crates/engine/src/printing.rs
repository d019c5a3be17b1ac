use core::fmt::{self, Write};

use crate::{LayoutError, LayoutTree, NodeId};

fn write_indent(out: &mut impl Write, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        out.write_str("  ")?;
    }
    Ok(())
}

/// Display adapter for one subtree.
struct Subtree<'tree> {
    tree: &'tree LayoutTree,
    root: NodeId,
}

impl fmt::Display for Subtree<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tree.write_node(formatter, self.root, 0)
    }
}

impl LayoutTree {
    /// Indented dump of the subtree under `root`, one line per node with its rounded rect.
    ///
    /// # Errors
    /// [`LayoutError::NodeNotFound`] when `root` is stale.
    pub fn dump(&self, root: NodeId) -> Result<String, LayoutError> {
        self.lookup(root)?;
        Ok(Subtree { tree: self, root }.to_string())
    }

    fn write_node(&self, out: &mut impl Write, node: NodeId, depth: usize) -> fmt::Result {
        let record = self.node(node);
        let rect = record.layout.rect();
        write_indent(out, depth)?;
        writeln!(
            out,
            "{node} [{:?}] x={} y={} w={} h={}{}",
            record.state,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            if record.has_measure { " measured" } else { "" }
        )?;
        for child in self.children_iter(node) {
            self.write_node(out, child, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Debug for LayoutTree {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "LAYOUT ({} nodes)", self.len())?;
        for index in 0..self.slots.len() {
            let slot = self.slots[index];
            if slot.live && slot.node.parent.is_none() {
                self.write_node(formatter, NodeId::new(index as u32, slot.generation), 1)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use layout_values::{Dimension, LayoutValue};

    use crate::LayoutStyle;

    use super::*;

    #[test]
    /// # Panics
    /// Panics if the dump does not list children indented under their parent.
    fn dump_is_indented() {
        let mut tree = LayoutTree::new();
        let mut style = LayoutStyle::default();
        style.dimensions[Dimension::Width] = LayoutValue::point(20.0);
        style.dimensions[Dimension::Height] = LayoutValue::point(10.0);
        let root = tree.new_node(style);
        let child = tree.new_node(LayoutStyle::default());
        assert_eq!(tree.add_child(root, child).ok(), Some(()));
        assert_eq!(tree.compute_layout(root, f32::NAN, f32::NAN).ok(), Some(()));
        let dump = tree.dump(root).ok();
        let expected = format!("{root} [Clean] x=0 y=0 w=20 h=10\n  {child} [Clean] x=0 y=0 w=20 h=0\n");
        assert_eq!(dump, Some(expected));
        assert!(format!("{tree:?}").starts_with("LAYOUT (2 nodes)"));
    }
}
