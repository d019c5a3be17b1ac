//! Snapping of final geometry to the sub-pixel grid.
//!
//! Edges are rounded in absolute coordinates and sizes are taken between rounded edges, so
//! adjacent siblings share an edge exactly and error never accumulates down the tree.

use layout_flexbox::quantize;
use layout_values::Dimension;

use crate::{LayoutTree, NodeId};

/// Absolute origin of a node's parent, before and after rounding.
#[derive(Debug, Clone, Copy, Default)]
struct Origin {
    exact: [f32; Dimension::COUNT],
    rounded: [f32; Dimension::COUNT],
}

impl LayoutTree {
    /// Copy every node's computed geometry under `root` into its public layout, rounded.
    pub(super) fn round_layout(&mut self, root: NodeId) {
        let scale = self.config.point_scale_factor;
        let mut pending = vec![(root, Origin::default())];
        while let Some((id, parent)) = pending.pop() {
            let computed = self.node(id).computed;
            let mut layout = computed;
            let mut origin = Origin::default();
            for dimension in [Dimension::Width, Dimension::Height] {
                let axis = dimension.index();
                let start = parent.exact[axis] + computed.position[dimension];
                let end = start + computed.dimensions[dimension];
                let rounded_start = quantize(start, scale);
                layout.position[dimension] = rounded_start - parent.rounded[axis];
                layout.dimensions[dimension] = quantize(end, scale) - rounded_start;
                origin.exact[axis] = start;
                origin.rounded[axis] = rounded_start;
            }
            self.node_mut(id).layout = layout;
            pending.extend(self.children_iter(id).map(|child| (child, origin)));
        }
    }
}
