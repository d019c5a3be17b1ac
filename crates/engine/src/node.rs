//! Arena-resident node records and their layout output.

use core::fmt;

use layout_buffers::FixedBuffer2;
use layout_values::{Dimension, Direction, PhysicalEdgeValues};

use crate::LayoutStyle;
use crate::cache::{ConstraintKey, MeasureCache};

/// Generational handle to a node in a [`crate::LayoutTree`].
///
/// The index addresses an arena slot; the generation is bumped every time the slot is freed,
/// so a handle to a removed node never aliases the slot's next occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    pub(crate) const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    #[inline]
    pub const fn index(self) -> u32 {
        self.index
    }

    #[inline]
    pub const fn generation(self) -> u32 {
        self.generation
    }

    #[inline]
    pub(crate) const fn slot(self) -> usize {
        self.index as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{}v{}", self.index, self.generation)
    }
}

/// Layout freshness of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeState {
    /// Laid out and untouched since.
    Clean,
    /// Style, content or structure changed since the last layout.
    #[default]
    Dirty,
    /// Measured for a parent's sizing query but not yet positioned.
    Measured,
}

/// Parent-relative border box of a node.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Resolved geometry of a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Offset from the parent's border-box origin, indexed by axis (`Width` holds x).
    pub position: FixedBuffer2<f32>,
    /// Border-box size, indexed by axis.
    pub dimensions: FixedBuffer2<f32>,
    pub margin: PhysicalEdgeValues,
    pub border: PhysicalEdgeValues,
    pub padding: PhysicalEdgeValues,
    pub direction: Direction,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            position: FixedBuffer2::filled(0.0),
            dimensions: FixedBuffer2::filled(0.0),
            margin: PhysicalEdgeValues::filled(0.0),
            border: PhysicalEdgeValues::filled(0.0),
            padding: PhysicalEdgeValues::filled(0.0),
            direction: Direction::Ltr,
        }
    }
}

impl Layout {
    pub fn rect(&self) -> LayoutRect {
        LayoutRect {
            x: self.position[Dimension::Width],
            y: self.position[Dimension::Height],
            width: self.dimensions[Dimension::Width],
            height: self.dimensions[Dimension::Height],
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.dimensions[Dimension::Width]
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.dimensions[Dimension::Height]
    }
}

/// One box in the arena. Links are handles, so the record stays `Copy`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutNode {
    pub style: LayoutStyle,
    /// Rounded output handed to consumers.
    pub layout: Layout,
    /// Unrounded solver output; rounding reads this on every pass.
    pub computed: Layout,
    pub state: NodeState,
    pub parent: Option<NodeId>,
    pub first_child: Option<NodeId>,
    pub last_child: Option<NodeId>,
    pub prev_sibling: Option<NodeId>,
    pub next_sibling: Option<NodeId>,
    pub child_count: usize,
    pub cache: MeasureCache,
    pub has_measure: bool,
    /// Constraints of the last full layout, used to skip clean subtrees.
    pub last_layout: Option<ConstraintKey>,
}

impl LayoutNode {
    pub fn with_style(style: LayoutStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }
}

/// Arena slot. A slot that is not `live` sits on the free list.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeSlot {
    pub generation: u32,
    pub live: bool,
    pub node: LayoutNode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if handles do not print index and generation.
    fn node_id_display() {
        assert_eq!(NodeId::new(3, 7).to_string(), "#3v7");
        assert_ne!(NodeId::new(3, 7), NodeId::new(3, 8));
    }

    #[test]
    /// # Panics
    /// Panics if the rect does not mirror position and dimensions.
    fn rect_mirrors_layout() {
        let mut layout = Layout::default();
        layout.position[Dimension::Width] = 4.0;
        layout.position[Dimension::Height] = 6.0;
        layout.dimensions[Dimension::Width] = 10.0;
        layout.dimensions[Dimension::Height] = 20.0;
        assert_eq!(
            layout.rect(),
            LayoutRect {
                x: 4.0,
                y: 6.0,
                width: 10.0,
                height: 20.0
            }
        );
        assert_eq!(NodeState::default(), NodeState::Dirty);
    }
}
