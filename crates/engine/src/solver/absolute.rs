//! Out-of-flow children.
//!
//! An absolute child is sized and placed against its parent's padding box. Insets on both
//! sides of an axis stretch it; one inset pins it; no inset leaves it at its static position,
//! which follows the parent's `justify-content` and the child's `align-self`.

use layout_flexbox::{AlignItems, JustifyContent, clamp};
use layout_values::{Dimension, Direction, LayoutSize, MeasureMode, PhysicalEdge};
use log::trace;

use super::ConstraintSpace;
use super::resolve::{BoxEdges, resolve_box, resolve_max, resolve_min, style_size};
use crate::{LayoutTree, NodeId};

/// The parent of an absolute child, after its own size is known.
#[derive(Debug, Clone, Copy)]
pub(super) struct AbsoluteContainer {
    /// Border-box size.
    pub size: LayoutSize,
    pub edges: BoxEdges,
    pub direction: Direction,
    pub main: Dimension,
    pub main_reverse: bool,
    pub justify: JustifyContent,
    pub align_items: AlignItems,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StaticAlign {
    Start,
    Center,
    End,
}

impl AbsoluteContainer {
    fn padding_box(&self) -> LayoutSize {
        let border = &self.edges.border;
        LayoutSize::new(
            (self.size.width - border[PhysicalEdge::Left] - border[PhysicalEdge::Right]).max(0.0),
            (self.size.height - border[PhysicalEdge::Top] - border[PhysicalEdge::Bottom]).max(0.0),
        )
    }

    fn static_align(&self, dimension: Dimension, align: AlignItems) -> StaticAlign {
        if dimension == self.main {
            match (self.justify, self.main_reverse) {
                (JustifyContent::Center, _) => StaticAlign::Center,
                (JustifyContent::FlexEnd, false)
                | (
                    JustifyContent::FlexStart
                    | JustifyContent::SpaceBetween
                    | JustifyContent::SpaceAround
                    | JustifyContent::SpaceEvenly,
                    true,
                ) => StaticAlign::End,
                _ => StaticAlign::Start,
            }
        } else {
            match align {
                AlignItems::Center => StaticAlign::Center,
                AlignItems::FlexEnd => StaticAlign::End,
                AlignItems::Stretch | AlignItems::FlexStart => StaticAlign::Start,
            }
        }
    }

    /// Position when neither inset of an axis is set.
    fn static_position(
        &self,
        dimension: Dimension,
        align: AlignItems,
        size: f32,
        child: &BoxEdges,
    ) -> f32 {
        let inner_size = (self.size.get(dimension) - self.edges.inner(dimension)).max(0.0);
        let outer = size + child.margin_total(dimension);
        let start = self.edges.inner_lead(dimension) + child.margin[PhysicalEdge::leading(dimension)];
        match self.static_align(dimension, align) {
            StaticAlign::Start => start,
            StaticAlign::Center => (inner_size - outer).mul_add(0.5, start),
            StaticAlign::End => start + inner_size - outer,
        }
    }
}

impl LayoutTree {
    pub(super) fn layout_absolute(&mut self, child: NodeId, container: &AbsoluteContainer) {
        let style = self.node(child).style;
        let direction = style.direction.resolve(container.direction);
        let padding_box = container.padding_box();
        let edges = resolve_box(&style, direction, padding_box.width);
        let mut space = ConstraintSpace::undefined(padding_box, container.direction);
        let mut insets = [(None, None); Dimension::COUNT];
        for dimension in [Dimension::Width, Dimension::Height] {
            let base = padding_box.get(dimension);
            let lead = style
                .inset_for(PhysicalEdge::leading(dimension), direction)
                .resolve(base);
            let trail = style
                .inset_for(PhysicalEdge::trailing(dimension), direction)
                .resolve(base);
            insets[dimension.index()] = (lead, trail);
            let between_insets = match (lead, trail) {
                (Some(lead), Some(trail)) => Some(
                    clamp(
                        base - lead - trail - edges.margin_total(dimension),
                        resolve_min(style.min_dimensions[dimension], base),
                        resolve_max(style.max_dimensions[dimension], base),
                    )
                    .max(edges.inner(dimension)),
                ),
                _ => None,
            };
            match style_size(&style, dimension, padding_box, &edges).or(between_insets) {
                Some(size) => space.set_axis(dimension, size, MeasureMode::Exactly),
                None if dimension == Dimension::Width => space.set_axis(
                    dimension,
                    base - edges.margin_total(dimension),
                    MeasureMode::AtMost,
                ),
                None => {}
            }
        }

        let size = self.compute_node(child, space, true);
        let align = style.align_self.resolve(container.align_items);
        for dimension in [Dimension::Width, Dimension::Height] {
            let lead_edge = PhysicalEdge::leading(dimension);
            let trail_edge = PhysicalEdge::trailing(dimension);
            let extent = size.get(dimension);
            let position = match insets[dimension.index()] {
                (Some(lead), _) => container.edges.border[lead_edge] + lead + edges.margin[lead_edge],
                (None, Some(trail)) => {
                    container.size.get(dimension)
                        - container.edges.border[trail_edge]
                        - trail
                        - edges.margin[trail_edge]
                        - extent
                }
                (None, None) => container.static_position(dimension, align, extent, &edges),
            };
            self.node_mut(child).computed.position[dimension] = position;
        }
        trace!(target: "layout::solver", "absolute {child}: {size:?}");
    }
}
