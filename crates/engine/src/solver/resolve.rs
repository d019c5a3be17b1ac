//! Style-to-number resolution shared by the solver passes.

use layout_flexbox::clamp;
use layout_values::{Dimension, Direction, LayoutSize, LayoutValue, MeasureMode, PhysicalEdge, PhysicalEdgeValues, Unit};

use super::ConstraintSpace;
use crate::LayoutStyle;

/// Resolved margin, border and padding of one node.
#[derive(Debug, Clone, Copy)]
pub struct BoxEdges {
    pub margin: PhysicalEdgeValues,
    pub border: PhysicalEdgeValues,
    pub padding: PhysicalEdgeValues,
    /// Which margins are `auto`, by physical edge.
    pub auto_margin: [bool; PhysicalEdge::COUNT],
}

impl BoxEdges {
    /// Padding plus border across `dimension`.
    pub fn inner(&self, dimension: Dimension) -> f32 {
        let lead = PhysicalEdge::leading(dimension);
        let trail = PhysicalEdge::trailing(dimension);
        self.padding[lead] + self.border[lead] + self.padding[trail] + self.border[trail]
    }

    pub fn inner_lead(&self, dimension: Dimension) -> f32 {
        let lead = PhysicalEdge::leading(dimension);
        self.padding[lead] + self.border[lead]
    }

    /// Margins across `dimension`, with `auto` counted as zero.
    pub fn margin_total(&self, dimension: Dimension) -> f32 {
        self.margin[PhysicalEdge::leading(dimension)] + self.margin[PhysicalEdge::trailing(dimension)]
    }

    pub fn is_auto(&self, edge: PhysicalEdge) -> bool {
        self.auto_margin[edge.index()]
    }
}

/// Resolve the box edges of `style`. Every edge percentage is taken of the owner's width.
pub fn resolve_box(style: &LayoutStyle, direction: Direction, owner_width: f32) -> BoxEdges {
    let mut edges = BoxEdges {
        margin: PhysicalEdgeValues::filled(0.0),
        border: PhysicalEdgeValues::filled(0.0),
        padding: PhysicalEdgeValues::filled(0.0),
        auto_margin: [false; PhysicalEdge::COUNT],
    };
    for edge in PhysicalEdge::ALL {
        let margin = style.margin_for(edge, direction);
        edges.auto_margin[edge.index()] = margin.is_auto();
        edges.margin[edge] = margin.resolve_or(owner_width, 0.0);
        edges.border[edge] = non_negative(style.border_for(edge, direction).resolve_or(owner_width, 0.0));
        edges.padding[edge] = non_negative(style.padding_for(edge, direction).resolve_or(owner_width, 0.0));
    }
    edges
}

/// Negative and NaN lengths collapse to zero.
#[inline]
pub fn non_negative(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value.max(0.0) }
}

/// Lower size bound; undefined means zero.
pub fn resolve_min(value: LayoutValue, base: f32) -> f32 {
    non_negative(value.resolve_or(base, 0.0))
}

/// Upper size bound; undefined means unbounded. A percentage of an undefined base bounds
/// nothing.
pub fn resolve_max(value: LayoutValue, base: f32) -> f32 {
    if matches!(value.unit(), Unit::Percent) && base.is_nan() {
        return f32::INFINITY;
    }
    value.resolve(base).map_or(f32::INFINITY, non_negative)
}

/// Style size along `dimension`, clamped to min/max and floored at padding plus border.
pub fn style_size(
    style: &LayoutStyle,
    dimension: Dimension,
    owner: LayoutSize,
    edges: &BoxEdges,
) -> Option<f32> {
    let base = owner.get(dimension);
    let size = style.dimensions[dimension].resolve(base)?;
    let bounded = clamp(
        non_negative(size),
        resolve_min(style.min_dimensions[dimension], base),
        resolve_max(style.max_dimensions[dimension], base),
    );
    Some(bounded.max(edges.inner(dimension)))
}

/// Tighten the incoming constraints with the node's own size styles.
///
/// A definite style size turns a non-exact axis into `Exactly`; a max size turns it into
/// `AtMost`. Constraints the parent already pinned are left alone.
pub fn constrain_space(
    style: &LayoutStyle,
    space: ConstraintSpace,
    edges: &BoxEdges,
) -> ConstraintSpace {
    let mut constrained = space;
    for dimension in [Dimension::Width, Dimension::Height] {
        let mode = space.mode(dimension);
        if mode.is_exact() {
            continue;
        }
        let available = space.available.get(dimension);
        if let Some(size) = style_size(style, dimension, space.owner, edges) {
            constrained.available.set(dimension, size);
            constrained.set_mode(dimension, MeasureMode::Exactly);
            continue;
        }
        let max = resolve_max(style.max_dimensions[dimension], space.owner.get(dimension));
        if max.is_finite() {
            let capped = if matches!(mode, MeasureMode::AtMost) && !available.is_nan() {
                available.min(max)
            } else {
                max
            };
            constrained.available.set(dimension, capped);
            constrained.set_mode(dimension, MeasureMode::AtMost);
        }
    }
    constrained
}

/// Final border-box size along one axis from its content size.
///
/// `content` is the inner size the children or the measure function asked for.
pub fn fit_size(
    content: f32,
    dimension: Dimension,
    space: &ConstraintSpace,
    style: &LayoutStyle,
    edges: &BoxEdges,
) -> f32 {
    let available = space.available.get(dimension);
    let mode = space.mode(dimension);
    let inner = edges.inner(dimension);
    if mode.is_exact() && !available.is_nan() {
        return available.max(inner);
    }
    let natural = non_negative(content) + inner;
    let constrained = mode.constrain(natural, available);
    let base = space.owner.get(dimension);
    clamp(
        constrained,
        resolve_min(style.min_dimensions[dimension], base),
        resolve_max(style.max_dimensions[dimension], base),
    )
    .max(inner)
}

/// Available inner size for children; NaN when the axis is unconstrained.
pub fn inner_available(space: &ConstraintSpace, dimension: Dimension, edges: &BoxEdges) -> f32 {
    let available = space.available.get(dimension);
    if available.is_nan() {
        f32::NAN
    } else {
        (available - edges.inner(dimension)).max(0.0)
    }
}
