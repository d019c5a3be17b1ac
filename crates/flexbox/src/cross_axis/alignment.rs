//! Per-item cross-axis alignment within a line.

use crate::AlignItems;
use crate::distribution::clamp;

/// Cross size of an item before alignment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CrossSize {
    /// The item has a definite cross size (or content size that must not stretch).
    Explicit(f32),
    /// The item's cross size is auto; the value is its measured content size.
    Stretch(f32),
}

impl CrossSize {
    /// The size before alignment/stretching.
    pub const fn intrinsic_size(self) -> f32 {
        match self {
            Self::Explicit(size) | Self::Stretch(size) => size,
        }
    }

    pub const fn should_stretch(self) -> bool {
        matches!(self, Self::Stretch(_))
    }
}

/// One item on a line, seen from the cross axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CrossItemInput {
    /// Effective alignment (`align-self`, falling back to the container's `align-items`).
    pub align: AlignItems,
    pub size: CrossSize,
    pub min_cross: f32,
    /// `f32::INFINITY` when unconstrained.
    pub max_cross: f32,
    pub margin_start: f32,
    pub margin_end: f32,
    pub margin_start_auto: bool,
    pub margin_end_auto: bool,
}

impl CrossItemInput {
    fn fixed_margins(&self) -> f32 {
        let start = if self.margin_start_auto {
            0.0
        } else {
            self.margin_start
        };
        let end = if self.margin_end_auto {
            0.0
        } else {
            self.margin_end
        };
        start + end
    }

    fn has_auto_margin(&self) -> bool {
        self.margin_start_auto || self.margin_end_auto
    }

    /// Clamped intrinsic size plus fixed margins.
    pub fn outer_size(&self) -> f32 {
        clamp(self.size.intrinsic_size(), self.min_cross, self.max_cross) + self.fixed_margins()
    }
}

/// Resolved cross-axis size and offset of one item.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct CrossPlacement {
    /// The cross size after stretching and clamping.
    pub cross_size: f32,
    /// Offset of the item's border box from the line's cross-start edge.
    pub cross_offset: f32,
}

/// Cross size of a line: the largest outer size of its items.
pub fn line_cross_size(items: &[CrossItemInput]) -> f32 {
    items
        .iter()
        .map(CrossItemInput::outer_size)
        .fold(0.0f32, f32::max)
}

/// Place `item` within a line of cross size `line_cross`.
///
/// Auto margins absorb the leftover space first (split evenly when both sides are auto) and
/// disable stretching. Otherwise `Stretch` fills the line for auto-sized items and the other
/// modes offset the clamped size. Centering may overflow both edges when the item is larger
/// than its line.
pub fn align_cross(item: &CrossItemInput, line_cross: f32) -> CrossPlacement {
    let fixed_start = if item.margin_start_auto {
        0.0
    } else {
        item.margin_start
    };
    if matches!(item.align, AlignItems::Stretch)
        && item.size.should_stretch()
        && !item.has_auto_margin()
    {
        return CrossPlacement {
            cross_size: clamp(
                line_cross - item.fixed_margins(),
                item.min_cross,
                item.max_cross,
            ),
            cross_offset: fixed_start,
        };
    }

    let size = clamp(item.size.intrinsic_size(), item.min_cross, item.max_cross);
    let free = line_cross - size - item.fixed_margins();
    if item.has_auto_margin() {
        let absorbed = free.max(0.0);
        let offset = match (item.margin_start_auto, item.margin_end_auto) {
            (true, true) => absorbed * 0.5,
            (true, false) => absorbed,
            _ => 0.0,
        };
        return CrossPlacement {
            cross_size: size,
            cross_offset: fixed_start + offset,
        };
    }
    let offset = match item.align {
        AlignItems::Stretch | AlignItems::FlexStart => 0.0,
        AlignItems::Center => free * 0.5,
        AlignItems::FlexEnd => free,
    };
    CrossPlacement {
        cross_size: size,
        cross_offset: fixed_start + offset,
    }
}
