//! Main-axis justification and positioning logic.

use crate::JustifyContent;

/// Compute justify-content start offset and between-spacing (excluding gaps).
///
/// Negative free space is honoured: `FlexEnd` overflows the start edge, `Center` overflows both
/// edges equally, and the space-distributing modes fall back to `FlexStart` (between) or
/// `Center` (around, evenly).
pub fn justify_params(
    justify: JustifyContent,
    container_main: f32,
    content_total: f32,
    item_count: usize,
) -> (f32, f32) {
    let free = if container_main.is_nan() {
        0.0
    } else {
        container_main - content_total
    };
    match (justify, item_count) {
        (JustifyContent::FlexEnd, _) => (free, 0.0),
        (JustifyContent::Center, _) => (free * 0.5, 0.0),
        (JustifyContent::SpaceBetween, count) if count > 1 && free > 0.0 => {
            (0.0, free / (count as f32 - 1.0))
        }
        (JustifyContent::SpaceAround, count) if count > 0 && free > 0.0 => {
            (free / (count as f32 * 2.0), free / count as f32)
        }
        (JustifyContent::SpaceEvenly, count) if count > 0 && free > 0.0 => {
            let slots = count as f32 + 1.0;
            (free / slots, free / slots)
        }
        (JustifyContent::SpaceAround | JustifyContent::SpaceEvenly, _) if free < 0.0 => {
            (free * 0.5, 0.0)
        }
        _ => (0.0, 0.0),
    }
}

/// Parameters for planning main-axis offset accumulation.
#[derive(Copy, Clone, Debug)]
pub struct MainOffsetPlan {
    /// Whether items flow from the physical end of the axis.
    pub reverse: bool,
    /// The container's inner main size.
    pub container_main_size: f32,
    /// Offset of the first item from the flow-start edge.
    pub start_offset: f32,
    /// Extra spacing between items from justify-content (excludes gaps).
    pub between_spacing: f32,
    /// Gap between adjacent items.
    pub main_gap: f32,
}

/// Physical offset of each item's outer (margin) box, in input order.
///
/// Offsets are accumulated in full precision; rounding happens once on final geometry.
pub fn accumulate_main_offsets(plan: &MainOffsetPlan, outer_sizes: &[f32]) -> Vec<f32> {
    let spacing = plan.main_gap + plan.between_spacing;
    let mut offsets = Vec::with_capacity(outer_sizes.len());
    let mut sizes = outer_sizes.iter().peekable();
    if plan.reverse {
        // Earlier items sit at larger coordinates.
        let mut cursor = plan.container_main_size - plan.start_offset;
        while let Some(size) = sizes.next() {
            cursor -= *size;
            offsets.push(cursor);
            if sizes.peek().is_some() {
                cursor -= spacing;
            }
        }
    } else {
        let mut cursor = plan.start_offset;
        while let Some(size) = sizes.next() {
            offsets.push(cursor);
            cursor += *size;
            if sizes.peek().is_some() {
                cursor += spacing;
            }
        }
    }
    offsets
}
