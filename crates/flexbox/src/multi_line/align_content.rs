//! Align-content packing for multi-line flex containers.

use log::debug;

use crate::AlignContent;

/// Compute align-content start offset and between-spacing (excluding gaps) for lines.
///
/// `Stretch` packs like `FlexStart`; its growth is applied by [`stretch_line_crosses`]. Negative
/// free space falls back the same way `justify-content` does.
pub fn align_content_params(
    align: AlignContent,
    container_cross: f32,
    content_total: f32,
    line_count: usize,
) -> (f32, f32) {
    let free = if container_cross.is_nan() {
        0.0
    } else {
        container_cross - content_total
    };
    match (align, line_count) {
        (AlignContent::FlexEnd, _) => (free, 0.0),
        (AlignContent::Center, _) => (free * 0.5, 0.0),
        (AlignContent::SpaceBetween, count) if count > 1 && free > 0.0 => {
            (0.0, free / (count as f32 - 1.0))
        }
        (AlignContent::SpaceAround, count) if count > 0 && free > 0.0 => {
            (free / (count as f32 * 2.0), free / count as f32)
        }
        (AlignContent::SpaceEvenly, count) if count > 0 && free > 0.0 => {
            let slots = count as f32 + 1.0;
            (free / slots, free / slots)
        }
        (AlignContent::SpaceAround | AlignContent::SpaceEvenly, _) if free < 0.0 => {
            (free * 0.5, 0.0)
        }
        _ => (0.0, 0.0),
    }
}

/// Grow line cross sizes to fill the container under `align-content: stretch`.
///
/// Positive leftover space (after gaps) is split equally among lines. Other modes and
/// undefined container sizes return the input unchanged.
pub fn stretch_line_crosses(
    align: AlignContent,
    container_cross: f32,
    line_crosses: &[f32],
    cross_gap: f32,
) -> Vec<f32> {
    let mut stretched = line_crosses.to_vec();
    let line_count = stretched.len();
    if !matches!(align, AlignContent::Stretch) || line_count == 0 || container_cross.is_nan() {
        return stretched;
    }
    let gaps_total = (line_count as f32 - 1.0) * cross_gap.max(0.0);
    let lines_total: f32 = stretched.iter().sum();
    let remaining = container_cross - lines_total - gaps_total;
    if remaining > 0.0 {
        let add_each = remaining / line_count as f32;
        debug!(
            target: "layout::flex",
            "align-content stretch: remaining={remaining:.3} add_each={add_each:.3}"
        );
        for line in &mut stretched {
            *line += add_each;
        }
    }
    stretched
}
