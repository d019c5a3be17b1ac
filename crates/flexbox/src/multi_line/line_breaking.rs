//! Line breaking logic for multi-line flex layouts.

/// Line start/end indices for items included in the line: `[start, end)`.
pub type LineRange = (usize, usize);

/// Break items into lines by accumulating outer hypothetical sizes and `main_gap` until the
/// next item would exceed `container_main_size`.
///
/// The first item of a line is always placed, however large. A NaN container size never
/// breaks. No items yields no lines.
pub fn break_into_lines(
    container_main_size: f32,
    main_gap: f32,
    outer_sizes: &[f32],
) -> Vec<LineRange> {
    if outer_sizes.is_empty() {
        return Vec::new();
    }
    if container_main_size.is_nan() {
        return vec![(0, outer_sizes.len())];
    }
    let gap = main_gap.max(0.0);
    let mut line_ranges: Vec<LineRange> = Vec::new();
    let mut start = 0usize;
    let mut cursor = 0.0f32;
    for (index, size) in outer_sizes.iter().copied().enumerate() {
        if index == start {
            cursor = size;
            continue;
        }
        let next = cursor + gap + size;
        if next <= container_main_size {
            cursor = next;
        } else {
            line_ranges.push((start, index));
            start = index;
            cursor = size;
        }
    }
    line_ranges.push((start, outer_sizes.len()));
    line_ranges
}
