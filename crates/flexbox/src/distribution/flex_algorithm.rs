//! Flexible length resolution.
//!
//! Free space is distributed by grow factors, or taken away in proportion to
//! `shrink * basis`. Items whose target violates their min/max are clamped and frozen, and
//! the remaining free space is redistributed among the rest. Each pass freezes at least one
//! item, so well-formed input settles within `items.len()` passes; the caller's iteration cap
//! bounds the loop regardless.

use log::{debug, warn};

/// Clamp `value` into `[min, max]`.
///
/// When `min > max` the minimum wins. NaN bounds are ignored and a NaN value is treated as zero.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    let value = if value.is_nan() { 0.0 } else { value };
    value.min(max).max(min)
}

/// One flex item along the main axis.
///
/// All quantities are in points. Margins are physical (leading/trailing along the axis); an
/// auto margin contributes zero to the item's outer size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexItemInput {
    /// Flex base size.
    pub basis: f32,
    pub grow: f32,
    pub shrink: f32,
    pub min_main: f32,
    /// `f32::INFINITY` when unconstrained.
    pub max_main: f32,
    pub margin_start: f32,
    pub margin_end: f32,
    pub margin_start_auto: bool,
    pub margin_end_auto: bool,
}

impl FlexItemInput {
    /// An inflexible item with the given base size and no margins.
    pub const fn with_basis(basis: f32) -> Self {
        Self {
            basis,
            grow: 0.0,
            shrink: 0.0,
            min_main: 0.0,
            max_main: f32::INFINITY,
            margin_start: 0.0,
            margin_end: 0.0,
            margin_start_auto: false,
            margin_end_auto: false,
        }
    }

    /// Base size clamped by the item's min/max.
    #[inline]
    pub fn hypothetical(&self) -> f32 {
        clamp(self.basis, self.min_main, self.max_main)
    }

    /// Sum of the non-auto margins.
    #[inline]
    pub fn fixed_margins(&self) -> f32 {
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

    /// Hypothetical size plus fixed margins.
    #[inline]
    pub fn outer_hypothetical(&self) -> f32 {
        self.hypothetical() + self.fixed_margins()
    }

    fn factor(&self, growing: bool) -> f32 {
        let factor = if growing { self.grow } else { self.shrink };
        if factor.is_nan() { 0.0 } else { factor.max(0.0) }
    }
}

/// Result of [`resolve_flexible_lengths`].
#[derive(Clone, Debug, PartialEq)]
pub struct FlexResolution {
    /// Resolved main size per item, in input order.
    pub sizes: Vec<f32>,
    /// Freeze passes executed.
    pub passes: usize,
    /// True when the iteration cap stopped the loop with items still unfrozen.
    pub capped: bool,
}

/// Free space left once every item takes its frozen target or its base size.
fn remaining_free_space(
    items: &[FlexItemInput],
    targets: &[f32],
    frozen: &[bool],
    space_for_items: f32,
) -> f32 {
    let used: f32 = items
        .iter()
        .zip(targets)
        .zip(frozen)
        .map(|((item, target), is_frozen)| if *is_frozen { *target } else { item.basis })
        .sum();
    space_for_items - used
}

/// Resolve the main size of every item on a line.
///
/// `available_main` is the container's inner main size and `gaps_total` the sum of gaps
/// between items. A NaN `available_main` means the container sizes to content, so every item
/// keeps its hypothetical size.
pub fn resolve_flexible_lengths(
    items: &[FlexItemInput],
    available_main: f32,
    gaps_total: f32,
    iteration_cap: usize,
) -> FlexResolution {
    let mut targets: Vec<f32> = items.iter().map(FlexItemInput::hypothetical).collect();
    if available_main.is_nan() || items.is_empty() {
        return FlexResolution {
            sizes: targets,
            passes: 0,
            capped: false,
        };
    }
    let margins: f32 = items.iter().map(FlexItemInput::fixed_margins).sum();
    let space_for_items = available_main - margins - gaps_total;
    let hypothetical_total: f32 = targets.iter().sum();
    let growing = hypothetical_total < space_for_items;

    // Inflexible items and items already clamped away from their basis never flex.
    let mut frozen: Vec<bool> = items
        .iter()
        .zip(&targets)
        .map(|(item, hypothetical)| {
            item.factor(growing) <= 0.0
                || (growing && item.basis > *hypothetical)
                || (!growing && item.basis < *hypothetical)
        })
        .collect();
    let initial_free = remaining_free_space(items, &targets, &frozen, space_for_items);
    debug!(
        target: "layout::flex",
        "resolve: items={} space={space_for_items:.3} initial_free={initial_free:.3} growing={growing}",
        items.len()
    );

    let mut passes = 0usize;
    while frozen.iter().any(|is_frozen| !*is_frozen) {
        if passes >= iteration_cap {
            warn!(
                target: "layout::flex",
                "flex distribution hit the iteration cap ({iteration_cap}); keeping last clamped sizes"
            );
            return FlexResolution {
                sizes: targets,
                passes,
                capped: true,
            };
        }
        passes += 1;
        freeze_pass(items, &mut targets, &mut frozen, growing, initial_free, space_for_items);
    }
    FlexResolution {
        sizes: targets,
        passes,
        capped: false,
    }
}

/// Distribute the remaining free space once, clamp, and freeze violators.
fn freeze_pass(
    items: &[FlexItemInput],
    targets: &mut [f32],
    frozen: &mut [bool],
    growing: bool,
    initial_free: f32,
    space_for_items: f32,
) {
    let mut remaining = remaining_free_space(items, targets, frozen, space_for_items);
    let unfrozen = || {
        items
            .iter()
            .zip(frozen.iter())
            .filter(|(_, is_frozen)| !**is_frozen)
            .map(|(item, _)| item)
    };
    let factor_sum: f32 = unfrozen().map(|item| item.factor(growing)).sum();
    if factor_sum < 1.0 {
        let scaled = initial_free * factor_sum;
        if scaled.abs() < remaining.abs() {
            remaining = scaled;
        }
    }
    let weight_sum: f32 = if growing {
        factor_sum
    } else {
        unfrozen()
            .map(|item| item.factor(false) * item.basis.max(0.0))
            .sum()
    };

    let mut total_violation = 0.0f32;
    let mut violations = vec![0.0f32; items.len()];
    for (index, item) in items.iter().enumerate() {
        if frozen[index] {
            continue;
        }
        let weight = if growing {
            item.factor(true)
        } else {
            item.factor(false) * item.basis.max(0.0)
        };
        let share = if weight_sum > 0.0 {
            weight / weight_sum
        } else {
            0.0
        };
        let unclamped = remaining.mul_add(share, item.basis);
        let clamped = clamp(unclamped, item.min_main.max(0.0), item.max_main);
        targets[index] = clamped;
        violations[index] = clamped - unclamped;
        total_violation += violations[index];
    }

    for (index, violation) in violations.iter().enumerate() {
        if frozen[index] {
            continue;
        }
        let freeze = if total_violation > 0.0 {
            *violation > 0.0
        } else if total_violation < 0.0 {
            *violation < 0.0
        } else {
            true
        };
        if freeze {
            frozen[index] = true;
        }
    }
    debug!(
        target: "layout::flex",
        "pass: remaining={remaining:.3} violation={total_violation:.3} targets={targets:?}"
    );
}
