//! Auto margin resolution along the main axis.

use super::FlexItemInput;

/// Used margins of one item along the main axis.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct MainMargins {
    pub start: f32,
    pub end: f32,
}

impl MainMargins {
    #[inline]
    pub fn total(self) -> f32 {
        self.start + self.end
    }
}

/// Outcome of [`resolve_auto_margins`].
#[derive(Clone, Debug, PartialEq)]
pub struct AutoMarginPlan {
    /// Used margins per item, auto margins included.
    pub margins: Vec<MainMargins>,
    /// Number of auto margin slots on the line.
    pub auto_slots: usize,
    /// Free space left for justify-content.
    pub remaining_free_space: f32,
}

/// Distribute positive free space equally across auto margins.
///
/// When at least one auto margin exists and free space is positive, the auto margins take all of
/// it and justification receives nothing. Otherwise auto margins are zero and the (possibly
/// negative) free space is handed to justification.
pub fn resolve_auto_margins(
    items: &[FlexItemInput],
    sizes: &[f32],
    container_main: f32,
    gaps_total: f32,
) -> AutoMarginPlan {
    let auto_slots = items.iter().fold(0usize, |slots, item| {
        slots
            .saturating_add(usize::from(item.margin_start_auto))
            .saturating_add(usize::from(item.margin_end_auto))
    });
    let used: f32 = items
        .iter()
        .zip(sizes)
        .map(|(item, size)| *size + item.fixed_margins())
        .sum();
    let free = if container_main.is_nan() {
        0.0
    } else {
        container_main - used - gaps_total
    };
    let auto_each = if auto_slots > 0 && free > 0.0 {
        free / auto_slots as f32
    } else {
        0.0
    };
    let margins = items
        .iter()
        .map(|item| MainMargins {
            start: if item.margin_start_auto {
                auto_each
            } else {
                item.margin_start
            },
            end: if item.margin_end_auto {
                auto_each
            } else {
                item.margin_end
            },
        })
        .collect();
    let remaining_free_space = if auto_slots > 0 { free.min(0.0) } else { free };
    AutoMarginPlan {
        margins,
        auto_slots,
        remaining_free_space,
    }
}
