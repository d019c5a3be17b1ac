//! Main/cross axis resolution.

use crate::FlexDirection;

/// Resolved axes for a flex container.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Axes {
    /// True when the main axis is horizontal.
    pub main_is_row: bool,
    /// True when items flow from the physical end of the main axis.
    pub main_reverse: bool,
}

/// Resolve main-axis orientation and flow for `direction`.
///
/// Right-to-left containers flip horizontal main axes, so `Row` flows like `RowReverse` and
/// vice versa. Column axes are unaffected.
pub const fn resolve_axes(direction: FlexDirection, rtl: bool) -> Axes {
    match direction {
        FlexDirection::Row => Axes {
            main_is_row: true,
            main_reverse: rtl,
        },
        FlexDirection::RowReverse => Axes {
            main_is_row: true,
            main_reverse: !rtl,
        },
        FlexDirection::Column => Axes {
            main_is_row: false,
            main_reverse: false,
        },
        FlexDirection::ColumnReverse => Axes {
            main_is_row: false,
            main_reverse: true,
        },
    }
}
