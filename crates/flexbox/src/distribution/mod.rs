//! Main-axis sizing and positioning.
//!
//! Contains flexible length resolution, auto margin absorption, and justification.

pub mod auto_margins;
pub mod flex_algorithm;
pub mod main_axis;

pub use auto_margins::{AutoMarginPlan, MainMargins, resolve_auto_margins};
pub use flex_algorithm::{FlexItemInput, FlexResolution, clamp, resolve_flexible_lengths};
pub use main_axis::{MainOffsetPlan, accumulate_main_offsets, justify_params};
