//! Flexible box math, independent of any node tree.
//!
//! Every function here works on plain main/cross axis quantities so the tree solver can feed it
//! whichever physical axis a container resolves to:
//! - line breaking for wrapping containers,
//! - flexible length resolution with iterative min/max freezing,
//! - auto margins and `justify-content` along the main axis,
//! - `align-items`/`align-self` and `align-content` along the cross axis,
//! - sub-pixel quantisation of final geometry.

mod axis;
mod properties;
mod rounding;

pub mod cross_axis;
pub mod distribution;
pub mod multi_line;

pub use axis::{Axes, resolve_axes};
pub use cross_axis::{CrossItemInput, CrossPlacement, CrossSize, align_cross, line_cross_size};
pub use distribution::{
    AutoMarginPlan, FlexItemInput, FlexResolution, MainMargins, MainOffsetPlan,
    accumulate_main_offsets, clamp, justify_params, resolve_auto_margins,
    resolve_flexible_lengths,
};
pub use multi_line::{LineRange, align_content_params, break_into_lines, stretch_line_crosses};
pub use properties::{
    AlignContent, AlignItems, FlexDirection, FlexWrap, JustifyContent, UnknownKeyword,
};
pub use rounding::quantize;

#[cfg(test)]
mod tests;
