//! Default style and engine values.

use crate::{DimensionValues, EdgeValues, InsetValues, LayoutValue};

pub const FLEX_GROW: f32 = 0.0;
pub const FLEX_SHRINK: f32 = 1.0;
pub const FLEX_BASIS: LayoutValue = LayoutValue::AUTO;

/// Sub-pixel grid used when rounding final geometry (1/64 of a point).
pub const POINT_SCALE_FACTOR: f32 = 64.0;
/// Upper bound on freeze passes in flexible-length resolution.
pub const FLEX_ITERATION_CAP: usize = 128;

/// Margin, padding and border slots start out unset.
pub const EDGES: EdgeValues = EdgeValues::filled(LayoutValue::UNDEFINED);
pub const INSETS: InsetValues = InsetValues::filled(LayoutValue::UNDEFINED);
pub const DIMENSIONS: DimensionValues = DimensionValues::filled(LayoutValue::AUTO);
pub const MIN_DIMENSIONS: DimensionValues = DimensionValues::filled(LayoutValue::UNDEFINED);
pub const MAX_DIMENSIONS: DimensionValues = DimensionValues::filled(LayoutValue::UNDEFINED);
