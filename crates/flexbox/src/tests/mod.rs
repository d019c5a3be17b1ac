//! Tests for the flex math helpers.

use super::*;

mod justify_tests;

/// Helper to create a shrinkable item with zero margins and the given basis.
#[inline]
pub fn item(basis: f32) -> FlexItemInput {
    FlexItemInput {
        shrink: 1.0,
        ..FlexItemInput::with_basis(basis)
    }
}

/// Helper to create three items with basis 50.
#[inline]
pub fn three_items_50() -> Vec<FlexItemInput> {
    vec![item(50.0), item(50.0), item(50.0)]
}

/// Approximate equality for sizes and offsets.
#[inline]
pub fn near(actual: f32, expected: f32) -> bool {
    (actual - expected).abs() < 0.001
}
