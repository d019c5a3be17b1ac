//! Helpers shared by the integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset of the helpers")]

use layout_engine::{Dimension, FlexDirection, LayoutStyle, LayoutTree, LayoutValue, NodeId};

pub const TOLERANCE: f32 = 0.01;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Default (column) style with fixed point sizes. NaN leaves an axis auto.
pub fn sized(width: f32, height: f32) -> LayoutStyle {
    let mut style = LayoutStyle::default();
    if !width.is_nan() {
        style.dimensions[Dimension::Width] = LayoutValue::point(width);
    }
    if !height.is_nan() {
        style.dimensions[Dimension::Height] = LayoutValue::point(height);
    }
    style
}

/// Row container with fixed point sizes. NaN leaves an axis auto.
pub fn row(width: f32, height: f32) -> LayoutStyle {
    LayoutStyle {
        flex_direction: FlexDirection::Row,
        ..sized(width, height)
    }
}

/// Append a new node with `style` under `parent`.
pub fn child(tree: &mut LayoutTree, parent: NodeId, style: LayoutStyle) -> anyhow::Result<NodeId> {
    let node = tree.new_node(style);
    tree.add_child(parent, node)?;
    Ok(node)
}

pub fn approx(actual: f32, expected: f32) -> bool {
    (actual - expected).abs() < TOLERANCE
}

/// Check a node's rounded rect as `[x, y, width, height]`.
///
/// # Panics
/// Panics if any component differs from `expected` by more than [`TOLERANCE`].
pub fn assert_rect(tree: &LayoutTree, node: NodeId, expected: [f32; 4]) -> anyhow::Result<()> {
    let rect = tree.layout(node)?.rect();
    let actual = [rect.x, rect.y, rect.width, rect.height];
    assert!(
        actual
            .iter()
            .zip(&expected)
            .all(|(got, want)| approx(*got, *want)),
        "{node}: expected {expected:?}, got {actual:?}\n{}",
        tree.dump(node)?
    );
    Ok(())
}
