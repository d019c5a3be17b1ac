mod common;

use common::{approx, assert_rect, child, init_logging, row, sized};
use layout_engine::{Dimension, Edge, LayoutConfig, LayoutStyle, LayoutTree, LayoutValue};

fn grow(basis: f32) -> LayoutStyle {
    LayoutStyle {
        flex_grow: 1.0,
        flex_basis: LayoutValue::point(basis),
        ..LayoutStyle::default()
    }
}

/// Two 50% children split a row evenly.
#[test]
fn percent_children_split_row() -> anyhow::Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = tree.new_node(row(200.0, 50.0));
    let mut half = LayoutStyle::default();
    half.dimensions[Dimension::Width] = LayoutValue::percent(50.0);
    let first = child(&mut tree, root, half)?;
    let second = child(&mut tree, root, half)?;
    tree.compute_layout(root, f32::NAN, f32::NAN)?;

    assert_rect(&tree, root, [0.0, 0.0, 200.0, 50.0])?;
    assert_rect(&tree, first, [0.0, 0.0, 100.0, 50.0])?;
    assert_rect(&tree, second, [100.0, 0.0, 100.0, 50.0])?;
    Ok(())
}

/// The only growing child takes all the space its fixed siblings leave.
#[test]
fn sole_grow_child_absorbs_leftover() -> anyhow::Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = tree.new_node(row(300.0, 40.0));
    let fixed = child(&mut tree, root, sized(100.0, f32::NAN))?;
    let flexible = child(&mut tree, root, grow(0.0))?;
    tree.compute_layout(root, f32::NAN, f32::NAN)?;

    assert_rect(&tree, fixed, [0.0, 0.0, 100.0, 40.0])?;
    assert_rect(&tree, flexible, [100.0, 0.0, 200.0, 40.0])?;
    Ok(())
}

/// Shrinking is weighted by `flex-shrink * basis`.
#[test]
fn shrink_is_weighted_by_basis() -> anyhow::Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = tree.new_node(row(100.0, 10.0));
    let light = child(&mut tree, root, sized(100.0, f32::NAN))?;
    let heavy = child(
        &mut tree,
        root,
        LayoutStyle {
            flex_shrink: 3.0,
            ..sized(100.0, f32::NAN)
        },
    )?;
    tree.compute_layout(root, f32::NAN, f32::NAN)?;

    assert_rect(&tree, light, [0.0, 0.0, 75.0, 10.0])?;
    assert_rect(&tree, heavy, [75.0, 0.0, 25.0, 10.0])?;
    Ok(())
}

/// A max-clamped item freezes and its share goes to the others.
#[test]
fn clamped_item_redistributes_share() -> anyhow::Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = tree.new_node(row(300.0, 10.0));
    let mut capped = grow(0.0);
    capped.max_dimensions[Dimension::Width] = LayoutValue::point(50.0);
    let first = child(&mut tree, root, capped)?;
    let second = child(&mut tree, root, grow(0.0))?;
    let third = child(&mut tree, root, grow(0.0))?;
    tree.compute_layout(root, f32::NAN, f32::NAN)?;

    assert_rect(&tree, first, [0.0, 0.0, 50.0, 10.0])?;
    assert_rect(&tree, second, [50.0, 0.0, 125.0, 10.0])?;
    assert_rect(&tree, third, [175.0, 0.0, 125.0, 10.0])?;
    assert_eq!(tree.stats().flex_passes, 2);
    assert_eq!(tree.stats().capped_distributions, 0);
    Ok(())
}

/// Hitting the iteration cap keeps the last clamped sizes instead of looping.
#[test]
fn iteration_cap_keeps_last_sizes() -> anyhow::Result<()> {
    init_logging();
    let mut tree = LayoutTree::with_config(LayoutConfig::default().with_flex_iteration_cap(1));
    let root = tree.new_node(row(300.0, 10.0));
    let mut capped = grow(0.0);
    capped.max_dimensions[Dimension::Width] = LayoutValue::point(50.0);
    let first = child(&mut tree, root, capped)?;
    let second = child(&mut tree, root, grow(0.0))?;
    let third = child(&mut tree, root, grow(0.0))?;
    tree.compute_layout(root, f32::NAN, f32::NAN)?;

    assert_rect(&tree, first, [0.0, 0.0, 50.0, 10.0])?;
    assert_rect(&tree, second, [50.0, 0.0, 100.0, 10.0])?;
    assert_rect(&tree, third, [150.0, 0.0, 100.0, 10.0])?;
    assert_eq!(tree.stats().flex_passes, 1);
    assert_eq!(tree.stats().capped_distributions, 1);
    Ok(())
}

/// Minimums that together exceed the container overflow rather than oscillate.
#[test]
fn conflicting_minimums_overflow() -> anyhow::Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = tree.new_node(row(100.0, 10.0));
    let mut children = Vec::new();
    for _ in 0..3 {
        let mut style = sized(50.0, f32::NAN);
        style.min_dimensions[Dimension::Width] = LayoutValue::point(60.0);
        children.push(child(&mut tree, root, style)?);
    }
    tree.compute_layout(root, f32::NAN, f32::NAN)?;

    for (index, node) in children.iter().enumerate() {
        assert_rect(&tree, *node, [60.0 * index as f32, 0.0, 60.0, 10.0])?;
    }
    assert_eq!(tree.stats().capped_distributions, 0);
    Ok(())
}

/// Percentages of an undefined base resolve to zero, never NaN.
#[test]
fn percent_of_undefined_parent_is_zero() -> anyhow::Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = tree.new_node(LayoutStyle::default());
    let mut style = LayoutStyle::default();
    style.dimensions[Dimension::Width] = LayoutValue::percent(50.0);
    style.dimensions[Dimension::Height] = LayoutValue::percent(50.0);
    style.padding[Edge::All] = LayoutValue::percent(10.0);
    style.margin[Edge::All] = LayoutValue::percent(10.0);
    let node = child(&mut tree, root, style)?;
    tree.compute_layout(root, f32::NAN, f32::NAN)?;

    assert_rect(&tree, root, [0.0, 0.0, 0.0, 0.0])?;
    assert_rect(&tree, node, [0.0, 0.0, 0.0, 0.0])?;
    let layout = tree.layout(node)?;
    assert!(layout.padding.iter().all(|edge| approx(*edge, 0.0)));
    assert!(layout.margin.iter().all(|edge| approx(*edge, 0.0)));
    Ok(())
}

/// Padding and border of the container offset its content box.
#[test]
fn container_edges_inset_children() -> anyhow::Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let mut container = row(200.0, 100.0);
    container.padding[Edge::All] = LayoutValue::point(10.0);
    container.border[Edge::All] = LayoutValue::point(5.0);
    let root = tree.new_node(container);
    let item = child(&mut tree, root, sized(50.0, f32::NAN))?;
    tree.compute_layout(root, f32::NAN, f32::NAN)?;

    assert_rect(&tree, item, [15.0, 15.0, 50.0, 70.0])?;
    Ok(())
}

/// A root without a size fills the space it is given, minus its margins.
#[test]
fn root_fills_available_space() -> anyhow::Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let mut style = LayoutStyle::default();
    style.margin[Edge::Left] = LayoutValue::point(10.0);
    let root = tree.new_node(style);
    tree.compute_layout(root, 300.0, 200.0)?;

    assert_rect(&tree, root, [10.0, 0.0, 290.0, 200.0])?;
    Ok(())
}

/// Content-sized containers shrink-wrap their children.
#[test]
fn auto_container_wraps_content() -> anyhow::Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = tree.new_node(row(f32::NAN, f32::NAN));
    child(&mut tree, root, sized(30.0, 20.0))?;
    child(&mut tree, root, sized(40.0, 10.0))?;
    let mut spaced_style = sized(10.0, f32::NAN);
    spaced_style.margin[Edge::Horizontal] = LayoutValue::point(5.0);
    let spaced = child(&mut tree, root, spaced_style)?;
    tree.compute_layout(root, f32::NAN, f32::NAN)?;

    assert_rect(&tree, root, [0.0, 0.0, 90.0, 20.0])?;
    assert_rect(&tree, spaced, [75.0, 0.0, 10.0, 20.0])?;
    Ok(())
}

/// A root max size caps the caller's space instead of replacing it.
#[test]
fn root_max_size_caps_available_space() -> anyhow::Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let mut capped = row(f32::NAN, f32::NAN);
    capped.max_dimensions[Dimension::Width] = LayoutValue::point(500.0);
    let root = tree.new_node(capped);
    let item = child(&mut tree, root, grow(0.0))?;

    tree.compute_layout(root, 300.0, 100.0)?;
    assert_rect(&tree, root, [0.0, 0.0, 300.0, 100.0])?;
    assert_rect(&tree, item, [0.0, 0.0, 300.0, 100.0])?;

    tree.compute_layout(root, 800.0, 100.0)?;
    assert_rect(&tree, root, [0.0, 0.0, 500.0, 100.0])?;
    assert_rect(&tree, item, [0.0, 0.0, 500.0, 100.0])?;
    Ok(())
}
