mod common;

use common::{assert_rect, child, init_logging, row, sized};
use layout_engine::{
    AlignContent, AlignItems, AlignSelf, Dimension, Direction, Edge, FlexDirection, FlexWrap,
    JustifyContent, LayoutStyle, LayoutTree, LayoutValue, NodeId,
};

/// A container with `count` fixed-size children.
fn container(
    tree: &mut LayoutTree,
    style: LayoutStyle,
    count: usize,
    item: (f32, f32),
) -> anyhow::Result<(NodeId, Vec<NodeId>)> {
    let root = tree.new_node(style);
    let mut children = Vec::with_capacity(count);
    for _ in 0..count {
        children.push(child(tree, root, sized(item.0, item.1))?);
    }
    Ok((root, children))
}

fn justified(justify: JustifyContent) -> LayoutStyle {
    LayoutStyle {
        justify_content: justify,
        ..row(300.0, 50.0)
    }
}

fn wrapping(wrap: FlexWrap, height: f32) -> LayoutStyle {
    LayoutStyle {
        flex_wrap: wrap,
        ..row(120.0, height)
    }
}

#[test]
fn justify_space_between() -> anyhow::Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let (root, items) = container(&mut tree, justified(JustifyContent::SpaceBetween), 3, (50.0, 20.0))?;
    tree.compute_layout(root, f32::NAN, f32::NAN)?;

    assert_rect(&tree, items[0], [0.0, 0.0, 50.0, 20.0])?;
    assert_rect(&tree, items[1], [125.0, 0.0, 50.0, 20.0])?;
    assert_rect(&tree, items[2], [250.0, 0.0, 50.0, 20.0])?;
    Ok(())
}

#[test]
fn justify_space_around_and_evenly() -> anyhow::Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let (around, around_items) =
        container(&mut tree, justified(JustifyContent::SpaceAround), 2, (50.0, 20.0))?;
    let (evenly, evenly_items) =
        container(&mut tree, justified(JustifyContent::SpaceEvenly), 3, (60.0, 20.0))?;
    tree.compute_layout(around, f32::NAN, f32::NAN)?;
    tree.compute_layout(evenly, f32::NAN, f32::NAN)?;

    assert_rect(&tree, around_items[0], [50.0, 0.0, 50.0, 20.0])?;
    assert_rect(&tree, around_items[1], [200.0, 0.0, 50.0, 20.0])?;
    assert_rect(&tree, evenly_items[0], [30.0, 0.0, 60.0, 20.0])?;
    assert_rect(&tree, evenly_items[1], [120.0, 0.0, 60.0, 20.0])?;
    assert_rect(&tree, evenly_items[2], [210.0, 0.0, 60.0, 20.0])?;
    Ok(())
}

/// Gaps count as content when centring.
#[test]
fn justify_center_with_gap() -> anyhow::Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let mut style = justified(JustifyContent::Center);
    style.gap[Dimension::Width] = 10.0;
    let (root, items) = container(&mut tree, style, 2, (50.0, 20.0))?;
    tree.compute_layout(root, f32::NAN, f32::NAN)?;

    assert_rect(&tree, items[0], [95.0, 0.0, 50.0, 20.0])?;
    assert_rect(&tree, items[1], [155.0, 0.0, 50.0, 20.0])?;
    Ok(())
}

#[test]
fn justify_flex_end() -> anyhow::Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let (root, items) = container(&mut tree, justified(JustifyContent::FlexEnd), 2, (50.0, 20.0))?;
    tree.compute_layout(root, f32::NAN, f32::NAN)?;

    assert_rect(&tree, items[0], [200.0, 0.0, 50.0, 20.0])?;
    assert_rect(&tree, items[1], [250.0, 0.0, 50.0, 20.0])?;
    Ok(())
}

#[test]
fn align_items_and_self() -> anyhow::Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = tree.new_node(LayoutStyle {
        align_items: AlignItems::Center,
        ..row(200.0, 100.0)
    });
    let centered = child(&mut tree, root, sized(20.0, 20.0))?;
    let end = child(
        &mut tree,
        root,
        LayoutStyle {
            align_self: AlignSelf::FlexEnd,
            ..sized(20.0, 20.0)
        },
    )?;
    let stretched = child(
        &mut tree,
        root,
        LayoutStyle {
            align_self: AlignSelf::Stretch,
            ..sized(20.0, f32::NAN)
        },
    )?;
    tree.compute_layout(root, f32::NAN, f32::NAN)?;

    assert_rect(&tree, centered, [0.0, 40.0, 20.0, 20.0])?;
    assert_rect(&tree, end, [20.0, 80.0, 20.0, 20.0])?;
    assert_rect(&tree, stretched, [40.0, 0.0, 20.0, 100.0])?;
    Ok(())
}

/// Auto margins absorb free space before justification.
#[test]
fn auto_margins_take_free_space() -> anyhow::Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = tree.new_node(justified(JustifyContent::Center));
    let mut pushed = sized(50.0, 20.0);
    pushed.margin[Edge::Right] = LayoutValue::auto();
    let first = child(&mut tree, root, pushed)?;
    let second = child(&mut tree, root, sized(50.0, 20.0))?;
    tree.compute_layout(root, f32::NAN, f32::NAN)?;

    assert_rect(&tree, first, [0.0, 0.0, 50.0, 20.0])?;
    assert_rect(&tree, second, [250.0, 0.0, 50.0, 20.0])?;
    Ok(())
}

#[test]
fn auto_margins_center_both_axes() -> anyhow::Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = tree.new_node(row(300.0, 100.0));
    let mut centered = sized(50.0, 20.0);
    centered.margin[Edge::All] = LayoutValue::auto();
    let item = child(&mut tree, root, centered)?;
    tree.compute_layout(root, f32::NAN, f32::NAN)?;

    assert_rect(&tree, item, [125.0, 40.0, 50.0, 20.0])?;
    Ok(())
}

#[test]
fn wrap_breaks_lines() -> anyhow::Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let (root, items) = container(&mut tree, wrapping(FlexWrap::Wrap, f32::NAN), 3, (50.0, 20.0))?;
    tree.compute_layout(root, f32::NAN, f32::NAN)?;

    assert_rect(&tree, root, [0.0, 0.0, 120.0, 40.0])?;
    assert_rect(&tree, items[0], [0.0, 0.0, 50.0, 20.0])?;
    assert_rect(&tree, items[1], [50.0, 0.0, 50.0, 20.0])?;
    assert_rect(&tree, items[2], [0.0, 20.0, 50.0, 20.0])?;
    Ok(())
}

#[test]
fn wrap_with_row_gap() -> anyhow::Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let mut style = wrapping(FlexWrap::Wrap, f32::NAN);
    style.gap[Dimension::Height] = 10.0;
    let (root, items) = container(&mut tree, style, 3, (50.0, 20.0))?;
    tree.compute_layout(root, f32::NAN, f32::NAN)?;

    assert_rect(&tree, root, [0.0, 0.0, 120.0, 50.0])?;
    assert_rect(&tree, items[2], [0.0, 30.0, 50.0, 20.0])?;
    Ok(())
}

/// `wrap-reverse` stacks lines from the cross end.
#[test]
fn wrap_reverse_flips_lines() -> anyhow::Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let (root, items) = container(&mut tree, wrapping(FlexWrap::WrapReverse, 100.0), 3, (50.0, 20.0))?;
    tree.compute_layout(root, f32::NAN, f32::NAN)?;

    assert_rect(&tree, items[0], [0.0, 80.0, 50.0, 20.0])?;
    assert_rect(&tree, items[1], [50.0, 80.0, 50.0, 20.0])?;
    assert_rect(&tree, items[2], [0.0, 60.0, 50.0, 20.0])?;
    Ok(())
}

#[test]
fn align_content_space_between() -> anyhow::Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let style = LayoutStyle {
        align_content: AlignContent::SpaceBetween,
        ..wrapping(FlexWrap::Wrap, 100.0)
    };
    let (root, items) = container(&mut tree, style, 3, (50.0, 20.0))?;
    tree.compute_layout(root, f32::NAN, f32::NAN)?;

    assert_rect(&tree, items[0], [0.0, 0.0, 50.0, 20.0])?;
    assert_rect(&tree, items[2], [0.0, 80.0, 50.0, 20.0])?;
    Ok(())
}

/// Stretched lines share the leftover cross space and stretch their items.
#[test]
fn align_content_stretch_grows_lines() -> anyhow::Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let style = LayoutStyle {
        align_content: AlignContent::Stretch,
        ..wrapping(FlexWrap::Wrap, 100.0)
    };
    let (root, items) = container(&mut tree, style, 3, (50.0, f32::NAN))?;
    tree.compute_layout(root, f32::NAN, f32::NAN)?;

    assert_rect(&tree, items[0], [0.0, 0.0, 50.0, 50.0])?;
    assert_rect(&tree, items[1], [50.0, 0.0, 50.0, 50.0])?;
    assert_rect(&tree, items[2], [0.0, 50.0, 50.0, 50.0])?;
    Ok(())
}

#[test]
fn reversed_row_and_column() -> anyhow::Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let row_root = tree.new_node(LayoutStyle {
        flex_direction: FlexDirection::RowReverse,
        ..row(300.0, 50.0)
    });
    let narrow = child(&mut tree, row_root, sized(50.0, f32::NAN))?;
    let wide = child(&mut tree, row_root, sized(100.0, f32::NAN))?;
    let column_root = tree.new_node(LayoutStyle {
        flex_direction: FlexDirection::ColumnReverse,
        ..sized(100.0, 200.0)
    });
    let tall = child(&mut tree, column_root, sized(f32::NAN, 50.0))?;
    let short = child(&mut tree, column_root, sized(f32::NAN, 30.0))?;
    tree.compute_layout(row_root, f32::NAN, f32::NAN)?;
    tree.compute_layout(column_root, f32::NAN, f32::NAN)?;

    assert_rect(&tree, narrow, [250.0, 0.0, 50.0, 50.0])?;
    assert_rect(&tree, wide, [150.0, 0.0, 100.0, 50.0])?;
    assert_rect(&tree, tall, [0.0, 150.0, 100.0, 50.0])?;
    assert_rect(&tree, short, [0.0, 120.0, 100.0, 30.0])?;
    Ok(())
}

/// Right-to-left rows flow from the right and map `start` margins to the right edge.
#[test]
fn rtl_row_flows_from_right() -> anyhow::Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = tree.new_node(LayoutStyle {
        direction: Direction::Rtl,
        ..row(300.0, 50.0)
    });
    let mut first_style = sized(50.0, f32::NAN);
    first_style.margin[Edge::Start] = LayoutValue::point(10.0);
    let first = child(&mut tree, root, first_style)?;
    let second = child(&mut tree, root, sized(100.0, f32::NAN))?;
    tree.compute_layout(root, f32::NAN, f32::NAN)?;

    assert_rect(&tree, first, [240.0, 0.0, 50.0, 50.0])?;
    assert_rect(&tree, second, [140.0, 0.0, 100.0, 50.0])?;
    assert_eq!(tree.layout(first)?.direction, Direction::Rtl);
    Ok(())
}
