//! Tests for justify-content and main-axis offset accumulation.

use super::*;

fn offsets(justify: JustifyContent, container: f32, sizes: &[f32], gap: f32) -> Vec<f32> {
    let gaps = gap * (sizes.len().saturating_sub(1)) as f32;
    let content: f32 = sizes.iter().sum::<f32>() + gaps;
    let (start_offset, between_spacing) = justify_params(justify, container, content, sizes.len());
    accumulate_main_offsets(
        &MainOffsetPlan {
            reverse: false,
            container_main_size: container,
            start_offset,
            between_spacing,
            main_gap: gap,
        },
        sizes,
    )
}

fn all_near(actual: &[f32], expected: &[f32]) -> bool {
    actual.len() == expected.len()
        && actual
            .iter()
            .zip(expected)
            .all(|(got, want)| near(*got, *want))
}

#[test]
/// # Panics
/// Panics if any justify mode places items at unexpected offsets.
fn justify_modes_place_items() {
    let sizes = [50.0, 50.0, 50.0];
    assert!(all_near(&offsets(JustifyContent::FlexStart, 300.0, &sizes, 0.0), &[0.0, 50.0, 100.0]));
    assert!(all_near(&offsets(JustifyContent::FlexEnd, 300.0, &sizes, 0.0), &[150.0, 200.0, 250.0]));
    assert!(all_near(&offsets(JustifyContent::Center, 300.0, &sizes, 0.0), &[75.0, 125.0, 175.0]));
    assert!(all_near(
        &offsets(JustifyContent::SpaceBetween, 300.0, &sizes, 0.0),
        &[0.0, 125.0, 250.0]
    ));
    assert!(all_near(
        &offsets(JustifyContent::SpaceAround, 300.0, &sizes, 0.0),
        &[25.0, 125.0, 225.0]
    ));
    assert!(all_near(
        &offsets(JustifyContent::SpaceEvenly, 300.0, &sizes, 0.0),
        &[37.5, 125.0, 212.5]
    ));
}

#[test]
/// # Panics
/// Panics if gaps are not inserted between adjacent items only.
fn gaps_separate_items() {
    let placed = offsets(JustifyContent::FlexStart, 300.0, &[50.0, 50.0, 50.0], 10.0);
    assert!(all_near(&placed, &[0.0, 60.0, 120.0]));
    let centered = offsets(JustifyContent::Center, 300.0, &[50.0, 50.0], 20.0);
    assert!(all_near(&centered, &[90.0, 160.0]));
}

#[test]
/// # Panics
/// Panics if negative free space is not distributed per fallback rules.
fn negative_free_space_fallbacks() {
    let (start, between) = justify_params(JustifyContent::SpaceBetween, 100.0, 160.0, 2);
    assert!(near(start, 0.0) && near(between, 0.0));
    let (start_around, _) = justify_params(JustifyContent::SpaceAround, 100.0, 160.0, 2);
    assert!(near(start_around, -30.0));
    let (start_end, _) = justify_params(JustifyContent::FlexEnd, 100.0, 160.0, 2);
    assert!(near(start_end, -60.0));
}

#[test]
/// # Panics
/// Panics if reversed accumulation does not mirror items from the end edge.
fn reverse_accumulates_from_end() {
    let plan = MainOffsetPlan {
        reverse: true,
        container_main_size: 300.0,
        start_offset: 0.0,
        between_spacing: 0.0,
        main_gap: 10.0,
    };
    let placed = accumulate_main_offsets(&plan, &[50.0, 100.0]);
    assert!(all_near(&placed, &[250.0, 140.0]));
}

#[test]
/// # Panics
/// Panics if thirds accumulate without drift.
fn thirds_do_not_drift() {
    let third = 100.0 / 3.0;
    let placed = offsets(JustifyContent::FlexStart, 100.0, &[third, third, third], 0.0);
    assert!(near(placed[2] + third, 100.0));
}
