//! Flex container sizing and arrangement.
//!
//! The container gathers its in-flow children, breaks them into lines, resolves flexible
//! lengths per line and sizes the cross axis. In a perform pass it then positions every line
//! and item and lays each child out with both axes pinned.

use layout_flexbox::{
    AlignContent, AlignItems, Axes, CrossItemInput, CrossSize, FlexItemInput, FlexWrap,
    JustifyContent, LineRange, MainOffsetPlan, accumulate_main_offsets, align_content_params,
    align_cross, break_into_lines, justify_params, line_cross_size, resolve_auto_margins,
    resolve_axes, resolve_flexible_lengths, stretch_line_crosses,
};
use layout_values::{Dimension, Direction, LayoutSize, MeasureMode, PhysicalEdge};
use log::debug;
use smallvec::SmallVec;

use super::ConstraintSpace;
use super::absolute::AbsoluteContainer;
use super::resolve::{
    BoxEdges, fit_size, inner_available, non_negative, resolve_box, resolve_max, resolve_min,
    style_size,
};
use crate::style::{Display, PositionType};
use crate::{LayoutStyle, LayoutTree, NodeId};

/// Axis bookkeeping for one container.
#[derive(Debug, Clone, Copy)]
struct FlexContext {
    axes: Axes,
    main: Dimension,
    cross: Dimension,
    wrap: FlexWrap,
    main_gap: f32,
    cross_gap: f32,
    /// Inner space offered before the container is sized. NaN when unconstrained.
    available_main: f32,
    available_cross: f32,
    cross_exact: bool,
    /// Percentage base handed to children.
    child_owner: LayoutSize,
    direction: Direction,
    align_items: AlignItems,
}

impl FlexContext {
    fn new(style: &LayoutStyle, space: &ConstraintSpace, edges: &BoxEdges) -> Self {
        let axes = resolve_axes(style.flex_direction, space.direction.is_rtl());
        let main = if axes.main_is_row {
            Dimension::Width
        } else {
            Dimension::Height
        };
        let cross = main.other();
        let exact_inner = |dimension: Dimension| {
            if space.mode(dimension).is_exact() {
                inner_available(space, dimension, edges)
            } else {
                f32::NAN
            }
        };
        Self {
            axes,
            main,
            cross,
            wrap: style.flex_wrap,
            main_gap: non_negative(style.gap[main]),
            cross_gap: non_negative(style.gap[cross]),
            available_main: inner_available(space, main, edges),
            available_cross: inner_available(space, cross, edges),
            cross_exact: space.mode(cross).is_exact(),
            child_owner: LayoutSize::new(
                exact_inner(Dimension::Width),
                exact_inner(Dimension::Height),
            ),
            direction: space.direction,
            align_items: style.align_items,
        }
    }

    fn gaps(&self, count: usize) -> f32 {
        self.main_gap * count.saturating_sub(1) as f32
    }

    /// Physical size from main and cross extents.
    fn size(&self, main: f32, cross: f32) -> LayoutSize {
        let mut size = LayoutSize::ZERO;
        size.set(self.main, main);
        size.set(self.cross, cross);
        size
    }

    fn break_lines(&self, children: &[FlexChild]) -> Vec<LineRange> {
        if children.is_empty() {
            return Vec::new();
        }
        if self.wrap == FlexWrap::NoWrap {
            return vec![(0, children.len())];
        }
        let outer: Vec<f32> = children
            .iter()
            .map(|child| child.item.outer_hypothetical())
            .collect();
        break_into_lines(self.available_main, self.main_gap, &outer)
    }
}

/// An in-flow child as seen by its container.
#[derive(Debug, Clone, Copy)]
struct FlexChild {
    id: NodeId,
    direction: Direction,
    edges: BoxEdges,
    item: FlexItemInput,
    align: AlignItems,
    explicit_cross: Option<f32>,
    min_cross: f32,
    max_cross: f32,
    main_size: f32,
    cross_size: CrossSize,
}

impl FlexChild {
    fn has_cross_auto_margin(&self, ctx: &FlexContext) -> bool {
        self.edges.is_auto(PhysicalEdge::leading(ctx.cross))
            || self.edges.is_auto(PhysicalEdge::trailing(ctx.cross))
    }

    fn stretches(&self, ctx: &FlexContext) -> bool {
        self.align == AlignItems::Stretch
            && self.explicit_cross.is_none()
            && !self.has_cross_auto_margin(ctx)
    }

    /// Cross-axis input, with the margins flipped for `wrap-reverse`.
    fn cross_input(&self, ctx: &FlexContext) -> CrossItemInput {
        let lead = PhysicalEdge::leading(ctx.cross);
        let trail = PhysicalEdge::trailing(ctx.cross);
        let (start, end) = if ctx.wrap == FlexWrap::WrapReverse {
            (trail, lead)
        } else {
            (lead, trail)
        };
        CrossItemInput {
            align: self.align,
            size: self.cross_size,
            min_cross: self.min_cross,
            max_cross: self.max_cross,
            margin_start: self.edges.margin[start],
            margin_end: self.edges.margin[end],
            margin_start_auto: self.edges.is_auto(start),
            margin_end_auto: self.edges.is_auto(end),
        }
    }

    /// Measure-only space with the main axis given and the cross axis bounded by the line.
    fn measure_space(&self, ctx: &FlexContext, main_size: f32, main_mode: MeasureMode) -> ConstraintSpace {
        let mut space = ConstraintSpace::undefined(ctx.child_owner, ctx.direction);
        space.set_axis(ctx.main, main_size, main_mode);
        let cross_room = ctx.available_cross - self.edges.margin_total(ctx.cross);
        // A stretched item only fills the container cross when there is a single line.
        let cross_mode =
            if ctx.cross_exact && ctx.wrap == FlexWrap::NoWrap && self.stretches(ctx) {
                MeasureMode::Exactly
            } else {
                MeasureMode::AtMost
            };
        space.set_axis(ctx.cross, cross_room, cross_mode);
        space
    }
}

/// Final container geometry used while arranging lines.
#[derive(Debug, Clone, Copy)]
struct ArrangeFrame {
    edges: BoxEdges,
    inner_main: f32,
    inner_cross: f32,
    justify: JustifyContent,
    align_content: AlignContent,
}

impl LayoutTree {
    /// Size a flex container and, when `perform` is set, arrange its children.
    pub(super) fn layout_flex(
        &mut self,
        id: NodeId,
        space: &ConstraintSpace,
        edges: &BoxEdges,
        perform: bool,
    ) -> LayoutSize {
        let style = self.node(id).style;
        let ctx = FlexContext::new(&style, space, edges);
        let kids: SmallVec<NodeId, 8> = self.children_iter(id).collect();
        let mut absolutes: SmallVec<NodeId, 4> = SmallVec::new();
        let mut children = Vec::with_capacity(kids.len());
        for child in kids {
            let child_style = self.node(child).style;
            if child_style.display == Display::None {
                if perform {
                    self.zero_subtree(child);
                }
                continue;
            }
            if child_style.position_type == PositionType::Absolute {
                absolutes.push(child);
                continue;
            }
            children.push(self.flex_child(child, &child_style, &ctx));
        }

        let lines = ctx.break_lines(&children);
        let natural_main = lines
            .iter()
            .map(|&(start, end)| {
                children[start..end]
                    .iter()
                    .map(|child| child.item.outer_hypothetical())
                    .sum::<f32>()
                    + ctx.gaps(end - start)
            })
            .fold(0.0f32, f32::max);
        let main_border = fit_size(natural_main, ctx.main, space, &style, edges);
        let inner_main = (main_border - edges.inner(ctx.main)).max(0.0);
        for &(start, end) in &lines {
            self.resolve_line(&mut children[start..end], &ctx, inner_main);
        }
        self.measure_cross_sizes(&mut children, &ctx);

        let mut line_crosses: Vec<f32> = lines
            .iter()
            .map(|&(start, end)| {
                let inputs: Vec<CrossItemInput> = children[start..end]
                    .iter()
                    .map(|child| child.cross_input(&ctx))
                    .collect();
                line_cross_size(&inputs)
            })
            .collect();
        let natural_cross = line_crosses.iter().sum::<f32>()
            + ctx.cross_gap * lines.len().saturating_sub(1) as f32;
        let cross_border = fit_size(natural_cross, ctx.cross, space, &style, edges);
        let inner_cross = (cross_border - edges.inner(ctx.cross)).max(0.0);
        if ctx.wrap == FlexWrap::NoWrap {
            line_crosses.fill(inner_cross);
        } else {
            line_crosses =
                stretch_line_crosses(style.align_content, inner_cross, &line_crosses, ctx.cross_gap);
        }

        let size = ctx.size(main_border, cross_border);
        debug!(
            target: "layout::solver",
            "flex {id}: items={} lines={} size={size:?} perform={perform}",
            children.len(),
            lines.len()
        );
        if perform {
            let frame = ArrangeFrame {
                edges: *edges,
                inner_main,
                inner_cross,
                justify: style.justify_content,
                align_content: style.align_content,
            };
            self.arrange_lines(&ctx, &frame, &children, &lines, &line_crosses);
            let container = AbsoluteContainer {
                size,
                edges: *edges,
                direction: ctx.direction,
                main: ctx.main,
                main_reverse: ctx.axes.main_reverse,
                justify: style.justify_content,
                align_items: style.align_items,
            };
            for child in absolutes {
                self.layout_absolute(child, &container);
            }
        }
        size
    }

    /// Resolve a child's box and flex basis.
    ///
    /// The basis is `flex-basis`, else the main-axis size, else the measured content size,
    /// floored at the child's padding plus border.
    fn flex_child(&mut self, child: NodeId, style: &LayoutStyle, ctx: &FlexContext) -> FlexChild {
        let direction = style.direction.resolve(ctx.direction);
        let edges = resolve_box(style, direction, ctx.child_owner.width);
        let main_base = ctx.child_owner.get(ctx.main);
        let cross_base = ctx.child_owner.get(ctx.cross);
        let lead = PhysicalEdge::leading(ctx.main);
        let trail = PhysicalEdge::trailing(ctx.main);
        let mut flex_child = FlexChild {
            id: child,
            direction,
            edges,
            item: FlexItemInput {
                basis: 0.0,
                grow: style.flex_grow,
                shrink: style.flex_shrink,
                min_main: resolve_min(style.min_dimensions[ctx.main], main_base)
                    .max(edges.inner(ctx.main)),
                max_main: resolve_max(style.max_dimensions[ctx.main], main_base),
                margin_start: edges.margin[lead],
                margin_end: edges.margin[trail],
                margin_start_auto: edges.is_auto(lead),
                margin_end_auto: edges.is_auto(trail),
            },
            align: style.align_self.resolve(ctx.align_items),
            explicit_cross: style_size(style, ctx.cross, ctx.child_owner, &edges),
            min_cross: resolve_min(style.min_dimensions[ctx.cross], cross_base)
                .max(edges.inner(ctx.cross)),
            max_cross: resolve_max(style.max_dimensions[ctx.cross], cross_base),
            main_size: 0.0,
            cross_size: CrossSize::Stretch(0.0),
        };
        let explicit_basis = style
            .flex_basis
            .resolve(main_base)
            .or_else(|| style.dimensions[ctx.main].resolve(main_base));
        let basis = if let Some(size) = explicit_basis {
            non_negative(size)
        } else {
            let space = flex_child.measure_space(ctx, f32::NAN, MeasureMode::Undefined);
            self.compute_node(child, space, false).get(ctx.main)
        };
        flex_child.item.basis = basis.max(edges.inner(ctx.main));
        flex_child.main_size = flex_child.item.hypothetical();
        flex_child
    }

    fn resolve_line(&mut self, line: &mut [FlexChild], ctx: &FlexContext, inner_main: f32) {
        let items: Vec<FlexItemInput> = line.iter().map(|child| child.item).collect();
        let resolution = resolve_flexible_lengths(
            &items,
            inner_main,
            ctx.gaps(line.len()),
            self.config.flex_iteration_cap,
        );
        self.stats.flex_passes += resolution.passes;
        if resolution.capped {
            self.stats.capped_distributions += 1;
        }
        for (child, size) in line.iter_mut().zip(resolution.sizes) {
            child.main_size = size;
        }
    }

    /// Cross size of every child: its style size, or its content measured at the resolved
    /// main size.
    fn measure_cross_sizes(&mut self, children: &mut [FlexChild], ctx: &FlexContext) {
        for child in children {
            child.cross_size = if let Some(size) = child.explicit_cross {
                CrossSize::Explicit(size)
            } else {
                let space = child.measure_space(ctx, child.main_size, MeasureMode::Exactly);
                CrossSize::Stretch(self.compute_node(child.id, space, false).get(ctx.cross))
            };
        }
    }

    fn arrange_lines(
        &mut self,
        ctx: &FlexContext,
        frame: &ArrangeFrame,
        children: &[FlexChild],
        lines: &[LineRange],
        line_crosses: &[f32],
    ) {
        let lines_total = line_crosses.iter().sum::<f32>()
            + ctx.cross_gap * lines.len().saturating_sub(1) as f32;
        let (start, between) =
            align_content_params(frame.align_content, frame.inner_cross, lines_total, lines.len());
        let mut cursor = start;
        for (&(first, end), &line_cross) in lines.iter().zip(line_crosses) {
            let line_offset = if ctx.wrap == FlexWrap::WrapReverse {
                frame.inner_cross - cursor - line_cross
            } else {
                cursor
            };
            self.arrange_line(ctx, frame, &children[first..end], line_offset, line_cross);
            cursor += line_cross + between + ctx.cross_gap;
        }
    }

    fn arrange_line(
        &mut self,
        ctx: &FlexContext,
        frame: &ArrangeFrame,
        line: &[FlexChild],
        line_offset: f32,
        line_cross: f32,
    ) {
        let items: Vec<FlexItemInput> = line.iter().map(|child| child.item).collect();
        let sizes: Vec<f32> = line.iter().map(|child| child.main_size).collect();
        let plan = resolve_auto_margins(&items, &sizes, frame.inner_main, ctx.gaps(line.len()));
        let outer: Vec<f32> = sizes
            .iter()
            .zip(&plan.margins)
            .map(|(size, margins)| size + margins.total())
            .collect();
        let content_total = frame.inner_main - plan.remaining_free_space;
        let (start_offset, between_spacing) =
            justify_params(frame.justify, frame.inner_main, content_total, line.len());
        let offsets = accumulate_main_offsets(
            &MainOffsetPlan {
                reverse: ctx.axes.main_reverse,
                container_main_size: frame.inner_main,
                start_offset,
                between_spacing,
                main_gap: ctx.main_gap,
            },
            &outer,
        );

        for ((child, offset), margins) in line.iter().zip(offsets).zip(&plan.margins) {
            let placement = align_cross(&child.cross_input(ctx), line_cross);
            let cross_offset = if ctx.wrap == FlexWrap::WrapReverse {
                line_cross - placement.cross_offset - placement.cross_size
            } else {
                placement.cross_offset
            };
            let size = ctx.size(child.main_size, placement.cross_size);
            self.compute_node(
                child.id,
                ConstraintSpace::exact(size, ctx.child_owner, ctx.direction),
                true,
            );
            let main_position = frame.edges.inner_lead(ctx.main) + offset + margins.start;
            let cross_position = frame.edges.inner_lead(ctx.cross) + line_offset + cross_offset;
            let shift = self.relative_shift(child, ctx);
            let computed = &mut self.node_mut(child.id).computed;
            computed.position[ctx.main] = main_position + shift.get(ctx.main);
            computed.position[ctx.cross] = cross_position + shift.get(ctx.cross);
        }
    }

    /// Offset from relative insets. The leading inset wins over the trailing one.
    fn relative_shift(&self, child: &FlexChild, ctx: &FlexContext) -> LayoutSize {
        let style = &self.node(child.id).style;
        let mut shift = LayoutSize::ZERO;
        for dimension in [Dimension::Width, Dimension::Height] {
            let base = ctx.child_owner.get(dimension);
            let leading = style
                .inset_for(PhysicalEdge::leading(dimension), child.direction)
                .resolve(base);
            let offset = leading
                .or_else(|| {
                    style
                        .inset_for(PhysicalEdge::trailing(dimension), child.direction)
                        .resolve(base)
                        .map(|trailing| -trailing)
                })
                .unwrap_or(0.0);
            shift.set(dimension, offset);
        }
        shift
    }
}
