//! Measure and arrange passes.
//!
//! Both passes share one recursive entry point, [`LayoutTree::compute_node`]. A measure-only
//! call sizes a subtree without writing geometry and memoises the result in the node's
//! [`crate::cache::MeasureCache`]; a perform call writes unrounded geometry into each node's
//! `computed` layout. Rounding runs once per [`LayoutTree::compute_layout`], after the whole
//! tree is arranged.

mod absolute;
mod flex;
mod resolve;
mod rounding;

use layout_values::{Dimension, Direction, LayoutSize, MeasureMode, PhysicalEdge};
use log::{debug, trace};
use tracing::info_span;

use crate::cache::ConstraintKey;
use crate::{Layout, LayoutError, LayoutStats, LayoutStyle, LayoutTree, NodeId, NodeState};

use resolve::{
    BoxEdges, constrain_space, fit_size, inner_available, resolve_box, resolve_max, resolve_min,
    style_size,
};

/// Constraints passed from a parent to a child.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintSpace {
    /// Border-box space offered to the node. NaN means unconstrained.
    pub available: LayoutSize,
    pub width_mode: MeasureMode,
    pub height_mode: MeasureMode,
    /// Owner content box, the base for percentages.
    pub owner: LayoutSize,
    /// Owner's resolved direction, inherited by `Direction::Inherit`.
    pub direction: Direction,
}

impl ConstraintSpace {
    pub const fn undefined(owner: LayoutSize, direction: Direction) -> Self {
        Self {
            available: LayoutSize::UNDEFINED,
            width_mode: MeasureMode::Undefined,
            height_mode: MeasureMode::Undefined,
            owner,
            direction,
        }
    }

    /// Both axes pinned to `size`.
    pub const fn exact(size: LayoutSize, owner: LayoutSize, direction: Direction) -> Self {
        Self {
            available: size,
            width_mode: MeasureMode::Exactly,
            height_mode: MeasureMode::Exactly,
            owner,
            direction,
        }
    }

    pub const fn mode(&self, dimension: Dimension) -> MeasureMode {
        match dimension {
            Dimension::Width => self.width_mode,
            Dimension::Height => self.height_mode,
        }
    }

    pub const fn set_mode(&mut self, dimension: Dimension, mode: MeasureMode) {
        match dimension {
            Dimension::Width => self.width_mode = mode,
            Dimension::Height => self.height_mode = mode,
        }
    }

    /// Set one axis. A NaN size always travels with `Undefined`.
    pub fn set_axis(&mut self, dimension: Dimension, size: f32, mode: MeasureMode) {
        if size.is_nan() {
            self.available.set(dimension, f32::NAN);
            self.set_mode(dimension, MeasureMode::Undefined);
        } else {
            self.available.set(dimension, size.max(0.0));
            self.set_mode(dimension, mode);
        }
    }

    const fn key(&self) -> ConstraintKey {
        ConstraintKey {
            available: self.available,
            width_mode: self.width_mode,
            height_mode: self.height_mode,
            owner: self.owner,
            direction: self.direction,
        }
    }
}

impl LayoutTree {
    /// Lay out the tree rooted at `root` inside the given space.
    ///
    /// NaN for either size means that axis is unconstrained. After this call every node under
    /// `root` has rounded, parent-relative geometry available through [`LayoutTree::layout`].
    ///
    /// # Errors
    /// [`LayoutError::NodeNotFound`] when `root` is stale.
    pub fn compute_layout(
        &mut self,
        root: NodeId,
        available_width: f32,
        available_height: f32,
    ) -> Result<(), LayoutError> {
        let style = self.lookup(root)?.style;
        let _span = info_span!("layout.compute_layout", root = %root).entered();
        self.stats = LayoutStats::default();

        let direction = style.direction.resolve(Direction::Ltr);
        let owner = LayoutSize::new(available_width, available_height);
        let edges = resolve_box(&style, direction, available_width);
        let mut space = ConstraintSpace::undefined(owner, Direction::Ltr);
        for dimension in [Dimension::Width, Dimension::Height] {
            let (size, mode) = root_axis(&style, dimension, owner, &edges);
            space.set_axis(dimension, size, mode);
        }

        self.compute_node(root, space, true);
        {
            let computed = &mut self.node_mut(root).computed;
            computed.position[Dimension::Width] = edges.margin[PhysicalEdge::Left];
            computed.position[Dimension::Height] = edges.margin[PhysicalEdge::Top];
        }
        self.round_layout(root);
        debug!(
            target: "layout::solver",
            "layout {root}: {:?} stats={:?}",
            self.node(root).layout.rect(),
            self.stats
        );
        Ok(())
    }

    /// Measure `node` under the given content constraints without positioning anything.
    ///
    /// Results are memoised per node; repeating a query with the same constraints returns the
    /// cached size without calling any measure function. The node inherits the direction its
    /// ancestors resolve to. Percentages have no owner here and resolve against an undefined
    /// base.
    ///
    /// # Errors
    /// [`LayoutError::NodeNotFound`] when `node` is stale.
    pub fn measure(
        &mut self,
        node: NodeId,
        width: f32,
        width_mode: MeasureMode,
        height: f32,
        height_mode: MeasureMode,
    ) -> Result<LayoutSize, LayoutError> {
        self.lookup(node)?;
        let direction = self.inherited_direction(node);
        let mut space = ConstraintSpace::undefined(LayoutSize::UNDEFINED, direction);
        space.set_axis(Dimension::Width, width, width_mode);
        space.set_axis(Dimension::Height, height, height_mode);
        Ok(self.compute_node(node, space, false))
    }

    /// Size (and with `perform`, arrange) one node. Returns the border-box size.
    pub(crate) fn compute_node(
        &mut self,
        id: NodeId,
        space: ConstraintSpace,
        perform: bool,
    ) -> LayoutSize {
        let key = space.key();
        let record = self.node(id);
        if perform {
            if record.state == NodeState::Clean
                && record.last_layout.is_some_and(|last| last.matches(&key))
            {
                trace!(target: "layout::solver", "skip clean {id}");
                let dimensions = record.computed.dimensions;
                return LayoutSize::new(dimensions[Dimension::Width], dimensions[Dimension::Height]);
            }
        } else if let Some(size) = record.cache.lookup(&key) {
            self.stats.cache_hits += 1;
            trace!(target: "layout::cache", "hit {id}: {size:?}");
            return size;
        }

        let style = record.style;
        let has_measure = record.has_measure;
        let direction = style.direction.resolve(space.direction);
        let edges = resolve_box(&style, direction, space.owner.width);
        let constrained = ConstraintSpace {
            direction,
            ..constrain_space(&style, space, &edges)
        };
        let size = if has_measure {
            self.measure_leaf(id, &constrained, &edges)
        } else {
            self.layout_flex(id, &constrained, &edges, perform)
        };

        let node = self.node_mut(id);
        if perform {
            let computed = &mut node.computed;
            computed.dimensions[Dimension::Width] = size.width;
            computed.dimensions[Dimension::Height] = size.height;
            computed.margin = edges.margin;
            computed.border = edges.border;
            computed.padding = edges.padding;
            computed.direction = direction;
            node.state = NodeState::Clean;
            node.last_layout = Some(key);
            self.stats.nodes_laid_out += 1;
        } else {
            node.cache.store(key, size);
            if node.state == NodeState::Dirty {
                node.state = NodeState::Measured;
            }
        }
        size
    }

    /// Size a leaf through its measure function.
    fn measure_leaf(&mut self, id: NodeId, space: &ConstraintSpace, edges: &BoxEdges) -> LayoutSize {
        let style = self.node(id).style;
        if space.width_mode.is_exact() && space.height_mode.is_exact() {
            return LayoutSize::new(
                fit_size(0.0, Dimension::Width, space, &style, edges),
                fit_size(0.0, Dimension::Height, space, &style, edges),
            );
        }
        let inner_width = inner_available(space, Dimension::Width, edges);
        let inner_height = inner_available(space, Dimension::Height, edges);
        let measured = match self.measures.get_mut(id.slot()) {
            Some(Some(measure)) => {
                measure.measure(inner_width, space.width_mode, inner_height, space.height_mode)
            }
            _ => LayoutSize::ZERO,
        };
        self.stats.measure_calls += 1;
        trace!(target: "layout::solver", "measured leaf {id}: {measured:?}");
        let measured = measured.or_zero();
        LayoutSize::new(
            fit_size(measured.width, Dimension::Width, space, &style, edges),
            fit_size(measured.height, Dimension::Height, space, &style, edges),
        )
    }

    /// Give `node` and its subtree a zero layout, as for `display: none`.
    pub(crate) fn zero_subtree(&mut self, node: NodeId) {
        let mut pending = vec![node];
        while let Some(current) = pending.pop() {
            pending.extend(self.children_iter(current));
            let record = self.node_mut(current);
            record.computed = Layout::default();
            record.state = NodeState::Clean;
            record.last_layout = None;
        }
    }
}

/// Root constraint along one axis: style size, then the caller's space capped by the max
/// size, then the max size alone.
fn root_axis(
    style: &LayoutStyle,
    dimension: Dimension,
    owner: LayoutSize,
    edges: &BoxEdges,
) -> (f32, MeasureMode) {
    if let Some(size) = style_size(style, dimension, owner, edges) {
        return (size, MeasureMode::Exactly);
    }
    let max = resolve_max(style.max_dimensions[dimension], owner.get(dimension));
    let available = owner.get(dimension);
    if !available.is_nan() {
        let min = resolve_min(style.min_dimensions[dimension], available);
        let size = (available - edges.margin_total(dimension)).min(max).max(min);
        return (size, MeasureMode::Exactly);
    }
    if max.is_finite() {
        (max, MeasureMode::AtMost)
    } else {
        (f32::NAN, MeasureMode::Undefined)
    }
}
