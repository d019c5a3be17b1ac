//! Node arena and structural edits.
//!
//! Every node lives in one [`LayoutList`] of slots addressed by [`NodeId`]. Children form an
//! intrusive doubly linked list through the node records, so attaching or detaching a child
//! never allocates. Freed slots go on a free list and their generation is bumped.

use core::iter;
use core::num::NonZeroUsize;

use layout_buffers::{Allocator, LayoutList};
use log::{debug, trace};

use crate::measure::BoxedMeasure;
use crate::node::{LayoutNode, NodeSlot};
use crate::{
    Direction, Layout, LayoutConfig, LayoutError, LayoutStats, LayoutStyle, Measure, NodeId,
    NodeState,
};

const INITIAL_CAPACITY: NonZeroUsize = match NonZeroUsize::new(16) {
    Some(capacity) => capacity,
    None => NonZeroUsize::MIN,
};

/// Owner of a forest of layout nodes.
///
/// Single-threaded: callers serialise mutation and layout. Every node created by a tree is
/// owned by it until [`LayoutTree::remove`] or [`LayoutTree::clear`].
pub struct LayoutTree {
    pub(crate) slots: LayoutList<NodeSlot>,
    free: LayoutList<u32>,
    pub(crate) measures: Vec<Option<BoxedMeasure>>,
    pub(crate) config: LayoutConfig,
    pub(crate) stats: LayoutStats,
    live: usize,
}

impl Default for LayoutTree {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutTree {
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default())
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            slots: LayoutList::with_capacity(INITIAL_CAPACITY, Allocator::Persistent),
            free: LayoutList::with_capacity(INITIAL_CAPACITY, Allocator::Persistent),
            measures: Vec::new(),
            config,
            stats: LayoutStats::default(),
            live: 0,
        }
    }

    #[inline]
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Counters from the most recent [`LayoutTree::compute_layout`], plus any standalone
    /// [`LayoutTree::measure`] calls made since.
    #[inline]
    pub const fn stats(&self) -> LayoutStats {
        self.stats
    }

    /// Number of live nodes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.live
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.lookup(node).is_ok()
    }

    /// Create a detached node. It starts dirty.
    pub fn new_node(&mut self, style: LayoutStyle) -> NodeId {
        let record = LayoutNode::with_style(style);
        let id = if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.live = true;
            slot.node = record;
            NodeId::new(index, slot.generation)
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(NodeSlot {
                generation: 0,
                live: true,
                node: record,
            });
            NodeId::new(index, 0)
        };
        if self.measures.len() < self.slots.len() {
            self.measures.resize_with(self.slots.len(), || None);
        }
        self.live += 1;
        trace!(target: "layout::tree", "new node {id}");
        id
    }

    /// Create a detached leaf whose content size comes from `measure`.
    pub fn new_leaf_with_measure<M>(&mut self, style: LayoutStyle, measure: M) -> NodeId
    where
        M: Measure + 'static,
    {
        let id = self.new_node(style);
        self.node_mut(id).has_measure = true;
        self.measures[id.slot()] = Some(Box::new(measure));
        id
    }

    /// Append `child` to `parent`'s children.
    ///
    /// # Errors
    /// See [`LayoutTree::insert_child`].
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), LayoutError> {
        let count = self.child_count(parent)?;
        self.insert_child(parent, count, child)
    }

    /// Insert `child` before the child currently at `index`.
    ///
    /// # Errors
    /// - [`LayoutError::NodeNotFound`] for a stale handle
    /// - [`LayoutError::MeasuredLeaf`] when `parent` has a measure function
    /// - [`LayoutError::AlreadyParented`] when `child` is attached elsewhere
    /// - [`LayoutError::CycleDetected`] when `child` is `parent` or one of its ancestors
    /// - [`LayoutError::ChildIndexOutOfRange`] when `index` is past the end
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        index: usize,
        child: NodeId,
    ) -> Result<(), LayoutError> {
        let parent_node = self.lookup(parent)?;
        let child_node = self.lookup(child)?;
        if parent_node.has_measure {
            return Err(LayoutError::MeasuredLeaf(parent));
        }
        if let Some(existing) = child_node.parent {
            return Err(LayoutError::AlreadyParented {
                child,
                parent: existing,
            });
        }
        if self.ancestors(parent).any(|ancestor| ancestor == child) {
            return Err(LayoutError::CycleDetected { parent, child });
        }
        let count = parent_node.child_count;
        if index > count {
            return Err(LayoutError::ChildIndexOutOfRange { index, count });
        }

        let next = self.children_iter(parent).nth(index);
        let prev = match next {
            Some(next_id) => self.node(next_id).prev_sibling,
            None => self.node(parent).last_child,
        };
        {
            let record = self.node_mut(child);
            record.parent = Some(parent);
            record.prev_sibling = prev;
            record.next_sibling = next;
        }
        match prev {
            Some(prev_id) => self.node_mut(prev_id).next_sibling = Some(child),
            None => self.node_mut(parent).first_child = Some(child),
        }
        match next {
            Some(next_id) => self.node_mut(next_id).prev_sibling = Some(child),
            None => self.node_mut(parent).last_child = Some(child),
        }
        self.node_mut(parent).child_count += 1;
        debug!(target: "layout::tree", "attached {child} under {parent} at {index}");
        self.invalidate(parent);
        Ok(())
    }

    /// Detach `child` from `parent`. The child becomes a root.
    ///
    /// # Errors
    /// [`LayoutError::NodeNotFound`] for a stale handle, [`LayoutError::NotAChild`] when
    /// `child` is not attached to `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), LayoutError> {
        self.lookup(parent)?;
        if self.lookup(child)?.parent != Some(parent) {
            return Err(LayoutError::NotAChild { parent, child });
        }
        self.unlink(child);
        Ok(())
    }

    /// Detach the child at `index` and return it.
    ///
    /// # Errors
    /// [`LayoutError::NodeNotFound`] for a stale handle,
    /// [`LayoutError::ChildIndexOutOfRange`] when `index` is past the end.
    pub fn remove_child_at(&mut self, parent: NodeId, index: usize) -> Result<NodeId, LayoutError> {
        let child = self.child_at(parent, index)?;
        self.unlink(child);
        Ok(child)
    }

    /// Remove `node` from the tree. Its children are detached and become roots; the handle
    /// becomes stale.
    ///
    /// # Errors
    /// [`LayoutError::NodeNotFound`] for a stale handle.
    pub fn remove(&mut self, node: NodeId) -> Result<(), LayoutError> {
        self.lookup(node)?;
        if self.node(node).parent.is_some() {
            self.unlink(node);
        }
        while let Some(child) = self.node(node).first_child {
            self.unlink(child);
        }
        self.release(node);
        debug!(target: "layout::tree", "removed {node}");
        Ok(())
    }

    /// Remove every node. All outstanding handles become stale.
    pub fn clear(&mut self) {
        for index in 0..self.slots.len() {
            let slot = self.slots[index];
            if slot.live {
                let handle = NodeId::new(index as u32, slot.generation);
                self.release(handle);
            }
        }
        debug!(target: "layout::tree", "cleared tree");
    }

    /// # Errors
    /// [`LayoutError::NodeNotFound`] for a stale handle.
    pub fn parent(&self, node: NodeId) -> Result<Option<NodeId>, LayoutError> {
        Ok(self.lookup(node)?.parent)
    }

    /// Snapshot of `node`'s children in order.
    ///
    /// # Errors
    /// [`LayoutError::NodeNotFound`] for a stale handle.
    pub fn children(&self, node: NodeId) -> Result<Vec<NodeId>, LayoutError> {
        self.lookup(node)?;
        Ok(self.children_iter(node).collect())
    }

    /// # Errors
    /// [`LayoutError::NodeNotFound`] for a stale handle,
    /// [`LayoutError::ChildIndexOutOfRange`] when `index` is past the end.
    pub fn child_at(&self, node: NodeId, index: usize) -> Result<NodeId, LayoutError> {
        let count = self.lookup(node)?.child_count;
        self.children_iter(node)
            .nth(index)
            .ok_or(LayoutError::ChildIndexOutOfRange { index, count })
    }

    /// # Errors
    /// [`LayoutError::NodeNotFound`] for a stale handle.
    pub fn child_count(&self, node: NodeId) -> Result<usize, LayoutError> {
        Ok(self.lookup(node)?.child_count)
    }

    /// # Errors
    /// [`LayoutError::NodeNotFound`] for a stale handle.
    pub fn style(&self, node: NodeId) -> Result<&LayoutStyle, LayoutError> {
        Ok(&self.lookup(node)?.style)
    }

    /// Replace the style. The node is marked dirty only when the style actually changed.
    ///
    /// # Errors
    /// [`LayoutError::NodeNotFound`] for a stale handle.
    pub fn set_style(&mut self, node: NodeId, style: LayoutStyle) -> Result<(), LayoutError> {
        if self.lookup(node)?.style != style {
            self.node_mut(node).style = style;
            self.invalidate(node);
        }
        Ok(())
    }

    /// Edit the style in place.
    ///
    /// # Errors
    /// [`LayoutError::NodeNotFound`] for a stale handle.
    pub fn update_style<F>(&mut self, node: NodeId, edit: F) -> Result<(), LayoutError>
    where
        F: FnOnce(&mut LayoutStyle),
    {
        let mut style = *self.style(node)?;
        edit(&mut style);
        self.set_style(node, style)
    }

    /// Attach a measure function, turning `node` into a content leaf.
    ///
    /// # Errors
    /// [`LayoutError::NodeNotFound`] for a stale handle, [`LayoutError::MeasuredLeaf`] when
    /// the node already has children.
    pub fn set_measure<M>(&mut self, node: NodeId, measure: M) -> Result<(), LayoutError>
    where
        M: Measure + 'static,
    {
        if self.lookup(node)?.child_count > 0 {
            return Err(LayoutError::MeasuredLeaf(node));
        }
        self.node_mut(node).has_measure = true;
        self.measures[node.slot()] = Some(Box::new(measure));
        self.invalidate(node);
        Ok(())
    }

    /// # Errors
    /// [`LayoutError::NodeNotFound`] for a stale handle.
    pub fn clear_measure(&mut self, node: NodeId) -> Result<(), LayoutError> {
        if self.lookup(node)?.has_measure {
            self.node_mut(node).has_measure = false;
            self.measures[node.slot()] = None;
            self.invalidate(node);
        }
        Ok(())
    }

    /// Flag `node` for re-layout, e.g. after its measured content changed.
    ///
    /// # Errors
    /// [`LayoutError::NodeNotFound`] for a stale handle.
    pub fn mark_dirty(&mut self, node: NodeId) -> Result<(), LayoutError> {
        self.lookup(node)?;
        self.invalidate(node);
        Ok(())
    }

    /// # Errors
    /// [`LayoutError::NodeNotFound`] for a stale handle.
    pub fn is_dirty(&self, node: NodeId) -> Result<bool, LayoutError> {
        Ok(self.lookup(node)?.state == NodeState::Dirty)
    }

    /// # Errors
    /// [`LayoutError::NodeNotFound`] for a stale handle.
    pub fn state(&self, node: NodeId) -> Result<NodeState, LayoutError> {
        Ok(self.lookup(node)?.state)
    }

    /// Rounded geometry from the last layout pass.
    ///
    /// # Errors
    /// [`LayoutError::NodeNotFound`] for a stale handle.
    pub fn layout(&self, node: NodeId) -> Result<Layout, LayoutError> {
        Ok(self.lookup(node)?.layout)
    }

    pub(crate) fn lookup(&self, node: NodeId) -> Result<&LayoutNode, LayoutError> {
        self.slots
            .get(node.slot())
            .filter(|slot| slot.live && slot.generation == node.generation())
            .map(|slot| &slot.node)
            .ok_or(LayoutError::NodeNotFound(node))
    }

    /// Record for a handle obtained from the tree's own links. Panics on an out-of-range slot.
    #[inline]
    pub(crate) fn node(&self, node: NodeId) -> &LayoutNode {
        &self.slots[node.slot()].node
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, node: NodeId) -> &mut LayoutNode {
        &mut self.slots[node.slot()].node
    }

    pub(crate) fn children_iter(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        iter::successors(self.node(node).first_child, |child| {
            self.node(*child).next_sibling
        })
    }

    /// `node` followed by each of its ancestors.
    fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        iter::successors(Some(node), |current| self.node(*current).parent)
    }

    /// Direction `node` inherits: the nearest ancestor with an explicit one, else LTR.
    pub(crate) fn inherited_direction(&self, node: NodeId) -> Direction {
        self.ancestors(node)
            .skip(1)
            .map(|ancestor| self.node(ancestor).style.direction)
            .find(|direction| *direction != Direction::Inherit)
            .unwrap_or(Direction::Ltr)
    }

    /// Mark `node` dirty and walk up until an ancestor that is already dirty.
    pub(crate) fn invalidate(&mut self, node: NodeId) {
        let mut current = Some(node);
        let mut first = true;
        while let Some(id) = current {
            let record = self.node_mut(id);
            if !first && record.state == NodeState::Dirty {
                break;
            }
            record.state = NodeState::Dirty;
            record.cache.clear();
            record.last_layout = None;
            current = record.parent;
            first = false;
        }
        trace!(target: "layout::tree", "invalidated {node}");
    }

    /// Splice `child` out of its parent's sibling list.
    fn unlink(&mut self, child: NodeId) {
        let LayoutNode {
            parent,
            prev_sibling,
            next_sibling,
            ..
        } = *self.node(child);
        let Some(parent) = parent else {
            return;
        };
        match prev_sibling {
            Some(prev) => self.node_mut(prev).next_sibling = next_sibling,
            None => self.node_mut(parent).first_child = next_sibling,
        }
        match next_sibling {
            Some(next) => self.node_mut(next).prev_sibling = prev_sibling,
            None => self.node_mut(parent).last_child = prev_sibling,
        }
        {
            let parent_node = self.node_mut(parent);
            parent_node.child_count = parent_node.child_count.saturating_sub(1);
        }
        {
            let record = self.node_mut(child);
            record.parent = None;
            record.prev_sibling = None;
            record.next_sibling = None;
        }
        debug!(target: "layout::tree", "detached {child} from {parent}");
        self.invalidate(parent);
        self.invalidate(child);
    }

    fn release(&mut self, node: NodeId) {
        let slot = &mut self.slots[node.slot()];
        slot.live = false;
        slot.generation = slot.generation.wrapping_add(1);
        slot.node = LayoutNode::default();
        self.measures[node.slot()] = None;
        self.free.push(node.index());
        self.live = self.live.saturating_sub(1);
    }
}
