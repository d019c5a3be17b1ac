use layout_buffers::BufferError;
use thiserror::Error;

use crate::NodeId;

/// Failures reported by tree operations.
///
/// The solver itself never fails on degenerate styles; it clamps them. Only stale handles
/// and invalid structural edits surface here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The handle was never issued by this tree or its node has been removed.
    #[error("node {0} does not exist in this tree")]
    NodeNotFound(NodeId),
    /// The child is already attached somewhere; detach it first.
    #[error("node {child} already has parent {parent}")]
    AlreadyParented { child: NodeId, parent: NodeId },
    /// Attaching the child would make a node its own ancestor.
    #[error("attaching {child} under {parent} would create a cycle")]
    CycleDetected { parent: NodeId, child: NodeId },
    /// A positional child operation named an index past the end of the child list.
    #[error("child index {index} out of range for {count} children")]
    ChildIndexOutOfRange { index: usize, count: usize },
    /// The node is not a child of the given parent.
    #[error("node {child} is not a child of {parent}")]
    NotAChild { parent: NodeId, child: NodeId },
    /// Nodes with a measure function are leaves and cannot hold children.
    #[error("node {0} has a measure function and cannot have children")]
    MeasuredLeaf(NodeId),
    #[error(transparent)]
    Buffer(#[from] BufferError),
}
