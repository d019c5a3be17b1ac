//! Counters collected during one `compute_layout` call.

/// Solver counters. Reset at the start of every [`crate::LayoutTree::compute_layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutStats {
    /// Measure callbacks actually invoked.
    pub measure_calls: usize,
    /// Measure queries answered from a node's cache.
    pub cache_hits: usize,
    /// Nodes that went through a full layout.
    pub nodes_laid_out: usize,
    /// Freeze passes spent resolving flexible lengths.
    pub flex_passes: usize,
    /// Lines whose distribution stopped at the iteration cap.
    pub capped_distributions: usize,
}
