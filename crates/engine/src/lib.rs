//! Retained flexbox layout over an arena of nodes.
//!
//! A [`LayoutTree`] owns every node. Callers create nodes with a [`LayoutStyle`], link them
//! into a tree, optionally attach a [`Measure`] to content leaves, and call
//! [`LayoutTree::compute_layout`] on a root. Afterwards each node exposes parent-relative,
//! rounded geometry through [`LayoutTree::layout`].
//!
//! Edits mark the touched node and its ancestors dirty; clean subtrees laid out again under
//! the same constraints are skipped, and measurements are memoised per node.

mod cache;
mod config;
mod error;
mod measure;
mod node;
mod printing;
mod solver;
mod stats;
mod style;
mod tree;

pub use config::LayoutConfig;
pub use error::LayoutError;
pub use measure::{BoxedMeasure, Measure};
pub use node::{Layout, LayoutRect, NodeId, NodeState};
pub use stats::LayoutStats;
pub use style::{AlignSelf, Display, LayoutStyle, PositionType};
pub use tree::LayoutTree;

pub use layout_flexbox::{
    AlignContent, AlignItems, FlexDirection, FlexWrap, JustifyContent, UnknownKeyword,
};
pub use layout_values::{
    Dimension, Direction, Edge, LayoutSize, LayoutValue, MeasureMode, PhysicalEdge, Unit,
};
