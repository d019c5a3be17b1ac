//! Cross-axis alignment and sizing for flex items.

pub mod alignment;

pub use alignment::{CrossItemInput, CrossPlacement, CrossSize, align_cross, line_cross_size};
