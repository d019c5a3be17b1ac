//! Value types shared by the layout engine: style dimensions, measured sizes, measure modes, and
//! the edge/axis vocabulary used to index per-edge buffers.

mod edges;
mod measure;
mod value;

pub mod defaults;

pub use edges::{
    Dimension, DimensionValues, Direction, Edge, EdgeValues, InsetValues, PhysicalEdge,
    PhysicalEdgeValues,
};
pub use measure::{LayoutSize, MeasureMode};
pub use value::{LayoutValue, ParseValueError, Unit};
