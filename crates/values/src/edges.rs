//! Edge and axis vocabulary.
//!
//! Per-edge style values live in a [`FixedBuffer9`] indexed by [`Edge`]; resolved per-edge
//! outputs live in a [`FixedBuffer4`] indexed by [`PhysicalEdge`]; per-axis values live in a
//! [`FixedBuffer2`] indexed by [`Dimension`].

use core::ops::{Index, IndexMut};

use layout_buffers::{FixedBuffer, FixedBuffer2, FixedBuffer4, FixedBuffer6, FixedBuffer9};

use crate::LayoutValue;

/// Style edge slot. The first six slots double as inset slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Left = 0,
    Top = 1,
    Right = 2,
    Bottom = 3,
    /// Leading inline edge: left in LTR, right in RTL.
    Start = 4,
    /// Trailing inline edge: right in LTR, left in RTL.
    End = 5,
    /// Left and right.
    Horizontal = 6,
    /// Top and bottom.
    Vertical = 7,
    All = 8,
}

impl Edge {
    pub const COUNT: usize = 9;

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Edge of a laid-out box after logical edges have been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalEdge {
    Left = 0,
    Top = 1,
    Right = 2,
    Bottom = 3,
}

impl PhysicalEdge {
    pub const COUNT: usize = 4;
    pub const ALL: [Self; 4] = [Self::Left, Self::Top, Self::Right, Self::Bottom];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The same edge as a style slot.
    #[inline]
    pub const fn as_edge(self) -> Edge {
        match self {
            Self::Left => Edge::Left,
            Self::Top => Edge::Top,
            Self::Right => Edge::Right,
            Self::Bottom => Edge::Bottom,
        }
    }

    /// The leading edge along `dimension` (left for width, top for height).
    #[inline]
    pub const fn leading(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Width => Self::Left,
            Dimension::Height => Self::Top,
        }
    }

    /// The trailing edge along `dimension` (right for width, bottom for height).
    #[inline]
    pub const fn trailing(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Width => Self::Right,
            Dimension::Height => Self::Bottom,
        }
    }
}

/// Axis of a size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Width = 0,
    Height = 1,
}

impl Dimension {
    pub const COUNT: usize = 2;

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The perpendicular axis.
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Self::Width => Self::Height,
            Self::Height => Self::Width,
        }
    }
}

/// Inline base direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Take the owner's resolved direction.
    #[default]
    Inherit,
    Ltr,
    Rtl,
}

impl Direction {
    /// Resolve `Inherit` against the owner's direction.
    #[inline]
    pub const fn resolve(self, owner: Self) -> Self {
        match (self, owner) {
            (Self::Inherit, Self::Inherit) => Self::Ltr,
            (Self::Inherit, inherited) => inherited,
            (own, _) => own,
        }
    }

    #[inline]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

/// Style values for every edge slot (margin, padding, border).
pub type EdgeValues = FixedBuffer9<LayoutValue>;
/// Inset values (left, top, right, bottom, start, end).
pub type InsetValues = FixedBuffer6<LayoutValue>;
/// Style values per axis (width, height).
pub type DimensionValues = FixedBuffer2<LayoutValue>;
/// Resolved values per physical edge.
pub type PhysicalEdgeValues = FixedBuffer4<f32>;

impl<T: Copy> Index<Edge> for FixedBuffer<T, 9> {
    type Output = T;

    #[inline]
    fn index(&self, edge: Edge) -> &T {
        &self[edge.index()]
    }
}

impl<T: Copy> IndexMut<Edge> for FixedBuffer<T, 9> {
    #[inline]
    fn index_mut(&mut self, edge: Edge) -> &mut T {
        &mut self[edge.index()]
    }
}

/// Inset buffers accept the six non-combined slots. Combined slots fail fast.
impl<T: Copy> Index<Edge> for FixedBuffer<T, 6> {
    type Output = T;

    #[inline]
    fn index(&self, edge: Edge) -> &T {
        &self[edge.index()]
    }
}

impl<T: Copy> IndexMut<Edge> for FixedBuffer<T, 6> {
    #[inline]
    fn index_mut(&mut self, edge: Edge) -> &mut T {
        &mut self[edge.index()]
    }
}

impl<T: Copy> Index<PhysicalEdge> for FixedBuffer<T, 4> {
    type Output = T;

    #[inline]
    fn index(&self, edge: PhysicalEdge) -> &T {
        &self[edge.index()]
    }
}

impl<T: Copy> IndexMut<PhysicalEdge> for FixedBuffer<T, 4> {
    #[inline]
    fn index_mut(&mut self, edge: PhysicalEdge) -> &mut T {
        &mut self[edge.index()]
    }
}

impl<T: Copy> Index<Dimension> for FixedBuffer<T, 2> {
    type Output = T;

    #[inline]
    fn index(&self, dimension: Dimension) -> &T {
        &self[dimension.index()]
    }
}

impl<T: Copy> IndexMut<Dimension> for FixedBuffer<T, 2> {
    #[inline]
    fn index_mut(&mut self, dimension: Dimension) -> &mut T {
        &mut self[dimension.index()]
    }
}
