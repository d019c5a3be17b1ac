//! Measured sizes and the constraint modes a measurement is taken under.

use crate::Dimension;

/// How an available size passed to a measurement is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MeasureMode {
    /// No constraint; the content decides.
    #[default]
    Undefined,
    /// The result must equal the available size.
    Exactly,
    /// The available size is an upper bound.
    AtMost,
    /// Sentinel for a constraint that could not be derived. Behaves like `Undefined`.
    Invalid,
}

impl MeasureMode {
    /// Apply this mode to a content measurement.
    ///
    /// `Exactly` returns `available`, `AtMost` caps `measured` by `available`, and the
    /// unconstrained modes keep `measured`. A NaN `available` never constrains.
    #[inline]
    pub fn constrain(self, measured: f32, available: f32) -> f32 {
        if available.is_nan() {
            return measured;
        }
        match self {
            Self::Exactly => available,
            Self::AtMost if measured.is_nan() => available,
            Self::AtMost => measured.min(available),
            Self::Undefined | Self::Invalid => measured,
        }
    }

    /// Whether the mode pins the size.
    #[inline]
    pub const fn is_exact(self) -> bool {
        matches!(self, Self::Exactly)
    }
}

/// A width/height pair produced by measurement or requested by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutSize {
    pub width: f32,
    pub height: f32,
}

impl LayoutSize {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Both dimensions undefined.
    pub const UNDEFINED: Self = Self {
        width: f32::NAN,
        height: f32::NAN,
    };

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn get(self, dimension: Dimension) -> f32 {
        match dimension {
            Dimension::Width => self.width,
            Dimension::Height => self.height,
        }
    }

    #[inline]
    pub const fn set(&mut self, dimension: Dimension, value: f32) {
        match dimension {
            Dimension::Width => self.width = value,
            Dimension::Height => self.height = value,
        }
    }

    /// Replace NaN components with zero.
    #[inline]
    pub const fn or_zero(self) -> Self {
        Self {
            width: if self.width.is_nan() { 0.0 } else { self.width },
            height: if self.height.is_nan() { 0.0 } else { self.height },
        }
    }
}
