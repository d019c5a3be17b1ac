//! Tagged style dimension.
//!
//! A [`LayoutValue`] is a magnitude plus a [`Unit`]. `Undefined` and `Auto` always carry a NaN
//! magnitude; the constructors enforce that, so a NaN point or percentage collapses to
//! `Undefined`. Values are immutable: replace them, do not patch them.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// Unit tag of a [`LayoutValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Unit {
    /// No value was specified.
    #[default]
    Undefined,
    /// Absolute length in points.
    Point,
    /// Percentage of the owner's content box along the relevant axis.
    Percent,
    /// Size determined by the layout algorithm.
    Auto,
}

/// A style dimension.
#[derive(Debug, Clone, Copy)]
pub struct LayoutValue {
    value: f32,
    unit: Unit,
}

impl LayoutValue {
    pub const UNDEFINED: Self = Self {
        value: f32::NAN,
        unit: Unit::Undefined,
    };
    pub const AUTO: Self = Self {
        value: f32::NAN,
        unit: Unit::Auto,
    };
    pub const ZERO: Self = Self {
        value: 0.0,
        unit: Unit::Point,
    };

    /// Absolute length. A NaN magnitude yields `Undefined`.
    #[inline]
    pub const fn point(value: f32) -> Self {
        if value.is_nan() {
            Self::UNDEFINED
        } else {
            Self {
                value,
                unit: Unit::Point,
            }
        }
    }

    /// Percentage (`50.0` means half). A NaN magnitude yields `Undefined`.
    #[inline]
    pub const fn percent(value: f32) -> Self {
        if value.is_nan() {
            Self::UNDEFINED
        } else {
            Self {
                value,
                unit: Unit::Percent,
            }
        }
    }

    #[inline]
    pub const fn auto() -> Self {
        Self::AUTO
    }

    #[inline]
    pub const fn undefined() -> Self {
        Self::UNDEFINED
    }

    #[inline]
    pub const fn unit(self) -> Unit {
        self.unit
    }

    /// Raw magnitude. NaN for `Undefined` and `Auto`.
    #[inline]
    pub const fn value(self) -> f32 {
        self.value
    }

    #[inline]
    pub const fn is_auto(self) -> bool {
        matches!(self.unit, Unit::Auto)
    }

    #[inline]
    pub const fn is_undefined(self) -> bool {
        matches!(self.unit, Unit::Undefined)
    }

    /// True for points and percentages.
    #[inline]
    pub const fn is_defined(self) -> bool {
        matches!(self.unit, Unit::Point | Unit::Percent)
    }

    /// Resolve against `base` (the owner's size along the relevant axis).
    ///
    /// Percentages of an undefined (NaN) base resolve to `0` so NaN never leaks into
    /// downstream arithmetic. `Auto` and `Undefined` resolve to `None`.
    #[inline]
    pub fn resolve(self, base: f32) -> Option<f32> {
        match self.unit {
            Unit::Point => Some(self.value),
            Unit::Percent if base.is_nan() => Some(0.0),
            Unit::Percent => Some(self.value * base / 100.0),
            Unit::Auto | Unit::Undefined => None,
        }
    }

    /// Resolve against `base`, substituting `fallback` for `Auto`/`Undefined`.
    #[inline]
    pub fn resolve_or(self, base: f32, fallback: f32) -> f32 {
        self.resolve(base).unwrap_or(fallback)
    }
}

impl Default for LayoutValue {
    fn default() -> Self {
        Self::UNDEFINED
    }
}

impl PartialEq for LayoutValue {
    #[allow(clippy::float_cmp, reason = "defined magnitudes compare exactly")]
    fn eq(&self, other: &Self) -> bool {
        if self.unit != other.unit {
            return false;
        }
        match self.unit {
            // NaN-carrying sentinels compare by unit alone.
            Unit::Undefined | Unit::Auto => true,
            Unit::Point | Unit::Percent => self.value == other.value,
        }
    }
}

impl fmt::Display for LayoutValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Unit::Undefined => formatter.write_str("undefined"),
            Unit::Auto => formatter.write_str("auto"),
            Unit::Point => write!(formatter, "{}pt", self.value),
            Unit::Percent => write!(formatter, "{}%", self.value),
        }
    }
}

/// Failure to parse a [`LayoutValue`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid layout value: {input:?}")]
pub struct ParseValueError {
    input: String,
}

impl FromStr for LayoutValue {
    type Err = ParseValueError;

    /// Accepts `auto`, `undefined`, `<number>%`, `<number>`, `<number>pt` and `<number>px`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let invalid = || ParseValueError {
            input: input.to_owned(),
        };
        if trimmed.eq_ignore_ascii_case("auto") {
            return Ok(Self::AUTO);
        }
        if trimmed.eq_ignore_ascii_case("undefined") {
            return Ok(Self::UNDEFINED);
        }
        if let Some(number) = trimmed.strip_suffix('%') {
            let parsed: f32 = number.trim().parse().map_err(|_| invalid())?;
            return Ok(Self::percent(parsed));
        }
        let number = trimmed
            .strip_suffix("pt")
            .or_else(|| trimmed.strip_suffix("px"))
            .unwrap_or(trimmed);
        let parsed: f32 = number.trim().parse().map_err(|_| invalid())?;
        Ok(Self::point(parsed))
    }
}
