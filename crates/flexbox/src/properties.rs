//! Container and item keywords.
//!
//! Each keyword enum parses from its CSS spelling (`"row-reverse"`, `"space-between"`, ...),
//! which is what layout fixtures and style loaders hand us.

use core::str::FromStr;

use thiserror::Error;

/// A keyword that is not valid for the property being parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {property} keyword: {keyword:?}")]
pub struct UnknownKeyword {
    pub property: &'static str,
    pub keyword: String,
}

impl UnknownKeyword {
    fn new(property: &'static str, keyword: &str) -> Self {
        Self {
            property,
            keyword: keyword.to_owned(),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum FlexDirection {
    Row,
    RowReverse,
    #[default]
    Column,
    ColumnReverse,
}

impl FlexDirection {
    #[inline]
    pub const fn is_row(self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }

    #[inline]
    pub const fn is_reverse(self) -> bool {
        matches!(self, Self::RowReverse | Self::ColumnReverse)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
    WrapReverse,
}

/// Main-axis distribution of free space.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum JustifyContent {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// Cross-axis placement of an item within its line.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum AlignItems {
    #[default]
    Stretch,
    FlexStart,
    Center,
    FlexEnd,
}

/// Cross-axis distribution of lines in a multi-line container.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum AlignContent {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
    Stretch,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl FromStr for FlexDirection {
    type Err = UnknownKeyword;

    fn from_str(keyword: &str) -> Result<Self, Self::Err> {
        match keyword.trim() {
            "row" => Ok(Self::Row),
            "row-reverse" => Ok(Self::RowReverse),
            "column" => Ok(Self::Column),
            "column-reverse" => Ok(Self::ColumnReverse),
            other => Err(UnknownKeyword::new("flex-direction", other)),
        }
    }
}

impl FromStr for FlexWrap {
    type Err = UnknownKeyword;

    fn from_str(keyword: &str) -> Result<Self, Self::Err> {
        match keyword.trim() {
            "nowrap" | "no-wrap" => Ok(Self::NoWrap),
            "wrap" => Ok(Self::Wrap),
            "wrap-reverse" => Ok(Self::WrapReverse),
            other => Err(UnknownKeyword::new("flex-wrap", other)),
        }
    }
}

impl FromStr for JustifyContent {
    type Err = UnknownKeyword;

    fn from_str(keyword: &str) -> Result<Self, Self::Err> {
        match keyword.trim() {
            "flex-start" | "start" => Ok(Self::FlexStart),
            "center" => Ok(Self::Center),
            "flex-end" | "end" => Ok(Self::FlexEnd),
            "space-between" => Ok(Self::SpaceBetween),
            "space-around" => Ok(Self::SpaceAround),
            "space-evenly" => Ok(Self::SpaceEvenly),
            other => Err(UnknownKeyword::new("justify-content", other)),
        }
    }
}

impl FromStr for AlignItems {
    type Err = UnknownKeyword;

    fn from_str(keyword: &str) -> Result<Self, Self::Err> {
        match keyword.trim() {
            "stretch" => Ok(Self::Stretch),
            "flex-start" | "start" => Ok(Self::FlexStart),
            "center" => Ok(Self::Center),
            "flex-end" | "end" => Ok(Self::FlexEnd),
            other => Err(UnknownKeyword::new("align-items", other)),
        }
    }
}

impl FromStr for AlignContent {
    type Err = UnknownKeyword;

    fn from_str(keyword: &str) -> Result<Self, Self::Err> {
        match keyword.trim() {
            "flex-start" | "start" => Ok(Self::FlexStart),
            "center" => Ok(Self::Center),
            "flex-end" | "end" => Ok(Self::FlexEnd),
            "stretch" => Ok(Self::Stretch),
            "space-between" => Ok(Self::SpaceBetween),
            "space-around" => Ok(Self::SpaceAround),
            "space-evenly" => Ok(Self::SpaceEvenly),
            other => Err(UnknownKeyword::new("align-content", other)),
        }
    }
}
