//! Style inputs of a layout node.
//!
//! Styles are plain data. The style-resolution layer fills them in; the solver only reads them.
//! Per-edge values are stored in nine slots (see [`Edge`]) and collapsed to physical edges with
//! [`LayoutStyle::margin_for`] and friends.

use core::str::FromStr;

use layout_buffers::FixedBuffer2;
use layout_flexbox::{AlignContent, AlignItems, FlexDirection, FlexWrap, JustifyContent, UnknownKeyword};
use layout_values::{
    DimensionValues, Direction, Edge, EdgeValues, InsetValues, LayoutValue, PhysicalEdge, defaults,
};

use crate::LayoutConfig;

/// Per-item override of the container's `align-items`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum AlignSelf {
    #[default]
    Auto,
    FlexStart,
    Center,
    FlexEnd,
    Stretch,
}

impl AlignSelf {
    /// The effective alignment given the container's `align-items`.
    pub const fn resolve(self, align_items: AlignItems) -> AlignItems {
        match self {
            Self::Auto => align_items,
            Self::FlexStart => AlignItems::FlexStart,
            Self::Center => AlignItems::Center,
            Self::FlexEnd => AlignItems::FlexEnd,
            Self::Stretch => AlignItems::Stretch,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum PositionType {
    /// In flow; insets shift the laid-out box.
    #[default]
    Relative,
    /// Out of flow; placed against the parent's padding box.
    Absolute,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum Display {
    #[default]
    Flex,
    /// The node and its subtree take no space and get a zero layout.
    None,
}

impl FromStr for AlignSelf {
    type Err = UnknownKeyword;

    fn from_str(keyword: &str) -> Result<Self, Self::Err> {
        match keyword.trim() {
            "auto" => Ok(Self::Auto),
            "flex-start" | "start" => Ok(Self::FlexStart),
            "center" => Ok(Self::Center),
            "flex-end" | "end" => Ok(Self::FlexEnd),
            "stretch" => Ok(Self::Stretch),
            other => Err(UnknownKeyword {
                property: "align-self",
                keyword: other.to_owned(),
            }),
        }
    }
}

impl FromStr for PositionType {
    type Err = UnknownKeyword;

    fn from_str(keyword: &str) -> Result<Self, Self::Err> {
        match keyword.trim() {
            "relative" | "static" => Ok(Self::Relative),
            "absolute" => Ok(Self::Absolute),
            other => Err(UnknownKeyword {
                property: "position",
                keyword: other.to_owned(),
            }),
        }
    }
}

impl FromStr for Display {
    type Err = UnknownKeyword;

    fn from_str(keyword: &str) -> Result<Self, Self::Err> {
        match keyword.trim() {
            "flex" => Ok(Self::Flex),
            "none" => Ok(Self::None),
            other => Err(UnknownKeyword {
                property: "display",
                keyword: other.to_owned(),
            }),
        }
    }
}

/// Style inputs of one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutStyle {
    pub direction: Direction,
    pub flex_direction: FlexDirection,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_self: AlignSelf,
    pub align_content: AlignContent,
    pub flex_wrap: FlexWrap,
    pub position_type: PositionType,
    pub display: Display,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub flex_basis: LayoutValue,
    pub margin: EdgeValues,
    pub padding: EdgeValues,
    pub border: EdgeValues,
    /// Insets: left, top, right, bottom, start, end.
    pub position: InsetValues,
    pub dimensions: DimensionValues,
    pub min_dimensions: DimensionValues,
    pub max_dimensions: DimensionValues,
    /// Spacing between items, indexed by axis: `gap[Dimension::Width]` separates columns,
    /// `gap[Dimension::Height]` separates rows.
    pub gap: FixedBuffer2<f32>,
}

impl Default for LayoutStyle {
    fn default() -> Self {
        Self {
            direction: Direction::Inherit,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::FlexStart,
            align_items: AlignItems::Stretch,
            align_self: AlignSelf::Auto,
            align_content: AlignContent::FlexStart,
            flex_wrap: FlexWrap::NoWrap,
            position_type: PositionType::Relative,
            display: Display::Flex,
            flex_grow: defaults::FLEX_GROW,
            flex_shrink: defaults::FLEX_SHRINK,
            flex_basis: defaults::FLEX_BASIS,
            margin: defaults::EDGES,
            padding: defaults::EDGES,
            border: defaults::EDGES,
            position: defaults::INSETS,
            dimensions: defaults::DIMENSIONS,
            min_dimensions: defaults::MIN_DIMENSIONS,
            max_dimensions: defaults::MAX_DIMENSIONS,
            gap: FixedBuffer2::filled(0.0),
        }
    }
}

impl LayoutStyle {
    /// Web-flavoured defaults: rows and stretched lines.
    pub fn web() -> Self {
        Self {
            flex_direction: FlexDirection::Row,
            align_content: AlignContent::Stretch,
            ..Self::default()
        }
    }

    /// Defaults matching the tree's configuration.
    pub fn for_config(config: &LayoutConfig) -> Self {
        if config.use_web_defaults {
            Self::web()
        } else {
            Self::default()
        }
    }

    pub fn margin_for(&self, edge: PhysicalEdge, direction: Direction) -> LayoutValue {
        collapse_edge(&self.margin, edge, direction)
    }

    pub fn padding_for(&self, edge: PhysicalEdge, direction: Direction) -> LayoutValue {
        collapse_edge(&self.padding, edge, direction)
    }

    pub fn border_for(&self, edge: PhysicalEdge, direction: Direction) -> LayoutValue {
        collapse_edge(&self.border, edge, direction)
    }

    /// Inset for a physical edge. Logical insets win over physical ones.
    pub fn inset_for(&self, edge: PhysicalEdge, direction: Direction) -> LayoutValue {
        if let Some(logical) = logical_slot(edge, direction)
            && self.position[logical].is_defined()
        {
            return self.position[logical];
        }
        self.position[edge.as_edge()]
    }
}

/// The logical slot that maps onto a horizontal physical edge under `direction`.
const fn logical_slot(edge: PhysicalEdge, direction: Direction) -> Option<Edge> {
    match (edge, direction.is_rtl()) {
        (PhysicalEdge::Left, false) | (PhysicalEdge::Right, true) => Some(Edge::Start),
        (PhysicalEdge::Right, false) | (PhysicalEdge::Left, true) => Some(Edge::End),
        (PhysicalEdge::Top | PhysicalEdge::Bottom, _) => None,
    }
}

/// Collapse the nine edge slots onto one physical edge.
///
/// Precedence: logical (`Start`/`End`), physical, axis (`Horizontal`/`Vertical`), then `All`.
fn collapse_edge(edges: &EdgeValues, edge: PhysicalEdge, direction: Direction) -> LayoutValue {
    let axis = match edge {
        PhysicalEdge::Left | PhysicalEdge::Right => Edge::Horizontal,
        PhysicalEdge::Top | PhysicalEdge::Bottom => Edge::Vertical,
    };
    let logical = logical_slot(edge, direction);
    logical
        .into_iter()
        .chain([edge.as_edge(), axis, Edge::All])
        .map(|slot| edges[slot])
        .find(|value| !value.is_undefined())
        .unwrap_or(LayoutValue::UNDEFINED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if edge precedence does not follow logical, physical, axis, all.
    fn edge_precedence() {
        let mut style = LayoutStyle::default();
        style.margin[Edge::All] = LayoutValue::point(1.0);
        style.margin[Edge::Horizontal] = LayoutValue::point(2.0);
        style.margin[Edge::Left] = LayoutValue::point(3.0);
        style.margin[Edge::Start] = LayoutValue::point(4.0);
        let ltr = Direction::Ltr;
        assert_eq!(style.margin_for(PhysicalEdge::Left, ltr), LayoutValue::point(4.0));
        assert_eq!(style.margin_for(PhysicalEdge::Right, ltr), LayoutValue::point(2.0));
        assert_eq!(style.margin_for(PhysicalEdge::Top, ltr), LayoutValue::point(1.0));
        // Right-to-left maps Start onto the right edge.
        let rtl = Direction::Rtl;
        assert_eq!(style.margin_for(PhysicalEdge::Right, rtl), LayoutValue::point(4.0));
        assert_eq!(style.margin_for(PhysicalEdge::Left, rtl), LayoutValue::point(3.0));
        assert!(style.padding_for(PhysicalEdge::Bottom, ltr).is_undefined());
    }

    #[test]
    /// # Panics
    /// Panics if auto margins are not reported as auto through the collapse.
    fn auto_margins_survive_collapse() {
        let mut style = LayoutStyle::default();
        style.margin[Edge::Horizontal] = LayoutValue::auto();
        assert!(style.margin_for(PhysicalEdge::Left, Direction::Ltr).is_auto());
        assert!(style.margin_for(PhysicalEdge::Top, Direction::Ltr).is_undefined());
    }

    #[test]
    /// # Panics
    /// Panics if logical insets do not win over physical ones.
    fn logical_insets_win() {
        let mut style = LayoutStyle::default();
        style.position[Edge::Left] = LayoutValue::point(5.0);
        style.position[Edge::End] = LayoutValue::point(7.0);
        assert_eq!(style.inset_for(PhysicalEdge::Left, Direction::Ltr), LayoutValue::point(5.0));
        assert_eq!(style.inset_for(PhysicalEdge::Left, Direction::Rtl), LayoutValue::point(7.0));
        assert!(style.inset_for(PhysicalEdge::Top, Direction::Ltr).is_undefined());
    }

    #[test]
    /// # Panics
    /// Panics if the default and web profiles differ from the documented values.
    fn default_profiles() {
        let base = LayoutStyle::default();
        assert_eq!(base.flex_direction, FlexDirection::Column);
        assert!((base.flex_shrink - 1.0).abs() < f32::EPSILON);
        assert!(base.flex_grow.abs() < f32::EPSILON);
        assert!(base.dimensions[0].is_auto());
        let web = LayoutStyle::for_config(&LayoutConfig::default().with_web_defaults(true));
        assert_eq!(web.flex_direction, FlexDirection::Row);
        assert_eq!(web.align_content, AlignContent::Stretch);
        assert_eq!("absolute".parse::<PositionType>(), Ok(PositionType::Absolute));
        assert_eq!(AlignSelf::Auto.resolve(AlignItems::Center), AlignItems::Center);
    }
}
