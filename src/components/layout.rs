//! The Box primitive: spacing shorthands, flex layout and decoration resolved
//! into a style.

use mosaic_theme::Theme;

use crate::{
    style::Style,
    theme::{RadiusValue, SpaceValue, resolve_color, resolve_thickness},
};

/// Resolved values for the four edges of a box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

/// Padding or margin shorthands. A side uses its own value when set, then
/// the axis value (`x` or `y`), then the all-sides value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpacingProps {
    pub all: Option<SpaceValue>,
    pub x: Option<SpaceValue>,
    pub y: Option<SpaceValue>,
    pub top: Option<SpaceValue>,
    pub right: Option<SpaceValue>,
    pub bottom: Option<SpaceValue>,
    pub left: Option<SpaceValue>,
}

impl SpacingProps {
    pub fn all(value: impl Into<SpaceValue>) -> Self {
        Self {
            all: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn x(mut self, value: impl Into<SpaceValue>) -> Self {
        self.x = Some(value.into());
        self
    }

    pub fn y(mut self, value: impl Into<SpaceValue>) -> Self {
        self.y = Some(value.into());
        self
    }

    pub fn top(mut self, value: impl Into<SpaceValue>) -> Self {
        self.top = Some(value.into());
        self
    }

    pub fn right(mut self, value: impl Into<SpaceValue>) -> Self {
        self.right = Some(value.into());
        self
    }

    pub fn bottom(mut self, value: impl Into<SpaceValue>) -> Self {
        self.bottom = Some(value.into());
        self
    }

    pub fn left(mut self, value: impl Into<SpaceValue>) -> Self {
        self.left = Some(value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn resolve(&self, theme: &Theme) -> Edges {
        let side = |own: Option<SpaceValue>, axis: Option<SpaceValue>| {
            own.or(axis)
                .or(self.all)
                .map_or(0., |value| value.resolve(theme))
        };

        Edges {
            top: side(self.top, self.y),
            right: side(self.right, self.x),
            bottom: side(self.bottom, self.y),
            left: side(self.left, self.x),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlexDirection {
    Row,
    #[default]
    Column,
    RowReverse,
    ColumnReverse,
}

impl FlexDirection {
    fn key(&self) -> &'static str {
        match self {
            FlexDirection::Row => "row",
            FlexDirection::Column => "column",
            FlexDirection::RowReverse => "row-reverse",
            FlexDirection::ColumnReverse => "column-reverse",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlexAlign {
    Start,
    Center,
    End,
    Stretch,
    Baseline,
}

impl FlexAlign {
    fn key(&self) -> &'static str {
        match self {
            FlexAlign::Start => "flex-start",
            FlexAlign::Center => "center",
            FlexAlign::End => "flex-end",
            FlexAlign::Stretch => "stretch",
            FlexAlign::Baseline => "baseline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlexJustify {
    Start,
    Center,
    End,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl FlexJustify {
    fn key(&self) -> &'static str {
        match self {
            FlexJustify::Start => "flex-start",
            FlexJustify::Center => "center",
            FlexJustify::End => "flex-end",
            FlexJustify::SpaceBetween => "space-between",
            FlexJustify::SpaceAround => "space-around",
            FlexJustify::SpaceEvenly => "space-evenly",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    Px(f32),
    /// `0..=100`.
    Percent(f32),
    Auto,
}

impl Dimension {
    pub const FULL: Dimension = Dimension::Percent(100.);

    pub(crate) fn apply(&self, style: Style, property: &'static str) -> Style {
        match self {
            Dimension::Px(pixels) => style.set(property, *pixels),
            Dimension::Percent(percent) => style.set(property, format!("{percent}%")),
            Dimension::Auto => style.set(property, "auto"),
        }
    }
}

impl From<f32> for Dimension {
    fn from(value: f32) -> Self {
        Dimension::Px(value)
    }
}

/// A border given as a thickness key (`"thin"`, `"2px"`) and a color key
/// (`"border"`, `"#e2e8f0"`).
#[derive(Debug, Clone, PartialEq)]
pub struct BorderProps {
    pub width: String,
    pub color: String,
}

impl Default for BorderProps {
    fn default() -> Self {
        Self {
            width: "thin".to_string(),
            color: "border".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoxProps {
    pub padding: SpacingProps,
    pub margin: SpacingProps,
    pub gap: Option<SpaceValue>,
    /// Color key, resolved like any other color prop.
    pub background: Option<String>,
    pub radius: Option<RadiusValue>,
    pub border: Option<BorderProps>,
    /// Sets `display: flex` when present.
    pub direction: Option<FlexDirection>,
    pub align: Option<FlexAlign>,
    pub justify: Option<FlexJustify>,
    pub wrap: bool,
    pub grow: Option<f32>,
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
}

pub fn build_box_style(props: &BoxProps, theme: &Theme) -> Style {
    let style = Style::new();

    let style = if props.padding.is_empty() {
        style
    } else {
        let padding = props.padding.resolve(theme);
        style.padding(padding.top, padding.right, padding.bottom, padding.left)
    };

    let style = if props.margin.is_empty() {
        style
    } else {
        let margin = props.margin.resolve(theme);
        style
            .set("marginTop", margin.top)
            .set("marginRight", margin.right)
            .set("marginBottom", margin.bottom)
            .set("marginLeft", margin.left)
    };

    style
        .when_some(props.direction, |this, direction| {
            this.set("display", "flex")
                .set("flexDirection", direction.key())
        })
        .when_some(props.align, |this, align| this.set("alignItems", align.key()))
        .when_some(props.justify, |this, justify| {
            this.set("justifyContent", justify.key())
        })
        .when(props.wrap, |this| this.set("flexWrap", "wrap"))
        .when_some(props.grow, |this, grow| this.set("flexGrow", grow))
        .when_some(props.gap, |this, gap| this.set("gap", gap.resolve(theme)))
        .when_some(props.background.as_deref(), |this, background| {
            this.bg(resolve_color(background, theme))
        })
        .when_some(props.radius, |this, radius| this.rounded(radius.resolve(theme)))
        .when_some(props.border.as_ref(), |this, border| {
            this.border(
                resolve_thickness(&border.width, theme),
                resolve_color(&border.color, theme),
            )
        })
        .when_some(props.width, |this, width| width.apply(this, "width"))
        .when_some(props.height, |this, height| height.apply(this, "height"))
}
