use mosaic_motion::animation;
use mosaic_theme::Theme;

use crate::{
    components::{
        dialog::{OverlayStyles, description_style, overlay_style, title_style},
        surface::{SurfaceVariant, build_surface_style},
    },
    style::Style,
    theme::{DurationKind, EasingKind, LayerKind, ShadowKind, SpaceKind},
};

/// Edge of the viewport a sheet slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SheetSide {
    Top,
    #[default]
    Right,
    Bottom,
    Left,
}

impl SheetSide {
    pub fn is_horizontal(&self) -> bool {
        matches!(self, SheetSide::Left | SheetSide::Right)
    }

    fn animation(&self) -> &'static str {
        match self {
            SheetSide::Top => animation::SLIDE_IN_FROM_TOP,
            SheetSide::Right => animation::SLIDE_IN_FROM_RIGHT,
            SheetSide::Bottom => animation::SLIDE_IN_FROM_BOTTOM,
            SheetSide::Left => animation::SLIDE_IN_FROM_LEFT,
        }
    }

    fn anchored(&self, style: Style) -> Style {
        match self {
            SheetSide::Top => style.set("top", 0.).set("left", 0.).set("right", 0.),
            SheetSide::Right => style.set("top", 0.).set("right", 0.).set("bottom", 0.),
            SheetSide::Bottom => style.set("bottom", 0.).set("left", 0.).set("right", 0.),
            SheetSide::Left => style.set("top", 0.).set("left", 0.).set("bottom", 0.),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetProps {
    pub open: bool,
    pub side: SheetSide,
    pub surface: SurfaceVariant,
    /// Width for left/right sheets, height for top/bottom ones.
    pub extent: f32,
}

impl Default for SheetProps {
    fn default() -> Self {
        Self {
            open: false,
            side: SheetSide::Right,
            surface: SurfaceVariant::Solid,
            extent: 384.,
        }
    }
}

pub fn build_sheet_style(props: &SheetProps, theme: &Theme) -> OverlayStyles {
    let padding = *SpaceKind::Xl.resolve(theme);

    let content = build_surface_style(props.surface, theme)
        .set("position", "fixed")
        .set("zIndex", *LayerKind::Modal.resolve(theme))
        .set("display", if props.open { "flex" } else { "none" })
        .set("flexDirection", "column")
        .set("gap", *SpaceKind::Md.resolve(theme))
        .set("boxSizing", "border-box")
        .padding(padding, padding, padding, padding)
        .shadow(*ShadowKind::Xl.resolve(theme));

    let content = props.side.anchored(content);
    let content = if props.side.is_horizontal() {
        content.set("width", props.extent).set("maxWidth", "100%")
    } else {
        content.set("height", props.extent).set("maxHeight", "100%")
    };

    let content = content.animation(
        props.side.animation(),
        *DurationKind::Slow.resolve(theme),
        EasingKind::Decelerate.curve(theme),
    );

    OverlayStyles {
        overlay: overlay_style(props.open, theme),
        content,
        title: title_style(theme),
        description: description_style(theme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_anchoring() {
        let theme = Theme::default_theme().clone();

        let right = build_sheet_style(&SheetProps::default(), &theme);
        assert_eq!(right.content.number("right"), Some(0.));
        assert_eq!(right.content.number("width"), Some(384.));
        assert!(!right.content.contains("left"));
        assert_eq!(
            right.content.text("animationName"),
            Some(animation::SLIDE_IN_FROM_RIGHT)
        );

        let bottom = build_sheet_style(
            &SheetProps {
                side: SheetSide::Bottom,
                extent: 240.,
                ..Default::default()
            },
            &theme,
        );
        assert_eq!(bottom.content.number("bottom"), Some(0.));
        assert_eq!(bottom.content.number("height"), Some(240.));
        assert!(!bottom.content.contains("width"));
    }
}
