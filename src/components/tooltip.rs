use mosaic_motion::animation;
use mosaic_theme::Theme;

use crate::{
    components::{popover::Side, shared::with_font},
    style::Style,
    theme::{DurationKind, EasingKind, FontWeightKind, LayerKind, RadiusKind, SpaceKind, TextSizeKind},
};

const TOOLTIP_MAX_WIDTH: f32 = 280.;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TooltipProps {
    pub open: bool,
    pub side: Side,
}

/// Tooltips invert the palette: primary text color as the fill, primary
/// background color as the text.
pub fn build_tooltip_style(props: &TooltipProps, theme: &Theme) -> Style {
    let colors = theme.colors();

    with_font(
        Style::new(),
        theme,
        *TextSizeKind::Xs.resolve(theme),
        FontWeightKind::Medium,
    )
    .set("position", "absolute")
    .set("zIndex", *LayerKind::Tooltip.resolve(theme))
    .set("display", if props.open { "block" } else { "none" })
    .set("maxWidth", TOOLTIP_MAX_WIDTH)
    .padding_xy(*SpaceKind::Sm.resolve(theme), *SpaceKind::Xs.resolve(theme))
    .rounded(*RadiusKind::Sm.resolve(theme))
    .bg(colors.text.primary)
    .text_color(colors.background.primary)
    .set("pointerEvents", "none")
    .set("transformOrigin", props.side.transform_origin())
    .when(props.open, |this| {
        this.animation(
            animation::FADE_IN,
            *DurationKind::Fast.resolve(theme),
            EasingKind::Standard.curve(theme),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeExt;

    #[test]
    fn test_tooltip_inverts_palette() {
        let mut theme = Theme::default_theme().clone();

        for _ in 0..2 {
            let style = build_tooltip_style(
                &TooltipProps {
                    open: true,
                    ..Default::default()
                },
                &theme,
            );

            assert_eq!(
                style.color("backgroundColor"),
                Some(theme.colors().text.primary)
            );
            assert_eq!(style.color("color"), Some(theme.colors().background.primary));
            assert_eq!(style.number("zIndex"), Some(1600.));

            theme.toggle_variant();
        }
    }
}
