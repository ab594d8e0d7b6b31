use mosaic_theme::Theme;

use crate::{
    style::Style,
    theme::{DurationKind, EasingKind, FontWeightKind, SemanticColor, ThemeExt, ThicknessKind},
};

pub(crate) const DISABLED_OPACITY: f32 = 0.5;

pub(crate) fn with_transition(style: Style, properties: &[&str], theme: &Theme) -> Style {
    style.transition(
        properties,
        *DurationKind::Normal.resolve(theme),
        EasingKind::Standard.curve(theme),
    )
}

pub(crate) fn with_focus_ring(style: Style, theme: &Theme) -> Style {
    style.focus_ring(
        *SemanticColor::Focus.resolve(theme),
        *ThicknessKind::Medium.resolve(theme),
    )
}

pub(crate) fn with_disabled(style: Style) -> Style {
    style
        .set("opacity", DISABLED_OPACITY)
        .set("cursor", "not-allowed")
        .set("pointerEvents", "none")
}

pub(crate) fn with_cursor(style: Style, disabled: bool) -> Style {
    if disabled {
        with_disabled(style)
    } else {
        style.set("cursor", "pointer")
    }
}

pub(crate) fn with_font(style: Style, theme: &Theme, size: f32, weight: FontWeightKind) -> Style {
    style.font(
        theme.font_family(),
        size,
        *weight.resolve(theme),
        theme.layout.text.default_font.line_height,
    )
}
