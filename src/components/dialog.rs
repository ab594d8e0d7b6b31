use mosaic_motion::animation;
use mosaic_theme::Theme;

use crate::{
    components::{
        shared::with_font,
        surface::{SurfaceVariant, build_surface_style},
    },
    style::Style,
    theme::{
        DurationKind, EasingKind, FontWeightKind, LayerKind, RadiusKind, ShadowKind, SizeKind,
        SpaceKind, TextSizeKind,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DialogProps {
    pub open: bool,
    pub surface: SurfaceVariant,
    /// Caps the content width. `Xs` is a compact alert, `Xl` a wide form.
    pub size: SizeKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyles {
    /// The dimmed backdrop.
    pub overlay: Style,
    pub content: Style,
    pub title: Style,
    pub description: Style,
}

/// Stays displayed while closed so the exit animation can play. The final
/// keyframe keeps it invisible and pointer events pass through.
pub(crate) fn overlay_style(open: bool, theme: &Theme) -> Style {
    Style::new()
        .set("position", "fixed")
        .set("top", 0.)
        .set("right", 0.)
        .set("bottom", 0.)
        .set("left", 0.)
        .set("zIndex", *LayerKind::Overlay.resolve(theme))
        .bg(theme.colors().overlay)
        .set("display", "block")
        .when(!open, |this| this.set("pointerEvents", "none"))
        .animation(
            if open {
                animation::FADE_IN
            } else {
                animation::FADE_OUT
            },
            *DurationKind::Normal.resolve(theme),
            EasingKind::Standard.curve(theme),
        )
}

pub(crate) fn title_style(theme: &Theme) -> Style {
    with_font(
        Style::new(),
        theme,
        *TextSizeKind::Lg.resolve(theme),
        FontWeightKind::Semibold,
    )
    .text_color(theme.colors().text.primary)
}

pub(crate) fn description_style(theme: &Theme) -> Style {
    with_font(
        Style::new(),
        theme,
        *TextSizeKind::Md.resolve(theme),
        FontWeightKind::Regular,
    )
    .text_color(theme.colors().text.secondary)
}

fn max_width(size: SizeKind) -> f32 {
    match size {
        SizeKind::Xs => 320.,
        SizeKind::Sm => 400.,
        SizeKind::Md => 520.,
        SizeKind::Lg => 640.,
        SizeKind::Xl => 800.,
    }
}

pub fn build_dialog_style(props: &DialogProps, theme: &Theme) -> OverlayStyles {
    let padding = *SpaceKind::Xl.resolve(theme);

    let content = build_surface_style(props.surface, theme)
        .set("position", "fixed")
        .set("top", "50%")
        .set("left", "50%")
        .set("transform", "translate(-50%, -50%)")
        .set("zIndex", *LayerKind::Modal.resolve(theme))
        .set("display", "flex")
        .when(!props.open, |this| this.set("pointerEvents", "none"))
        .set("flexDirection", "column")
        .set("gap", *SpaceKind::Md.resolve(theme))
        .set("width", "calc(100% - 32px)")
        .set("maxWidth", max_width(props.size))
        .set("maxHeight", "85vh")
        .set("overflowY", "auto")
        .set("boxSizing", "border-box")
        .padding(padding, padding, padding, padding)
        .rounded(*RadiusKind::Xl.resolve(theme))
        .shadow(*ShadowKind::Xl.resolve(theme))
        .animation(
            if props.open {
                animation::SCALE_IN
            } else {
                animation::SCALE_OUT
            },
            *DurationKind::Normal.resolve(theme),
            EasingKind::Emphasized.curve(theme),
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
    fn test_layers() {
        let theme = Theme::default_theme().clone();
        let styles = build_dialog_style(
            &DialogProps {
                open: true,
                ..Default::default()
            },
            &theme,
        );

        let overlay = styles.overlay.number("zIndex");
        let content = styles.content.number("zIndex");
        assert!(overlay < content);
        assert_eq!(styles.content.text("animationName"), Some(animation::SCALE_IN));
        assert_eq!(styles.overlay.text("display"), Some("block"));
        assert!(!styles.overlay.contains("pointerEvents"));
        assert!(!styles.content.contains("pointerEvents"));
        assert_eq!(styles.content.number("maxWidth"), Some(520.));
    }

    #[test]
    fn test_closed() {
        let theme = Theme::default_theme().clone();
        let styles = build_dialog_style(&DialogProps::default(), &theme);

        // Still laid out so the exit animations are visible.
        assert_eq!(styles.overlay.text("display"), Some("block"));
        assert_eq!(styles.content.text("display"), Some("flex"));
        assert_eq!(styles.overlay.text("animationName"), Some(animation::FADE_OUT));
        assert_eq!(styles.content.text("animationName"), Some(animation::SCALE_OUT));
        assert_eq!(styles.overlay.text("animationFillMode"), Some("both"));

        assert_eq!(styles.overlay.text("pointerEvents"), Some("none"));
        assert_eq!(styles.content.text("pointerEvents"), Some("none"));
    }
}
