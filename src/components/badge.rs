use mosaic_theme::{Rgba, Theme};

use crate::{
    components::shared::with_font,
    style::Style,
    theme::{FontWeightKind, RadiusKind, SemanticColor, SizeKind, SpaceKind, ThicknessKind},
    utils::RgbaExt,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Brand,
    Success,
    Warning,
    Danger,
    Info,
}

impl BadgeTone {
    pub fn color(&self, theme: &Theme) -> Rgba {
        let semantic = match self {
            BadgeTone::Neutral => SemanticColor::Neutral,
            BadgeTone::Brand => SemanticColor::Brand,
            BadgeTone::Success => SemanticColor::Success,
            BadgeTone::Warning => SemanticColor::Warning,
            BadgeTone::Danger => SemanticColor::Danger,
            BadgeTone::Info => SemanticColor::Info,
        };

        *semantic.resolve(theme)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BadgeVariant {
    /// Tinted background with colored text.
    #[default]
    Subtle,
    Solid,
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeProps {
    pub tone: BadgeTone,
    pub variant: BadgeVariant,
    pub size: SizeKind,
    /// Leading status dot.
    pub dot: bool,
}

impl Default for BadgeProps {
    fn default() -> Self {
        Self {
            tone: BadgeTone::Neutral,
            variant: BadgeVariant::Subtle,
            size: SizeKind::Sm,
            dot: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BadgeStyles {
    pub root: Style,
    pub dot: Option<Style>,
}

pub fn build_badge_style(props: &BadgeProps, theme: &Theme) -> BadgeStyles {
    let tone = props.tone.color(theme);
    let config = props.size.config(theme);
    let font_size = (config.font_size - 2.).max(10.);

    let (background, text_color, border) = match props.variant {
        BadgeVariant::Subtle => (tone.alpha(0.12), tone, tone.alpha(0.)),
        BadgeVariant::Solid => (tone, tone.readable_foreground(theme), tone),
        BadgeVariant::Outline => (tone.alpha(0.), tone, tone.alpha(0.5)),
    };

    let root = with_font(Style::new(), theme, font_size, FontWeightKind::Medium)
        .set("display", "inline-flex")
        .set("alignItems", "center")
        .set("gap", *SpaceKind::Xs.resolve(theme))
        .set("height", (config.height * 0.6).round())
        .padding_xy(*SpaceKind::Sm.resolve(theme), 0.)
        .rounded(*RadiusKind::Full.resolve(theme))
        .bg(background)
        .text_color(text_color)
        .border(*ThicknessKind::Thin.resolve(theme), border)
        .set("whiteSpace", "nowrap");

    let dot = props.dot.then(|| {
        let size = *SpaceKind::Xs.resolve(theme) + 2.;

        Style::new()
            .size(size, size)
            .rounded(*RadiusKind::Full.resolve(theme))
            .bg(text_color)
    });

    BadgeStyles { root, dot }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants() {
        let theme = Theme::default_theme().clone();
        let danger = theme.colors().accent.destructive;

        let subtle = build_badge_style(
            &BadgeProps {
                tone: BadgeTone::Danger,
                ..Default::default()
            },
            &theme,
        );
        assert_eq!(subtle.root.color("color"), Some(danger));
        assert_eq!(subtle.root.color("backgroundColor"), Some(danger.alpha(0.12)));
        assert!(subtle.dot.is_none());

        let solid = build_badge_style(
            &BadgeProps {
                tone: BadgeTone::Danger,
                variant: BadgeVariant::Solid,
                dot: true,
                ..Default::default()
            },
            &theme,
        );
        assert_eq!(solid.root.color("backgroundColor"), Some(danger));
        assert_eq!(
            solid.dot.and_then(|dot| dot.color("backgroundColor")),
            solid.root.color("color")
        );
    }
}
