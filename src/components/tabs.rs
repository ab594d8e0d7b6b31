use mosaic_theme::Theme;

use crate::{
    components::{
        shared::{with_cursor, with_focus_ring, with_font, with_transition},
        state::InteractionState,
    },
    first_match,
    style::Style,
    theme::{FontWeightKind, RadiusKind, SizeKind, SpaceKind, SurfaceLayerKind, ThicknessKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabsVariant {
    /// Triggers sit on a filled track, the active one raised.
    #[default]
    Pill,
    /// Triggers sit on a baseline with an indicator under the active one.
    Underline,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TabsProps {
    pub variant: TabsVariant,
    pub size: SizeKind,
    pub layer: SurfaceLayerKind,
    pub full_width: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabsStyles {
    pub list: Style,
    /// Present for the underline variant.
    pub indicator: Option<Style>,
}

pub fn build_tabs_style(props: &TabsProps, theme: &Theme) -> TabsStyles {
    let colors = theme.colors();
    let config = props.size.config(theme);
    let padding = *SpaceKind::Xxs.resolve(theme);

    let list = Style::new()
        .set("display", if props.full_width { "flex" } else { "inline-flex" })
        .set("alignItems", "center")
        .set("position", "relative")
        .when(props.full_width, |this| this.set("width", "100%"));

    let list = match props.variant {
        TabsVariant::Pill => list
            .set("gap", padding)
            .padding(padding, padding, padding, padding)
            .rounded(config.radius + padding)
            .bg(*props.layer.next().resolve(theme)),
        TabsVariant::Underline => list
            .set("gap", config.gap)
            .set("borderBottomWidth", *ThicknessKind::Thin.resolve(theme))
            .set("borderBottomStyle", "solid")
            .set("borderBottomColor", colors.border.subtle),
    };

    let indicator = (props.variant == TabsVariant::Underline).then(|| {
        let indicator = Style::new()
            .set("position", "absolute")
            .set("bottom", -*ThicknessKind::Thin.resolve(theme))
            .set("height", *ThicknessKind::Medium.resolve(theme))
            .rounded(*RadiusKind::Full.resolve(theme))
            .bg(colors.accent.brand);

        with_transition(indicator, &["left", "width"], theme)
    });

    TabsStyles { list, indicator }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TabTriggerProps {
    pub variant: TabsVariant,
    pub size: SizeKind,
    pub layer: SurfaceLayerKind,
    pub active: bool,
    pub state: InteractionState,
    pub full_width: bool,
}

pub fn build_tab_trigger_style(props: &TabTriggerProps, theme: &Theme) -> Style {
    let colors = theme.colors();
    let config = props.size.config(theme);
    let state = props.state;
    let height = config.height - *SpaceKind::Xs.resolve(theme);

    let text_color = first_match!({
        state.disabled => colors.text.muted,
        props.active => colors.text.primary,
        state.is_hovered() => colors.text.primary,
        _ => colors.text.secondary
    });

    let trigger = with_font(
        Style::new(),
        theme,
        config.font_size,
        if props.active {
            FontWeightKind::Semibold
        } else {
            FontWeightKind::Medium
        },
    )
    .flex_center()
    .set("height", height)
    .padding_xy(config.padding_x * 0.75, 0.)
    .text_color(text_color)
    .set("whiteSpace", "nowrap")
    .when(props.full_width, |this| this.set("flex", 1.));

    let trigger = match props.variant {
        TabsVariant::Pill => {
            let background = first_match!({
                props.active => props.layer.resolve(theme),
                state.is_hovered() => colors.text.primary.alpha(0.04),
                _ => colors.text.primary.alpha(0.)
            });

            trigger
                .rounded(config.radius)
                .bg(background)
                .when(props.active, |this| {
                    this.shadow(theme.shadows().sm)
                })
        }
        TabsVariant::Underline => trigger.bg(colors.text.primary.alpha(0.)),
    };

    let trigger = with_transition(trigger, &["color", "backgroundColor"], theme);
    let trigger = with_cursor(trigger, state.disabled);

    if state.shows_focus_ring() {
        with_focus_ring(trigger, theme)
    } else {
        trigger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> Theme {
        Theme::default_theme().clone()
    }

    #[test]
    fn test_active_pill_is_raised() {
        let theme = theme();
        let active = build_tab_trigger_style(
            &TabTriggerProps {
                active: true,
                ..Default::default()
            },
            &theme,
        );
        let idle = build_tab_trigger_style(&TabTriggerProps::default(), &theme);

        assert!(active.contains("boxShadow"));
        assert!(!idle.contains("boxShadow"));
        assert_eq!(active.color("color"), Some(theme.colors().text.primary));
        assert_eq!(idle.color("color"), Some(theme.colors().text.secondary));
    }

    #[test]
    fn test_disabled_trigger() {
        let theme = theme();
        let style = build_tab_trigger_style(
            &TabTriggerProps {
                active: true,
                state: InteractionState {
                    disabled: true,
                    hovered: true,
                    ..Default::default()
                },
                ..Default::default()
            },
            &theme,
        );

        assert_eq!(style.color("color"), Some(theme.colors().text.muted));
        assert_eq!(style.number("opacity"), Some(0.5));
    }

    #[test]
    fn test_underline_has_indicator() {
        let theme = theme();
        let underline = build_tabs_style(
            &TabsProps {
                variant: TabsVariant::Underline,
                ..Default::default()
            },
            &theme,
        );
        let pill = build_tabs_style(&TabsProps::default(), &theme);

        assert!(underline.indicator.is_some());
        assert!(pill.indicator.is_none());
        assert_eq!(
            underline.indicator.and_then(|i| i.color("backgroundColor")),
            Some(theme.colors().accent.brand)
        );
    }
}
