use mosaic_motion::animation;
use mosaic_theme::Theme;

use crate::{
    components::{
        InputProps, build_input_style,
        shared::{with_font, with_transition},
        state::{FieldState, InteractionState},
    },
    first_match,
    style::Style,
    theme::{
        DurationKind, EasingKind, FontWeightKind, LayerKind, RadiusKind, ShadowKind, SizeKind,
        SpaceKind, SurfaceLayerKind, ThicknessKind,
    },
};

const MENU_MAX_HEIGHT: f32 = 280.;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SelectProps {
    pub size: SizeKind,
    pub layer: SurfaceLayerKind,
    pub state: FieldState,
    pub open: bool,
    /// A value is selected, so the placeholder is hidden.
    pub has_value: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectStyles {
    pub trigger: Style,
    pub value: Style,
    pub placeholder: Style,
    pub chevron: Style,
    pub menu: Style,
}

pub fn build_select_style(props: &SelectProps, theme: &Theme) -> SelectStyles {
    let colors = theme.colors();
    let config = props.size.config(theme);

    // While open the trigger keeps its focused look.
    let state = FieldState {
        interaction: InteractionState {
            focused: props.state.interaction.focused || props.open,
            ..props.state.interaction
        },
        ..props.state
    };
    let input = build_input_style(
        &InputProps {
            size: props.size,
            layer: props.layer,
            state,
            has_trailing_icon: true,
            ..Default::default()
        },
        theme,
    );

    let trigger = input
        .container
        .set("justifyContent", "space-between")
        .set("userSelect", "none")
        .when(!props.state.interaction.disabled, |this| {
            this.set("cursor", "pointer")
        });

    let value = input
        .field
        .set("overflow", "hidden")
        .set("whiteSpace", "nowrap")
        .set("textOverflow", "ellipsis")
        .when(!props.has_value, |this| this.text_color(colors.text.muted));

    let placeholder = input.placeholder;

    let chevron = input
        .trailing_icon
        .set("transform", if props.open { "rotate(180deg)" } else { "rotate(0deg)" });
    let chevron = with_transition(chevron, &["transform"], theme);

    let menu = build_menu_style(props.layer, props.open, theme).set("minWidth", "100%");

    SelectStyles {
        trigger,
        value,
        placeholder,
        chevron,
        menu: menu.set("top", config.height + config.gap / 2.),
    }
}

/// The floating list shared by select, combobox and command menus.
pub(crate) fn build_menu_style(layer: SurfaceLayerKind, open: bool, theme: &Theme) -> Style {
    let colors = theme.colors();
    let surface = layer.next().resolve(theme);

    Style::new()
        .set("position", "absolute")
        .set("left", 0.)
        .set("zIndex", *LayerKind::Dropdown.resolve(theme))
        .set("display", if open { "flex" } else { "none" })
        .set("flexDirection", "column")
        .set("boxSizing", "border-box")
        .set("maxHeight", MENU_MAX_HEIGHT)
        .set("overflowY", "auto")
        .set("padding", *SpaceKind::Xs.resolve(theme))
        .rounded(*RadiusKind::Md.resolve(theme))
        .border(*ThicknessKind::Thin.resolve(theme), colors.border.subtle)
        .bg(*surface)
        .shadow(*ShadowKind::Md.resolve(theme))
        .when(open, |this| {
            this.animation(
                animation::SCALE_IN,
                *DurationKind::Fast.resolve(theme),
                EasingKind::Decelerate.curve(theme),
            )
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SelectItemProps {
    pub size: SizeKind,
    pub highlighted: bool,
    pub selected: bool,
    pub disabled: bool,
    pub hovered: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectItemStyles {
    pub root: Style,
    pub label: Style,
    /// Check mark next to the selected item.
    pub indicator: Style,
}

pub fn build_select_item_style(props: &SelectItemProps, theme: &Theme) -> SelectItemStyles {
    let colors = theme.colors();
    let config = props.size.config(theme);
    let padding_y = *SpaceKind::Xs.resolve(theme) + 2.;

    let bg_color = first_match!({
        props.disabled => colors.accent.brand.alpha(0.),
        props.highlighted => colors.accent.brand.alpha(0.1),
        props.hovered => colors.text.primary.alpha(0.05),
        _ => colors.accent.brand.alpha(0.)
    });

    let text_color = first_match!({
        props.disabled => colors.text.muted,
        props.selected => colors.accent.brand,
        _ => colors.text.primary
    });

    let root = Style::new()
        .set("display", "flex")
        .set("alignItems", "center")
        .set("justifyContent", "space-between")
        .set("gap", config.gap)
        .padding_xy(config.padding_x * 0.75, padding_y)
        .rounded(*RadiusKind::Sm.resolve(theme))
        .bg(bg_color)
        .set("cursor", if props.disabled { "not-allowed" } else { "pointer" })
        .when(props.disabled, |this| this.set("opacity", 0.5));

    let label = with_font(
        Style::new(),
        theme,
        config.font_size,
        if props.selected {
            FontWeightKind::Medium
        } else {
            FontWeightKind::Regular
        },
    )
    .text_color(text_color);

    let indicator = Style::new()
        .size(config.icon_size, config.icon_size)
        .text_color(colors.accent.brand)
        .set("opacity", if props.selected { 1. } else { 0. });

    SelectItemStyles {
        root,
        label,
        indicator,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> Theme {
        Theme::default_theme().clone()
    }

    #[test]
    fn test_open_menu() {
        let theme = theme();
        let closed = build_select_style(&SelectProps::default(), &theme);
        let open = build_select_style(
            &SelectProps {
                open: true,
                ..Default::default()
            },
            &theme,
        );

        assert_eq!(closed.menu.text("display"), Some("none"));
        assert_eq!(open.menu.text("display"), Some("flex"));
        assert_eq!(open.menu.text("animationName"), Some(animation::SCALE_IN));
        assert_eq!(open.menu.number("zIndex"), Some(1000.));
        assert_eq!(
            open.trigger.color("borderColor"),
            Some(theme.colors().border.focus)
        );
        assert_eq!(open.chevron.text("transform"), Some("rotate(180deg)"));
    }

    #[test]
    fn test_placeholder_color_without_value() {
        let theme = theme();
        let styles = build_select_style(&SelectProps::default(), &theme);
        assert_eq!(styles.value.color("color"), Some(theme.colors().text.muted));
    }

    #[test]
    fn test_item_precedence() {
        let theme = theme();
        let colors = theme.colors();

        let disabled = build_select_item_style(
            &SelectItemProps {
                highlighted: true,
                selected: true,
                disabled: true,
                ..Default::default()
            },
            &theme,
        );
        assert_eq!(disabled.label.color("color"), Some(colors.text.muted));
        assert!(
            disabled
                .root
                .color("backgroundColor")
                .is_some_and(|bg| bg.is_transparent())
        );

        let highlighted = build_select_item_style(
            &SelectItemProps {
                highlighted: true,
                hovered: true,
                ..Default::default()
            },
            &theme,
        );
        assert_eq!(
            highlighted.root.color("backgroundColor"),
            Some(colors.accent.brand.alpha(0.1))
        );

        let selected = build_select_item_style(
            &SelectItemProps {
                selected: true,
                ..Default::default()
            },
            &theme,
        );
        assert_eq!(selected.label.color("color"), Some(colors.accent.brand));
        assert_eq!(selected.indicator.number("opacity"), Some(1.));
    }
}
