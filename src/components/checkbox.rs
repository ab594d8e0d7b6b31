use mosaic_motion::TransitionGoal;
use mosaic_theme::{TRANSPARENT, Theme};

use crate::{
    components::{
        shared::{with_cursor, with_focus_ring, with_font, with_transition},
        state::FieldState,
    },
    first_match,
    style::Style,
    theme::{FontWeightKind, RadiusKind, SizeKind, SurfaceLayerKind, ThicknessKind},
    utils::RgbaExt,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckedState {
    #[default]
    Unchecked,
    Checked,
    /// Part of a group is checked.
    Indeterminate,
}

impl CheckedState {
    pub fn is_filled(&self) -> bool {
        !matches!(self, CheckedState::Unchecked)
    }

    /// Clicking an indeterminate box checks it.
    pub fn toggled(self) -> Self {
        match self {
            CheckedState::Checked => CheckedState::Unchecked,
            CheckedState::Unchecked | CheckedState::Indeterminate => CheckedState::Checked,
        }
    }
}

impl From<bool> for CheckedState {
    fn from(value: bool) -> Self {
        if value {
            CheckedState::Checked
        } else {
            CheckedState::Unchecked
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CheckboxProps {
    pub size: SizeKind,
    pub layer: SurfaceLayerKind,
    pub checked: CheckedState,
    pub state: FieldState,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckboxStyles {
    pub root: Style,
    pub control: Style,
    /// The check mark or the indeterminate dash.
    pub indicator: Style,
    pub label: Style,
}

pub fn build_checkbox_style(props: &CheckboxProps, theme: &Theme) -> CheckboxStyles {
    let colors = theme.colors();
    let config = props.size.config(theme);
    let interaction = props.state.interaction;

    let box_size = config.icon_size + 2.;
    let primary_accent_color = colors.accent.brand;
    let primary_text_color = colors.text.primary;
    let background_color = props.layer.resolve(theme);
    let border_color = *props.layer.next().resolve(theme);
    let border_hover_color = border_color.apply_delta(&primary_text_color, 0.07);
    let border_click_down_color = border_color.apply_delta(&primary_text_color, 0.16);

    let is_disabled = interaction.disabled;
    let is_filled = props.checked.is_filled();
    let is_focus = interaction.shows_focus_ring();
    let is_click_down = interaction.is_pressed() && !props.state.read_only;
    let is_hover = interaction.is_hovered() && !props.state.read_only;

    let control_border_color = first_match!({
        is_disabled => border_color,
        props.state.invalid => colors.accent.destructive,
        is_filled => primary_accent_color,
        is_focus => primary_accent_color,
        is_click_down => border_click_down_color,
        is_hover => border_hover_color,
        _ => border_color
    });

    let fill_color = first_match!({
        is_filled && props.state.invalid => colors.accent.destructive,
        is_filled => primary_accent_color,
        _ => background_color
    });

    let root = Style::new()
        .set("display", "inline-flex")
        .set("alignItems", "center")
        .set("gap", config.gap);
    let root = with_cursor(root, is_disabled);

    let control = Style::new()
        .set("position", "relative")
        .set("boxSizing", "border-box")
        .set("flexShrink", 0.)
        .size(box_size, box_size)
        .flex_center()
        .rounded(*RadiusKind::Sm.resolve(theme))
        .border(*ThicknessKind::Thin.resolve(theme), control_border_color)
        .bg(fill_color);
    let control = with_transition(control, &["backgroundColor", "borderColor"], theme);
    let control = if is_focus {
        with_focus_ring(control, theme)
    } else {
        control
    };

    let indicator_color = if is_filled {
        fill_color.readable_foreground(theme)
    } else {
        TRANSPARENT
    };

    let indicator = match props.checked {
        CheckedState::Indeterminate => Style::new()
            .size((box_size * 0.5).round(), *ThicknessKind::Medium.resolve(theme))
            .rounded(*RadiusKind::Full.resolve(theme))
            .bg(indicator_color),
        CheckedState::Checked | CheckedState::Unchecked => Style::new()
            .size(config.icon_size - 2., config.icon_size - 2.)
            .text_color(indicator_color)
            .set("opacity", if is_filled { 1. } else { 0. }),
    };

    let label = with_font(Style::new(), theme, config.font_size, FontWeightKind::Regular)
        .text_color(if props.state.invalid {
            colors.accent.destructive
        } else {
            primary_text_color
        });

    CheckboxStyles {
        root,
        control,
        indicator,
        label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::InteractionState;

    fn theme() -> Theme {
        Theme::default_theme().clone()
    }

    #[test]
    fn test_checked_fills_with_brand() {
        let theme = theme();
        let styles = build_checkbox_style(
            &CheckboxProps {
                checked: CheckedState::Checked,
                ..Default::default()
            },
            &theme,
        );

        assert_eq!(
            styles.control.color("backgroundColor"),
            Some(theme.colors().accent.brand)
        );
        assert_eq!(styles.indicator.number("opacity"), Some(1.));
        assert_eq!(
            styles.indicator.color("color"),
            Some(theme.colors().text.inverse)
        );
    }

    #[test]
    fn test_invalid_border() {
        let theme = theme();
        let styles = build_checkbox_style(
            &CheckboxProps {
                state: FieldState {
                    interaction: InteractionState::hovered(),
                    invalid: true,
                    read_only: false,
                },
                ..Default::default()
            },
            &theme,
        );

        assert_eq!(
            styles.control.color("borderColor"),
            Some(theme.colors().accent.destructive)
        );
    }

    #[test]
    fn test_indeterminate_draws_dash() {
        let theme = theme();
        let styles = build_checkbox_style(
            &CheckboxProps {
                checked: CheckedState::Indeterminate,
                ..Default::default()
            },
            &theme,
        );

        assert_eq!(styles.indicator.number("height"), Some(2.));
        assert!(styles.indicator.contains("backgroundColor"));
    }

    #[test]
    fn test_disabled_ignores_invalid() {
        let theme = theme();
        let props = CheckboxProps {
            state: FieldState {
                interaction: InteractionState::disabled(),
                invalid: true,
                read_only: false,
            },
            ..Default::default()
        };
        let styles = build_checkbox_style(&props, &theme);

        assert_eq!(
            styles.control.color("borderColor"),
            Some(*props.layer.next().resolve(&theme))
        );
        assert_eq!(styles.root.number("opacity"), Some(0.5));
    }

    #[test]
    fn test_toggled() {
        assert_eq!(CheckedState::Indeterminate.toggled(), CheckedState::Checked);
        assert_eq!(CheckedState::Checked.toggled(), CheckedState::Unchecked);
        assert_eq!(CheckedState::from(true), CheckedState::Checked);
    }
}
