use mosaic_theme::{Rgba, Theme};

use crate::{
    components::{
        shared::{with_disabled, with_focus_ring, with_font, with_transition},
        state::FieldState,
    },
    first_match,
    style::Style,
    theme::{FontWeightKind, SizeKind, SurfaceLayerKind, TextSizeKind, ThicknessKind},
    utils::padding_needed_for_height,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputVariant {
    /// Bordered field on the surface color.
    #[default]
    Outline,
    /// Borderless field on the next surface layer.
    Filled,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputProps {
    pub size: SizeKind,
    pub variant: InputVariant,
    pub layer: SurfaceLayerKind,
    pub state: FieldState,
    pub has_leading_icon: bool,
    pub has_trailing_icon: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputStyles {
    /// The bordered box holding icons and the field.
    pub container: Style,
    /// The text field itself.
    pub field: Style,
    pub placeholder: Style,
    pub leading_icon: Style,
    pub trailing_icon: Style,
    /// Error or hint text under the field.
    pub helper_text: Style,
}

pub(crate) struct InputColors {
    pub background: Rgba,
    pub border: Rgba,
}

pub(crate) fn input_colors(props: &InputProps, theme: &Theme) -> InputColors {
    let colors = theme.colors();
    let interaction = props.state.interaction;

    let (background, idle_border) = match props.variant {
        InputVariant::Outline => (props.layer.resolve(theme), *props.layer.next().resolve(theme)),
        InputVariant::Filled => {
            let background = *props.layer.next().resolve(theme);
            (background, background)
        }
    };

    let border = first_match!({
        interaction.disabled => idle_border,
        props.state.invalid => colors.accent.destructive,
        interaction.focused => colors.border.focus,
        interaction.hovered && !props.state.read_only => colors.border.strong,
        _ => idle_border
    });

    InputColors { background, border }
}

pub fn build_input_style(props: &InputProps, theme: &Theme) -> InputStyles {
    let colors = theme.colors();
    let config = props.size.config(theme);
    let line_height = theme.layout.text.default_font.line_height;
    let border_width = *ThicknessKind::Thin.resolve(theme);
    let input_colors = input_colors(props, theme);
    let interaction = props.state.interaction;

    let vertical_padding =
        padding_needed_for_height(config.height - border_width * 2., config.font_size, line_height);
    let icon_inset = config.padding_x + config.icon_size + config.gap;

    let container = Style::new()
        .set("position", "relative")
        .set("display", "flex")
        .set("alignItems", "center")
        .set("boxSizing", "border-box")
        .set("width", "100%")
        .set("height", config.height)
        .rounded(config.radius)
        .border(border_width, input_colors.border)
        .bg(input_colors.background);
    let container = with_transition(container, &["borderColor", "backgroundColor"], theme);
    let container = first_match!({
        interaction.disabled => with_disabled(container).set("cursor", "not-allowed"),
        interaction.focused => with_focus_ring(container, theme).set("cursor", "text"),
        _ => container.set("cursor", "text")
    });

    let field = with_font(Style::new(), theme, config.font_size, FontWeightKind::Regular)
        .text_color(colors.text.primary)
        .set("flex", 1.)
        .set("minWidth", 0.)
        .set("height", "100%")
        .padding(
            vertical_padding,
            if props.has_trailing_icon { icon_inset } else { config.padding_x },
            vertical_padding,
            if props.has_leading_icon { icon_inset } else { config.padding_x },
        )
        .set("backgroundColor", "transparent")
        .set("borderWidth", 0.)
        .set("outlineStyle", "none")
        .when(props.state.read_only, |this| this.text_color(colors.text.secondary));

    let placeholder = Style::new().text_color(colors.text.muted);

    let icon = |side: &'static str| {
        Style::new()
            .set("position", "absolute")
            .set(side, config.padding_x)
            .set("top", ((config.height - config.icon_size) / 2. - border_width).floor())
            .size(config.icon_size, config.icon_size)
            .text_color(if props.state.invalid {
                colors.accent.destructive
            } else {
                colors.text.muted
            })
            .set("pointerEvents", "none")
    };

    let helper_text = with_font(
        Style::new(),
        theme,
        *TextSizeKind::Xs.resolve(theme),
        FontWeightKind::Regular,
    )
    .set("marginTop", config.gap / 2.)
    .text_color(if props.state.invalid {
        colors.accent.destructive
    } else {
        colors.text.secondary
    });

    InputStyles {
        container,
        field,
        placeholder,
        leading_icon: icon("left"),
        trailing_icon: icon("right"),
        helper_text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::InteractionState;

    fn theme() -> Theme {
        Theme::default_theme().clone()
    }

    fn border(props: InputProps, theme: &Theme) -> Option<Rgba> {
        build_input_style(&props, theme).container.color("borderColor")
    }

    #[test]
    fn test_border_precedence() {
        let theme = theme();
        let colors = theme.colors();
        let all = InteractionState {
            hovered: true,
            pressed: false,
            focused: true,
            disabled: false,
        };

        let invalid = InputProps {
            state: FieldState {
                interaction: all,
                invalid: true,
                read_only: false,
            },
            ..Default::default()
        };
        assert_eq!(border(invalid, &theme), Some(colors.accent.destructive));

        let focused = InputProps {
            state: all.into(),
            ..Default::default()
        };
        assert_eq!(border(focused, &theme), Some(colors.border.focus));

        let hovered = InputProps {
            state: InteractionState::hovered().into(),
            ..Default::default()
        };
        assert_eq!(border(hovered, &theme), Some(colors.border.strong));

        let disabled = InputProps {
            state: FieldState {
                interaction: InteractionState {
                    disabled: true,
                    ..all
                },
                invalid: true,
                read_only: false,
            },
            ..Default::default()
        };
        assert_eq!(
            border(disabled, &theme),
            Some(*SurfaceLayerKind::Primary.next().resolve(&theme))
        );
    }

    #[test]
    fn test_icons_shift_field_padding() {
        let theme = theme();
        let config = SizeKind::Md.config(&theme);
        let styles = build_input_style(
            &InputProps {
                has_leading_icon: true,
                ..Default::default()
            },
            &theme,
        );

        assert_eq!(
            styles.field.number("paddingLeft"),
            Some(config.padding_x + config.icon_size + config.gap)
        );
        assert_eq!(styles.field.number("paddingRight"), Some(config.padding_x));
    }

    #[test]
    fn test_filled_variant_has_no_visible_border() {
        let theme = theme();
        let styles = build_input_style(
            &InputProps {
                variant: InputVariant::Filled,
                ..Default::default()
            },
            &theme,
        );

        assert_eq!(
            styles.container.color("borderColor"),
            styles.container.color("backgroundColor")
        );
    }

    #[test]
    fn test_height_follows_size() {
        let theme = theme();

        for size in SizeKind::ALL {
            let styles = build_input_style(
                &InputProps {
                    size: *size,
                    ..Default::default()
                },
                &theme,
            );
            assert_eq!(styles.container.number("height"), Some(size.resolve(&theme)));
        }
    }
}
