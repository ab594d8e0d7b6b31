use mosaic_theme::Theme;

use crate::{
    components::{
        ButtonProps, ButtonStyles, ButtonVariant, GranularButtonVariant, InteractionState,
        build_button_style,
    },
    theme::SizeKind,
};

/// Colors for the checked (`truthy`) and unchecked (`falsey`) halves of a
/// toggle button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GranularToggleVariant {
    pub truthy: GranularButtonVariant,
    pub falsey: GranularButtonVariant,
}

impl GranularToggleVariant {
    pub fn from_button_variant(variant: ButtonVariant, theme: &Theme) -> Self {
        let variant = variant.as_granular(theme);

        Self {
            truthy: variant,
            falsey: falsey_granular_variant(variant, theme),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToggleVariant {
    #[default]
    Primary,
    Secondary,
    Constructive,
    Destructive,
}

impl ToggleVariant {
    pub fn as_granular_toggle(&self, theme: &Theme) -> GranularToggleVariant {
        let variant = match self {
            ToggleVariant::Primary => ButtonVariant::Primary,
            ToggleVariant::Secondary => ButtonVariant::Secondary,
            ToggleVariant::Constructive => ButtonVariant::Constructive,
            ToggleVariant::Destructive => ButtonVariant::Destructive,
        };

        GranularToggleVariant::from_button_variant(variant, theme)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToggleVariantEither {
    Left(ToggleVariant),
    Right(GranularToggleVariant),
}

impl Default for ToggleVariantEither {
    fn default() -> Self {
        ToggleVariantEither::Left(ToggleVariant::Primary)
    }
}

impl ToggleVariantEither {
    pub fn into_granular(self, theme: &Theme) -> GranularToggleVariant {
        match self {
            ToggleVariantEither::Left(left) => left.as_granular_toggle(theme),
            ToggleVariantEither::Right(right) => right,
        }
    }
}

impl From<ToggleVariant> for ToggleVariantEither {
    fn from(value: ToggleVariant) -> Self {
        ToggleVariantEither::Left(value)
    }
}

impl From<GranularToggleVariant> for ToggleVariantEither {
    fn from(value: GranularToggleVariant) -> Self {
        ToggleVariantEither::Right(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ToggleButtonProps {
    pub variant: ToggleVariantEither,
    pub size: SizeKind,
    pub state: InteractionState,
    pub checked: bool,
    pub icon_only: bool,
}

/// A button that stays pressed while `checked`.
pub fn build_toggle_button_style(props: &ToggleButtonProps, theme: &Theme) -> ButtonStyles {
    let variant = props.variant.into_granular(theme);

    let button = ButtonProps::new()
        .variant(if props.checked {
            variant.truthy
        } else {
            variant.falsey
        })
        .size(props.size)
        .state(props.state)
        .icon_only(props.icon_only);

    build_button_style(&button, theme)
}

/// Unchecked toggles drop their fill but keep the hover and focus shades so
/// they still respond to the pointer.
fn falsey_granular_variant(
    mut variant: GranularButtonVariant,
    theme: &Theme,
) -> GranularButtonVariant {
    variant.bg_color = variant.bg_color.alpha(0.);
    variant.bg_hover_color = variant.bg_hover_color.alpha(variant.bg_hover_color.a * 0.25);
    variant.bg_focus_color = variant.bg_focus_color.alpha(variant.bg_focus_color.a * 0.35);
    variant.text_color = theme.colors().text.secondary;
    variant
}
