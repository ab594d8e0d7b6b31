use mosaic_theme::{Rgba, TRANSPARENT, Theme};

use crate::{
    components::{
        shared::{with_cursor, with_focus_ring, with_font, with_transition},
        spinner::spinner_style,
        state::InteractionState,
    },
    first_match,
    style::Style,
    theme::{FontWeightKind, SizeKind, ThicknessKind},
    utils::{RgbaExt, padding_needed_for_height},
};

const SECONDARY_ALPHA: f32 = 0.1;
const GHOST_HOVER_ALPHA: f32 = 0.08;
const GHOST_FOCUS_ALPHA: f32 = 0.14;

/// Fully resolved colors of a button in each of its states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GranularButtonVariant {
    pub bg_color: Rgba,
    pub bg_hover_color: Rgba,
    pub bg_focus_color: Rgba,
    pub text_color: Rgba,
    pub border_color: Rgba,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Constructive,
    Destructive,
}

impl ButtonVariant {
    pub const ALL: &'static [ButtonVariant] = &[
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Outline,
        ButtonVariant::Ghost,
        ButtonVariant::Constructive,
        ButtonVariant::Destructive,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Constructive => "constructive",
            ButtonVariant::Destructive => "destructive",
        }
    }

    /// Unknown keys fall back to [`ButtonVariant::Primary`].
    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.key() == key)
            .unwrap_or_else(|| {
                tracing::debug!(key, "unknown button variant, using primary");
                ButtonVariant::Primary
            })
    }

    pub fn as_granular(&self, theme: &Theme) -> GranularButtonVariant {
        let colors = theme.colors();
        let primary_background = colors.background.primary;

        fn solid_variant(
            theme: &Theme,
            primary_background: &Rgba,
            main_color: &Rgba,
        ) -> GranularButtonVariant {
            GranularButtonVariant {
                bg_color: *main_color,
                bg_hover_color: main_color.hovered(primary_background),
                bg_focus_color: main_color.focused(primary_background),
                text_color: main_color.readable_foreground(theme),
                border_color: TRANSPARENT,
            }
        }

        fn secondary_variant(
            primary_background: &Rgba,
            main_color: &Rgba,
        ) -> GranularButtonVariant {
            GranularButtonVariant {
                bg_color: main_color.alpha(SECONDARY_ALPHA),
                bg_hover_color: main_color
                    .hovered(primary_background)
                    .alpha(SECONDARY_ALPHA * 1.5),
                bg_focus_color: main_color
                    .focused(primary_background)
                    .alpha(SECONDARY_ALPHA * 2.),
                text_color: *main_color,
                border_color: TRANSPARENT,
            }
        }

        fn ghost_variant(main_color: &Rgba) -> GranularButtonVariant {
            GranularButtonVariant {
                bg_color: TRANSPARENT,
                bg_hover_color: main_color.alpha(GHOST_HOVER_ALPHA),
                bg_focus_color: main_color.alpha(GHOST_FOCUS_ALPHA),
                text_color: *main_color,
                border_color: TRANSPARENT,
            }
        }

        match self {
            ButtonVariant::Primary => {
                solid_variant(theme, &primary_background, &colors.accent.brand)
            }

            ButtonVariant::Secondary => {
                secondary_variant(&primary_background, &colors.text.secondary)
            }

            ButtonVariant::Outline => GranularButtonVariant {
                border_color: colors.border.strong,
                ..ghost_variant(&colors.text.primary)
            },

            ButtonVariant::Ghost => ghost_variant(&colors.accent.brand),

            ButtonVariant::Constructive => {
                solid_variant(theme, &primary_background, &colors.accent.constructive)
            }

            ButtonVariant::Destructive => {
                solid_variant(theme, &primary_background, &colors.accent.destructive)
            }
        }
    }
}

/// Either a named variant or hand-picked colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonVariantEither {
    Left(ButtonVariant),
    Right(GranularButtonVariant),
}

impl Default for ButtonVariantEither {
    fn default() -> Self {
        ButtonVariantEither::Left(ButtonVariant::Primary)
    }
}

impl ButtonVariantEither {
    pub fn into_granular(self, theme: &Theme) -> GranularButtonVariant {
        match self {
            ButtonVariantEither::Left(left) => left.as_granular(theme),
            ButtonVariantEither::Right(right) => right,
        }
    }
}

impl From<ButtonVariant> for ButtonVariantEither {
    fn from(value: ButtonVariant) -> Self {
        ButtonVariantEither::Left(value)
    }
}

impl From<GranularButtonVariant> for ButtonVariantEither {
    fn from(value: GranularButtonVariant) -> Self {
        ButtonVariantEither::Right(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ButtonProps {
    pub variant: ButtonVariantEither,
    pub size: SizeKind,
    pub state: InteractionState,
    /// Shows a spinner in place of the label and blocks interaction.
    pub loading: bool,
    pub full_width: bool,
    /// Square button holding a single icon.
    pub icon_only: bool,
}

impl ButtonProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: impl Into<ButtonVariantEither>) -> Self {
        self.variant = variant.into();
        self
    }

    pub fn size(mut self, size: SizeKind) -> Self {
        self.size = size;
        self
    }

    pub fn state(mut self, state: InteractionState) -> Self {
        self.state = state;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.state.disabled = disabled;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn icon_only(mut self, icon_only: bool) -> Self {
        self.icon_only = icon_only;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyles {
    pub root: Style,
    pub label: Style,
    pub icon: Style,
    /// Present while loading.
    pub spinner: Option<Style>,
}

pub fn build_button_style(props: &ButtonProps, theme: &Theme) -> ButtonStyles {
    let variant = props.variant.into_granular(theme);
    let config = props.size.config(theme);
    let line_height = theme.layout.text.default_font.line_height;
    let border_width = *ThicknessKind::Thin.resolve(theme);

    let state = props.state;
    let is_disabled = state.disabled;
    let is_pressed = state.is_pressed() && !props.loading;
    let is_focus = state.shows_focus_ring();
    let is_hover = state.is_hovered() && !props.loading;

    let bg_color = first_match!({
        is_disabled => variant.bg_color,
        is_pressed || is_focus => variant.bg_focus_color,
        is_hover => variant.bg_hover_color,
        _ => variant.bg_color
    });

    let vertical_padding = padding_needed_for_height(config.height, config.font_size, line_height);

    let root = Style::new()
        .set("display", if props.full_width { "flex" } else { "inline-flex" })
        .set("position", "relative")
        .set("alignItems", "center")
        .set("justifyContent", "center")
        .set("gap", config.gap)
        .set("boxSizing", "border-box")
        .set("height", config.height)
        .when(props.icon_only, |this| this.padding(0., 0., 0., 0.))
        .when(!props.icon_only, |this| {
            this.padding_xy(config.padding_x, vertical_padding)
        })
        .when(props.icon_only, |this| this.set("width", config.height))
        .when(props.full_width && !props.icon_only, |this| {
            this.set("width", "100%")
        })
        .rounded(config.radius)
        .border(border_width, variant.border_color)
        .bg(bg_color)
        .set("userSelect", "none");

    let root = with_transition(
        root,
        &["backgroundColor", "borderColor", "color", "opacity"],
        theme,
    );
    let root = with_cursor(root, is_disabled).when(props.loading && !is_disabled, |this| {
        this.set("cursor", "progress").set("pointerEvents", "none")
    });
    let root = if is_focus { with_focus_ring(root, theme) } else { root };

    let label = with_font(Style::new(), theme, config.font_size, FontWeightKind::Medium)
        .text_color(variant.text_color)
        .set("whiteSpace", "nowrap")
        .when(props.loading, |this| this.set("opacity", 0.));

    let icon = Style::new()
        .size(config.icon_size, config.icon_size)
        .text_color(variant.text_color)
        .set("flexShrink", 0.)
        .when(props.loading, |this| this.set("opacity", 0.));

    let spinner = props.loading.then(|| {
        spinner_style(
            config.icon_size,
            variant.text_color,
            *ThicknessKind::Medium.resolve(theme),
            theme,
        )
        .set("position", "absolute")
    });

    ButtonStyles {
        root,
        label,
        icon,
        spinner,
    }
}
