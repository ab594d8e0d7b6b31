#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::time::Duration;

use enum_assoc::Assoc;
use mosaic_macros::ThemeField;
use mosaic_motion::CubicBezier;
use mosaic_theme::{Rgba, Shadow, Theme};

/// Spacing steps.
#[derive(ThemeField, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[field(f32)]
pub enum SpaceKind {
    #[theme(layout.spacing.none)]
    None,
    #[theme(layout.spacing.xxs)]
    Xxs,
    #[theme(layout.spacing.xs)]
    Xs,
    #[theme(layout.spacing.sm)]
    Sm,
    #[theme(layout.spacing.md)]
    Md,
    #[theme(layout.spacing.lg)]
    Lg,
    #[theme(layout.spacing.xl)]
    Xl,
    #[theme(layout.spacing.xxl)]
    Xxl,
    #[theme(layout.spacing.xxxl)]
    Xxxl,
}

/// Corner radius steps.
#[derive(ThemeField, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[field(f32)]
pub enum RadiusKind {
    #[theme(layout.radii.none)]
    None,
    #[theme(layout.radii.xs)]
    Xs,
    #[theme(layout.radii.sm)]
    Sm,
    #[theme(layout.radii.md)]
    Md,
    #[theme(layout.radii.lg)]
    Lg,
    #[theme(layout.radii.xl)]
    Xl,
    #[theme(layout.radii.full)]
    Full,
}

/// Border thickness steps.
#[derive(ThemeField, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[field(f32)]
pub enum ThicknessKind {
    #[theme(layout.border_width.none)]
    None,
    #[theme(layout.border_width.thin)]
    Thin,
    #[theme(layout.border_width.medium)]
    Medium,
    #[theme(layout.border_width.thick)]
    Thick,
}

/// Text size variants that resolve to theme-defined values.
#[derive(ThemeField, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[field(f32)]
pub enum TextSizeKind {
    #[theme(layout.text.default_font.sizes.xs)]
    Xs,
    #[theme(layout.text.default_font.sizes.sm)]
    Sm,
    #[theme(layout.text.default_font.sizes.md)]
    Md,
    #[theme(layout.text.default_font.sizes.lg)]
    Lg,
    #[theme(layout.text.default_font.sizes.xl)]
    Xl,
    #[theme(layout.text.default_font.sizes.xxl)]
    Xxl,
    #[theme(layout.text.default_font.sizes.xxxl)]
    Xxxl,
}

impl TextSizeKind {
    /// The same step on the monospace scale.
    pub fn resolve_mono(&self, theme: &Theme) -> f32 {
        let sizes = &theme.layout.text.mono_font.sizes;

        match self {
            TextSizeKind::Xs => sizes.xs,
            TextSizeKind::Sm => sizes.sm,
            TextSizeKind::Md => sizes.md,
            TextSizeKind::Lg => sizes.lg,
            TextSizeKind::Xl => sizes.xl,
            TextSizeKind::Xxl => sizes.xxl,
            TextSizeKind::Xxxl => sizes.xxxl,
        }
    }
}

#[derive(ThemeField, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[field(u16)]
pub enum FontWeightKind {
    #[theme(layout.text.default_font.weights.regular)]
    Regular,
    #[theme(layout.text.default_font.weights.medium)]
    Medium,
    #[theme(layout.text.default_font.weights.semibold)]
    Semibold,
    #[theme(layout.text.default_font.weights.bold)]
    Bold,
}

/// Stacking layers.
#[derive(ThemeField, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[field(i32)]
pub enum LayerKind {
    #[theme(layout.z_index.base)]
    Base,
    #[theme(layout.z_index.dropdown)]
    Dropdown,
    #[theme(layout.z_index.sticky)]
    Sticky,
    #[theme(layout.z_index.overlay)]
    Overlay,
    #[theme(layout.z_index.modal)]
    Modal,
    #[theme(layout.z_index.popover)]
    Popover,
    #[theme(layout.z_index.toast)]
    Toast,
    #[theme(layout.z_index.tooltip)]
    Tooltip,
}

#[derive(ThemeField, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[field(Shadow)]
pub enum ShadowKind {
    #[theme(shadows().sm)]
    Sm,
    #[theme(shadows().md)]
    Md,
    #[theme(shadows().lg)]
    Lg,
    #[theme(shadows().xl)]
    Xl,
}

#[derive(ThemeField, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[field(Duration)]
pub enum DurationKind {
    #[theme(motion.durations.instant)]
    Instant,
    #[theme(motion.durations.fast)]
    Fast,
    #[theme(motion.durations.normal)]
    Normal,
    #[theme(motion.durations.slow)]
    Slow,
}

#[derive(ThemeField, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[field([f32; 4])]
pub enum EasingKind {
    #[theme(motion.easings.standard)]
    Standard,
    #[theme(motion.easings.emphasized)]
    Emphasized,
    #[theme(motion.easings.decelerate)]
    Decelerate,
    #[theme(motion.easings.accelerate)]
    Accelerate,
}

impl EasingKind {
    pub fn curve(&self, theme: &Theme) -> CubicBezier {
        CubicBezier::from(*self.resolve(theme))
    }
}

/// Intent-based colors resolved against the active palette.
#[derive(ThemeField, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[field(Rgba)]
pub enum SemanticColor {
    #[theme(colors().accent.brand)]
    Brand,
    #[theme(colors().accent.destructive)]
    Danger,
    #[theme(colors().accent.constructive)]
    Success,
    #[theme(colors().accent.warning)]
    Warning,
    #[theme(colors().accent.info)]
    Info,
    #[theme(colors().text.secondary)]
    Neutral,
    #[theme(colors().text.primary)]
    Text,
    #[theme(colors().text.muted)]
    Muted,
    #[theme(colors().text.inverse)]
    Inverse,
    #[theme(colors().border.subtle)]
    Border,
    #[theme(colors().border.focus)]
    Focus,
}

/// Background color variants from the active theme variant.
#[derive(ThemeField, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[field(Rgba)]
pub enum BackgroundKind {
    #[theme(colors().background.primary)]
    Primary,
    #[theme(colors().background.secondary)]
    Secondary,
    #[theme(colors().background.tertiary)]
    Tertiary,
    #[theme(colors().background.quaternary)]
    Quaternary,
    #[theme(colors().background.quinary)]
    Quinary,
}

/// Background layers for stacking surfaces with visual hierarchy.
///
/// Similar to `BackgroundKind` but supports `next()` to get the elevated
/// layer color for nested elements.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[func(pub fn resolve(&self, theme: &Theme) -> Rgba)]
#[func(pub fn next(&self) -> BackgroundKind)]
#[func(pub fn key(&self) -> &'static str)]
pub enum SurfaceLayerKind {
    /// Base layer for main surfaces.
    #[default]
    #[assoc(resolve = theme.colors().background.primary)]
    #[assoc(next = BackgroundKind::Secondary)]
    #[assoc(key = "primary")]
    Primary,
    /// Second layer for grouped content.
    #[assoc(resolve = theme.colors().background.secondary)]
    #[assoc(next = BackgroundKind::Tertiary)]
    #[assoc(key = "secondary")]
    Secondary,
    /// Third layer for elevated elements.
    #[assoc(resolve = theme.colors().background.tertiary)]
    #[assoc(next = BackgroundKind::Quaternary)]
    #[assoc(key = "tertiary")]
    Tertiary,
    /// Fourth layer for high emphasis.
    #[assoc(resolve = theme.colors().background.quaternary)]
    #[assoc(next = BackgroundKind::Quinary)]
    #[assoc(key = "quaternary")]
    Quaternary,
}

impl SurfaceLayerKind {
    pub const ALL: &'static [SurfaceLayerKind] = &[
        SurfaceLayerKind::Primary,
        SurfaceLayerKind::Secondary,
        SurfaceLayerKind::Tertiary,
        SurfaceLayerKind::Quaternary,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|layer| layer.key() == key)
    }
}

impl From<SurfaceLayerKind> for BackgroundKind {
    fn from(value: SurfaceLayerKind) -> Self {
        match value {
            SurfaceLayerKind::Primary => BackgroundKind::Primary,
            SurfaceLayerKind::Secondary => BackgroundKind::Secondary,
            SurfaceLayerKind::Tertiary => BackgroundKind::Tertiary,
            SurfaceLayerKind::Quaternary => BackgroundKind::Quaternary,
        }
    }
}

/// Every value a sized component needs, resolved from one [`SizeKind`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeConfig {
    pub height: f32,
    pub padding_x: f32,
    pub gap: f32,
    pub font_size: f32,
    pub icon_size: f32,
    pub radius: f32,
}

/// Component size variants that resolve to theme-defined pixel values.
///
/// Each size has a corresponding corner radius, text size and padding.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[func(pub fn resolve(&self, theme: &Theme) -> f32)]
#[func(pub fn key(&self) -> &'static str)]
#[func(pub fn corner_radii(&self) -> RadiusKind)]
#[func(pub fn text_size(&self) -> TextSizeKind)]
#[func(pub fn padding(&self) -> SpaceKind)]
#[func(pub fn gap(&self) -> SpaceKind)]
#[func(pub fn icon_size(&self) -> f32)]
pub enum SizeKind {
    #[assoc(resolve = theme.layout.size.xs)]
    #[assoc(key = "xs")]
    #[assoc(corner_radii = RadiusKind::Sm)]
    #[assoc(text_size = TextSizeKind::Xs)]
    #[assoc(padding = SpaceKind::Sm)]
    #[assoc(gap = SpaceKind::Xs)]
    #[assoc(icon_size = 12.)]
    Xs,
    #[assoc(resolve = theme.layout.size.sm)]
    #[assoc(key = "sm")]
    #[assoc(corner_radii = RadiusKind::Sm)]
    #[assoc(text_size = TextSizeKind::Sm)]
    #[assoc(padding = SpaceKind::Md)]
    #[assoc(gap = SpaceKind::Xs)]
    #[assoc(icon_size = 14.)]
    Sm,
    #[default]
    #[assoc(resolve = theme.layout.size.md)]
    #[assoc(key = "md")]
    #[assoc(corner_radii = RadiusKind::Md)]
    #[assoc(text_size = TextSizeKind::Md)]
    #[assoc(padding = SpaceKind::Lg)]
    #[assoc(gap = SpaceKind::Sm)]
    #[assoc(icon_size = 16.)]
    Md,
    #[assoc(resolve = theme.layout.size.lg)]
    #[assoc(key = "lg")]
    #[assoc(corner_radii = RadiusKind::Md)]
    #[assoc(text_size = TextSizeKind::Lg)]
    #[assoc(padding = SpaceKind::Lg)]
    #[assoc(gap = SpaceKind::Sm)]
    #[assoc(icon_size = 18.)]
    Lg,
    #[assoc(resolve = theme.layout.size.xl)]
    #[assoc(key = "xl")]
    #[assoc(corner_radii = RadiusKind::Lg)]
    #[assoc(text_size = TextSizeKind::Xl)]
    #[assoc(padding = SpaceKind::Xl)]
    #[assoc(gap = SpaceKind::Md)]
    #[assoc(icon_size = 20.)]
    Xl,
}

impl SizeKind {
    pub const ALL: &'static [SizeKind] = &[
        SizeKind::Xs,
        SizeKind::Sm,
        SizeKind::Md,
        SizeKind::Lg,
        SizeKind::Xl,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|size| size.key() == key)
    }

    pub fn config(&self, theme: &Theme) -> SizeConfig {
        SizeConfig {
            height: self.resolve(theme),
            padding_x: *self.padding().resolve(theme),
            gap: *self.gap().resolve(theme),
            font_size: *self.text_size().resolve(theme),
            icon_size: self.icon_size(),
            radius: *self.corner_radii().resolve(theme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> Theme {
        Theme::default_theme().clone()
    }

    #[test]
    fn test_every_size_config_is_populated() {
        let theme = theme();

        for size in SizeKind::ALL {
            let config = size.config(&theme);

            for value in [
                config.height,
                config.padding_x,
                config.gap,
                config.font_size,
                config.icon_size,
                config.radius,
            ] {
                assert!(value.is_finite() && value > 0., "{size:?} has {config:?}");
            }
        }
    }

    #[test]
    fn test_size_ordering() {
        let theme = theme();
        let heights: Vec<f32> = SizeKind::ALL.iter().map(|s| s.resolve(&theme)).collect();
        assert!(heights.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_size_keys_round_trip() {
        for size in SizeKind::ALL {
            assert_eq!(SizeKind::from_key(size.key()), Some(*size));
        }
        assert_eq!(SizeKind::from_key("huge"), None);
    }

    #[test]
    fn test_theme_field_keys() {
        assert_eq!(SpaceKind::Xxl.key(), "xxl");
        assert_eq!(SemanticColor::from_key("danger"), Some(SemanticColor::Danger));
        assert_eq!(FontWeightKind::from_key("semibold"), Some(FontWeightKind::Semibold));
        assert_eq!(RadiusKind::from_key("round"), None);
        assert_eq!(SpaceKind::ALL.len(), 9);
    }

    #[test]
    fn test_semantic_colors_follow_variant() {
        let light = theme();
        let dark = light.with_variant(mosaic_theme::ThemeVariantKind::Dark);

        assert_eq!(*SemanticColor::Brand.resolve(&light), light.colors().accent.brand);
        assert_eq!(*SemanticColor::Brand.resolve(&dark), dark.colors().accent.brand);
        assert_ne!(SemanticColor::Brand.resolve(&light), SemanticColor::Brand.resolve(&dark));
    }

    #[test]
    fn test_layer_kind_next() {
        assert_eq!(SurfaceLayerKind::Primary.next(), BackgroundKind::Secondary);
        assert_eq!(SurfaceLayerKind::Quaternary.next(), BackgroundKind::Quinary);

        let bg: BackgroundKind = SurfaceLayerKind::Tertiary.into();
        assert_eq!(bg, BackgroundKind::Tertiary);
    }

    #[test]
    fn test_surface_layer_keys_round_trip() {
        for layer in SurfaceLayerKind::ALL {
            assert_eq!(SurfaceLayerKind::from_key(layer.key()), Some(*layer));
        }
        assert_eq!(SurfaceLayerKind::ALL.len(), 4);
        assert_eq!(SurfaceLayerKind::from_key("quinary"), None);
    }

    #[test]
    fn test_layers_stack_upwards() {
        let theme = theme();
        let layers: Vec<i32> = LayerKind::ALL.iter().map(|l| *l.resolve(&theme)).collect();
        assert!(layers.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_easing_curve() {
        let theme = theme();
        let curve = EasingKind::Standard.curve(&theme);
        assert_eq!(curve.to_css(), "cubic-bezier(0.2, 0, 0, 1)");
    }
}
