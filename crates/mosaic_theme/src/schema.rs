use std::{sync::LazyLock, time::Duration};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{
    Rgba, ThemeError,
    deserializers::{de_duration, de_pixels, de_string_or_non_empty_list, de_variants, ser_duration},
};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub layout: ThemeLayout,
    pub motion: ThemeMotion,
    pub variants: ThemeVariants,
}

static DEFAULT_THEME: LazyLock<Theme> = LazyLock::new(|| {
    Theme::from_json(include_str!("../themes/default.json"))
        .expect("built-in theme is valid json")
});

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

impl Theme {
    /// The built-in theme, parsed on first use and shared afterwards.
    pub fn default_theme() -> &'static Theme {
        &DEFAULT_THEME
    }

    pub fn from_json<S: AsRef<str>>(str: S) -> Result<Theme, ThemeError> {
        let theme: Theme = serde_json::from_str(str.as_ref())?;
        tracing::debug!(
            theme = %theme.name,
            variants = theme.variants.variants.len(),
            "loaded theme"
        );
        Ok(theme)
    }

    pub fn to_json(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The palette currently in use.
    pub fn active(&self) -> &ThemeVariant {
        self.variants.active()
    }

    pub fn colors(&self) -> &ThemeColors {
        &self.variants.active().colors
    }

    pub fn shadows(&self) -> &ThemeShadows {
        &self.variants.active().shadows
    }

    pub fn kind(&self) -> ThemeVariantKind {
        self.variants.active().kind
    }

    /// Switches the active palette. Returns `false` when the theme has no
    /// variant of that kind, leaving the theme untouched.
    pub fn set_active_variant(&mut self, kind: ThemeVariantKind) -> bool {
        match self.variants.position(kind) {
            Some(index) => {
                self.variants.active = ActiveVariantId(index);
                tracing::debug!(theme = %self.name, ?kind, "switched theme variant");
                true
            }
            None => {
                tracing::debug!(theme = %self.name, ?kind, "theme has no such variant");
                false
            }
        }
    }

    /// Returns a copy of this theme with the given palette active.
    pub fn with_variant(&self, kind: ThemeVariantKind) -> Theme {
        let mut theme = self.clone();
        theme.set_active_variant(kind);
        theme
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeLayout {
    pub text: ThemeText,
    pub spacing: ThemeSpacing,
    pub radii: ThemeRadii,
    pub size: ThemeSize,
    pub border_width: ThemeBorderWidth,
    pub z_index: ThemeZIndex,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeText {
    #[serde(deserialize_with = "de_pixels")]
    pub base_size: f32,
    pub default_font: ThemeFont,
    pub mono_font: ThemeFont,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeFont {
    #[serde(deserialize_with = "de_string_or_non_empty_list")]
    pub family: SmallVec<[String; 1]>,
    /// Multiplier applied to the font size.
    pub line_height: f32,
    pub sizes: ThemeTextSizes,
    pub weights: ThemeTextWeights,
}

impl ThemeFont {
    /// The family list as a CSS `font-family` value.
    pub fn family_css(&self) -> String {
        self.family
            .iter()
            .map(|family| {
                if family.contains(' ') {
                    format!("\"{family}\"")
                } else {
                    family.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeTextSizes {
    #[serde(deserialize_with = "de_pixels")]
    pub xs: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub md: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub xl: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub xxl: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub xxxl: f32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeTextWeights {
    pub regular: u16,
    pub medium: u16,
    pub semibold: u16,
    pub bold: u16,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeSpacing {
    #[serde(deserialize_with = "de_pixels")]
    pub none: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub xxs: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub xs: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub md: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub xl: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub xxl: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub xxxl: f32,
}

impl ThemeSpacing {
    pub const STEPS: u8 = 9;

    /// Numeric access to the scale, `0` being `none`. Steps past the end
    /// clamp to the largest value.
    pub fn step(&self, step: u8) -> f32 {
        match step {
            0 => self.none,
            1 => self.xxs,
            2 => self.xs,
            3 => self.sm,
            4 => self.md,
            5 => self.lg,
            6 => self.xl,
            7 => self.xxl,
            _ => self.xxxl,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeRadii {
    #[serde(deserialize_with = "de_pixels")]
    pub none: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub xs: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub md: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub xl: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub full: f32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeSize {
    #[serde(deserialize_with = "de_pixels")]
    pub xs: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub md: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub xl: f32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeBorderWidth {
    #[serde(deserialize_with = "de_pixels")]
    pub none: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub thin: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub medium: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub thick: f32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeZIndex {
    pub base: i32,
    pub dropdown: i32,
    pub sticky: i32,
    pub overlay: i32,
    pub modal: i32,
    pub popover: i32,
    pub toast: i32,
    pub tooltip: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeMotion {
    pub durations: ThemeDurations,
    pub easings: ThemeEasings,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeDurations {
    #[serde(deserialize_with = "de_duration", serialize_with = "ser_duration")]
    pub instant: Duration,
    #[serde(deserialize_with = "de_duration", serialize_with = "ser_duration")]
    pub fast: Duration,
    #[serde(deserialize_with = "de_duration", serialize_with = "ser_duration")]
    pub normal: Duration,
    #[serde(deserialize_with = "de_duration", serialize_with = "ser_duration")]
    pub slow: Duration,
}

/// Cubic bezier control points `[x1, y1, x2, y2]`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeEasings {
    pub standard: [f32; 4],
    pub emphasized: [f32; 4],
    pub decelerate: [f32; 4],
    pub accelerate: [f32; 4],
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(transparent)]
pub struct ThemeVariants {
    #[serde(deserialize_with = "de_variants")]
    pub variants: SmallVec<[ThemeVariant; 2]>,
    #[serde(skip)]
    active: ActiveVariantId,
}

impl ThemeVariants {
    pub fn active(&self) -> &ThemeVariant {
        // `de_variants` rejects empty lists and `active` only ever holds an
        // index found by `position`.
        &self.variants[self.active.0]
    }

    pub fn position(&self, kind: ThemeVariantKind) -> Option<usize> {
        self.variants.iter().position(|variant| variant.kind == kind)
    }

    pub fn get(&self, kind: ThemeVariantKind) -> Option<&ThemeVariant> {
        self.variants.iter().find(|variant| variant.kind == kind)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveVariantId(pub usize);

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeVariant {
    pub kind: ThemeVariantKind,
    pub colors: ThemeColors,
    pub shadows: ThemeShadows,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeVariantKind {
    Dark,
    Light,
}

impl ThemeVariantKind {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeColors {
    pub background: ThemeBackgroundColors,
    pub accent: ThemeAccentColors,
    pub text: ThemeTextColors,
    pub border: ThemeBorderColors,
    pub overlay: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeBackgroundColors {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub tertiary: Rgba,
    pub quaternary: Rgba,
    pub quinary: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeAccentColors {
    pub brand: Rgba,
    pub constructive: Rgba,
    pub destructive: Rgba,
    pub warning: Rgba,
    pub info: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeTextColors {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub muted: Rgba,
    /// Text drawn on top of saturated or dark fills.
    pub inverse: Rgba,
    /// Text drawn on top of light fills, independent of the variant.
    pub dark: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeBorderColors {
    pub subtle: Rgba,
    pub strong: Rgba,
    pub focus: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeShadows {
    pub sm: Shadow,
    pub md: Shadow,
    pub lg: Shadow,
    pub xl: Shadow,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Shadow {
    #[serde(deserialize_with = "de_pixels")]
    pub x: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub y: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub blur: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub spread: f32,
    pub color: Rgba,
}

impl Shadow {
    pub fn to_css(&self) -> String {
        format!(
            "{}px {}px {}px {}px {}",
            self.x,
            self.y,
            self.blur,
            self.spread,
            self.color.to_css()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_parses() {
        let theme: &Theme = Theme::default_theme();
        assert!(!theme.name.is_empty(), "Theme should have a name");
        assert_eq!(theme.variants.variants.len(), 2);
        assert_eq!(theme.kind(), ThemeVariantKind::Light);
    }

    #[test]
    fn test_default_theme_is_shared() {
        assert!(std::ptr::eq(Theme::default_theme(), Theme::default_theme()));

        let mut copy = Theme::default_theme().clone();
        copy.set_active_variant(ThemeVariantKind::Dark);
        assert_eq!(Theme::default_theme().kind(), ThemeVariantKind::Light);
    }

    #[test]
    fn test_scales_are_ordered() {
        let layout = &Theme::default_theme().layout;

        for step in 1..ThemeSpacing::STEPS {
            assert!(layout.spacing.step(step - 1) <= layout.spacing.step(step));
        }

        assert!(layout.size.xs < layout.size.sm);
        assert!(layout.size.sm < layout.size.md);
        assert!(layout.size.md < layout.size.lg);
        assert!(layout.size.lg < layout.size.xl);
        assert!(layout.radii.sm <= layout.radii.md);
        assert!(layout.radii.xl < layout.radii.full);
    }

    #[test]
    fn test_spacing_step_clamps() {
        let spacing = &Theme::default_theme().layout.spacing;
        assert_eq!(spacing.step(200), spacing.xxxl);
        assert_eq!(spacing.step(0), spacing.none);
    }

    #[test]
    fn test_switch_variant() {
        let light = Theme::default_theme().clone();
        let dark = light.with_variant(ThemeVariantKind::Dark);

        assert_eq!(dark.kind(), ThemeVariantKind::Dark);
        assert_ne!(light.colors().background.primary, dark.colors().background.primary);
        assert_eq!(light.kind(), ThemeVariantKind::Light);
    }

    #[test]
    fn test_switch_to_missing_variant_is_rejected() {
        let mut theme = Theme::default_theme().clone();
        theme.variants.variants.retain(|v| v.kind == ThemeVariantKind::Light);

        assert!(!theme.set_active_variant(ThemeVariantKind::Dark));
        assert_eq!(theme.kind(), ThemeVariantKind::Light);
    }

    #[test]
    fn test_round_trip_json() {
        let json = Theme::default_theme().to_json().unwrap();
        let theme = Theme::from_json(json).unwrap();
        assert_eq!(&theme, Theme::default_theme());
    }

    #[test]
    fn test_empty_variants_rejected() {
        let mut value: serde_json::Value =
            serde_json::from_str(&Theme::default_theme().to_json().unwrap()).unwrap();
        value["variants"] = serde_json::json!([]);

        let err = Theme::from_json(value.to_string()).unwrap_err();
        assert!(err.to_string().contains("at least one theme variant"));
    }

    #[test]
    fn test_empty_font_family_rejected() {
        let mut value: serde_json::Value =
            serde_json::from_str(&Theme::default_theme().to_json().unwrap()).unwrap();
        value["layout"]["text"]["default_font"]["family"] = serde_json::json!([]);

        assert!(Theme::from_json(value.to_string()).is_err());
    }

    #[test]
    fn test_font_family_css() {
        let font = &Theme::default_theme().layout.text.default_font;
        let css = font.family_css();
        assert!(css.contains("\"Inter Variable\""));
        assert!(css.ends_with("sans-serif"));
    }
}
