use mosaic_theme::{Rgba, Theme, deserializers::parse_pixels};

use crate::theme::{RadiusKind, SemanticColor, SpaceKind, ThicknessKind};

fn is_raw_color(value: &str) -> bool {
    value.starts_with('#')
        || value.starts_with("rgb(")
        || value.starts_with("rgba(")
        || value.eq_ignore_ascii_case("transparent")
}

fn semantic_alias(key: &str) -> Option<SemanticColor> {
    match key {
        "primary" | "accent" => Some(SemanticColor::Brand),
        "error" | "destructive" | "negative" => Some(SemanticColor::Danger),
        "constructive" | "positive" => Some(SemanticColor::Success),
        "secondary" => Some(SemanticColor::Neutral),
        _ => None,
    }
}

/// Resolves a semantic color name (`"danger"`, `"brand"`) against the active
/// palette. Raw colors pass through untouched. Anything else falls back to
/// the primary text color.
pub fn resolve_color(key: &str, theme: &Theme) -> Rgba {
    let key = key.trim();

    if is_raw_color(key) {
        match key.parse::<Rgba>() {
            Ok(color) => return color,
            Err(err) => {
                tracing::debug!(%err, "unparsable raw color, using text color");
                return theme.colors().text.primary;
            }
        }
    }

    let lowercase = key.to_ascii_lowercase();

    match SemanticColor::from_key(&lowercase).or_else(|| semantic_alias(&lowercase)) {
        Some(color) => *color.resolve(theme),
        None => {
            tracing::debug!(key, "unknown semantic color, using text color");
            theme.colors().text.primary
        }
    }
}

/// Resolves a border thickness key (`"thin"`, `"thick"`) or a raw length
/// (`"3px"`, `"3"`). Unknown keys fall back to `thin`.
pub fn resolve_thickness(key: &str, theme: &Theme) -> f32 {
    let key = key.trim();

    if let Some(kind) = ThicknessKind::from_key(&key.to_ascii_lowercase()) {
        return *kind.resolve(theme);
    }

    match parse_pixels(key) {
        Ok(pixels) if pixels >= 0. => pixels,
        _ => {
            tracing::debug!(key, "unknown thickness, using thin");
            *ThicknessKind::Thin.resolve(theme)
        }
    }
}

/// A spacing value: a named token, a numeric step on the spacing scale, or
/// raw pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpaceValue {
    Token(SpaceKind),
    Step(u8),
    Px(f32),
}

impl SpaceValue {
    pub fn resolve(&self, theme: &Theme) -> f32 {
        match self {
            SpaceValue::Token(kind) => *kind.resolve(theme),
            SpaceValue::Step(step) => theme.layout.spacing.step(*step),
            SpaceValue::Px(pixels) => *pixels,
        }
    }

    /// Parses a token key, a `"<n>px"` length or a bare step number.
    /// Unknown keys fall back to no spacing.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();

        if let Some(kind) = SpaceKind::from_key(value) {
            return SpaceValue::Token(kind);
        }

        if let Ok(step) = value.parse::<u8>() {
            return SpaceValue::Step(step);
        }

        if value.ends_with("px")
            && let Ok(pixels) = parse_pixels(value)
        {
            return SpaceValue::Px(pixels);
        }

        tracing::debug!(value, "unknown spacing, using none");
        SpaceValue::Token(SpaceKind::None)
    }
}

impl From<SpaceKind> for SpaceValue {
    fn from(value: SpaceKind) -> Self {
        SpaceValue::Token(value)
    }
}

impl From<u8> for SpaceValue {
    fn from(value: u8) -> Self {
        SpaceValue::Step(value)
    }
}

impl From<f32> for SpaceValue {
    fn from(value: f32) -> Self {
        SpaceValue::Px(value)
    }
}

pub fn resolve_space(value: impl Into<SpaceValue>, theme: &Theme) -> f32 {
    value.into().resolve(theme)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RadiusValue {
    Token(RadiusKind),
    Px(f32),
}

impl RadiusValue {
    pub fn resolve(&self, theme: &Theme) -> f32 {
        match self {
            RadiusValue::Token(kind) => *kind.resolve(theme),
            RadiusValue::Px(pixels) => *pixels,
        }
    }
}

impl From<RadiusKind> for RadiusValue {
    fn from(value: RadiusKind) -> Self {
        RadiusValue::Token(value)
    }
}

impl From<f32> for RadiusValue {
    fn from(value: f32) -> Self {
        RadiusValue::Px(value)
    }
}

/// Resolves a radius key (`"md"`, `"full"`) or raw length. Unknown keys fall
/// back to `md`.
pub fn resolve_radius(key: &str, theme: &Theme) -> f32 {
    let key = key.trim();

    if let Some(kind) = RadiusKind::from_key(&key.to_ascii_lowercase()) {
        return *kind.resolve(theme);
    }

    match parse_pixels(key) {
        Ok(pixels) if pixels >= 0. => pixels,
        _ => {
            tracing::debug!(key, "unknown radius, using md");
            *RadiusKind::Md.resolve(theme)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_theme::rgb;

    fn theme() -> Theme {
        Theme::default_theme().clone()
    }

    #[test]
    fn test_raw_colors_pass_through() {
        let theme = theme();
        assert_eq!(resolve_color("#ff0000", &theme), rgb(0xff0000));
        assert_eq!(resolve_color("rgba(0, 0, 0, 0.5)", &theme).a, 0.5);
        assert!(resolve_color("transparent", &theme).is_transparent());
    }

    #[test]
    fn test_semantic_colors_resolve() {
        let theme = theme();
        let colors = theme.colors();

        assert_eq!(resolve_color("danger", &theme), colors.accent.destructive);
        assert_eq!(resolve_color("Brand", &theme), colors.accent.brand);
        assert_eq!(resolve_color("error", &theme), colors.accent.destructive);
        assert_eq!(resolve_color("muted", &theme), colors.text.muted);
    }

    #[test]
    fn test_unknown_color_falls_back() {
        let theme = theme();
        assert_eq!(resolve_color("chartreuse", &theme), theme.colors().text.primary);
        assert_eq!(resolve_color("#zzz", &theme), theme.colors().text.primary);
    }

    #[test]
    fn test_thickness() {
        let theme = theme();
        assert_eq!(resolve_thickness("thick", &theme), 3.);
        assert_eq!(resolve_thickness("5px", &theme), 5.);
        assert_eq!(resolve_thickness("1.5", &theme), 1.5);
        assert_eq!(resolve_thickness("chunky", &theme), 1.);
    }

    #[test]
    fn test_space_values() {
        let theme = theme();
        assert_eq!(resolve_space(SpaceKind::Md, &theme), 12.);
        assert_eq!(resolve_space(3u8, &theme), 8.);
        assert_eq!(resolve_space(7.5f32, &theme), 7.5);

        assert_eq!(SpaceValue::parse("lg"), SpaceValue::Token(SpaceKind::Lg));
        assert_eq!(SpaceValue::parse("2"), SpaceValue::Step(2));
        assert_eq!(SpaceValue::parse("10px"), SpaceValue::Px(10.));
        assert_eq!(SpaceValue::parse("lots"), SpaceValue::Token(SpaceKind::None));
    }

    #[test]
    fn test_radius() {
        let theme = theme();
        assert_eq!(resolve_radius("full", &theme), 9999.);
        assert_eq!(resolve_radius("6px", &theme), 6.);
        assert_eq!(resolve_radius("blobby", &theme), 8.);
        assert_eq!(RadiusValue::from(RadiusKind::Sm).resolve(&theme), 4.);
    }
}
