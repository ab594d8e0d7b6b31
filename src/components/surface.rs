use mosaic_theme::Theme;

use crate::{
    style::Style,
    theme::{SurfaceLayerKind, ThicknessKind},
};

const GLASS_ALPHA: f32 = 0.72;
const GLASS_BLUR: &str = "blur(16px) saturate(180%)";

/// Rendering mode of floating panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SurfaceVariant {
    #[default]
    Solid,
    /// Translucent background over a blurred backdrop.
    Glass,
}

impl SurfaceVariant {
    pub fn key(&self) -> &'static str {
        match self {
            SurfaceVariant::Solid => "solid",
            SurfaceVariant::Glass => "glass",
        }
    }

    /// Unknown keys fall back to [`SurfaceVariant::Solid`].
    pub fn from_key(key: &str) -> Self {
        match key {
            "glass" => SurfaceVariant::Glass,
            "solid" => SurfaceVariant::Solid,
            _ => {
                tracing::debug!(key, "unknown surface variant, using solid");
                SurfaceVariant::Solid
            }
        }
    }
}

pub fn build_surface_style(variant: SurfaceVariant, theme: &Theme) -> Style {
    build_layered_surface_style(variant, SurfaceLayerKind::Primary, theme)
}

pub fn build_layered_surface_style(
    variant: SurfaceVariant,
    layer: SurfaceLayerKind,
    theme: &Theme,
) -> Style {
    let colors = theme.colors();
    let background = layer.resolve(theme);
    let border_width = *ThicknessKind::Thin.resolve(theme);

    match variant {
        SurfaceVariant::Solid => Style::new()
            .bg(background)
            .border(border_width, colors.border.subtle),
        SurfaceVariant::Glass => Style::new()
            .bg(background.alpha(GLASS_ALPHA))
            .border(border_width, colors.text.primary.alpha(0.08))
            .set("backdropFilter", GLASS_BLUR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Platform;

    #[test]
    fn test_glass_is_translucent() {
        let theme = Theme::default_theme().clone();
        let solid = build_surface_style(SurfaceVariant::Solid, &theme);
        let glass = build_surface_style(SurfaceVariant::Glass, &theme);

        assert_eq!(
            solid.color("backgroundColor"),
            Some(theme.colors().background.primary)
        );
        assert_eq!(glass.color("backgroundColor").map(|bg| bg.a), Some(GLASS_ALPHA));
        assert!(!solid.contains("backdropFilter"));
        assert!(glass.contains("backdropFilter"));

        assert!(
            glass
                .finish(Platform::Native)
                .get("backdropFilter")
                .is_none()
        );
    }

    #[test]
    fn test_variant_keys() {
        assert_eq!(SurfaceVariant::from_key("glass"), SurfaceVariant::Glass);
        assert_eq!(SurfaceVariant::from_key("frosted"), SurfaceVariant::Solid);
    }
}
