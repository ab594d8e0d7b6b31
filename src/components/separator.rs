use mosaic_theme::Theme;

use crate::{
    style::Style,
    theme::{SpaceValue, resolve_color, resolve_thickness},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeparatorProps {
    pub orientation: Orientation,
    /// Thickness key or raw length.
    pub thickness: String,
    /// Color key, defaults to the subtle border color.
    pub color: Option<String>,
    /// Space on both sides along the cross axis.
    pub spacing: Option<SpaceValue>,
}

impl Default for SeparatorProps {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            thickness: "thin".to_string(),
            color: None,
            spacing: None,
        }
    }
}

pub fn build_separator_style(props: &SeparatorProps, theme: &Theme) -> Style {
    let thickness = resolve_thickness(&props.thickness, theme);
    let color = props
        .color
        .as_deref()
        .map_or(theme.colors().border.subtle, |key| resolve_color(key, theme));
    let spacing = props.spacing.map(|spacing| spacing.resolve(theme));

    let style = Style::new().bg(color).set("flexShrink", 0.);

    match props.orientation {
        Orientation::Horizontal => style
            .set("height", thickness)
            .set("width", "100%")
            .when_some(spacing, |this, spacing| {
                this.set("marginTop", spacing).set("marginBottom", spacing)
            }),
        Orientation::Vertical => style
            .set("width", thickness)
            .set("alignSelf", "stretch")
            .when_some(spacing, |this, spacing| {
                this.set("marginLeft", spacing).set("marginRight", spacing)
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::SpaceKind;

    #[test]
    fn test_orientation_and_thickness() {
        let theme = Theme::default_theme().clone();

        let horizontal = build_separator_style(&SeparatorProps::default(), &theme);
        assert_eq!(horizontal.number("height"), Some(1.));
        assert_eq!(
            horizontal.color("backgroundColor"),
            Some(theme.colors().border.subtle)
        );

        let vertical = build_separator_style(
            &SeparatorProps {
                orientation: Orientation::Vertical,
                thickness: "thick".to_string(),
                color: Some("brand".to_string()),
                spacing: Some(SpaceKind::Sm.into()),
            },
            &theme,
        );
        assert_eq!(vertical.number("width"), Some(3.));
        assert_eq!(vertical.number("marginLeft"), Some(8.));
        assert!(!vertical.contains("height"));
    }

    #[test]
    fn test_raw_thickness() {
        let theme = Theme::default_theme().clone();
        let style = build_separator_style(
            &SeparatorProps {
                thickness: "4px".to_string(),
                ..Default::default()
            },
            &theme,
        );

        assert_eq!(style.number("height"), Some(4.));
    }
}
