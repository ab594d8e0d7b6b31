use mosaic_theme::Theme;

use crate::{
    style::Style,
    theme::{FontWeightKind, TextSizeKind, ThemeExt, resolve_color},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
    Justify,
}

impl TextAlign {
    fn key(&self) -> &'static str {
        match self {
            TextAlign::Start => "left",
            TextAlign::Center => "center",
            TextAlign::End => "right",
            TextAlign::Justify => "justify",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextProps {
    pub size: TextSizeKind,
    pub weight: FontWeightKind,
    /// Color key, defaults to the primary text color.
    pub color: Option<String>,
    /// Multiplier of the font size. Defaults to the font's own line height.
    pub line_height: Option<f32>,
    pub align: TextAlign,
    /// Clamp to this many lines with an ellipsis.
    pub max_lines: Option<u32>,
    pub mono: bool,
}

impl Default for TextProps {
    fn default() -> Self {
        Self {
            size: TextSizeKind::Md,
            weight: FontWeightKind::Regular,
            color: None,
            line_height: None,
            align: TextAlign::Start,
            max_lines: None,
            mono: false,
        }
    }
}

impl TextProps {
    pub fn truncated(mut self) -> Self {
        self.max_lines = Some(1);
        self
    }
}

pub fn build_text_style(props: &TextProps, theme: &Theme) -> Style {
    let text = &theme.layout.text;

    let (family, size, default_line_height) = if props.mono {
        (
            theme.mono_font_family(),
            props.size.resolve_mono(theme),
            text.mono_font.line_height,
        )
    } else {
        (
            theme.font_family(),
            *props.size.resolve(theme),
            text.default_font.line_height,
        )
    };

    let color = props
        .color
        .as_deref()
        .map_or(theme.colors().text.primary, |key| resolve_color(key, theme));

    let style = Style::new()
        .font(
            family,
            size,
            *props.weight.resolve(theme),
            props.line_height.unwrap_or(default_line_height),
        )
        .text_color(color)
        .when(props.align != TextAlign::Start, |this| {
            this.set("textAlign", props.align.key())
        });

    match props.max_lines {
        Some(1) => style
            .set("overflow", "hidden")
            .set("whiteSpace", "nowrap")
            .set("textOverflow", "ellipsis"),
        Some(lines) if lines > 1 => style
            .set("overflow", "hidden")
            .set("display", "-webkit-box")
            .set("WebkitBoxOrient", "vertical")
            .set("WebkitLineClamp", lines as i32),
        _ => style,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> Theme {
        Theme::default_theme().clone()
    }

    #[test]
    fn test_defaults() {
        let theme = theme();
        let style = build_text_style(&TextProps::default(), &theme);

        assert_eq!(style.number("fontSize"), Some(14.));
        assert_eq!(style.color("color"), Some(theme.colors().text.primary));
        assert!(!style.contains("textAlign"));
        assert!(!style.contains("overflow"));
    }

    #[test]
    fn test_color_key_and_weight() {
        let theme = theme();
        let style = build_text_style(
            &TextProps {
                color: Some("danger".to_string()),
                weight: FontWeightKind::Bold,
                line_height: Some(2.),
                ..Default::default()
            },
            &theme,
        );

        assert_eq!(
            style.color("color"),
            Some(theme.colors().accent.destructive)
        );
        assert_eq!(style.number("fontWeight"), Some(700.));
        assert_eq!(style.number("lineHeight"), Some(28.));
    }

    #[test]
    fn test_truncation() {
        let theme = theme();

        let single = build_text_style(&TextProps::default().truncated(), &theme);
        assert_eq!(single.text("textOverflow"), Some("ellipsis"));

        let clamped = build_text_style(
            &TextProps {
                max_lines: Some(3),
                ..Default::default()
            },
            &theme,
        );
        assert_eq!(clamped.number("WebkitLineClamp"), Some(3.));
        assert!(!clamped.contains("whiteSpace"));
    }

    #[test]
    fn test_mono_family() {
        let theme = theme();
        let style = build_text_style(
            &TextProps {
                mono: true,
                ..Default::default()
            },
            &theme,
        );

        assert_eq!(
            style.text("fontFamily"),
            Some(theme.mono_font_family().as_str())
        );
    }
}
