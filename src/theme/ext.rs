use std::path::Path;

use anyhow::Context;
use mosaic_theme::{Theme, ThemeVariantKind};

/// Reads a theme from a JSON file on disk.
pub fn load_theme_file(path: impl AsRef<Path>) -> anyhow::Result<Theme> {
    let path = path.as_ref();

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("could not read theme file {}", path.display()))?;

    Theme::from_json(json).with_context(|| format!("could not parse theme file {}", path.display()))
}

/// Convenience accessors layered on top of [`Theme`].
pub trait ThemeExt {
    /// Flips between the light and dark palette. Returns `false` when the
    /// theme only ships one of them.
    fn toggle_variant(&mut self) -> bool;

    fn is_dark(&self) -> bool;

    /// The default font family as a CSS value.
    fn font_family(&self) -> String;

    fn mono_font_family(&self) -> String;
}

impl ThemeExt for Theme {
    fn toggle_variant(&mut self) -> bool {
        let next = self.kind().toggled();
        self.set_active_variant(next)
    }

    fn is_dark(&self) -> bool {
        self.kind() == ThemeVariantKind::Dark
    }

    fn font_family(&self) -> String {
        self.layout.text.default_font.family_css()
    }

    fn mono_font_family(&self) -> String {
        self.layout.text.mono_font.family_css()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_variant() {
        let mut theme = Theme::default_theme().clone();
        assert!(!theme.is_dark());

        assert!(theme.toggle_variant());
        assert!(theme.is_dark());

        assert!(theme.toggle_variant());
        assert!(!theme.is_dark());
    }

    #[test]
    fn test_load_theme_file() {
        let path = std::env::temp_dir().join(format!("mosaic-theme-{}.json", std::process::id()));
        std::fs::write(&path, Theme::default_theme().to_json().unwrap()).unwrap();

        let theme = load_theme_file(&path).unwrap();
        assert_eq!(theme.name, Theme::default_theme().name);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_theme_file_has_context() {
        let err = load_theme_file("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("could not read theme file"));
    }
}
