use mosaic_theme::{Rgba, Theme};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    components::shared::with_font,
    style::Style,
    theme::{BackgroundKind, FontWeightKind, RadiusKind, SemanticColor, SizeKind, ThicknessKind},
    utils::RgbaExt,
};

/// Whether a word segment can lend an initial. Spacing and punctuation
/// can't; letters, digits and symbols such as emoji can.
fn has_initial(segment: &str) -> bool {
    segment.chars().any(|ch| {
        !ch.is_whitespace()
            && !ch.is_ascii_punctuation()
            && !('\u{2000}'..='\u{206f}').contains(&ch)
            && !('\u{3000}'..='\u{303f}').contains(&ch)
    })
}

/// Up to two initials from the first and last word of `name`. Graphemes are
/// kept whole so combined characters and emoji aren't split.
pub fn initials(name: &str) -> String {
    let mut words = name.split_word_bounds().filter(|segment| has_initial(segment));

    let Some(first) = words.next() else {
        return String::new();
    };

    let first_grapheme = |word: &str| word.graphemes(true).next().unwrap_or_default().to_uppercase();

    match words.last() {
        Some(last) => first_grapheme(first) + &first_grapheme(last),
        None => first_grapheme(first),
    }
}

const FALLBACK_COLORS: &[SemanticColor] = &[
    SemanticColor::Brand,
    SemanticColor::Success,
    SemanticColor::Warning,
    SemanticColor::Info,
    SemanticColor::Danger,
];

/// A stable background color picked from `name`, so the same person always
/// gets the same color.
pub fn fallback_color(name: &str, theme: &Theme) -> Rgba {
    let hash = name.trim().chars().fold(0u32, |hash, ch| {
        hash.wrapping_mul(31).wrapping_add(ch as u32)
    });

    *FALLBACK_COLORS[hash as usize % FALLBACK_COLORS.len()].resolve(theme)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AvatarShape {
    #[default]
    Circle,
    Rounded,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AvatarProps {
    pub size: SizeKind,
    pub shape: AvatarShape,
    /// Used for the initials and the fallback color.
    pub name: String,
    /// The image loaded, so the fallback is hidden.
    pub has_image: bool,
    /// Ring separating stacked avatars.
    pub ring: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AvatarStyles {
    pub root: Style,
    pub image: Style,
    /// Absent once the image loaded.
    pub fallback: Option<Style>,
}

pub fn build_avatar_style(props: &AvatarProps, theme: &Theme) -> AvatarStyles {
    let size = props.size.resolve(theme);
    let radius = match props.shape {
        AvatarShape::Circle => *RadiusKind::Full.resolve(theme),
        AvatarShape::Rounded => props.size.config(theme).radius,
    };

    let root = Style::new()
        .set("position", "relative")
        .set("overflow", "hidden")
        .set("flexShrink", 0.)
        .size(size, size)
        .rounded(radius)
        .bg(*BackgroundKind::Tertiary.resolve(theme))
        .when(props.ring, |this| {
            this.border(
                *ThicknessKind::Medium.resolve(theme),
                theme.colors().background.primary,
            )
        });

    let image = Style::new()
        .size(size, size)
        .set("objectFit", "cover");

    let fallback = (!props.has_image).then(|| {
        let color = fallback_color(&props.name, theme);

        with_font(
            Style::new(),
            theme,
            (size * 0.4).round(),
            FontWeightKind::Semibold,
        )
        .flex_center()
        .size(size, size)
        .bg(color)
        .text_color(color.readable_foreground(theme))
        .set("userSelect", "none")
    });

    AvatarStyles {
        root,
        image,
        fallback,
    }
}
