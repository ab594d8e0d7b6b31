use mosaic_theme::Theme;

use crate::{
    components::{
        filter::{Searchable, filter_ranked},
        input::InputProps,
        search_input::{SearchInputProps, SearchInputStyles, build_search_input_style},
        shared::{with_focus_ring, with_font, with_transition},
        surface::{SurfaceVariant, build_surface_style},
    },
    first_match,
    style::Style,
    theme::{FontWeightKind, RadiusKind, ShadowKind, SizeKind, SpaceKind, TextSizeKind},
};

/// How many glyphs are remembered as recently used.
pub const MAX_RECENTS: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EmojiCategory {
    #[default]
    Smileys,
    People,
    Animals,
    Food,
    Activities,
    Travel,
    Objects,
    Symbols,
}

impl EmojiCategory {
    pub const ALL: &'static [EmojiCategory] = &[
        EmojiCategory::Smileys,
        EmojiCategory::People,
        EmojiCategory::Animals,
        EmojiCategory::Food,
        EmojiCategory::Activities,
        EmojiCategory::Travel,
        EmojiCategory::Objects,
        EmojiCategory::Symbols,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EmojiCategory::Smileys => "Smileys & Emotion",
            EmojiCategory::People => "People & Body",
            EmojiCategory::Animals => "Animals & Nature",
            EmojiCategory::Food => "Food & Drink",
            EmojiCategory::Activities => "Activities",
            EmojiCategory::Travel => "Travel & Places",
            EmojiCategory::Objects => "Objects",
            EmojiCategory::Symbols => "Symbols",
        }
    }

    /// Glyph shown on the category tab.
    pub fn icon(&self) -> &'static str {
        match self {
            EmojiCategory::Smileys => "😀",
            EmojiCategory::People => "👋",
            EmojiCategory::Animals => "🐶",
            EmojiCategory::Food => "🍎",
            EmojiCategory::Activities => "⚽",
            EmojiCategory::Travel => "🚗",
            EmojiCategory::Objects => "💡",
            EmojiCategory::Symbols => "❤️",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emoji {
    pub glyph: &'static str,
    pub name: &'static str,
    pub category: EmojiCategory,
    pub keywords: Vec<String>,
}

impl Searchable for Emoji {
    fn label(&self) -> &str {
        self.name
    }

    fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

type CatalogEntry = (&'static str, &'static str, EmojiCategory, &'static [&'static str]);

const CATALOG: &[CatalogEntry] = {
    use EmojiCategory::*;

    &[
        ("😀", "grinning face", Smileys, &["smile", "happy"]),
        ("😂", "face with tears of joy", Smileys, &["laugh", "lol", "crying"]),
        ("😊", "smiling face with smiling eyes", Smileys, &["blush", "happy"]),
        ("😍", "smiling face with heart-eyes", Smileys, &["love", "crush"]),
        ("😉", "winking face", Smileys, &["wink", "flirt"]),
        ("😎", "smiling face with sunglasses", Smileys, &["cool", "sun"]),
        ("🤔", "thinking face", Smileys, &["hmm", "consider"]),
        ("😢", "crying face", Smileys, &["sad", "tear"]),
        ("😡", "enraged face", Smileys, &["angry", "mad"]),
        ("😴", "sleeping face", Smileys, &["tired", "zzz"]),
        ("👋", "waving hand", People, &["hello", "bye", "wave"]),
        ("👍", "thumbs up", People, &["like", "yes", "approve"]),
        ("👎", "thumbs down", People, &["dislike", "no"]),
        ("👏", "clapping hands", People, &["applause", "congrats"]),
        ("🙏", "folded hands", People, &["please", "thanks", "pray"]),
        ("💪", "flexed biceps", People, &["strong", "muscle"]),
        ("👀", "eyes", People, &["look", "see", "watch"]),
        ("🐶", "dog face", Animals, &["puppy", "pet"]),
        ("🐱", "cat face", Animals, &["kitten", "pet"]),
        ("🦊", "fox", Animals, &["animal"]),
        ("🐼", "panda", Animals, &["animal", "bear"]),
        ("🌸", "cherry blossom", Animals, &["flower", "spring"]),
        ("🌲", "evergreen tree", Animals, &["forest", "pine"]),
        ("🍎", "red apple", Food, &["fruit"]),
        ("🍕", "pizza", Food, &["cheese", "slice"]),
        ("🍔", "hamburger", Food, &["burger"]),
        ("🍣", "sushi", Food, &["fish", "japanese"]),
        ("☕", "hot beverage", Food, &["coffee", "tea"]),
        ("🍰", "shortcake", Food, &["cake", "dessert"]),
        ("⚽", "soccer ball", Activities, &["football", "sport"]),
        ("🏀", "basketball", Activities, &["sport", "hoop"]),
        ("🎮", "video game", Activities, &["controller", "gaming"]),
        ("🎨", "artist palette", Activities, &["art", "paint"]),
        ("🎉", "party popper", Activities, &["celebrate", "tada"]),
        ("🚗", "automobile", Travel, &["car", "drive"]),
        ("✈️", "airplane", Travel, &["flight", "plane", "travel"]),
        ("🚀", "rocket", Travel, &["launch", "ship", "space"]),
        ("🏠", "house", Travel, &["home", "building"]),
        ("🌍", "globe showing europe-africa", Travel, &["world", "earth"]),
        ("💡", "light bulb", Objects, &["idea", "lamp"]),
        ("📌", "pushpin", Objects, &["pin", "location"]),
        ("📎", "paperclip", Objects, &["attachment"]),
        ("🔒", "locked", Objects, &["lock", "secure", "private"]),
        ("💻", "laptop", Objects, &["computer", "pc"]),
        ("📅", "calendar", Objects, &["date", "schedule"]),
        ("❤️", "red heart", Symbols, &["love", "like"]),
        ("✅", "check mark button", Symbols, &["done", "yes", "ok"]),
        ("❌", "cross mark", Symbols, &["no", "delete", "wrong"]),
        ("⚠️", "warning", Symbols, &["caution", "alert"]),
        ("⭐", "star", Symbols, &["favorite", "rating"]),
        ("🔥", "fire", Symbols, &["hot", "lit", "flame"]),
    ]
};

/// The emoji set bundled with the kit.
pub fn builtin_emojis() -> Vec<Emoji> {
    CATALOG
        .iter()
        .map(|&(glyph, name, category, keywords)| Emoji {
            glyph,
            name,
            category,
            keywords: keywords.iter().map(|keyword| keyword.to_string()).collect(),
        })
        .collect()
}

/// Category browsing, search and recently used glyphs.
#[derive(Debug, Clone, PartialEq)]
pub struct EmojiPickerState {
    emojis: Vec<Emoji>,
    category: EmojiCategory,
    query: String,
    recents: Vec<&'static str>,
}

impl Default for EmojiPickerState {
    fn default() -> Self {
        Self::new(builtin_emojis())
    }
}

impl EmojiPickerState {
    pub fn new(emojis: Vec<Emoji>) -> Self {
        Self {
            emojis,
            category: EmojiCategory::default(),
            query: String::new(),
            recents: Vec::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> EmojiCategory {
        self.category
    }

    pub fn is_searching(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Switches the tab and clears the search.
    pub fn select_category(&mut self, category: EmojiCategory) {
        self.category = category;
        self.query.clear();
    }

    /// Categories that have at least one emoji, in tab order.
    pub fn categories(&self) -> Vec<EmojiCategory> {
        EmojiCategory::ALL
            .iter()
            .copied()
            .filter(|category| self.emojis.iter().any(|emoji| emoji.category == *category))
            .collect()
    }

    /// Search results across every category while searching, otherwise the
    /// emojis of the selected category.
    pub fn visible(&self) -> Vec<&Emoji> {
        if self.is_searching() {
            filter_ranked(&self.emojis, &self.query)
                .into_iter()
                .map(|ranked| ranked.item)
                .collect()
        } else {
            self.emojis
                .iter()
                .filter(|emoji| emoji.category == self.category)
                .collect()
        }
    }

    /// Picks the emoji with `glyph` and records it as recently used.
    pub fn choose(&mut self, glyph: &str) -> Option<&Emoji> {
        let index = self.emojis.iter().position(|emoji| emoji.glyph == glyph)?;
        let glyph = self.emojis[index].glyph;

        self.recents.retain(|recent| *recent != glyph);
        self.recents.insert(0, glyph);
        self.recents.truncate(MAX_RECENTS);

        Some(&self.emojis[index])
    }

    /// Most recent first.
    pub fn recents(&self) -> impl Iterator<Item = &Emoji> {
        self.recents
            .iter()
            .filter_map(|glyph| self.emojis.iter().find(|emoji| emoji.glyph == *glyph))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmojiPickerProps {
    pub surface: SurfaceVariant,
    pub columns: usize,
    pub cell_size: f32,
}

impl Default for EmojiPickerProps {
    fn default() -> Self {
        Self {
            surface: SurfaceVariant::Solid,
            columns: 8,
            cell_size: 32.,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmojiPickerStyles {
    pub root: Style,
    pub search: SearchInputStyles,
    pub tabs: Style,
    pub section_heading: Style,
    pub grid: Style,
    pub empty: Style,
}

pub fn build_emoji_picker_style(props: &EmojiPickerProps, theme: &Theme) -> EmojiPickerStyles {
    let colors = theme.colors();
    let padding = *SpaceKind::Sm.resolve(theme);
    let grid_width = props.columns as f32 * props.cell_size;

    let root = build_surface_style(props.surface, theme)
        .set("display", "flex")
        .set("flexDirection", "column")
        .set("gap", padding)
        .set("width", grid_width + padding * 2.)
        .padding(padding, padding, padding, padding)
        .rounded(*RadiusKind::Lg.resolve(theme))
        .shadow(*ShadowKind::Lg.resolve(theme));

    let search = build_search_input_style(
        &SearchInputProps {
            input: InputProps {
                size: SizeKind::Sm,
                ..Default::default()
            },
            ..Default::default()
        },
        theme,
    );

    let tabs = Style::new()
        .set("display", "flex")
        .set("justifyContent", "space-between")
        .set("borderBottomWidth", 1.)
        .set("borderBottomStyle", "solid")
        .set("borderBottomColor", colors.border.subtle);

    let section_heading = with_font(
        Style::new(),
        theme,
        *TextSizeKind::Xs.resolve(theme),
        FontWeightKind::Semibold,
    )
    .text_color(colors.text.muted)
    .padding_xy(*SpaceKind::Xxs.resolve(theme), *SpaceKind::Xs.resolve(theme));

    let grid = Style::new()
        .set("display", "grid")
        .set(
            "gridTemplateColumns",
            format!("repeat({}, {}px)", props.columns, props.cell_size),
        )
        .set("maxHeight", props.cell_size * 6.)
        .set("overflowY", "auto");

    let empty = with_font(
        Style::new(),
        theme,
        *TextSizeKind::Sm.resolve(theme),
        FontWeightKind::Regular,
    )
    .text_color(colors.text.muted)
    .set("textAlign", "center")
    .padding_xy(0., *SpaceKind::Xl.resolve(theme));

    EmojiPickerStyles {
        root,
        search,
        tabs,
        section_heading,
        grid,
        empty,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EmojiCellProps {
    pub cell_size: f32,
    pub hovered: bool,
    pub selected: bool,
    pub focused: bool,
}

pub fn build_emoji_cell_style(props: &EmojiCellProps, theme: &Theme) -> Style {
    let colors = theme.colors();

    let background = first_match!({
        props.selected => colors.accent.brand.alpha(0.16),
        props.hovered => colors.text.primary.alpha(0.08),
        _ => colors.text.primary.alpha(0.)
    });

    let cell = Style::new()
        .flex_center()
        .size(props.cell_size, props.cell_size)
        .set("fontSize", (props.cell_size * 0.65).round())
        .rounded(*RadiusKind::Sm.resolve(theme))
        .bg(background)
        .set("cursor", "pointer")
        .set("userSelect", "none");

    let cell = with_transition(cell, &["backgroundColor"], theme);

    if props.focused {
        with_focus_ring(cell, theme)
    } else {
        cell
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EmojiCategoryTabProps {
    pub active: bool,
    pub hovered: bool,
}

pub fn build_emoji_category_tab_style(props: &EmojiCategoryTabProps, theme: &Theme) -> Style {
    let colors = theme.colors();
    let size = SizeKind::Sm.resolve(theme);

    let opacity = first_match!({
        props.active => 1.,
        props.hovered => 0.8,
        _ => 0.5
    });

    let tab = Style::new()
        .flex_center()
        .size(size, size)
        .set("opacity", opacity)
        .set("cursor", "pointer")
        .set("borderBottomWidth", 2.)
        .set("borderBottomStyle", "solid")
        .set(
            "borderBottomColor",
            if props.active {
                colors.accent.brand
            } else {
                colors.accent.brand.alpha(0.)
            },
        );

    with_transition(tab, &["opacity", "borderBottomColor"], theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_category() {
        let picker = EmojiPickerState::default();

        assert_eq!(picker.categories(), EmojiCategory::ALL);
        assert!(
            builtin_emojis()
                .iter()
                .all(|emoji| !emoji.glyph.is_empty() && !emoji.keywords.is_empty())
        );
    }

    #[test]
    fn test_browse_category() {
        let mut picker = EmojiPickerState::default();
        picker.select_category(EmojiCategory::Food);

        let visible = picker.visible();
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|emoji| emoji.category == EmojiCategory::Food));
    }

    #[test]
    fn test_search_name_and_keywords() {
        let mut picker = EmojiPickerState::default();
        picker.select_category(EmojiCategory::Food);

        picker.set_query("rocket");
        let glyphs: Vec<&str> = picker.visible().iter().map(|emoji| emoji.glyph).collect();
        assert_eq!(glyphs.first(), Some(&"🚀"));

        picker.set_query("coffee");
        let glyphs: Vec<&str> = picker.visible().iter().map(|emoji| emoji.glyph).collect();
        assert_eq!(glyphs, ["☕"]);

        picker.set_query("zzzz-no-match");
        assert!(picker.visible().is_empty());

        picker.select_category(EmojiCategory::Travel);
        assert!(!picker.is_searching());
    }

    #[test]
    fn test_search_ranks_names_above_keywords() {
        let mut picker = EmojiPickerState::default();
        picker.set_query("heart");

        let names: Vec<&str> = picker.visible().iter().map(|emoji| emoji.name).collect();
        assert_eq!(names.first(), Some(&"smiling face with heart-eyes"));
        assert!(names.contains(&"red heart"));
    }

    #[test]
    fn test_recents() {
        let mut picker = EmojiPickerState::default();

        assert!(picker.choose("🔥").is_some());
        assert!(picker.choose("🍕").is_some());
        assert!(picker.choose("🔥").is_some());
        assert!(picker.choose("not an emoji").is_none());

        let recents: Vec<&str> = picker.recents().map(|emoji| emoji.glyph).collect();
        assert_eq!(recents, ["🔥", "🍕"]);

        for emoji in builtin_emojis() {
            picker.choose(emoji.glyph);
        }
        assert_eq!(picker.recents().count(), MAX_RECENTS);
    }

    #[test]
    fn test_styles() {
        let theme = Theme::default_theme().clone();
        let styles = build_emoji_picker_style(&EmojiPickerProps::default(), &theme);
        assert_eq!(
            styles.grid.text("gridTemplateColumns"),
            Some("repeat(8, 32px)")
        );

        let selected = build_emoji_cell_style(
            &EmojiCellProps {
                cell_size: 32.,
                selected: true,
                hovered: true,
                ..Default::default()
            },
            &theme,
        );
        assert_eq!(
            selected.color("backgroundColor"),
            Some(theme.colors().accent.brand.alpha(0.16))
        );

        let tab = build_emoji_category_tab_style(&EmojiCategoryTabProps::default(), &theme);
        assert_eq!(tab.number("opacity"), Some(0.5));
    }
}
