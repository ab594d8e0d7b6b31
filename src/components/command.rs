use mosaic_theme::Theme;

use crate::{
    components::{
        filter::{MatchRank, Searchable, rank_match},
        select::{Step, next_enabled_index},
        shared::{with_font, with_transition},
        surface::{SurfaceVariant, build_surface_style},
    },
    first_match,
    style::Style,
    theme::{
        FontWeightKind, RadiusKind, ShadowKind, SizeKind, SpaceKind, TextSizeKind,
        ThicknessKind,
    },
};

const LIST_MAX_HEIGHT: f32 = 320.;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommandItem {
    pub id: String,
    pub label: String,
    pub keywords: Vec<String>,
    /// Keyboard shortcut shown on the right, e.g. `"⌘K"`.
    pub shortcut: Option<String>,
    pub disabled: bool,
}

impl CommandItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn keywords<S: Into<String>>(mut self, keywords: impl IntoIterator<Item = S>) -> Self {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl Searchable for CommandItem {
    fn label(&self) -> &str {
        &self.label
    }

    fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommandGroup {
    pub heading: String,
    pub items: Vec<CommandItem>,
}

impl CommandGroup {
    pub fn new(heading: impl Into<String>, items: Vec<CommandItem>) -> Self {
        Self {
            heading: heading.into(),
            items,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilteredGroup<'a> {
    pub heading: &'a str,
    pub items: Vec<(&'a CommandItem, MatchRank)>,
}

/// Filters every group by label and keywords. Items inside a group are
/// ordered by rank, groups keep their order and empty groups are dropped.
pub fn filter_commands<'a>(groups: &'a [CommandGroup], query: &str) -> Vec<FilteredGroup<'a>> {
    groups
        .iter()
        .filter_map(|group| {
            let mut items: Vec<(&CommandItem, MatchRank)> = group
                .items
                .iter()
                .filter_map(|item| {
                    rank_match(query, &item.label, &item.keywords).map(|rank| (item, rank))
                })
                .collect();

            if items.is_empty() {
                return None;
            }

            items.sort_by(|(_, a), (_, b)| b.cmp(a));

            Some(FilteredGroup {
                heading: &group.heading,
                items,
            })
        })
        .collect()
}

/// Query and highlight of a command palette.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandState {
    groups: Vec<CommandGroup>,
    query: String,
    /// Id of the highlighted command.
    highlighted: Option<String>,
}

impl CommandState {
    pub fn new(groups: Vec<CommandGroup>) -> Self {
        let mut state = Self {
            groups,
            query: String::new(),
            highlighted: None,
        };
        state.highlight_first();
        state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.highlight_first();
    }

    pub fn filtered(&self) -> Vec<FilteredGroup<'_>> {
        filter_commands(&self.groups, &self.query)
    }

    /// Shows the empty state when true.
    pub fn is_empty(&self) -> bool {
        self.filtered().is_empty()
    }

    pub fn highlighted(&self) -> Option<&CommandItem> {
        let id = self.highlighted.as_deref()?;
        self.groups
            .iter()
            .flat_map(|group| &group.items)
            .find(|item| item.id == id)
    }

    fn visible_items(&self) -> Vec<&CommandItem> {
        self.filtered()
            .into_iter()
            .flat_map(|group| group.items.into_iter().map(|(item, _)| item))
            .collect()
    }

    fn highlight_first(&mut self) {
        let first = self
            .visible_items()
            .into_iter()
            .find(|item| !item.disabled)
            .map(|item| item.id.clone());
        self.highlighted = first;
    }

    pub fn move_up(&mut self) {
        self.move_highlight(Step::Up);
    }

    pub fn move_down(&mut self) {
        self.move_highlight(Step::Down);
    }

    fn move_highlight(&mut self, step: Step) {
        let items = self.visible_items();
        let current = self
            .highlighted
            .as_deref()
            .and_then(|id| items.iter().position(|item| item.id == id));

        let next = next_enabled_index(items.len(), current, step, |index| !items[index].disabled)
            .map(|index| items[index].id.clone());

        if next.is_some() {
            self.highlighted = next;
        }
    }

    /// The command to run.
    pub fn confirm(&self) -> Option<&CommandItem> {
        self.highlighted().filter(|item| !item.disabled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CommandProps {
    pub surface: SurfaceVariant,
    pub size: SizeKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandStyles {
    pub root: Style,
    pub input: Style,
    pub list: Style,
    pub group_heading: Style,
    pub empty: Style,
    pub shortcut: Style,
}

pub fn build_command_style(props: &CommandProps, theme: &Theme) -> CommandStyles {
    let colors = theme.colors();
    let config = props.size.config(theme);
    let space_sm = *SpaceKind::Sm.resolve(theme);

    let root = build_surface_style(props.surface, theme)
        .set("display", "flex")
        .set("flexDirection", "column")
        .set("overflow", "hidden")
        .set("width", "100%")
        .rounded(*RadiusKind::Lg.resolve(theme))
        .shadow(*ShadowKind::Lg.resolve(theme));

    let input = with_font(Style::new(), theme, config.font_size, FontWeightKind::Regular)
        .text_color(colors.text.primary)
        .set("height", config.height + space_sm)
        .padding_xy(config.padding_x, 0.)
        .set("backgroundColor", "transparent")
        .set("borderWidth", 0.)
        .set("borderBottomWidth", *ThicknessKind::Thin.resolve(theme))
        .set("borderStyle", "solid")
        .set("borderColor", colors.border.subtle)
        .set("outlineStyle", "none");

    let list = Style::new()
        .set("maxHeight", LIST_MAX_HEIGHT)
        .set("overflowY", "auto")
        .set("padding", *SpaceKind::Xs.resolve(theme));

    let group_heading = with_font(
        Style::new(),
        theme,
        *TextSizeKind::Xs.resolve(theme),
        FontWeightKind::Semibold,
    )
    .text_color(colors.text.muted)
    .padding_xy(space_sm, *SpaceKind::Xs.resolve(theme))
    .set("textTransform", "uppercase")
    .set("letterSpacing", 0.5);

    let empty = with_font(Style::new(), theme, config.font_size, FontWeightKind::Regular)
        .text_color(colors.text.muted)
        .set("textAlign", "center")
        .padding_xy(config.padding_x, *SpaceKind::Xl.resolve(theme));

    let shortcut = with_font(
        Style::new(),
        theme,
        TextSizeKind::Xs.resolve_mono(theme),
        FontWeightKind::Medium,
    )
    .set("fontFamily", theme.layout.text.mono_font.family_css())
    .text_color(colors.text.muted)
    .set("marginLeft", "auto");

    CommandStyles {
        root,
        input,
        list,
        group_heading,
        empty,
        shortcut,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CommandItemProps {
    pub size: SizeKind,
    pub highlighted: bool,
    pub disabled: bool,
}

pub fn build_command_item_style(props: &CommandItemProps, theme: &Theme) -> Style {
    let colors = theme.colors();
    let config = props.size.config(theme);

    let bg_color = first_match!({
        props.disabled => colors.text.primary.alpha(0.),
        props.highlighted => colors.text.primary.alpha(0.06),
        _ => colors.text.primary.alpha(0.)
    });

    let item = with_font(Style::new(), theme, config.font_size, FontWeightKind::Regular)
        .set("display", "flex")
        .set("alignItems", "center")
        .set("gap", config.gap)
        .padding_xy(*SpaceKind::Sm.resolve(theme), *SpaceKind::Sm.resolve(theme))
        .rounded(*RadiusKind::Sm.resolve(theme))
        .bg(bg_color)
        .text_color(if props.disabled {
            colors.text.muted
        } else {
            colors.text.primary
        })
        .set("cursor", if props.disabled { "not-allowed" } else { "pointer" })
        .when(props.disabled, |this| this.set("opacity", 0.5));

    with_transition(item, &["backgroundColor"], theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups() -> Vec<CommandGroup> {
        vec![
            CommandGroup::new(
                "Files",
                vec![
                    CommandItem::new("reopen", "Reopen closed file"),
                    CommandItem::new("open", "Open file").shortcut("⌘O"),
                    CommandItem::new("save", "Save").keywords(["write", "store"]),
                ],
            ),
            CommandGroup::new(
                "View",
                vec![
                    CommandItem::new("zoom-in", "Zoom in"),
                    CommandItem::new("palette", "Open palette").disabled(true),
                ],
            ),
            CommandGroup::new("Help", vec![CommandItem::new("docs", "Documentation")]),
        ]
    }

    #[test]
    fn test_filter_ranks_within_group_and_drops_empty_groups() {
        let groups = groups();
        let filtered = filter_commands(&groups, "open");

        let headings: Vec<&str> = filtered.iter().map(|group| group.heading).collect();
        assert_eq!(headings, ["Files", "View"]);

        let files: Vec<&str> = filtered[0].items.iter().map(|(item, _)| item.id.as_str()).collect();
        assert_eq!(files, ["open", "reopen"]);
    }

    #[test]
    fn test_filter_matches_keywords() {
        let groups = groups();
        let filtered = filter_commands(&groups, "write");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].items[0].0.id, "save");
        assert_eq!(filtered[0].items[0].1, MatchRank::Keyword);
    }

    #[test]
    fn test_navigation_crosses_groups_and_skips_disabled() {
        let mut state = CommandState::new(groups());
        state.set_query("open");

        assert_eq!(state.highlighted().map(|item| item.id.as_str()), Some("open"));

        state.move_down();
        assert_eq!(state.highlighted().map(|item| item.id.as_str()), Some("reopen"));

        // "Open palette" is disabled, so this wraps around.
        state.move_down();
        assert_eq!(state.highlighted().map(|item| item.id.as_str()), Some("open"));

        assert_eq!(state.confirm().map(|item| item.id.as_str()), Some("open"));
    }

    #[test]
    fn test_empty_state() {
        let mut state = CommandState::new(groups());
        state.set_query("nothing like this");

        assert!(state.is_empty());
        assert_eq!(state.highlighted(), None);
        assert_eq!(state.confirm(), None);
    }

    #[test]
    fn test_item_styles() {
        let theme = Theme::default_theme().clone();
        let highlighted = build_command_item_style(
            &CommandItemProps {
                highlighted: true,
                ..Default::default()
            },
            &theme,
        );
        let disabled = build_command_item_style(
            &CommandItemProps {
                highlighted: true,
                disabled: true,
                ..Default::default()
            },
            &theme,
        );

        assert!(
            highlighted
                .color("backgroundColor")
                .is_some_and(|bg| !bg.is_transparent())
        );
        assert!(
            disabled
                .color("backgroundColor")
                .is_some_and(|bg| bg.is_transparent())
        );
    }

    #[test]
    fn test_glass_root() {
        let theme = Theme::default_theme().clone();
        let styles = build_command_style(
            &CommandProps {
                surface: SurfaceVariant::Glass,
                ..Default::default()
            },
            &theme,
        );

        assert!(styles.root.contains("backdropFilter"));
    }
}
