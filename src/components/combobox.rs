use mosaic_theme::Theme;

use crate::{
    components::{
        InputProps, InputStyles, build_input_style,
        filter::{Searchable, filter_ranked},
        select::{Step, build_menu_style, next_enabled_index},
        shared::with_font,
    },
    style::Style,
    theme::{FontWeightKind, SizeKind, SpaceKind},
};

/// Filtering, highlight and selection of a combobox.
#[derive(Debug, Clone, PartialEq)]
pub struct ComboboxState<T: Searchable> {
    options: Vec<T>,
    query: String,
    /// Indices into `options`, best match first.
    matches: Vec<usize>,
    /// Position inside `matches`.
    highlighted: Option<usize>,
    selected: Option<usize>,
    open: bool,
}

impl<T: Searchable> ComboboxState<T> {
    pub fn new(options: Vec<T>) -> Self {
        let matches = (0..options.len()).collect();

        Self {
            options,
            query: String::new(),
            matches,
            highlighted: None,
            selected: None,
            open: false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Re-filters the options, opens the menu and highlights the best match.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.matches = filter_ranked(&self.options, &self.query)
            .into_iter()
            .map(|ranked| ranked.index)
            .collect();
        self.highlighted = (!self.matches.is_empty()).then_some(0);
        self.open = true;
    }

    pub fn matches(&self) -> impl Iterator<Item = &T> {
        self.matches.iter().map(|index| &self.options[*index])
    }

    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }

    pub fn highlighted(&self) -> Option<&T> {
        self.highlighted
            .and_then(|position| self.matches.get(position))
            .map(|index| &self.options[*index])
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.map(|index| &self.options[index])
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.highlighted = None;
    }

    pub fn move_up(&mut self) {
        self.move_highlight(Step::Up);
    }

    pub fn move_down(&mut self) {
        self.move_highlight(Step::Down);
    }

    fn move_highlight(&mut self, step: Step) {
        self.open = true;
        if let Some(next) = next_enabled_index(self.matches.len(), self.highlighted, step, |_| true)
        {
            self.highlighted = Some(next);
        }
    }

    /// Selects the highlighted option, fills the query with its label and
    /// closes the menu.
    pub fn confirm(&mut self) -> Option<&T> {
        let index = *self.matches.get(self.highlighted?)?;

        self.selected = Some(index);
        self.query = self.options[index].label().to_string();
        self.matches = (0..self.options.len()).collect();
        self.close();

        self.selected()
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.set_query("");
        self.close();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ComboboxProps {
    pub input: InputProps,
    pub open: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComboboxStyles {
    pub input: InputStyles,
    pub menu: Style,
    /// Shown in the menu when nothing matches.
    pub empty: Style,
}

pub fn build_combobox_style(props: &ComboboxProps, theme: &Theme) -> ComboboxStyles {
    let config = props.input.size.config(theme);
    let input = build_input_style(
        &InputProps {
            has_trailing_icon: true,
            ..props.input
        },
        theme,
    );

    let menu = build_menu_style(props.input.layer, props.open, theme)
        .set("width", "100%")
        .set("top", config.height + config.gap / 2.);

    let padding = *SpaceKind::Lg.resolve(theme);
    let empty = with_font(
        Style::new(),
        theme,
        *SizeKind::Sm.text_size().resolve(theme),
        FontWeightKind::Regular,
    )
    .text_color(theme.colors().text.muted)
    .set("textAlign", "center")
    .padding_xy(padding, padding);

    ComboboxStyles { input, menu, empty }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ComboboxState<&'static str> {
        ComboboxState::new(vec!["Apple", "Apricot", "Banana", "Pineapple"])
    }

    #[test]
    fn test_set_query_filters_and_ranks() {
        let mut state = state();
        state.set_query("app");

        assert_eq!(state.matches().copied().collect::<Vec<_>>(), ["Apple", "Pineapple"]);
        assert_eq!(state.highlighted(), Some(&"Apple"));
        assert!(state.is_open());
    }

    #[test]
    fn test_no_matches() {
        let mut state = state();
        state.set_query("cherry");

        assert!(!state.has_matches());
        assert_eq!(state.highlighted(), None);
        assert_eq!(state.confirm(), None);
    }

    #[test]
    fn test_navigate_and_confirm() {
        let mut state = state();
        state.set_query("app");
        state.move_down();
        state.move_down();

        // Wrapped back to the best match.
        assert_eq!(state.highlighted(), Some(&"Apple"));
        state.move_up();
        assert_eq!(state.highlighted(), Some(&"Pineapple"));

        assert_eq!(state.confirm(), Some(&"Pineapple"));
        assert_eq!(state.query(), "Pineapple");
        assert!(!state.is_open());
        assert_eq!(state.matches().count(), 4);
    }

    #[test]
    fn test_clear() {
        let mut state = state();
        state.set_query("ban");
        state.confirm();
        state.clear();

        assert_eq!(state.selected(), None);
        assert_eq!(state.query(), "");
        assert_eq!(state.matches().count(), 4);
    }

    #[test]
    fn test_styles() {
        let theme = Theme::default_theme().clone();
        let styles = build_combobox_style(
            &ComboboxProps {
                open: true,
                ..Default::default()
            },
            &theme,
        );

        assert_eq!(styles.menu.text("display"), Some("flex"));
        assert_eq!(styles.empty.color("color"), Some(theme.colors().text.muted));
    }
}
