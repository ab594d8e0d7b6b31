use indexmap::IndexMap;
use thiserror::Error;

use crate::components::select::SelectItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Up,
    Down,
}

/// Index of the next enabled entry from `current` in the direction of
/// `step`, wrapping around both ends. `None` when nothing is enabled.
pub(crate) fn next_enabled_index(
    len: usize,
    current: Option<usize>,
    step: Step,
    is_enabled: impl Fn(usize) -> bool,
) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let mut index = match (current, step) {
        (None, Step::Down) => len - 1,
        (None, Step::Up) => 0,
        (Some(current), _) => current.min(len - 1),
    };

    for _ in 0..len {
        index = match step {
            Step::Down => (index + 1) % len,
            Step::Up => (index + len - 1) % len,
        };

        if is_enabled(index) {
            return Some(index);
        }
    }

    None
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectItemsMap<I: SelectItem>(IndexMap<String, I>);

impl<I: SelectItem> Default for SelectItemsMap<I> {
    fn default() -> Self {
        Self(IndexMap::new())
    }
}

impl<I: SelectItem> SelectItemsMap<I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items with a name that's already present replace the old item in
    /// place.
    pub fn push_item(&mut self, item: impl Into<I>) {
        let item = item.into();
        self.0.insert(item.name(), item);
    }

    pub fn get(&self, item_name: &str) -> Option<&I> {
        self.0.get(item_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &I)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get_index_of(&self, item_name: &str) -> Option<usize> {
        self.0.get_index_of(item_name)
    }

    pub fn get_index(&self, index: usize) -> Option<(&String, &I)> {
        self.0.get_index(index)
    }

    pub fn first(&self) -> Option<(&String, &I)> {
        self.0.first()
    }

    pub fn last(&self) -> Option<(&String, &I)> {
        self.0.last()
    }
}

impl<I: SelectItem> FromIterator<I> for SelectItemsMap<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        let mut items = Self::new();
        for item in iter {
            items.push_item(item);
        }
        items
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectItemError {
    #[error("An item with this name doesn't exist.")]
    InvalidName,
    #[error("The item is disabled.")]
    Disabled,
}

/// Selection, highlight and visibility of a select menu.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectState<I: SelectItem> {
    items: SelectItemsMap<I>,
    selected_item: Option<String>,
    highlighted_item: Option<String>,
    open: bool,
}

impl<I: SelectItem> SelectState<I> {
    pub fn new(items: SelectItemsMap<I>) -> Self {
        Self {
            items,
            selected_item: None,
            highlighted_item: None,
            open: false,
        }
    }

    pub fn items(&self) -> &SelectItemsMap<I> {
        &self.items
    }

    pub fn push_item(&mut self, item: impl Into<I>) {
        self.items.push_item(item);
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.selected_item.as_deref()
    }

    pub fn selected_value(&self) -> Option<&I::Value> {
        self.selected_item
            .as_deref()
            .and_then(|name| self.items.get(name))
            .map(SelectItem::value)
    }

    pub fn highlighted_item(&self) -> Option<&str> {
        self.highlighted_item.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn select_item(&mut self, item_name: &str) -> Result<(), SelectItemError> {
        let item = self
            .items
            .get(item_name)
            .ok_or(SelectItemError::InvalidName)?;

        if item.disabled() {
            return Err(SelectItemError::Disabled);
        }

        if self.selected_item.as_deref() != Some(item_name) {
            tracing::trace!(item_name, "select item");
            self.selected_item = Some(item_name.to_string());
        }

        Ok(())
    }

    pub fn remove_selection(&mut self) {
        self.selected_item = None;
    }

    pub fn toggle_menu(&mut self) {
        if self.open {
            self.hide_menu()
        } else {
            self.show_menu()
        }
    }

    /// Opening the menu highlights the current selection.
    pub fn show_menu(&mut self) {
        if self.open {
            return;
        }

        self.open = true;
        self.sync_highlight_to_selection();
    }

    pub fn hide_menu(&mut self) {
        self.open = false;
        self.highlighted_item = None;
    }

    pub fn move_up(&mut self) {
        self.move_highlight(Step::Up);
    }

    pub fn move_down(&mut self) {
        self.move_highlight(Step::Down);
    }

    fn move_highlight(&mut self, step: Step) {
        let current = self
            .highlighted_item
            .as_deref()
            .and_then(|name| self.items.get_index_of(name));

        let next = next_enabled_index(self.items.len(), current, step, |index| {
            self.items
                .get_index(index)
                .is_some_and(|(_, item)| !item.disabled())
        });

        if let Some((name, _)) = next.and_then(|index| self.items.get_index(index)) {
            self.highlighted_item = Some(name.clone());
        }
    }

    /// Selects the highlighted item and closes the menu. Confirming the
    /// already selected item clears the selection. Returns the new selection.
    pub fn confirm(&mut self) -> Result<Option<&str>, SelectItemError> {
        let Some(item_name) = self.highlighted_item.clone() else {
            return Ok(self.selected_item());
        };

        if self.selected_item.as_deref() == Some(item_name.as_str()) {
            self.remove_selection();
        } else {
            self.select_item(&item_name)?;
        }

        self.hide_menu();
        Ok(self.selected_item())
    }

    pub fn sync_highlight_to_selection(&mut self) {
        self.highlighted_item = self
            .selected_item
            .clone()
            .filter(|name| self.items.get(name).is_some());
    }
}
