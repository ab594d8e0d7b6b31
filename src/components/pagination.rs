//! Page number windowing with collapsed ranges, and pagination styles.

use mosaic_theme::Theme;

use crate::{
    components::{
        shared::{with_cursor, with_focus_ring, with_font, with_transition},
        state::InteractionState,
    },
    first_match,
    style::Style,
    theme::{FontWeightKind, SizeKind, SpaceKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaginationItem {
    Previous { disabled: bool },
    Page { page: usize, active: bool },
    Ellipsis,
    Next { disabled: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaginationOptions {
    pub total: usize,
    /// One based, clamped into `1..=total`.
    pub page: usize,
    /// Pages shown on each side of the current one.
    pub siblings: usize,
    /// Pages pinned at each end when `show_first_last` is set.
    pub boundaries: usize,
    pub show_first_last: bool,
    pub show_controls: bool,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            total: 1,
            page: 1,
            siblings: 1,
            boundaries: 1,
            show_first_last: true,
            show_controls: false,
        }
    }
}

impl PaginationOptions {
    pub fn new(total: usize, page: usize) -> Self {
        Self {
            total,
            page,
            ..Default::default()
        }
    }

    pub fn current_page(&self) -> usize {
        self.page.clamp(1, self.total.max(1))
    }

    pub fn has_previous(&self) -> bool {
        self.current_page() > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page() < self.total
    }
}

/// Items to render for `options`. The sequence keeps the same length while
/// the current page moves, as long as there are enough pages to collapse.
pub fn pagination_items(options: &PaginationOptions) -> Vec<PaginationItem> {
    if options.total == 0 {
        return Vec::new();
    }

    let total = options.total as isize;
    let page = options.current_page() as isize;
    let siblings = options.siblings as isize;
    let boundaries = if options.show_first_last {
        options.boundaries as isize
    } else {
        0
    };

    let start_pages = 1..=boundaries.min(total);
    let end_pages = (total - boundaries + 1).max(boundaries + 1)..=total;

    let siblings_start = (page - siblings)
        .min(total - boundaries - siblings * 2 - 1)
        .max(boundaries + 2);
    let siblings_end = (page + siblings)
        .max(boundaries + siblings * 2 + 2)
        .min(if end_pages.is_empty() {
            total - 1
        } else {
            end_pages.start() - 2
        });

    let mut pages: Vec<Option<isize>> = start_pages.map(Some).collect();

    if siblings_start > boundaries + 2 {
        pages.push(None);
    } else if boundaries + 1 < total - boundaries {
        pages.push(Some(boundaries + 1));
    }

    pages.extend((siblings_start..=siblings_end).map(Some));

    if siblings_end < total - boundaries - 1 {
        pages.push(None);
    } else if total - boundaries > boundaries {
        pages.push(Some(total - boundaries));
    }

    pages.extend(end_pages.map(Some));

    let mut items = Vec::with_capacity(pages.len() + 2);

    if options.show_controls {
        items.push(PaginationItem::Previous {
            disabled: !options.has_previous(),
        });
    }

    items.extend(pages.into_iter().map(|page_number| match page_number {
        Some(number) => PaginationItem::Page {
            page: number as usize,
            active: number == page,
        },
        None => PaginationItem::Ellipsis,
    }));

    if options.show_controls {
        items.push(PaginationItem::Next {
            disabled: !options.has_next(),
        });
    }

    items
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaginationItemProps {
    pub size: SizeKind,
    pub active: bool,
    pub ellipsis: bool,
    pub state: InteractionState,
}

impl PaginationItemProps {
    pub fn for_item(item: &PaginationItem, size: SizeKind, state: InteractionState) -> Self {
        let (active, ellipsis, disabled) = match *item {
            PaginationItem::Previous { disabled } | PaginationItem::Next { disabled } => {
                (false, false, disabled)
            }
            PaginationItem::Page { active, .. } => (active, false, false),
            PaginationItem::Ellipsis => (false, true, false),
        };

        Self {
            size,
            active,
            ellipsis,
            state: InteractionState {
                disabled: state.disabled || disabled,
                ..state
            },
        }
    }
}

pub fn build_pagination_style(theme: &Theme) -> Style {
    Style::new()
        .set("display", "flex")
        .set("alignItems", "center")
        .set("gap", *SpaceKind::Xs.resolve(theme))
}

pub fn build_pagination_item_style(props: &PaginationItemProps, theme: &Theme) -> Style {
    let colors = theme.colors();
    let config = props.size.config(theme);
    let state = props.state;

    let item = with_font(
        Style::new(),
        theme,
        config.font_size,
        if props.active {
            FontWeightKind::Semibold
        } else {
            FontWeightKind::Medium
        },
    )
    .flex_center()
    .set("height", config.height)
    .set("minWidth", config.height)
    .rounded(config.radius);

    if props.ellipsis {
        return item
            .text_color(colors.text.muted)
            .set("userSelect", "none")
            .set("cursor", "default");
    }

    let (background, text_color) = first_match!({
        state.disabled => (colors.text.primary.alpha(0.), colors.text.muted),
        props.active => (colors.accent.brand, colors.text.inverse),
        state.is_pressed() => (colors.text.primary.alpha(0.1), colors.text.primary),
        state.is_hovered() => (colors.text.primary.alpha(0.06), colors.text.primary),
        _ => (colors.text.primary.alpha(0.), colors.text.secondary)
    });

    let item = item
        .padding_xy(*SpaceKind::Xs.resolve(theme), 0.)
        .bg(background)
        .text_color(text_color);

    let item = with_transition(item, &["backgroundColor", "color"], theme);
    let item = with_cursor(item, state.disabled);

    if state.shows_focus_ring() {
        with_focus_ring(item, theme)
    } else {
        item
    }
}
