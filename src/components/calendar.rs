//! Month grid generation, date range selection and calendar styles.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use mosaic_theme::Theme;
use smallvec::SmallVec;

use crate::{
    components::shared::{DISABLED_OPACITY, with_focus_ring, with_font, with_transition},
    first_match,
    style::Style,
    theme::{FontWeightKind, RadiusKind, SizeKind, SpaceKind, TextSizeKind},
};

pub const DAYS_PER_WEEK: usize = 7;
/// Weeks shown when the grid has a fixed height.
pub const FIXED_WEEKS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarOptions {
    pub week_start: Weekday,
    /// Always emit six weeks so the grid height doesn't jump between months.
    pub fixed_weeks: bool,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            week_start: Weekday::Sun,
            fixed_weeks: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// False for the leading and trailing days from adjacent months.
    pub in_month: bool,
    pub is_today: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonth {
    /// First day of the month.
    pub first: NaiveDate,
    pub weeks: SmallVec<[[CalendarDay; DAYS_PER_WEEK]; FIXED_WEEKS]>,
}

impl CalendarMonth {
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flatten()
    }
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(date.day0() as u64)
}

pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);

    // The last representable month is a December.
    first
        .checked_add_months(Months::new(1))
        .map_or(31, |next| (next - first).num_days() as u32)
}

/// Moves by `delta` months. The day is clamped to the length of the target
/// month, and the result saturates at the ends of the supported date range.
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = Months::new(delta.unsigned_abs());

    if delta >= 0 {
        date.checked_add_months(months).unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_months(months).unwrap_or(NaiveDate::MIN)
    }
}

/// The seven weekdays in display order.
pub fn weekdays(week_start: Weekday) -> [Weekday; DAYS_PER_WEEK] {
    let mut day = week_start;

    std::array::from_fn(|_| {
        let current = day;
        day = day.succ();
        current
    })
}

/// Builds the 7-column grid for the month containing `month`, padded with
/// days from the adjacent months.
///
/// Returns `None` when the padding would run past the supported date range.
pub fn month_grid(
    month: NaiveDate,
    today: Option<NaiveDate>,
    options: CalendarOptions,
) -> Option<CalendarMonth> {
    let first = first_of_month(month);
    let leading = (first.weekday().num_days_from_monday() + 7
        - options.week_start.num_days_from_monday())
        % 7;
    let start = first.checked_sub_days(Days::new(leading as u64))?;

    let used = leading as usize + days_in_month(first) as usize;
    let week_count = if options.fixed_weeks {
        FIXED_WEEKS
    } else {
        used.div_ceil(DAYS_PER_WEEK)
    };
    // Every cell has to be a representable date.
    start.checked_add_days(Days::new((week_count * DAYS_PER_WEEK - 1) as u64))?;

    let weeks = (0..week_count)
        .map(|week| {
            std::array::from_fn(|weekday| {
                let date = start + Days::new((week * DAYS_PER_WEEK + weekday) as u64);

                CalendarDay {
                    date,
                    in_month: date.month() == first.month() && date.year() == first.year(),
                    is_today: today == Some(date),
                }
            })
        })
        .collect();

    Some(CalendarMonth { first, weeks })
}

/// An inclusive date range that is built with two clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        let (start, end) = if end < start { (end, start) } else { (start, end) };

        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// The first click starts a range, the second closes it. Clicking before
    /// the start swaps the ends. A click on a complete range starts over.
    pub fn select(self, date: NaiveDate) -> Self {
        match (self.start, self.end) {
            (Some(start), None) => DateRange::new(start, date),
            _ => DateRange {
                start: Some(date),
                end: None,
            },
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= date && date <= end,
            (Some(start), None) => start == date,
            _ => false,
        }
    }

    /// Strictly between the ends.
    pub fn is_inside(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start < date && date < end,
            _ => false,
        }
    }

    pub fn is_endpoint(&self, date: NaiveDate) -> bool {
        self.start == Some(date) || self.end == Some(date)
    }
}

/// Whether `date` falls outside the optional `min..=max` bounds.
pub fn is_out_of_bounds(date: NaiveDate, min: Option<NaiveDate>, max: Option<NaiveDate>) -> bool {
    min.is_some_and(|min| date < min) || max.is_some_and(|max| date > max)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DayCellProps {
    pub size: SizeKind,
    pub disabled: bool,
    pub selected: bool,
    /// Between the ends of a selected range.
    pub in_range: bool,
    pub today: bool,
    pub hovered: bool,
    /// Leading or trailing day of an adjacent month.
    pub outside: bool,
    pub focused: bool,
}

impl DayCellProps {
    pub fn for_day(day: &CalendarDay, range: &DateRange) -> Self {
        Self {
            selected: range.is_endpoint(day.date),
            in_range: range.is_inside(day.date),
            today: day.is_today,
            outside: !day.in_month,
            ..Default::default()
        }
    }
}

/// Day cell state, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayCellState {
    Disabled,
    Selected,
    InRange,
    Today,
    Hovered,
    Outside,
    Default,
}

impl DayCellProps {
    pub fn resolve_state(&self) -> DayCellState {
        first_match!({
            self.disabled => DayCellState::Disabled,
            self.selected => DayCellState::Selected,
            self.in_range => DayCellState::InRange,
            self.today => DayCellState::Today,
            self.hovered => DayCellState::Hovered,
            self.outside => DayCellState::Outside,
            _ => DayCellState::Default
        })
    }
}

fn cell_size(size: SizeKind, theme: &Theme) -> f32 {
    size.resolve(theme)
}

pub fn build_day_cell_style(props: &DayCellProps, theme: &Theme) -> Style {
    let colors = theme.colors();
    let config = props.size.config(theme);
    let size = cell_size(props.size, theme);
    let transparent = colors.accent.brand.alpha(0.);

    let (background, text_color, weight) = match props.resolve_state() {
        DayCellState::Disabled => (transparent, colors.text.muted, FontWeightKind::Regular),
        DayCellState::Selected => (
            colors.accent.brand,
            colors.text.inverse,
            FontWeightKind::Semibold,
        ),
        DayCellState::InRange => (
            colors.accent.brand.alpha(0.12),
            colors.text.primary,
            FontWeightKind::Regular,
        ),
        DayCellState::Today => (
            colors.text.primary.alpha(0.06),
            colors.accent.brand,
            FontWeightKind::Semibold,
        ),
        DayCellState::Hovered => (
            colors.text.primary.alpha(0.06),
            colors.text.primary,
            FontWeightKind::Regular,
        ),
        DayCellState::Outside => (transparent, colors.text.muted, FontWeightKind::Regular),
        DayCellState::Default => (transparent, colors.text.primary, FontWeightKind::Regular),
    };

    let cell = with_font(Style::new(), theme, config.font_size, weight)
        .flex_center()
        .size(size, size)
        .rounded(if props.in_range && !props.selected && !props.disabled {
            0.
        } else {
            config.radius
        })
        .bg(background)
        .text_color(text_color)
        .set("userSelect", "none");

    let cell = match props.resolve_state() {
        DayCellState::Disabled => cell
            .set("opacity", DISABLED_OPACITY)
            .set("cursor", "not-allowed")
            .set("textDecorationLine", "line-through"),
        _ => cell.set("cursor", "pointer"),
    };

    let cell = with_transition(cell, &["backgroundColor", "color"], theme);

    if props.focused && !props.disabled {
        with_focus_ring(cell, theme)
    } else {
        cell
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CalendarProps {
    pub size: SizeKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarStyles {
    pub root: Style,
    pub header: Style,
    pub title: Style,
    pub nav_button: Style,
    pub weekday: Style,
    pub grid: Style,
}

pub fn build_calendar_style(props: &CalendarProps, theme: &Theme) -> CalendarStyles {
    let colors = theme.colors();
    let config = props.size.config(theme);
    let size = cell_size(props.size, theme);
    let padding = *SpaceKind::Md.resolve(theme);
    let gap = *SpaceKind::Xxs.resolve(theme);

    let root = Style::new()
        .set("display", "inline-flex")
        .set("flexDirection", "column")
        .set("gap", *SpaceKind::Sm.resolve(theme))
        .padding(padding, padding, padding, padding);

    let header = Style::new()
        .set("display", "flex")
        .set("alignItems", "center")
        .set("justifyContent", "space-between")
        .set("height", size);

    let title = with_font(Style::new(), theme, config.font_size, FontWeightKind::Semibold)
        .text_color(colors.text.primary);

    let nav_button = Style::new()
        .flex_center()
        .size(size, size)
        .rounded(*RadiusKind::Md.resolve(theme))
        .text_color(colors.text.secondary)
        .set("cursor", "pointer");

    let weekday = with_font(
        Style::new(),
        theme,
        *TextSizeKind::Xs.resolve(theme),
        FontWeightKind::Medium,
    )
    .flex_center()
    .size(size, size)
    .text_color(colors.text.muted);

    let grid = Style::new()
        .set("display", "grid")
        .set(
            "gridTemplateColumns",
            format!("repeat({DAYS_PER_WEEK}, {size}px)"),
        )
        .set("rowGap", gap);

    CalendarStyles {
        root,
        header,
        title,
        nav_button,
        weekday,
        grid,
    }
}
