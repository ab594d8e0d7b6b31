use std::time::{Duration, Instant};

use mosaic_theme::Theme;

use crate::{
    components::{
        InputProps, InputStyles, build_input_style,
        shared::{with_cursor, with_transition},
        spinner::spinner_style,
        state::InteractionState,
    },
    style::Style,
    theme::{RadiusKind, ThicknessKind},
};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SearchInputProps {
    pub input: InputProps,
    /// The field holds text, so the clear button is shown.
    pub has_value: bool,
    pub loading: bool,
    pub clear_button: InteractionState,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchInputStyles {
    pub input: InputStyles,
    pub search_icon: Style,
    /// Present while the field holds a value and is enabled.
    pub clear_button: Option<Style>,
    /// Present while loading. Takes the clear button's slot.
    pub spinner: Option<Style>,
}

pub fn build_search_input_style(props: &SearchInputProps, theme: &Theme) -> SearchInputStyles {
    let colors = theme.colors();
    let config = props.input.size.config(theme);
    let disabled = props.input.state.interaction.disabled;

    let input_props = InputProps {
        has_leading_icon: true,
        has_trailing_icon: props.has_value || props.loading,
        ..props.input
    };
    let input = build_input_style(&input_props, theme);
    let search_icon = input.leading_icon.clone();

    let clear_button = (props.has_value && !props.loading && !disabled).then(|| {
        let button = props.clear_button;
        let clear_button = input
            .trailing_icon
            .clone()
            .set("pointerEvents", "auto")
            .flex_center()
            .rounded(*RadiusKind::Full.resolve(theme))
            .text_color(if button.is_hovered() || button.is_pressed() {
                colors.text.primary
            } else {
                colors.text.muted
            })
            .bg(if button.is_pressed() {
                colors.text.primary.alpha(0.12)
            } else if button.is_hovered() {
                colors.text.primary.alpha(0.06)
            } else {
                colors.text.primary.alpha(0.)
            });

        with_cursor(with_transition(clear_button, &["color", "backgroundColor"], theme), false)
    });

    let spinner = props.loading.then(|| {
        spinner_style(
            config.icon_size,
            colors.text.muted,
            *ThicknessKind::Medium.resolve(theme),
            theme,
        )
        .merge(
            Style::new()
                .set("position", "absolute")
                .set("right", config.padding_x)
                .set("top", input.trailing_icon.number("top").unwrap_or_default()),
        )
    });

    SearchInputStyles {
        input,
        search_icon,
        clear_button,
        spinner,
    }
}

/// Holds back the latest value until no new value arrived for `delay`.
///
/// The caller drives the clock, which keeps the debouncer deterministic and
/// independent of any timer runtime.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replaces the pending value and restarts the delay.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Takes the pending value once its delay elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    /// Drops the pending value. Returns whether there was one.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::FieldState;

    #[test]
    fn test_debouncer_waits_for_quiet_period() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.push("a", start);
        debouncer.push("ab", start + Duration::from_millis(200));

        assert_eq!(debouncer.poll(start + Duration::from_millis(300)), None);
        assert_eq!(debouncer.poll(start + Duration::from_millis(500)), Some("ab"));
        assert_eq!(debouncer.poll(start + Duration::from_millis(900)), None);
    }

    #[test]
    fn test_debouncer_cancel() {
        let start = Instant::now();
        let mut debouncer = Debouncer::default();

        debouncer.push(1, start);
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.deadline(), Some(start + DEFAULT_DEBOUNCE));

        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());
        assert_eq!(debouncer.poll(start + Duration::from_secs(1)), None);
    }

    #[test]
    fn test_clear_button_only_with_value() {
        let theme = Theme::default_theme().clone();

        let empty = build_search_input_style(&SearchInputProps::default(), &theme);
        assert!(empty.clear_button.is_none());

        let filled = build_search_input_style(
            &SearchInputProps {
                has_value: true,
                ..Default::default()
            },
            &theme,
        );
        assert!(filled.clear_button.is_some());
        assert!(filled.input.field.number("paddingRight") > Some(16.));

        let disabled = build_search_input_style(
            &SearchInputProps {
                has_value: true,
                input: InputProps {
                    state: FieldState::with_interaction(InteractionState::disabled()),
                    ..Default::default()
                },
                ..Default::default()
            },
            &theme,
        );
        assert!(disabled.clear_button.is_none());
    }

    #[test]
    fn test_loading_replaces_clear_button() {
        let theme = Theme::default_theme().clone();
        let styles = build_search_input_style(
            &SearchInputProps {
                has_value: true,
                loading: true,
                ..Default::default()
            },
            &theme,
        );

        assert!(styles.clear_button.is_none());
        assert!(styles.spinner.is_some());
    }
}
