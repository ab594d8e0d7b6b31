/// Pointer and keyboard state of an interactive element, tracked by the
/// rendering layer and passed into the style builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub hovered: bool,
    pub pressed: bool,
    pub focused: bool,
    pub disabled: bool,
}

impl InteractionState {
    pub fn hovered() -> Self {
        Self {
            hovered: true,
            ..Self::default()
        }
    }

    pub fn pressed() -> Self {
        Self {
            pressed: true,
            ..Self::default()
        }
    }

    pub fn focused() -> Self {
        Self {
            focused: true,
            ..Self::default()
        }
    }

    pub fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::default()
        }
    }

    /// Whether the focus ring should be drawn. Disabled elements can't hold
    /// focus.
    pub fn shows_focus_ring(&self) -> bool {
        self.focused && !self.disabled
    }

    /// Disabled elements ignore hover and press.
    pub fn is_hovered(&self) -> bool {
        self.hovered && !self.disabled
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed && !self.disabled
    }
}

/// State of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldState {
    pub interaction: InteractionState,
    pub invalid: bool,
    pub read_only: bool,
}

impl FieldState {
    pub fn invalid() -> Self {
        Self {
            invalid: true,
            ..Self::default()
        }
    }

    pub fn with_interaction(interaction: InteractionState) -> Self {
        Self {
            interaction,
            ..Self::default()
        }
    }
}

impl From<InteractionState> for FieldState {
    fn from(value: InteractionState) -> Self {
        FieldState::with_interaction(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_suppresses_interaction() {
        let state = InteractionState {
            hovered: true,
            pressed: true,
            focused: true,
            disabled: true,
        };

        assert!(!state.is_hovered());
        assert!(!state.is_pressed());
        assert!(!state.shows_focus_ring());
    }

    #[test]
    fn test_constructors() {
        assert!(InteractionState::hovered().is_hovered());
        assert!(InteractionState::focused().shows_focus_ring());
        assert!(FieldState::invalid().invalid);
    }
}
