use mosaic_theme::Theme;

use crate::{
    components::{
        dialog::{description_style, title_style},
        shared::{with_focus_ring, with_transition},
        state::InteractionState,
        surface::{SurfaceVariant, build_layered_surface_style},
    },
    style::Style,
    theme::{RadiusKind, ShadowKind, SpaceKind, SurfaceLayerKind},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardProps {
    pub surface: SurfaceVariant,
    pub layer: SurfaceLayerKind,
    pub padding: SpaceKind,
    pub elevated: bool,
    /// Cards that act as a link or button react to hover and press.
    pub interactive: bool,
    pub state: InteractionState,
}

impl Default for CardProps {
    fn default() -> Self {
        Self {
            surface: SurfaceVariant::Solid,
            layer: SurfaceLayerKind::Primary,
            padding: SpaceKind::Lg,
            elevated: false,
            interactive: false,
            state: InteractionState::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardStyles {
    pub root: Style,
    pub header: Style,
    pub title: Style,
    pub description: Style,
    pub content: Style,
    pub footer: Style,
}

pub fn build_card_style(props: &CardProps, theme: &Theme) -> CardStyles {
    let padding = *props.padding.resolve(theme);
    let state = props.state;
    let interactive = props.interactive && !state.disabled;

    let shadow = if interactive && state.is_hovered() {
        Some(*ShadowKind::Md.resolve(theme))
    } else if props.elevated {
        Some(*ShadowKind::Sm.resolve(theme))
    } else {
        None
    };

    let root = build_layered_surface_style(props.surface, props.layer, theme)
        .set("display", "flex")
        .set("flexDirection", "column")
        .set("gap", padding)
        .padding(padding, padding, padding, padding)
        .rounded(*RadiusKind::Lg.resolve(theme))
        .when_some(shadow, |this, shadow| this.shadow(shadow));

    let root = if interactive {
        let root = with_transition(root, &["boxShadow", "transform"], theme)
            .set("cursor", "pointer")
            .when(state.is_pressed(), |this| this.set("transform", "scale(0.99)"));

        if state.shows_focus_ring() {
            with_focus_ring(root, theme)
        } else {
            root
        }
    } else {
        root
    };

    let header = Style::new()
        .set("display", "flex")
        .set("flexDirection", "column")
        .set("gap", *SpaceKind::Xxs.resolve(theme));

    let footer = Style::new()
        .set("display", "flex")
        .set("alignItems", "center")
        .set("justifyContent", "flex-end")
        .set("gap", *SpaceKind::Sm.resolve(theme));

    CardStyles {
        root,
        header,
        title: title_style(theme),
        description: description_style(theme),
        content: Style::new().set("flexGrow", 1.),
        footer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_only_lifts_interactive_cards() {
        let theme = Theme::default_theme().clone();
        let hovered = InteractionState::hovered();

        let plain = build_card_style(
            &CardProps {
                state: hovered,
                ..Default::default()
            },
            &theme,
        );
        let interactive = build_card_style(
            &CardProps {
                interactive: true,
                state: hovered,
                ..Default::default()
            },
            &theme,
        );

        assert!(!plain.root.contains("boxShadow"));
        assert!(!plain.root.contains("cursor"));
        assert_eq!(interactive.root.text("cursor"), Some("pointer"));
        assert!(interactive.root.contains("boxShadow"));
    }

    #[test]
    fn test_padding_token() {
        let theme = Theme::default_theme().clone();
        let card = build_card_style(
            &CardProps {
                padding: SpaceKind::Sm,
                ..Default::default()
            },
            &theme,
        );

        assert_eq!(card.root.number("paddingTop"), Some(8.));
    }
}
