use mosaic_motion::TransitionGoal;
use mosaic_theme::Theme;

use crate::{
    components::{
        shared::{with_cursor, with_focus_ring, with_transition},
        state::InteractionState,
    },
    first_match,
    style::Style,
    theme::{RadiusKind, SizeKind, SpaceKind, SurfaceLayerKind, ThicknessKind, resolve_color},
    utils::RgbaExt,
};

/// The handle widens by this much while pressed or focused.
const HANDLE_FOCUS_MULT: f32 = 1.25;

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchProps {
    pub size: SizeKind,
    /// Surface the unchecked track sits on.
    pub layer: SurfaceLayerKind,
    /// Semantic color name or raw color of the checked track.
    pub color: String,
    pub checked: bool,
    pub state: InteractionState,
}

impl Default for SwitchProps {
    fn default() -> Self {
        Self {
            size: SizeKind::Md,
            layer: SurfaceLayerKind::Tertiary,
            color: "brand".to_string(),
            checked: false,
            state: InteractionState::default(),
        }
    }
}

/// Resolved dimensions of a switch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchGeometry {
    pub width: f32,
    pub height: f32,
    pub handle_size: f32,
    pub padding: f32,
    pub start_offset: f32,
    pub end_offset: f32,
}

impl SwitchGeometry {
    pub fn new(size: SizeKind, theme: &Theme) -> Self {
        let handle_size = size.icon_size();
        let padding = *SpaceKind::Xxs.resolve(theme);
        let width = (handle_size * 2.) + (padding * 2.);
        let height = handle_size + (padding * 2.);

        Self {
            width,
            height,
            handle_size,
            padding,
            start_offset: padding,
            end_offset: width - handle_size - padding,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStyles {
    pub track: Style,
    pub handle: Style,
}

pub fn build_switch_style(props: &SwitchProps, theme: &Theme) -> SwitchStyles {
    let geometry = SwitchGeometry::new(props.size, theme);
    let colors = theme.colors();
    let state = props.state;

    let checked_color = resolve_color(&props.color, theme);
    let background_color = props.layer.resolve(theme);
    let border_color = props.layer.next().resolve(theme);
    let border_hover_color = border_color.apply_delta(&colors.text.primary, 0.07);
    let border_click_down_color = border_color.apply_delta(&colors.text.primary, 0.16);

    let is_focus = state.shows_focus_ring();
    let is_click_down = state.is_pressed();
    let is_hover = state.is_hovered();

    let track_color = if props.checked {
        checked_color
    } else {
        background_color
    };

    let track_border_color = first_match!({
        props.checked => checked_color,
        is_focus => colors.accent.brand,
        is_click_down => border_click_down_color,
        is_hover => border_hover_color,
        _ => *border_color
    });

    let track = Style::new()
        .set("position", "relative")
        .set("display", "inline-flex")
        .set("flexShrink", 0.)
        .set("boxSizing", "border-box")
        .size(geometry.width, geometry.height)
        .set("minWidth", geometry.width)
        .rounded(*RadiusKind::Full.resolve(theme))
        .border(*ThicknessKind::Thin.resolve(theme), track_border_color)
        .bg(track_color);
    let track = with_transition(track, &["backgroundColor", "borderColor"], theme);
    let track = with_cursor(track, state.disabled);
    let track = if is_focus { with_focus_ring(track, theme) } else { track };

    let handle_width = if is_focus || is_click_down {
        (geometry.handle_size * HANDLE_FOCUS_MULT).floor()
    } else {
        geometry.handle_size
    };

    let left = if props.checked {
        geometry.end_offset - (handle_width - geometry.handle_size)
    } else {
        geometry.start_offset
    };

    let handle = Style::new()
        .set("position", "absolute")
        .set("top", geometry.padding)
        .set("left", left)
        .size(handle_width, geometry.handle_size)
        .rounded(*RadiusKind::Full.resolve(theme))
        .bg(track_color.readable_foreground(theme));
    let handle = with_transition(handle, &["left", "width", "backgroundColor"], theme);

    SwitchStyles { track, handle }
}
