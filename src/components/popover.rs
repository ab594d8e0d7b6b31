use mosaic_motion::animation;
use mosaic_theme::Theme;

use crate::{
    components::surface::{SurfaceVariant, build_surface_style},
    style::Style,
    theme::{DurationKind, EasingKind, LayerKind, RadiusKind, ShadowKind, SpaceKind},
};

/// Gap kept between floating content and the viewport edge.
pub const VIEWPORT_PADDING: f32 = 8.;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    Top,
    Right,
    #[default]
    Bottom,
    Left,
}

impl Side {
    pub fn opposite(&self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Right => Side::Left,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
        }
    }

    fn is_vertical(&self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }

    /// Where scale animations grow from.
    pub(crate) fn transform_origin(&self) -> &'static str {
        match self {
            Side::Top => "bottom center",
            Side::Right => "center left",
            Side::Bottom => "top center",
            Side::Left => "center right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Align {
    Start,
    #[default]
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Placement {
    pub side: Side,
    pub align: Align,
}

/// Where floating content ends up. `side` differs from the requested side
/// when the content was flipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedContent {
    pub x: f32,
    pub y: f32,
    pub side: Side,
}

fn position_for(
    anchor: &Rect,
    width: f32,
    height: f32,
    placement: Placement,
    offset: f32,
) -> (f32, f32) {
    let main = match placement.side {
        Side::Top => anchor.y - offset - height,
        Side::Bottom => anchor.bottom() + offset,
        Side::Left => anchor.x - offset - width,
        Side::Right => anchor.right() + offset,
    };

    let cross = if placement.side.is_vertical() {
        match placement.align {
            Align::Start => anchor.x,
            Align::Center => anchor.x + (anchor.width - width) / 2.,
            Align::End => anchor.right() - width,
        }
    } else {
        match placement.align {
            Align::Start => anchor.y,
            Align::Center => anchor.y + (anchor.height - height) / 2.,
            Align::End => anchor.bottom() - height,
        }
    };

    if placement.side.is_vertical() {
        (cross, main)
    } else {
        (main, cross)
    }
}

/// How far content at `(x, y)` sticks out of `viewport` along the main axis
/// of `side`.
fn main_axis_overflow(
    viewport: &Rect,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    side: Side,
) -> f32 {
    let (start, end, min, max) = if side.is_vertical() {
        (y, y + height, viewport.y, viewport.bottom())
    } else {
        (x, x + width, viewport.x, viewport.right())
    };

    (min + VIEWPORT_PADDING - start).max(0.) + (end - (max - VIEWPORT_PADDING)).max(0.)
}

fn clamp_axis(value: f32, size: f32, min: f32, max: f32) -> f32 {
    let low = min + VIEWPORT_PADDING;
    let high = max - VIEWPORT_PADDING - size;

    if high < low { low } else { value.clamp(low, high) }
}

/// Positions content of `width` x `height` next to `anchor`.
///
/// Content that would overflow the viewport on the requested side flips to
/// the opposite side when that overflows less. The cross axis is then
/// shifted to stay inside the viewport.
pub fn compute_placement(
    anchor: Rect,
    width: f32,
    height: f32,
    viewport: Rect,
    placement: Placement,
    offset: f32,
) -> PlacedContent {
    let (x, y) = position_for(&anchor, width, height, placement, offset);
    let overflow = main_axis_overflow(&viewport, x, y, width, height, placement.side);

    let (mut x, mut y, side) = if overflow > 0. {
        let flipped = Placement {
            side: placement.side.opposite(),
            ..placement
        };
        let (flipped_x, flipped_y) = position_for(&anchor, width, height, flipped, offset);
        let flipped_overflow =
            main_axis_overflow(&viewport, flipped_x, flipped_y, width, height, flipped.side);

        if flipped_overflow < overflow {
            tracing::trace!(from = ?placement.side, to = ?flipped.side, "flipping placement");
            (flipped_x, flipped_y, flipped.side)
        } else {
            (x, y, placement.side)
        }
    } else {
        (x, y, placement.side)
    };

    if side.is_vertical() {
        x = clamp_axis(x, width, viewport.x, viewport.right());
    } else {
        y = clamp_axis(y, height, viewport.y, viewport.bottom());
    }

    PlacedContent { x, y, side }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PopoverProps {
    pub open: bool,
    pub surface: SurfaceVariant,
    /// The side the content ended up on, see [`compute_placement`].
    pub side: Side,
}

pub fn build_popover_style(props: &PopoverProps, theme: &Theme) -> Style {
    let padding = *SpaceKind::Md.resolve(theme);

    build_surface_style(props.surface, theme)
        .set("position", "absolute")
        .set("zIndex", *LayerKind::Popover.resolve(theme))
        .set("display", if props.open { "block" } else { "none" })
        .set("boxSizing", "border-box")
        .set("minWidth", 200.)
        .padding(padding, padding, padding, padding)
        .rounded(*RadiusKind::Md.resolve(theme))
        .shadow(*ShadowKind::Lg.resolve(theme))
        .set("transformOrigin", props.side.transform_origin())
        .when(props.open, |this| {
            this.animation(
                animation::SCALE_IN,
                *DurationKind::Fast.resolve(theme),
                EasingKind::Decelerate.curve(theme),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::new(0., 0., 800., 600.)
    }

    #[test]
    fn test_bottom_center() {
        let anchor = Rect::new(100., 100., 80., 32.);
        let placed = compute_placement(anchor, 200., 100., viewport(), Placement::default(), 4.);

        assert_eq!(placed.side, Side::Bottom);
        assert_eq!(placed.x, 40.);
        assert_eq!(placed.y, 136.);
    }

    #[test]
    fn test_flips_when_overflowing() {
        let anchor = Rect::new(100., 540., 80., 32.);
        let placed = compute_placement(anchor, 200., 100., viewport(), Placement::default(), 4.);

        assert_eq!(placed.side, Side::Top);
        assert_eq!(placed.y, 436.);
    }

    #[test]
    fn test_keeps_side_when_flip_is_worse() {
        // Tall content overflows on both sides, the bottom less so.
        let anchor = Rect::new(100., 200., 80., 32.);
        let placed = compute_placement(anchor, 200., 500., viewport(), Placement::default(), 4.);

        assert_eq!(placed.side, Side::Bottom);
    }

    #[test]
    fn test_shifts_cross_axis_into_viewport() {
        let anchor = Rect::new(0., 100., 40., 32.);
        let placed = compute_placement(
            anchor,
            200.,
            100.,
            viewport(),
            Placement {
                side: Side::Bottom,
                align: Align::End,
            },
            4.,
        );

        assert_eq!(placed.x, VIEWPORT_PADDING);
    }

    #[test]
    fn test_horizontal_flip() {
        let anchor = Rect::new(700., 100., 60., 32.);
        let placed = compute_placement(
            anchor,
            200.,
            100.,
            viewport(),
            Placement {
                side: Side::Right,
                align: Align::Start,
            },
            8.,
        );

        assert_eq!(placed.side, Side::Left);
        assert_eq!(placed.x, 492.);
        assert_eq!(placed.y, 100.);
    }

    #[test]
    fn test_popover_style() {
        let theme = Theme::default_theme().clone();
        let style = build_popover_style(
            &PopoverProps {
                open: true,
                side: Side::Top,
                ..Default::default()
            },
            &theme,
        );

        assert_eq!(style.number("zIndex"), Some(1400.));
        assert_eq!(style.text("transformOrigin"), Some("bottom center"));
        assert_eq!(style.text("animationName"), Some(animation::SCALE_IN));
    }
}
