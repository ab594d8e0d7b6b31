use std::time::Duration;

use mosaic_motion::{CubicBezier, animation};
use mosaic_theme::Theme;

use crate::{
    components::layout::Dimension,
    style::Style,
    theme::{BackgroundKind, EasingKind, RadiusKind, SurfaceLayerKind, TextSizeKind},
};

const SHIMMER_DURATION: Duration = Duration::from_millis(1500);
const PULSE_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SkeletonShape {
    /// A line of text.
    #[default]
    Text,
    Circle,
    Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SkeletonAnimation {
    #[default]
    Shimmer,
    Pulse,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SkeletonProps {
    pub shape: SkeletonShape,
    pub animation: SkeletonAnimation,
    /// The surface the placeholder sits on.
    pub layer: SurfaceLayerKind,
    pub width: Option<Dimension>,
    /// Ignored for circles, which are as tall as they are wide.
    pub height: Option<f32>,
}

pub fn build_skeleton_style(props: &SkeletonProps, theme: &Theme) -> Style {
    let base = *props.layer.next().resolve(theme);
    let text_height = *TextSizeKind::Md.resolve(theme);

    let style = Style::new().bg(base).set("display", "block");

    let style = match props.shape {
        SkeletonShape::Text => {
            let style = style
                .set("height", props.height.unwrap_or(text_height))
                .rounded(*RadiusKind::Sm.resolve(theme));

            match props.width {
                Some(width) => width.apply(style, "width"),
                None => style.set("width", "100%"),
            }
        }
        SkeletonShape::Circle => {
            let size = match props.width {
                Some(Dimension::Px(size)) => size,
                _ => props.height.unwrap_or(text_height * 2.5),
            };

            style.size(size, size).rounded(*RadiusKind::Full.resolve(theme))
        }
        SkeletonShape::Rect => {
            let style = style
                .when_some(props.height, |this, height| this.set("height", height))
                .rounded(*RadiusKind::Md.resolve(theme));

            match props.width {
                Some(width) => width.apply(style, "width"),
                None => style.set("width", "100%"),
            }
        }
    };

    match props.animation {
        SkeletonAnimation::Shimmer => {
            let highlight = *BackgroundKind::Quinary.resolve(theme);

            style
                .set(
                    "backgroundImage",
                    format!(
                        "linear-gradient(90deg, {} 25%, {} 50%, {} 75%)",
                        base.to_css(),
                        highlight.to_css(),
                        base.to_css()
                    ),
                )
                .set("backgroundSize", "200% 100%")
                .animation(
                    animation::SHIMMER,
                    SHIMMER_DURATION,
                    CubicBezier::from([0., 0., 1., 1.]),
                )
                .set("animationIterationCount", "infinite")
        }
        SkeletonAnimation::Pulse => style
            .animation(
                animation::PULSE,
                PULSE_DURATION,
                EasingKind::Standard.curve(theme),
            )
            .set("animationIterationCount", "infinite"),
        SkeletonAnimation::None => style,
    }
}
