use std::time::Duration;

use mosaic_motion::{CubicBezier, animation};
use mosaic_theme::{Rgba, Theme};

use crate::{
    style::Style,
    theme::{RadiusKind, SizeKind, ThicknessKind, resolve_color},
};

const SPIN_DURATION: Duration = Duration::from_millis(700);

#[derive(Debug, Clone, PartialEq)]
pub struct SpinnerProps {
    pub size: SizeKind,
    /// Semantic color name or raw color.
    pub color: String,
    pub thickness: ThicknessKind,
}

impl Default for SpinnerProps {
    fn default() -> Self {
        Self {
            size: SizeKind::Md,
            color: "brand".to_string(),
            thickness: ThicknessKind::Medium,
        }
    }
}

pub fn build_spinner_style(props: &SpinnerProps, theme: &Theme) -> Style {
    spinner_style(
        props.size.icon_size(),
        resolve_color(&props.color, theme),
        *props.thickness.resolve(theme),
        theme,
    )
}

pub(crate) fn spinner_style(size: f32, color: Rgba, thickness: f32, theme: &Theme) -> Style {
    Style::new()
        .size(size, size)
        .rounded(*RadiusKind::Full.resolve(theme))
        .border(thickness, color.alpha(color.a * 0.25))
        .set("borderTopColor", color)
        .animation(
            animation::SPIN,
            SPIN_DURATION,
            CubicBezier::from([0., 0., 1., 1.]),
        )
        .set("animationIterationCount", "infinite")
}
