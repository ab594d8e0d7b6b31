use std::time::Duration;

use mosaic_motion::animation;
use mosaic_theme::Theme;

use crate::{
    style::Style,
    theme::{BackgroundKind, DurationKind, EasingKind, RadiusKind, SizeKind, resolve_color},
};

const INDETERMINATE_DURATION: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressProps {
    pub value: f32,
    pub max: f32,
    pub size: SizeKind,
    /// Color key for the indicator.
    pub color: String,
    /// Unknown progress, drawn as a pulsing partial bar.
    pub indeterminate: bool,
}

impl Default for ProgressProps {
    fn default() -> Self {
        Self {
            value: 0.,
            max: 100.,
            size: SizeKind::Md,
            color: "brand".to_string(),
            indeterminate: false,
        }
    }
}

impl ProgressProps {
    /// Completed share in `0..=1`. A non-positive or non-finite max counts
    /// as no progress.
    pub fn fraction(&self) -> f32 {
        if !self.max.is_finite() || self.max <= 0. || !self.value.is_finite() {
            return 0.;
        }

        (self.value / self.max).clamp(0., 1.)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressStyles {
    pub track: Style,
    pub indicator: Style,
}

fn track_height(size: SizeKind) -> f32 {
    match size {
        SizeKind::Xs => 2.,
        SizeKind::Sm => 4.,
        SizeKind::Md => 6.,
        SizeKind::Lg => 8.,
        SizeKind::Xl => 12.,
    }
}

pub fn build_progress_style(props: &ProgressProps, theme: &Theme) -> ProgressStyles {
    let height = track_height(props.size);
    let radius = *RadiusKind::Full.resolve(theme);

    let track = Style::new()
        .set("position", "relative")
        .set("overflow", "hidden")
        .set("width", "100%")
        .set("height", height)
        .rounded(radius)
        .bg(*BackgroundKind::Tertiary.resolve(theme));

    let indicator = Style::new()
        .set("height", "100%")
        .rounded(radius)
        .bg(resolve_color(&props.color, theme));

    let indicator = if props.indeterminate {
        indicator
            .set("width", "40%")
            .animation(
                animation::PULSE,
                INDETERMINATE_DURATION,
                EasingKind::Standard.curve(theme),
            )
            .set("animationIterationCount", "infinite")
    } else {
        let percent = props.fraction() * 100.;

        indicator
            .set("width", format!("{percent}%"))
            .transition(
                &["width"],
                *DurationKind::Normal.resolve(theme),
                EasingKind::Decelerate.curve(theme),
            )
    };

    ProgressStyles { track, indicator }
}
