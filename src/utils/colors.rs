use mosaic_motion::TransitionGoal;
use mosaic_theme::{Rgba, Theme};

/// Above this luminance a fill reads as "light" and needs dark foreground.
pub const LIGHT_FILL_LUMINANCE: f32 = 0.4;

const HOVER_STRENGTH: f32 = 0.25;
const FOCUS_STRENGTH: f32 = 0.35;

/// Extension trait for deriving state colors from a base color.
pub trait RgbaExt {
    /// Blends toward `other` by `amount` (`0..=1`).
    fn mix(&self, other: &Rgba, amount: f32) -> Rgba;

    /// The hovered shade of a fill drawn on `background`.
    fn hovered(&self, background: &Rgba) -> Rgba;

    /// The focused/pressed shade of a fill drawn on `background`.
    fn focused(&self, background: &Rgba) -> Rgba;

    /// Text color that stays readable on top of this fill.
    fn readable_foreground(&self, theme: &Theme) -> Rgba;
}

impl RgbaExt for Rgba {
    fn mix(&self, other: &Rgba, amount: f32) -> Rgba {
        self.apply_delta(other, amount.clamp(0., 1.))
    }

    fn hovered(&self, background: &Rgba) -> Rgba {
        self.mix(background, HOVER_STRENGTH).alpha(self.a)
    }

    fn focused(&self, background: &Rgba) -> Rgba {
        self.mix(background, FOCUS_STRENGTH).alpha(self.a)
    }

    fn readable_foreground(&self, theme: &Theme) -> Rgba {
        if self.relative_luminance() > LIGHT_FILL_LUMINANCE {
            theme.colors().text.dark
        } else {
            theme.colors().text.inverse
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_theme::rgb;

    #[test]
    fn test_readable_foreground() {
        let theme = Theme::default_theme().clone();
        let colors = theme.colors();

        assert_eq!(rgb(0xfacc15).readable_foreground(&theme), colors.text.dark);
        assert_eq!(rgb(0x1e3a8a).readable_foreground(&theme), colors.text.inverse);
    }

    #[test]
    fn test_state_shades_keep_alpha() {
        let base = rgb(0x4f46e5).alpha(0.1);
        let background = rgb(0xffffff);

        assert_eq!(base.hovered(&background).a, 0.1);
        assert_ne!(base.hovered(&background), base);
        assert_ne!(base.focused(&background), base.hovered(&background));
    }
}
