use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

use crate::ThemeError;

/// An sRGB color with straight alpha. Every channel is in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

pub const TRANSPARENT: Rgba = Rgba {
    r: 0.,
    g: 0.,
    b: 0.,
    a: 0.,
};

/// Creates an RGBA color from a hex value and alpha component.
pub fn rgb_a(hex: u32, a: f32) -> Rgba {
    let [_, r, g, b] = hex.to_be_bytes().map(|b| (b as f32) / 255.0);
    Rgba { r, g, b, a }
}

/// Creates an opaque color from a `0xRRGGBB` value.
pub fn rgb(hex: u32) -> Rgba {
    rgb_a(hex, 1.)
}

impl Rgba {
    /// Returns a new color with the specified alpha value.
    pub fn alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0., 1.);
        self
    }

    /// Relative luminance as defined by WCAG 2.x.
    pub fn relative_luminance(&self) -> f32 {
        fn linearize(channel: f32) -> f32 {
            if channel <= 0.04045 {
                channel / 12.92
            } else {
                ((channel + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }

    /// WCAG contrast ratio between two colors, in `1.0..=21.0`.
    pub fn contrast_ratio(&self, other: &Rgba) -> f32 {
        let (a, b) = (self.relative_luminance(), other.relative_luminance());
        let (light, dark) = if a > b { (a, b) } else { (b, a) };
        (light + 0.05) / (dark + 0.05)
    }

    pub fn is_transparent(&self) -> bool {
        self.a <= 0.
    }

    fn channels_u8(&self) -> [u8; 3] {
        [self.r, self.g, self.b].map(|c| (c.clamp(0., 1.) * 255.).round() as u8)
    }

    /// Renders the color the way stylesheets and native style objects expect it.
    pub fn to_css(&self) -> String {
        let [r, g, b] = self.channels_u8();

        if self.a >= 1. {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else if self.is_transparent() && r == 0 && g == 0 && b == 0 {
            "transparent".to_string()
        } else {
            let a = (self.a.clamp(0., 1.) * 1000.).round() / 1000.;
            format!("rgba({r}, {g}, {b}, {a})")
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Rgba {
    type Err = ThemeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let invalid = || ThemeError::InvalidColor(value.to_string());

        if trimmed.eq_ignore_ascii_case("transparent") {
            return Ok(TRANSPARENT);
        }

        if let Some(hex) = trimmed.strip_prefix('#') {
            let expanded: String = match hex.len() {
                3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
                6 | 8 => hex.to_string(),
                _ => return Err(invalid()),
            };
            let value = u32::from_str_radix(&expanded, 16).map_err(|_| invalid())?;

            return Ok(if expanded.len() == 8 {
                rgb_a(value >> 8, (value & 0xff) as f32 / 255.)
            } else {
                rgb(value)
            });
        }

        let args = trimmed
            .strip_prefix("rgba(")
            .or_else(|| trimmed.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;

        let parts = args
            .split(',')
            .map(|part| part.trim().parse::<f32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid())?;

        match parts.as_slice() {
            [r, g, b] => Ok(Rgba {
                r: r / 255.,
                g: g / 255.,
                b: b / 255.,
                a: 1.,
            }),
            [r, g, b, a] => Ok(Rgba {
                r: r / 255.,
                g: g / 255.,
                b: b / 255.,
                a: a.clamp(0., 1.),
            }),
            _ => Err(invalid()),
        }
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let string = String::deserialize(deserializer)?;
        string.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!("#fff".parse::<Rgba>().unwrap(), rgb(0xffffff));
        assert_eq!("#1e3a5f".parse::<Rgba>().unwrap(), rgb(0x1e3a5f));

        let translucent = "#00000080".parse::<Rgba>().unwrap();
        assert!((translucent.a - 128. / 255.).abs() < 1e-6);
    }

    #[test]
    fn test_parse_functional_forms() {
        let color = "rgba(255, 0, 0, 0.5)".parse::<Rgba>().unwrap();
        assert_eq!(color.r, 1.);
        assert_eq!(color.a, 0.5);

        let color = "rgb(0, 255, 0)".parse::<Rgba>().unwrap();
        assert_eq!(color.g, 1.);
        assert_eq!(color.a, 1.);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("#12".parse::<Rgba>().is_err());
        assert!("blue".parse::<Rgba>().is_err());
        assert!("rgb(1, 2)".parse::<Rgba>().is_err());
    }

    #[test]
    fn test_to_css() {
        assert_eq!(rgb(0x0a0b0c).to_css(), "#0a0b0c");
        assert_eq!(rgb(0xff0000).alpha(0.25).to_css(), "rgba(255, 0, 0, 0.25)");
        assert_eq!(TRANSPARENT.to_css(), "transparent");
    }

    #[test]
    fn test_luminance_extremes() {
        assert!(rgb(0x000000).relative_luminance() < 1e-6);
        assert!((rgb(0xffffff).relative_luminance() - 1.).abs() < 1e-4);
        assert!((rgb(0xffffff).contrast_ratio(&rgb(0x000000)) - 21.).abs() < 0.01);
    }
}
