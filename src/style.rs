//! The style object contract handed to the rendering layer.
//!
//! Builders produce a [`Style`], an ordered map of camelCase property names to
//! values. [`Style::finish`] flattens it into a [`StyleObject`] of primitives
//! for a given [`Platform`].

use std::time::Duration;

use indexmap::IndexMap;
use mosaic_motion::CubicBezier;
use mosaic_theme::{Rgba, Shadow};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Web,
    Native,
}

impl Default for Platform {
    fn default() -> Self {
        cfg_if::cfg_if! {
            if #[cfg(target_arch = "wasm32")] {
                Platform::Web
            } else {
                Platform::Native
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Number(f32),
    Text(String),
    Color(Rgba),
    Shadow(Shadow),
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        StyleValue::Number(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value as f32)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Number(value as f32)
    }
}

impl From<u16> for StyleValue {
    fn from(value: u16) -> Self {
        StyleValue::Number(value as f32)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

impl From<Rgba> for StyleValue {
    fn from(value: Rgba) -> Self {
        StyleValue::Color(value)
    }
}

impl From<Shadow> for StyleValue {
    fn from(value: Shadow) -> Self {
        StyleValue::Shadow(value)
    }
}

/// Properties the native renderer has no equivalent for.
const WEB_ONLY: &[&str] = &[
    "cursor",
    "transition",
    "outlineStyle",
    "outlineWidth",
    "outlineColor",
    "outlineOffset",
    "backdropFilter",
    "userSelect",
    "boxSizing",
    "animationName",
    "animationDuration",
    "animationTimingFunction",
    "animationIterationCount",
    "animationFillMode",
    "backgroundImage",
    "backgroundSize",
    "whiteSpace",
    "textOverflow",
    "pointerEvents",
];

/// Numeric properties that carry no unit in CSS.
const UNITLESS: &[&str] = &[
    "opacity",
    "zIndex",
    "fontWeight",
    "flex",
    "flexGrow",
    "flexShrink",
    "order",
    "lineClamp",
    "WebkitLineClamp",
];

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    properties: IndexMap<&'static str, StyleValue>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, property: &'static str, value: impl Into<StyleValue>) -> Self {
        self.properties.insert(property, value.into());
        self
    }

    pub fn insert(&mut self, property: &'static str, value: impl Into<StyleValue>) {
        self.properties.insert(property, value.into());
    }

    pub fn remove(&mut self, property: &str) -> Option<StyleValue> {
        self.properties.shift_remove(property)
    }

    pub fn when(self, condition: bool, then: impl FnOnce(Self) -> Self) -> Self {
        if condition { then(self) } else { self }
    }

    pub fn when_some<T>(self, option: Option<T>, then: impl FnOnce(Self, T) -> Self) -> Self {
        match option {
            Some(value) => then(self, value),
            None => self,
        }
    }

    /// Properties in `other` override properties in `self`.
    pub fn merge(mut self, other: Style) -> Self {
        self.properties.extend(other.properties);
        self
    }

    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.properties.get(property)
    }

    pub fn number(&self, property: &str) -> Option<f32> {
        match self.get(property)? {
            StyleValue::Number(number) => Some(*number),
            _ => None,
        }
    }

    pub fn color(&self, property: &str) -> Option<Rgba> {
        match self.get(property)? {
            StyleValue::Color(color) => Some(*color),
            _ => None,
        }
    }

    pub fn text(&self, property: &str) -> Option<&str> {
        match self.get(property)? {
            StyleValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn contains(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &StyleValue)> {
        self.properties.iter().map(|(key, value)| (*key, value))
    }

    pub fn bg(self, color: Rgba) -> Self {
        self.set("backgroundColor", color)
    }

    pub fn text_color(self, color: Rgba) -> Self {
        self.set("color", color)
    }

    pub fn rounded(self, radius: f32) -> Self {
        self.set("borderRadius", radius)
    }

    pub fn border(self, width: f32, color: Rgba) -> Self {
        self.set("borderWidth", width)
            .set("borderStyle", "solid")
            .set("borderColor", color)
    }

    pub fn padding(self, top: f32, right: f32, bottom: f32, left: f32) -> Self {
        self.set("paddingTop", top)
            .set("paddingRight", right)
            .set("paddingBottom", bottom)
            .set("paddingLeft", left)
    }

    pub fn padding_xy(self, x: f32, y: f32) -> Self {
        self.padding(y, x, y, x)
    }

    pub fn size(self, width: f32, height: f32) -> Self {
        self.set("width", width).set("height", height)
    }

    pub fn flex_center(self) -> Self {
        self.set("display", "flex")
            .set("alignItems", "center")
            .set("justifyContent", "center")
    }

    pub fn shadow(self, shadow: Shadow) -> Self {
        self.set("boxShadow", shadow)
    }

    pub fn font(self, family: String, size: f32, weight: u16, line_height: f32) -> Self {
        self.set("fontFamily", family)
            .set("fontSize", size)
            .set("fontWeight", weight)
            .set("lineHeight", (size * line_height).round())
    }

    pub fn transition(self, properties: &[&str], duration: Duration, easing: CubicBezier) -> Self {
        let timing = format!("{}ms {}", duration.as_millis(), easing.to_css());
        let value = properties
            .iter()
            .map(|property| format!("{} {timing}", to_kebab_case(property)))
            .collect::<Vec<_>>()
            .join(", ");

        self.set("transition", value)
    }

    pub fn focus_ring(self, color: Rgba, width: f32) -> Self {
        self.set("outlineStyle", "solid")
            .set("outlineWidth", width)
            .set("outlineColor", color)
            .set("outlineOffset", 2.)
    }

    pub fn animation(self, name: &str, duration: Duration, easing: CubicBezier) -> Self {
        self.set("animationName", name)
            .set("animationDuration", format!("{}ms", duration.as_millis()))
            .set("animationTimingFunction", easing.to_css())
            .set("animationFillMode", "both")
    }

    /// Flattens the style into primitives the renderer for `platform`
    /// understands.
    pub fn finish(&self, platform: Platform) -> StyleObject {
        let mut object = IndexMap::with_capacity(self.properties.len());

        for (property, value) in &self.properties {
            if platform == Platform::Native && WEB_ONLY.contains(property) {
                continue;
            }

            match (value, platform) {
                (StyleValue::Number(number), _) => {
                    object.insert(property.to_string(), Primitive::Number(*number));
                }
                (StyleValue::Text(text), _) => {
                    object.insert(property.to_string(), Primitive::Text(text.clone()));
                }
                (StyleValue::Color(color), _) => {
                    object.insert(property.to_string(), Primitive::Text(color.to_css()));
                }
                (StyleValue::Shadow(shadow), Platform::Web) => {
                    object.insert(property.to_string(), Primitive::Text(shadow.to_css()));
                }
                (StyleValue::Shadow(shadow), Platform::Native) => {
                    let color = shadow.color.alpha(1.);
                    object.insert("shadowColor".into(), Primitive::Text(color.to_css()));
                    object.insert("shadowOpacity".into(), Primitive::Number(shadow.color.a));
                    object.insert("shadowRadius".into(), Primitive::Number(shadow.blur / 2.));
                    object.insert("shadowOffsetX".into(), Primitive::Number(shadow.x));
                    object.insert("shadowOffsetY".into(), Primitive::Number(shadow.y));
                    object.insert(
                        "elevation".into(),
                        Primitive::Number((shadow.blur / 2.).round()),
                    );
                }
            }
        }

        StyleObject(object)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Primitive {
    Number(f32),
    Text(String),
}

/// A flat property map of numbers and strings.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct StyleObject(pub IndexMap<String, Primitive>);

impl StyleObject {
    pub fn get(&self, property: &str) -> Option<&Primitive> {
        self.0.get(property)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Renders kebab-case CSS declarations, adding `px` to lengths.
    pub fn to_css(&self) -> String {
        self.0
            .iter()
            .map(|(property, value)| {
                let value = match value {
                    Primitive::Number(number) if UNITLESS.contains(&property.as_str()) => {
                        format!("{number}")
                    }
                    Primitive::Number(number) if *number == 0. => "0".to_string(),
                    Primitive::Number(number) => format!("{number}px"),
                    Primitive::Text(text) => text.clone(),
                };

                format!("{}: {value};", to_kebab_case(property))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub fn to_kebab_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);

    for c in property.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_theme::rgb;

    fn shadow() -> Shadow {
        Shadow {
            x: 0.,
            y: 4.,
            blur: 12.,
            spread: -2.,
            color: rgb(0x000000).alpha(0.25),
        }
    }

    #[test]
    fn test_merge_right_wins() {
        let base = Style::new().set("color", "red").set("width", 10.);
        let merged = base.merge(Style::new().set("color", "blue"));

        assert_eq!(merged.text("color"), Some("blue"));
        assert_eq!(merged.number("width"), Some(10.));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_when() {
        let style = Style::new()
            .when(true, |s| s.set("opacity", 0.5))
            .when(false, |s| s.set("cursor", "pointer"))
            .when_some(Some(4.), |s, r| s.rounded(r));

        assert_eq!(style.number("opacity"), Some(0.5));
        assert!(!style.contains("cursor"));
        assert_eq!(style.number("borderRadius"), Some(4.));
    }

    #[test]
    fn test_finish_web() {
        let object = Style::new()
            .bg(rgb(0xff0000))
            .shadow(shadow())
            .set("cursor", "pointer")
            .finish(Platform::Web);

        assert_eq!(
            object.get("backgroundColor"),
            Some(&Primitive::Text("#ff0000".into()))
        );
        assert_eq!(
            object.get("boxShadow"),
            Some(&Primitive::Text("0px 4px 12px -2px rgba(0, 0, 0, 0.25)".into()))
        );
        assert!(object.get("cursor").is_some());
    }

    #[test]
    fn test_finish_native_expands_shadow_and_drops_web_only() {
        let object = Style::new()
            .shadow(shadow())
            .set("cursor", "pointer")
            .set("backdropFilter", "blur(8px)")
            .finish(Platform::Native);

        assert!(object.get("cursor").is_none());
        assert!(object.get("backdropFilter").is_none());
        assert!(object.get("boxShadow").is_none());
        assert_eq!(
            object.get("shadowColor"),
            Some(&Primitive::Text("#000000".into()))
        );
        assert_eq!(object.get("shadowOpacity"), Some(&Primitive::Number(0.25)));
        assert_eq!(object.get("shadowRadius"), Some(&Primitive::Number(6.)));
        assert_eq!(object.get("elevation"), Some(&Primitive::Number(6.)));
    }

    #[test]
    fn test_to_css_units() {
        let css = Style::new()
            .set("paddingTop", 8.)
            .set("opacity", 0.5)
            .set("marginLeft", 0.)
            .set("display", "flex")
            .finish(Platform::Web)
            .to_css();

        assert_eq!(
            css,
            "padding-top: 8px; opacity: 0.5; margin-left: 0; display: flex;"
        );
    }

    #[test]
    fn test_to_json_preserves_order() {
        let json = Style::new()
            .set("width", 10.)
            .set("color", "red")
            .finish(Platform::Web)
            .to_json()
            .unwrap();

        assert_eq!(json, r#"{"width":10.0,"color":"red"}"#);
    }

    #[test]
    fn test_transition() {
        let style = Style::new().transition(
            &["backgroundColor", "opacity"],
            Duration::from_millis(200),
            CubicBezier::from([0., 0., 1., 1.]),
        );

        assert_eq!(
            style.text("transition"),
            Some(
                "background-color 200ms cubic-bezier(0, 0, 1, 1), opacity 200ms cubic-bezier(0, 0, 1, 1)"
            )
        );
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(to_kebab_case("borderTopLeftRadius"), "border-top-left-radius");
        assert_eq!(to_kebab_case("WebkitLineClamp"), "-webkit-line-clamp");
    }
}
