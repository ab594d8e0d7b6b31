use std::time::Duration;

use serde::{Deserialize, Deserializer, Serializer, de::Error};
use smallvec::SmallVec;

use crate::{ThemeError, ThemeVariant};

pub fn de_string_or_non_empty_list<'de, D>(
    deserializer: D,
) -> Result<SmallVec<[String; 1]>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrVec {
        One(String),
        Many(SmallVec<[String; 1]>),
    }

    let value = StringOrVec::deserialize(deserializer)?;

    match value {
        StringOrVec::One(string) => Ok(SmallVec::from_buf([string])),
        StringOrVec::Many(vec) => {
            if vec.is_empty() {
                return Err(D::Error::custom("font family list can't be empty."));
            }

            Ok(vec)
        }
    }
}

pub fn de_variants<'de, D>(deserializer: D) -> Result<SmallVec<[ThemeVariant; 2]>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = SmallVec::<[ThemeVariant; 2]>::deserialize(deserializer)?;

    if value.is_empty() {
        return Err(D::Error::custom(
            "at least one theme variant needs to be provided.",
        ));
    }

    Ok(value)
}

/// Parses `12`, `12.5` or `"12px"` into a pixel count.
pub fn parse_pixels(string: &str) -> Result<f32, ThemeError> {
    let trimmed = string.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed);

    number
        .trim()
        .parse::<f32>()
        .map_err(|_| ThemeError::InvalidLength(string.to_string()))
}

pub fn de_pixels<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::String(string) => {
            if !string.trim().ends_with("px") {
                return Err(D::Error::custom("expected string to end with 'px'"));
            }

            parse_pixels(&string).map_err(D::Error::custom)
        }

        StringOrFloat::Float(pixels) => Ok(pixels),
    }
}

/// Parses `"150ms"`, `"0.2s"` or a bare millisecond count.
pub fn parse_duration(string: &str) -> Result<Duration, ThemeError> {
    let trimmed = string.trim();
    let invalid = || ThemeError::InvalidDuration(string.to_string());

    let millis = if let Some(ms) = trimmed.strip_suffix("ms") {
        ms.trim().parse::<f32>().map_err(|_| invalid())?
    } else if let Some(secs) = trimmed.strip_suffix('s') {
        secs.trim().parse::<f32>().map_err(|_| invalid())? * 1000.
    } else {
        trimmed.parse::<f32>().map_err(|_| invalid())?
    };

    if millis < 0. || !millis.is_finite() {
        return Err(invalid());
    }

    Ok(Duration::from_micros((millis * 1000.).round() as u64))
}

pub fn de_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::String(string) => parse_duration(&string).map_err(D::Error::custom),
        StringOrFloat::Float(millis) if millis >= 0. => {
            Ok(Duration::from_micros((millis * 1000.).round() as u64))
        }
        StringOrFloat::Float(millis) => Err(D::Error::custom(format!(
            "duration can't be negative, got {millis}"
        ))),
    }
}

pub fn ser_duration<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{}ms", duration.as_millis()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pixels() {
        assert_eq!(parse_pixels("12px").unwrap(), 12.);
        assert_eq!(parse_pixels(" 4.5 ").unwrap(), 4.5);
        assert!(parse_pixels("12rem").is_err());
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("150ms").unwrap(), Duration::from_millis(150));
        assert_eq!(parse_duration("0.2s").unwrap(), Duration::from_millis(200));
        assert_eq!(parse_duration("75").unwrap(), Duration::from_millis(75));
        assert!(parse_duration("-5ms").is_err());
        assert!(parse_duration("soon").is_err());
    }
}
