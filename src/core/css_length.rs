use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{SliderError, SliderResult};

/// Parses a computed CSS pixel length such as `"12px"` or `"-3.5px"`.
///
/// A bare number is accepted; any other unit or keyword is rejected.
pub fn parse_px_length(input: &str) -> SliderResult<f64> {
    let trimmed = input.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
    if number.is_empty() {
        return Err(SliderError::InvalidLength(input.to_owned()));
    }
    match number.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(SliderError::InvalidLength(input.to_owned())),
    }
}

/// Upper bound on how many items stay loaded in the strip.
///
/// Malformed limits never fail construction; they are dropped and the full
/// item set is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoadLimit(usize);

impl LoadLimit {
    /// Returns `None` for zero, which keeps every item.
    #[must_use]
    pub fn new(limit: usize) -> Option<Self> {
        (limit > 0).then_some(Self(limit))
    }

    /// Lenient parse used for host-provided limits.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        input.trim().parse::<usize>().ok().and_then(Self::new)
    }

    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }

    /// Number of items to keep out of `available`.
    #[must_use]
    pub fn apply(limit: Option<Self>, available: usize) -> usize {
        match limit {
            Some(limit) if limit.0 < available => limit.0,
            _ => available,
        }
    }
}

/// Deserializes an optional load limit from a number or numeric string,
/// mapping anything else to `None`.
pub(crate) fn deserialize_lenient_load_limit<'de, D>(
    deserializer: D,
) -> Result<Option<LoadLimit>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let limit = match value {
        Some(Value::Number(number)) => number
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .and_then(LoadLimit::new),
        Some(Value::String(text)) => LoadLimit::parse(&text),
        _ => None,
    };
    if limit.is_none() {
        tracing::trace!("ignoring absent or malformed load limit");
    }
    Ok(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pixel_and_bare_lengths() {
        assert_eq!(parse_px_length("12px").expect("px"), 12.0);
        assert_eq!(parse_px_length(" -3.5px ").expect("negative"), -3.5);
        assert_eq!(parse_px_length("0").expect("bare"), 0.0);
    }

    #[test]
    fn rejects_non_pixel_lengths() {
        for input in ["", "px", "auto", "2em", "NaNpx", "infpx"] {
            assert!(parse_px_length(input).is_err(), "{input} should fail");
        }
    }

    #[test]
    fn load_limit_ignores_zero_and_garbage() {
        assert_eq!(LoadLimit::new(0), None);
        assert_eq!(LoadLimit::parse("six"), None);
        assert_eq!(LoadLimit::parse("-2"), None);
        assert_eq!(LoadLimit::parse(" 6 ").map(LoadLimit::get), Some(6));
    }

    #[test]
    fn load_limit_only_trims_when_smaller() {
        assert_eq!(LoadLimit::apply(LoadLimit::new(6), 10), 6);
        assert_eq!(LoadLimit::apply(LoadLimit::new(12), 10), 10);
        assert_eq!(LoadLimit::apply(None, 10), 10);
    }
}
