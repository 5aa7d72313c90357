//! Interval boundary flavors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RandomError;

/// Which endpoints of an interval a sampler may produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bounds {
    /// `(min, max)`: both endpoints excluded.
    Open,
    /// `[min, max)`: min included, max excluded.
    #[default]
    HalfOpen,
    /// `(min, max]`: min excluded, max included.
    HalfClosed,
    /// `[min, max]`: both endpoints included.
    Closed,
}

impl Bounds {
    /// All four flavors, in declaration order.
    pub const ALL: [Self; 4] = [Self::Open, Self::HalfOpen, Self::HalfClosed, Self::Closed];

    /// Returns `true` if the lower endpoint can be produced.
    #[must_use]
    pub fn includes_min(self) -> bool {
        matches!(self, Self::HalfOpen | Self::Closed)
    }

    /// Returns `true` if the upper endpoint can be produced.
    #[must_use]
    pub fn includes_max(self) -> bool {
        matches!(self, Self::HalfClosed | Self::Closed)
    }

    /// Returns `true` if `value` lies within `min..max` under this flavor.
    #[must_use]
    pub fn contains<T: PartialOrd>(self, value: T, min: T, max: T) -> bool {
        let above_min = if self.includes_min() {
            value >= min
        } else {
            value > min
        };
        let below_max = if self.includes_max() {
            value <= max
        } else {
            value < max
        };
        above_min && below_max
    }

    /// Snake-case name, matching the serde representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::HalfOpen => "half_open",
            Self::HalfClosed => "half_closed",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Bounds {
    type Err = RandomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "open" | "()" => Ok(Self::Open),
            "half_open" | "[)" => Ok(Self::HalfOpen),
            "half_closed" | "(]" => Ok(Self::HalfClosed),
            "closed" | "[]" => Ok(Self::Closed),
            other => Err(RandomError::invalid(format!(
                "unknown boundary flavor: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_respects_each_flavor() {
        assert!(!Bounds::Open.contains(0, 0, 10));
        assert!(!Bounds::Open.contains(10, 0, 10));
        assert!(Bounds::HalfOpen.contains(0, 0, 10));
        assert!(!Bounds::HalfOpen.contains(10, 0, 10));
        assert!(!Bounds::HalfClosed.contains(0, 0, 10));
        assert!(Bounds::HalfClosed.contains(10, 0, 10));
        assert!(Bounds::Closed.contains(0, 0, 10));
        assert!(Bounds::Closed.contains(10, 0, 10));
        assert!(!Bounds::Closed.contains(11, 0, 10));
    }

    #[test]
    fn test_from_str_accepts_names_and_bracket_forms() {
        assert_eq!("open".parse::<Bounds>().unwrap(), Bounds::Open);
        assert_eq!("Half-Open".parse::<Bounds>().unwrap(), Bounds::HalfOpen);
        assert_eq!("(]".parse::<Bounds>().unwrap(), Bounds::HalfClosed);
        assert_eq!(" closed ".parse::<Bounds>().unwrap(), Bounds::Closed);
    }

    #[test]
    fn test_from_str_rejects_unknown_flavor() {
        let result = "sideways".parse::<Bounds>();

        match result.unwrap_err() {
            RandomError::InvalidArgument(msg) => {
                assert_eq!(msg, "unknown boundary flavor: sideways");
            }
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn test_serde_uses_snake_case_names() {
        let json = serde_json::to_string(&Bounds::HalfClosed).unwrap();
        assert_eq!(json, "\"half_closed\"");

        let parsed: Bounds = serde_json::from_str("\"half_open\"").unwrap();
        assert_eq!(parsed, Bounds::HalfOpen);
    }

    #[test]
    fn test_default_is_half_open() {
        assert_eq!(Bounds::default(), Bounds::HalfOpen);
    }
}
