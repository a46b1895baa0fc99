//! Guild level - positive integer rank

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Message used when a supplied level cannot be accepted
pub const LEVEL_INVALID_MESSAGE: &str = "If provided, level must be a positive number.";

/// Guild level, always >= 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level(i64);

impl Level {
    /// Level assigned when none (or an unusable one) is supplied at creation
    pub const DEFAULT: Level = Level(1);

    /// Create a level, returning `None` when `value < 1`
    pub const fn new(value: i64) -> Option<Self> {
        if value >= 1 {
            Some(Self(value))
        } else {
            None
        }
    }

    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Resolve loosely-typed JSON input into a level
    ///
    /// Numbers are truncated toward zero. A string must read as a finite
    /// number as a whole, and its value is then the leading integer, so
    /// `"2.75"` and `"1e3"` both stop at the first non-digit. Anything that
    /// does not end up as an integer >= 1 yields `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::new(i),
                None => Self::from_f64(n.as_f64()?),
            },
            Value::String(s) => {
                let s = s.trim();
                if !s.parse::<f64>().ok()?.is_finite() {
                    return None;
                }
                Self::new(leading_integer(s)?)
            }
            _ => None,
        }
    }

    fn from_f64(number: f64) -> Option<Self> {
        if !number.is_finite() {
            return None;
        }
        let truncated = number.trunc();
        if truncated < 1.0 || truncated >= i64::MAX as f64 {
            return None;
        }
        Self::new(truncated as i64)
    }
}

/// Optional sign followed by base-10 digits, read up to the first other character
fn leading_integer(s: &str) -> Option<i64> {
    let (negative, rest) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value: i64 = rest[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

impl Default for Level {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Level> for i64 {
    fn from(level: Level) -> Self {
        level.0
    }
}
