//! Percentage-space field coordinates.

use crate::error::{Result, TaggerError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const FIELD_MIN: f64 = 0.0;
pub const FIELD_MAX: f64 = 100.0;

/// A point on the pitch as a percentage of its width (`x`) and height (`y`).
///
/// Origin is the top-left corner, `(100, 100)` the bottom-right one.
/// Construction does not enforce the bounds; use [`FieldCoordinates::clamped`]
/// for input coming from the field surface and
/// [`FieldCoordinates::is_within_bounds`] when validating stored data.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldCoordinates {
    pub x: f64,
    pub y: f64,
}

impl FieldCoordinates {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_within_bounds(&self) -> bool {
        (FIELD_MIN..=FIELD_MAX).contains(&self.x) && (FIELD_MIN..=FIELD_MAX).contains(&self.y)
    }

    /// Copy with both components clamped into `[0, 100]`. NaN maps to 0.
    pub fn clamped(&self) -> Self {
        Self {
            x: clamp_component(self.x),
            y: clamp_component(self.y),
        }
    }

    /// Reflect across the halfway line (`x -> 100 - x`).
    pub fn mirrored(&self) -> Self {
        Self {
            x: FIELD_MAX - self.x,
            y: self.y,
        }
    }
}

fn clamp_component(value: f64) -> f64 {
    if value.is_nan() {
        FIELD_MIN
    } else {
        value.clamp(FIELD_MIN, FIELD_MAX)
    }
}

impl fmt::Display for FieldCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for FieldCoordinates {
    type Err = TaggerError;

    /// Parse `x,y` (whitespace allowed around each number).
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || TaggerError::InvalidCoordinates {
            input: s.to_string(),
        };
        let (x, y) = s.split_once(',').ok_or_else(invalid)?;
        let x: f64 = x.trim().parse().map_err(|_| invalid())?;
        let y: f64 = y.trim().parse().map_err(|_| invalid())?;
        if !x.is_finite() || !y.is_finite() {
            return Err(invalid());
        }
        Ok(Self { x, y })
    }
}
