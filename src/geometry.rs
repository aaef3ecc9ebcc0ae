//! Field geometry: distances and directions between percentage coordinates.
//!
//! Coordinates are percentages of the pitch. Distances are scaled to a
//! standard 105 m x 68 m field; directions use the percentage vector as is.

use crate::model::FieldCoordinates;

#[cfg(test)]
mod tests;

/// Pitch length in meters (x axis).
pub const FIELD_LENGTH_M: f64 = 105.0;
/// Pitch width in meters (y axis).
pub const FIELD_WIDTH_M: f64 = 68.0;
/// Default proximity threshold, in percentage points.
pub const CLOSE_THRESHOLD: f64 = 2.0;

const SHORT_PASS_MAX_M: f64 = 15.0;
const LONG_PASS_MAX_M: f64 = 30.0;

/// Pass length classes used by [`pass_type_for_distance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassLength {
    Short,
    Long,
    ThroughBall,
}

impl PassLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            PassLength::Short => "short",
            PassLength::Long => "long",
            PassLength::ThroughBall => "through_ball",
        }
    }
}

fn meters_delta(from: &FieldCoordinates, to: &FieldCoordinates) -> (f64, f64) {
    let dx = (to.x - from.x) / 100.0 * FIELD_LENGTH_M;
    let dy = (to.y - from.y) / 100.0 * FIELD_WIDTH_M;
    (dx, dy)
}

/// Euclidean distance in meters, rounded to one decimal.
///
/// # Examples
///
/// ```rust
/// use match_tagger::geometry::calculate_distance;
/// use match_tagger::FieldCoordinates;
///
/// let d = calculate_distance(&FieldCoordinates::new(0.0, 0.0), &FieldCoordinates::new(100.0, 0.0));
/// assert_eq!(d, 105.0);
/// ```
pub fn calculate_distance(from: &FieldCoordinates, to: &FieldCoordinates) -> f64 {
    let (dx, dy) = meters_delta(from, to);
    ((dx * dx + dy * dy).sqrt() * 10.0).round() / 10.0
}

/// Bearing in whole degrees, `[0, 360)`.
///
/// 0 points toward increasing `x`, 90 toward increasing `y` (down the
/// screen). Identical points give 0. The angle is taken on the unscaled
/// percentage vector, so `(0,0) -> (10,10)` is 45.
pub fn calculate_direction(from: &FieldCoordinates, to: &FieldCoordinates) -> f64 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }
    let degrees = dy.atan2(dx).to_degrees();
    let normalized = (degrees + 360.0) % 360.0;
    // 359.6 rounds up to 360, which is the same bearing as 0
    normalized.round() % 360.0
}

pub fn pass_type_for_distance(meters: f64) -> PassLength {
    if meters < SHORT_PASS_MAX_M {
        PassLength::Short
    } else if meters < LONG_PASS_MAX_M {
        PassLength::Long
    } else {
        PassLength::ThroughBall
    }
}

/// Eight-point compass label for a bearing from [`calculate_direction`].
pub fn compass_direction(degrees: f64) -> &'static str {
    const LABELS: [&str; 8] = ["E", "SE", "S", "SW", "W", "NW", "N", "NE"];
    let normalized = degrees.rem_euclid(360.0);
    let index = (normalized / 45.0).round() as usize % 8;
    LABELS[index]
}

pub fn format_distance(meters: f64) -> String {
    format!("{:.1}m", meters)
}

/// Whether both axes differ by less than `threshold` percentage points.
pub fn are_coordinates_close(a: &FieldCoordinates, b: &FieldCoordinates, threshold: f64) -> bool {
    (a.x - b.x).abs() < threshold && (a.y - b.y).abs() < threshold
}
