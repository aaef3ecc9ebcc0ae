//! Video time types: timestamps in seconds and match minutes.

use crate::error::{Result, TaggerError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position in the match video, in seconds.
///
/// Parses either plain seconds (`754.5`) or `mm:ss` (`12:34`). Video zero is
/// assumed to be kick-off, so the match minute is `floor(seconds / 60)`.
///
/// # Examples
///
/// ```rust
/// use match_tagger::VideoTime;
///
/// let t: VideoTime = "12:34".parse().unwrap();
/// assert_eq!(t.as_secs(), 754.0);
/// assert_eq!(t.minute(), 12);
/// assert_eq!(t.to_string(), "12:34");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoTime(pub f64);

impl VideoTime {
    pub fn new(seconds: f64) -> Self {
        Self(seconds)
    }

    pub fn as_secs(&self) -> f64 {
        self.0
    }

    /// Match minute for this timestamp.
    pub fn minute(&self) -> u32 {
        match_minute(self.0)
    }
}

/// `floor(timestamp / 60)`, saturating at zero for negative timestamps.
pub fn match_minute(timestamp: f64) -> u32 {
    if timestamp.is_finite() && timestamp > 0.0 {
        (timestamp / 60.0).floor() as u32
    } else {
        0
    }
}

impl fmt::Display for VideoTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0.max(0.0);
        let mins = (total / 60.0).floor() as u64;
        let secs = (total % 60.0).floor() as u64;
        write!(f, "{:02}:{:02}", mins, secs)
    }
}

impl FromStr for VideoTime {
    type Err = TaggerError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || TaggerError::InvalidTimestamp {
            input: s.to_string(),
        };
        let trimmed = s.trim();

        let seconds = match trimmed.split_once(':') {
            Some((mins, secs)) => {
                let mins: u32 = mins.trim().parse().map_err(|_| invalid())?;
                let secs: f64 = secs.trim().parse().map_err(|_| invalid())?;
                if !(0.0..60.0).contains(&secs) {
                    return Err(invalid());
                }
                mins as f64 * 60.0 + secs
            }
            None => trimmed.parse::<f64>().map_err(|_| invalid())?,
        };

        if !seconds.is_finite() || seconds < 0.0 {
            return Err(invalid());
        }
        Ok(Self(seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_seconds() {
        let t: VideoTime = "754.5".parse().unwrap();
        assert_eq!(t.as_secs(), 754.5);
    }

    #[test]
    fn test_parse_minutes_seconds() {
        let t: VideoTime = "90:00".parse().unwrap();
        assert_eq!(t.as_secs(), 5400.0);
        assert_eq!(t.minute(), 90);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("abc".parse::<VideoTime>().is_err());
        assert!("12:75".parse::<VideoTime>().is_err());
        assert!("-3".parse::<VideoTime>().is_err());
        assert!("1:2:3".parse::<VideoTime>().is_err());
    }

    #[test]
    fn test_match_minute_floor() {
        assert_eq!(match_minute(0.0), 0);
        assert_eq!(match_minute(59.9), 0);
        assert_eq!(match_minute(60.0), 1);
        assert_eq!(match_minute(2735.0), 45);
        assert_eq!(match_minute(-10.0), 0);
    }

    #[test]
    fn test_display_pads() {
        assert_eq!(VideoTime::new(65.7).to_string(), "01:05");
        assert_eq!(VideoTime::new(0.0).to_string(), "00:00");
    }
}
