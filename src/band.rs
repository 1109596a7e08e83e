#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::constants::{EXCELLENT_THRESHOLD, GOOD_THRESHOLD};

/// Where a CGPA falls, for picking the message shown with it.
///
/// | Range            | Band             |
/// |------------------|------------------|
/// | < 7.5            | NeedsImprovement |
/// | >= 7.5 and < 9.0 | Good             |
/// | >= 9.0           | Excellent        |
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    /// Below 7.5
    NeedsImprovement,
    /// 7.5 up to, not including, 9.0
    Good,
    /// 9.0 and above
    Excellent,
}

impl Band {
    /// Classifies a CGPA.
    pub fn classify(cgpa: f64) -> Self {
        if cgpa >= EXCELLENT_THRESHOLD {
            Band::Excellent
        } else if cgpa >= GOOD_THRESHOLD {
            Band::Good
        } else {
            Band::NeedsImprovement
        }
    }

    /// Short human readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Band::NeedsImprovement => "needs improvement",
            Band::Good => "good",
            Band::Excellent => "excellent",
        }
    }

    /// Icon shown before the message.
    pub fn icon(&self) -> &'static str {
        match self {
            Band::NeedsImprovement => "💡",
            Band::Good => "👏",
            Band::Excellent => "🏆",
        }
    }

    /// Motivational or congratulatory message for this band.
    pub fn message(&self) -> &'static str {
        match self {
            Band::NeedsImprovement => {
                "Keep pushing! Your CGPA can improve with consistent effort. Stay motivated and \
                 keep learning!"
            }
            Band::Good => "Good job! Your CGPA is above average. Keep striving for excellence!",
            Band::Excellent => {
                "Congratulations! You have achieved an outstanding CGPA. Keep up the excellent \
                 work!"
            }
        }
    }
}

impl Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        assert_eq!(Band::classify(0.0), Band::NeedsImprovement);
        assert_eq!(Band::classify(7.49), Band::NeedsImprovement);
        assert_eq!(Band::classify(7.5), Band::Good);
        assert_eq!(Band::classify(8.99), Band::Good);
        assert_eq!(Band::classify(9.0), Band::Excellent);
        assert_eq!(Band::classify(10.0), Band::Excellent);
    }

    #[test]
    fn messages_follow_the_band() {
        assert!(Band::Excellent.message().starts_with("Congratulations!"));
        assert!(Band::Good.message().starts_with("Good job!"));
        assert!(Band::NeedsImprovement.message().starts_with("Keep pushing!"));
        assert_eq!(Band::Good.to_string(), "good");
    }
}
