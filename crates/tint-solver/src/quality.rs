//! Qualitative reading of a loss value.

use std::fmt;

use serde::Serialize;

/// How close a solve got to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum LossQuality {
    /// Loss below 1.
    Perfect,
    /// Loss below 5.
    Close,
    /// Loss below 15.
    SomewhatOff,
    /// Anything else.
    ExtremelyOff,
}

impl LossQuality {
    /// Classifies a loss value.
    pub fn from_loss(loss: f64) -> Self {
        if loss < 1.0 {
            Self::Perfect
        } else if loss < 5.0 {
            Self::Close
        } else if loss < 15.0 {
            Self::SomewhatOff
        } else {
            Self::ExtremelyOff
        }
    }

    /// Message shown to the user.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Perfect => "This is a perfect result.",
            Self::Close => "The color is close enough.",
            Self::SomewhatOff => "The color is somewhat off. Consider running it again.",
            Self::ExtremelyOff => "The color is extremely off. Run it again!",
        }
    }

    /// Whether another run is worth trying.
    pub const fn should_retry(self) -> bool {
        matches!(self, Self::SomewhatOff | Self::ExtremelyOff)
    }
}

impl fmt::Display for LossQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(LossQuality::from_loss(0.0), LossQuality::Perfect);
        assert_eq!(LossQuality::from_loss(0.999), LossQuality::Perfect);
        assert_eq!(LossQuality::from_loss(1.0), LossQuality::Close);
        assert_eq!(LossQuality::from_loss(4.99), LossQuality::Close);
        assert_eq!(LossQuality::from_loss(5.0), LossQuality::SomewhatOff);
        assert_eq!(LossQuality::from_loss(15.0), LossQuality::ExtremelyOff);
        assert_eq!(LossQuality::from_loss(f64::INFINITY), LossQuality::ExtremelyOff);
    }

    #[test]
    fn test_messages() {
        assert_eq!(LossQuality::Close.to_string(), "The color is close enough.");
        assert!(LossQuality::ExtremelyOff.should_retry());
        assert!(!LossQuality::Perfect.should_retry());
    }
}
