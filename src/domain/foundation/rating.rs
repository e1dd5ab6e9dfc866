//! Readiness ruler value object (1 to 10 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Self-reported importance or confidence on a 1..=10 ruler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RulerRating(u8);

/// Coarse band a ruler value falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RulerLevel {
    Low,
    Moderate,
    Strong,
}

impl RulerRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Creates a rating, returning error if outside 1..=10.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        Self::named("rating", value)
    }

    /// Like `try_new`, but reports failures against `field`.
    pub fn named(field: &str, value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                field,
                Self::MIN as i32,
                Self::MAX as i32,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// 8 and above is strong, 6 and 7 moderate, anything lower is low.
    pub fn level(&self) -> RulerLevel {
        match self.0 {
            8..=10 => RulerLevel::Strong,
            6..=7 => RulerLevel::Moderate,
            _ => RulerLevel::Low,
        }
    }
}

impl RulerLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RulerLevel::Low => "Low",
            RulerLevel::Moderate => "Moderate",
            RulerLevel::Strong => "Strong",
        }
    }
}

impl TryFrom<u8> for RulerRating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<RulerRating> for u8 {
    fn from(rating: RulerRating) -> Self {
        rating.0
    }
}

impl fmt::Display for RulerRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_whole_ruler() {
        for value in 1..=10 {
            assert_eq!(RulerRating::try_new(value).unwrap().value(), value);
        }
    }

    #[test]
    fn rejects_values_off_the_ruler() {
        assert!(RulerRating::try_new(0).is_err());
        assert!(RulerRating::try_new(11).is_err());
    }

    #[test]
    fn named_reports_field() {
        let err = RulerRating::named("confidence_rating", 0).unwrap_err();
        assert_eq!(
            err,
            ValidationError::out_of_range("confidence_rating", 1, 10, 0)
        );
    }

    #[test]
    fn level_bands() {
        assert_eq!(RulerRating::try_new(10).unwrap().level(), RulerLevel::Strong);
        assert_eq!(RulerRating::try_new(8).unwrap().level(), RulerLevel::Strong);
        assert_eq!(RulerRating::try_new(7).unwrap().level(), RulerLevel::Moderate);
        assert_eq!(RulerRating::try_new(6).unwrap().level(), RulerLevel::Moderate);
        assert_eq!(RulerRating::try_new(5).unwrap().level(), RulerLevel::Low);
        assert_eq!(RulerRating::try_new(1).unwrap().level(), RulerLevel::Low);
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&RulerRating::try_new(7).unwrap()).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn deserialization_rejects_out_of_range() {
        let bad: Result<RulerRating, _> = serde_json::from_str("12");
        assert!(bad.is_err());
    }

    #[test]
    fn displays_over_ten() {
        assert_eq!(format!("{}", RulerRating::try_new(9).unwrap()), "9/10");
    }
}
