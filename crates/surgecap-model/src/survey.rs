use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The two facility categories the feed covers. Each carries its own
/// independently maintained schema; the field sets are disjoint and the
/// schemas are never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurveyType {
    Hospital,
    LongTermCare,
}

impl SurveyType {
    /// Feed prefix as it appears in snapshot filenames
    /// (e.g. `HOS_ResourceCapacity_2020-03-30_00-00.csv`).
    pub fn feed_prefix(self) -> &'static str {
        match self {
            Self::Hospital => "HOS",
            Self::LongTermCare => "LTC",
        }
    }
}

impl fmt::Display for SurveyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.feed_prefix())
    }
}

/// Raised when a survey type string is not one of the supported set.
/// Caller misconfiguration; fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown survey type '{0}' (expected HOS or LTC)")]
pub struct UnknownSurveyType(pub String);

impl FromStr for SurveyType {
    type Err = UnknownSurveyType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "HOS" => Ok(Self::Hospital),
            "LTC" => Ok(Self::LongTermCare),
            other => Err(UnknownSurveyType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_prefixes() {
        assert_eq!("HOS".parse::<SurveyType>().unwrap(), SurveyType::Hospital);
        assert_eq!(
            "LTC".parse::<SurveyType>().unwrap(),
            SurveyType::LongTermCare
        );
    }

    #[test]
    fn rejects_unknown_prefix() {
        let err = "ICU".parse::<SurveyType>().unwrap_err();
        assert_eq!(err, UnknownSurveyType("ICU".to_string()));
    }

    #[test]
    fn serializes_round_trip() {
        let json = serde_json::to_string(&SurveyType::LongTermCare).expect("serialize");
        let round: SurveyType = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(round, SurveyType::LongTermCare);
    }
}
