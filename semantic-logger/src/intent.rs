//! Semantic vocabulary for log severities.

use std::fmt;
use std::str::FromStr;

use crate::log::LogLevel;

/// What a log statement says about the state of the project.
///
/// Each intent maps onto exactly one backend [`LogLevel`]:
///
/// | Intent                          | Level   |
/// |---------------------------------|---------|
/// | `ForTestPurpose`                | `Debug` |
/// | `AsExpectedByDefault`           | `Info`  |
/// | `ToInvestigateTomorrow`         | `Warn`  |
/// | `WakeMeUpInTheMiddleOfTheNight` | `Error` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    ForTestPurpose,
    AsExpectedByDefault,
    ToInvestigateTomorrow,
    WakeMeUpInTheMiddleOfTheNight,
}

impl Intent {
    /// All intents, ordered by the severity they map to.
    pub const ALL: [Intent; 4] = [
        Intent::ForTestPurpose,
        Intent::AsExpectedByDefault,
        Intent::ToInvestigateTomorrow,
        Intent::WakeMeUpInTheMiddleOfTheNight,
    ];

    /// Backend level this intent is emitted at.
    pub fn level(&self) -> LogLevel {
        match self {
            Intent::ForTestPurpose => LogLevel::Debug,
            Intent::AsExpectedByDefault => LogLevel::Info,
            Intent::ToInvestigateTomorrow => LogLevel::Warn,
            Intent::WakeMeUpInTheMiddleOfTheNight => LogLevel::Error,
        }
    }

    /// Name of the matching [`SemanticLogger`](crate::SemanticLogger) method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::ForTestPurpose => "for_test_purpose",
            Intent::AsExpectedByDefault => "as_expected_by_default",
            Intent::ToInvestigateTomorrow => "to_investigate_tomorrow",
            Intent::WakeMeUpInTheMiddleOfTheNight => "wake_me_up_in_the_middle_of_the_night",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown intent name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown intent '{0}'")]
pub struct UnknownIntent(pub String);

impl FromStr for Intent {
    type Err = UnknownIntent;

    /// Accepts the method name in snake case or kebab case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Intent::ALL
            .into_iter()
            .find(|intent| intent.as_str() == normalized)
            .ok_or_else(|| UnknownIntent(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_mapping() {
        assert_eq!(Intent::ForTestPurpose.level(), LogLevel::Debug);
        assert_eq!(Intent::AsExpectedByDefault.level(), LogLevel::Info);
        assert_eq!(Intent::ToInvestigateTomorrow.level(), LogLevel::Warn);
        assert_eq!(Intent::WakeMeUpInTheMiddleOfTheNight.level(), LogLevel::Error);
    }

    #[test]
    fn test_mapping_is_one_to_one() {
        let levels: Vec<LogLevel> = Intent::ALL.iter().map(Intent::level).collect();
        assert_eq!(levels, LogLevel::ALL.to_vec());
    }

    #[test]
    fn test_parse_snake_and_kebab_case() {
        assert_eq!(
            "to_investigate_tomorrow".parse::<Intent>().unwrap(),
            Intent::ToInvestigateTomorrow
        );
        assert_eq!(
            "wake-me-up-in-the-middle-of-the-night".parse::<Intent>().unwrap(),
            Intent::WakeMeUpInTheMiddleOfTheNight
        );
    }

    #[test]
    fn test_parse_round_trips_display() {
        for intent in Intent::ALL {
            assert_eq!(intent.to_string().parse::<Intent>().unwrap(), intent);
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "panic".parse::<Intent>().unwrap_err();
        assert_eq!(err, UnknownIntent("panic".to_string()));
        assert_eq!(err.to_string(), "Unknown intent 'panic'");
    }
}
