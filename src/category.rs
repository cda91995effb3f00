use std::collections::HashSet;
use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

/// Canonical, mutually-exclusive outcome bucket assigned to a run after
/// classification. Raw provider status/conclusion strings never leave the
/// transformation boundary; everything downstream works on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeCategory {
    Success,
    Failure,
    InProgress,
    Cancelled,
    Queued,
    Waiting,
    Unknown,
}

/// Fixed order in which categories appear in summaries.
pub const REPORT_ORDER: [OutcomeCategory; 7] = [
    OutcomeCategory::Success,
    OutcomeCategory::Failure,
    OutcomeCategory::InProgress,
    OutcomeCategory::Cancelled,
    OutcomeCategory::Queued,
    OutcomeCategory::Waiting,
    OutcomeCategory::Unknown,
];

impl OutcomeCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::InProgress => "in_progress",
            Self::Cancelled => "cancelled",
            Self::Queued => "queued",
            Self::Waiting => "waiting",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a category name, case-insensitively. `None` for anything
    /// outside the closed set.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "success" => Some(Self::Success),
            "failure" => Some(Self::Failure),
            "in_progress" => Some(Self::InProgress),
            "cancelled" => Some(Self::Cancelled),
            "queued" => Some(Self::Queued),
            "waiting" => Some(Self::Waiting),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for OutcomeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Turn raw exclusion names into a category set at the configuration
/// boundary. Unrecognized names are dropped with a warning, not an error.
pub fn parse_exclusions(names: &[String]) -> HashSet<OutcomeCategory> {
    names
        .iter()
        .filter_map(|name| {
            let category = OutcomeCategory::parse(name);
            if category.is_none() {
                warn!("Ignoring unrecognized category '{name}' in exclusions");
            }
            category
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recognizes_every_category() {
        for category in REPORT_ORDER {
            assert_eq!(OutcomeCategory::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            OutcomeCategory::parse("Cancelled"),
            Some(OutcomeCategory::Cancelled)
        );
        assert_eq!(
            OutcomeCategory::parse("IN_PROGRESS"),
            Some(OutcomeCategory::InProgress)
        );
    }

    #[test]
    fn test_parse_rejects_unrecognized_names() {
        assert_eq!(OutcomeCategory::parse("failed"), None);
        assert_eq!(OutcomeCategory::parse(""), None);
        assert_eq!(OutcomeCategory::parse("in-progress"), None);
    }

    #[test]
    fn test_display_matches_snake_case_names() {
        assert_eq!(OutcomeCategory::InProgress.to_string(), "in_progress");
        assert_eq!(OutcomeCategory::Success.to_string(), "success");
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&OutcomeCategory::InProgress).unwrap();

        assert_eq!(json, "\"in_progress\"");
    }

    #[test]
    fn test_parse_exclusions_ignores_unrecognized_names() {
        let names = vec![
            "success".to_string(),
            "bogus".to_string(),
            "Failure".to_string(),
        ];

        let exclusions = parse_exclusions(&names);

        assert_eq!(exclusions.len(), 2);
        assert!(exclusions.contains(&OutcomeCategory::Success));
        assert!(exclusions.contains(&OutcomeCategory::Failure));
    }

    #[test]
    fn test_parse_exclusions_empty_input() {
        assert!(parse_exclusions(&[]).is_empty());
    }
}
