//! PullRequestStatus enum tracking the review lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{StateMachine, ValidationError};

/// Lifecycle status of a pull request.
///
/// `Open --merge--> Merged`; `Merged` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum PullRequestStatus {
    #[default]
    Open,
    Merged,
}

impl PullRequestStatus {
    /// Returns true if reviewers may still be changed.
    pub fn is_mutable(&self) -> bool {
        matches!(self, PullRequestStatus::Open)
    }

    /// Storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PullRequestStatus::Open => "OPEN",
            PullRequestStatus::Merged => "MERGED",
        }
    }
}

impl StateMachine for PullRequestStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use PullRequestStatus::*;
        matches!((self, target), (Open, Merged))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            PullRequestStatus::Open => vec![PullRequestStatus::Merged],
            PullRequestStatus::Merged => vec![],
        }
    }
}

impl fmt::Display for PullRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PullRequestStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPEN" => Ok(PullRequestStatus::Open),
            "MERGED" => Ok(PullRequestStatus::Merged),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown pull request status '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn default_is_open() {
        assert_eq!(PullRequestStatus::default(), PullRequestStatus::Open);
    }

    #[test]
    fn open_can_transition_to_merged() {
        let next = PullRequestStatus::Open.transition_to(PullRequestStatus::Merged);
        assert_eq!(next.unwrap(), PullRequestStatus::Merged);
    }

    #[test]
    fn merged_cannot_go_back_to_open() {
        let err = PullRequestStatus::Merged
            .transition_to(PullRequestStatus::Open)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn merged_cannot_merge_again() {
        assert!(!PullRequestStatus::Merged.can_transition_to(&PullRequestStatus::Merged));
    }

    #[test]
    fn only_merged_is_terminal() {
        assert!(PullRequestStatus::Merged.is_terminal());
        assert!(!PullRequestStatus::Open.is_terminal());
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for status in [PullRequestStatus::Open, PullRequestStatus::Merged] {
            for target in status.valid_transitions() {
                assert!(status.can_transition_to(&target));
            }
        }
    }

    #[test]
    fn is_mutable_only_while_open() {
        assert!(PullRequestStatus::Open.is_mutable());
        assert!(!PullRequestStatus::Merged.is_mutable());
    }

    #[test]
    fn serializes_to_uppercase_json() {
        assert_eq!(
            serde_json::to_string(&PullRequestStatus::Open).unwrap(),
            "\"OPEN\""
        );
        assert_eq!(
            serde_json::to_string(&PullRequestStatus::Merged).unwrap(),
            "\"MERGED\""
        );
    }

    #[test]
    fn parses_storage_representation() {
        assert_eq!("OPEN".parse::<PullRequestStatus>().unwrap(), PullRequestStatus::Open);
        assert_eq!(
            "MERGED".parse::<PullRequestStatus>().unwrap(),
            PullRequestStatus::Merged
        );
        assert!("CLOSED".parse::<PullRequestStatus>().is_err());
    }
}
