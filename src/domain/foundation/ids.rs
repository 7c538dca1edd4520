//! Strongly-typed identifier value objects.
//!
//! All identifiers in this service are caller-supplied strings. The only
//! rule they share is that they cannot be empty.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Generates a non-empty string identifier newtype.
///
/// Deserialization goes through `TryFrom<String>` so an empty value in a
/// request body is rejected at the edge instead of reaching the domain.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates the identifier, returning error if empty.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(id))
            }

            /// Returns the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier of a user (team member, author or reviewer).
    UserId,
    "user_id"
);

string_id!(
    /// Team name; doubles as the team's primary key.
    TeamName,
    "team_name"
);

string_id!(
    /// Identifier of a pull request.
    PullRequestId,
    "pull_request_id"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_accepts_non_empty() {
        let id = UserId::new("u1").unwrap();
        assert_eq!(id.as_str(), "u1");
        assert_eq!(id.to_string(), "u1");
    }

    #[test]
    fn user_id_rejects_empty() {
        let result = UserId::new("");
        assert_eq!(result, Err(ValidationError::empty_field("user_id")));
    }

    #[test]
    fn team_name_rejects_whitespace() {
        assert!(TeamName::new("   ").is_err());
    }

    #[test]
    fn pull_request_id_error_names_field() {
        let err = PullRequestId::new("").unwrap_err();
        assert_eq!(err.field(), "pull_request_id");
    }

    #[test]
    fn identifiers_serialize_as_plain_strings() {
        let id = PullRequestId::new("pr-1001").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"pr-1001\"");
    }

    #[test]
    fn deserialization_rejects_empty_identifier() {
        let result: Result<TeamName, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());

        let name: TeamName = serde_json::from_str("\"payments\"").unwrap();
        assert_eq!(name.as_str(), "payments");
    }
}
