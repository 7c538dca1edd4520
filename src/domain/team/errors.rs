//! Team and user error types.

use crate::domain::foundation::{DomainError, ErrorCode, TeamName, UserId, ValidationError};

/// Errors raised by team roster and user activity operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamError {
    /// A team with this name already exists.
    AlreadyExists(TeamName),
    /// No team (and no member) exists under this name.
    NotFound(TeamName),
    /// The user does not exist.
    UserNotFound(UserId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Storage failure not recognized as one of the above.
    Infrastructure(String),
}

impl TeamError {
    pub fn already_exists(name: TeamName) -> Self {
        TeamError::AlreadyExists(name)
    }
    pub fn not_found(name: TeamName) -> Self {
        TeamError::NotFound(name)
    }
    pub fn user_not_found(id: UserId) -> Self {
        TeamError::UserNotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        TeamError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        TeamError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            TeamError::AlreadyExists(_) => ErrorCode::TeamExists,
            TeamError::NotFound(_) => ErrorCode::TeamNotFound,
            TeamError::UserNotFound(_) => ErrorCode::UserNotFound,
            TeamError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            TeamError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            TeamError::AlreadyExists(name) => format!("team {} already exists", name),
            TeamError::NotFound(name) => format!("team {} not found", name),
            TeamError::UserNotFound(id) => format!("user {} not found", id),
            TeamError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            TeamError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for TeamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for TeamError {}

/// Fallback conversion for storage errors the caller did not map itself.
impl From<DomainError> for TeamError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => TeamError::ValidationFailed {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
            _ => TeamError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ValidationError> for TeamError {
    fn from(err: ValidationError) -> Self {
        TeamError::validation(err.field().to_string(), err.to_string())
    }
}
