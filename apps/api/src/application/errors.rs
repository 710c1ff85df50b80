use thiserror::Error;

use crate::domain::errors::{DomainError, TeamError, ValidationError};
use crate::domain::member::MemberId;
use crate::domain::repositories::RepositoryError;

/// Errors returned by use cases
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("team not found: {0}")]
    TeamNotFound(String),

    #[error("member not found: {0}")]
    MemberNotFound(MemberId),

    #[error("only enrolled members can join: {}", .0.join(", "))]
    MemberNotEnrolled(Vec<String>),

    #[error("repository error: {0}")]
    Repository(String),
}

impl From<TeamError> for ApplicationError {
    fn from(err: TeamError) -> Self {
        match err {
            TeamError::Validation(e) => ApplicationError::Validation(e),
            TeamError::Domain(e) => ApplicationError::Domain(e),
        }
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DuplicateTeamName(name) => {
                ApplicationError::Domain(DomainError::DuplicateTeamName(name))
            }
            RepositoryError::Storage(message) => ApplicationError::Repository(message),
        }
    }
}
