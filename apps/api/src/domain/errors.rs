use thiserror::Error;

use crate::domain::member::value_objects::MemberId;

/// Failure to construct a scalar value object
///
/// Every variant carries the name of the field being validated and the raw
/// value that was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str, value: String },

    #[error("{field} must be at most {max} characters (got {actual})")]
    TooLong {
        field: &'static str,
        value: String,
        max: usize,
        actual: usize,
    },

    #[error("{field} must be exactly {expected} character(s) (got {actual})")]
    WrongLength {
        field: &'static str,
        value: String,
        expected: usize,
        actual: usize,
    },

    #[error("{field} must be {expected} (got {value:?})")]
    Malformed {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl ValidationError {
    /// Name of the field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Required { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::WrongLength { field, .. }
            | ValidationError::Malformed { field, .. } => field,
        }
    }

    /// The rejected raw value
    pub fn value(&self) -> &str {
        match self {
            ValidationError::Required { value, .. }
            | ValidationError::TooLong { value, .. }
            | ValidationError::WrongLength { value, .. }
            | ValidationError::Malformed { value, .. } => value,
        }
    }
}

/// Violation of a Team aggregate invariant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("a team needs at least {min} members (got {actual})")]
    InsufficientMemberCount { min: usize, actual: usize },

    #[error("the same member cannot be listed more than once")]
    DuplicateMember,

    #[error("not members of this team: {}", join_ids(.member_ids))]
    NonTeamMember { member_ids: Vec<MemberId> },

    #[error("a pair needs 2 or 3 members (got {actual})")]
    InvalidPairSize { actual: usize },

    #[error("pair {0} already exists in this team")]
    DuplicatePairName(String),

    #[error("no pair formation is pending")]
    NoPendingPairFormation,

    #[error("approved members do not match the requested pair formation")]
    PairFormationMismatch,

    #[error("team name {0:?} is already in use")]
    DuplicateTeamName(String),
}

impl DomainError {
    /// Stable discriminant for callers that map errors to responses
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::InsufficientMemberCount { .. } => "insufficient_member_count",
            DomainError::DuplicateMember => "duplicate_member",
            DomainError::NonTeamMember { .. } => "non_team_member",
            DomainError::InvalidPairSize { .. } => "invalid_pair_size",
            DomainError::DuplicatePairName(_) => "duplicate_pair_name",
            DomainError::NoPendingPairFormation => "no_pending_pair_formation",
            DomainError::PairFormationMismatch => "pair_formation_mismatch",
            DomainError::DuplicateTeamName(_) => "duplicate_team_name",
        }
    }
}

/// Failure while rebuilding a Team from stored state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

fn join_ids(ids: &[MemberId]) -> String {
    ids.iter()
        .map(MemberId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
