// Repository ports
// Adapters in the infrastructure layer implement these traits

pub mod member_repository;
pub mod team_repository;

pub use member_repository::{Member, MemberRepository};
pub use team_repository::TeamRepository;

use thiserror::Error;

/// Errors surfaced by repository adapters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The store rejected a write because the team name is taken
    #[error("team name {0:?} is already in use")]
    DuplicateTeamName(String),

    #[error("storage error: {0}")]
    Storage(String),
}
