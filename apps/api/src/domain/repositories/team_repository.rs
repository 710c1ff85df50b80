use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::team::{Team, TeamId, TeamName};

/// Repository trait for Team aggregate
///
/// Stores the team's id, name, members and committed pairs. Loading goes
/// through [`Team::rebuild`], so a loaded team carries no events and no
/// pending pair formation.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Save a team (insert or update)
    ///
    /// A name already used by another team must fail with
    /// [`RepositoryError::DuplicateTeamName`].
    async fn save(&self, team: &Team) -> Result<(), RepositoryError>;

    /// Find a team by its ID
    async fn find_by_id(&self, id: &TeamId) -> Result<Option<Team>, RepositoryError>;

    /// Find the team using a given name
    async fn find_by_name(&self, name: &TeamName) -> Result<Option<Team>, RepositoryError>;

    /// List all teams
    async fn find_all(&self) -> Result<Vec<Team>, RepositoryError>;
}
