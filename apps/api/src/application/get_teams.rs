use std::sync::Arc;

use super::dto::TeamDto;
use super::errors::ApplicationError;
use crate::domain::repositories::TeamRepository;

/// Lists every team with its members and pairs
pub struct GetTeamsUseCase {
    teams: Arc<dyn TeamRepository>,
}

impl GetTeamsUseCase {
    pub fn new(teams: Arc<dyn TeamRepository>) -> Self {
        Self { teams }
    }

    pub async fn execute(&self) -> Result<Vec<TeamDto>, ApplicationError> {
        let teams = self.teams.find_all().await?;

        Ok(teams.iter().map(TeamDto::from).collect())
    }
}
