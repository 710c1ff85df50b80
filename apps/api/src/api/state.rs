use sqlx::PgPool;
use std::sync::Arc;

use crate::application::{CreateTeamUseCase, EventPublisher, FormPairUseCase, GetTeamsUseCase};
use crate::domain::repositories::{MemberRepository, TeamRepository};
use crate::infrastructure::events::TracingEventPublisher;
use crate::infrastructure::repositories::{PostgresMemberRepository, PostgresTeamRepository};

/// Collaborators shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub teams: Arc<dyn TeamRepository>,
    pub members: Arc<dyn MemberRepository>,
    pub publisher: Arc<dyn EventPublisher>,
}

impl AppState {
    pub fn new(
        teams: Arc<dyn TeamRepository>,
        members: Arc<dyn MemberRepository>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            teams,
            members,
            publisher,
        }
    }

    /// State backed by PostgreSQL, publishing events to the log
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PostgresTeamRepository::new(pool.clone())),
            Arc::new(PostgresMemberRepository::new(pool)),
            Arc::new(TracingEventPublisher),
        )
    }

    pub fn create_team(&self) -> CreateTeamUseCase {
        CreateTeamUseCase::new(
            self.teams.clone(),
            self.members.clone(),
            self.publisher.clone(),
        )
    }

    pub fn form_pair(&self) -> FormPairUseCase {
        FormPairUseCase::new(
            self.teams.clone(),
            self.members.clone(),
            self.publisher.clone(),
        )
    }

    pub fn get_teams(&self) -> GetTeamsUseCase {
        GetTeamsUseCase::new(self.teams.clone())
    }
}
