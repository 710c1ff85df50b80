use serde::Deserialize;
use std::sync::Arc;

use super::dto::TeamDto;
use super::errors::ApplicationError;
use super::members::resolve_enrolled_members;
use super::publisher::EventPublisher;
use crate::domain::errors::DomainError;
use crate::domain::member::MemberId;
use crate::domain::repositories::{MemberRepository, TeamRepository};
use crate::domain::team::{Team, TeamMember, TeamName};

/// Input for creating a team
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamCommand {
    pub name: String,
    pub member_ids: Vec<String>,
}

/// Creates a team from registered, enrolled members
pub struct CreateTeamUseCase {
    teams: Arc<dyn TeamRepository>,
    members: Arc<dyn MemberRepository>,
    publisher: Arc<dyn EventPublisher>,
}

impl CreateTeamUseCase {
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

    /// Validates the name, checks it is free, resolves members, then
    /// creates and saves the team
    ///
    /// The name check here is advisory; the repository reports a
    /// concurrent duplicate on save, which surfaces as the same error.
    pub async fn execute(&self, command: CreateTeamCommand) -> Result<TeamDto, ApplicationError> {
        let name = TeamName::new(&command.name)?;

        if self.teams.find_by_name(&name).await?.is_some() {
            tracing::warn!(team_name = %name, "Team name already in use");
            return Err(DomainError::DuplicateTeamName(name.to_string()).into());
        }

        let member_ids: Vec<MemberId> = command.member_ids.into_iter().map(MemberId::from).collect();
        let members = resolve_enrolled_members(self.members.as_ref(), &member_ids).await?;

        let mut team = Team::create(
            name,
            members
                .into_iter()
                .map(|m| TeamMember::new(m.id, m.name))
                .collect(),
        )?;

        self.teams.save(&team).await?;
        self.publisher.publish(team.take_events()).await;

        tracing::info!(
            team_id = %team.id(),
            team_name = %team.name(),
            member_count = team.members().len(),
            "Team created"
        );

        Ok(TeamDto::from(&team))
    }
}
