use serde::Deserialize;
use std::sync::Arc;

use super::dto::TeamDto;
use super::errors::ApplicationError;
use super::members::resolve_enrolled_members;
use super::publisher::EventPublisher;
use crate::domain::member::MemberId;
use crate::domain::repositories::{MemberRepository, TeamRepository};
use crate::domain::team::{PairName, TeamId};

/// Input for forming a pair within a team
#[derive(Debug, Clone, Deserialize)]
pub struct FormPairCommand {
    pub team_id: String,
    pub pair_name: String,
    pub member_ids: Vec<String>,
}

/// Forms a pair in one load, mutate, save cycle
///
/// Runs the aggregate's request step, checks the requested members are
/// enrolled, then confirms with the same members. The pending request is
/// not persisted, so both steps happen within this call.
pub struct FormPairUseCase {
    teams: Arc<dyn TeamRepository>,
    members: Arc<dyn MemberRepository>,
    publisher: Arc<dyn EventPublisher>,
}

impl FormPairUseCase {
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

    pub async fn execute(&self, command: FormPairCommand) -> Result<TeamDto, ApplicationError> {
        let team_id = TeamId::parse(&command.team_id)?;

        let mut team = self
            .teams
            .find_by_id(&team_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(team_id = %team_id, "Team not found");
                ApplicationError::TeamNotFound(command.team_id.clone())
            })?;

        let pair_name = PairName::new(&command.pair_name)?;
        let member_ids: Vec<MemberId> = command.member_ids.into_iter().map(MemberId::from).collect();

        team.request_pair_formation(member_ids.clone(), pair_name)?;
        resolve_enrolled_members(self.members.as_ref(), &member_ids).await?;
        let pair = team.confirm_pair_formation(&member_ids)?;

        self.teams.save(&team).await?;
        self.publisher.publish(team.take_events()).await;

        tracing::info!(
            team_id = %team.id(),
            pair_name = %pair.name(),
            member_count = pair.member_ids().len(),
            "Pair formed"
        );

        Ok(TeamDto::from(&team))
    }
}
