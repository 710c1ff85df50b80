use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::records::TeamRecord;
use crate::domain::member::MemberId;
use crate::domain::repositories::{Member, MemberRepository, RepositoryError, TeamRepository};
use crate::domain::team::{Team, TeamId, TeamName};

/// In-memory implementation of TeamRepository
///
/// Keeps stored records rather than live aggregates, so every load goes
/// through `Team::rebuild` exactly as a database-backed load would. Team
/// names are unique, checked at write time.
#[derive(Debug, Default)]
pub struct InMemoryTeamRepository {
    teams: RwLock<Vec<TeamRecord>>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn save(&self, team: &Team) -> Result<(), RepositoryError> {
        let record = TeamRecord::from(team);
        let mut teams = self.teams.write().await;

        if teams
            .iter()
            .any(|t| t.name == record.name && t.id != record.id)
        {
            return Err(RepositoryError::DuplicateTeamName(record.name));
        }

        match teams.iter_mut().find(|t| t.id == record.id) {
            Some(existing) => *existing = record,
            None => teams.push(record),
        }

        tracing::debug!(team_id = %team.id(), "Stored team in memory");
        Ok(())
    }

    async fn find_by_id(&self, id: &TeamId) -> Result<Option<Team>, RepositoryError> {
        let id = id.to_string();
        let record = self.teams.read().await.iter().find(|t| t.id == id).cloned();

        record.map(Team::try_from).transpose()
    }

    async fn find_by_name(&self, name: &TeamName) -> Result<Option<Team>, RepositoryError> {
        let record = self
            .teams
            .read()
            .await
            .iter()
            .find(|t| t.name == name.as_str())
            .cloned();

        record.map(Team::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Team>, RepositoryError> {
        let records = self.teams.read().await.clone();

        records.into_iter().map(Team::try_from).collect()
    }
}

/// In-memory member registry
#[derive(Debug, Default)]
pub struct InMemoryMemberRepository {
    members: RwLock<HashMap<MemberId, Member>>,
}

impl InMemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the given members
    pub fn with_members(members: impl IntoIterator<Item = Member>) -> Self {
        let members = members.into_iter().map(|m| (m.id.clone(), m)).collect();
        Self {
            members: RwLock::new(members),
        }
    }

    /// Adds or replaces a member
    pub async fn insert(&self, member: Member) {
        self.members.write().await.insert(member.id.clone(), member);
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn find_by_id(&self, id: &MemberId) -> Result<Option<Member>, RepositoryError> {
        Ok(self.members.read().await.get(id).cloned())
    }

    async fn find_by_ids(&self, ids: &[MemberId]) -> Result<Vec<Option<Member>>, RepositoryError> {
        let members = self.members.read().await;

        Ok(ids.iter().map(|id| members.get(id).cloned()).collect())
    }
}
