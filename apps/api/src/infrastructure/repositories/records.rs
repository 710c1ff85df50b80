use std::fmt;

use crate::domain::member::MemberId;
use crate::domain::repositories::RepositoryError;
use crate::domain::team::{Pair, PairName, Team, TeamMember, TeamName};

/// Stored shape of a team, shared by the adapters
///
/// Converting back into a [`Team`] re-runs every validation through
/// `Team::rebuild`, so corrupt rows surface as storage errors instead of
/// producing an invalid aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRecord {
    pub id: String,
    pub name: String,
    pub members: Vec<MemberRecord>,
    pub pairs: Vec<PairRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRecord {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairRecord {
    pub name: String,
    pub member_ids: Vec<String>,
}

impl From<&Team> for TeamRecord {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id().to_string(),
            name: team.name().to_string(),
            members: team
                .members()
                .iter()
                .map(|m| MemberRecord {
                    id: m.id().to_string(),
                    name: m.name().to_string(),
                })
                .collect(),
            pairs: team
                .pairs()
                .iter()
                .map(|p| PairRecord {
                    name: p.name().to_string(),
                    member_ids: p.member_ids().iter().map(ToString::to_string).collect(),
                })
                .collect(),
        }
    }
}

impl TryFrom<TeamRecord> for Team {
    type Error = RepositoryError;

    fn try_from(record: TeamRecord) -> Result<Self, Self::Error> {
        let corrupt = |e: &dyn fmt::Display| {
            RepositoryError::Storage(format!("corrupt team record {}: {}", record.id, e))
        };

        let name = TeamName::new(&record.name).map_err(|e| corrupt(&e))?;
        let members = record
            .members
            .iter()
            .map(|m| TeamMember::new(m.id.as_str(), m.name.as_str()))
            .collect();

        let mut pairs = Vec::with_capacity(record.pairs.len());
        for pair in &record.pairs {
            let pair_name = PairName::new(&pair.name).map_err(|e| corrupt(&e))?;
            let member_ids = pair.member_ids.iter().map(|id| MemberId::new(id.as_str())).collect();
            pairs.push(Pair::new(pair_name, member_ids).map_err(|e| corrupt(&e))?);
        }

        Team::rebuild(&record.id, name, members)
            .map_err(|e| corrupt(&e))?
            .with_pairs(pairs)
            .map_err(|e| corrupt(&e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team_with_pair() -> Team {
        let mut team = Team::create(
            TeamName::new("ABC").unwrap(),
            vec![
                TeamMember::new("u1", "User 1"),
                TeamMember::new("u2", "User 2"),
                TeamMember::new("u3", "User 3"),
            ],
        )
        .unwrap();
        let ids = vec![MemberId::new("u1"), MemberId::new("u2")];
        team.request_pair_formation(ids.clone(), PairName::new("A").unwrap())
            .unwrap();
        team.confirm_pair_formation(&ids).unwrap();
        team
    }

    #[test]
    fn record_reconstructs_equivalent_team() {
        let team = team_with_pair();

        let loaded = Team::try_from(TeamRecord::from(&team)).unwrap();

        assert_eq!(loaded.id(), team.id());
        assert_eq!(loaded.name(), team.name());
        assert_eq!(loaded.members(), team.members());
        assert_eq!(loaded.pairs()[0].member_ids(), team.pairs()[0].member_ids());
        assert!(loaded.events().is_empty());
        assert!(loaded.pending_pair_formation().is_none());
    }

    #[test]
    fn corrupt_record_is_a_storage_error() {
        let mut record = TeamRecord::from(&team_with_pair());
        record.id = "not-a-uuid".to_string();

        let err = Team::try_from(record).unwrap_err();

        assert!(matches!(err, RepositoryError::Storage(msg) if msg.contains("not-a-uuid")));
    }

    #[test]
    fn pair_with_outsider_is_rejected_on_load() {
        let mut record = TeamRecord::from(&team_with_pair());
        record.pairs[0].member_ids = vec!["u1".to_string(), "u9".to_string()];

        assert!(Team::try_from(record).is_err());
    }
}
