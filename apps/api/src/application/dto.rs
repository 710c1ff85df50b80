use serde::{Deserialize, Serialize};

use crate::domain::team::Team;

/// Read model of a team returned by use cases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamDto {
    pub id: String,
    pub name: String,
    pub members: Vec<TeamMemberDto>,
    pub pairs: Vec<PairDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMemberDto {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairDto {
    pub name: String,
    pub member_ids: Vec<String>,
}

impl From<&Team> for TeamDto {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id().to_string(),
            name: team.name().to_string(),
            members: team
                .members()
                .iter()
                .map(|m| TeamMemberDto {
                    id: m.id().to_string(),
                    name: m.name().to_string(),
                })
                .collect(),
            pairs: team
                .pairs()
                .iter()
                .map(|p| PairDto {
                    name: p.name().to_string(),
                    member_ids: p.member_ids().iter().map(ToString::to_string).collect(),
                })
                .collect(),
        }
    }
}
