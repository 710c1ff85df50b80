use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::errors::DomainError;
use crate::domain::member::MemberId;

/// A member as held by a team: identifier plus display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    id: MemberId,
    name: String,
}

impl TeamMember {
    pub fn new(id: impl Into<MemberId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> &MemberId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Ordered, fixed member list of a team
///
/// # Invariants
/// - At least three members
/// - No two members share an identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMembers(Vec<TeamMember>);

impl TeamMembers {
    /// Minimum number of members a team may have
    pub const MIN_MEMBERS: usize = 3;

    /// Validates and takes ownership of a member list
    ///
    /// Count is checked before uniqueness.
    pub fn new(members: Vec<TeamMember>) -> Result<Self, DomainError> {
        if members.len() < Self::MIN_MEMBERS {
            return Err(DomainError::InsufficientMemberCount {
                min: Self::MIN_MEMBERS,
                actual: members.len(),
            });
        }

        let mut seen = HashSet::with_capacity(members.len());
        if !members.iter().all(|m| seen.insert(m.id())) {
            return Err(DomainError::DuplicateMember);
        }

        Ok(TeamMembers(members))
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.0
    }

    pub fn member_ids(&self) -> Vec<MemberId> {
        self.0.iter().map(|m| m.id.clone()).collect()
    }

    pub fn contains(&self, id: &MemberId) -> bool {
        self.0.iter().any(|m| &m.id == id)
    }

    pub fn count(&self) -> usize {
        self.0.len()
    }
}
