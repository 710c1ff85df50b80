use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::RepositoryError;
use crate::domain::member::{MemberId, MemberStatus};

/// Member identity and status as reported by the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub status: MemberStatus,
}

impl Member {
    pub fn new(id: impl Into<MemberId>, name: impl Into<String>, status: MemberStatus) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status,
        }
    }

    pub fn is_enrolled(&self) -> bool {
        self.status.is_enrolled()
    }
}

/// Read-only lookup of registered members
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Find a member by ID
    async fn find_by_id(&self, id: &MemberId) -> Result<Option<Member>, RepositoryError>;

    /// Find several members at once
    ///
    /// The result has one entry per requested id, in the same order, with
    /// `None` for ids that are not registered.
    async fn find_by_ids(&self, ids: &[MemberId]) -> Result<Vec<Option<Member>>, RepositoryError>;
}
