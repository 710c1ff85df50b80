use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::collections::HashMap;

use crate::domain::member::{MemberId, MemberStatus};
use crate::domain::repositories::{Member, MemberRepository, RepositoryError};

/// PostgreSQL implementation of MemberRepository
///
/// Reads the `members` table maintained by the registration flow.
pub struct PostgresMemberRepository {
    pool: PgPool,
}

impl PostgresMemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn member_from_row(row: &PgRow) -> Result<Member, sqlx::Error> {
    let id: String = row.try_get("id")?;
    let name: String = row.try_get("name")?;
    let status: MemberStatus = row.try_get("status")?;

    Ok(Member::new(id, name, status))
}

#[async_trait]
impl MemberRepository for PostgresMemberRepository {
    async fn find_by_id(&self, id: &MemberId) -> Result<Option<Member>, RepositoryError> {
        let row = sqlx::query("SELECT id, name, status FROM members WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(format!("Failed to find member: {}", e)))?;

        row.as_ref()
            .map(member_from_row)
            .transpose()
            .map_err(|e| RepositoryError::Storage(format!("Failed to read member: {}", e)))
    }

    async fn find_by_ids(&self, ids: &[MemberId]) -> Result<Vec<Option<Member>>, RepositoryError> {
        let raw_ids: Vec<String> = ids.iter().map(ToString::to_string).collect();

        let rows = sqlx::query("SELECT id, name, status FROM members WHERE id = ANY($1)")
            .bind(&raw_ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(format!("Failed to find members: {}", e)))?;

        let mut found = HashMap::with_capacity(rows.len());
        for row in &rows {
            let member = member_from_row(row)
                .map_err(|e| RepositoryError::Storage(format!("Failed to read member: {}", e)))?;
            found.insert(member.id.clone(), member);
        }

        tracing::debug!(requested = ids.len(), found = found.len(), "Looked up members");

        Ok(ids.iter().map(|id| found.get(id).cloned()).collect())
    }
}
