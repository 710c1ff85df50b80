use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::records::{MemberRecord, PairRecord, TeamRecord};
use crate::domain::repositories::{RepositoryError, TeamRepository};
use crate::domain::team::{Team, TeamId, TeamName};

const TEAM_NAME_CONSTRAINT: &str = "teams_name_key";

/// PostgreSQL implementation of TeamRepository
///
/// A team is spread over `teams`, `team_members`, `pairs` and
/// `pair_members`. Saving replaces the member and pair rows inside one
/// transaction.
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load(&self, row: PgRow) -> Result<Team, RepositoryError> {
        let id: Uuid = row.try_get("id").map_err(storage("read team id"))?;
        let name: String = row.try_get("name").map_err(storage("read team name"))?;

        let members = sqlx::query(
            r#"
            SELECT member_id, name
            FROM team_members
            WHERE team_id = $1
            ORDER BY position
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(storage("load team members"))?
        .into_iter()
        .map(|r| -> Result<MemberRecord, sqlx::Error> {
            Ok(MemberRecord {
                id: r.try_get("member_id")?,
                name: r.try_get("name")?,
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(storage("read team members"))?;

        let pair_rows = sqlx::query(
            r#"
            SELECT p.name AS pair_name, pm.member_id
            FROM pairs p
            JOIN pair_members pm ON pm.team_id = p.team_id AND pm.pair_name = p.name
            WHERE p.team_id = $1
            ORDER BY p.position, pm.position
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(storage("load pairs"))?;

        let mut pairs: Vec<PairRecord> = Vec::new();
        for row in pair_rows {
            let pair_name: String = row.try_get("pair_name").map_err(storage("read pair name"))?;
            let member_id: String = row.try_get("member_id").map_err(storage("read pair member"))?;

            match pairs.last_mut() {
                Some(pair) if pair.name == pair_name => pair.member_ids.push(member_id),
                _ => pairs.push(PairRecord {
                    name: pair_name,
                    member_ids: vec![member_id],
                }),
            }
        }

        Team::try_from(TeamRecord {
            id: id.to_string(),
            name,
            members,
            pairs,
        })
    }
}

fn storage(context: &'static str) -> impl Fn(sqlx::Error) -> RepositoryError {
    move |e| RepositoryError::Storage(format!("Failed to {}: {}", context, e))
}

// The name constraint is the authoritative uniqueness check; anything else
// is a plain storage failure.
fn map_write_error(err: sqlx::Error, name: &TeamName) -> RepositoryError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() && db.constraint() == Some(TEAM_NAME_CONSTRAINT) {
            return RepositoryError::DuplicateTeamName(name.to_string());
        }
    }
    RepositoryError::Storage(format!("Failed to save team: {}", err))
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn save(&self, team: &Team) -> Result<(), RepositoryError> {
        let team_id = team.id().as_uuid();
        let mut tx = self.pool.begin().await.map_err(storage("begin transaction"))?;

        sqlx::query(
            r#"
            INSERT INTO teams (id, name)
            VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name
            "#,
        )
        .bind(team_id)
        .bind(team.name().as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, team.name()))?;

        sqlx::query("DELETE FROM pair_members WHERE team_id = $1")
            .bind(team_id)
            .execute(&mut *tx)
            .await
            .map_err(storage("clear pair members"))?;
        sqlx::query("DELETE FROM pairs WHERE team_id = $1")
            .bind(team_id)
            .execute(&mut *tx)
            .await
            .map_err(storage("clear pairs"))?;
        sqlx::query("DELETE FROM team_members WHERE team_id = $1")
            .bind(team_id)
            .execute(&mut *tx)
            .await
            .map_err(storage("clear team members"))?;

        for (position, member) in team.members().iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO team_members (team_id, member_id, name, position)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(team_id)
            .bind(member.id().as_str())
            .bind(member.name())
            .bind(position as i32)
            .execute(&mut *tx)
            .await
            .map_err(storage("insert team member"))?;
        }

        for (position, pair) in team.pairs().iter().enumerate() {
            sqlx::query("INSERT INTO pairs (team_id, name, position) VALUES ($1, $2, $3)")
                .bind(team_id)
                .bind(pair.name().as_str())
                .bind(position as i32)
                .execute(&mut *tx)
                .await
                .map_err(storage("insert pair"))?;

            for (member_position, member_id) in pair.member_ids().iter().enumerate() {
                sqlx::query(
                    r#"
                    INSERT INTO pair_members (team_id, pair_name, member_id, position)
                    VALUES ($1, $2, $3, $4)
                    "#,
                )
                .bind(team_id)
                .bind(pair.name().as_str())
                .bind(member_id.as_str())
                .bind(member_position as i32)
                .execute(&mut *tx)
                .await
                .map_err(storage("insert pair member"))?;
            }
        }

        tx.commit().await.map_err(storage("commit team"))?;

        tracing::debug!(
            team_id = %team.id(),
            members = team.members().len(),
            pairs = team.pairs().len(),
            "Saved team"
        );
        Ok(())
    }

    async fn find_by_id(&self, id: &TeamId) -> Result<Option<Team>, RepositoryError> {
        let row = sqlx::query("SELECT id, name FROM teams WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(storage("find team by id"))?;

        match row {
            Some(row) => self.load(row).await.map(Some),
            None => Ok(None),
        }
    }

    async fn find_by_name(&self, name: &TeamName) -> Result<Option<Team>, RepositoryError> {
        let row = sqlx::query("SELECT id, name FROM teams WHERE name = $1")
            .bind(name.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(storage("find team by name"))?;

        match row {
            Some(row) => self.load(row).await.map(Some),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<Team>, RepositoryError> {
        let rows = sqlx::query("SELECT id, name FROM teams ORDER BY created_at, name")
            .fetch_all(&self.pool)
            .await
            .map_err(storage("list teams"))?;

        let mut teams = Vec::with_capacity(rows.len());
        for row in rows {
            teams.push(self.load(row).await?);
        }

        Ok(teams)
    }
}
