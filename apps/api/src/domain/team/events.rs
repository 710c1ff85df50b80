use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};

use super::value_objects::{PairName, TeamId, TeamName};
use crate::domain::member::MemberId;

/// Domain events that occur within the Team aggregate
///
/// Events are collected in the aggregate's log and forwarded to
/// notification after the aggregate has been saved. They are not part of
/// the persisted team state.
///
/// # Example
/// ```
/// use teamwork_api::domain::member::MemberId;
/// use teamwork_api::domain::team::events::TeamEvent;
/// use teamwork_api::domain::team::{TeamId, TeamName};
///
/// let team_id = TeamId::generate();
/// let event = TeamEvent::team_created(
///     team_id,
///     &TeamName::new("ABC").unwrap(),
///     vec![MemberId::new("u1"), MemberId::new("u2"), MemberId::new("u3")],
/// );
/// assert_eq!(event.team_id(), team_id);
/// assert_eq!(event.kind(), "team_created");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TeamEvent {
    /// Fired when a team is created
    TeamCreated {
        team_id: TeamId,
        team_name: String,
        member_ids: Vec<MemberId>,
        occurred_at: DateTime<Utc>,
    },
    /// Fired when members ask to form a pair
    PairFormationRequested {
        team_id: TeamId,
        pair_name: PairName,
        member_ids: Vec<MemberId>,
        occurred_at: DateTime<Utc>,
    },
    /// Fired when a requested pair is confirmed and committed
    PairFormed {
        team_id: TeamId,
        pair_name: PairName,
        member_ids: Vec<MemberId>,
        occurred_at: DateTime<Utc>,
    },
}

impl TeamEvent {
    pub fn team_created(team_id: TeamId, team_name: &TeamName, member_ids: Vec<MemberId>) -> Self {
        TeamEvent::TeamCreated {
            team_id,
            team_name: team_name.as_str().to_string(),
            member_ids,
            occurred_at: occurred_now(),
        }
    }

    pub fn pair_formation_requested(
        team_id: TeamId,
        pair_name: PairName,
        member_ids: Vec<MemberId>,
    ) -> Self {
        TeamEvent::PairFormationRequested {
            team_id,
            pair_name,
            member_ids,
            occurred_at: occurred_now(),
        }
    }

    pub fn pair_formed(team_id: TeamId, pair_name: PairName, member_ids: Vec<MemberId>) -> Self {
        TeamEvent::PairFormed {
            team_id,
            pair_name,
            member_ids,
            occurred_at: occurred_now(),
        }
    }

    /// Returns the team_id for this event
    pub fn team_id(&self) -> TeamId {
        match self {
            TeamEvent::TeamCreated { team_id, .. }
            | TeamEvent::PairFormationRequested { team_id, .. }
            | TeamEvent::PairFormed { team_id, .. } => *team_id,
        }
    }

    /// Returns when the event was recorded
    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            TeamEvent::TeamCreated { occurred_at, .. }
            | TeamEvent::PairFormationRequested { occurred_at, .. }
            | TeamEvent::PairFormed { occurred_at, .. } => *occurred_at,
        }
    }

    /// Returns the member ids the event refers to
    pub fn member_ids(&self) -> &[MemberId] {
        match self {
            TeamEvent::TeamCreated { member_ids, .. }
            | TeamEvent::PairFormationRequested { member_ids, .. }
            | TeamEvent::PairFormed { member_ids, .. } => member_ids,
        }
    }

    /// Kind tag, matching the serialized `type` field
    pub fn kind(&self) -> &'static str {
        match self {
            TeamEvent::TeamCreated { .. } => "team_created",
            TeamEvent::PairFormationRequested { .. } => "pair_formation_requested",
            TeamEvent::PairFormed { .. } => "pair_formed",
        }
    }
}

static LAST_OCCURRED_MICROS: AtomicI64 = AtomicI64::new(i64::MIN);

// Wall clock clamped so timestamps never go backwards within the process.
fn occurred_now() -> DateTime<Utc> {
    let now = Utc::now();
    let micros = now.timestamp_micros();
    let previous = LAST_OCCURRED_MICROS.fetch_max(micros, Ordering::SeqCst);

    DateTime::<Utc>::from_timestamp_micros(previous.max(micros)).unwrap_or(now)
}
