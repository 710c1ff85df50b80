use super::events::TeamEvent;
use super::members::{TeamMember, TeamMembers};
use super::pair::{has_duplicates, Pair};
use super::value_objects::{PairName, TeamId, TeamName};
use crate::domain::errors::{DomainError, TeamError};
use crate::domain::member::MemberId;

/// A pair that has been requested but not yet confirmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingPairFormation {
    member_ids: Vec<MemberId>,
    pair_name: PairName,
}

impl PendingPairFormation {
    pub fn member_ids(&self) -> &[MemberId] {
        &self.member_ids
    }

    pub fn pair_name(&self) -> &PairName {
        &self.pair_name
    }

    fn matches(&self, approved: &[MemberId]) -> bool {
        let mut requested = self.member_ids.clone();
        let mut approved = approved.to_vec();
        requested.sort();
        approved.sort();
        requested == approved
    }
}

/// Team aggregate root
///
/// Owns a fixed member list and the pairs formed within it. Pairs are
/// formed in two steps: a request records a pending formation, and a
/// confirmation with the same members commits it.
///
/// # Invariants
/// - At least three members, no duplicate member ids
/// - Every pair has 2 or 3 members, all of them team members
/// - Pair names are unique within the team
/// - At most one pending pair formation
///
/// # Example
/// ```
/// use teamwork_api::domain::member::MemberId;
/// use teamwork_api::domain::team::{PairName, Team, TeamMember, TeamName};
///
/// let mut team = Team::create(
///     TeamName::new("ABC").unwrap(),
///     vec![
///         TeamMember::new("u1", "User 1"),
///         TeamMember::new("u2", "User 2"),
///         TeamMember::new("u3", "User 3"),
///     ],
/// )
/// .expect("valid team");
///
/// team.request_pair_formation(
///     vec![MemberId::new("u1"), MemberId::new("u2")],
///     PairName::new("A").unwrap(),
/// )
/// .expect("valid request");
/// team.confirm_pair_formation(&[MemberId::new("u2"), MemberId::new("u1")])
///     .expect("same members");
///
/// assert_eq!(team.pairs().len(), 1);
/// assert_eq!(team.events().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Team {
    id: TeamId,
    name: TeamName,
    members: TeamMembers,
    pairs: Vec<Pair>,
    pending_formation: Option<PendingPairFormation>,
    events: Vec<TeamEvent>,
}

impl Team {
    /// Creates a new Team aggregate
    ///
    /// # Returns
    /// * `Ok(Team)` - New team with a fresh id and a `TeamCreated` event
    /// * `Err(DomainError)` - If the member list violates an invariant
    pub fn create(name: TeamName, members: Vec<TeamMember>) -> Result<Self, DomainError> {
        let members = TeamMembers::new(members)?;

        let mut team = Self::assemble(TeamId::generate(), name, members);
        team.events.push(TeamEvent::team_created(
            team.id,
            &team.name,
            team.members.member_ids(),
        ));

        Ok(team)
    }

    /// Reconstructs a Team from stored state
    ///
    /// The id is validated before the members. No event is recorded.
    pub fn rebuild(id: &str, name: TeamName, members: Vec<TeamMember>) -> Result<Self, TeamError> {
        let id = TeamId::parse(id)?;
        let members = TeamMembers::new(members)?;

        Ok(Self::assemble(id, name, members))
    }

    /// Restores committed pairs onto a rebuilt team
    ///
    /// Each pair is checked against the team's members and against the
    /// names already present.
    pub fn with_pairs(mut self, pairs: Vec<Pair>) -> Result<Self, DomainError> {
        for pair in pairs {
            self.ensure_team_members(pair.member_ids())?;
            self.ensure_unused_pair_name(pair.name())?;
            self.pairs.push(pair);
        }

        Ok(self)
    }

    fn assemble(id: TeamId, name: TeamName, members: TeamMembers) -> Self {
        Self {
            id,
            name,
            members,
            pairs: Vec::new(),
            pending_formation: None,
            events: Vec::new(),
        }
    }

    /// Records a request to form a pair
    ///
    /// # Business Rules
    /// - Every member must belong to the team
    /// - The pair must have 2 or 3 members
    /// - No member may be listed twice
    /// - The pair name must not be taken by a committed pair
    ///
    /// A successful request replaces any earlier pending request and never
    /// touches the committed pairs.
    pub fn request_pair_formation(
        &mut self,
        member_ids: Vec<MemberId>,
        pair_name: PairName,
    ) -> Result<(), DomainError> {
        self.ensure_team_members(&member_ids)?;

        if !Pair::is_valid_size(member_ids.len()) {
            return Err(DomainError::InvalidPairSize {
                actual: member_ids.len(),
            });
        }

        if has_duplicates(&member_ids) {
            return Err(DomainError::DuplicateMember);
        }

        self.ensure_unused_pair_name(&pair_name)?;

        self.events.push(TeamEvent::pair_formation_requested(
            self.id,
            pair_name.clone(),
            member_ids.clone(),
        ));
        self.pending_formation = Some(PendingPairFormation {
            member_ids,
            pair_name,
        });

        Ok(())
    }

    /// Confirms the pending pair formation
    ///
    /// `approved` must hold the same members as the request, in any order.
    /// On mismatch the pending request is kept so the caller can retry.
    pub fn confirm_pair_formation(&mut self, approved: &[MemberId]) -> Result<Pair, DomainError> {
        let pending = self
            .pending_formation
            .as_ref()
            .ok_or(DomainError::NoPendingPairFormation)?;

        if !pending.matches(approved) {
            return Err(DomainError::PairFormationMismatch);
        }

        let pair = Pair::new(pending.pair_name.clone(), pending.member_ids.clone())?;

        self.pending_formation = None;
        self.events.push(TeamEvent::pair_formed(
            self.id,
            pair.name().clone(),
            pair.member_ids().to_vec(),
        ));
        self.pairs.push(pair.clone());

        Ok(pair)
    }

    fn ensure_team_members(&self, member_ids: &[MemberId]) -> Result<(), DomainError> {
        let mut outsiders: Vec<MemberId> = Vec::new();
        for id in member_ids {
            if !self.members.contains(id) && !outsiders.contains(id) {
                outsiders.push(id.clone());
            }
        }

        if outsiders.is_empty() {
            Ok(())
        } else {
            Err(DomainError::NonTeamMember {
                member_ids: outsiders,
            })
        }
    }

    fn ensure_unused_pair_name(&self, name: &PairName) -> Result<(), DomainError> {
        if self.pairs.iter().any(|p| p.name() == name) {
            return Err(DomainError::DuplicatePairName(name.to_string()));
        }
        Ok(())
    }

    // ===== Getters =====

    /// Returns the team's ID
    pub fn id(&self) -> TeamId {
        self.id
    }

    /// Returns the team's name
    pub fn name(&self) -> &TeamName {
        &self.name
    }

    /// Returns the members in their original order
    pub fn members(&self) -> &[TeamMember] {
        self.members.members()
    }

    /// Returns the member ids in their original order
    pub fn member_ids(&self) -> Vec<MemberId> {
        self.members.member_ids()
    }

    /// Whether the given id belongs to a team member
    pub fn has_member(&self, id: &MemberId) -> bool {
        self.members.contains(id)
    }

    /// Returns the committed pairs
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Returns the pending pair formation, if any
    pub fn pending_pair_formation(&self) -> Option<&PendingPairFormation> {
        self.pending_formation.as_ref()
    }

    /// Events recorded since the team was created or loaded
    pub fn events(&self) -> &[TeamEvent] {
        &self.events
    }

    /// Drains the event log
    ///
    /// Called by the application layer once the team has been saved.
    pub fn take_events(&mut self) -> Vec<TeamEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ValidationError;

    fn member(id: &str) -> TeamMember {
        TeamMember::new(id, format!("User {}", id))
    }

    fn ids(raw: &[&str]) -> Vec<MemberId> {
        raw.iter().map(|id| MemberId::new(*id)).collect()
    }

    fn pair_name(raw: &str) -> PairName {
        PairName::new(raw).unwrap()
    }

    fn team() -> Team {
        Team::create(
            TeamName::new("ABC").unwrap(),
            vec![member("u1"), member("u2"), member("u3")],
        )
        .unwrap()
    }

    fn team_of_four() -> Team {
        Team::create(
            TeamName::new("T4").unwrap(),
            vec![member("u1"), member("u2"), member("u3"), member("u4")],
        )
        .unwrap()
    }

    #[test]
    fn create_team_with_three_members() {
        let team = team();

        assert_eq!(team.name().as_str(), "ABC");
        assert_eq!(team.members().len(), 3);
        assert_eq!(team.member_ids(), ids(&["u1", "u2", "u3"]));
        assert!(team.pairs().is_empty());
        assert!(team.pending_pair_formation().is_none());
    }

    #[test]
    fn create_team_records_created_event() {
        let team = team();

        assert_eq!(team.events().len(), 1);
        match &team.events()[0] {
            TeamEvent::TeamCreated {
                team_id,
                team_name,
                member_ids,
                ..
            } => {
                assert_eq!(*team_id, team.id());
                assert_eq!(team_name, "ABC");
                assert_eq!(member_ids, &ids(&["u1", "u2", "u3"]));
            }
            _ => panic!("Expected TeamCreated event"),
        }
    }

    #[test]
    fn create_team_with_too_few_members_fails() {
        for members in [vec![], vec![member("u1")], vec![member("u1"), member("u2")]] {
            let count = members.len();
            let result = Team::create(TeamName::new("ABC").unwrap(), members);

            assert_eq!(
                result.unwrap_err(),
                DomainError::InsufficientMemberCount { min: 3, actual: count }
            );
        }
    }

    #[test]
    fn create_team_with_duplicate_member_fails() {
        let result = Team::create(
            TeamName::new("ABC").unwrap(),
            vec![member("u1"), member("u2"), member("u3"), member("u1")],
        );

        assert_eq!(result.unwrap_err(), DomainError::DuplicateMember);
    }

    #[test]
    fn created_teams_get_distinct_ids() {
        assert_ne!(team().id(), team().id());
    }

    #[test]
    fn rebuild_keeps_id_and_records_nothing() {
        let original = team();

        let rebuilt = Team::rebuild(
            &original.id().to_string(),
            original.name().clone(),
            original.members().to_vec(),
        )
        .unwrap();

        assert_eq!(rebuilt.id(), original.id());
        assert_eq!(rebuilt.members(), original.members());
        assert!(rebuilt.events().is_empty());
    }

    #[test]
    fn rebuild_validates_id_before_members() {
        let name = TeamName::new("ABC").unwrap();

        let blank = Team::rebuild("", name.clone(), vec![]).unwrap_err();
        let malformed = Team::rebuild("team-1", name.clone(), vec![]).unwrap_err();

        assert!(matches!(
            blank,
            TeamError::Validation(ValidationError::Required { field: "team_id", .. })
        ));
        assert!(matches!(
            malformed,
            TeamError::Validation(ValidationError::Malformed { field: "team_id", .. })
        ));
    }

    #[test]
    fn rebuild_validates_members() {
        let id = TeamId::generate().to_string();

        let result = Team::rebuild(&id, TeamName::new("ABC").unwrap(), vec![member("u1")]);

        assert!(matches!(
            result,
            Err(TeamError::Domain(DomainError::InsufficientMemberCount { actual: 1, .. }))
        ));
    }

    #[test]
    fn with_pairs_restores_committed_pairs() {
        let id = TeamId::generate().to_string();
        let pair = Pair::new(pair_name("A"), ids(&["u1", "u2"])).unwrap();

        let team = Team::rebuild(&id, TeamName::new("ABC").unwrap(), team().members().to_vec())
            .unwrap()
            .with_pairs(vec![pair.clone()])
            .unwrap();

        assert_eq!(team.pairs(), &[pair]);
        assert!(team.events().is_empty());
    }

    #[test]
    fn with_pairs_rejects_outsiders_and_reused_names() {
        let outsider = Pair::new(pair_name("A"), ids(&["u1", "u9"])).unwrap();
        let first = Pair::new(pair_name("A"), ids(&["u1", "u2"])).unwrap();
        let second = Pair::new(pair_name("A"), ids(&["u2", "u3"])).unwrap();

        assert_eq!(
            team().with_pairs(vec![outsider]).unwrap_err(),
            DomainError::NonTeamMember { member_ids: ids(&["u9"]) }
        );
        assert_eq!(
            team().with_pairs(vec![first, second]).unwrap_err(),
            DomainError::DuplicatePairName("A".to_string())
        );
    }

    #[test]
    fn request_sets_pending_and_records_event() {
        let mut team = team();

        team.request_pair_formation(ids(&["u1", "u2"]), pair_name("A"))
            .unwrap();

        let pending = team.pending_pair_formation().unwrap();
        assert_eq!(pending.member_ids(), ids(&["u1", "u2"]).as_slice());
        assert_eq!(pending.pair_name().as_str(), "A");
        assert!(team.pairs().is_empty());
        assert_eq!(team.events().len(), 2);
        assert_eq!(team.events()[1].kind(), "pair_formation_requested");
        assert_eq!(team.events()[1].member_ids(), ids(&["u1", "u2"]).as_slice());
    }

    #[test]
    fn request_with_outsider_lists_offending_ids() {
        let mut team = team();

        let err = team
            .request_pair_formation(ids(&["u1", "x1", "x2"]), pair_name("A"))
            .unwrap_err();

        assert_eq!(err, DomainError::NonTeamMember { member_ids: ids(&["x1", "x2"]) });
        assert!(team.pending_pair_formation().is_none());
        assert!(team.pairs().is_empty());
        assert_eq!(team.events().len(), 1);
    }

    #[test]
    fn membership_is_checked_before_size() {
        let mut team = team();

        let err = team
            .request_pair_formation(ids(&["x1"]), pair_name("A"))
            .unwrap_err();

        assert!(matches!(err, DomainError::NonTeamMember { .. }));
    }

    #[test]
    fn request_size_must_be_two_or_three() {
        let mut team = team_of_four();

        for members in [vec![], vec!["u1"], vec!["u1", "u2", "u3", "u4"]] {
            let count = members.len();
            let err = team
                .request_pair_formation(ids(&members), pair_name("A"))
                .unwrap_err();
            assert_eq!(err, DomainError::InvalidPairSize { actual: count });
        }

        assert!(team
            .request_pair_formation(ids(&["u1", "u2", "u3"]), pair_name("A"))
            .is_ok());
    }

    #[test]
    fn request_with_repeated_member_fails_without_pending() {
        let mut team = team();

        let err = team
            .request_pair_formation(ids(&["u1", "u1"]), pair_name("A"))
            .unwrap_err();

        assert_eq!(err, DomainError::DuplicateMember);
        assert!(team.pending_pair_formation().is_none());
    }

    #[test]
    fn later_request_replaces_pending() {
        let mut team = team();

        team.request_pair_formation(ids(&["u1", "u2"]), pair_name("A"))
            .unwrap();
        team.request_pair_formation(ids(&["u2", "u3"]), pair_name("B"))
            .unwrap();

        let pending = team.pending_pair_formation().unwrap();
        assert_eq!(pending.member_ids(), ids(&["u2", "u3"]).as_slice());
        assert_eq!(pending.pair_name().as_str(), "B");
        assert!(team.confirm_pair_formation(&ids(&["u1", "u2"])).is_err());
    }

    #[test]
    fn confirm_in_any_order_commits_pair() {
        let mut team = team();
        team.request_pair_formation(ids(&["u1", "u2"]), pair_name("A"))
            .unwrap();

        let pair = team.confirm_pair_formation(&ids(&["u2", "u1"])).unwrap();

        assert_eq!(pair.name().as_str(), "A");
        assert_eq!(team.pairs().len(), 1);
        assert_eq!(team.pairs()[0].name().as_str(), "A");
        assert_eq!(team.pairs()[0].member_ids(), ids(&["u1", "u2"]).as_slice());
        assert!(team.pending_pair_formation().is_none());
    }

    #[test]
    fn confirm_records_pair_formed_event() {
        let mut team = team();
        team.request_pair_formation(ids(&["u1", "u2", "u3"]), pair_name("C"))
            .unwrap();

        team.confirm_pair_formation(&ids(&["u3", "u1", "u2"]))
            .unwrap();

        assert_eq!(team.events().len(), 3);
        match &team.events()[2] {
            TeamEvent::PairFormed {
                team_id,
                pair_name,
                member_ids,
                ..
            } => {
                assert_eq!(*team_id, team.id());
                assert_eq!(pair_name.as_str(), "C");
                assert_eq!(member_ids, &ids(&["u1", "u2", "u3"]));
            }
            _ => panic!("Expected PairFormed event"),
        }
    }

    #[test]
    fn confirm_without_request_fails() {
        let mut team = team();

        assert_eq!(
            team.confirm_pair_formation(&ids(&["u1", "u2"])).unwrap_err(),
            DomainError::NoPendingPairFormation
        );
        assert_eq!(team.events().len(), 1);
    }

    #[test]
    fn confirm_twice_fails_the_second_time() {
        let mut team = team();
        team.request_pair_formation(ids(&["u1", "u2"]), pair_name("A"))
            .unwrap();
        team.confirm_pair_formation(&ids(&["u1", "u2"])).unwrap();

        assert_eq!(
            team.confirm_pair_formation(&ids(&["u1", "u2"])).unwrap_err(),
            DomainError::NoPendingPairFormation
        );
        assert_eq!(team.pairs().len(), 1);
    }

    #[test]
    fn mismatched_confirm_keeps_pending_for_retry() {
        let mut team = team();
        team.request_pair_formation(ids(&["u1", "u2"]), pair_name("A"))
            .unwrap();

        for approved in [
            ids(&["u1", "u3"]),
            ids(&["u1"]),
            ids(&["u1", "u2", "u3"]),
            ids(&["u1", "u1"]),
            vec![],
        ] {
            assert_eq!(
                team.confirm_pair_formation(&approved).unwrap_err(),
                DomainError::PairFormationMismatch
            );
        }

        assert!(team.pairs().is_empty());
        assert_eq!(team.events().len(), 2);
        assert_eq!(
            team.pending_pair_formation().unwrap().member_ids(),
            ids(&["u1", "u2"]).as_slice()
        );

        assert!(team.confirm_pair_formation(&ids(&["u2", "u1"])).is_ok());
        assert_eq!(team.pairs().len(), 1);
    }

    #[test]
    fn pair_name_cannot_be_reused() {
        let mut team = team_of_four();
        team.request_pair_formation(ids(&["u1", "u2"]), pair_name("A"))
            .unwrap();
        team.confirm_pair_formation(&ids(&["u1", "u2"])).unwrap();

        let err = team
            .request_pair_formation(ids(&["u3", "u4"]), pair_name("A"))
            .unwrap_err();

        assert_eq!(err, DomainError::DuplicatePairName("A".to_string()));
        assert!(team.pending_pair_formation().is_none());
    }

    #[test]
    fn take_events_drains_the_log() {
        let mut team = team();
        team.request_pair_formation(ids(&["u1", "u2"]), pair_name("A"))
            .unwrap();

        let drained = team.take_events();

        assert_eq!(drained.len(), 2);
        assert!(team.events().is_empty());
    }

    #[test]
    fn caller_copies_do_not_alias_team_state() {
        let mut members = vec![member("u1"), member("u2"), member("u3")];
        let team = Team::create(TeamName::new("ABC").unwrap(), members.clone()).unwrap();

        members.push(member("u4"));
        let mut snapshot = team.members().to_vec();
        snapshot.clear();
        let mut member_ids = team.member_ids();
        member_ids.pop();

        assert_eq!(team.members().len(), 3);
        assert_eq!(team.member_ids().len(), 3);
    }
}
