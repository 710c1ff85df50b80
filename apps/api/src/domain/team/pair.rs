use serde::Serialize;
use std::collections::HashSet;

use super::value_objects::PairName;
use crate::domain::errors::DomainError;
use crate::domain::member::MemberId;

/// A named sub-group of two or three team members
///
/// Pairs are compared by name only; uniqueness of names within a team is
/// enforced by the owning [`Team`](super::Team).
#[derive(Debug, Clone, Serialize)]
pub struct Pair {
    name: PairName,
    member_ids: Vec<MemberId>,
}

impl Pair {
    /// Smallest allowed pair
    pub const MIN_MEMBERS: usize = 2;
    /// Largest allowed pair
    pub const MAX_MEMBERS: usize = 3;

    /// Creates a pair, checking its size and that no member repeats
    pub fn new(name: PairName, member_ids: Vec<MemberId>) -> Result<Self, DomainError> {
        if !Self::is_valid_size(member_ids.len()) {
            return Err(DomainError::InvalidPairSize {
                actual: member_ids.len(),
            });
        }

        if has_duplicates(&member_ids) {
            return Err(DomainError::DuplicateMember);
        }

        Ok(Self { name, member_ids })
    }

    pub(crate) fn is_valid_size(count: usize) -> bool {
        (Self::MIN_MEMBERS..=Self::MAX_MEMBERS).contains(&count)
    }

    pub fn name(&self) -> &PairName {
        &self.name
    }

    pub fn member_ids(&self) -> &[MemberId] {
        &self.member_ids
    }

    pub fn contains(&self, id: &MemberId) -> bool {
        self.member_ids.contains(id)
    }
}

impl PartialEq for Pair {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Pair {}

pub(crate) fn has_duplicates(ids: &[MemberId]) -> bool {
    let mut seen = HashSet::with_capacity(ids.len());
    !ids.iter().all(|id| seen.insert(id))
}
