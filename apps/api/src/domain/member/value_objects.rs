use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of an enrolled member
///
/// Identifiers are assigned by the member registry; the team domain never
/// interprets their contents, it only compares them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    /// Wraps a registry identifier
    ///
    /// # Example
    /// ```
    /// use teamwork_api::domain::member::MemberId;
    ///
    /// let id = MemberId::new("u1");
    /// assert_eq!(id.as_str(), "u1");
    /// ```
    pub fn new(id: impl Into<String>) -> Self {
        MemberId(id.into())
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MemberId {
    fn from(id: &str) -> Self {
        MemberId::new(id)
    }
}

impl From<String> for MemberId {
    fn from(id: String) -> Self {
        MemberId(id)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registration status of a member
///
/// Only `Enrolled` members may be placed in a team or a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "member_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    /// Currently enrolled
    Enrolled,
    /// Temporarily suspended
    Suspended,
    /// Left the program
    Withdrawn,
}

impl MemberStatus {
    /// Whether the member may join teams and pairs
    pub fn is_enrolled(&self) -> bool {
        matches!(self, MemberStatus::Enrolled)
    }
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberStatus::Enrolled => write!(f, "enrolled"),
            MemberStatus::Suspended => write!(f, "suspended"),
            MemberStatus::Withdrawn => write!(f, "withdrawn"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_ids_compare_by_value() {
        assert_eq!(MemberId::new("u1"), MemberId::from("u1"));
        assert_ne!(MemberId::new("u1"), MemberId::new("u2"));
    }

    #[test]
    fn member_ids_order_lexically() {
        let mut ids = vec![MemberId::new("u3"), MemberId::new("u1"), MemberId::new("u2")];
        ids.sort();

        assert_eq!(ids, vec![MemberId::new("u1"), MemberId::new("u2"), MemberId::new("u3")]);
    }

    #[test]
    fn only_enrolled_status_is_enrolled() {
        assert!(MemberStatus::Enrolled.is_enrolled());
        assert!(!MemberStatus::Suspended.is_enrolled());
        assert!(!MemberStatus::Withdrawn.is_enrolled());
    }

    #[test]
    fn status_display() {
        assert_eq!(MemberStatus::Enrolled.to_string(), "enrolled");
        assert_eq!(MemberStatus::Suspended.to_string(), "suspended");
        assert_eq!(MemberStatus::Withdrawn.to_string(), "withdrawn");
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&MemberStatus::Withdrawn).unwrap();
        assert_eq!(json, "\"withdrawn\"");
    }
}
