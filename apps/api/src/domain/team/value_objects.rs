use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::errors::ValidationError;

/// Globally unique identifier of a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(Uuid);

impl TeamId {
    const FIELD: &'static str = "team_id";
    const HYPHENATED_LEN: usize = 36;

    /// Generates a fresh random identifier
    pub fn generate() -> Self {
        TeamId(Uuid::new_v4())
    }

    /// Parses a stored identifier
    ///
    /// Blank input is reported as `Required`; anything that is not a
    /// hyphenated UUID is reported as `Malformed`.
    ///
    /// # Example
    /// ```
    /// use teamwork_api::domain::team::TeamId;
    ///
    /// assert!(TeamId::parse("4b1a6f1e-0c4c-4f6e-9d8a-3f1f2a9c7b10").is_ok());
    /// assert!(TeamId::parse("team-1").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.trim().is_empty() {
            return Err(ValidationError::Required {
                field: Self::FIELD,
                value: raw.to_string(),
            });
        }

        let malformed = || ValidationError::Malformed {
            field: Self::FIELD,
            value: raw.to_string(),
            expected: "a UUID",
        };

        if raw.len() != Self::HYPHENATED_LEN {
            return Err(malformed());
        }

        Uuid::parse_str(raw).map(TeamId).map_err(|_| malformed())
    }

    /// Returns the underlying UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Team name value object
///
/// # Invariants
/// - 1 to 3 printable characters after trimming surrounding whitespace
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TeamName(String);

impl TeamName {
    const FIELD: &'static str = "team_name";

    /// Maximum number of characters in a team name
    pub const MAX_LENGTH: usize = 3;

    /// Creates a new TeamName
    ///
    /// # Returns
    /// * `Ok(TeamName)` - Trimmed, valid name
    /// * `Err(ValidationError)` - `Required` when blank, `TooLong` when over
    ///   three characters, `Malformed` when it holds control characters
    ///
    /// # Example
    /// ```
    /// use teamwork_api::domain::team::TeamName;
    ///
    /// let name = TeamName::new(" ABC ").expect("valid name");
    /// assert_eq!(name.as_str(), "ABC");
    /// assert!(TeamName::new("ABCD").is_err());
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = raw.as_ref();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Required {
                field: Self::FIELD,
                value: raw.to_string(),
            });
        }

        let length = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(ValidationError::TooLong {
                field: Self::FIELD,
                value: raw.to_string(),
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        if trimmed.chars().any(char::is_control) {
            return Err(ValidationError::Malformed {
                field: Self::FIELD,
                value: raw.to_string(),
                expected: "printable characters",
            });
        }

        Ok(TeamName(trimmed.to_string()))
    }

    /// Returns the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TeamName {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        TeamName::new(raw)
    }
}

impl From<TeamName> for String {
    fn from(name: TeamName) -> Self {
        name.0
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pair name value object: exactly one uppercase Latin letter
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PairName(String);

impl PairName {
    const FIELD: &'static str = "pair_name";

    /// Creates a new PairName
    ///
    /// Length is checked before format, so `"AB"` reports `WrongLength`
    /// while `"a"` reports `Malformed`.
    ///
    /// # Example
    /// ```
    /// use teamwork_api::domain::team::PairName;
    ///
    /// assert_eq!(PairName::new("A").unwrap().as_str(), "A");
    /// assert!(PairName::new("a").is_err());
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = raw.as_ref();
        let mut chars = raw.chars();

        let letter = match (chars.next(), chars.next()) {
            (Some(letter), None) => letter,
            _ => {
                return Err(ValidationError::WrongLength {
                    field: Self::FIELD,
                    value: raw.to_string(),
                    expected: 1,
                    actual: raw.chars().count(),
                })
            }
        };

        if !letter.is_ascii_uppercase() {
            return Err(ValidationError::Malformed {
                field: Self::FIELD,
                value: raw.to_string(),
                expected: "one uppercase letter A-Z",
            });
        }

        Ok(PairName(raw.to_string()))
    }

    /// Returns the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PairName {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        PairName::new(raw)
    }
}

impl From<PairName> for String {
    fn from(name: PairName) -> Self {
        name.0
    }
}

impl fmt::Display for PairName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
