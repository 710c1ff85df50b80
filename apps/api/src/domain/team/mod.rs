// Team domain module
// Contains the team aggregate root, its value objects, pairs and domain events

#![allow(clippy::module_inception)]

pub mod events;
pub mod members;
pub mod pair;
pub mod team;
pub mod value_objects;

// Re-export main types for convenience
pub use events::TeamEvent;
pub use members::{TeamMember, TeamMembers};
pub use pair::Pair;
pub use team::{PendingPairFormation, Team};
pub use value_objects::{PairName, TeamId, TeamName};
