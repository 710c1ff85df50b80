// Application layer
// Use cases load or construct a Team, apply one operation, save it and
// forward the recorded events. Collaborators are passed in explicitly.

pub mod create_team;
pub mod dto;
pub mod errors;
pub mod form_pair;
pub mod get_teams;
pub mod members;
pub mod publisher;

pub use create_team::{CreateTeamCommand, CreateTeamUseCase};
pub use dto::{PairDto, TeamDto, TeamMemberDto};
pub use errors::ApplicationError;
pub use form_pair::{FormPairCommand, FormPairUseCase};
pub use get_teams::GetTeamsUseCase;
pub use publisher::EventPublisher;
