// Infrastructure layer module
// Contains database adapters and external service integrations
// Follows Hexagonal Architecture

pub mod events;
pub mod repositories;
