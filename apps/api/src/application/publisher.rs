use async_trait::async_trait;

use crate::domain::team::TeamEvent;

/// Forwards domain events after a successful save
///
/// Publishing is fire-and-forget: a team that has been saved stays saved
/// even if notification fails, so implementations report their own errors.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, events: Vec<TeamEvent>);
}
