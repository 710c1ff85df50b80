use async_trait::async_trait;

use crate::application::publisher::EventPublisher;
use crate::domain::team::TeamEvent;

/// Publishes domain events to the application log
///
/// Each event is emitted as a structured `tracing` record carrying its
/// kind, team and JSON payload.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventPublisher;

#[async_trait]
impl EventPublisher for TracingEventPublisher {
    async fn publish(&self, events: Vec<TeamEvent>) {
        for event in events {
            match serde_json::to_string(&event) {
                Ok(payload) => tracing::info!(
                    event = event.kind(),
                    team_id = %event.team_id(),
                    occurred_at = %event.occurred_at(),
                    %payload,
                    "Domain event"
                ),
                Err(e) => tracing::error!(
                    event = event.kind(),
                    error = %e,
                    "Failed to serialize domain event"
                ),
            }
        }
    }
}

