//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the publish/subscribe hub for [`BatchEvent`]s. It is
//! shared via `Arc<EventBus>` between the batch coordinator (publisher)
//! and the streaming endpoint (subscribers).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// BatchEvent
// ---------------------------------------------------------------------------

/// Progress of one pose request or of the batch as a whole.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BatchEventKind {
    /// A pose finished and its image was stored.
    PoseCompleted { pose_id: String, item_id: Uuid },
    /// A pose exhausted its attempts or hit an unrecoverable error.
    PoseFailed { pose_id: String, error: String },
    /// All poses of the batch reached a terminal state.
    BatchCompleted { succeeded: usize, failed: usize },
}

/// A progress event emitted during batch generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEvent {
    pub batch_id: Uuid,
    pub project_id: Uuid,
    #[serde(flatten)]
    pub kind: BatchEventKind,
    /// When the event was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl BatchEvent {
    pub fn new(batch_id: Uuid, project_id: Uuid, kind: BatchEventKind) -> Self {
        Self {
            batch_id,
            project_id,
            kind,
            timestamp: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`BatchEvent`].
pub struct EventBus {
    sender: broadcast::Sender<BatchEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped;
    /// progress is also recorded in the batch registry, so nothing is lost.
    pub fn publish(&self, event: BatchEvent) {
        // Ignore the SendError, it only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all future events.
    pub fn subscribe(&self) -> broadcast::Receiver<BatchEvent> {
        self.sender.subscribe()
    }

    /// Number of active subscribers.
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pose_completed(batch_id: Uuid) -> BatchEvent {
        BatchEvent::new(
            batch_id,
            Uuid::new_v4(),
            BatchEventKind::PoseCompleted {
                pose_id: "A1".to_string(),
                item_id: Uuid::new_v4(),
            },
        )
    }

    #[tokio::test]
    async fn subscriber_receives_published_event() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        let batch_id = Uuid::new_v4();
        bus.publish(pose_completed(batch_id));

        let event = rx.recv().await.expect("event");
        assert_eq!(event.batch_id, batch_id);
        assert!(matches!(event.kind, BatchEventKind::PoseCompleted { .. }));
    }

    #[tokio::test]
    async fn every_subscriber_sees_every_event() {
        let bus = EventBus::default();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(pose_completed(Uuid::new_v4()));

        assert!(rx1.recv().await.is_ok());
        assert!(rx2.recv().await.is_ok());
    }

    #[tokio::test]
    async fn publish_without_subscribers_does_not_panic() {
        let bus = EventBus::default();
        bus.publish(pose_completed(Uuid::new_v4()));
        assert_eq!(bus.receiver_count(), 0);
    }

    #[test]
    fn events_serialize_with_flattened_kind() {
        let event = BatchEvent::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            BatchEventKind::BatchCompleted { succeeded: 3, failed: 1 },
        );
        let json = serde_json::to_value(&event).expect("serialize");
        assert_eq!(json["type"], "batch_completed");
        assert_eq!(json["succeeded"], 3);
        assert_eq!(json["failed"], 1);
    }
}
