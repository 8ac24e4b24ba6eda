//! Application events
//!
//! Session and challenge activity is published on an [`EventBus`] and relayed
//! to browsers over SSE. Events serialize with an internal `type` tag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

/// Default channel capacity for the service event bus
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TradartsEvent {
    /// User logged in, registered, updated the profile or logged out
    SessionChanged {
        logged_in: bool,
        user_id: Option<String>,
        timestamp: DateTime<Utc>,
    },

    /// Quiz run started
    ChallengeStarted {
        run_id: Uuid,
        challenge_id: String,
        time_limit: Option<u32>,
        timestamp: DateTime<Utc>,
    },

    /// Answer recorded
    ChallengeAnswered {
        run_id: Uuid,
        question_index: usize,
        correct: bool,
        score: u32,
        timestamp: DateTime<Utc>,
    },

    /// Countdown tick, once per second while a timed run is in progress
    ChallengeTimerTick {
        run_id: Uuid,
        time_left: u32,
        timestamp: DateTime<Utc>,
    },

    /// Countdown reached zero before the last answer
    ChallengeTimeExpired {
        run_id: Uuid,
        timestamp: DateTime<Utc>,
    },

    /// Run finished; emitted exactly once per run
    ChallengeCompleted {
        run_id: Uuid,
        challenge_id: String,
        score: u32,
        correct_answers: usize,
        timestamp: DateTime<Utc>,
    },

    /// Run torn down before completion
    ChallengeAbandoned {
        run_id: Uuid,
        timestamp: DateTime<Utc>,
    },
}

impl TradartsEvent {
    /// Event type name, used as the SSE event name
    pub fn event_type(&self) -> &'static str {
        match self {
            TradartsEvent::SessionChanged { .. } => "SessionChanged",
            TradartsEvent::ChallengeStarted { .. } => "ChallengeStarted",
            TradartsEvent::ChallengeAnswered { .. } => "ChallengeAnswered",
            TradartsEvent::ChallengeTimerTick { .. } => "ChallengeTimerTick",
            TradartsEvent::ChallengeTimeExpired { .. } => "ChallengeTimeExpired",
            TradartsEvent::ChallengeCompleted { .. } => "ChallengeCompleted",
            TradartsEvent::ChallengeAbandoned { .. } => "ChallengeAbandoned",
        }
    }
}

/// Broadcast bus for [`TradartsEvent`]s
///
/// Publishing never blocks; slow subscribers observe `Lagged` and skip ahead.
/// Dropped receivers unsubscribe automatically.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<TradartsEvent>,
    capacity: usize,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx, capacity }
    }

    /// Receive every event emitted after this call
    pub fn subscribe(&self) -> broadcast::Receiver<TradartsEvent> {
        self.tx.subscribe()
    }

    /// Emit to all subscribers
    ///
    /// Returns the number of receivers, or an error when nobody is listening.
    #[allow(clippy::result_large_err)]
    pub fn emit(
        &self,
        event: TradartsEvent,
    ) -> Result<usize, broadcast::error::SendError<TradartsEvent>> {
        self.tx.send(event)
    }

    /// Emit, ignoring the no-subscriber case
    pub fn emit_lossy(&self, event: TradartsEvent) {
        let _ = self.tx.send(event);
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abandoned() -> TradartsEvent {
        TradartsEvent::ChallengeAbandoned {
            run_id: Uuid::new_v4(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_eventbus_new() {
        let bus = EventBus::new(16);
        assert_eq!(bus.capacity(), 16);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_emit_without_subscribers_fails() {
        let bus = EventBus::new(4);
        assert!(bus.emit(abandoned()).is_err());
        bus.emit_lossy(abandoned());
    }

    #[test]
    fn test_multiple_subscribers_receive_event() {
        let bus = EventBus::new(8);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 2);

        let sent = bus
            .emit(TradartsEvent::SessionChanged {
                logged_in: true,
                user_id: Some("42".to_string()),
                timestamp: Utc::now(),
            })
            .unwrap();
        assert_eq!(sent, 2);

        assert_eq!(rx1.try_recv().unwrap().event_type(), "SessionChanged");
        assert_eq!(rx2.try_recv().unwrap().event_type(), "SessionChanged");
    }

    #[test]
    fn test_emit_lossy_on_full_channel() {
        let bus = EventBus::new(2);
        let mut rx = bus.subscribe();
        for _ in 0..5 {
            bus.emit_lossy(abandoned());
        }
        assert!(matches!(
            rx.try_recv(),
            Err(broadcast::error::TryRecvError::Lagged(3))
        ));
    }

    #[test]
    fn test_serialized_type_tag() {
        let event = TradartsEvent::ChallengeCompleted {
            run_id: Uuid::nil(),
            challenge_id: "angklung-quiz".to_string(),
            score: 90,
            correct_answers: 3,
            timestamp: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "ChallengeCompleted");
        assert_eq!(json["score"], 90);
        assert_eq!(json["challenge_id"], "angklung-quiz");
    }
}
