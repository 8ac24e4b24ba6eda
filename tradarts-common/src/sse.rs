//! Server-Sent Events relay for the [`EventBus`]

use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::{Stream, StreamExt};
use std::convert::Infallible;
use std::time::Duration;
use tokio_stream::wrappers::BroadcastStream;
use tracing::{debug, info, warn};

use crate::events::{EventBus, TradartsEvent};

/// Keep-alive comment interval
pub const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(15);

/// Convert one bus event into an SSE frame named after its type
pub fn to_sse_event(event: &TradartsEvent) -> Option<Event> {
    match serde_json::to_string(event) {
        Ok(json) => Some(Event::default().event(event.event_type()).data(json)),
        Err(e) => {
            warn!("Failed to serialize event: {}", e);
            None
        }
    }
}

/// Stream bus events to one SSE client
///
/// The first frame is a `ConnectionStatus` event with data `connected`; after
/// that every bus event is forwarded. Lagged receivers skip the lost events.
pub fn event_sse_stream(
    bus: &EventBus,
    service_name: &'static str,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    info!("New SSE client connected to {} events", service_name);

    let events = BroadcastStream::new(bus.subscribe()).filter_map(|result| async move {
        match result {
            Ok(event) => {
                debug!("Broadcasting SSE event: {}", event.event_type());
                to_sse_event(&event).map(Ok)
            }
            Err(e) => {
                warn!("SSE stream error: {:?}", e);
                None
            }
        }
    });

    let stream = async_stream::stream! {
        yield Ok(Event::default().event("ConnectionStatus").data("connected"));

        futures::pin_mut!(events);
        while let Some(item) = events.next().await {
            yield item;
        }
    };

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(HEARTBEAT_INTERVAL)
            .text("heartbeat"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_to_sse_event_builds_frame() {
        let event = TradartsEvent::ChallengeTimerTick {
            run_id: Uuid::nil(),
            time_left: 12,
            timestamp: Utc::now(),
        };
        assert!(to_sse_event(&event).is_some());
    }

    #[tokio::test]
    async fn test_stream_subscribes_to_bus() {
        let bus = EventBus::new(8);
        let _sse = event_sse_stream(&bus, "tradarts-web");
        assert_eq!(bus.subscriber_count(), 1);
    }
}
