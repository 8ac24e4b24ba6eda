//! Server-Sent Events endpoint

use axum::{
    extract::State,
    response::sse::{Event, Sse},
};
use futures::stream::Stream;
use std::convert::Infallible;

use crate::AppState;

/// GET /api/events/stream
///
/// Connection status first, then session and challenge events as they happen.
pub async fn event_stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    tradarts_common::sse::event_sse_stream(&state.events, "tradarts-web")
}
