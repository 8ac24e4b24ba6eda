//! tradarts-web library - traditional-arts catalog service
//!
//! Serves the static catalog with search and filters, a mock account session
//! and timed challenge quizzes over HTTP/JSON.

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tradarts_common::catalog::Catalog;
use tradarts_common::events::EventBus;

pub mod api;
pub mod challenge;
pub mod error;
pub mod session;

use challenge::ChallengeRuns;
use session::SessionService;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: &'static Catalog,
    pub session: Arc<SessionService>,
    pub runs: Arc<ChallengeRuns>,
    pub events: EventBus,
}

impl AppState {
    /// State over the built-in catalog; `session` should already be restored
    pub fn new(session: Arc<SessionService>, events: EventBus) -> Self {
        Self {
            catalog: Catalog::builtin(),
            session,
            runs: Arc::new(ChallengeRuns::new(events.clone())),
            events,
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post, put};

    let catalog = Router::new()
        .route("/api/instruments", get(api::catalog::list_instruments))
        .route("/api/instruments/regions", get(api::catalog::instrument_regions))
        .route("/api/instruments/:id", get(api::catalog::get_instrument))
        .route("/api/tutorials", get(api::catalog::list_tutorials))
        .route("/api/tutorials/categories", get(api::catalog::tutorial_categories))
        .route("/api/tutorials/:id", get(api::catalog::get_tutorial))
        .route("/api/songs", get(api::catalog::list_songs))
        .route("/api/songs/:id", get(api::catalog::get_song))
        .route("/api/challenges", get(api::catalog::list_challenges))
        .route("/api/challenges/:id", get(api::catalog::get_challenge))
        .route("/api/blog", get(api::catalog::list_blog_posts))
        .route("/api/events", get(api::catalog::list_events))
        .route("/api/faqs", get(api::catalog::list_faqs))
        .route("/api/community", get(api::catalog::list_community_posts))
        .route("/api/achievements", get(api::catalog::list_achievements))
        .route("/api/search", get(api::search));

    let session = Router::new()
        .route("/api/session", get(api::session::get_session))
        .route("/api/session/login", post(api::session::login))
        .route("/api/session/register", post(api::session::register))
        .route("/api/session/logout", post(api::session::logout))
        .route("/api/session/profile", put(api::session::update_profile));

    let runs = Router::new()
        .route("/api/challenges/completed", get(api::runs::completed_challenges))
        .route("/api/challenges/:id/runs", post(api::runs::create_run))
        .route(
            "/api/runs/:run_id",
            get(api::runs::get_run).delete(api::runs::abandon_run),
        )
        .route("/api/runs/:run_id/start", post(api::runs::start_run))
        .route("/api/runs/:run_id/answer", post(api::runs::answer_run));

    let public = Router::new()
        .route("/api/buildinfo", get(api::get_build_info))
        .route("/api/events/stream", get(api::event_stream))
        .merge(api::health_routes());

    Router::new()
        .merge(catalog)
        .merge(session)
        .merge(runs)
        .merge(public)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
