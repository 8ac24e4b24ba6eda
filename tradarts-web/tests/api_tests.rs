//! Integration tests for the HTTP API
//!
//! Requests are driven straight into the router with `oneshot`; the session
//! uses an in-memory store and no simulated latency.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`
use tradarts_common::config::SessionTimings;
use tradarts_common::events::EventBus;
use tradarts_web::session::{MemorySessionStore, MockAuthenticator, SessionService};
use tradarts_web::{build_router, AppState};

/// Test helper: app with a restored, logged-out session
async fn setup_app() -> axum::Router {
    let events = EventBus::new(64);
    let session = SessionService::new(
        Arc::new(MockAuthenticator::new(SessionTimings::immediate())),
        Arc::new(MemorySessionStore::new()),
        events.clone(),
    );
    session.restore().await.unwrap();
    build_router(AppState::new(Arc::new(session), events))
}

fn test_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app.clone().oneshot(test_request("GET", uri)).await.unwrap();
    let status = response.status();
    (status, extract_json(response.into_body()).await)
}

fn ids(body: &Value) -> Vec<String> {
    body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Health / build info
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app().await;
    let (status, body) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "tradarts-web");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_buildinfo_endpoint() {
    let app = setup_app().await;
    let (status, body) = get_json(&app, "/api/buildinfo").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["git_hash"].is_string());
    assert!(body["build_profile"].is_string());
}

// =============================================================================
// Catalog listings
// =============================================================================

#[tokio::test]
async fn test_instruments_unfiltered() {
    let app = setup_app().await;
    let (status, body) = get_json(&app, "/api/instruments").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 8);
    assert_eq!(ids(&body)[0], "gamelan");
}

#[tokio::test]
async fn test_instruments_query_and_filters() {
    let app = setup_app().await;

    let (_, body) = get_json(&app, "/api/instruments?q=java").await;
    let found = ids(&body);
    assert!(found.contains(&"gamelan".to_string()));
    assert!(found.contains(&"angklung".to_string()));
    assert!(!found.contains(&"sasando".to_string()));

    let (_, body) = get_json(&app, "/api/instruments?region=Java&difficulty=Hard").await;
    assert_eq!(ids(&body), vec!["rebab"]);

    let (_, body) = get_json(&app, "/api/instruments?region=all&difficulty=all").await;
    assert_eq!(body["count"], 8);
}

#[tokio::test]
async fn test_unknown_difficulty_is_bad_request() {
    let app = setup_app().await;
    let (status, body) = get_json(&app, "/api/instruments?difficulty=brutal").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("brutal"));
}

#[tokio::test]
async fn test_instrument_regions_facet() {
    let app = setup_app().await;
    let (_, body) = get_json(&app, "/api/instruments/regions").await;

    let values = body["values"].as_array().unwrap();
    assert_eq!(values[0], "Java");
    assert_eq!(values.iter().filter(|v| *v == "Java").count(), 1);
}

#[tokio::test]
async fn test_instrument_detail_includes_tutorials() {
    let app = setup_app().await;
    let (status, body) = get_json(&app, "/api/instruments/gamelan").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["instrument"]["name"], "Gamelan");
    let tutorials: Vec<&str> = body["tutorials"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(tutorials, vec!["gamelan-basics", "gamelan-ensemble"]);
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let app = setup_app().await;
    for uri in [
        "/api/instruments/theremin",
        "/api/tutorials/nope",
        "/api/songs/nope",
        "/api/challenges/nope",
    ] {
        let (status, body) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn test_tutorial_detail_related() {
    let app = setup_app().await;
    let (_, body) = get_json(&app, "/api/tutorials/gamelan-basics").await;

    let related = body["related"].as_array().unwrap();
    assert!(related.len() <= 3);
    assert!(related.iter().all(|t| t["category"] == "Beginner"));
    assert!(related.iter().all(|t| t["id"] != "gamelan-basics"));
}

#[tokio::test]
async fn test_tutorial_category_filter_and_facet() {
    let app = setup_app().await;

    let (_, body) = get_json(&app, "/api/tutorials?category=Advanced").await;
    assert_eq!(ids(&body), vec!["sasando-technique", "rebab-technique"]);

    let (_, body) = get_json(&app, "/api/tutorials/categories").await;
    assert_eq!(body["values"], json!(["Beginner", "Advanced", "Intermediate"]));
}

#[tokio::test]
async fn test_challenge_filters() {
    let app = setup_app().await;

    let (_, body) = get_json(&app, "/api/challenges?type=performance").await;
    assert_eq!(ids(&body), vec!["gamelan-basics", "advanced-gamelan"]);

    let (_, body) = get_json(&app, "/api/challenges?difficulty=intermediate&type=quiz").await;
    assert_eq!(ids(&body), vec!["angklung-quiz"]);

    let (status, _) = get_json(&app, "/api/challenges?type=dance").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_songs_blog_events_faqs_community() {
    let app = setup_app().await;

    let (_, body) = get_json(&app, "/api/songs?region=Riau").await;
    assert_eq!(ids(&body), vec!["soleram"]);

    let (_, body) = get_json(&app, "/api/blog?category=Culture").await;
    assert_eq!(ids(&body), vec!["3"]);

    let (_, body) = get_json(&app, "/api/events?q=angklung").await;
    assert_eq!(ids(&body), vec!["3"]);

    let (_, body) = get_json(&app, "/api/faqs?category=Community").await;
    assert_eq!(body["count"], 2);

    let (_, body) = get_json(&app, "/api/community?q=sasando").await;
    assert_eq!(ids(&body), vec!["post-4"]);
}

#[tokio::test]
async fn test_achievements_points() {
    let app = setup_app().await;
    let (_, body) = get_json(&app, "/api/achievements").await;

    assert_eq!(body["achievements"].as_array().unwrap().len(), 3);
    assert_eq!(body["unlockedPoints"], 1500);
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_short_query_is_empty() {
    let app = setup_app().await;
    let (status, body) = get_json(&app, "/api/search?q=g").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"], json!([]));
}

#[tokio::test]
async fn test_search_capped_at_eight() {
    let app = setup_app().await;
    let (_, body) = get_json(&app, "/api/search?q=an").await;

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 8);
    assert_eq!(results[0]["type"], "instrument");
    assert_eq!(results[0]["url"], "/instruments/gamelan");
    assert_eq!(results[0]["description"], "Java • Medium");
}

// =============================================================================
// Session
// =============================================================================

#[tokio::test]
async fn test_session_starts_logged_out() {
    let app = setup_app().await;
    let (_, body) = get_json(&app, "/api/session").await;
    assert_eq!(body["status"], "loggedOut");
}

#[tokio::test]
async fn test_login_then_logout() {
    let app = setup_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/session/login",
            json!({"email": "ana@example.com", "password": "pw"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "loggedIn");
    assert_eq!(body["user"]["name"], "John Doe");
    assert_eq!(body["user"]["preferences"]["privacy"], "public");

    let (_, body) = get_json(&app, "/api/session").await;
    assert_eq!(body["user"]["email"], "ana@example.com");

    let response = app
        .clone()
        .oneshot(test_request("POST", "/api/session/logout"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (_, body) = get_json(&app, "/api/session").await;
    assert_eq!(body["status"], "loggedOut");
}

#[tokio::test]
async fn test_login_missing_password_is_bad_request() {
    let app = setup_app().await;
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/session/login",
            json!({"email": "ana@example.com"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "Email and password are required");
}

#[tokio::test]
async fn test_register_short_password() {
    let app = setup_app().await;
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/session/register",
            json!({
                "name": "Siti",
                "email": "siti@example.com",
                "phone": "+62 812 3456 789",
                "password": "12345"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "Password must be at least 6 characters");
}

#[tokio::test]
async fn test_profile_update_requires_session() {
    let app = setup_app().await;
    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/session/profile",
            json!({"name": "New Name"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "No user logged in");
}

#[tokio::test]
async fn test_register_then_update_profile() {
    let app = setup_app().await;
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/session/register",
            json!({
                "name": "Siti",
                "email": "siti@example.com",
                "phone": "+62 812 3456 789",
                "password": "secret"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/session/profile",
            json!({"name": "Siti Rahma", "preferences": {"notifications": false, "newsletter": true, "privacy": "friends"}}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["user"]["name"], "Siti Rahma");
    assert_eq!(body["user"]["email"], "siti@example.com");
    assert_eq!(body["user"]["phone"], "+62 812 3456 789");
    assert_eq!(body["user"]["preferences"]["privacy"], "friends");
}

// =============================================================================
// Challenge runs
// =============================================================================

async fn create_run(app: &axum::Router, challenge_id: &str) -> String {
    let response = app
        .clone()
        .oneshot(test_request(
            "POST",
            &format!("/api/challenges/{}/runs", challenge_id),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "notStarted");
    body["runId"].as_str().unwrap().to_string()
}

async fn answer(app: &axum::Router, run_id: &str, option: usize) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/runs/{}/answer", run_id),
            json!({ "option": option }),
        ))
        .await
        .unwrap();
    let status = response.status();
    (status, extract_json(response.into_body()).await)
}

#[tokio::test]
async fn test_quiz_run_full_flow() {
    let app = setup_app().await;
    let run_id = create_run(&app, "angklung-quiz").await;

    // Answering before start is a state conflict
    let (status, _) = answer(&app, &run_id, 0).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let response = app
        .clone()
        .oneshot(test_request("POST", &format!("/api/runs/{}/start", run_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "inProgress");
    assert_eq!(body["question"]["index"], 0);
    assert_eq!(body["question"]["options"][0], "Bronze");
    assert!(body["timeLeft"].is_null());

    let (status, _) = answer(&app, &run_id, 9).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Four right, one wrong: 4 × 150/5
    let mut last = Value::Null;
    for option in [0, 1, 2, 0, 2] {
        let (status, body) = answer(&app, &run_id, option).await;
        assert_eq!(status, StatusCode::OK);
        last = body;
    }
    assert_eq!(last["run"]["status"], "complete");
    assert_eq!(last["run"]["timedOut"], false);
    assert_eq!(last["run"]["score"], 120);
    assert_eq!(last["run"]["correctAnswers"], 4);

    let (status, _) = answer(&app, &run_id, 0).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, body) = get_json(&app, "/api/challenges/completed").await;
    assert_eq!(body["challenges"], json!(["angklung-quiz"]));
}

#[tokio::test]
async fn test_run_for_unknown_challenge() {
    let app = setup_app().await;
    let response = app
        .oneshot(test_request("POST", "/api/challenges/nope/runs"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_abandon_run() {
    let app = setup_app().await;
    let run_id = create_run(&app, "gamelan-basics").await;

    let response = app
        .clone()
        .oneshot(test_request("DELETE", &format!("/api/runs/{}", run_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let (status, _) = get_json(&app, &format!("/api/runs/{}", run_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
