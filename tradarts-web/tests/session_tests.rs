//! Session lifecycle against real and in-memory stores

use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tradarts_common::config::SessionTimings;
use tradarts_common::events::{EventBus, TradartsEvent};
use tradarts_common::models::{ProfileUpdate, User};
use tradarts_web::session::{
    Credentials, FileSessionStore, MemorySessionStore, MockAuthenticator, Registration,
    SessionError, SessionService, SessionState, SessionStore,
};

fn service_with(store: Arc<dyn SessionStore>, events: EventBus) -> SessionService {
    SessionService::new(
        Arc::new(MockAuthenticator::new(SessionTimings::immediate())),
        store,
        events,
    )
}

fn credentials(email: &str, password: &str) -> Credentials {
    Credentials {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_new_service_is_loading_until_restored() {
    let service = service_with(Arc::new(MemorySessionStore::new()), EventBus::new(8));
    assert!(service.state().await.is_loading());

    service.restore().await.unwrap();
    assert_eq!(service.state().await, SessionState::LoggedOut);
}

#[tokio::test]
async fn test_login_persists_and_logout_clears() {
    let store = Arc::new(MemorySessionStore::new());
    let service = service_with(store.clone(), EventBus::new(8));
    service.restore().await.unwrap();

    let user = service
        .login(credentials("ana@example.com", "pw"))
        .await
        .unwrap();

    let stored: User = serde_json::from_str(&store.snapshot().await.unwrap()).unwrap();
    assert_eq!(stored, user);

    service.logout().await.unwrap();
    assert_eq!(service.state().await, SessionState::LoggedOut);
    assert_eq!(store.snapshot().await, None);
}

#[tokio::test]
async fn test_failed_login_restores_previous_state() {
    let service = service_with(Arc::new(MemorySessionStore::new()), EventBus::new(8));
    service.restore().await.unwrap();

    let first = service
        .login(credentials("ana@example.com", "pw"))
        .await
        .unwrap();

    let err = service.login(credentials("", "pw")).await.unwrap_err();
    assert!(matches!(err, SessionError::MissingCredentials));
    assert_eq!(service.current_user().await, Some(first));
}

#[tokio::test]
async fn test_restore_from_file_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("user.json");

    {
        let service = service_with(Arc::new(FileSessionStore::new(&path)), EventBus::new(8));
        service.restore().await.unwrap();
        service
            .register(Registration {
                name: "Wayan".to_string(),
                email: "wayan@example.com".to_string(),
                phone: "0812-3456-789".to_string(),
                password: "gamelan".to_string(),
            })
            .await
            .unwrap();
    }
    assert!(path.exists());

    let service = service_with(Arc::new(FileSessionStore::new(&path)), EventBus::new(8));
    service.restore().await.unwrap();
    let user = service.current_user().await.unwrap();
    assert_eq!(user.name, "Wayan");
    assert_eq!(user.phone.as_deref(), Some("0812-3456-789"));
}

#[tokio::test]
async fn test_corrupt_record_is_discarded() {
    let store = Arc::new(MemorySessionStore::with_record("{not json"));
    let service = service_with(store.clone(), EventBus::new(8));

    service.restore().await.unwrap();

    assert_eq!(service.state().await, SessionState::LoggedOut);
    assert_eq!(store.snapshot().await, None);
}

#[tokio::test]
async fn test_corrupt_file_is_removed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("user.json");
    std::fs::write(&path, r#"{"id": 5}"#).unwrap();

    let service = service_with(Arc::new(FileSessionStore::new(&path)), EventBus::new(8));
    service.restore().await.unwrap();

    assert_eq!(service.state().await, SessionState::LoggedOut);
    assert!(!path.exists());
}

#[tokio::test]
async fn test_non_utf8_file_is_removed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("user.json");
    std::fs::write(&path, [0xff, 0xfe, 0x00, 0x7b]).unwrap();

    let service = service_with(Arc::new(FileSessionStore::new(&path)), EventBus::new(8));
    service.restore().await.unwrap();

    assert_eq!(service.state().await, SessionState::LoggedOut);
    assert!(!path.exists());
}

#[tokio::test]
async fn test_update_profile_merges_and_validates() {
    let store = Arc::new(MemorySessionStore::new());
    let service = service_with(store.clone(), EventBus::new(8));
    service.restore().await.unwrap();

    let err = service
        .update_profile(ProfileUpdate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, SessionError::NotLoggedIn));

    let original = service
        .login(credentials("ana@example.com", "pw"))
        .await
        .unwrap();

    let updated = service
        .update_profile(ProfileUpdate {
            name: Some("Ana".to_string()),
            avatar: Some("https://example.com/a.png".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(updated.name, "Ana");
    assert_eq!(updated.email, original.email);
    assert_eq!(updated.id, original.id);

    let stored: User = serde_json::from_str(&store.snapshot().await.unwrap()).unwrap();
    assert_eq!(stored.name, "Ana");

    let err = service
        .update_profile(ProfileUpdate {
            phone: Some("12".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, SessionError::InvalidPhone));
    assert_eq!(service.current_user().await.unwrap().name, "Ana");
}

#[tokio::test]
async fn test_session_events() {
    let events = EventBus::new(8);
    let mut rx = events.subscribe();
    let service = service_with(Arc::new(MemorySessionStore::new()), events);
    service.restore().await.unwrap();

    let user = service
        .login(credentials("ana@example.com", "pw"))
        .await
        .unwrap();
    service.logout().await.unwrap();

    match rx.recv().await.unwrap() {
        TradartsEvent::SessionChanged {
            logged_in, user_id, ..
        } => {
            assert!(logged_in);
            assert_eq!(user_id, Some(user.id));
        }
        other => panic!("unexpected event {:?}", other),
    }
    match rx.recv().await.unwrap() {
        TradartsEvent::SessionChanged { logged_in, .. } => assert!(!logged_in),
        other => panic!("unexpected event {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn test_loading_visible_during_login_delay() {
    let service = Arc::new(SessionService::new(
        Arc::new(MockAuthenticator::default()),
        Arc::new(MemorySessionStore::new()),
        EventBus::new(8),
    ));
    service.restore().await.unwrap();

    let pending = {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.login(credentials("ana@example.com", "pw")).await })
    };

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(service.state().await.is_loading());

    let user = pending.await.unwrap().unwrap();
    assert_eq!(service.current_user().await, Some(user));
}
