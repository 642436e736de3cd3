use super::*;
use crate::api::api_test::spawn_stub_validator;
use session::MemoryStorage;

#[tokio::test]
async fn login_persists_token_and_shows_profile() {
    let client = AuthClient::new(&spawn_stub_validator().await).unwrap();
    let storage = MemoryStorage::new();
    let mut store = SessionStore::restore(storage.clone());

    let out = login(&client, &mut store, Credential::new("user", "password123"))
        .await
        .unwrap();
    assert!(out.contains("Welcome to your profile!"));
    assert_eq!(storage.peek().as_deref(), Some("mock-token-123456"));
}

#[tokio::test]
async fn failed_login_leaves_token_absent() {
    let client = AuthClient::new(&spawn_stub_validator().await).unwrap();
    let storage = MemoryStorage::new();
    let mut store = SessionStore::restore(storage.clone());

    let err = login(&client, &mut store, Credential::new("user", "wrong"))
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Invalid username or password");
    assert!(!store.is_authenticated());
    assert_eq!(storage.peek(), None);
}

#[test]
fn profile_without_token_redirects_to_login() {
    let store = SessionStore::restore(MemoryStorage::new());
    assert!(matches!(profile(&store), Err(CliError::NotLoggedIn("/"))));
}

#[test]
fn profile_with_token_shows_welcome() {
    let store = SessionStore::restore(MemoryStorage::with_token("mock-token-123456"));
    assert_eq!(profile(&store).unwrap(), PROFILE_TEXT);
}

#[test]
fn logout_clears_storage_and_blocks_profile() {
    let storage = MemoryStorage::with_token("mock-token-123456");
    let mut store = SessionStore::restore(storage.clone());
    logout(&mut store).unwrap();
    assert_eq!(storage.peek(), None);
    assert!(profile(&store).is_err());
    assert_eq!(status(&store), "Not logged in.");
}
