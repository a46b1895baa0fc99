//! Client view-model integration tests
//!
//! Drives `GuildApiClient` and `GuildListModel` against a live test server.
//!
//! Run with: cargo test -p integration-tests --test client_tests

use std::time::Duration;

use guild_client::{ClientError, GuildApiClient, GuildListModel};
use integration_tests::{fixtures::*, TestServer};

#[tokio::test]
async fn test_client_round_trip() {
    let server = TestServer::start().await.unwrap();
    let api = server.api_client();

    let created = api.create("Silver Hand", Some(3)).await.unwrap();
    assert_eq!(created.level, 3);

    let updated = api.update(created.id, "Silver Hand", 4).await.unwrap();
    assert_eq!(updated.level, 4);

    assert_eq!(api.list().await.unwrap(), vec![updated.clone()]);

    api.delete(updated.id).await.unwrap();
    assert!(api.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_client_surfaces_server_errors() {
    let server = TestServer::start().await.unwrap();
    let api = server.api_client();

    api.create("A", None).await.unwrap();
    let err = api.create("A", None).await.unwrap_err();
    assert!(err.is_conflict());
    assert!(
        matches!(&err, ClientError::Api { message, .. } if message == "Guild name already exists")
    );

    let err = api.delete(999).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(
        err.to_string(),
        "HTTP error! status: 404 - Guild with ID 999 not found."
    );
}

#[tokio::test]
async fn test_model_load() {
    let server = TestServer::start_seeded().await.unwrap();
    let mut model = GuildListModel::new(server.api_client());

    assert!(model.load().await);
    assert!(!model.is_loading());
    assert!(model.error().is_none());

    let names: Vec<&str> = model.guilds().iter().map(|g| g.name.as_str()).collect();
    let expected: Vec<&str> = SEEDED.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, expected);
}

#[tokio::test]
async fn test_model_create_appends() {
    let server = TestServer::start_seeded().await.unwrap();
    let mut model = GuildListModel::new(server.api_client());
    model.load().await;

    assert!(model.create("  Azure Order ").await);
    let last = model.guilds().last().unwrap();
    assert_eq!(last.name, "Azure Order");
    assert_eq!(last.level, 1);
    assert_eq!(model.guilds().len(), 4);
}

#[tokio::test]
async fn test_model_create_conflict_keeps_list() {
    let server = TestServer::start_seeded().await.unwrap();
    let mut model = GuildListModel::new(server.api_client());
    model.load().await;
    let before = model.guilds().to_vec();

    assert!(!model.create("Iron Legion").await);
    assert_eq!(model.guilds(), before.as_slice());
    assert_eq!(
        model.error(),
        Some("Failed to create guild: HTTP error! status: 409 - Guild name already exists")
    );
}

#[tokio::test]
async fn test_model_edit_flow() {
    let server = TestServer::start_seeded().await.unwrap();
    let mut model = GuildListModel::new(server.api_client());
    model.load().await;

    let target = model
        .guilds()
        .iter()
        .find(|g| g.name == "Mystic Weavers")
        .unwrap()
        .id;

    assert!(model.begin_edit(target));
    assert_eq!(model.editing().unwrap().level, "3");
    model.set_draft_name("Mystic Circle");
    model.set_draft_level("9");

    assert!(model.submit_edit().await);
    assert!(model.editing().is_none());

    let edited = model.guilds().iter().find(|g| g.id == target).unwrap();
    assert_eq!(edited.name, "Mystic Circle");
    assert_eq!(edited.level, 9);

    // Server agrees with the local copy
    let mut fresh = GuildListModel::new(server.api_client());
    fresh.load().await;
    assert!(fresh.guilds().contains(edited));
}

#[tokio::test]
async fn test_model_edit_conflict_keeps_draft() {
    let server = TestServer::start_seeded().await.unwrap();
    let mut model = GuildListModel::new(server.api_client());
    model.load().await;
    let before = model.guilds().to_vec();

    let target = before[0].id;
    model.begin_edit(target);
    model.set_draft_name("Mystic Weavers");

    assert!(!model.submit_edit().await);
    assert!(model.error().unwrap().starts_with("Failed to update guild:"));
    assert!(model.editing().is_some());
    assert_eq!(model.guilds(), before.as_slice());
}

#[tokio::test]
async fn test_model_delete() {
    let server = TestServer::start_seeded().await.unwrap();
    let mut model = GuildListModel::new(server.api_client());
    model.load().await;

    let target = model.guilds()[0].id;
    assert!(model.delete(target).await);
    assert_eq!(model.guilds().len(), 2);
    assert!(model.guilds().iter().all(|g| g.id != target));

    // Already gone on the server
    assert!(!model.delete(target).await);
    assert_eq!(model.guilds().len(), 2);
    assert!(model.error().unwrap().contains("404"));
}

#[tokio::test]
async fn test_model_load_failure_keeps_last_good_list() {
    let server = TestServer::start_seeded().await.unwrap();
    // No pooled connections, so the next request must reconnect
    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .build()
        .unwrap();
    let mut model = GuildListModel::new(GuildApiClient::with_client(client, server.base_url()));
    model.load().await;
    assert_eq!(model.guilds().len(), 3);

    drop(server);
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(!model.load().await);
    assert_eq!(model.guilds().len(), 3);
    assert!(model.error().unwrap().starts_with("Failed to load guilds:"));
}
