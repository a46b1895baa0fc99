//! API Integration Tests
//!
//! Each test starts its own server on a random port backed by an in-memory
//! SQLite database; no external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, fixtures::*, test_config, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_banner() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().contains("is running"));
}

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["database"], "healthy");
}

// ============================================================================
// List Tests
// ============================================================================

#[tokio::test]
async fn test_list_empty_store() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/guilds").await.unwrap();
    let guilds: Vec<Guild> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(guilds.is_empty());
}

#[tokio::test]
async fn test_list_seeded_store_sorted_by_name() {
    let server = TestServer::start_seeded().await.unwrap();
    let response = server.get("/api/guilds").await.unwrap();
    let guilds: Vec<Guild> = assert_json(response, StatusCode::OK).await.unwrap();

    let got: Vec<(&str, i64)> = guilds.iter().map(|g| (g.name.as_str(), g.level)).collect();
    assert_eq!(got, SEEDED.to_vec());
}

#[tokio::test]
async fn test_list_exposes_only_id_name_level() {
    let server = TestServer::start_seeded().await.unwrap();
    let response = server.get("/api/guilds").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    let first = body[0].as_object().unwrap();
    let mut keys: Vec<&str> = first.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["id", "level", "name"]);
}

// ============================================================================
// Create Tests
// ============================================================================

#[tokio::test]
async fn test_create_then_list() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/api/guilds", &name_and_level("Knights of Valor", 5))
        .await
        .unwrap();
    let created: Guild = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(
        created,
        Guild {
            id: 1,
            name: "Knights of Valor".to_string(),
            level: 5
        }
    );

    let response = server.get("/api/guilds").await.unwrap();
    let guilds: Vec<Guild> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(guilds, vec![created]);
}

#[tokio::test]
async fn test_create_defaults_and_coerces_level() {
    let server = TestServer::start().await.unwrap();

    let cases: [(Value, i64); 5] = [
        (name_only(&unique_guild_name()), 1),
        (name_and_level(&unique_guild_name(), "7"), 7),
        (name_and_level(&unique_guild_name(), 2.9), 2),
        (name_and_level(&unique_guild_name(), 0), 1),
        (name_and_level(&unique_guild_name(), "high"), 1),
    ];

    for (body, expected) in cases {
        let response = server.post("/api/guilds", &body).await.unwrap();
        let guild: Guild = assert_json(response, StatusCode::CREATED).await.unwrap();
        assert_eq!(guild.level, expected, "{body}");
    }
}

#[tokio::test]
async fn test_create_trims_name() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/api/guilds", &name_only("   Iron Legion  "))
        .await
        .unwrap();
    let guild: Guild = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(guild.name, "Iron Legion");
}

#[tokio::test]
async fn test_create_invalid_name() {
    let server = TestServer::start().await.unwrap();

    for body in [json!({}), json!({"name": ""}), json!({"name": "   "}), json!({"name": 5})] {
        let response = server.post("/api/guilds", &body).await.unwrap();
        let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(
            error.error,
            "Guild name is required and must be a non-empty string.",
            "{body}"
        );
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    let response = server.get("/api/guilds").await.unwrap();
    let guilds: Vec<Guild> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(guilds.is_empty());
}

#[tokio::test]
async fn test_create_malformed_json() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post_raw("/api/guilds", "application/json", "{\"name\": ")
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_duplicate_name_conflict() {
    let server = TestServer::start().await.unwrap();

    let response = server.post("/api/guilds", &name_only("A")).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post("/api/guilds", &name_only("A")).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error, "Guild name already exists");
    assert_eq!(error.code, "GUILD_NAME_EXISTS");
    assert!(error.details.is_some());

    // Trimmed names collide too
    let response = server.post("/api/guilds", &name_only("  A ")).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

// ============================================================================
// Get Tests
// ============================================================================

#[tokio::test]
async fn test_get_guild() {
    let server = TestServer::start_seeded().await.unwrap();

    let response = server.get("/api/guilds/1").await.unwrap();
    let guild: Guild = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(guild.name, "Knights of Valor");

    let response = server.get("/api/guilds/999").await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error, "Guild with ID 999 not found.");
}

// ============================================================================
// Update Tests
// ============================================================================

#[tokio::test]
async fn test_update_name_and_level() {
    let server = TestServer::start_seeded().await.unwrap();

    let response = server
        .put("/api/guilds/1", &name_and_level("Knights Reborn", 6))
        .await
        .unwrap();
    let guild: Guild = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        guild,
        Guild {
            id: 1,
            name: "Knights Reborn".to_string(),
            level: 6
        }
    );
}

#[tokio::test]
async fn test_update_name_only_keeps_level() {
    let server = TestServer::start_seeded().await.unwrap();

    for body in [name_only("Renamed"), json!({"name": "Renamed", "level": null})] {
        let response = server.put("/api/guilds/1", &body).await.unwrap();
        let guild: Guild = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(guild.name, "Renamed");
        assert_eq!(guild.level, 5);
    }
}

#[tokio::test]
async fn test_update_invalid_level_rejected() {
    let server = TestServer::start().await.unwrap();
    let response = server.post("/api/guilds", &name_and_level("A", 5)).await.unwrap();
    let created: Guild = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/guilds/{}", created.id);

    let response = server
        .put(&path, &name_and_level("B", "not-a-number"))
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error, "If provided, level must be a positive number.");

    // Nothing was written
    let response = server.get(&path).await.unwrap();
    let stored: Guild = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stored, created);
}

#[tokio::test]
async fn test_update_invalid_id() {
    let server = TestServer::start_seeded().await.unwrap();

    for path in ["/api/guilds/abc", "/api/guilds/0", "/api/guilds/-1", "/api/guilds/1.5"] {
        let response = server.put(path, &name_only("X")).await.unwrap();
        let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(error.error, "Invalid Guild ID provided.", "{path}");
    }
}

#[tokio::test]
async fn test_update_missing_name() {
    let server = TestServer::start_seeded().await.unwrap();
    let response = server.put("/api/guilds/1", &json!({"level": 3})).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(
        error.error,
        "Guild name is required and must be a non-empty string."
    );
}

#[tokio::test]
async fn test_update_not_found() {
    let server = TestServer::start().await.unwrap();

    for body in [name_only("X"), name_and_level("X", 3)] {
        let response = server.put("/api/guilds/42", &body).await.unwrap();
        let error: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
        assert_eq!(error.error, "Guild with ID 42 not found.", "body {body}");
        assert_eq!(error.code, "UNKNOWN_GUILD");
    }
}

#[tokio::test]
async fn test_update_name_collision() {
    let server = TestServer::start_seeded().await.unwrap();
    let response = server
        .put("/api/guilds/1", &name_only("Iron Legion"))
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let response = server.get("/api/guilds/1").await.unwrap();
    let guild: Guild = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(guild.name, "Knights of Valor");
}

// ============================================================================
// Delete Tests
// ============================================================================

#[tokio::test]
async fn test_delete_guild() {
    let server = TestServer::start_seeded().await.unwrap();

    let response = server.delete("/api/guilds/2").await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get("/api/guilds").await.unwrap();
    let guilds: Vec<Guild> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(guilds.len(), 2);
    assert!(guilds.iter().all(|g| g.id != 2));

    let response = server.delete("/api/guilds/2").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_not_found() {
    let server = TestServer::start().await.unwrap();
    let response = server.delete("/api/guilds/999").await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error, "Guild with ID 999 not found.");
}

#[tokio::test]
async fn test_delete_invalid_id() {
    let server = TestServer::start().await.unwrap();
    let response = server.delete("/api/guilds/abc").await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.code, "INVALID_GUILD_ID");
}

// ============================================================================
// Middleware Tests
// ============================================================================

#[tokio::test]
async fn test_request_id_header() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/guilds").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_cors_preflight() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .client
        .request(
            reqwest::Method::OPTIONS,
            format!("{}/api/guilds/1", server.base_url()),
        )
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "PUT")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    let allowed = response
        .headers()
        .get("access-control-allow-methods")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(allowed.contains("PUT"), "{allowed}");
    assert!(allowed.contains("DELETE"), "{allowed}");
}

#[tokio::test]
async fn test_rate_limit_applies_to_api_routes_only() {
    let config = test_config(&[
        ("RATE_LIMIT_REQUESTS_PER_SECOND", "1"),
        ("RATE_LIMIT_BURST", "2"),
    ])
    .unwrap();
    let server = TestServer::start_with_config(config).await.unwrap();

    let mut statuses = Vec::new();
    for _ in 0..4 {
        statuses.push(server.get("/api/guilds").await.unwrap().status());
    }
    assert!(statuses.contains(&StatusCode::TOO_MANY_REQUESTS), "{statuses:?}");

    let response = server.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}
