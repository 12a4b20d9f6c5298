//! API Integration Tests
//!
//! Every test spawns its own server with empty stores, so no external
//! services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::sync::Arc;
use std::time::Duration;

use chrono::TimeDelta;
use integration_tests::{
    assert_error, assert_json, assert_status, fixtures::*, TestServer,
};
use moderation_core::ManualClock;
use reqwest::StatusCode;
use serde_json::{json, Value};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.05,
        "expected about {expected}, got {actual}"
    );
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_root_liveness() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/").await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "Roblox Moderation API is live.");
}

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_request_id_header() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/health").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Permanent Ban Tests
// ============================================================================

#[tokio::test]
async fn test_ban_and_check() {
    let server = TestServer::start().await.unwrap();

    let request = BanBody::new("u1").with_reason("spam").with_admin("mod1");
    let response = server.post("/ban", &request).await.unwrap();
    let ack: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ack, json!({ "status": "banned", "user_id": "u1" }));

    let response = server.get("/ban-check?user_id=u1").await.unwrap();
    let status: BanStatus = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(status.banned);
    assert_eq!(status.reason.as_deref(), Some("spam"));
    assert_eq!(status.admin.as_deref(), Some("mod1"));
    assert!(status.timestamp.is_some());
    assert!(status.remaining.is_none());
}

#[tokio::test]
async fn test_ban_defaults() {
    let server = TestServer::start().await.unwrap();
    let user_id = unique_user_id();

    let response = server.post("/ban", &BanBody::new(&user_id)).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get(&format!("/ban-check?user_id={user_id}"))
        .await
        .unwrap();
    let status: BanStatus = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(status.reason.as_deref(), Some("No reason provided."));
    assert_eq!(status.admin.as_deref(), Some("Unknown"));
}

#[tokio::test]
async fn test_ban_missing_user_id() {
    let server = TestServer::start().await.unwrap();

    for body in [json!({}), json!({ "user_id": "" }), json!({ "reason": "spam" })] {
        let response = server.post("/ban", &body).await.unwrap();
        assert_error(response, StatusCode::BAD_REQUEST, "Missing user_id")
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn test_ban_numeric_user_id() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/ban", &json!({ "user_id": 123_456_789 }))
        .await
        .unwrap();
    let ack: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ack["user_id"], "123456789");

    let response = server.get("/api/isBanned/123456789").await.unwrap();
    let status: BanStatus = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(status.banned);
}

#[tokio::test]
async fn test_check_ban_unknown_and_missing_user() {
    let server = TestServer::start().await.unwrap();

    for path in ["/ban-check?user_id=nobody", "/ban-check", "/timed-ban-check"] {
        let response = server.get(path).await.unwrap();
        let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(body, json!({ "banned": false }), "{path}");
    }
}

#[tokio::test]
async fn test_check_with_repeated_user_id() {
    let server = TestServer::start().await.unwrap();

    server.post("/ban", &BanBody::new("a")).await.unwrap();

    for path in [
        "/ban-check?user_id=a&user_id=b",
        "/timed-ban-check?user_id=a&user_id=b",
    ] {
        let response = server.get(path).await.unwrap();
        let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(body, json!({ "banned": false }), "{path}");
    }
}

#[tokio::test]
async fn test_malformed_json() {
    let server = TestServer::start().await.unwrap();

    let response = server.post_raw("/ban", "{\"user_id\": ").await.unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(body["error"].is_string());
}

// ============================================================================
// Kick Tests
// ============================================================================

#[tokio::test]
async fn test_kick_echoes_and_stores_nothing() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/kick", &BanBody::new("u3").with_reason("afk"))
        .await
        .unwrap();
    let ack: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        ack,
        json!({ "status": "kick", "user_id": "u3", "reason": "afk", "admin": "Unknown" })
    );

    let response = server.get("/api/isBanned/u3").await.unwrap();
    let status: BanStatus = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!status.banned);
}

#[tokio::test]
async fn test_kick_missing_user_id() {
    let server = TestServer::start().await.unwrap();
    let response = server.post("/kick", &json!({ "admin": "mod" })).await.unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "Missing user_id")
        .await
        .unwrap();
}

// ============================================================================
// Unban Tests
// ============================================================================

#[tokio::test]
async fn test_unban_twice() {
    let server = TestServer::start().await.unwrap();
    let user_id = unique_user_id();

    server.post("/ban", &BanBody::new(&user_id)).await.unwrap();

    let response = server
        .post("/unban", &json!({ "user_id": user_id }))
        .await
        .unwrap();
    let ack: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ack, json!({ "status": "unbanned", "user_id": user_id }));

    let response = server
        .post("/unban", &json!({ "user_id": user_id }))
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "User not banned")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_unban_missing_user_id() {
    let server = TestServer::start().await.unwrap();
    let response = server.post("/unban", &json!({})).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "User not banned")
        .await
        .unwrap();
}

// ============================================================================
// Timed Ban Tests
// ============================================================================

#[tokio::test]
async fn test_timed_ban_expires_in_real_time() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/timed-ban", &TimedBanBody::new("u2", 1.0))
        .await
        .unwrap();
    let ack: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        ack,
        json!({ "status": "timed_banned", "user_id": "u2", "expires_in": 1.0 })
    );

    let response = server.get("/timed-ban-check?user_id=u2").await.unwrap();
    let status: BanStatus = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(status.banned);
    assert_close(status.remaining.unwrap(), 1.0);

    tokio::time::sleep(Duration::from_millis(1_100)).await;

    let response = server.get("/timed-ban-check?user_id=u2").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({ "banned": false }));
}

#[tokio::test]
async fn test_timed_ban_default_duration() {
    let clock = Arc::new(ManualClock::starting_now());
    let server = TestServer::start_with_clock(clock.clone()).await.unwrap();

    let response = server
        .post("/timed-ban", &json!({ "user_id": "u4", "reason": "toxic" }))
        .await
        .unwrap();
    let ack: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ack["expires_in"], 60);

    let response = server.get("/timed-ban-check?user_id=u4").await.unwrap();
    let status: BanStatus = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(status.reason.as_deref(), Some("toxic"));
    assert_close(status.remaining.unwrap(), 60.0);

    clock.advance(TimeDelta::seconds(59));
    let response = server.get("/timed-ban-check?user_id=u4").await.unwrap();
    let status: BanStatus = assert_json(response, StatusCode::OK).await.unwrap();
    assert_close(status.remaining.unwrap(), 1.0);

    clock.advance(TimeDelta::seconds(1));
    let response = server.get("/timed-ban-check?user_id=u4").await.unwrap();
    let status: BanStatus = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!status.banned);
}

#[tokio::test]
async fn test_timed_ban_invalid_duration() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/timed-ban", &json!({ "user_id": "u5", "duration": "soon" }))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_timed_ban_missing_user_id() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/timed-ban", &json!({ "duration": 10 }))
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "Missing user_id")
        .await
        .unwrap();
}

// ============================================================================
// Game Server Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_is_banned_precedence() {
    let server = TestServer::start().await.unwrap();

    server
        .post("/timed-ban", &TimedBanBody::new("u6", 30.0))
        .await
        .unwrap();

    let response = server.get("/api/isBanned/u6").await.unwrap();
    let status: BanStatus = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(status.banned);
    assert!(status.remaining.is_some());

    server
        .post("/ban", &BanBody::new("u6").with_reason("perm"))
        .await
        .unwrap();

    let response = server.get("/api/isBanned/u6").await.unwrap();
    let status: BanStatus = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(status.banned);
    assert_eq!(status.reason.as_deref(), Some("perm"));
    assert!(status.remaining.is_none());
    assert!(status.timestamp.is_some());

    // Permanent view only; the timed ban is still there
    let response = server.get("/ban-check?user_id=u6").await.unwrap();
    let status: BanStatus = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(status.banned);
}

#[tokio::test]
async fn test_moderate_commands() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/api/moderate", &ModerateBody::new("BAN", "m1"))
        .await
        .unwrap();
    let ack: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ack, json!({ "status": "banned", "user_id": "m1" }));

    let response = server
        .post("/api/moderate", &ModerateBody::new("unban", "m1"))
        .await
        .unwrap();
    let ack: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ack["status"], "unbanned");

    let response = server
        .post("/api/moderate", &ModerateBody::new("Unban", "m1"))
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "User not banned")
        .await
        .unwrap();

    let mut request = ModerateBody::new("timedban", "m1");
    request.duration = Some(2.5);
    let response = server.post("/api/moderate", &request).await.unwrap();
    let ack: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        ack,
        json!({ "status": "timed_banned", "user_id": "m1", "expires_in": 2.5 })
    );

    let response = server
        .post("/api/moderate", &ModerateBody::new("kick", "m1"))
        .await
        .unwrap();
    let ack: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ack["status"], "kick");
    assert_eq!(ack["reason"], "No reason provided.");
}

#[tokio::test]
async fn test_moderate_errors() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/api/moderate", &ModerateBody::new("explode", "m2"))
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "Unknown command 'explode'")
        .await
        .unwrap();

    for body in [
        json!({ "user_id": "m2" }),
        json!({ "command": "ban" }),
        json!({ "command": "", "user_id": "m2" }),
    ] {
        let response = server.post("/api/moderate", &body).await.unwrap();
        assert_error(response, StatusCode::BAD_REQUEST, "Missing user_id or command")
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn test_moderate_duration_only_read_by_timedban() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post(
            "/api/moderate",
            &json!({ "command": "ban", "user_id": "m3", "duration": "forever" }),
        )
        .await
        .unwrap();
    let ack: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ack, json!({ "status": "banned", "user_id": "m3" }));

    let response = server.get("/ban-check?user_id=m3").await.unwrap();
    let status: BanStatus = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(status.banned);

    let response = server
        .post(
            "/api/moderate",
            &json!({ "command": "timedban", "user_id": "m4", "duration": "forever" }),
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "Invalid duration: \"forever\"")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_actions_hides_expired_timed_bans() {
    let clock = Arc::new(ManualClock::starting_now());
    let server = TestServer::start_with_clock(clock.clone()).await.unwrap();

    server
        .post("/ban", &BanBody::new("perm").with_reason("spam").with_admin("mod"))
        .await
        .unwrap();
    server
        .post("/timed-ban", &TimedBanBody::new("short", 5.0))
        .await
        .unwrap();
    server
        .post("/timed-ban", &TimedBanBody::new("long", 100.0))
        .await
        .unwrap();

    clock.advance(TimeDelta::seconds(10));

    let response = server.get("/api/getActions").await.unwrap();
    let actions: Actions = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(actions.bans.len(), 1);
    assert_eq!(actions.bans["perm"].reason, "spam");
    assert_eq!(actions.bans["perm"].admin, "mod");
    assert!(actions.bans["perm"].timestamp > 0.0);
    assert_eq!(actions.timed_bans.len(), 1);
    assert_eq!(actions.timed_bans["long"].reason, "No reason provided.");
    assert_eq!(actions.timed_bans["long"].admin, "Unknown");
    assert_close(actions.timed_bans["long"].remaining, 90.0);
}

#[tokio::test]
async fn test_get_actions_empty() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/getActions").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({ "bans": {}, "timed_bans": {} }));
}

#[tokio::test]
async fn test_unknown_route() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/nope").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_concurrent_bans() {
    let server = Arc::new(TestServer::start().await.unwrap());

    let tasks: Vec<_> = (0..20)
        .map(|i| {
            let server = Arc::clone(&server);
            tokio::spawn(async move {
                let response = server
                    .post("/ban", &BanBody::new(&format!("c{i}")))
                    .await
                    .unwrap();
                assert_status(response, StatusCode::OK).await.unwrap();
            })
        })
        .collect();
    for task in tasks {
        task.await.unwrap();
    }

    let response = server.get("/api/getActions").await.unwrap();
    let actions: Actions = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(actions.bans.len(), 20);
}
