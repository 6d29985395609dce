//! End-to-end tests against a real server and a throwaway Postgres database.
//!
//! Run with `cargo test -- --ignored` and `DATABASE_URL` pointing at a
//! Postgres server's maintenance database.

mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::Value;

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_register_user_and_fetch_it() {
    let app = TestApp::spawn().await;

    let user_id = app.register("alice", "secret123").await;
    assert!(user_id.starts_with("user-"));

    let response = app
        .get(&format!("/users/{}", user_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["user"]["username"], "alice");
    assert_eq!(body["data"]["user"]["fullname"], "alice Test");
    assert!(body["data"]["user"].get("password").is_none());
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_register_duplicate_username() {
    let app = TestApp::spawn().await;
    app.register("alice", "secret123").await;

    let response = app
        .post("/users")
        .json(&json!({
            "username": "alice",
            "password": "another",
            "fullname": "Another Alice"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "fail");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("already in use"));
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_login_refresh_logout_lifecycle() {
    let app = TestApp::spawn().await;
    let user_id = app.register("alice", "secret123").await;

    let (access_token, refresh_token) = app.login("alice", "secret123").await;
    let claims = app
        .token_manager
        .verify_access_token(&access_token)
        .expect("Access token should verify");
    assert_eq!(claims.subject(), user_id);

    let response = app
        .put("/authentications")
        .json(&json!({ "refreshToken": refresh_token }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["accessToken"].is_string());

    let response = app
        .delete("/authentications")
        .json(&json!({ "refreshToken": refresh_token }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    // Signature is still valid, but the token was revoked
    let response = app
        .put("/authentications")
        .json(&json!({ "refreshToken": refresh_token }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_login_failures_look_the_same() {
    let app = TestApp::spawn().await;
    app.register("alice", "secret123").await;

    let wrong_password = app
        .post("/authentications")
        .json(&json!({ "username": "alice", "password": "wrong" }))
        .send()
        .await
        .expect("Failed to execute request");
    let unknown_user = app
        .post("/authentications")
        .json(&json!({ "username": "bob", "password": "secret123" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);

    let wrong_password: Value = wrong_password.json().await.unwrap();
    let unknown_user: Value = unknown_user.json().await.unwrap();
    assert_eq!(wrong_password, unknown_user);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_album_with_songs_and_album_deletion() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/albums")
        .json(&json!({ "name": "Viva la Vida", "year": 2008 }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.unwrap();
    let album_id = body["data"]["albumId"].as_str().unwrap().to_string();

    let response = app
        .post("/songs")
        .json(&json!({
            "title": "Lost!",
            "year": 2008,
            "genre": "Indie",
            "performer": "Coldplay",
            "duration": 235,
            "albumId": album_id
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.unwrap();
    let song_id = body["data"]["songId"].as_str().unwrap().to_string();

    let body: Value = app
        .get(&format!("/albums/{}", album_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"]["album"]["songs"][0]["id"], song_id.as_str());

    let response = app
        .delete(&format!("/albums/{}", album_id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Song survives without its album
    let body: Value = app
        .get(&format!("/songs/{}", song_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"]["song"]["albumId"], Value::Null);
    assert_eq!(body["data"]["song"]["duration"], 235);

    let response = app
        .get(&format!("/albums/{}", album_id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_song_with_unknown_album_is_not_found() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/songs")
        .json(&json!({
            "title": "Lost!",
            "year": 2008,
            "genre": "Indie",
            "performer": "Coldplay",
            "albumId": "album-doesnotexist00"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_song_search_is_case_insensitive() {
    let app = TestApp::spawn().await;
    app.create_song("Life in Technicolor", "Coldplay").await;
    app.create_song("Lost!", "Coldplay").await;
    app.create_song("Yellow Submarine", "The Beatles").await;

    let body: Value = app
        .get("/songs?title=LI&performer=cold")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let songs = body["data"]["songs"].as_array().unwrap();
    assert_eq!(songs.len(), 1);
    assert_eq!(songs[0]["title"], "Life in Technicolor");

    let body: Value = app.get("/songs").send().await.unwrap().json().await.unwrap();
    assert_eq!(body["data"]["songs"].as_array().unwrap().len(), 3);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_song_search_treats_wildcards_literally() {
    let app = TestApp::spawn().await;
    app.create_song("100% Pure Love", "Crystal Waters").await;
    app.create_song("Lost!", "Coldplay").await;
    app.create_song("Snake_Eyes", "Mumford").await;

    let body: Value = app
        .get("/songs?title=%25")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let songs = body["data"]["songs"].as_array().unwrap();
    assert_eq!(songs.len(), 1);
    assert_eq!(songs[0]["title"], "100% Pure Love");

    let body: Value = app
        .get("/songs?title=_")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let songs = body["data"]["songs"].as_array().unwrap();
    assert_eq!(songs.len(), 1);
    assert_eq!(songs[0]["title"], "Snake_Eyes");
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_playlist_requires_bearer_token() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/playlists")
        .json(&json!({ "name": "Road trip" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .get("/playlists")
        .bearer_auth("not-a-token")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_playlist_collaboration_flow() {
    let app = TestApp::spawn().await;
    app.register("owner", "secret123").await;
    let guest_id = app.register("guest", "secret123").await;
    let (owner_token, _) = app.login("owner", "secret123").await;
    let (guest_token, _) = app.login("guest", "secret123").await;
    let song_id = app.create_song("Lost!", "Coldplay").await;

    let body: Value = app
        .post("/playlists")
        .bearer_auth(&owner_token)
        .json(&json!({ "name": "Road trip" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let playlist_id = body["data"]["playlistId"].as_str().unwrap().to_string();
    let songs_path = format!("/playlists/{}/songs", playlist_id);

    // Not a collaborator yet
    let response = app
        .post(&songs_path)
        .bearer_auth(&guest_token)
        .json(&json!({ "songId": song_id }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .post("/collaborations")
        .bearer_auth(&owner_token)
        .json(&json!({ "playlistId": playlist_id, "userId": guest_id }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .post(&songs_path)
        .bearer_auth(&guest_token)
        .json(&json!({ "songId": song_id }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // Same song twice
    let response = app
        .post(&songs_path)
        .bearer_auth(&owner_token)
        .json(&json!({ "songId": song_id }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = app
        .get(&songs_path)
        .bearer_auth(&owner_token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"]["playlist"]["username"], "owner");
    assert_eq!(body["data"]["playlist"]["songs"][0]["id"], song_id.as_str());

    let body: Value = app
        .get("/playlists")
        .bearer_auth(&guest_token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"]["playlists"].as_array().unwrap().len(), 1);

    // Collaborators cannot delete the playlist
    let response = app
        .delete(&format!("/playlists/{}", playlist_id))
        .bearer_auth(&guest_token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .delete(&songs_path)
        .bearer_auth(&guest_token)
        .json(&json!({ "songId": song_id }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .delete(&songs_path)
        .bearer_auth(&guest_token)
        .json(&json!({ "songId": song_id }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .delete("/collaborations")
        .bearer_auth(&owner_token)
        .json(&json!({ "playlistId": playlist_id, "userId": guest_id }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .delete("/collaborations")
        .bearer_auth(&owner_token)
        .json(&json!({ "playlistId": playlist_id, "userId": guest_id }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .delete(&format!("/playlists/{}", playlist_id))
        .bearer_auth(&owner_token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_refresh_tokens_are_persisted() {
    let app = TestApp::spawn().await;
    app.register("alice", "secret123").await;

    let (_, first) = app.login("alice", "secret123").await;
    let (_, second) = app.login("alice", "secret123").await;
    assert_ne!(first, second);

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authentications")
        .fetch_one(&app.db.pool)
        .await
        .unwrap();
    assert_eq!(stored, 2);
}
