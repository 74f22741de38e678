//! API Integration Tests
//!
//! These tests require a running PostgreSQL instance named by `DATABASE_URL`.
//! `REDIS_URL` is optional; without it sessions live in process memory.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, next_event, TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.client().unwrap();

    let health: serde_json::Value = assert_json(client.get("/health").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(health["status"], "healthy");

    let ready: serde_json::Value =
        assert_json(client.get("/health/ready").await.unwrap(), StatusCode::OK)
            .await
            .unwrap();
    assert_eq!(ready["status"], "ready");
    assert_eq!(ready["checks"]["database"], "healthy");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_signup_and_signin() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.client().unwrap();
    let credentials = Credentials::unique("alice");

    let response = client.post("/signup", &credentials).await.unwrap();
    let body: MessageBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(body.message, "User registered successfully");

    let response = client.post("/signin", &credentials).await.unwrap();
    let set_cookie = response
        .headers()
        .get(reqwest::header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(set_cookie.contains("HttpOnly"));

    let body: SigninBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Login successful");
    assert_eq!(body.username, credentials.username);

    // The cookie now authenticates
    assert_status(client.get("/posts").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_signup_duplicate_username() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.client().unwrap();
    let credentials = Credentials::unique("dup");

    assert_status(client.post("/signup", &credentials).await.unwrap(), StatusCode::CREATED)
        .await
        .unwrap();

    let response = client.post("/signup", &credentials).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body.error, "Username already exists");
}

#[tokio::test]
async fn test_signup_missing_fields() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.client().unwrap();

    let partial = serde_json::json!({ "username": "only_name" });
    let response = client.post("/signup", &partial).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error, "Username and password are required");

    let response = client.post_raw("/signin", "{not json").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error, "Username and password are required");
}

#[tokio::test]
async fn test_signin_invalid_credentials() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, credentials) = server.signed_in("carol").await.unwrap();
    let client = server.client().unwrap();

    let wrong_password = Credentials {
        username: credentials.username.clone(),
        password: "nope".to_string(),
    };
    let response = client.post("/signin", &wrong_password).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error, "Invalid username or password");

    let unknown = Credentials::unique("ghost");
    let response = client.post("/signin", &unknown).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error, "Invalid username or password");
}

#[tokio::test]
async fn test_logout_ends_session() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (client, _) = server.signed_in("leaver").await.unwrap();

    let response = client.post_empty("/logout").await.unwrap();
    let body: MessageBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Logged out successfully");

    assert_status(client.get("/posts").await.unwrap(), StatusCode::UNAUTHORIZED)
        .await
        .unwrap();

    // Logging out again is harmless
    assert_status(client.post_empty("/logout").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_protected_routes_require_session() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.client().unwrap();

    for path in ["/posts", "/posts/my", "/posts/liked"] {
        let response = client.get(path).await.unwrap();
        let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
        assert_eq!(body.error, "Unauthorized");
    }

    let response = client.post("/posts", &NewPost { content: "hi" }).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = client.post_empty("/posts/1/like").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Post and Like Tests
// ============================================================================

#[tokio::test]
async fn test_post_and_like_flow() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (alice, alice_credentials) = server.signed_in("alice").await.unwrap();
    let (bob, _) = server.signed_in("bob").await.unwrap();

    // Alice posts
    let response = alice.post("/posts", &NewPost { content: "Hello world" }).await.unwrap();
    let post: PostBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(post.content, "Hello world");
    assert_eq!(post.username, alice_credentials.username);
    assert!(post.is_author);
    assert_eq!(post.likes, 0);
    assert!(!post.liked);
    assert!(!post.created_at.is_empty());

    // Bob likes it
    let like_path = format!("/posts/{}/like", post.id);
    let response = bob.post_empty(&like_path).await.unwrap();
    let like: LikeBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(like.message, "Post liked");
    assert_eq!(like.likes, 1);

    // Bob sees it in his liked list, not authored by him
    let liked: Vec<PostBody> = assert_json(bob.get("/posts/liked").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    let seen = liked.iter().find(|p| p.id == post.id).unwrap();
    assert!(seen.liked);
    assert!(!seen.is_author);
    assert_eq!(seen.likes, 1);

    // Alice sees it in her own list with the like count
    let mine: Vec<PostBody> = assert_json(alice.get("/posts/my").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, post.id);
    assert!(mine[0].is_author);
    assert!(!mine[0].liked);
    assert_eq!(mine[0].likes, 1);

    // Bob unlikes it
    let response = bob.post_empty(&like_path).await.unwrap();
    let like: LikeBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(like.message, "Post unliked");
    assert_eq!(like.likes, 0);

    let liked: Vec<PostBody> = assert_json(bob.get("/posts/liked").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(liked.iter().all(|p| p.id != post.id));
}

#[tokio::test]
async fn test_posts_are_newest_first() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (client, _) = server.signed_in("writer").await.unwrap();

    let mut ids = Vec::new();
    for content in ["one", "two", "three"] {
        let response = client.post("/posts", &NewPost { content }).await.unwrap();
        let post: PostBody = assert_json(response, StatusCode::CREATED).await.unwrap();
        ids.push(post.id);
    }

    let mine: Vec<PostBody> = assert_json(client.get("/posts/my").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    let listed: Vec<i64> = mine.iter().map(|p| p.id).collect();
    ids.reverse();
    assert_eq!(listed, ids);

    let all: Vec<PostBody> = assert_json(client.get("/posts").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    let positions: Vec<usize> = ids
        .iter()
        .map(|id| all.iter().position(|p| p.id == *id).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn test_create_post_requires_content() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (client, _) = server.signed_in("blank").await.unwrap();

    for response in [
        client.post("/posts", &NewPost { content: "" }).await.unwrap(),
        client.post("/posts", &serde_json::json!({})).await.unwrap(),
        client.post_empty("/posts").await.unwrap(),
    ] {
        let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(body.error, "Content is required");
    }
}

#[tokio::test]
async fn test_cannot_like_own_post() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (client, _) = server.signed_in("narcissus").await.unwrap();

    let response = client.post("/posts", &NewPost { content: "me" }).await.unwrap();
    let post: PostBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = client.post_empty(&format!("/posts/{}/like", post.id)).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error, "Cannot like your own post");
}

#[tokio::test]
async fn test_like_unknown_post() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (client, _) = server.signed_in("fan").await.unwrap();

    for path in ["/posts/9223372036854775807/like", "/posts/not-a-number/like"] {
        let response = client.post_empty(path).await.unwrap();
        let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
        assert_eq!(body.error, "Post not found");
    }
}

// ============================================================================
// Page Tests
// ============================================================================

#[tokio::test]
async fn test_index_page_depends_on_session() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let anonymous = server.client().unwrap();
    let response = anonymous.get("/").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let landing = response.text().await.unwrap();
    assert!(landing.contains("/signup"));

    let (client, credentials) = server.signed_in("pager").await.unwrap();
    let page = client.get("/").await.unwrap().text().await.unwrap();
    assert!(page.contains(&credentials.username));
    assert!(page.contains("/ws"));
}

// ============================================================================
// Realtime Tests
// ============================================================================

#[tokio::test]
async fn test_realtime_new_post_and_like_update() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (alice, alice_credentials) = server.signed_in("alice").await.unwrap();
    let (bob, _) = server.signed_in("bob").await.unwrap();
    let mut ws = server.connect_ws().await.unwrap();

    let response = alice.post("/posts", &NewPost { content: "Live!" }).await.unwrap();
    let post: PostBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let new_post = next_event(&mut ws, "new_post").await.unwrap();
    assert_eq!(new_post["id"], post.id);
    assert_eq!(new_post["content"], "Live!");
    assert_eq!(new_post["username"], alice_credentials.username.as_str());
    assert_eq!(new_post["likes"], 0);

    bob.post_empty(&format!("/posts/{}/like", post.id)).await.unwrap();

    let update = next_event(&mut ws, "like_update").await.unwrap();
    assert_eq!(update["postId"], post.id);
    assert_eq!(update["likes"], 1);
    assert_eq!(update["action"], "liked");
    assert!(update["userId"].is_i64());
}
