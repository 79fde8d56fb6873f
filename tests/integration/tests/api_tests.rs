//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, check_test_env, fixtures::*, unique_suffix,
    TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn create_post(server: &TestServer, token: &str, title: &str) -> PostResponse {
    let response = server
        .post_auth("/api/posts", token, &CreatePostRequest::titled(title))
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn vote(server: &TestServer, token: &str, request: &VoteRequest) -> VoteResponse {
    let response = server.post_auth("/api/votes", token, request).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/auth/register", &request).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(user.name, request.name);
    assert_eq!(user.email, request.email);
    assert!(!user.is_admin);
    assert!(!user.is_banned);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Same address in a different case is still the same account
    let mut again = request.clone();
    again.email = request.email.to_uppercase();
    let response = server.post("/api/auth/register", &again).await.unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "EMAIL_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_register_blank_fields() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(
            "/api/auth/register",
            &json!({"name": "  ", "email": "x@example.com", "password": "pw"}),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "MISSING_FIELD");
}

#[tokio::test]
async fn test_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    server.post("/api/auth/register", &register_req).await.unwrap();

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.name, register_req.name);
    assert_eq!(auth.token_type, "Bearer");
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = server.new_user().await.unwrap();

    let unknown = LoginRequest {
        email: format!("nobody-{}@example.com", unique_suffix()),
        password: "wrongpass".to_string(),
    };
    let response = server.post("/api/auth/login", &unknown).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let wrong_password = LoginRequest {
        email: session.user.email.clone(),
        password: "wrongpass".to_string(),
    };
    let response = server.post("/api/auth/login", &wrong_password).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = server.new_user().await.unwrap();

    let response = server
        .post(
            "/api/auth/refresh",
            &json!({ "refresh_token": session.refresh_token }),
        )
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(auth.user.id, session.user.id);

    // The access token cannot stand in for a refresh token
    let response = server
        .post("/api/auth/refresh", &json!({ "refresh_token": session.token }))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_me_includes_posts_and_comment_count() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = server.new_user().await.unwrap();

    let post = create_post(&server, &session.token, "Mine").await;
    let response = server
        .post_auth(
            "/api/comments",
            &session.token,
            &json!({"content": "self reply", "post_id": post.id}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.get_auth("/api/auth/me", &session.token).await.unwrap();
    let me: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(me["id"], session.user.id);
    assert_eq!(me["comment_count"], 1);
    assert_eq!(me["posts"][0]["id"], post.id);
    assert_eq!(me["posts"][0]["comments"][0]["content"], "self reply");
}

#[tokio::test]
async fn test_me_unauthorized() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/auth/me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_update_profile() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = server.new_user().await.unwrap();
    let other = server.new_user().await.unwrap();

    let response = server
        .patch_auth("/api/auth/update", &session.token, &json!({"name": "Renamed", "email": " "}))
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.name, "Renamed");
    assert_eq!(user.email, session.user.email);

    let response = server
        .patch_auth("/api/auth/update", &session.token, &json!({"email": other.user.email}))
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_change_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = server.new_user().await.unwrap();

    let response = server
        .patch_auth(
            "/api/auth/change-password",
            &session.token,
            &json!({"old_password": "not-it", "new_password": "next"}),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "INCORRECT_PASSWORD");

    let response = server
        .patch_auth(
            "/api/auth/change-password",
            &session.token,
            &json!({"old_password": "TestPass123!", "new_password": "next-password"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let login = LoginRequest {
        email: session.user.email.clone(),
        password: "next-password".to_string(),
    };
    server.login(&login).await.unwrap();
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_post() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = server.new_user().await.unwrap();

    let response = server
        .post_auth(
            "/api/posts",
            &session.token,
            &json!({"title": "  Hello  ", "content": "", "link": "https://example.com"}),
        )
        .await
        .unwrap();
    let created: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.title, "Hello");
    assert_eq!(created.content, None);
    assert_eq!(created.link.as_deref(), Some("https://example.com"));
    assert_eq!(created.author.id, session.user.id);
    assert_eq!(created.score, 0);

    let response = server
        .get(&format!("/api/posts/{}", created.id))
        .await
        .unwrap();
    let fetched: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.author.name, session.user.name);
    assert!(fetched.user_vote.is_none());
}

#[tokio::test]
async fn test_create_post_blank_title() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = server.new_user().await.unwrap();

    let response = server
        .post_auth("/api/posts", &session.token, &json!({"title": "   "}))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_get_missing_post() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/posts/9223372036854775807").await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_POST");
}

#[tokio::test]
async fn test_only_owner_or_admin_can_edit_post() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.new_user().await.unwrap();
    let stranger = server.new_user().await.unwrap();
    let admin = server.admin_session().await.unwrap();

    let post = create_post(&server, &owner.token, "Original").await;
    let path = format!("/api/posts/{}", post.id);

    let response = server
        .patch_auth(&path, &stranger.token, &json!({"title": "Hijacked"}))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .patch_auth(&path, &owner.token, &json!({"title": "Edited", "content": ""}))
        .await
        .unwrap();
    let edited: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(edited.title, "Edited");
    assert_eq!(edited.content, None);

    let response = server
        .patch_auth(&path, &admin.token, &json!({"link": "https://mod.example.com"}))
        .await
        .unwrap();
    let moderated: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(moderated.title, "Edited");
    assert_eq!(moderated.link.as_deref(), Some("https://mod.example.com"));

    let response = server.delete_auth(&path, &stranger.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&path, &admin.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_keyword_and_author_filters() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = server.new_user().await.unwrap();
    let marker = unique_suffix();

    create_post(&server, &session.token, &format!("About {marker}")).await;
    create_post(&server, &session.token, "Unrelated").await;

    let response = server
        .get(&format!("/api/posts?keyword={}", marker.to_uppercase()))
        .await
        .unwrap();
    let found: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(found.len(), 1);
    assert!(found[0].title.contains(&marker));

    let response = server
        .get(&format!("/api/posts?author_id={}", session.user.id))
        .await
        .unwrap();
    let by_author: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(by_author.len(), 2);
    // Recent first
    assert_eq!(by_author[0].title, "Unrelated");
}

#[tokio::test]
async fn test_unknown_sort_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/posts?sort=sideways").await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_SORT");
}

#[tokio::test]
async fn test_top_sort_orders_by_score() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.new_user().await.unwrap();
    let voters = [
        server.new_user().await.unwrap(),
        server.new_user().await.unwrap(),
        server.new_user().await.unwrap(),
    ];

    let high = create_post(&server, &author.token, "High").await;
    let low = create_post(&server, &author.token, "Low").await;
    let newest = create_post(&server, &author.token, "Newest").await;

    for voter in &voters {
        vote(&server, &voter.token, &VoteRequest::up(high.id)).await;
    }
    vote(&server, &voters[0].token, &VoteRequest::up(low.id)).await;
    vote(&server, &voters[1].token, &VoteRequest::down(newest.id)).await;

    let response = server
        .get(&format!("/api/posts?author_id={}&sort=top", author.user.id))
        .await
        .unwrap();
    let posts: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let order: Vec<i64> = posts.iter().map(|p| p.id).collect();
    assert_eq!(order, vec![high.id, low.id, newest.id]);
    assert_eq!(posts[0].score, 3);
    assert_eq!(posts[0].upvotes, 3);
    assert_eq!(posts[2].score, -1);
    assert_eq!(posts[2].downvotes, 1);
}

// ============================================================================
// Vote Tests
// ============================================================================

#[tokio::test]
async fn test_vote_toggle_and_flip() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.new_user().await.unwrap();
    let voter = server.new_user().await.unwrap();
    let post = create_post(&server, &author.token, "Vote on me").await;

    let first = vote(&server, &voter.token, &VoteRequest::up(post.id)).await;
    assert_eq!(first.result, "recorded");
    assert_eq!(first.user_vote.as_deref(), Some("up"));
    assert_eq!(first.score, 1);

    let again = vote(&server, &voter.token, &VoteRequest::up(post.id)).await;
    assert_eq!(again.result, "removed");
    assert_eq!(again.user_vote, None);
    assert_eq!(again.score, 0);
    assert_eq!(again.upvotes, 0);

    vote(&server, &voter.token, &VoteRequest::up(post.id)).await;
    let flipped = vote(&server, &voter.token, &VoteRequest::down(post.id)).await;
    assert_eq!(flipped.result, "updated");
    assert_eq!(flipped.post_id, post.id);
    assert_eq!(flipped.score, -1);
    assert_eq!(flipped.upvotes, 0);
    assert_eq!(flipped.downvotes, 1);

    let response = server
        .get_auth(&format!("/api/posts/{}", post.id), &voter.token)
        .await
        .unwrap();
    let viewed: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(viewed.user_vote.as_deref(), Some("down"));
}

#[tokio::test]
async fn test_vote_rejects_bad_input() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = server.new_user().await.unwrap();
    let post = create_post(&server, &session.token, "Target").await;

    let response = server
        .post_auth(
            "/api/votes",
            &session.token,
            &json!({"post_id": post.id, "vote_type": "sideways"}),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_VOTE_TYPE");

    let response = server
        .post_auth("/api/votes", &session.token, &VoteRequest::up(i64::MAX))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_lifecycle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.new_user().await.unwrap();
    let commenter = server.new_user().await.unwrap();
    let post = create_post(&server, &author.token, "Discuss").await;

    let response = server
        .post_auth(
            "/api/comments",
            &commenter.token,
            &json!({"content": "First!", "post_id": post.id}),
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(comment.author.id, commenter.user.id);
    assert_eq!(comment.post_id, post.id);

    let response = server
        .get(&format!("/api/comments?post_id={}", post.id))
        .await
        .unwrap();
    let listed: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].content, "First!");

    let path = format!("/api/comments/{}", comment.id);

    // The post's author does not own the comment
    let response = server
        .patch_auth(&path, &author.token, &json!({"content": "edited by author"}))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .patch_auth(&path, &commenter.token, &json!({"content": "Edited"}))
        .await
        .unwrap();
    let edited: CommentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(edited.content, "Edited");

    let response = server
        .patch_auth(&path, &commenter.token, &json!({"content": ""}))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server.delete_auth(&path, &commenter.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.delete_auth(&path, &commenter.token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_comment_on_missing_post() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = server.new_user().await.unwrap();

    let response = server
        .post_auth(
            "/api/comments",
            &session.token,
            &json!({"content": "hello?", "post_id": i64::MAX}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .get(&format!("/api/comments?post_id={}", i64::MAX))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_post_cascades() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = server.new_user().await.unwrap();
    let post = create_post(&server, &session.token, "Short lived").await;

    server
        .post_auth(
            "/api/comments",
            &session.token,
            &json!({"content": "bye", "post_id": post.id}),
        )
        .await
        .unwrap();
    vote(&server, &session.token, &VoteRequest::up(post.id)).await;

    let response = server
        .delete_auth(&format!("/api/posts/{}", post.id), &session.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&format!("/api/posts/{}", post.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get_auth("/api/auth/me", &session.token).await.unwrap();
    let me: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me["comment_count"], 0);
    assert_eq!(me["posts"].as_array().map(Vec::len), Some(0));
}

// ============================================================================
// Admin Tests
// ============================================================================

#[tokio::test]
async fn test_admin_endpoints_require_admin() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = server.new_user().await.unwrap();

    for path in ["/api/admin/users", "/api/admin/analytics", "/api/admin/check"] {
        let response = server.get_auth(path, &session.token).await.unwrap();
        assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
    }

    let admin = server.admin_session().await.unwrap();
    let response = server.get_auth("/api/admin/check", &admin.token).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["is_admin"], true);

    let response = server.get_auth("/api/admin/users", &admin.token).await.unwrap();
    let users: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(users.iter().any(|u| u.id == session.user.id));
}

#[tokio::test]
async fn test_banned_user_is_locked_out() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin_session().await.unwrap();
    let target = server.new_user().await.unwrap();
    let post = create_post(&server, &target.token, "Before the ban").await;

    let ban_path = format!("/api/admin/users/{}/ban", target.user.id);
    let response = server.patch_auth(&ban_path, &admin.token, &json!({})).await.unwrap();
    let ban: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ban["is_banned"], true);

    // Existing token no longer works for mutations
    let response = server
        .post_auth("/api/posts", &target.token, &CreatePostRequest::titled("After"))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "USER_BANNED");

    let response = server
        .post_auth("/api/votes", &target.token, &VoteRequest::up(post.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/posts/{}", post.id), &target.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Correct password, banned account
    let login = LoginRequest {
        email: target.user.email.clone(),
        password: "TestPass123!".to_string(),
    };
    let response = server.post("/api/auth/login", &login).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .post("/api/auth/refresh", &json!({ "refresh_token": target.refresh_token }))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Reads stay open
    let response = server.get(&format!("/api/posts/{}", post.id)).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Toggling again lifts the ban
    let response = server.patch_auth(&ban_path, &admin.token, &json!({})).await.unwrap();
    let unban: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(unban["is_banned"], false);
    server.login(&login).await.unwrap();
}

#[tokio::test]
async fn test_admin_cannot_ban_self() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin_session().await.unwrap();

    let response = server
        .patch_auth(
            &format!("/api/admin/users/{}/ban", admin.user.id),
            &admin.token,
            &json!({}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .patch_auth(
            &format!("/api/admin/users/{}/ban", i64::MAX),
            &admin.token,
            &json!({}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_analytics() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin_session().await.unwrap();
    let session = server.new_user().await.unwrap();
    create_post(&server, &session.token, "Counted").await;

    let response = server
        .get_auth("/api/admin/analytics", &admin.token)
        .await
        .unwrap();
    let stats: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(stats["total_users"].as_i64().unwrap() >= 2);
    assert!(stats["active_admins"].as_i64().unwrap() >= 1);
    assert!(stats["total_posts"].as_i64().unwrap() >= 1);
    assert!(stats["top_post"].is_object());
}
