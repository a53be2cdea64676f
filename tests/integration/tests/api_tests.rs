//! End-to-end API tests
//!
//! These tests require a running PostgreSQL instance and skip themselves
//! when DATABASE_URL is not set.

use anyhow::Result;
use integration_tests::*;
use reqwest::StatusCode;

/// Register a fresh user and return its credentials plus auth tokens
async fn register_user(server: &TestServer) -> Result<(RegisterRequest, AuthResponse)> {
    let request = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &request).await?;
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await?;
    Ok((request, auth))
}

/// Create a group and a post inside it, returning the annotated post
async fn create_post_in_new_group(server: &TestServer, token: &str) -> Result<PostResponse> {
    let group = CreateGroupRequest::unique();
    let response = server.post_auth("/api/v1/groups", token, &group).await?;
    assert_status(response, StatusCode::CREATED).await?;

    let post_request = CreatePostRequest::new(&group.name, "An interesting discussion");
    let response = server
        .post_auth("/api/v1/posts", token, &post_request)
        .await?;
    assert_json(response, StatusCode::CREATED).await
}

// ============================================================================
// Health checks
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/health").await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_readiness_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/health/ready").await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    assert_eq!(body["database"], "up");
}

// ============================================================================
// Authentication
// ============================================================================

#[tokio::test]
async fn test_register_and_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let (register, auth) = register_user(&server).await.expect("Registration failed");
    assert_eq!(auth.token_type, "Bearer");
    assert_eq!(auth.user.username, register.username);
    assert_eq!(auth.user.email, register.email);
    assert!(auth.expires_in > 0);
    assert!(!auth.user.id.is_empty());

    let login = LoginRequest::from_register(&register);
    let response = server
        .post("/api/v1/auth/login", &login)
        .await
        .expect("Request failed");
    let auth: AuthResponse = assert_json(response, StatusCode::OK)
        .await
        .expect("Login failed");
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let (register, _) = register_user(&server).await.expect("Registration failed");

    let mut duplicate = RegisterRequest::unique();
    duplicate.email = register.email.clone();
    let response = server
        .post("/api/v1/auth/register", &duplicate)
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_login_wrong_password_unauthorized() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let (register, _) = register_user(&server).await.expect("Registration failed");

    let login = LoginRequest {
        email: register.email.clone(),
        password: "WrongPass123!".to_string(),
    };
    let response = server
        .post("/api/v1/auth/login", &login)
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_token_rotates_pair() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let (_, auth) = register_user(&server).await.expect("Registration failed");

    let refresh = RefreshTokenRequest {
        refresh_token: auth.refresh_token.clone(),
    };
    let response = server
        .post("/api/v1/auth/refresh", &refresh)
        .await
        .expect("Request failed");
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK)
        .await
        .expect("Refresh failed");
    assert!(!refreshed.access_token.is_empty());
    assert_eq!(refreshed.user.id, auth.user.id);
}

#[tokio::test]
async fn test_current_user_requires_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/auth/me").await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let (register, auth) = register_user(&server).await.expect("Registration failed");
    let response = server
        .get_auth("/api/v1/auth/me", &auth.access_token)
        .await
        .expect("Request failed");
    let user: UserResponse = assert_json(response, StatusCode::OK)
        .await
        .expect("Fetching current user failed");
    assert_eq!(user.username, register.username);
}

// ============================================================================
// Voting
// ============================================================================

#[tokio::test]
async fn test_vote_lifecycle_on_post() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let (_, auth) = register_user(&server).await.expect("Registration failed");
    let token = &auth.access_token;
    let post = create_post_in_new_group(&server, token)
        .await
        .expect("Post creation failed");

    // Fresh post carries the author's own zero annotation
    assert_eq!(post.like_score, 0);
    assert_eq!(post.user_vote, Some(0));

    // Upvote
    let request = CastVoteRequest::for_post(&post.identifier, &post.slug, 1);
    let response = server
        .post_auth("/api/v1/votes", token, &request)
        .await
        .expect("Request failed");
    let detail: PostDetailResponse = assert_json(response, StatusCode::OK)
        .await
        .expect("Vote failed");
    assert_eq!(detail.like_score, 1);
    assert_eq!(detail.user_vote, Some(1));

    // Same direction again is a no-op
    let response = server
        .post_auth("/api/v1/votes", token, &request)
        .await
        .expect("Request failed");
    let detail: PostDetailResponse = assert_json(response, StatusCode::OK)
        .await
        .expect("Vote failed");
    assert_eq!(detail.like_score, 1);
    assert_eq!(detail.user_vote, Some(1));

    // Flip to downvote
    let request = CastVoteRequest::for_post(&post.identifier, &post.slug, -1);
    let response = server
        .post_auth("/api/v1/votes", token, &request)
        .await
        .expect("Request failed");
    let detail: PostDetailResponse = assert_json(response, StatusCode::OK)
        .await
        .expect("Vote failed");
    assert_eq!(detail.like_score, -1);
    assert_eq!(detail.user_vote, Some(-1));

    // Retract
    let request = CastVoteRequest::for_post(&post.identifier, &post.slug, 0);
    let response = server
        .post_auth("/api/v1/votes", token, &request)
        .await
        .expect("Request failed");
    let detail: PostDetailResponse = assert_json(response, StatusCode::OK)
        .await
        .expect("Vote failed");
    assert_eq!(detail.like_score, 0);
    assert_eq!(detail.user_vote, Some(0));

    // Retracting again finds nothing to remove
    let response = server
        .post_auth("/api/v1/votes", token, &request)
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_vote_requires_authentication() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = CastVoteRequest::for_post("abcdefgh", "some-slug", 1);
    let response = server
        .post("/api/v1/votes", &request)
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_vote_rejects_out_of_range_value() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let (_, auth) = register_user(&server).await.expect("Registration failed");
    let token = &auth.access_token;
    let post = create_post_in_new_group(&server, token)
        .await
        .expect("Post creation failed");

    let request = CastVoteRequest::for_post(&post.identifier, &post.slug, 7);
    let response = server
        .post_auth("/api/v1/votes", token, &request)
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: ErrorBody = response.json().await.expect("Invalid error body");
    assert_eq!(body.error.code, "INVALID_VOTE_VALUE");
}

#[tokio::test]
async fn test_vote_on_missing_post_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let (_, auth) = register_user(&server).await.expect("Registration failed");

    let request = CastVoteRequest::for_post("zzzzzzzz", "no-such-post", 1);
    let response = server
        .post_auth("/api/v1/votes", &auth.access_token, &request)
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_vote_on_comment_annotates_nested_comment() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let (_, auth) = register_user(&server).await.expect("Registration failed");
    let token = &auth.access_token;
    let post = create_post_in_new_group(&server, token)
        .await
        .expect("Post creation failed");

    let comment_request = CreateCommentRequest {
        body: "A comment worth downvoting".to_string(),
    };
    let path = format!("/api/v1/posts/{}/{}/comments", post.identifier, post.slug);
    let response = server
        .post_auth(&path, token, &comment_request)
        .await
        .expect("Request failed");
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED)
        .await
        .expect("Comment creation failed");

    let request =
        CastVoteRequest::for_comment(&post.identifier, &post.slug, &comment.identifier, -1);
    let response = server
        .post_auth("/api/v1/votes", token, &request)
        .await
        .expect("Request failed");
    let detail: PostDetailResponse = assert_json(response, StatusCode::OK)
        .await
        .expect("Vote failed");

    // The post itself stays at zero, the nested comment carries the vote
    assert_eq!(detail.like_score, 0);
    assert_eq!(detail.comment_count, 1);
    let nested = detail
        .comments
        .iter()
        .find(|c| c.identifier == comment.identifier)
        .expect("Comment missing from detail");
    assert_eq!(nested.like_score, -1);
    assert_eq!(nested.user_vote, Some(-1));
}

#[tokio::test]
async fn test_scores_aggregate_across_voters() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let (_, author) = register_user(&server).await.expect("Registration failed");
    let post = create_post_in_new_group(&server, &author.access_token)
        .await
        .expect("Post creation failed");

    let up = CastVoteRequest::for_post(&post.identifier, &post.slug, 1);
    let down = CastVoteRequest::for_post(&post.identifier, &post.slug, -1);

    for _ in 0..2 {
        let (_, voter) = register_user(&server).await.expect("Registration failed");
        let response = server
            .post_auth("/api/v1/votes", &voter.access_token, &up)
            .await
            .expect("Request failed");
        assert_status(response, StatusCode::OK)
            .await
            .expect("Vote failed");
    }

    let (_, dissenter) = register_user(&server).await.expect("Registration failed");
    let response = server
        .post_auth("/api/v1/votes", &dissenter.access_token, &down)
        .await
        .expect("Request failed");
    let detail: PostDetailResponse = assert_json(response, StatusCode::OK)
        .await
        .expect("Vote failed");

    // Two upvotes and one downvote net to +1
    assert_eq!(detail.like_score, 1);
    assert_eq!(detail.user_vote, Some(-1));
}

#[tokio::test]
async fn test_concurrent_distinct_voters_both_recorded() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let (_, author) = register_user(&server).await.expect("Registration failed");
    let post = create_post_in_new_group(&server, &author.access_token)
        .await
        .expect("Post creation failed");

    let (_, alice) = register_user(&server).await.expect("Registration failed");
    let (_, bob) = register_user(&server).await.expect("Registration failed");

    let up = CastVoteRequest::for_post(&post.identifier, &post.slug, 1);
    let (first, second) = tokio::join!(
        server.post_auth("/api/v1/votes", &alice.access_token, &up),
        server.post_auth("/api/v1/votes", &bob.access_token, &up),
    );
    assert_status(first.expect("Request failed"), StatusCode::OK)
        .await
        .expect("Vote failed");
    assert_status(second.expect("Request failed"), StatusCode::OK)
        .await
        .expect("Vote failed");

    // Neither vote was lost
    let path = format!("/api/v1/posts/{}/{}", post.identifier, post.slug);
    let response = server
        .get_auth(&path, &alice.access_token)
        .await
        .expect("Request failed");
    let detail: PostDetailResponse = assert_json(response, StatusCode::OK)
        .await
        .expect("Fetching post failed");
    assert_eq!(detail.like_score, 2);
    assert_eq!(detail.user_vote, Some(1));
}

// ============================================================================
// Viewer annotation
// ============================================================================

#[tokio::test]
async fn test_anonymous_viewer_gets_no_user_vote_field() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let (_, auth) = register_user(&server).await.expect("Registration failed");
    let post = create_post_in_new_group(&server, &auth.access_token)
        .await
        .expect("Post creation failed");

    let path = format!("/api/v1/posts/{}/{}", post.identifier, post.slug);
    let response = server.get(&path).await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    assert_eq!(body["like_score"], 0);
    assert!(
        body.get("user_vote").is_none(),
        "user_vote must be omitted for anonymous viewers"
    );
}

#[tokio::test]
async fn test_authenticated_non_voter_sees_zero_user_vote() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let (_, author) = register_user(&server).await.expect("Registration failed");
    let post = create_post_in_new_group(&server, &author.access_token)
        .await
        .expect("Post creation failed");

    let (_, viewer) = register_user(&server).await.expect("Registration failed");
    let path = format!("/api/v1/posts/{}/{}", post.identifier, post.slug);
    let response = server
        .get_auth(&path, &viewer.access_token)
        .await
        .expect("Request failed");
    let detail: PostDetailResponse = assert_json(response, StatusCode::OK)
        .await
        .expect("Fetching post failed");
    assert_eq!(detail.user_vote, Some(0));
}

#[tokio::test]
async fn test_invalid_token_rejected_on_read() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let (_, auth) = register_user(&server).await.expect("Registration failed");
    let post = create_post_in_new_group(&server, &auth.access_token)
        .await
        .expect("Post creation failed");

    let path = format!("/api/v1/posts/{}/{}", post.identifier, post.slug);
    let response = server
        .get_auth(&path, "not-a-real-token")
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ============================================================================
// Groups and profiles
// ============================================================================

#[tokio::test]
async fn test_top_groups_lists_created_group() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let (_, auth) = register_user(&server).await.expect("Registration failed");
    let post = create_post_in_new_group(&server, &auth.access_token)
        .await
        .expect("Post creation failed");

    let response = server.get("/api/v1/groups/top").await.expect("Request failed");
    let top: Vec<TopGroupResponse> = assert_json(response, StatusCode::OK)
        .await
        .expect("Fetching top groups failed");

    // Other tests share the database, so only check our group's entry
    if let Some(entry) = top.iter().find(|g| g.name == post.group_name) {
        assert!(entry.post_count >= 1);
    }
}

#[tokio::test]
async fn test_user_profile_merges_posts_and_comments() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let (register, auth) = register_user(&server).await.expect("Registration failed");
    let token = &auth.access_token;
    let post = create_post_in_new_group(&server, token)
        .await
        .expect("Post creation failed");

    let comment_request = CreateCommentRequest {
        body: "Commenting on my own post".to_string(),
    };
    let path = format!("/api/v1/posts/{}/{}/comments", post.identifier, post.slug);
    let response = server
        .post_auth(&path, token, &comment_request)
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::CREATED)
        .await
        .expect("Comment creation failed");

    let path = format!("/api/v1/users/{}", register.username);
    let response = server.get(&path).await.expect("Request failed");
    let profile: UserProfileResponse = assert_json(response, StatusCode::OK)
        .await
        .expect("Fetching profile failed");

    assert_eq!(profile.user.username, register.username);
    assert_eq!(profile.content.len(), 2);
    // Newest first: the comment was created after the post
    assert_eq!(profile.content[0]["kind"], "comment");
    assert_eq!(profile.content[1]["kind"], "post");
}

#[tokio::test]
async fn test_unknown_user_profile_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get("/api/v1/users/no-such-user-anywhere")
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
