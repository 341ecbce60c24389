//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL (SUPABASE_JWT_SECRET optional)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::Value;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["checks"]["database"], "healthy");
    assert_eq!(body["checks"]["redis"], "healthy");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_toggle_requires_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/v1/books/1/favorite", &serde_json::json!({}))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body["error"]["code"], "MISSING_AUTH");
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get_auth("/api/v1/users/@me/favorites", "not-a-jwt")
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_TOKEN");
}

// ============================================================================
// Book Tests
// ============================================================================

#[tokio::test]
async fn test_book_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.new_user().unwrap();
    let book_id = create_book(&server, &token).await.unwrap();

    let response = server.get(&format!("/api/v1/books/{book_id}")).await.unwrap();
    let book: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(book["author"], "Ursula K. Le Guin");

    let response = server
        .patch_auth(
            &format!("/api/v1/books/{book_id}"),
            &token,
            &serde_json::json!({ "published_year": 1970 }),
        )
        .await
        .unwrap();
    let book: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(book["published_year"], 1970);

    // Served again after the cached copy was invalidated
    let response = server.get(&format!("/api/v1/books/{book_id}")).await.unwrap();
    let book: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(book["published_year"], 1970);

    let response = server
        .delete_auth(&format!("/api/v1/books/{book_id}"), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&format!("/api/v1/books/{book_id}")).await.unwrap();
    let body: Value = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body["error"]["code"], "UNKNOWN_BOOK");
}

#[tokio::test]
async fn test_search_finds_created_book() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.new_user().unwrap();
    let marker = unique_suffix();
    let title = format!("Searchable {marker}");

    let response = server
        .post_auth("/api/v1/books", &token, &book_payload(&title))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get(&format!("/api/v1/books?search={marker}"))
        .await
        .unwrap();
    let books: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["title"], title.as_str());
}

// ============================================================================
// Favorite Tests
// ============================================================================

#[tokio::test]
async fn test_favorite_toggle_round_trip() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = server.new_user().unwrap();
    let (_, bob) = server.new_user().unwrap();
    let book_id = create_book(&server, &alice).await.unwrap();
    let toggle = format!("/api/v1/books/{book_id}/favorite");
    let count = format!("/api/v1/books/{book_id}/favorites/count");

    let response = server.post_empty_auth(&toggle, &alice).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["added"], true);

    let response = server.post_empty_auth(&toggle, &bob).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["added"], true);

    let response = server.get(&count).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["count"], 2);

    let response = server
        .get_auth("/api/v1/users/@me/favorites", &alice)
        .await
        .unwrap();
    let books: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(books.iter().any(|b| b["id"] == book_id));

    let response = server.post_empty_auth(&toggle, &alice).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["added"], false);

    let response = server.get_auth(&toggle, &alice).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["favorite"], false);

    let response = server.get(&count).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["count"], 1);
}

#[tokio::test]
async fn test_favorite_unknown_book() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.new_user().unwrap();

    let response = server
        .post_empty_auth("/api/v1/books/999999999/favorite", &token)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body["error"]["code"], "UNKNOWN_BOOK");
}

// ============================================================================
// Comment and Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_comment_reactions_are_aggregated() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, author) = server.new_user().unwrap();
    let (_, reader) = server.new_user().unwrap();
    let book_id = create_book(&server, &author).await.unwrap();
    let comment_id = create_comment(&server, &author, book_id, "Loved it")
        .await
        .unwrap();
    let reaction = format!("/api/v1/comments/{comment_id}/reactions/@me");

    for token in [&author, &reader] {
        let response = server
            .put_auth(&reaction, token, &reaction_payload("like"))
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    // Replacing a reaction keeps one row per user
    let response = server
        .put_auth(&reaction, &reader, &reaction_payload("love"))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/books/{book_id}/comments"), &reader)
        .await
        .unwrap();
    let comments: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["reaction_counts"]["like"], 1);
    assert_eq!(comments[0]["reaction_counts"]["love"], 1);
    assert_eq!(comments[0]["viewer_reaction"], "love");

    let response = server.delete_auth(&reaction, &reader).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/books/{book_id}/comments"))
        .await
        .unwrap();
    let comments: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(comments[0]["reaction_counts"].get("love").is_none());
    assert!(comments[0]["viewer_reaction"].is_null());
}

#[tokio::test]
async fn test_only_author_deletes_comment() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, author) = server.new_user().unwrap();
    let (_, other) = server.new_user().unwrap();
    let book_id = create_book(&server, &author).await.unwrap();
    let comment_id = create_comment(&server, &author, book_id, "Mine")
        .await
        .unwrap();
    let path = format!("/api/v1/comments/{comment_id}");

    let response = server.delete_auth(&path, &other).await.unwrap();
    let body: Value = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body["error"]["code"], "NOT_COMMENT_AUTHOR");

    let response = server.delete_auth(&path, &author).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_malformed_reaction_kind() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.new_user().unwrap();
    let book_id = create_book(&server, &token).await.unwrap();
    let comment_id = create_comment(&server, &token, book_id, "Hmm")
        .await
        .unwrap();

    let response = server
        .put_auth(
            &format!("/api/v1/comments/{comment_id}/reactions/@me"),
            &token,
            &reaction_payload("thumbs up!"),
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_REACTION_KIND");
}

// ============================================================================
// Category Tests
// ============================================================================

#[tokio::test]
async fn test_category_create_and_delete() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.new_user().unwrap();
    let name = format!("Category {}", unique_suffix());

    let response = server
        .post_auth("/api/v1/categories", &token, &category_payload(&name))
        .await
        .unwrap();
    let category: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let id = category["id"].as_i64().unwrap();

    let response = server
        .post_auth("/api/v1/categories", &token, &category_payload(&name))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body["error"]["code"], "CATEGORY_ALREADY_EXISTS");

    let response = server
        .delete_auth(&format!("/api/v1/categories/{id}"), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

// ============================================================================
// Contact Tests
// ============================================================================

#[tokio::test]
async fn test_contact_form_without_smtp() {
    if !check_test_env().await {
        return;
    }
    if std::env::var("SMTP_HOST").is_ok() {
        eprintln!("Skipping test: SMTP_HOST is set");
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/v1/contact", &contact_payload())
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();
    assert_eq!(body["error"]["code"], "SERVICE_UNAVAILABLE");
}
