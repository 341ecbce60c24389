//! Request payloads and setup shortcuts shared by the API tests

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::helpers::{assert_json, TestServer};

/// Short random suffix so repeated runs against one database do not collide
pub fn unique_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

pub fn book_payload(title: &str) -> Value {
    json!({
        "title": title,
        "author": "Ursula K. Le Guin",
        "description": "A test book",
        "published_year": 1969
    })
}

pub fn category_payload(name: &str) -> Value {
    json!({ "name": name })
}

pub fn comment_payload(body: &str) -> Value {
    json!({ "body": body })
}

pub fn reaction_payload(kind: &str) -> Value {
    json!({ "kind": kind })
}

pub fn contact_payload() -> Value {
    json!({
        "name": "Integration Test",
        "email": "tester@example.com",
        "subject": "Hello",
        "message": "Sent from the integration suite"
    })
}

/// Create a book and return its id
pub async fn create_book(server: &TestServer, token: &str) -> Result<i64> {
    let title = format!("The Left Hand of Darkness {}", unique_suffix());
    let response = server
        .post_auth("/api/v1/books", token, &book_payload(&title))
        .await?;
    let body: Value = assert_json(response, StatusCode::CREATED).await?;
    body["id"].as_i64().context("book id missing")
}

/// Post a comment on `book_id` and return its id
pub async fn create_comment(
    server: &TestServer,
    token: &str,
    book_id: i64,
    body: &str,
) -> Result<i64> {
    let response = server
        .post_auth(
            &format!("/api/v1/books/{book_id}/comments"),
            token,
            &comment_payload(body),
        )
        .await?;
    let body: Value = assert_json(response, StatusCode::CREATED).await?;
    body["id"].as_i64().context("comment id missing")
}
