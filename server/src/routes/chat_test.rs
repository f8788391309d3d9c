use super::*;
use axum::body::{Body, to_bytes};
use axum::http::Request;
use serde_json::Value;
use tower::ServiceExt;

use crate::routes::api_routes;
use crate::services::reddit::SubredditInfo;
use crate::state::test_helpers::{StubLookup, found, test_app_state, test_app_state_with_reddit};

async fn post_raw(state: AppState, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/send_message")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = api_routes(state).oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_message(state: AppState, message: &str) -> (StatusCode, Value) {
    post_raw(state, &serde_json::json!({ "message": message }).to_string()).await
}

fn not_found(name: &str) -> Result<SubredditInfo, RedditError> {
    Err(RedditError::NotFound(name.to_string()))
}

fn inaccessible(name: &str) -> Result<SubredditInfo, RedditError> {
    Err(RedditError::Inaccessible(name.to_string()))
}

fn api_failure(_name: &str) -> Result<SubredditInfo, RedditError> {
    Err(RedditError::Api("boom".into()))
}

// =============================================================================
// request validation
// =============================================================================

#[tokio::test]
async fn missing_message_key_is_bad_request() {
    let (status, body) = post_raw(test_app_state(), r#"{"text":"hi"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], INVALID_REQUEST_MESSAGE);
    assert!(body["reply"].is_null());
}

#[tokio::test]
async fn non_json_body_is_bad_request() {
    let (status, body) = post_raw(test_app_state(), "not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], INVALID_REQUEST_MESSAGE);
}

#[tokio::test]
async fn whitespace_message_asks_for_a_question() {
    let (status, body) = post_message(test_app_state(), "   ").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], EMPTY_MESSAGE_MESSAGE);
    assert!(body["reply"].is_null());
}

// =============================================================================
// replies
// =============================================================================

#[tokio::test]
async fn untagged_question_without_reddit() {
    let (status, body) = post_message(test_app_state(), "what is python?").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["error"].is_null());
    let reply = body["reply"].as_str().unwrap();
    assert!(reply.contains("don't have access to live Reddit data"));
    assert!(reply.contains("'what is python?'"));
}

#[tokio::test]
async fn untagged_question_with_reddit_skips_lookup() {
    let lookup = StubLookup::new(found);
    let (_, body) = post_message(test_app_state_with_reddit(lookup.clone()), "what is python?").await;
    assert!(body["reply"].as_str().unwrap().contains("you didn't specify a subreddit"));
    assert_eq!(lookup.call_count(), 0);
}

#[tokio::test]
async fn tagged_question_uses_subreddit_context() {
    let lookup = StubLookup::new(found);
    let (status, body) = post_message(test_app_state_with_reddit(lookup.clone()), "@r/rust how do lifetimes work?").await;
    assert_eq!(status, StatusCode::OK);
    let reply = body["reply"].as_str().unwrap();
    assert!(reply.contains("r/rust"));
    assert!(reply.contains("Subscribers: 42"));
    assert!(reply.contains("'how do lifetimes work?'"));
    assert_eq!(*lookup.calls.lock().unwrap(), vec!["rust".to_string()]);
}

#[tokio::test]
async fn tagged_question_without_reddit_answers_generally() {
    let (_, body) = post_message(test_app_state(), "@r/rust how do lifetimes work?").await;
    let reply = body["reply"].as_str().unwrap();
    assert!(reply.contains("don't have access to live Reddit data"));
    assert!(reply.contains("'how do lifetimes work?'"));
}

#[tokio::test]
async fn tag_without_question_is_an_error() {
    let lookup = StubLookup::new(found);
    let (status, body) = post_message(test_app_state_with_reddit(lookup.clone()), "@r/askreddit ").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], "You mentioned r/askreddit, but what is your question?");
    assert_eq!(lookup.call_count(), 0);
}

// =============================================================================
// lookup failures
// =============================================================================

#[tokio::test]
async fn unknown_subreddit_is_reported() {
    let state = test_app_state_with_reddit(StubLookup::new(not_found));
    let (status, body) = post_message(state, "@r/nosuchplace hello?").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], "Sorry, the subreddit r/nosuchplace could not be found.");
    assert!(body["reply"].is_null());
}

#[tokio::test]
async fn inaccessible_subreddit_is_reported() {
    let state = test_app_state_with_reddit(StubLookup::new(inaccessible));
    let (_, body) = post_message(state, "@r/secret hello?").await;
    assert_eq!(body["error"], "Sorry, r/secret is private, banned, or quarantined.");
}

#[tokio::test]
async fn api_failure_is_reported_generically() {
    let state = test_app_state_with_reddit(StubLookup::new(api_failure));
    let (_, body) = post_message(state, "@r/rust hello?").await;
    assert_eq!(body["error"], "Sorry, an error occurred with the Reddit API while trying to fetch r/rust.");
}

// =============================================================================
// answer
// =============================================================================

#[tokio::test]
async fn answer_sets_exactly_one_field() {
    let state = test_app_state_with_reddit(StubLookup::new(found));
    for message in ["", "hi", "@r/rust", "@r/rust why?"] {
        let reply = answer(&state, message).await;
        assert!(reply.reply.is_some() ^ reply.error.is_some(), "message {message:?}");
    }
}

#[tokio::test]
async fn healthz_is_ok() {
    let req = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
    let resp = api_routes(test_app_state()).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
