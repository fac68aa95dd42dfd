// ABOUTME: Integration tests for the retry orchestration state machine
// ABOUTME: Attempt counting, prompt variant alternation, and exhaustion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Intelligence
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, valid_week_json, StubCompletionClient};
use nutriplan::config::GenerationConfig;
use nutriplan::errors::{AppError, ErrorCode};
use nutriplan::generation::MenuPlanner;
use nutriplan::models::MenuRequest;

fn test_config() -> GenerationConfig {
    GenerationConfig::default()
        .with_max_attempts(5)
        .with_backoff_ms(0, 0)
}

fn request() -> MenuRequest {
    MenuRequest::new(150.0, 210.0, 60.0, 14_000.0)
}

#[tokio::test]
async fn test_success_on_first_attempt_makes_one_call() {
    init_test_logging();
    let stub = StubCompletionClient::with_script(vec![Ok(valid_week_json())]);
    let planner = MenuPlanner::new(stub.clone(), test_config());

    let menu = planner.generate_week_menu(&request()).await.unwrap();

    assert_eq!(menu.days().len(), 7);
    assert_eq!(stub.call_count(), 1);
    // The first attempt always uses the full prompt
    assert!(stub.prompts()[0].contains("For variety this week"));
}

#[tokio::test]
async fn test_failing_four_attempts_succeeds_on_fifth() {
    init_test_logging();
    let stub = StubCompletionClient::with_script(vec![
        Err(AppError::network("connection reset")),
        Ok("I'd be happy to help, but no plan today.".to_owned()),
        Err(AppError::service(500, "internal error")),
        Ok("{\"days\": [oops".to_owned()),
        Ok(valid_week_json()),
    ]);
    let planner = MenuPlanner::new(stub.clone(), test_config());

    let menu = planner.generate_week_menu(&request()).await.unwrap();

    assert_eq!(menu.days().len(), 7);
    assert_eq!(stub.call_count(), 5);

    // Prompt variants alternate: odd attempts full, even attempts simplified
    let prompts = stub.prompts();
    for (index, prompt) in prompts.iter().enumerate() {
        let is_full = index % 2 == 0;
        assert_eq!(
            prompt.contains("For variety this week"),
            is_full,
            "attempt {} used the wrong prompt variant",
            index + 1
        );
    }
}

#[tokio::test]
async fn test_unparsable_responses_exhaust_after_exactly_max_attempts() {
    init_test_logging();
    let stub = StubCompletionClient::repeating("I cannot produce structured output, sorry.");
    let planner = MenuPlanner::new(stub.clone(), test_config());

    let error = planner.generate_week_menu(&request()).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::ExhaustedRetries);
    assert_eq!(stub.call_count(), 5);
    assert_eq!(error.context.details["attempts"], 5);
    // The last underlying error is preserved for diagnostics
    assert_eq!(error.context.details["last_code"], "NO_STRUCTURE_FOUND");
    assert!(error.source.is_some());
}

#[tokio::test]
async fn test_network_and_structural_failures_are_retried_identically() {
    init_test_logging();
    let stub = StubCompletionClient::with_script(vec![
        Err(AppError::network("timed out")),
        Ok("no structure".to_owned()),
        Err(AppError::network("timed out")),
        Ok("{\"days\": [broken".to_owned()),
        Err(AppError::service(429, "rate limited")),
    ]);
    let planner = MenuPlanner::new(stub.clone(), test_config());

    let error = planner.generate_week_menu(&request()).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::ExhaustedRetries);
    assert_eq!(stub.call_count(), 5);
    assert_eq!(error.context.details["last_code"], "SERVICE_ERROR");
}

#[tokio::test]
async fn test_attempt_succeeds_through_repair() {
    init_test_logging();
    // The payload lost its final two closers in transit
    let full = valid_week_json();
    let truncated = full[..full.len() - 2].to_owned();

    let stub = StubCompletionClient::with_script(vec![Ok(truncated)]);
    let planner = MenuPlanner::new(stub.clone(), test_config());

    let menu = planner.generate_week_menu(&request()).await.unwrap();

    assert_eq!(menu.days().len(), 7);
    assert_eq!(stub.call_count(), 1);
}

#[tokio::test]
async fn test_fewer_attempts_when_configured() {
    init_test_logging();
    let stub = StubCompletionClient::repeating("still nothing structured");
    let config = GenerationConfig::default()
        .with_max_attempts(2)
        .with_backoff_ms(0, 0);
    let planner = MenuPlanner::new(stub.clone(), config);

    let error = planner.generate_week_menu(&request()).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::ExhaustedRetries);
    assert_eq!(stub.call_count(), 2);
}

#[tokio::test]
async fn test_fallback_path_is_explicit_and_infallible() {
    init_test_logging();
    // Even with a dead client, the offline path produces a full plan
    let stub = StubCompletionClient::repeating("irrelevant");
    let planner = MenuPlanner::new(stub.clone(), test_config());

    let menu = planner.generate_fallback_week_menu(&request());

    assert_eq!(menu.days().len(), 7);
    // And it never touched the network path
    assert_eq!(stub.call_count(), 0);
}
