// ABOUTME: Shared test utilities: quiet logging and a scriptable stub client
// ABOUTME: Provides payload builders for valid and broken generator responses
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nutriplan.org
#![allow(dead_code)]

//! Shared test utilities for `nutriplan` integration tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;

use nutriplan::errors::{AppError, AppResult};
use nutriplan::llm::{CompletionClient, CompletionRequest, CompletionResponse};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Scriptable completion client recording every prompt it receives
///
/// Responses are served from the script in order; when the script runs dry
/// the repeating text (if any) is served forever.
pub struct StubCompletionClient {
    responses: Mutex<VecDeque<AppResult<String>>>,
    repeating: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl StubCompletionClient {
    /// Serve the scripted responses in order
    pub fn with_script(script: Vec<AppResult<String>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(script.into()),
            repeating: None,
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// Serve the same text on every call
    pub fn repeating(text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(VecDeque::new()),
            repeating: Some(text.into()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// Every prompt received so far, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Number of completion calls made
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionClient for StubCompletionClient {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn default_model(&self) -> &str {
        "stub-model"
    }

    async fn complete(&self, request: &CompletionRequest) -> AppResult<CompletionResponse> {
        self.prompts.lock().unwrap().push(request.prompt.clone());

        let next = self.responses.lock().unwrap().pop_front();
        let content = match next {
            Some(result) => result?,
            None => self
                .repeating
                .clone()
                .ok_or_else(|| AppError::internal("stub script exhausted"))?,
        };

        Ok(CompletionResponse {
            content,
            model: "stub-model".to_owned(),
            finish_reason: Some("stop".to_owned()),
        })
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

/// A well-formed meal object in the generator wire format
pub fn meal_json(name: &str, calories: f64) -> String {
    format!(
        r#"{{"name": "{name}", "instructions": "Prepare and serve.",
           "ingredients": ["main ingredient", "seasoning"],
           "prep_time_mins": 10, "cook_time_mins": 15,
           "nutrition": {{"calories": {calories}, "protein_g": 25,
           "carbs_g": 40, "fat_g": 12, "fiber_g": 5}}}}"#
    )
}

/// A well-formed day object with breakfast, lunch, and dinner
pub fn day_json(day_name: &str, date: &str) -> String {
    format!(
        r#"{{"day_name": "{day_name}", "date": "{date}",
           "daily_nutrition": {{"calories": 2000, "protein_g": 150,
           "carbs_g": 210, "fat_g": 60}},
           "breakfast": {breakfast},
           "lunch": {lunch},
           "dinner": {dinner},
           "snacks": [{snack}]}}"#,
        breakfast = meal_json(&format!("{day_name} oats"), 450.0),
        lunch = meal_json(&format!("{day_name} salad"), 550.0),
        dinner = meal_json(&format!("{day_name} curry"), 700.0),
        snack = meal_json("Fruit bowl", 200.0),
    )
}

/// A complete valid seven-day payload
pub fn valid_week_json() -> String {
    let names = [
        ("Monday", "2026-08-10"),
        ("Tuesday", "2026-08-11"),
        ("Wednesday", "2026-08-12"),
        ("Thursday", "2026-08-13"),
        ("Friday", "2026-08-14"),
        ("Saturday", "2026-08-15"),
        ("Sunday", "2026-08-16"),
    ];
    let days: Vec<String> = names
        .iter()
        .map(|(name, date)| day_json(name, date))
        .collect();
    format!(r#"{{"days": [{}]}}"#, days.join(", "))
}

/// The valid payload truncated mid-way through the given day's daily
/// nutrition record (1-based day number)
pub fn week_truncated_in_day(day_number: usize) -> String {
    let full = valid_week_json();
    let day_starts: Vec<usize> = full.match_indices("\"day_name\"").map(|(i, _)| i).collect();
    assert!(day_number <= day_starts.len());

    // Cut inside the day's daily_nutrition object, right after "protein_g"
    let day_start = day_starts[day_number - 1];
    let cut = full[day_start..]
        .find("\"protein_g\"")
        .map(|offset| day_start + offset)
        .expect("day should contain a daily nutrition record");
    full[..cut].to_owned()
}
