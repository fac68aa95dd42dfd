// ABOUTME: Unified error handling for the meal plan generation pipeline
// ABOUTME: Defines error codes, the AppError type, and attempt-level context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Intelligence

//! # Unified Error Handling System
//!
//! This module provides the centralized error type used across the generation
//! pipeline. Every pipeline stage reports failure through [`AppError`], and
//! the retry orchestrator is the only place that turns a stage failure into a
//! terminal, caller-visible error ([`ErrorCode::ExhaustedRetries`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the generation pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Transport-level failure or per-attempt timeout reaching the generator
    #[serde(rename = "NETWORK_ERROR")]
    NetworkError,
    /// The generator responded with a non-success status
    #[serde(rename = "SERVICE_ERROR")]
    ServiceError,
    /// No opening delimiter found anywhere in the sanitized response
    #[serde(rename = "NO_STRUCTURE_FOUND")]
    NoStructureFound,
    /// The candidate payload is not well-formed structured text
    #[serde(rename = "PARSE_ERROR")]
    ParseError,
    /// The payload is well-formed but violates a domain invariant
    #[serde(rename = "SCHEMA_ERROR")]
    SchemaError,
    /// All generation attempts failed; carries the last underlying error
    #[serde(rename = "EXHAUSTED_RETRIES")]
    ExhaustedRetries,
    /// Configuration is missing or invalid
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError,
    /// Programming error or unclassified internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::NetworkError => "Could not reach the menu generation service",
            Self::ServiceError => "The menu generation service returned an error",
            Self::NoStructureFound => "The generated response contained no structured payload",
            Self::ParseError => "The structured payload could not be parsed",
            Self::SchemaError => "The generated plan violates the weekly menu structure",
            Self::ExhaustedRetries => "Could not generate a meal plan at this time",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal error occurred",
        }
    }

    /// Whether an attempt failing with this code is worth retrying
    ///
    /// Transient network errors and structural failures are retried
    /// identically: both are as likely to resolve on a different prompt
    /// variant as on a different connection.
    #[must_use]
    pub const fn retryable(&self) -> bool {
        match self {
            Self::NetworkError
            | Self::ServiceError
            | Self::NoStructureFound
            | Self::ParseError
            | Self::SchemaError => true,
            Self::ExhaustedRetries | Self::ConfigError | Self::InternalError => false,
        }
    }
}

/// Additional context attached to errors for diagnostics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Request correlation ID
    pub request_id: Option<String>,
    /// Attempt number (1-based) within the retry loop, if applicable
    pub attempt: Option<u32>,
    /// Additional key-value context
    pub details: serde_json::Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            request_id: None,
            attempt: None,
            details: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

/// Unified error type for the generation pipeline
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add a request ID to the error context
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.context.request_id = Some(request_id.into());
        self
    }

    /// Add the attempt number to the error context
    #[must_use]
    pub const fn with_attempt(mut self, attempt: u32) -> Self {
        self.context.attempt = Some(attempt);
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors for the pipeline error taxonomy
impl AppError {
    /// Transport failure or timeout reaching the completion service
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NetworkError, message)
    }

    /// Non-success response from the completion service
    pub fn service(status: u16, body: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ServiceError,
            format!("status {status}: {}", body.into()),
        )
        .with_details(serde_json::json!({ "status": status }))
    }

    /// No opening delimiter in the sanitized response
    #[must_use]
    pub fn no_structure_found() -> Self {
        Self::new(
            ErrorCode::NoStructureFound,
            "no opening brace in response text",
        )
    }

    /// Candidate payload failed to parse
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ParseError, message)
    }

    /// Well-formed payload violating a domain invariant
    pub fn schema(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SchemaError, message)
    }

    /// Terminal failure after the configured number of attempts
    ///
    /// The last attempt's error is preserved as the source for diagnostics.
    #[must_use]
    pub fn exhausted_retries(attempts: u32, last_error: Self) -> Self {
        Self::new(
            ErrorCode::ExhaustedRetries,
            format!("{attempts} attempts failed; last error: {last_error}"),
        )
        .with_details(serde_json::json!({
            "attempts": attempts,
            "last_code": last_error.code,
        }))
        .with_source(last_error)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Conversion from `anyhow::Error` for binary and tool call sites
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        match error.source() {
            Some(source) => Self::new(ErrorCode::InternalError, error.to_string()).with_details(
                serde_json::json!({
                    "source": source.to_string()
                }),
            ),
            None => Self::new(ErrorCode::InternalError, error.to_string()),
        }
    }
}
