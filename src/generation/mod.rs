// ABOUTME: Generation pipeline module wiring prompt, sanitize, extract,
// ABOUTME: validate, repair, retry orchestration, and the offline fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Intelligence

//! # Generation Pipeline
//!
//! The pipeline stages in dependency order, leaves first:
//!
//! - [`seed`] - deterministic hash-based pseudo-randomness
//! - [`prompt`] - instruction text composition (full and simplified)
//! - [`sanitize`] - textual normalization of raw responses
//! - [`extract`] - structured payload boundary isolation
//! - [`validate`] - wire decode and domain invariant checks
//! - [`repair`] - best-effort correction of malformed payloads
//! - [`orchestrator`] - the retry state machine over attempts
//! - [`fallback`] - offline deterministic plan assembly
//! - [`templates`] - the static meal template tables
//!
//! Each stage is an explicit, independently testable module rather than a
//! private helper of the retry loop.

pub mod extract;
pub mod fallback;
pub mod orchestrator;
pub mod prompt;
pub mod repair;
pub mod sanitize;
pub mod seed;
pub mod templates;
pub mod validate;

pub use orchestrator::MenuPlanner;
pub use prompt::PromptVariant;
pub use seed::{GenerationSeed, VarietyElements};
