// ABOUTME: Crate root for the Nutriplan weekly menu generation engine
// ABOUTME: Wires errors, config, models, the LLM client, and the pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Intelligence

//! # Nutriplan
//!
//! A weekly meal plan generation engine hardened against unreliable LLM
//! output. The online path drives an external completion service through a
//! retrying pipeline (prompt, sanitize, extract, validate, repair); the
//! offline path assembles a deterministic plan from static templates. A
//! returned online plan always originated from the generator: fallback is a
//! separate, explicitly invoked path, never a silent substitute.
//!
//! ## Example
//!
//! ```rust,no_run
//! use nutriplan::generation::MenuPlanner;
//! use nutriplan::models::MenuRequest;
//!
//! # async fn example() -> Result<(), nutriplan::errors::AppError> {
//! let planner = MenuPlanner::from_env()?;
//! let request = MenuRequest::new(150.0, 210.0, 60.0, 14_000.0)
//!     .with_allergies(vec!["nuts".to_owned()]);
//!
//! let menu = match planner.generate_week_menu(&request).await {
//!     Ok(menu) => menu,
//!     // Falling back is the caller's decision, not the pipeline's
//!     Err(_) => planner.generate_fallback_week_menu(&request),
//! };
//! assert_eq!(menu.days().len(), 7);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod errors;
pub mod generation;
pub mod llm;
pub mod logging;
pub mod models;

pub use config::GenerationConfig;
pub use errors::{AppError, AppResult, ErrorCode};
pub use generation::{GenerationSeed, MenuPlanner};
pub use models::{MenuRequest, WeekMenu};
