// ABOUTME: Command-line interface for generating weekly meal plans
// ABOUTME: Drives the online pipeline or the deterministic offline fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Intelligence

//! Generate a weekly meal plan from the command line.
//!
//! Online generation reads `NUTRIPLAN_LLM_*` environment variables for the
//! completion endpoint; `--offline` needs no network at all.

use anyhow::{Context, Result};
use clap::Parser;

use nutriplan::generation::{fallback, GenerationSeed, MenuPlanner};
use nutriplan::models::MenuRequest;

#[derive(Debug, Parser)]
#[command(name = "nutriplan-cli", about = "Generate a 7-day meal plan", version)]
struct Cli {
    /// Total calories for the week
    #[arg(long, default_value_t = 14_000.0)]
    weekly_calories: f64,

    /// Daily protein target in grams
    #[arg(long, default_value_t = 150.0)]
    protein: f64,

    /// Daily carbohydrate target in grams
    #[arg(long, default_value_t = 210.0)]
    carbs: f64,

    /// Daily fat target in grams
    #[arg(long, default_value_t = 60.0)]
    fat: f64,

    /// Dietary preference tags (repeatable), e.g. --diet vegan
    #[arg(long = "diet")]
    diets: Vec<String>,

    /// Allergy tags (repeatable), e.g. --allergy nuts
    #[arg(long = "allergy")]
    allergies: Vec<String>,

    /// Preferred cuisines (repeatable)
    #[arg(long = "cuisine")]
    cuisines: Vec<String>,

    /// Weekly grocery budget ceiling
    #[arg(long)]
    budget: Option<f64>,

    /// Skip the online generator and build the plan offline
    #[arg(long)]
    offline: bool,

    /// Explicit seed for reproducible offline plans (implies --offline)
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    nutriplan::logging::init_from_env();
    let cli = Cli::parse();

    let mut request = MenuRequest::new(cli.protein, cli.carbs, cli.fat, cli.weekly_calories)
        .with_dietary_preferences(cli.diets)
        .with_allergies(cli.allergies)
        .with_cuisines(cli.cuisines);
    if let Some(budget) = cli.budget {
        request = request.with_budget(budget);
    }

    let menu = if let Some(seed) = cli.seed {
        let start = chrono::Utc::now().date_naive();
        fallback::generate_with_seed(&request, GenerationSeed::new(seed), start)
    } else if cli.offline {
        fallback::generate(&request)
    } else {
        let planner = MenuPlanner::from_env().context("failed to construct planner")?;
        planner
            .generate_week_menu(&request)
            .await
            .context("could not generate a meal plan at this time")?
    };

    println!("{}", serde_json::to_string_pretty(&menu)?);
    Ok(())
}
