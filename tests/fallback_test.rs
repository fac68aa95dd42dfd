// ABOUTME: Integration tests for deterministic offline plan generation
// ABOUTME: Structural guarantees, diet branches, allergies, and scaling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Intelligence
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;
use nutriplan::generation::fallback::{generate, generate_with_seed};
use nutriplan::generation::GenerationSeed;
use nutriplan::models::{DaySchedule, MenuRequest, WeekMenu, DAY_NAMES};

fn start_date() -> NaiveDate {
    // A Monday
    NaiveDate::from_ymd_opt(2026, 8, 10).unwrap()
}

fn assert_structurally_valid(menu: &WeekMenu) {
    assert_eq!(menu.days().len(), 7);
    for (index, day) in menu.days().iter().enumerate() {
        assert_eq!(day.day_name, DAY_NAMES[index]);
        assert!(day.meals.has_main_meal());
        assert!(day.meals.meal_count() >= 1);
        for meal in day.meals.iter() {
            assert!(meal.nutrition.calories > 0.0, "{}", meal.name);
            assert!(!meal.name.is_empty());
            assert!(!meal.ingredients.is_empty());
        }
        assert!(day.nutrition.calories > 0.0);
    }
}

#[test]
fn test_every_diet_branch_produces_a_valid_week() {
    let diets: [&[&str]; 3] = [&[], &["vegetarian"], &["vegan"]];
    for tags in diets {
        let request = MenuRequest::new(150.0, 210.0, 60.0, 14_000.0)
            .with_dietary_preferences(tags.iter().map(|t| (*t).to_owned()).collect());
        let menu = generate(&request);
        assert_structurally_valid(&menu);
    }
}

#[test]
fn test_degenerate_requests_still_produce_valid_weeks() {
    for weekly_calories in [0.0, 500.0, 70_000.0] {
        let request = MenuRequest::new(0.0, 0.0, 0.0, weekly_calories);
        let menu = generate(&request);
        assert_structurally_valid(&menu);
    }
}

#[test]
fn test_same_seed_reproduces_the_same_plan() {
    let request = MenuRequest::new(150.0, 210.0, 60.0, 14_000.0);
    let seed = GenerationSeed::new(2_024);

    let first = generate_with_seed(&request, seed, start_date());
    let second = generate_with_seed(&request, seed, start_date());
    assert_eq!(first, second);
}

#[test]
fn test_different_seeds_vary_the_plan() {
    let request = MenuRequest::new(150.0, 210.0, 60.0, 14_000.0);

    let base = generate_with_seed(&request, GenerationSeed::new(0), start_date());
    let varied = (1..20_u64)
        .map(|s| generate_with_seed(&request, GenerationSeed::new(s), start_date()))
        .any(|menu| menu != base);
    assert!(varied);
}

#[test]
fn test_adjacent_days_never_repeat_the_main_course() {
    let request = MenuRequest::new(150.0, 210.0, 60.0, 14_000.0);
    let menu = generate_with_seed(&request, GenerationSeed::new(7), start_date());

    let dinner_name = |day: &DaySchedule| day.meals.dinner.as_ref().unwrap().name.clone();
    for pair in menu.days().windows(2) {
        assert_ne!(dinner_name(&pair[0]), dinner_name(&pair[1]));
    }
}

#[test]
fn test_dates_run_sequentially_from_start() {
    let request = MenuRequest::new(150.0, 210.0, 60.0, 14_000.0);
    let menu = generate_with_seed(&request, GenerationSeed::new(3), start_date());

    for (index, day) in menu.days().iter().enumerate() {
        assert_eq!(day.date, start_date() + chrono::Duration::days(index as i64));
    }
}

#[test]
fn test_vegan_plans_use_only_plant_templates() {
    let request = MenuRequest::new(120.0, 240.0, 55.0, 13_000.0)
        .with_dietary_preferences(vec!["vegan".to_owned()]);
    let menu = generate_with_seed(&request, GenerationSeed::new(11), start_date());

    for day in menu.days() {
        for meal in day.meals.iter() {
            let name = meal.name.to_lowercase();
            for animal in ["chicken", "salmon", "turkey", "beef", "shrimp", "tuna", "egg"] {
                assert!(!name.contains(animal), "vegan plan contains {name}");
            }
        }
    }
}

#[test]
fn test_allergy_filter_reaches_the_plan() {
    let request = MenuRequest::new(150.0, 210.0, 60.0, 14_000.0)
        .with_allergies(vec!["nuts".to_owned()]);

    // Every seed must respect the filter, not just a lucky one
    for seed in 0..10_u64 {
        let menu = generate_with_seed(&request, GenerationSeed::new(seed), start_date());
        for day in menu.days() {
            for meal in day.meals.iter() {
                let name = meal.name.to_lowercase();
                assert!(!name.contains("peanut"), "{name}");
                assert!(!name.contains("almond"), "{name}");
            }
        }
    }
}

#[test]
fn test_day_totals_match_contained_meals() {
    let request = MenuRequest::new(150.0, 210.0, 60.0, 14_000.0);
    let menu = generate_with_seed(&request, GenerationSeed::new(5), start_date());

    for day in menu.days() {
        let meal_sum: f64 = day.meals.iter().map(|m| m.nutrition.calories).sum();
        assert!((day.nutrition.calories - meal_sum).abs() < 1e-6);
    }
}

#[test]
fn test_high_calorie_weeks_scale_toward_the_target() {
    // 4000 kcal/day is far outside every template's band, so scaling kicks in
    let request = MenuRequest::new(220.0, 420.0, 120.0, 28_000.0);
    let menu = generate_with_seed(&request, GenerationSeed::new(13), start_date());

    for day in menu.days() {
        // Each day target is the weekly mean with a modest day-to-day bias
        assert!(day.nutrition.calories > 3_000.0);
        assert!(day.nutrition.calories < 5_000.0);
    }
}

#[test]
fn test_weekday_totals_sit_below_weekend_totals() {
    let request = MenuRequest::new(220.0, 420.0, 120.0, 28_000.0);
    let menu = generate_with_seed(&request, GenerationSeed::new(17), start_date());

    let weekday_max = menu.days()[..5]
        .iter()
        .map(|d| d.nutrition.calories)
        .fold(f64::MIN, f64::max);
    let weekend_min = menu.days()[5..]
        .iter()
        .map(|d| d.nutrition.calories)
        .fold(f64::MAX, f64::min);
    assert!(weekday_max < weekend_min);
}
