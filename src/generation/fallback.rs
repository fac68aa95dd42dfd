// ABOUTME: Deterministic offline weekly menu generation from static templates
// ABOUTME: Seed-driven template selection with per-day calorie scaling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Intelligence

//! # Fallback Generator
//!
//! Fully offline plan assembly for when the caller explicitly opts out of
//! the online pipeline (no network, hard failure upstream, previews). Given
//! any syntactically valid request it always terminates with a valid seven
//! day plan; there is no error taxonomy on this path.
//!
//! Day-to-day variety comes entirely from the seed: template pools are
//! indexed with `(day_index + seed_offset) % pool_len`, so the same seed
//! reproduces the same week and adjacent days never repeat a main course
//! when the pool allows.

use chrono::{Datelike, Duration, NaiveDate, Utc};

use crate::models::{
    DayNutrition, DaySchedule, MealSet, MenuRequest, WeekMenu, DAYS_PER_WEEK, DAY_NAMES,
};

use super::seed::GenerationSeed;
use super::templates::{filtered_pool, MealSlot, MealTemplate};

/// Day-to-day calorie bias applied to the weekly mean, Monday first
///
/// Weekdays sit slightly below the mean and the weekend slightly above,
/// which reads far more like a human plan than seven identical totals.
const DAY_CALORIE_BIAS: [f64; DAYS_PER_WEEK] =
    [-0.10, -0.08, -0.12, -0.09, -0.08, 0.12, 0.10];

/// Relative deviation from the day target below which no scaling happens
const SCALING_TOLERANCE: f64 = 0.20;

/// Clamp bounds for the scaling ratio; keeps every meal's calories positive
/// and portion sizes plausible even for extreme calorie requests
const MIN_SCALE: f64 = 0.25;
const MAX_SCALE: f64 = 4.0;

/// Generate a weekly plan offline with a fresh seed, starting next Monday
#[must_use]
pub fn generate(request: &MenuRequest) -> WeekMenu {
    generate_with_seed(
        request,
        GenerationSeed::from_request(request),
        upcoming_monday(Utc::now().date_naive()),
    )
}

/// Generate a weekly plan offline from an explicit seed and start date
///
/// Identical `(request, seed, start_date)` always produces the identical
/// plan, which is what makes fallback output testable as a fixture.
#[must_use]
pub fn generate_with_seed(
    request: &MenuRequest,
    seed: GenerationSeed,
    start_date: NaiveDate,
) -> WeekMenu {
    let mode = request.diet_mode();
    let daily_mean = request.daily_calories();

    let breakfasts = filtered_pool(mode, MealSlot::Breakfast, &request.allergies);
    let lunches = filtered_pool(mode, MealSlot::Lunch, &request.allergies);
    let dinners = filtered_pool(mode, MealSlot::Dinner, &request.allergies);
    let snacks = filtered_pool(mode, MealSlot::Snack, &request.allergies);

    let days = std::array::from_fn(|day_index| {
        let target = daily_mean * (1.0 + DAY_CALORIE_BIAS[day_index]);

        let breakfast = select(&breakfasts, seed, MealSlot::Breakfast, day_index);
        let lunch = select(&lunches, seed, MealSlot::Lunch, day_index);
        let dinner = select(&dinners, seed, MealSlot::Dinner, day_index);
        let snack = select(&snacks, seed, MealSlot::Snack, day_index);

        let template_total =
            breakfast.calories + lunch.calories + dinner.calories + snack.calories;
        let scale = scale_for(target, template_total);

        let meals = MealSet {
            breakfast: Some(breakfast.to_meal(scale)),
            lunch: Some(lunch.to_meal(scale)),
            dinner: Some(dinner.to_meal(scale)),
            snacks: vec![snack.to_meal(scale)],
        };

        let nutrition = sum_nutrition(&meals);

        DaySchedule {
            day_name: DAY_NAMES[day_index].to_owned(),
            date: start_date + Duration::days(day_index as i64),
            nutrition,
            meals,
        }
    });

    WeekMenu::from(days)
}

/// Deterministic template pick for a slot and day
///
/// The per-slot offset shifts which template day zero starts on; the +1
/// stride guarantees adjacent days differ whenever the pool holds more than
/// one option.
fn select<'a>(
    pool: &[&'a MealTemplate],
    seed: GenerationSeed,
    slot: MealSlot,
    day_index: usize,
) -> &'a MealTemplate {
    let offset = seed.category_index(slot.as_str(), pool.len());
    pool[(day_index + offset) % pool.len()]
}

/// Linear scaling ratio toward the day target, or 1.0 inside the tolerance
/// band
fn scale_for(target: f64, template_total: f64) -> f64 {
    if template_total <= 0.0 {
        return 1.0;
    }
    let ratio = target / template_total;
    if (ratio - 1.0).abs() <= SCALING_TOLERANCE {
        1.0
    } else {
        ratio.clamp(MIN_SCALE, MAX_SCALE)
    }
}

/// Daily totals recomputed from the contained meals
fn sum_nutrition(meals: &MealSet) -> DayNutrition {
    let mut nutrition = DayNutrition {
        calories: 0.0,
        protein_g: 0.0,
        carbs_g: 0.0,
        fat_g: 0.0,
    };
    for meal in meals.iter() {
        nutrition.calories += meal.nutrition.calories;
        nutrition.protein_g += meal.nutrition.protein_g;
        nutrition.carbs_g += meal.nutrition.carbs_g;
        nutrition.fat_g += meal.nutrition.fat_g;
    }
    nutrition
}

/// The next Monday on or after the given date
fn upcoming_monday(today: NaiveDate) -> NaiveDate {
    let days_since_monday = i64::from(today.weekday().num_days_from_monday());
    let days_ahead = (7 - days_since_monday) % 7;
    today + Duration::days(days_ahead)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upcoming_monday() {
        // 2026-08-03 is a Monday
        let monday = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        assert_eq!(upcoming_monday(monday), monday);

        let wednesday = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        assert_eq!(
            upcoming_monday(wednesday),
            NaiveDate::from_ymd_opt(2026, 8, 10).unwrap()
        );

        let sunday = NaiveDate::from_ymd_opt(2026, 8, 9).unwrap();
        assert_eq!(
            upcoming_monday(sunday),
            NaiveDate::from_ymd_opt(2026, 8, 10).unwrap()
        );
    }

    #[test]
    fn test_scale_for_tolerance_band() {
        // Within +/-20% of target: no scaling
        assert!((scale_for(2000.0, 1900.0) - 1.0).abs() < f64::EPSILON);
        assert!((scale_for(2000.0, 2350.0) - 1.0).abs() < f64::EPSILON);

        // Outside the band: linear ratio
        assert!((scale_for(3000.0, 2000.0) - 1.5).abs() < f64::EPSILON);

        // Degenerate targets stay positive
        assert!((scale_for(0.0, 2000.0) - MIN_SCALE).abs() < f64::EPSILON);
        assert!((scale_for(100_000.0, 2000.0) - MAX_SCALE).abs() < f64::EPSILON);
    }
}
