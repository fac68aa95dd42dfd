// ABOUTME: Structural validation of candidate payloads into WeekMenu values
// ABOUTME: Wire decode plus ordered domain invariant checks with day-level detail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Intelligence

//! # Structural Validator
//!
//! Decodes a candidate substring and judges it against the weekly menu
//! invariants. The validator never repairs or rewrites the candidate text;
//! every failure names the day (and meal slot) that broke, so the repair
//! pass and diagnostics have something to work with.

use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

use crate::errors::{AppError, AppResult};
use crate::models::{
    DayNutrition, DaySchedule, Meal, MealSet, WeekMenu, DAYS_PER_WEEK, DAY_NAMES,
};

/// Wire shape of the generator payload
#[derive(Debug, Deserialize)]
struct RawWeekMenu {
    days: Vec<RawDay>,
}

/// One day as produced by the generator, with lenient optional fields
#[derive(Debug, Deserialize)]
struct RawDay {
    #[serde(default)]
    day_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    date: Option<NaiveDate>,
    daily_nutrition: DayNutrition,
    #[serde(default)]
    breakfast: Option<Meal>,
    #[serde(default)]
    lunch: Option<Meal>,
    #[serde(default)]
    dinner: Option<Meal>,
    #[serde(default)]
    snacks: Vec<Meal>,
}

/// Accept any value in the date slot; only a well-formed `YYYY-MM-DD` string
/// produces a date, everything else decodes to `None`
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|raw| raw.parse().ok()))
}

/// Parse and judge a candidate payload
///
/// Post-parse checks, in order: exactly seven day records; at least one main
/// meal per day; non-empty meal names and ingredient lists with positive
/// calories. Day names and dates are normalized to Monday-first canonical
/// values on the way out.
///
/// # Errors
///
/// `ParseError` when the candidate is not well-formed, `SchemaError` (with
/// day index and slot detail) when a domain invariant is violated.
pub fn validate(candidate: &str) -> AppResult<WeekMenu> {
    let raw: RawWeekMenu = serde_json::from_str(candidate)
        .map_err(|e| AppError::parse(format!("candidate payload is not well-formed: {e}")))?;

    if raw.days.len() != DAYS_PER_WEEK {
        return Err(AppError::schema(format!(
            "expected exactly {DAYS_PER_WEEK} day records, found {}",
            raw.days.len()
        ))
        .with_details(serde_json::json!({ "day_count": raw.days.len() })));
    }

    for (index, day) in raw.days.iter().enumerate() {
        check_day(index, day)?;
    }

    let start_date = raw
        .days
        .first()
        .and_then(|day| day.date)
        .unwrap_or_else(|| Utc::now().date_naive());

    let days = raw
        .days
        .into_iter()
        .enumerate()
        .map(|(index, day)| enrich_day(index, day, start_date))
        .collect();

    WeekMenu::from_days(days)
        .ok_or_else(|| AppError::internal("day count changed during enrichment"))
}

/// Relaxed acceptance check used by the repair pass
///
/// A truncated payload can never regain its missing days, so the repairer
/// only requires that the text parses and that every day it *does* contain
/// is fully formed. The full seven-day rule is re-applied upstream.
pub(crate) fn days_are_well_formed(candidate: &str) -> bool {
    serde_json::from_str::<RawWeekMenu>(candidate).is_ok_and(|raw| {
        !raw.days.is_empty()
            && raw.days.len() <= DAYS_PER_WEEK
            && raw
                .days
                .iter()
                .enumerate()
                .all(|(index, day)| check_day(index, day).is_ok())
    })
}

/// Whether a single day value (as JSON) is fully formed
///
/// Used by the repair pass to prune a trailing half-written day after
/// anchor-based truncation.
pub(crate) fn day_value_is_complete(index: usize, value: &serde_json::Value) -> bool {
    serde_json::from_value::<RawDay>(value.clone())
        .is_ok_and(|day| check_day(index, &day).is_ok())
}

fn check_day(index: usize, day: &RawDay) -> AppResult<()> {
    let main_present =
        day.breakfast.is_some() || day.lunch.is_some() || day.dinner.is_some();
    if !main_present {
        return Err(day_error(index, "day has no breakfast, lunch, or dinner"));
    }

    let slots = [
        ("breakfast", day.breakfast.as_ref()),
        ("lunch", day.lunch.as_ref()),
        ("dinner", day.dinner.as_ref()),
    ];
    for (slot, meal) in slots {
        if let Some(meal) = meal {
            check_meal(index, slot, meal)?;
        }
    }
    for (snack_index, snack) in day.snacks.iter().enumerate() {
        check_meal(index, &format!("snack {}", snack_index + 1), snack)?;
    }

    Ok(())
}

fn check_meal(day_index: usize, slot: &str, meal: &Meal) -> AppResult<()> {
    if meal.name.trim().is_empty() {
        return Err(day_error(day_index, &format!("{slot} has an empty name")));
    }
    if meal.ingredients.is_empty() || meal.ingredients.iter().all(|i| i.trim().is_empty()) {
        return Err(day_error(
            day_index,
            &format!("{slot} has no ingredients"),
        ));
    }
    if meal.nutrition.calories <= 0.0 {
        return Err(day_error(
            day_index,
            &format!("{slot} reports non-positive calories"),
        ));
    }
    Ok(())
}

fn day_error(index: usize, detail: &str) -> AppError {
    AppError::schema(format!("day {} ({}): {detail}", index + 1, DAY_NAMES[index % DAYS_PER_WEEK]))
        .with_details(serde_json::json!({ "day_index": index }))
}

/// Normalize day names and dates to the canonical Monday-first week
fn enrich_day(index: usize, day: RawDay, start_date: NaiveDate) -> DaySchedule {
    let date = day
        .date
        .unwrap_or_else(|| start_date + Duration::days(index as i64));

    DaySchedule {
        day_name: day
            .day_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DAY_NAMES[index % DAYS_PER_WEEK].to_owned()),
        date,
        nutrition: day.daily_nutrition,
        meals: MealSet {
            breakfast: day.breakfast,
            lunch: day.lunch,
            dinner: day.dinner,
            snacks: day.snacks,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal_json(name: &str, calories: f64) -> String {
        format!(
            r#"{{"name": "{name}", "instructions": "Cook.", "ingredients": ["thing"],
               "prep_time_mins": 10, "nutrition": {{"calories": {calories},
               "protein_g": 20, "carbs_g": 30, "fat_g": 10}}}}"#
        )
    }

    fn day_json(day_name: &str, meal: &str) -> String {
        format!(
            r#"{{"day_name": "{day_name}", "date": "2026-08-10",
               "daily_nutrition": {{"calories": 2000, "protein_g": 150,
               "carbs_g": 210, "fat_g": 60}}, "lunch": {meal}}}"#
        )
    }

    fn week_json(day_count: usize) -> String {
        let day = day_json("Monday", &meal_json("Lentil soup", 450.0));
        let days = vec![day; day_count].join(", ");
        format!(r#"{{"days": [{days}]}}"#)
    }

    #[test]
    fn test_valid_week_passes_and_is_enriched() {
        let menu = validate(&week_json(7)).unwrap();

        assert_eq!(menu.days().len(), 7);
        assert_eq!(menu.days()[0].day_name, "Monday");
        assert_eq!(menu.days()[3].day_name, "Monday"); // name from payload wins
        assert!(menu.days()[0].meals.has_main_meal());
    }

    #[test]
    fn test_wrong_day_count_is_schema_error() {
        for count in [5, 8] {
            let error = validate(&week_json(count)).unwrap_err();
            assert_eq!(error.code, crate::errors::ErrorCode::SchemaError);
            assert!(error.message.contains(&format!("found {count}")));
        }
    }

    #[test]
    fn test_malformed_text_is_parse_error() {
        let error = validate("{\"days\": [").unwrap_err();
        assert_eq!(error.code, crate::errors::ErrorCode::ParseError);
    }

    #[test]
    fn test_day_without_main_meal_names_the_day() {
        let mut days: Vec<String> = (0..7)
            .map(|_| day_json("Monday", &meal_json("Soup", 450.0)))
            .collect();
        days[4] = r#"{"day_name": "Friday", "daily_nutrition": {"calories": 2000,
            "protein_g": 150, "carbs_g": 210, "fat_g": 60}, "snacks": []}"#
            .to_owned();
        let payload = format!(r#"{{"days": [{}]}}"#, days.join(", "));

        let error = validate(&payload).unwrap_err();
        assert_eq!(error.code, crate::errors::ErrorCode::SchemaError);
        assert!(error.message.contains("day 5"));
        assert_eq!(error.context.details["day_index"], 4);
    }

    #[test]
    fn test_non_positive_calories_is_schema_error() {
        let mut days: Vec<String> = (0..7)
            .map(|_| day_json("Monday", &meal_json("Soup", 450.0)))
            .collect();
        days[1] = day_json("Tuesday", &meal_json("Mystery broth", 0.0));
        let payload = format!(r#"{{"days": [{}]}}"#, days.join(", "));

        let error = validate(&payload).unwrap_err();
        assert_eq!(error.code, crate::errors::ErrorCode::SchemaError);
        assert!(error.message.contains("day 2"));
        assert!(error.message.contains("non-positive calories"));
    }

    #[test]
    fn test_garbage_date_falls_back_to_today_sequence() {
        let day = r#"{"day_name": "Monday", "date": "soon",
            "daily_nutrition": {"calories": 2000, "protein_g": 150,
            "carbs_g": 210, "fat_g": 60},
            "lunch": {"name": "Soup", "ingredients": ["thing"],
            "nutrition": {"calories": 450, "protein_g": 20, "carbs_g": 30, "fat_g": 10}}}"#;
        let days = vec![day.to_owned(); 7].join(", ");
        let menu = validate(&format!(r#"{{"days": [{days}]}}"#)).unwrap();

        // Dates are synthesized sequentially from today
        let first = menu.days()[0].date;
        assert_eq!(menu.days()[6].date, first + Duration::days(6));
    }

    #[test]
    fn test_relaxed_check_accepts_short_weeks() {
        assert!(days_are_well_formed(&week_json(5)));
        assert!(days_are_well_formed(&week_json(7)));
        assert!(!days_are_well_formed(&week_json(8)));
        assert!(!days_are_well_formed("{\"days\": []}"));
        assert!(!days_are_well_formed("{\"days\": ["));
    }

    #[test]
    fn test_round_trip_preserves_invariants() {
        let menu = validate(&week_json(7)).unwrap();
        let reserialized = serde_json::to_string(&menu).unwrap();
        let revalidated = validate(&reserialized).unwrap();

        assert_eq!(revalidated.days().len(), 7);
        assert_eq!(menu, revalidated);
    }
}
