// ABOUTME: Prompt construction for weekly menu generation requests
// ABOUTME: Full and simplified variants composed from request, seed, and diet rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Intelligence

//! # Prompt Builder
//!
//! Pure composition of the natural-language instruction text sent to the
//! generator. The full variant carries everything we know about the user;
//! the simplified variant keeps only the hard constraints, which shortens
//! the response and lowers the malformation risk on retries.

use crate::models::{DietMode, MenuRequest};

use super::seed::GenerationSeed;

/// Prompt strategy selected per attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptVariant {
    /// Rich prompt with targets, rules, budget, and variety hints
    Full,
    /// Hard constraints only: diet, allergies, calories, day count
    Simplified,
}

/// Payload format contract shared with the generator
///
/// The field order matters to the downstream repair heuristics: daily totals
/// precede the meals, and each meal's nutrition record closes the meal
/// object, so a truncated response still ends on a complete nutrition
/// sub-record.
const FORMAT_INSTRUCTIONS: &str = r#"Respond with exactly one JSON object and nothing else.
The response must begin with { and end with }. Do not wrap it in markdown
fences and do not add commentary before or after it.

Use exactly this structure and field order:
{"days": [
  {"day_name": "Monday", "date": "YYYY-MM-DD",
   "daily_nutrition": {"calories": 0, "protein_g": 0, "carbs_g": 0, "fat_g": 0},
   "breakfast": {"name": "", "instructions": "", "ingredients": [""],
                 "prep_time_mins": 0, "cook_time_mins": 0,
                 "nutrition": {"calories": 0, "protein_g": 0, "carbs_g": 0, "fat_g": 0, "fiber_g": 0}},
   "lunch": { ... same meal structure ... },
   "dinner": { ... same meal structure ... },
   "snacks": [ ... zero or more meal structures ... ]}
]}

The "days" array must contain exactly 7 entries, Monday through Sunday."#;

/// Compose the instruction text for one generation attempt
///
/// Pure function of its inputs: identical `(request, seed, variant)` always
/// produces identical text.
#[must_use]
pub fn build(request: &MenuRequest, seed: GenerationSeed, variant: PromptVariant) -> String {
    match variant {
        PromptVariant::Full => build_full(request, seed),
        PromptVariant::Simplified => build_simplified(request),
    }
}

fn build_full(request: &MenuRequest, seed: GenerationSeed) -> String {
    let daily_calories = request.daily_calories();
    let variety = seed.derive_variety_elements();

    let mut prompt = String::with_capacity(2_048);
    prompt.push_str(
        "You are a nutrition planning assistant. Create a complete 7-day meal plan \
         (Monday through Sunday) with breakfast, lunch, dinner, and one or two snacks \
         per day.\n\n",
    );

    prompt.push_str(&format!(
        "Daily targets: about {daily_calories:.0} kcal, {:.0} g protein, {:.0} g \
         carbohydrates, {:.0} g fat, {:.0} g fiber. Weekly total: {:.0} kcal.\n",
        request.protein_g, request.carbs_g, request.fat_g, request.fiber_g, request.weekly_calories
    ));

    push_diet_rules(&mut prompt, request);

    if !request.cuisine_preferences.is_empty() {
        prompt.push_str(&format!(
            "Lean toward these cuisines: {}.\n",
            request.cuisine_preferences.join(", ")
        ));
    }

    if let Some(budget) = request.budget {
        prompt.push_str(&format!(
            "Keep the total weekly grocery cost under {budget:.0}; prefer affordable \
             staple ingredients.\n"
        ));
    }

    push_physiology(&mut prompt, request);

    if request.exotic_ingredients {
        prompt.push_str("Uncommon ingredients are welcome.\n");
    } else {
        prompt.push_str("Stick to ingredients available in an ordinary supermarket.\n");
    }
    if request.international_spices {
        prompt.push_str("International spice blends are welcome.\n");
    }

    prompt.push_str(&format!(
        "\nFor variety this week, feature {} cooking with {} as a recurring protein, \
         {} as the grain of choice, plenty of {} and {}, {} as an accent spice, and \
         favor {} preparations.\n\n",
        variety.cuisine,
        variety.protein,
        variety.grain,
        variety.vegetable,
        variety.fruit,
        variety.spice,
        variety.cooking_method
    ));

    prompt.push_str(FORMAT_INSTRUCTIONS);
    prompt
}

fn build_simplified(request: &MenuRequest) -> String {
    let daily_calories = request.daily_calories();

    let mut prompt = String::with_capacity(1_024);
    prompt.push_str(&format!(
        "Create a 7-day {} meal plan, Monday through Sunday, about {daily_calories:.0} \
         kcal per day, with breakfast, lunch, and dinner each day.\n",
        request.diet_mode().as_str()
    ));

    if !request.allergies.is_empty() {
        prompt.push_str(&format!(
            "Strictly exclude: {}.\n",
            request.allergies.join(", ")
        ));
    }

    prompt.push('\n');
    prompt.push_str(FORMAT_INSTRUCTIONS);
    prompt
}

fn push_diet_rules(prompt: &mut String, request: &MenuRequest) {
    match request.diet_mode() {
        DietMode::Vegan => prompt.push_str(
            "The plan must be fully vegan: no meat, fish, dairy, eggs, honey, or any \
             other animal product.\n",
        ),
        DietMode::Vegetarian => prompt.push_str(
            "The plan must be vegetarian: no meat or fish. Dairy and eggs are allowed.\n",
        ),
        DietMode::Omnivore => {}
    }

    // Tags beyond the diet class (e.g. "low-carb") are passed through verbatim
    let extra_tags: Vec<&str> = request
        .dietary_preferences
        .iter()
        .map(String::as_str)
        .filter(|t| {
            !matches!(
                t.to_lowercase().as_str(),
                "vegan" | "plant-based" | "plant_based" | "vegetarian"
            )
        })
        .collect();
    if !extra_tags.is_empty() {
        prompt.push_str(&format!(
            "Honor these dietary preferences: {}.\n",
            extra_tags.join(", ")
        ));
    }

    if !request.allergies.is_empty() {
        prompt.push_str(&format!(
            "Strictly exclude all of the following allergens and anything containing \
             them: {}.\n",
            request.allergies.join(", ")
        ));
    }
}

fn push_physiology(prompt: &mut String, request: &MenuRequest) {
    let mut context = Vec::new();
    if let Some(weight) = request.weight_kg {
        context.push(format!("weight {weight:.0} kg"));
    }
    if let Some(height) = request.height_cm {
        context.push(format!("height {height:.0} cm"));
    }
    if let Some(age) = request.age {
        context.push(format!("age {age}"));
    }
    if let Some(sex) = request.sex {
        context.push(format!("sex {}", sex.as_str()));
    }
    if let Some(level) = request.activity_level {
        context.push(level.description().to_owned());
    }
    if let Some(bmr) = request.bmr {
        context.push(format!("basal metabolic rate {bmr:.0} kcal/day"));
    }

    if !context.is_empty() {
        prompt.push_str(&format!("User context: {}.\n", context.join(", ")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> MenuRequest {
        MenuRequest::new(150.0, 210.0, 60.0, 14_000.0)
            .with_dietary_preferences(vec!["vegan".to_owned(), "low-sugar".to_owned()])
            .with_allergies(vec!["nuts".to_owned(), "soy".to_owned()])
            .with_cuisines(vec!["thai".to_owned()])
            .with_budget(90.0)
    }

    #[test]
    fn test_build_is_pure() {
        let request = request();
        let seed = GenerationSeed::new(7);
        assert_eq!(
            build(&request, seed, PromptVariant::Full),
            build(&request, seed, PromptVariant::Full)
        );
    }

    #[test]
    fn test_full_prompt_carries_soft_constraints() {
        let prompt = build(&request(), GenerationSeed::new(7), PromptVariant::Full);

        assert!(prompt.contains("2000 kcal"));
        assert!(prompt.contains("fully vegan"));
        assert!(prompt.contains("nuts, soy"));
        assert!(prompt.contains("low-sugar"));
        assert!(prompt.contains("thai"));
        assert!(prompt.contains("under 90"));
        assert!(prompt.contains("For variety this week"));
    }

    #[test]
    fn test_simplified_prompt_keeps_hard_constraints_only() {
        let prompt = build(&request(), GenerationSeed::new(7), PromptVariant::Simplified);

        assert!(prompt.contains("7-day vegan meal plan"));
        assert!(prompt.contains("2000"));
        assert!(prompt.contains("Strictly exclude: nuts, soy"));
        // Soft constraints are dropped on the simplified variant
        assert!(!prompt.contains("For variety this week"));
        assert!(!prompt.contains("thai"));
        assert!(!prompt.contains("under 90"));
    }

    #[test]
    fn test_both_variants_demand_bare_json_payload() {
        for variant in [PromptVariant::Full, PromptVariant::Simplified] {
            let prompt = build(&request(), GenerationSeed::new(7), variant);
            assert!(prompt.contains("begin with { and end with }"));
            assert!(prompt.contains("exactly 7 entries"));
        }
    }
}
