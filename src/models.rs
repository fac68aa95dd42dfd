// ABOUTME: Domain model for weekly meal plan generation
// ABOUTME: Defines MenuRequest, WeekMenu, DaySchedule, Meal, and nutrition records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Intelligence

//! # Domain Model
//!
//! Immutable request and result types for the generation pipeline.
//!
//! A [`MenuRequest`] is created once per user action and never mutated. A
//! [`WeekMenu`] is constructed atomically: either a whole valid seven-day
//! structure is produced, or nothing is returned. There is no partially-valid
//! public result.
//!
//! The serde representation of [`WeekMenu`] and its children matches the
//! payload format the generator is instructed to produce, so a validated menu
//! re-serializes to text the validator accepts again.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of days in every generated plan
pub const DAYS_PER_WEEK: usize = 7;

/// Canonical day names, Monday first
pub const DAY_NAMES: [&str; DAYS_PER_WEEK] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Biological sex for metabolic context in prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male (higher basal metabolic rate)
    Male,
    /// Female (lower basal metabolic rate)
    Female,
}

impl Sex {
    /// String representation used in prompt text
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Activity level for calorie context in prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise or physical job
    ExtraActive,
}

impl ActivityLevel {
    /// Human-readable description used in prompt text
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary (little or no exercise)",
            Self::LightlyActive => "lightly active (exercise 1-3 days/week)",
            Self::ModeratelyActive => "moderately active (exercise 3-5 days/week)",
            Self::VeryActive => "very active (exercise 6-7 days/week)",
            Self::ExtraActive => "extra active (hard daily training)",
        }
    }
}

/// Dietary mode resolved once from the request's preference tags
///
/// Template selection and prompt rules dispatch on this closed variant
/// instead of re-matching raw tag strings at every site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DietMode {
    /// No animal products
    Vegan,
    /// No meat or fish
    Vegetarian,
    /// No dietary class restriction
    #[default]
    Omnivore,
}

impl DietMode {
    /// Resolve the dietary mode from free-form preference tags
    ///
    /// Vegan wins over vegetarian when both appear; anything else is
    /// omnivore.
    #[must_use]
    pub fn from_tags(tags: &[String]) -> Self {
        let mut mode = Self::Omnivore;
        for tag in tags {
            match tag.to_lowercase().as_str() {
                "vegan" | "plant-based" | "plant_based" => return Self::Vegan,
                "vegetarian" => mode = Self::Vegetarian,
                _ => {}
            }
        }
        mode
    }

    /// String representation used in prompt text
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vegan => "vegan",
            Self::Vegetarian => "vegetarian",
            Self::Omnivore => "omnivore",
        }
    }
}

/// Immutable input describing one user's weekly nutrition targets
///
/// Created by the caller, consumed by the pipeline, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuRequest {
    /// Daily protein target in grams
    pub protein_g: f64,
    /// Daily carbohydrate target in grams
    pub carbs_g: f64,
    /// Daily fat target in grams
    pub fat_g: f64,
    /// Daily fiber target in grams
    pub fiber_g: f64,
    /// Total calories for the whole week
    pub weekly_calories: f64,
    /// Free-form dietary preference tags ("vegan", "low-carb", ...)
    pub dietary_preferences: Vec<String>,
    /// Allergy tags ("nuts", "dairy", "gluten", ...)
    pub allergies: Vec<String>,
    /// Preferred cuisines ("mediterranean", "thai", ...)
    pub cuisine_preferences: Vec<String>,
    /// Body weight in kilograms
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Age in years
    pub age: Option<u32>,
    /// Biological sex
    pub sex: Option<Sex>,
    /// Activity level
    pub activity_level: Option<ActivityLevel>,
    /// Basal metabolic rate in kcal/day, if already known
    pub bmr: Option<f64>,
    /// Weekly grocery budget ceiling (currency-agnostic)
    pub budget: Option<f64>,
    /// Allow uncommon ingredients
    pub exotic_ingredients: bool,
    /// Allow international spice blends
    pub international_spices: bool,
}

impl MenuRequest {
    /// Create a request from daily macro targets and a weekly calorie total
    #[must_use]
    pub fn new(protein_g: f64, carbs_g: f64, fat_g: f64, weekly_calories: f64) -> Self {
        Self {
            protein_g,
            carbs_g,
            fat_g,
            fiber_g: 30.0,
            weekly_calories,
            dietary_preferences: Vec::new(),
            allergies: Vec::new(),
            cuisine_preferences: Vec::new(),
            weight_kg: None,
            height_cm: None,
            age: None,
            sex: None,
            activity_level: None,
            bmr: None,
            budget: None,
            exotic_ingredients: false,
            international_spices: false,
        }
    }

    /// Set the daily fiber target
    #[must_use]
    pub const fn with_fiber(mut self, fiber_g: f64) -> Self {
        self.fiber_g = fiber_g;
        self
    }

    /// Add dietary preference tags
    #[must_use]
    pub fn with_dietary_preferences(mut self, tags: Vec<String>) -> Self {
        self.dietary_preferences = tags;
        self
    }

    /// Add allergy tags
    #[must_use]
    pub fn with_allergies(mut self, allergies: Vec<String>) -> Self {
        self.allergies = allergies;
        self
    }

    /// Add cuisine preference tags
    #[must_use]
    pub fn with_cuisines(mut self, cuisines: Vec<String>) -> Self {
        self.cuisine_preferences = cuisines;
        self
    }

    /// Set physiological context (weight kg, height cm, age, sex)
    #[must_use]
    pub const fn with_physiology(
        mut self,
        weight_kg: f64,
        height_cm: f64,
        age: u32,
        sex: Sex,
    ) -> Self {
        self.weight_kg = Some(weight_kg);
        self.height_cm = Some(height_cm);
        self.age = Some(age);
        self.sex = Some(sex);
        self
    }

    /// Set the activity level
    #[must_use]
    pub const fn with_activity_level(mut self, level: ActivityLevel) -> Self {
        self.activity_level = Some(level);
        self
    }

    /// Set a precomputed basal metabolic rate
    #[must_use]
    pub const fn with_bmr(mut self, bmr: f64) -> Self {
        self.bmr = Some(bmr);
        self
    }

    /// Set the weekly budget ceiling
    #[must_use]
    pub const fn with_budget(mut self, budget: f64) -> Self {
        self.budget = Some(budget);
        self
    }

    /// Allow exotic ingredients and international spices
    #[must_use]
    pub const fn with_adventurous_pantry(mut self) -> Self {
        self.exotic_ingredients = true;
        self.international_spices = true;
        self
    }

    /// Dietary mode resolved from the preference tags
    #[must_use]
    pub fn diet_mode(&self) -> DietMode {
        DietMode::from_tags(&self.dietary_preferences)
    }

    /// Average daily calorie target (weekly total divided by seven)
    #[must_use]
    pub fn daily_calories(&self) -> f64 {
        self.weekly_calories / DAYS_PER_WEEK as f64
    }
}

/// Nutrition record for a single meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealNutrition {
    /// Calories (kcal)
    pub calories: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
    /// Fiber in grams, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber_g: Option<f64>,
}

/// Aggregate nutrition for a whole day
///
/// Present and numeric, but not required to equal the sum of the contained
/// meals. The generator's arithmetic is accepted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayNutrition {
    /// Calories (kcal)
    pub calories: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
}

/// A single meal with preparation details and nutrition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Display name (non-empty)
    pub name: String,
    /// Free-text preparation instructions
    #[serde(default)]
    pub instructions: String,
    /// Ordered ingredient list (non-empty)
    pub ingredients: Vec<String>,
    /// Preparation time in minutes
    #[serde(default)]
    pub prep_time_mins: u32,
    /// Cooking time in minutes, when applicable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time_mins: Option<u32>,
    /// Nutrition record (calories strictly positive in validated plans)
    pub nutrition: MealNutrition,
}

/// The meals of one day: main slots plus ordered snacks
///
/// Every slot is optional, but a validated day always carries at least one
/// of breakfast, lunch, or dinner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealSet {
    /// Breakfast, when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<Meal>,
    /// Lunch, when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch: Option<Meal>,
    /// Dinner, when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dinner: Option<Meal>,
    /// Ordered snack meals
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub snacks: Vec<Meal>,
}

impl MealSet {
    /// Whether at least one main slot is filled
    #[must_use]
    pub const fn has_main_meal(&self) -> bool {
        self.breakfast.is_some() || self.lunch.is_some() || self.dinner.is_some()
    }

    /// Iterate over every meal of the day, main slots first
    pub fn iter(&self) -> impl Iterator<Item = &Meal> {
        self.breakfast
            .iter()
            .chain(self.lunch.iter())
            .chain(self.dinner.iter())
            .chain(self.snacks.iter())
    }

    /// Total number of meals including snacks
    #[must_use]
    pub fn meal_count(&self) -> usize {
        self.iter().count()
    }
}

/// One day of the weekly plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Day name, Monday through Sunday
    pub day_name: String,
    /// Calendar date of this day
    pub date: NaiveDate,
    /// Aggregate daily nutrition as reported by the generator
    #[serde(rename = "daily_nutrition")]
    pub nutrition: DayNutrition,
    /// The day's meals
    #[serde(flatten)]
    pub meals: MealSet,
}

/// A complete, validated seven-day meal plan
///
/// Constructed only through [`WeekMenu::from_days`], which enforces the
/// seven-day invariant; the day list is never exposed mutably.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekMenu {
    /// Ordered days, Monday through Sunday
    days: Vec<DaySchedule>,
}

impl WeekMenu {
    /// Build a menu from exactly seven ordered days
    ///
    /// Returns `None` when the day count is wrong; callers that have already
    /// validated the count can unwrap via the validator path instead.
    #[must_use]
    pub fn from_days(days: Vec<DaySchedule>) -> Option<Self> {
        (days.len() == DAYS_PER_WEEK).then_some(Self { days })
    }

    /// The seven days of the plan, Monday first
    #[must_use]
    pub fn days(&self) -> &[DaySchedule] {
        &self.days
    }
}

impl From<[DaySchedule; DAYS_PER_WEEK]> for WeekMenu {
    fn from(days: [DaySchedule; DAYS_PER_WEEK]) -> Self {
        Self { days: days.into() }
    }
}
