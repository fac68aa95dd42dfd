// ABOUTME: Static meal template tables for offline plan generation
// ABOUTME: Per-diet pools with allergen tags and per-serving nutrition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Intelligence

//! # Meal Template Tables
//!
//! The curated local food table consumed by the fallback generator. Tables
//! are `'static`, read-only, and safely shared across concurrent requests.
//! Every diet branch keeps its own pools, and every pool contains at least
//! one allergen-free template so allergy filtering can never starve a slot.

use crate::models::{DietMode, Meal, MealNutrition};

/// Meal slot within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealSlot {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Between-meal snack
    Snack,
}

impl MealSlot {
    /// Discriminator string for seed-derived offsets
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

/// One curated recipe template with per-serving nutrition
#[derive(Debug, Clone, Copy)]
pub struct MealTemplate {
    /// Display name
    pub name: &'static str,
    /// One-line preparation instructions
    pub instructions: &'static str,
    /// Ingredient list
    pub ingredients: &'static [&'static str],
    /// Preparation time in minutes
    pub prep_time_mins: u32,
    /// Cooking time in minutes, when the dish is cooked
    pub cook_time_mins: Option<u32>,
    /// Calories per serving (kcal)
    pub calories: f64,
    /// Protein per serving (g)
    pub protein_g: f64,
    /// Carbohydrates per serving (g)
    pub carbs_g: f64,
    /// Fat per serving (g)
    pub fat_g: f64,
    /// Fiber per serving (g)
    pub fiber_g: f64,
    /// Allergen tags used for filtering ("nuts", "dairy", "gluten", ...)
    pub allergens: &'static [&'static str],
}

impl MealTemplate {
    /// Materialize the template as a [`Meal`], scaling every macro field by
    /// the same ratio
    #[must_use]
    pub fn to_meal(&self, scale: f64) -> Meal {
        Meal {
            name: self.name.to_owned(),
            instructions: self.instructions.to_owned(),
            ingredients: self.ingredients.iter().map(|i| (*i).to_owned()).collect(),
            prep_time_mins: self.prep_time_mins,
            cook_time_mins: self.cook_time_mins,
            nutrition: MealNutrition {
                calories: self.calories * scale,
                protein_g: self.protein_g * scale,
                carbs_g: self.carbs_g * scale,
                fat_g: self.fat_g * scale,
                fiber_g: Some(self.fiber_g * scale),
            },
        }
    }

    /// Whether this template is safe for the given allergy tags
    #[must_use]
    pub fn is_safe_for(&self, allergies: &[String]) -> bool {
        !self.allergens.iter().any(|allergen| {
            allergies
                .iter()
                .any(|tag| tag.trim().eq_ignore_ascii_case(allergen))
        })
    }
}

/// Template pool for a diet branch and meal slot
#[must_use]
pub fn pool_for(mode: DietMode, slot: MealSlot) -> &'static [MealTemplate] {
    match (mode, slot) {
        (DietMode::Vegan, MealSlot::Breakfast) => VEGAN_BREAKFASTS,
        (DietMode::Vegan, MealSlot::Lunch) => VEGAN_LUNCHES,
        (DietMode::Vegan, MealSlot::Dinner) => VEGAN_DINNERS,
        (DietMode::Vegan, MealSlot::Snack) => VEGAN_SNACKS,
        (DietMode::Vegetarian, MealSlot::Breakfast) => VEGETARIAN_BREAKFASTS,
        (DietMode::Vegetarian, MealSlot::Lunch) => VEGETARIAN_LUNCHES,
        (DietMode::Vegetarian, MealSlot::Dinner) => VEGETARIAN_DINNERS,
        (DietMode::Vegetarian, MealSlot::Snack) => VEGETARIAN_SNACKS,
        (DietMode::Omnivore, MealSlot::Breakfast) => OMNIVORE_BREAKFASTS,
        (DietMode::Omnivore, MealSlot::Lunch) => OMNIVORE_LUNCHES,
        (DietMode::Omnivore, MealSlot::Dinner) => OMNIVORE_DINNERS,
        (DietMode::Omnivore, MealSlot::Snack) => OMNIVORE_SNACKS,
    }
}

/// Filter a pool by allergy tags, falling back to the full pool when the
/// filter would starve the slot
#[must_use]
pub fn filtered_pool(
    mode: DietMode,
    slot: MealSlot,
    allergies: &[String],
) -> Vec<&'static MealTemplate> {
    let pool = pool_for(mode, slot);
    let safe: Vec<&'static MealTemplate> =
        pool.iter().filter(|t| t.is_safe_for(allergies)).collect();
    if safe.is_empty() {
        pool.iter().collect()
    } else {
        safe
    }
}

const OMNIVORE_BREAKFASTS: &[MealTemplate] = &[
    MealTemplate {
        name: "Greek yogurt parfait",
        instructions: "Layer yogurt with granola and berries in a glass.",
        ingredients: &["greek yogurt", "granola", "mixed berries", "honey"],
        prep_time_mins: 5,
        cook_time_mins: None,
        calories: 420.0,
        protein_g: 28.0,
        carbs_g: 52.0,
        fat_g: 11.0,
        fiber_g: 6.0,
        allergens: &["dairy", "gluten"],
    },
    MealTemplate {
        name: "Vegetable omelette with toast",
        instructions: "Whisk eggs, fold in sauteed vegetables, serve on toast.",
        ingredients: &["eggs", "spinach", "bell pepper", "whole-grain bread", "olive oil"],
        prep_time_mins: 10,
        cook_time_mins: Some(10),
        calories: 440.0,
        protein_g: 26.0,
        carbs_g: 34.0,
        fat_g: 22.0,
        fiber_g: 6.0,
        allergens: &["eggs", "gluten"],
    },
    MealTemplate {
        name: "Turkey sausage potato hash",
        instructions: "Brown sausage and potatoes, finish with spinach and a squeeze of lemon.",
        ingredients: &["turkey sausage", "potatoes", "spinach", "onion", "olive oil"],
        prep_time_mins: 10,
        cook_time_mins: Some(20),
        calories: 460.0,
        protein_g: 30.0,
        carbs_g: 42.0,
        fat_g: 18.0,
        fiber_g: 5.0,
        allergens: &[],
    },
    MealTemplate {
        name: "Smoked salmon bagel",
        instructions: "Spread cream cheese on a toasted bagel and top with salmon and capers.",
        ingredients: &["bagel", "smoked salmon", "cream cheese", "capers", "red onion"],
        prep_time_mins: 5,
        cook_time_mins: None,
        calories: 480.0,
        protein_g: 27.0,
        carbs_g: 50.0,
        fat_g: 18.0,
        fiber_g: 3.0,
        allergens: &["fish", "gluten", "dairy"],
    },
];

const VEGETARIAN_BREAKFASTS: &[MealTemplate] = &[
    MealTemplate {
        name: "Greek yogurt parfait",
        instructions: "Layer yogurt with granola and berries in a glass.",
        ingredients: &["greek yogurt", "granola", "mixed berries", "honey"],
        prep_time_mins: 5,
        cook_time_mins: None,
        calories: 420.0,
        protein_g: 28.0,
        carbs_g: 52.0,
        fat_g: 11.0,
        fiber_g: 6.0,
        allergens: &["dairy", "gluten"],
    },
    MealTemplate {
        name: "Vegetable omelette with toast",
        instructions: "Whisk eggs, fold in sauteed vegetables, serve on toast.",
        ingredients: &["eggs", "spinach", "bell pepper", "whole-grain bread", "olive oil"],
        prep_time_mins: 10,
        cook_time_mins: Some(10),
        calories: 440.0,
        protein_g: 26.0,
        carbs_g: 34.0,
        fat_g: 22.0,
        fiber_g: 6.0,
        allergens: &["eggs", "gluten"],
    },
    MealTemplate {
        name: "Chia pudding with mango",
        instructions: "Soak chia seeds in oat milk overnight, top with mango.",
        ingredients: &["chia seeds", "oat milk", "mango", "maple syrup"],
        prep_time_mins: 5,
        cook_time_mins: None,
        calories: 380.0,
        protein_g: 12.0,
        carbs_g: 48.0,
        fat_g: 16.0,
        fiber_g: 12.0,
        allergens: &[],
    },
    MealTemplate {
        name: "Cottage cheese pancakes",
        instructions: "Blend cottage cheese into the batter and cook small pancakes.",
        ingredients: &["cottage cheese", "eggs", "oat flour", "blueberries"],
        prep_time_mins: 10,
        cook_time_mins: Some(15),
        calories: 430.0,
        protein_g: 31.0,
        carbs_g: 44.0,
        fat_g: 13.0,
        fiber_g: 5.0,
        allergens: &["dairy", "eggs", "gluten"],
    },
];

const VEGAN_BREAKFASTS: &[MealTemplate] = &[
    MealTemplate {
        name: "Tofu scramble",
        instructions: "Crumble tofu into a hot pan with turmeric and vegetables.",
        ingredients: &["firm tofu", "turmeric", "spinach", "cherry tomatoes", "olive oil"],
        prep_time_mins: 10,
        cook_time_mins: Some(10),
        calories: 360.0,
        protein_g: 24.0,
        carbs_g: 18.0,
        fat_g: 22.0,
        fiber_g: 5.0,
        allergens: &["soy"],
    },
    MealTemplate {
        name: "Overnight oats with almond butter",
        instructions: "Soak oats in soy milk overnight, stir in almond butter and banana.",
        ingredients: &["rolled oats", "soy milk", "almond butter", "banana", "cinnamon"],
        prep_time_mins: 5,
        cook_time_mins: None,
        calories: 450.0,
        protein_g: 16.0,
        carbs_g: 58.0,
        fat_g: 18.0,
        fiber_g: 9.0,
        allergens: &["gluten", "nuts", "soy"],
    },
    MealTemplate {
        name: "Chia pudding with mango",
        instructions: "Soak chia seeds in oat milk overnight, top with mango.",
        ingredients: &["chia seeds", "oat milk", "mango", "maple syrup"],
        prep_time_mins: 5,
        cook_time_mins: None,
        calories: 380.0,
        protein_g: 12.0,
        carbs_g: 48.0,
        fat_g: 16.0,
        fiber_g: 12.0,
        allergens: &[],
    },
    MealTemplate {
        name: "Peanut butter banana toast",
        instructions: "Toast bread, spread peanut butter, top with banana slices.",
        ingredients: &["whole-grain bread", "peanut butter", "banana", "hemp seeds"],
        prep_time_mins: 5,
        cook_time_mins: None,
        calories: 420.0,
        protein_g: 15.0,
        carbs_g: 50.0,
        fat_g: 19.0,
        fiber_g: 8.0,
        allergens: &["gluten", "nuts"],
    },
];

const OMNIVORE_LUNCHES: &[MealTemplate] = &[
    MealTemplate {
        name: "Grilled chicken quinoa bowl",
        instructions: "Grill chicken, slice over quinoa with roasted vegetables.",
        ingredients: &["chicken breast", "quinoa", "zucchini", "bell pepper", "olive oil", "lemon"],
        prep_time_mins: 15,
        cook_time_mins: Some(20),
        calories: 560.0,
        protein_g: 45.0,
        carbs_g: 52.0,
        fat_g: 17.0,
        fiber_g: 7.0,
        allergens: &[],
    },
    MealTemplate {
        name: "Tuna salad wrap",
        instructions: "Mix tuna with yogurt dressing and wrap with crunchy vegetables.",
        ingredients: &["canned tuna", "tortilla wrap", "greek yogurt", "celery", "lettuce"],
        prep_time_mins: 10,
        cook_time_mins: None,
        calories: 480.0,
        protein_g: 38.0,
        carbs_g: 44.0,
        fat_g: 15.0,
        fiber_g: 5.0,
        allergens: &["fish", "gluten", "dairy"],
    },
    MealTemplate {
        name: "Beef and broccoli stir-fry",
        instructions: "Sear beef strips, stir-fry with broccoli and serve over rice.",
        ingredients: &["lean beef", "broccoli", "brown rice", "soy sauce", "garlic", "ginger"],
        prep_time_mins: 15,
        cook_time_mins: Some(15),
        calories: 590.0,
        protein_g: 40.0,
        carbs_g: 58.0,
        fat_g: 19.0,
        fiber_g: 6.0,
        allergens: &["soy"],
    },
    MealTemplate {
        name: "Turkey avocado sandwich",
        instructions: "Stack turkey, avocado, and greens on whole-grain bread.",
        ingredients: &["turkey breast", "whole-grain bread", "avocado", "tomato", "arugula"],
        prep_time_mins: 10,
        cook_time_mins: None,
        calories: 520.0,
        protein_g: 34.0,
        carbs_g: 46.0,
        fat_g: 21.0,
        fiber_g: 9.0,
        allergens: &["gluten"],
    },
];

const VEGETARIAN_LUNCHES: &[MealTemplate] = &[
    MealTemplate {
        name: "Minestrone with white beans",
        instructions: "Simmer vegetables and beans in tomato broth until tender.",
        ingredients: &["white beans", "tomatoes", "carrot", "celery", "zucchini", "olive oil"],
        prep_time_mins: 15,
        cook_time_mins: Some(30),
        calories: 460.0,
        protein_g: 22.0,
        carbs_g: 66.0,
        fat_g: 12.0,
        fiber_g: 14.0,
        allergens: &[],
    },
    MealTemplate {
        name: "Caprese sandwich",
        instructions: "Layer mozzarella, tomato, and basil on ciabatta with balsamic.",
        ingredients: &["ciabatta", "mozzarella", "tomato", "basil", "balsamic vinegar"],
        prep_time_mins: 10,
        cook_time_mins: None,
        calories: 540.0,
        protein_g: 24.0,
        carbs_g: 56.0,
        fat_g: 24.0,
        fiber_g: 4.0,
        allergens: &["dairy", "gluten"],
    },
    MealTemplate {
        name: "Halloumi grain bowl",
        instructions: "Pan-fry halloumi and serve over bulgur with cucumber salad.",
        ingredients: &["halloumi", "bulgur", "cucumber", "cherry tomatoes", "mint", "olive oil"],
        prep_time_mins: 15,
        cook_time_mins: Some(10),
        calories: 580.0,
        protein_g: 26.0,
        carbs_g: 54.0,
        fat_g: 28.0,
        fiber_g: 8.0,
        allergens: &["dairy", "gluten"],
    },
    MealTemplate {
        name: "Egg salad lettuce cups",
        instructions: "Fold chopped eggs into yogurt dressing and spoon into lettuce leaves.",
        ingredients: &["eggs", "greek yogurt", "chives", "romaine lettuce", "mustard"],
        prep_time_mins: 15,
        cook_time_mins: Some(10),
        calories: 420.0,
        protein_g: 28.0,
        carbs_g: 12.0,
        fat_g: 28.0,
        fiber_g: 3.0,
        allergens: &["eggs", "dairy"],
    },
];

const VEGAN_LUNCHES: &[MealTemplate] = &[
    MealTemplate {
        name: "Black bean burrito bowl",
        instructions: "Pile beans, rice, corn, and salsa into a bowl with lime.",
        ingredients: &["black beans", "brown rice", "corn", "salsa", "avocado", "lime"],
        prep_time_mins: 15,
        cook_time_mins: Some(10),
        calories: 560.0,
        protein_g: 20.0,
        carbs_g: 86.0,
        fat_g: 16.0,
        fiber_g: 18.0,
        allergens: &[],
    },
    MealTemplate {
        name: "Chickpea tahini bowl",
        instructions: "Roast chickpeas, serve over greens with tahini dressing.",
        ingredients: &["chickpeas", "mixed greens", "tahini", "lemon", "cucumber", "quinoa"],
        prep_time_mins: 15,
        cook_time_mins: Some(20),
        calories: 540.0,
        protein_g: 21.0,
        carbs_g: 62.0,
        fat_g: 24.0,
        fiber_g: 15.0,
        allergens: &["sesame"],
    },
    MealTemplate {
        name: "Lentil soup with crusty bread",
        instructions: "Simmer lentils with cumin and vegetables, serve with bread.",
        ingredients: &["red lentils", "carrot", "onion", "cumin", "sourdough bread"],
        prep_time_mins: 10,
        cook_time_mins: Some(25),
        calories: 500.0,
        protein_g: 24.0,
        carbs_g: 78.0,
        fat_g: 10.0,
        fiber_g: 16.0,
        allergens: &["gluten"],
    },
    MealTemplate {
        name: "Peanut noodle salad",
        instructions: "Toss cold noodles with peanut sauce and shredded vegetables.",
        ingredients: &["rice noodles", "peanut butter", "soy sauce", "carrot", "cabbage", "lime"],
        prep_time_mins: 15,
        cook_time_mins: Some(10),
        calories: 570.0,
        protein_g: 18.0,
        carbs_g: 74.0,
        fat_g: 22.0,
        fiber_g: 8.0,
        allergens: &["nuts", "soy"],
    },
];

const OMNIVORE_DINNERS: &[MealTemplate] = &[
    MealTemplate {
        name: "Baked salmon with sweet potato",
        instructions: "Roast salmon and sweet potato wedges, serve with greens.",
        ingredients: &["salmon fillet", "sweet potato", "broccoli", "olive oil", "lemon"],
        prep_time_mins: 10,
        cook_time_mins: Some(25),
        calories: 640.0,
        protein_g: 42.0,
        carbs_g: 48.0,
        fat_g: 28.0,
        fiber_g: 8.0,
        allergens: &["fish"],
    },
    MealTemplate {
        name: "Chicken fajita skillet",
        instructions: "Sear spiced chicken with peppers and onions, serve over rice.",
        ingredients: &["chicken breast", "bell pepper", "onion", "brown rice", "paprika", "lime"],
        prep_time_mins: 15,
        cook_time_mins: Some(20),
        calories: 610.0,
        protein_g: 46.0,
        carbs_g: 58.0,
        fat_g: 18.0,
        fiber_g: 7.0,
        allergens: &[],
    },
    MealTemplate {
        name: "Turkey meatballs with spaghetti",
        instructions: "Bake turkey meatballs and simmer in marinara over spaghetti.",
        ingredients: &["ground turkey", "spaghetti", "marinara sauce", "egg", "parmesan"],
        prep_time_mins: 20,
        cook_time_mins: Some(25),
        calories: 680.0,
        protein_g: 44.0,
        carbs_g: 68.0,
        fat_g: 22.0,
        fiber_g: 6.0,
        allergens: &["gluten", "eggs", "dairy"],
    },
    MealTemplate {
        name: "Shrimp coconut curry",
        instructions: "Simmer shrimp in coconut curry sauce, serve over jasmine rice.",
        ingredients: &["shrimp", "coconut milk", "curry paste", "jasmine rice", "green beans"],
        prep_time_mins: 15,
        cook_time_mins: Some(20),
        calories: 620.0,
        protein_g: 34.0,
        carbs_g: 62.0,
        fat_g: 26.0,
        fiber_g: 5.0,
        allergens: &["shellfish"],
    },
];

const VEGETARIAN_DINNERS: &[MealTemplate] = &[
    MealTemplate {
        name: "Stuffed peppers with rice and beans",
        instructions: "Fill peppers with rice, beans, and tomato, then bake until soft.",
        ingredients: &["bell peppers", "brown rice", "kidney beans", "tomato sauce", "onion"],
        prep_time_mins: 20,
        cook_time_mins: Some(35),
        calories: 540.0,
        protein_g: 20.0,
        carbs_g: 84.0,
        fat_g: 12.0,
        fiber_g: 14.0,
        allergens: &[],
    },
    MealTemplate {
        name: "Mushroom risotto",
        instructions: "Stir arborio rice with stock and mushrooms until creamy.",
        ingredients: &["arborio rice", "mushrooms", "vegetable stock", "parmesan", "butter"],
        prep_time_mins: 10,
        cook_time_mins: Some(30),
        calories: 620.0,
        protein_g: 18.0,
        carbs_g: 82.0,
        fat_g: 22.0,
        fiber_g: 4.0,
        allergens: &["dairy"],
    },
    MealTemplate {
        name: "Paneer vegetable curry",
        instructions: "Simmer paneer and vegetables in spiced tomato gravy, serve with rice.",
        ingredients: &["paneer", "tomatoes", "cauliflower", "peas", "basmati rice", "garam masala"],
        prep_time_mins: 15,
        cook_time_mins: Some(25),
        calories: 650.0,
        protein_g: 28.0,
        carbs_g: 66.0,
        fat_g: 28.0,
        fiber_g: 9.0,
        allergens: &["dairy"],
    },
    MealTemplate {
        name: "Eggplant parmesan",
        instructions: "Bake breaded eggplant layered with marinara and mozzarella.",
        ingredients: &["eggplant", "breadcrumbs", "egg", "marinara sauce", "mozzarella"],
        prep_time_mins: 25,
        cook_time_mins: Some(35),
        calories: 600.0,
        protein_g: 24.0,
        carbs_g: 58.0,
        fat_g: 28.0,
        fiber_g: 10.0,
        allergens: &["gluten", "eggs", "dairy"],
    },
];

const VEGAN_DINNERS: &[MealTemplate] = &[
    MealTemplate {
        name: "Vegetable chickpea tagine",
        instructions: "Stew chickpeas with root vegetables and warm spices, serve over rice.",
        ingredients: &["chickpeas", "carrot", "sweet potato", "tomatoes", "brown rice", "cinnamon"],
        prep_time_mins: 15,
        cook_time_mins: Some(35),
        calories: 560.0,
        protein_g: 18.0,
        carbs_g: 92.0,
        fat_g: 12.0,
        fiber_g: 17.0,
        allergens: &[],
    },
    MealTemplate {
        name: "Tofu green curry",
        instructions: "Simmer tofu and vegetables in green curry coconut sauce over rice.",
        ingredients: &["firm tofu", "green curry paste", "coconut milk", "jasmine rice", "broccoli"],
        prep_time_mins: 15,
        cook_time_mins: Some(20),
        calories: 600.0,
        protein_g: 24.0,
        carbs_g: 62.0,
        fat_g: 28.0,
        fiber_g: 7.0,
        allergens: &["soy"],
    },
    MealTemplate {
        name: "Lentil bolognese",
        instructions: "Simmer lentils in rich tomato sauce and toss with pasta.",
        ingredients: &["brown lentils", "whole-wheat pasta", "tomatoes", "carrot", "garlic"],
        prep_time_mins: 15,
        cook_time_mins: Some(30),
        calories: 580.0,
        protein_g: 26.0,
        carbs_g: 94.0,
        fat_g: 10.0,
        fiber_g: 18.0,
        allergens: &["gluten"],
    },
    MealTemplate {
        name: "Tempeh stir-fry",
        instructions: "Stir-fry tempeh with vegetables in ginger sauce over rice.",
        ingredients: &["tempeh", "broccoli", "carrot", "soy sauce", "ginger", "brown rice"],
        prep_time_mins: 15,
        cook_time_mins: Some(15),
        calories: 570.0,
        protein_g: 30.0,
        carbs_g: 64.0,
        fat_g: 20.0,
        fiber_g: 10.0,
        allergens: &["soy"],
    },
];

const OMNIVORE_SNACKS: &[MealTemplate] = &[
    MealTemplate {
        name: "Greek yogurt with honey",
        instructions: "Drizzle honey over plain yogurt.",
        ingredients: &["greek yogurt", "honey"],
        prep_time_mins: 2,
        cook_time_mins: None,
        calories: 180.0,
        protein_g: 17.0,
        carbs_g: 22.0,
        fat_g: 3.0,
        fiber_g: 0.0,
        allergens: &["dairy"],
    },
    MealTemplate {
        name: "Hard-boiled eggs",
        instructions: "Boil eggs for nine minutes, cool, and peel.",
        ingredients: &["eggs", "salt"],
        prep_time_mins: 2,
        cook_time_mins: Some(10),
        calories: 160.0,
        protein_g: 13.0,
        carbs_g: 1.0,
        fat_g: 11.0,
        fiber_g: 0.0,
        allergens: &["eggs"],
    },
    MealTemplate {
        name: "Apple with peanut butter",
        instructions: "Slice the apple and dip in peanut butter.",
        ingredients: &["apple", "peanut butter"],
        prep_time_mins: 3,
        cook_time_mins: None,
        calories: 220.0,
        protein_g: 6.0,
        carbs_g: 28.0,
        fat_g: 11.0,
        fiber_g: 5.0,
        allergens: &["nuts"],
    },
    MealTemplate {
        name: "Roasted chickpeas",
        instructions: "Roast seasoned chickpeas until crunchy.",
        ingredients: &["chickpeas", "olive oil", "smoked paprika"],
        prep_time_mins: 5,
        cook_time_mins: Some(25),
        calories: 190.0,
        protein_g: 9.0,
        carbs_g: 27.0,
        fat_g: 6.0,
        fiber_g: 8.0,
        allergens: &[],
    },
];

const VEGETARIAN_SNACKS: &[MealTemplate] = &[
    MealTemplate {
        name: "Greek yogurt with honey",
        instructions: "Drizzle honey over plain yogurt.",
        ingredients: &["greek yogurt", "honey"],
        prep_time_mins: 2,
        cook_time_mins: None,
        calories: 180.0,
        protein_g: 17.0,
        carbs_g: 22.0,
        fat_g: 3.0,
        fiber_g: 0.0,
        allergens: &["dairy"],
    },
    MealTemplate {
        name: "Carrot sticks with hummus",
        instructions: "Cut carrots into sticks and serve with hummus.",
        ingredients: &["carrot", "hummus"],
        prep_time_mins: 5,
        cook_time_mins: None,
        calories: 170.0,
        protein_g: 6.0,
        carbs_g: 20.0,
        fat_g: 8.0,
        fiber_g: 6.0,
        allergens: &["sesame"],
    },
    MealTemplate {
        name: "Roasted chickpeas",
        instructions: "Roast seasoned chickpeas until crunchy.",
        ingredients: &["chickpeas", "olive oil", "smoked paprika"],
        prep_time_mins: 5,
        cook_time_mins: Some(25),
        calories: 190.0,
        protein_g: 9.0,
        carbs_g: 27.0,
        fat_g: 6.0,
        fiber_g: 8.0,
        allergens: &[],
    },
    MealTemplate {
        name: "Cheese and crackers",
        instructions: "Slice cheese and plate with whole-grain crackers.",
        ingredients: &["cheddar", "whole-grain crackers", "grapes"],
        prep_time_mins: 3,
        cook_time_mins: None,
        calories: 240.0,
        protein_g: 10.0,
        carbs_g: 22.0,
        fat_g: 13.0,
        fiber_g: 2.0,
        allergens: &["dairy", "gluten"],
    },
];

const VEGAN_SNACKS: &[MealTemplate] = &[
    MealTemplate {
        name: "Apple with almond butter",
        instructions: "Slice the apple and dip in almond butter.",
        ingredients: &["apple", "almond butter"],
        prep_time_mins: 3,
        cook_time_mins: None,
        calories: 230.0,
        protein_g: 6.0,
        carbs_g: 29.0,
        fat_g: 12.0,
        fiber_g: 6.0,
        allergens: &["nuts"],
    },
    MealTemplate {
        name: "Carrot sticks with hummus",
        instructions: "Cut carrots into sticks and serve with hummus.",
        ingredients: &["carrot", "hummus"],
        prep_time_mins: 5,
        cook_time_mins: None,
        calories: 170.0,
        protein_g: 6.0,
        carbs_g: 20.0,
        fat_g: 8.0,
        fiber_g: 6.0,
        allergens: &["sesame"],
    },
    MealTemplate {
        name: "Roasted chickpeas",
        instructions: "Roast seasoned chickpeas until crunchy.",
        ingredients: &["chickpeas", "olive oil", "smoked paprika"],
        prep_time_mins: 5,
        cook_time_mins: Some(25),
        calories: 190.0,
        protein_g: 9.0,
        carbs_g: 27.0,
        fat_g: 6.0,
        fiber_g: 8.0,
        allergens: &[],
    },
    MealTemplate {
        name: "Edamame with sea salt",
        instructions: "Steam edamame pods and sprinkle with sea salt.",
        ingredients: &["edamame", "sea salt"],
        prep_time_mins: 2,
        cook_time_mins: Some(5),
        calories: 150.0,
        protein_g: 12.0,
        carbs_g: 12.0,
        fat_g: 6.0,
        fiber_g: 5.0,
        allergens: &["soy"],
    },
];
