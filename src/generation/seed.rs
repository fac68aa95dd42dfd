// ABOUTME: Deterministic hash-based pseudo-randomness for reproducible variety
// ABOUTME: Seeds, string hashing, and per-category variety element selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Intelligence

//! # Seed Engine
//!
//! Reproducible "variety" without true randomness. A [`GenerationSeed`] mixes
//! wall-clock time, a random component, and a hash of the serialized request,
//! so independent requests diverge while anything derived from one seed stays
//! stable. All downstream variety (cuisine, protein, grain, ...) is indexed
//! from the seed through [`string_hash`], which makes fallback plans and test
//! fixtures fully reproducible.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::models::MenuRequest;

/// Cuisines used for variety hints and fallback styling
pub const CUISINES: [&str; 12] = [
    "Mediterranean",
    "Mexican",
    "Japanese",
    "Indian",
    "Thai",
    "Italian",
    "Greek",
    "Korean",
    "Moroccan",
    "Vietnamese",
    "Spanish",
    "Lebanese",
];

/// Protein focus options
pub const PROTEINS: [&str; 10] = [
    "chicken breast",
    "salmon",
    "tofu",
    "black beans",
    "eggs",
    "turkey",
    "lentils",
    "shrimp",
    "tempeh",
    "chickpeas",
];

/// Whole grain options
pub const GRAINS: [&str; 8] = [
    "brown rice",
    "quinoa",
    "farro",
    "bulgur",
    "whole-wheat pasta",
    "barley",
    "couscous",
    "buckwheat",
];

/// Fruit options
pub const FRUITS: [&str; 9] = [
    "blueberries",
    "mango",
    "apple",
    "pear",
    "pineapple",
    "strawberries",
    "kiwi",
    "orange",
    "banana",
];

/// Vegetable options
pub const VEGETABLES: [&str; 10] = [
    "broccoli",
    "spinach",
    "kale",
    "bell pepper",
    "zucchini",
    "cauliflower",
    "sweet potato",
    "brussels sprouts",
    "asparagus",
    "carrot",
];

/// Spice options
pub const SPICES: [&str; 8] = [
    "smoked paprika",
    "cumin",
    "turmeric",
    "za'atar",
    "oregano",
    "ginger",
    "coriander",
    "chili flakes",
];

/// Cooking method options
pub const COOKING_METHODS: [&str; 8] = [
    "roasted",
    "grilled",
    "pan-seared",
    "steamed",
    "stir-fried",
    "baked",
    "braised",
    "air-fried",
];

/// Stable, order-sensitive polynomial rolling hash over character codes
///
/// Base 31, wrapping in the 32-bit signed range. Identical input always
/// yields the identical value across platforms and runs.
#[must_use]
pub fn string_hash(text: &str) -> i32 {
    let mut hash: i32 = 0;
    for c in text.chars() {
        hash = hash.wrapping_mul(31).wrapping_add(c as i32);
    }
    hash
}

/// One deterministic stylistic pick per ingredient category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarietyElements {
    /// Cuisine direction for the week
    pub cuisine: &'static str,
    /// Protein to feature
    pub protein: &'static str,
    /// Grain to feature
    pub grain: &'static str,
    /// Fruit to feature
    pub fruit: &'static str,
    /// Vegetable to feature
    pub vegetable: &'static str,
    /// Spice to feature
    pub spice: &'static str,
    /// Cooking method to favor
    pub cooking_method: &'static str,
}

/// Numeric seed driving every deterministic variety choice for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSeed(u64);

impl GenerationSeed {
    /// Create a seed from an explicit value (reproducible fixtures)
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Derive a fresh seed for one generation request
    ///
    /// Mixes wall-clock millis, a random component, and a hash of the
    /// serialized request so that two users asking at the same instant still
    /// get different variety choices.
    #[must_use]
    pub fn from_request(request: &MenuRequest) -> Self {
        let serialized =
            serde_json::to_string(request).unwrap_or_else(|_| "{}".to_owned());
        let request_hash = u64::from(string_hash(&serialized).unsigned_abs());
        let now_ms = Utc::now().timestamp_millis().unsigned_abs();
        let noise = u64::from(rand::random::<u32>());

        Self(now_ms ^ (noise << 20) ^ request_hash.wrapping_mul(0x9E37_79B9))
    }

    /// Raw seed value
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Deterministic index into a fixed-size table for a named category
    ///
    /// Identical `(seed, category)` always yields the identical index.
    #[must_use]
    pub fn category_index(&self, category: &str, table_len: usize) -> usize {
        debug_assert!(table_len > 0);
        let discriminated = format!("{}-{category}", self.0);
        string_hash(&discriminated).unsigned_abs() as usize % table_len
    }

    /// One deterministic pick per variety category
    #[must_use]
    pub fn derive_variety_elements(&self) -> VarietyElements {
        VarietyElements {
            cuisine: CUISINES[self.category_index("cuisine", CUISINES.len())],
            protein: PROTEINS[self.category_index("protein", PROTEINS.len())],
            grain: GRAINS[self.category_index("grain", GRAINS.len())],
            fruit: FRUITS[self.category_index("fruit", FRUITS.len())],
            vegetable: VEGETABLES[self.category_index("vegetable", VEGETABLES.len())],
            spice: SPICES[self.category_index("spice", SPICES.len())],
            cooking_method: COOKING_METHODS
                [self.category_index("cooking-method", COOKING_METHODS.len())],
        }
    }
}
