// ABOUTME: Per-request user profile with strongly typed categorical fields
// ABOUTME: Defines Sex, Goal, DietPreference, Budget, and Equipment enums with wire names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use serde::{Deserialize, Serialize};

/// Biological sex for the basal metabolic rate formula
///
/// Only the male/not-male distinction matters to the calorie formula, so the
/// wire format is deliberately lenient: any string that case-insensitively
/// equals `"male"` parses as [`Sex::Male`], everything else as [`Sex::Other`].
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (BMR offset +5)
    Male,
    /// Any other value (BMR offset -161)
    Other,
}

impl Sex {
    /// Parse a raw wire value, case-insensitively matching `"male"`
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        if value.eq_ignore_ascii_case("male") {
            Self::Male
        } else {
            Self::Other
        }
    }

    /// Canonical wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Other => "other",
        }
    }

    /// Whether the male branch of the BMR formula applies
    #[must_use]
    pub const fn is_male(self) -> bool {
        matches!(self, Self::Male)
    }
}

impl<'de> Deserialize<'de> for Sex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&value))
    }
}

/// Fitness goal driving the calorie adjustment and workout overrides
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric deficit (-300 kcal/day)
    FatLoss,
    /// Caloric surplus (+300 kcal/day)
    MuscleGain,
    /// No calorie adjustment
    General,
}

impl Goal {
    /// Canonical wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FatLoss => "fat_loss",
            Self::MuscleGain => "muscle_gain",
            Self::General => "general",
        }
    }
}

/// Dietary preference appended to the recommended diet style
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DietPreference {
    /// Vegetarian
    Veg,
    /// Non-vegetarian
    NonVeg,
}

impl DietPreference {
    /// Canonical wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Veg => "veg",
            Self::NonVeg => "non_veg",
        }
    }
}

/// Budget bracket collected from the user
///
/// Fed into cluster model training as a categorical feature but not read by
/// any recommendation or generation rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Budget {
    /// Low budget
    Low,
    /// Medium budget
    Medium,
    /// High budget
    High,
}

impl Budget {
    /// Canonical wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Equipment the user has access to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    /// No equipment (bodyweight-only pools)
    None,
    /// Dumbbells at home
    Dumbbells,
    /// Full gym access (no equipment filtering)
    Gym,
}

impl Equipment {
    /// Canonical wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Dumbbells => "dumbbells",
            Self::Gym => "gym",
        }
    }
}

/// A user's physical profile and preferences for one plan request
///
/// Transient: deserialized from the request body, consumed by the engine,
/// never persisted. Values are taken as-is beyond type conversion; semantic
/// range checking (positive height, plausible age) is the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Age in years
    pub age: u32,
    /// Biological sex for the BMR formula
    pub sex: Sex,
    /// Height in centimeters
    pub height_cm: u32,
    /// Weight in kilograms
    pub weight_kg: u32,
    /// Fitness goal
    pub goal: Goal,
    /// Dietary preference
    pub diet_pref: DietPreference,
    /// Budget bracket (collected, not used by plan rules)
    pub budget: Budget,
    /// Equipment access
    pub equipment: Equipment,
    /// Minutes available for training per day
    pub time_per_day_min: u32,
}
