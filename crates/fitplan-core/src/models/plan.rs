// ABOUTME: Plan output structures: recommendation, weekly schedule, and full response
// ABOUTME: WeeklySchedule serializes as an object keyed by capitalized day names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use crate::models::{FoodRow, WorkoutRow};
use serde::{Deserialize, Serialize};

/// Days of the week in schedule order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayOfWeek {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

impl DayOfWeek {
    /// All days, Monday first
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Capitalized English day name, matching the wire format
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

/// A seven-day schedule of plan entries
///
/// Serializes as a JSON object keyed `"Monday"` through `"Sunday"`. Each
/// day holds at most five entries; a day may hold fewer only when its
/// filtered candidate pool was smaller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklySchedule<T> {
    /// Monday entries
    #[serde(rename = "Monday")]
    pub monday: Vec<T>,
    /// Tuesday entries
    #[serde(rename = "Tuesday")]
    pub tuesday: Vec<T>,
    /// Wednesday entries
    #[serde(rename = "Wednesday")]
    pub wednesday: Vec<T>,
    /// Thursday entries
    #[serde(rename = "Thursday")]
    pub thursday: Vec<T>,
    /// Friday entries
    #[serde(rename = "Friday")]
    pub friday: Vec<T>,
    /// Saturday entries
    #[serde(rename = "Saturday")]
    pub saturday: Vec<T>,
    /// Sunday entries
    #[serde(rename = "Sunday")]
    pub sunday: Vec<T>,
}

impl<T> WeeklySchedule<T> {
    /// Build a schedule by invoking `builder` once per day, Monday first
    pub fn generate(mut builder: impl FnMut(DayOfWeek) -> Vec<T>) -> Self {
        Self {
            monday: builder(DayOfWeek::Monday),
            tuesday: builder(DayOfWeek::Tuesday),
            wednesday: builder(DayOfWeek::Wednesday),
            thursday: builder(DayOfWeek::Thursday),
            friday: builder(DayOfWeek::Friday),
            saturday: builder(DayOfWeek::Saturday),
            sunday: builder(DayOfWeek::Sunday),
        }
    }

    /// Entries for one day
    #[must_use]
    pub fn day(&self, day: DayOfWeek) -> &[T] {
        match day {
            DayOfWeek::Monday => &self.monday,
            DayOfWeek::Tuesday => &self.tuesday,
            DayOfWeek::Wednesday => &self.wednesday,
            DayOfWeek::Thursday => &self.thursday,
            DayOfWeek::Friday => &self.friday,
            DayOfWeek::Saturday => &self.saturday,
            DayOfWeek::Sunday => &self.sunday,
        }
    }

    /// Iterate days in schedule order with their entries
    pub fn iter(&self) -> impl Iterator<Item = (DayOfWeek, &[T])> {
        DayOfWeek::ALL.iter().map(move |&day| (day, self.day(day)))
    }
}

/// The structured recommendation derived from cluster profile and preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    /// Goal label from the cluster profile (e.g. "Fat Loss")
    pub fitness_goal: String,
    /// Workout style after equipment/goal overrides (e.g. "Strength Training")
    pub workout_plan: String,
    /// Diet style with the dietary preference suffix (e.g. "Balanced Indian diet (Veg)")
    pub diet_plan: String,
    /// Estimated daily calorie target (kcal)
    pub daily_calories: i32,
    /// Minutes available per day, echoed from the request
    pub time_per_day: u32,
}

/// The full engine output for one plan request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    /// Body-mass index, rounded to two decimals
    pub bmi: f64,
    /// Estimated daily calorie target (kcal)
    pub daily_calories: i32,
    /// Derived recommendation
    pub recommendation: Recommendation,
    /// Today's sampled workout entries (at most five)
    pub daily_workout: Vec<WorkoutRow>,
    /// Today's sampled meal entries (at most five)
    pub daily_diet: Vec<FoodRow>,
    /// Seven-day workout split
    pub weekly_workout: WeeklySchedule<WorkoutRow>,
    /// Seven-day meal schedule
    pub weekly_diet: WeeklySchedule<FoodRow>,
}
