// ABOUTME: Shared fixtures for fitplan integration tests
// ABOUTME: Builds small catalogs, training samples, and a ready-to-serve router

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use fitplan::config::ServerConfig;
use fitplan::context::ServerResources;
use fitplan::routes;
use fitplan_core::models::{
    Budget, Catalog, DietPreference, Equipment, FitnessSample, FoodRow, Goal, Sex, UserProfile,
    WorkoutRow,
};
use fitplan_engine::cluster::DEFAULT_SEED;
use fitplan_engine::{ClusterModel, PlanEngine};

pub fn workout(exercise: &str, muscle: Option<&str>, equipment: &str) -> WorkoutRow {
    WorkoutRow {
        exercise: exercise.to_owned(),
        muscle: muscle.map(str::to_owned),
        equipment: equipment.to_owned(),
    }
}

pub fn food(dish: &str, calories: f64, protein: f64) -> FoodRow {
    FoodRow {
        dish: dish.to_owned(),
        calories,
        protein,
        carbs: 25.0,
        fats: 8.0,
    }
}

/// A catalog large enough that no planner needs its fallback
pub fn sample_catalog() -> Catalog {
    Catalog::new(
        vec![
            workout("Push-up", Some("Chest"), "Bodyweight"),
            workout("Pike Push-up", Some("Shoulder"), "Bodyweight"),
            workout("Pull-up", Some("Back"), "Bodyweight"),
            workout("Chin-up", Some("Biceps"), "Bodyweight"),
            workout("Tricep Dip", Some("Triceps"), "Bodyweight"),
            workout("Inverted Row", Some("Lats"), "Bodyweight"),
            workout("Air Squat", Some("Quadriceps"), "Bodyweight"),
            workout("Walking Lunge", Some("Glutes"), "Bodyweight"),
            workout("Glute Bridge", Some("Glutes"), "Bodyweight"),
            workout("Calf Raise", Some("Calves"), "Bodyweight"),
            workout("Single-leg Deadlift", Some("Hamstrings"), "Bodyweight"),
            workout("Wall Sit", Some("Legs"), "Bodyweight"),
            workout("Plank", Some("Core"), "Bodyweight"),
            workout("Crunch", Some("Abs"), "Bodyweight"),
            workout("Side Plank", Some("Obliques"), "Bodyweight"),
            workout("Leg Raise", Some("Abs"), "Bodyweight"),
            workout("Russian Twist", Some("Obliques"), "Bodyweight"),
            workout("Burpee", None, "Bodyweight"),
            workout("Jumping Jack", None, "Bodyweight"),
            workout("Treadmill Run", None, "Cardio Machine"),
            workout("Dumbbell Curl", Some("Biceps"), "Dumbbell"),
            workout("Dumbbell Press", Some("Shoulder"), "Dumbbell"),
            workout("Dumbbell Row", Some("Back"), "Dumbbell"),
            workout("Goblet Squat", Some("Quadriceps"), "Dumbbell"),
            workout("Dumbbell Lunge", Some("Glutes"), "Dumbbell"),
            workout("Bench Press", Some("Chest"), "Barbell"),
            workout("Deadlift", Some("Hamstrings"), "Barbell"),
            workout("Overhead Press", Some("Shoulder"), "Barbell"),
            workout("Lat Pulldown", Some("Lats"), "Machine"),
            workout("Leg Press", Some("Quadriceps"), "Machine"),
        ],
        vec![
            food("Moong Dal Chilla", 120.0, 9.0),
            food("Sprout Salad", 90.0, 8.0),
            food("Vegetable Upma", 180.0, 5.0),
            food("Masala Oats", 160.0, 6.0),
            food("Cucumber Raita", 70.0, 3.0),
            food("Idli", 110.0, 4.0),
            food("Dhokla", 150.0, 7.0),
            food("Paneer Bhurji", 290.0, 18.0),
            food("Chicken Curry", 320.0, 28.0),
            food("Rajma Masala", 260.0, 14.0),
            food("Dal Tadka", 230.0, 12.0),
            food("Soya Chunk Curry", 250.0, 26.0),
            food("Egg Bhurji", 210.0, 15.0),
            food("Vegetable Biryani", 420.0, 9.0),
            food("Aloo Paratha", 350.0, 7.0),
            food("Jeera Rice", 250.0, 5.0),
        ],
    )
}

pub fn training_samples() -> Vec<FitnessSample> {
    fn sample(
        goal: &str,
        equipment: &str,
        bmi: f64,
        daily_calories: f64,
        time_per_day: f64,
    ) -> FitnessSample {
        FitnessSample {
            age: 30,
            sex: "male".to_owned(),
            goal: goal.to_owned(),
            diet_pref: "veg".to_owned(),
            budget: "medium".to_owned(),
            equipment: equipment.to_owned(),
            bmi,
            daily_calories,
            time_per_day,
        }
    }

    vec![
        sample("fat_loss", "none", 31.2, 1450.0, 30.0),
        sample("fat_loss", "none", 33.5, 1350.0, 25.0),
        sample("fat_loss", "dumbbells", 29.8, 1550.0, 40.0),
        sample("muscle_gain", "gym", 23.4, 2850.0, 75.0),
        sample("muscle_gain", "gym", 24.8, 2950.0, 90.0),
        sample("muscle_gain", "dumbbells", 21.9, 2650.0, 60.0),
        sample("general", "none", 23.8, 2050.0, 45.0),
        sample("general", "dumbbells", 22.4, 1950.0, 30.0),
        sample("general", "gym", 24.5, 2150.0, 50.0),
        sample("weight_gain", "none", 17.2, 2450.0, 25.0),
        sample("weight_gain", "dumbbells", 16.8, 2350.0, 30.0),
        sample("weight_gain", "none", 18.4, 2550.0, 35.0),
    ]
}

pub fn trained_engine() -> PlanEngine {
    let model = ClusterModel::train(&training_samples(), DEFAULT_SEED)
        .expect("training fixture must fit");
    PlanEngine::new(Arc::new(sample_catalog()), model)
}

pub fn test_profile() -> UserProfile {
    UserProfile {
        age: 25,
        sex: Sex::Male,
        height_cm: 175,
        weight_kg: 70,
        goal: Goal::FatLoss,
        diet_pref: DietPreference::Veg,
        budget: Budget::Low,
        equipment: Equipment::None,
        time_per_day_min: 45,
    }
}

pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        host: "127.0.0.1".to_owned(),
        data_dir: PathBuf::from("./data"),
        model_seed: DEFAULT_SEED,
    }
}

/// Router over fixture data, ready for oneshot requests
pub fn test_router() -> Router {
    let resources = Arc::new(ServerResources::new(trained_engine(), test_config()));
    routes::router(resources)
}
