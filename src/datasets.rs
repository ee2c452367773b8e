// ABOUTME: CSV-backed dataset loading for the workout, food, and profile tables
// ABOUTME: Loads everything into memory once at startup and hands out a shared catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Dataset loading.
//!
//! Three CSV files live in the data directory:
//! - `workouts.csv`: `exercise,muscle,equipment`, empty muscle cells read
//!   as missing
//! - `foods.csv`: `dish,calories,protein,carbs,fats`
//! - `fitness_profiles.csv`: the training table for the cluster model
//!
//! A missing file, an unreadable row, or an empty table is a dataset error;
//! the server refuses to start without usable data.

use std::path::Path;
use std::sync::Arc;

use fitplan_core::errors::{AppError, AppResult};
use fitplan_core::models::{Catalog, FitnessSample, FoodRow, WorkoutRow};
use serde::de::DeserializeOwned;
use tracing::info;

/// In-memory datasets loaded at startup
#[derive(Debug, Clone)]
pub struct DatasetStore {
    catalog: Arc<Catalog>,
    samples: Vec<FitnessSample>,
}

impl DatasetStore {
    /// Load all three tables from the data directory
    ///
    /// # Errors
    ///
    /// Returns a dataset error when a file is missing, a row fails to
    /// parse, or a table comes back empty.
    pub fn load(data_dir: &Path) -> AppResult<Self> {
        let workouts: Vec<WorkoutRow> = read_table(&data_dir.join("workouts.csv"))?;
        let foods: Vec<FoodRow> = read_table(&data_dir.join("foods.csv"))?;
        let samples: Vec<FitnessSample> = read_table(&data_dir.join("fitness_profiles.csv"))?;

        info!(
            workouts = workouts.len(),
            foods = foods.len(),
            profiles = samples.len(),
            "datasets loaded"
        );

        Ok(Self {
            catalog: Arc::new(Catalog::new(workouts, foods)),
            samples,
        })
    }

    /// Shared handle to the workout and food catalog
    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        self.catalog.clone()
    }

    /// Training samples for the cluster model
    #[must_use]
    pub fn samples(&self) -> &[FitnessSample] {
        &self.samples
    }
}

/// Read one CSV table, requiring at least one row
fn read_table<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        AppError::dataset(format!("failed to open {}", path.display())).with_source(e)
    })?;

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: T = record.map_err(|e| {
            AppError::dataset(format!("failed to parse row of {}", path.display())).with_source(e)
        })?;
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(AppError::dataset(format!(
            "{} contains no rows",
            path.display()
        )));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_valid_datasets(dir: &Path) {
        fs::write(
            dir.join("workouts.csv"),
            "exercise,muscle,equipment\n\
             Push-up,Chest,Bodyweight\n\
             Burpee,,Bodyweight\n\
             Dumbbell Curl,Biceps,Dumbbell\n",
        )
        .unwrap();
        fs::write(
            dir.join("foods.csv"),
            "dish,calories,protein,carbs,fats\n\
             Idli,110,4,20,0.5\n\
             Paneer Bhurji,290,18,8,22\n",
        )
        .unwrap();
        fs::write(
            dir.join("fitness_profiles.csv"),
            "age,sex,goal,diet_pref,budget,equipment,bmi,daily_calories,time_per_day\n\
             25,male,fat_loss,veg,low,none,31.2,1500,30\n\
             32,female,muscle_gain,non_veg,medium,gym,23.5,2700,60\n\
             41,male,general,veg,high,dumbbells,26.1,2100,45\n\
             29,female,general,veg,low,none,20.4,1900,40\n",
        )
        .unwrap();
    }

    #[test]
    fn test_load_reads_all_three_tables() {
        let dir = tempfile::tempdir().unwrap();
        write_valid_datasets(dir.path());

        let store = DatasetStore::load(dir.path()).unwrap();
        assert_eq!(store.catalog().workouts().len(), 3);
        assert_eq!(store.catalog().foods().len(), 2);
        assert_eq!(store.samples().len(), 4);
    }

    #[test]
    fn test_empty_muscle_cell_reads_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        write_valid_datasets(dir.path());

        let store = DatasetStore::load(dir.path()).unwrap();
        let burpee = store
            .catalog()
            .workouts()
            .iter()
            .find(|row| row.exercise == "Burpee")
            .cloned()
            .unwrap();
        assert!(burpee.muscle.is_none());
    }

    #[test]
    fn test_missing_file_is_a_dataset_error() {
        let dir = tempfile::tempdir().unwrap();

        let error = DatasetStore::load(dir.path()).unwrap_err();
        assert_eq!(error.code, fitplan_core::errors::ErrorCode::DatasetError);
    }

    #[test]
    fn test_unparsable_row_is_a_dataset_error() {
        let dir = tempfile::tempdir().unwrap();
        write_valid_datasets(dir.path());
        fs::write(
            dir.path().join("foods.csv"),
            "dish,calories,protein,carbs,fats\nIdli,not-a-number,4,20,0.5\n",
        )
        .unwrap();

        assert!(DatasetStore::load(dir.path()).is_err());
    }

    #[test]
    fn test_header_only_table_is_a_dataset_error() {
        let dir = tempfile::tempdir().unwrap();
        write_valid_datasets(dir.path());
        fs::write(dir.path().join("workouts.csv"), "exercise,muscle,equipment\n").unwrap();

        assert!(DatasetStore::load(dir.path()).is_err());
    }
}
