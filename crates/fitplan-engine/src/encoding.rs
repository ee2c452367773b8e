// ABOUTME: Integer label encoding for categorical training columns
// ABOUTME: Codes follow the sorted order of distinct values observed at fit time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Label encoding for categorical columns of the fitness-profile table.
//!
//! Each categorical column gets its own encoder. Codes are assigned by the
//! sorted order of the distinct values seen during fitting, which keeps the
//! assignment stable for the lifetime of a trained model regardless of row
//! order in the source table.

use std::collections::{BTreeMap, BTreeSet};

/// Integer encoder for one categorical string column
#[derive(Debug, Clone)]
pub struct LabelEncoder {
    codes: BTreeMap<String, usize>,
}

impl LabelEncoder {
    /// Fit an encoder over the raw values of one column
    pub fn fit<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let distinct: BTreeSet<&str> = values.into_iter().collect();
        let codes = distinct
            .into_iter()
            .enumerate()
            .map(|(code, value)| (value.to_owned(), code))
            .collect();
        Self { codes }
    }

    /// Code for a value observed at fit time
    #[must_use]
    pub fn encode(&self, value: &str) -> Option<usize> {
        self.codes.get(value).copied()
    }

    /// Number of distinct classes
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.codes.len()
    }

    /// Classes in code order (sorted)
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.codes.keys().map(String::as_str)
    }
}
