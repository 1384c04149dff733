//! Catalog module - category/exercise lookup over the exercise table

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::exercises::{CATEGORIES, CategoryDef, EXERCISES, ExerciseDef, ExerciseRecord};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("exercise not found: {category}/{exercise}")]
    NotFound { category: String, exercise: String },
    #[error("exercise {category}/{exercise} references an unknown category")]
    UnknownCategory { category: String, exercise: String },
    #[error("duplicate exercise key: {category}/{exercise}")]
    DuplicateExercise { category: String, exercise: String },
    #[error("invalid exercise {category}/{exercise}: {reason}")]
    InvalidRecord {
        category: String,
        exercise: String,
        reason: &'static str,
    },
}

/// One valid page identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct PageParams {
    pub category: &'static str,
    pub exercise: &'static str,
}

impl PageParams {
    /// Route path, e.g. `egzersiz/diz/kuadriseps-gucendirme`
    pub fn path(&self) -> String {
        format!("egzersiz/{}/{}", self.category, self.exercise)
    }
}

#[derive(Debug)]
pub struct Category {
    pub key: &'static str,
    pub title: &'static str,
    exercises: BTreeMap<&'static str, ExerciseRecord>,
}

impl Category {
    pub fn exercises(&self) -> impl Iterator<Item = (&'static str, &ExerciseRecord)> {
        self.exercises.iter().map(|(key, record)| (*key, record))
    }
}

/// Read-only exercise catalog, built once at startup
#[derive(Debug)]
pub struct Catalog {
    categories: BTreeMap<&'static str, Category>,
}

impl Catalog {
    /// Build the catalog shipped with the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_defs(CATEGORIES, EXERCISES)
    }

    /// Build and validate a catalog from definition tables
    pub fn from_defs(
        categories: &[CategoryDef],
        exercises: &[ExerciseDef],
    ) -> Result<Self, CatalogError> {
        let mut map: BTreeMap<&'static str, Category> = categories
            .iter()
            .map(|c| {
                (c.key, Category {
                    key: c.key,
                    title: c.title,
                    exercises: BTreeMap::new(),
                })
            })
            .collect();

        for def in exercises {
            let Some(category) = map.get_mut(def.category) else {
                return Err(CatalogError::UnknownCategory {
                    category: def.category.to_string(),
                    exercise: def.key.to_string(),
                });
            };

            if def.sets == 0 {
                return Err(CatalogError::InvalidRecord {
                    category: def.category.to_string(),
                    exercise: def.key.to_string(),
                    reason: "sets must be positive",
                });
            }

            if category.exercises.insert(def.key, ExerciseRecord::from(def)).is_some() {
                return Err(CatalogError::DuplicateExercise {
                    category: def.category.to_string(),
                    exercise: def.key.to_string(),
                });
            }
        }

        let catalog = Self { categories: map };
        debug!(
            "Catalog built: {} categories, {} exercises",
            catalog.categories.len(),
            catalog.len()
        );
        Ok(catalog)
    }

    /// Resolve a page identity to its record
    pub fn resolve(&self, category: &str, exercise: &str) -> Result<&ExerciseRecord, CatalogError> {
        self.categories
            .get(category)
            .and_then(|c| c.exercises.get(exercise))
            .ok_or_else(|| CatalogError::NotFound {
                category: category.to_string(),
                exercise: exercise.to_string(),
            })
    }

    /// Every valid `(category, exercise)` pair, in key order
    pub fn page_params(&self) -> impl Iterator<Item = PageParams> + '_ {
        self.categories.values().flat_map(|c| {
            c.exercises.keys().map(move |exercise| PageParams {
                category: c.key,
                exercise: *exercise,
            })
        })
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    /// Total number of exercises
    pub fn len(&self) -> usize {
        self.categories.values().map(|c| c.exercises.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
