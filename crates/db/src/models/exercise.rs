//! Exercise catalogue models.

use fitness_core::exercise::{DifficultyLevel, MuscleGroup};
use fitness_core::types::{DbId, Timestamp};
use fitness_core::validation::{trimmed, trimmed_opt};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::common::Timestamps;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A stored exercise definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub exercise_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub equipment_required: Option<Vec<String>>,
    pub primary_muscle_group: Option<MuscleGroup>,
    pub difficulty_level: Option<DifficultyLevel>,
    pub instructions: Option<String>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Exercise {
    /// Apply a partial update. `None` fields are left unchanged.
    pub fn apply(&mut self, update: UpdateExercise) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if update.description.is_some() {
            self.description = update.description;
        }
        if update.equipment_required.is_some() {
            self.equipment_required = update.equipment_required;
        }
        if update.primary_muscle_group.is_some() {
            self.primary_muscle_group = update.primary_muscle_group;
        }
        if update.difficulty_level.is_some() {
            self.difficulty_level = update.difficulty_level;
        }
        if update.instructions.is_some() {
            self.instructions = update.instructions;
        }
        self.timestamps.touch();
    }
}

// ---------------------------------------------------------------------------
// Create DTO
// ---------------------------------------------------------------------------

/// Input for creating an exercise.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateExercise {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(max = 255))]
    pub name: String,
    #[serde(default, deserialize_with = "trimmed_opt")]
    pub description: Option<String>,
    /// Equipment needed, e.g. `["barbell", "bench"]`.
    #[serde(default)]
    pub equipment_required: Option<Vec<String>>,
    #[serde(default)]
    pub primary_muscle_group: Option<MuscleGroup>,
    #[serde(default)]
    pub difficulty_level: Option<DifficultyLevel>,
    #[serde(default, deserialize_with = "trimmed_opt")]
    pub instructions: Option<String>,
}

// ---------------------------------------------------------------------------
// Update DTO
// ---------------------------------------------------------------------------

/// Input for updating an exercise.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateExercise {
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[validate(length(max = 255))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "trimmed_opt")]
    pub description: Option<String>,
    #[serde(default)]
    pub equipment_required: Option<Vec<String>>,
    #[serde(default)]
    pub primary_muscle_group: Option<MuscleGroup>,
    #[serde(default)]
    pub difficulty_level: Option<DifficultyLevel>,
    #[serde(default, deserialize_with = "trimmed_opt")]
    pub instructions: Option<String>,
}

// ---------------------------------------------------------------------------
// Response / summary
// ---------------------------------------------------------------------------

/// Exercise as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseResponse {
    pub exercise_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub equipment_required: Option<Vec<String>>,
    pub primary_muscle_group: Option<MuscleGroup>,
    pub difficulty_level: Option<DifficultyLevel>,
    pub instructions: Option<String>,
    pub created_at: Timestamp,
}

impl From<&Exercise> for ExerciseResponse {
    fn from(exercise: &Exercise) -> Self {
        Self {
            exercise_id: exercise.exercise_id,
            name: exercise.name.clone(),
            description: exercise.description.clone(),
            equipment_required: exercise.equipment_required.clone(),
            primary_muscle_group: exercise.primary_muscle_group,
            difficulty_level: exercise.difficulty_level,
            instructions: exercise.instructions.clone(),
            created_at: exercise.timestamps.created_at,
        }
    }
}

/// Minimal exercise info embedded in set and set-log responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSummary {
    pub exercise_id: DbId,
    pub name: String,
    pub primary_muscle_group: Option<MuscleGroup>,
}

impl From<&Exercise> for ExerciseSummary {
    fn from(exercise: &Exercise) -> Self {
        Self {
            exercise_id: exercise.exercise_id,
            name: exercise.name.clone(),
            primary_muscle_group: exercise.primary_muscle_group,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitness_core::validation::from_value;
    use serde_json::json;

    fn squat() -> Exercise {
        Exercise {
            exercise_id: DbId::new_v4(),
            name: "Back Squat".into(),
            description: None,
            equipment_required: Some(vec!["barbell".into(), "rack".into()]),
            primary_muscle_group: Some(MuscleGroup::Quads),
            difficulty_level: Some(DifficultyLevel::Intermediate),
            instructions: None,
            timestamps: Timestamps::now(),
        }
    }

    #[test]
    fn full_create_is_accepted() {
        let input: CreateExercise = from_value(json!({
            "name": "Deadlift",
            "equipment_required": ["barbell"],
            "primary_muscle_group": "hamstrings",
            "difficulty_level": "advanced",
        }))
        .unwrap();
        assert_eq!(input.primary_muscle_group, Some(MuscleGroup::Hamstrings));
        assert_eq!(input.difficulty_level, Some(DifficultyLevel::Advanced));
    }

    #[test]
    fn name_at_limit_is_accepted() {
        assert!(from_value::<CreateExercise>(json!({ "name": "x".repeat(255) })).is_ok());
    }

    #[test]
    fn name_over_limit_is_rejected() {
        let err = from_value::<CreateExercise>(json!({ "name": "x".repeat(256) })).unwrap_err();
        assert_eq!(err.message(), "name: length must be at most 255");
    }

    #[test]
    fn unknown_muscle_group_is_rejected() {
        let err = from_value::<CreateExercise>(json!({
            "name": "Curl",
            "primary_muscle_group": "wings",
        }))
        .unwrap_err();
        assert!(err.message().contains("wings"), "{}", err.message());
    }

    #[test]
    fn update_changes_only_given_fields() {
        let mut exercise = squat();
        exercise.apply(UpdateExercise {
            difficulty_level: Some(DifficultyLevel::Advanced),
            ..Default::default()
        });
        assert_eq!(exercise.name, "Back Squat");
        assert_eq!(exercise.difficulty_level, Some(DifficultyLevel::Advanced));
        assert_eq!(exercise.equipment_required.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn summary_carries_muscle_group() {
        let summary = ExerciseSummary::from(&squat());
        assert_eq!(summary.name, "Back Squat");
        assert_eq!(summary.primary_muscle_group, Some(MuscleGroup::Quads));
    }
}
