//! Exercise catalogue enumerations.

use serde::{Deserialize, Serialize};

/// Exercise difficulty levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// Primary muscle groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Forearms,
    Abs,
    Obliques,
    Quads,
    Hamstrings,
    Glutes,
    Calves,
    FullBody,
    Cardio,
}

impl MuscleGroup {
    pub const ALL: [MuscleGroup; 14] = [
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Shoulders,
        MuscleGroup::Biceps,
        MuscleGroup::Triceps,
        MuscleGroup::Forearms,
        MuscleGroup::Abs,
        MuscleGroup::Obliques,
        MuscleGroup::Quads,
        MuscleGroup::Hamstrings,
        MuscleGroup::Glutes,
        MuscleGroup::Calves,
        MuscleGroup::FullBody,
        MuscleGroup::Cardio,
    ];
}
