//! Workout template models: workouts, their ordered sets, and the
//! rep/weight steps within each set.

use fitness_core::types::{DbId, Timestamp};
use fitness_core::validation::{rule_error, trimmed, trimmed_opt};
use fitness_core::workout::validate_step_orders;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::common::Timestamps;
use crate::models::exercise::ExerciseSummary;

// ===========================================================================
// Set steps
// ===========================================================================

/// A stored set step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetStep {
    pub set_step_id: DbId,
    pub set_id: DbId,
    pub step_order: i32,
    pub planned_reps: i32,
    /// Target weight; `None` for bodyweight.
    pub planned_weight: Option<f64>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl SetStep {
    pub fn apply(&mut self, update: UpdateSetStep) {
        if let Some(order) = update.step_order {
            self.step_order = order;
        }
        if let Some(reps) = update.planned_reps {
            self.planned_reps = reps;
        }
        if update.planned_weight.is_some() {
            self.planned_weight = update.planned_weight;
        }
        self.timestamps.touch();
    }
}

/// Input for one step of a new set.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSetStep {
    #[validate(range(min = 1))]
    pub step_order: i32,
    #[validate(range(min = 1))]
    pub planned_reps: i32,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub planned_weight: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateSetStep {
    #[serde(default)]
    #[validate(range(min = 1))]
    pub step_order: Option<i32>,
    #[serde(default)]
    #[validate(range(min = 1))]
    pub planned_reps: Option<i32>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub planned_weight: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetStepResponse {
    pub set_step_id: DbId,
    pub step_order: i32,
    pub planned_reps: i32,
    pub planned_weight: Option<f64>,
}

impl From<&SetStep> for SetStepResponse {
    fn from(step: &SetStep) -> Self {
        Self {
            set_step_id: step.set_step_id,
            step_order: step.step_order,
            planned_reps: step.planned_reps,
            planned_weight: step.planned_weight,
        }
    }
}

// ===========================================================================
// Sets
// ===========================================================================

fn default_num_sets() -> i32 {
    1
}

/// A stored set: one exercise entry within a workout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Set {
    pub set_id: DbId,
    pub workout_id: DbId,
    pub set_order: i32,
    pub exercise_id: DbId,
    /// How many times the steps are repeated.
    pub num_sets: i32,
    pub rest_seconds: Option<i32>,
    pub notes: Option<String>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Set {
    pub fn apply(&mut self, update: UpdateSet) {
        if let Some(order) = update.set_order {
            self.set_order = order;
        }
        if let Some(exercise_id) = update.exercise_id {
            self.exercise_id = exercise_id;
        }
        if let Some(num_sets) = update.num_sets {
            self.num_sets = num_sets;
        }
        if update.rest_seconds.is_some() {
            self.rest_seconds = update.rest_seconds;
        }
        if update.notes.is_some() {
            self.notes = update.notes;
        }
        self.timestamps.touch();
    }
}

/// Input for a new set together with its steps.
///
/// Steps are required and their `step_order` values must be exactly
/// `1..=N`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_steps"))]
pub struct CreateSet {
    #[validate(range(min = 1))]
    pub set_order: i32,
    pub exercise_id: DbId,
    #[serde(default = "default_num_sets")]
    #[validate(range(min = 1))]
    pub num_sets: i32,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub rest_seconds: Option<i32>,
    #[serde(default, deserialize_with = "trimmed_opt")]
    pub notes: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub steps: Vec<CreateSetStep>,
}

fn validate_steps(set: &CreateSet) -> Result<(), ValidationError> {
    let orders: Vec<i32> = set.steps.iter().map(|s| s.step_order).collect();
    validate_step_orders(&orders).map_err(|e| rule_error("steps", "step_order_sequence", e))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateSet {
    #[serde(default)]
    #[validate(range(min = 1))]
    pub set_order: Option<i32>,
    #[serde(default)]
    pub exercise_id: Option<DbId>,
    #[serde(default)]
    #[validate(range(min = 1))]
    pub num_sets: Option<i32>,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub rest_seconds: Option<i32>,
    #[serde(default, deserialize_with = "trimmed_opt")]
    pub notes: Option<String>,
}

/// Set with its steps, and the exercise when joined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetResponse {
    pub set_id: DbId,
    pub set_order: i32,
    pub exercise_id: DbId,
    pub num_sets: i32,
    pub rest_seconds: Option<i32>,
    pub notes: Option<String>,
    #[serde(default)]
    pub steps: Vec<SetStepResponse>,
    pub exercise: Option<ExerciseSummary>,
}

impl SetResponse {
    /// Assemble a response from a set and its steps, sorted by step order.
    pub fn new(set: &Set, steps: &[SetStep], exercise: Option<ExerciseSummary>) -> Self {
        let mut steps: Vec<SetStepResponse> = steps.iter().map(SetStepResponse::from).collect();
        steps.sort_by_key(|s| s.step_order);
        Self {
            set_id: set.set_id,
            set_order: set.set_order,
            exercise_id: set.exercise_id,
            num_sets: set.num_sets,
            rest_seconds: set.rest_seconds,
            notes: set.notes.clone(),
            steps,
            exercise,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetSummary {
    pub set_id: DbId,
    pub set_order: i32,
    pub exercise_id: DbId,
    pub num_sets: i32,
}

impl From<&Set> for SetSummary {
    fn from(set: &Set) -> Self {
        Self {
            set_id: set.set_id,
            set_order: set.set_order,
            exercise_id: set.exercise_id,
            num_sets: set.num_sets,
        }
    }
}

// ===========================================================================
// Workouts
// ===========================================================================

/// A stored workout template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    pub workout_id: DbId,
    pub creator_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub is_shared: bool,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Workout {
    pub fn apply(&mut self, update: UpdateWorkout) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if update.description.is_some() {
            self.description = update.description;
        }
        if let Some(is_shared) = update.is_shared {
            self.is_shared = is_shared;
        }
        self.timestamps.touch();
    }
}

/// Input for a new workout template with its sets.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateWorkout {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(max = 255))]
    pub name: String,
    #[serde(default, deserialize_with = "trimmed_opt")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_shared: bool,
    #[serde(default)]
    #[validate(nested)]
    pub sets: Vec<CreateSet>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateWorkout {
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[validate(length(max = 255))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "trimmed_opt")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_shared: Option<bool>,
}

/// Full workout with nested sets, ordered by `set_order`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutResponse {
    pub workout_id: DbId,
    pub creator_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub is_shared: bool,
    pub created_at: Timestamp,
    #[serde(default)]
    pub sets: Vec<SetResponse>,
}

impl WorkoutResponse {
    pub fn new(workout: &Workout, mut sets: Vec<SetResponse>) -> Self {
        sets.sort_by_key(|s| s.set_order);
        Self {
            workout_id: workout.workout_id,
            creator_id: workout.creator_id,
            name: workout.name.clone(),
            description: workout.description.clone(),
            is_shared: workout.is_shared,
            created_at: workout.timestamps.created_at,
            sets,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    pub workout_id: DbId,
    pub name: String,
    pub is_shared: bool,
    pub created_at: Timestamp,
}

impl From<&Workout> for WorkoutSummary {
    fn from(workout: &Workout) -> Self {
        Self {
            workout_id: workout.workout_id,
            name: workout.name.clone(),
            is_shared: workout.is_shared,
            created_at: workout.timestamps.created_at,
        }
    }
}
