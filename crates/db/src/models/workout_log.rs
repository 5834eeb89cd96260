//! Workout log models: what was actually performed, each level optionally
//! pointing back at the planned template it came from.

use fitness_core::types::{DbId, Timestamp};
use fitness_core::validation::trimmed_opt;
use fitness_core::workout_log::{duration_minutes, in_same_month, in_same_week};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::common::CreatedAt;
use crate::models::exercise::ExerciseSummary;

// ===========================================================================
// Set step logs
// ===========================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetStepLog {
    pub set_step_log_id: DbId,
    pub set_log_id: DbId,
    pub step_order: i32,
    pub completed_reps: i32,
    pub completed_weight: Option<f64>,
    pub completed_time_seconds: Option<i32>,
    pub rest_time_after_seconds: Option<i32>,
    pub notes: Option<String>,
    /// `None` for ad-hoc steps.
    pub original_set_step_id: Option<DbId>,
    #[serde(flatten)]
    pub created: CreatedAt,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSetStepLog {
    #[validate(range(min = 1))]
    pub step_order: i32,
    #[validate(range(min = 0))]
    pub completed_reps: i32,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub completed_weight: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub completed_time_seconds: Option<i32>,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub rest_time_after_seconds: Option<i32>,
    #[serde(default, deserialize_with = "trimmed_opt")]
    pub notes: Option<String>,
    #[serde(default)]
    pub original_set_step_id: Option<DbId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetStepLogResponse {
    pub set_step_log_id: DbId,
    pub step_order: i32,
    pub completed_reps: i32,
    pub completed_weight: Option<f64>,
    pub completed_time_seconds: Option<i32>,
    pub rest_time_after_seconds: Option<i32>,
    pub notes: Option<String>,
    pub original_set_step_id: Option<DbId>,
}

impl From<&SetStepLog> for SetStepLogResponse {
    fn from(step: &SetStepLog) -> Self {
        Self {
            set_step_log_id: step.set_step_log_id,
            step_order: step.step_order,
            completed_reps: step.completed_reps,
            completed_weight: step.completed_weight,
            completed_time_seconds: step.completed_time_seconds,
            rest_time_after_seconds: step.rest_time_after_seconds,
            notes: step.notes.clone(),
            original_set_step_id: step.original_set_step_id,
        }
    }
}

// ===========================================================================
// Set logs
// ===========================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetLog {
    pub set_log_id: DbId,
    pub workout_log_id: DbId,
    pub set_order: i32,
    pub exercise_id: DbId,
    /// Which occurrence of the set this was (1st, 2nd, ...).
    pub set_number: i32,
    pub original_set_id: Option<DbId>,
    #[serde(flatten)]
    pub created: CreatedAt,
}

/// Input for logging one performed set with its steps.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSetLog {
    #[validate(range(min = 1))]
    pub set_order: i32,
    pub exercise_id: DbId,
    #[validate(range(min = 1))]
    pub set_number: i32,
    #[serde(default)]
    pub original_set_id: Option<DbId>,
    #[serde(default)]
    #[validate(nested)]
    pub steps: Vec<CreateSetStepLog>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetLogResponse {
    pub set_log_id: DbId,
    pub set_order: i32,
    pub exercise_id: DbId,
    pub set_number: i32,
    pub original_set_id: Option<DbId>,
    #[serde(default)]
    pub steps: Vec<SetStepLogResponse>,
    pub exercise: Option<ExerciseSummary>,
}

impl SetLogResponse {
    pub fn new(set: &SetLog, steps: &[SetStepLog], exercise: Option<ExerciseSummary>) -> Self {
        let mut steps: Vec<SetStepLogResponse> =
            steps.iter().map(SetStepLogResponse::from).collect();
        steps.sort_by_key(|s| s.step_order);
        Self {
            set_log_id: set.set_log_id,
            set_order: set.set_order,
            exercise_id: set.exercise_id,
            set_number: set.set_number,
            original_set_id: set.original_set_id,
            steps,
            exercise,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetLogSummary {
    pub set_log_id: DbId,
    pub set_order: i32,
    pub set_number: i32,
    pub exercise_id: DbId,
}

impl From<&SetLog> for SetLogSummary {
    fn from(set: &SetLog) -> Self {
        Self {
            set_log_id: set.set_log_id,
            set_order: set.set_order,
            set_number: set.set_number,
            exercise_id: set.exercise_id,
        }
    }
}

// ===========================================================================
// Workout logs
// ===========================================================================

/// A logged workout session.
///
/// The session's duration is not stored; see
/// [`WorkoutLog::total_duration_minutes`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutLog {
    pub workout_log_id: DbId,
    pub user_id: DbId,
    pub start_time: Timestamp,
    pub end_time: Option<Timestamp>,
    pub notes: Option<String>,
    pub original_workout_id: Option<DbId>,
    pub program_id: Option<DbId>,
    #[serde(flatten)]
    pub created: CreatedAt,
}

impl WorkoutLog {
    /// Whole elapsed minutes, or `None` while the session is still open.
    pub fn total_duration_minutes(&self) -> Option<i64> {
        duration_minutes(self.start_time, self.end_time)
    }

    /// Apply an update (typically closing the session).
    pub fn apply(&mut self, update: UpdateWorkoutLog) {
        if update.end_time.is_some() {
            self.end_time = update.end_time;
        }
        if update.notes.is_some() {
            self.notes = update.notes;
        }
    }
}

/// Input for starting or logging a workout session.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateWorkoutLog {
    pub start_time: Timestamp,
    #[serde(default)]
    pub end_time: Option<Timestamp>,
    #[serde(default, deserialize_with = "trimmed_opt")]
    pub notes: Option<String>,
    /// Template this session followed; `None` for ad-hoc sessions.
    #[serde(default)]
    pub original_workout_id: Option<DbId>,
    #[serde(default)]
    pub program_id: Option<DbId>,
}

/// A submitted session echoed back with its derived duration.
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutLogDraft {
    #[serde(flatten)]
    pub log: CreateWorkoutLog,
    pub total_duration_minutes: Option<i64>,
}

impl From<CreateWorkoutLog> for WorkoutLogDraft {
    fn from(log: CreateWorkoutLog) -> Self {
        let total_duration_minutes = duration_minutes(log.start_time, log.end_time);
        Self {
            log,
            total_duration_minutes,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateWorkoutLog {
    #[serde(default)]
    pub end_time: Option<Timestamp>,
    #[serde(default, deserialize_with = "trimmed_opt")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutLogResponse {
    pub workout_log_id: DbId,
    pub user_id: DbId,
    pub start_time: Timestamp,
    pub end_time: Option<Timestamp>,
    pub notes: Option<String>,
    pub original_workout_id: Option<DbId>,
    pub program_id: Option<DbId>,
    pub total_duration_minutes: Option<i64>,
    #[serde(default)]
    pub set_logs: Vec<SetLogResponse>,
}

impl WorkoutLogResponse {
    /// Assemble a response, ordering set logs by set order then set number.
    pub fn new(log: &WorkoutLog, mut set_logs: Vec<SetLogResponse>) -> Self {
        set_logs.sort_by_key(|s| (s.set_order, s.set_number));
        Self {
            workout_log_id: log.workout_log_id,
            user_id: log.user_id,
            start_time: log.start_time,
            end_time: log.end_time,
            notes: log.notes.clone(),
            original_workout_id: log.original_workout_id,
            program_id: log.program_id,
            total_duration_minutes: log.total_duration_minutes(),
            set_logs,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutLogSummary {
    pub workout_log_id: DbId,
    pub start_time: Timestamp,
    pub end_time: Option<Timestamp>,
    pub total_duration_minutes: Option<i64>,
    pub original_workout_id: Option<DbId>,
}

impl From<&WorkoutLog> for WorkoutLogSummary {
    fn from(log: &WorkoutLog) -> Self {
        Self {
            workout_log_id: log.workout_log_id,
            start_time: log.start_time,
            end_time: log.end_time,
            total_duration_minutes: log.total_duration_minutes(),
            original_workout_id: log.original_workout_id,
        }
    }
}

// ===========================================================================
// Aggregates
// ===========================================================================

/// Performance of one exercise across a set of logged sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExercisePerformance {
    pub exercise_id: DbId,
    pub exercise_name: String,
    pub total_sets: i64,
    pub total_reps: i64,
    pub max_weight: Option<f64>,
    pub avg_weight: Option<f64>,
}

impl ExercisePerformance {
    /// Summarise the set logs for `exercise`. Set logs for other exercises
    /// are ignored; weight figures only consider steps that recorded one.
    pub fn from_set_logs(exercise: &ExerciseSummary, set_logs: &[SetLogResponse]) -> Self {
        let matching: Vec<&SetLogResponse> = set_logs
            .iter()
            .filter(|s| s.exercise_id == exercise.exercise_id)
            .collect();

        let steps = matching.iter().flat_map(|s| s.steps.iter());
        let total_reps = steps.clone().map(|s| i64::from(s.completed_reps)).sum();
        let weights: Vec<f64> = steps.filter_map(|s| s.completed_weight).collect();

        let max_weight = weights.iter().copied().reduce(f64::max);
        let avg_weight = if weights.is_empty() {
            None
        } else {
            Some(weights.iter().sum::<f64>() / weights.len() as f64)
        };

        Self {
            exercise_id: exercise.exercise_id,
            exercise_name: exercise.name.clone(),
            total_sets: matching.len() as i64,
            total_reps,
            max_weight,
            avg_weight,
        }
    }
}

/// Aggregate figures over a user's workout history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutStats {
    pub total_workouts: i64,
    pub total_duration_minutes: i64,
    pub avg_duration_minutes: f64,
    pub workouts_this_week: i64,
    pub workouts_this_month: i64,
}

impl WorkoutStats {
    /// Summarise `logs` relative to `now`.
    ///
    /// Open sessions count as workouts but contribute no duration; the
    /// average is taken over completed sessions only. Week and month
    /// membership is decided by each session's start time.
    pub fn from_logs(logs: &[WorkoutLog], now: Timestamp) -> Self {
        let durations: Vec<i64> = logs
            .iter()
            .filter_map(WorkoutLog::total_duration_minutes)
            .collect();
        let total_duration_minutes: i64 = durations.iter().sum();
        let avg_duration_minutes = if durations.is_empty() {
            0.0
        } else {
            total_duration_minutes as f64 / durations.len() as f64
        };

        let count = |pred: fn(Timestamp, Timestamp) -> bool| {
            logs.iter().filter(|l| pred(l.start_time, now)).count() as i64
        };

        Self {
            total_workouts: logs.len() as i64,
            total_duration_minutes,
            avg_duration_minutes,
            workouts_this_week: count(in_same_week),
            workouts_this_month: count(in_same_month),
        }
    }
}
