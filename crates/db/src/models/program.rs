//! Training program models: multi-week programs and their week/day
//! schedule entries.

use fitness_core::program::{validate_rest_day, validate_unique_slots, DayOfWeek};
use fitness_core::types::{DbId, Timestamp};
use fitness_core::validation::{rule_error, trimmed, trimmed_opt};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::common::{CreatedAt, Timestamps};
use crate::models::workout::WorkoutSummary;

// ===========================================================================
// Schedule entries
// ===========================================================================

/// A stored schedule entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramWorkout {
    pub program_id: DbId,
    pub week_number: i32,
    pub day_of_week: DayOfWeek,
    pub is_rest_day: bool,
    /// `None` exactly when `is_rest_day` is set.
    pub workout_id: Option<DbId>,
    #[serde(flatten)]
    pub created: CreatedAt,
}

/// Input for scheduling a workout (or a rest day) in a program.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_entry"))]
pub struct CreateProgramWorkout {
    #[validate(range(min = 1))]
    pub week_number: i32,
    pub day_of_week: DayOfWeek,
    #[serde(default)]
    pub is_rest_day: bool,
    #[serde(default)]
    pub workout_id: Option<DbId>,
}

fn validate_entry(entry: &CreateProgramWorkout) -> Result<(), ValidationError> {
    validate_rest_day(entry.is_rest_day, entry.workout_id.is_some())
        .map_err(|e| rule_error("workout_id", "rest_day_workout", e))
}

/// Schedule entry as returned to clients, with the workout when joined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramWorkoutResponse {
    pub week_number: i32,
    pub day_of_week: DayOfWeek,
    pub is_rest_day: bool,
    pub workout: Option<WorkoutSummary>,
}

impl ProgramWorkoutResponse {
    pub fn new(entry: &ProgramWorkout, workout: Option<WorkoutSummary>) -> Self {
        Self {
            week_number: entry.week_number,
            day_of_week: entry.day_of_week,
            is_rest_day: entry.is_rest_day,
            workout,
        }
    }
}

// ===========================================================================
// Programs
// ===========================================================================

fn default_duration_weeks() -> i32 {
    1
}

/// A stored training program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub program_id: DbId,
    pub creator_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub is_shared: bool,
    pub duration_weeks: i32,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Program {
    pub fn apply(&mut self, update: UpdateProgram) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if update.description.is_some() {
            self.description = update.description;
        }
        if let Some(is_shared) = update.is_shared {
            self.is_shared = is_shared;
        }
        if let Some(weeks) = update.duration_weeks {
            self.duration_weeks = weeks;
        }
        self.timestamps.touch();
    }
}

/// Input for a new program with its schedule.
///
/// No two schedule entries may share a `(week_number, day_of_week)` slot.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_schedule"))]
pub struct CreateProgram {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(max = 255))]
    pub name: String,
    #[serde(default, deserialize_with = "trimmed_opt")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_shared: bool,
    #[serde(default = "default_duration_weeks")]
    #[validate(range(min = 1, max = 52))]
    pub duration_weeks: i32,
    #[serde(default)]
    #[validate(nested)]
    pub schedule: Vec<CreateProgramWorkout>,
}

fn validate_schedule(program: &CreateProgram) -> Result<(), ValidationError> {
    let slots = program
        .schedule
        .iter()
        .map(|entry| (entry.week_number, entry.day_of_week));
    validate_unique_slots(slots).map_err(|e| rule_error("schedule", "duplicate_slot", e))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProgram {
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[validate(length(max = 255))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "trimmed_opt")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_shared: Option<bool>,
    #[serde(default)]
    #[validate(range(min = 1, max = 52))]
    pub duration_weeks: Option<i32>,
}

/// Full program with its schedule, ordered by week then day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramResponse {
    pub program_id: DbId,
    pub creator_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub is_shared: bool,
    pub duration_weeks: i32,
    pub created_at: Timestamp,
    #[serde(default)]
    pub schedule: Vec<ProgramWorkoutResponse>,
}

impl ProgramResponse {
    pub fn new(program: &Program, mut schedule: Vec<ProgramWorkoutResponse>) -> Self {
        schedule.sort_by_key(|entry| (entry.week_number, entry.day_of_week));
        Self {
            program_id: program.program_id,
            creator_id: program.creator_id,
            name: program.name.clone(),
            description: program.description.clone(),
            is_shared: program.is_shared,
            duration_weeks: program.duration_weeks,
            created_at: program.timestamps.created_at,
            schedule,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramSummary {
    pub program_id: DbId,
    pub name: String,
    pub duration_weeks: i32,
    pub is_shared: bool,
    pub created_at: Timestamp,
}

impl From<&Program> for ProgramSummary {
    fn from(program: &Program) -> Self {
        Self {
            program_id: program.program_id,
            name: program.name.clone(),
            duration_weeks: program.duration_weeks,
            is_shared: program.is_shared,
            created_at: program.timestamps.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitness_core::program::{MAX_DURATION_WEEKS, MIN_DURATION_WEEKS};
    use fitness_core::validation::from_value;
    use serde_json::{json, Value};

    fn training_day(week: i32, day: u8) -> Value {
        json!({ "week_number": week, "day_of_week": day, "workout_id": DbId::new_v4() })
    }

    fn rest_day(week: i32, day: u8) -> Value {
        json!({ "week_number": week, "day_of_week": day, "is_rest_day": true })
    }

    fn program(duration_weeks: i32, schedule: Vec<Value>) -> Value {
        json!({ "name": "Base Building", "duration_weeks": duration_weeks, "schedule": schedule })
    }

    // -- CreateProgramWorkout -------------------------------------------------

    #[test]
    fn rest_day_without_workout_is_accepted() {
        let entry: CreateProgramWorkout = from_value(rest_day(1, 0)).unwrap();
        assert!(entry.is_rest_day);
        assert_eq!(entry.day_of_week, DayOfWeek::Sunday);
    }

    #[test]
    fn rest_day_with_workout_is_rejected() {
        let mut input = rest_day(1, 2);
        input["workout_id"] = json!(DbId::new_v4());
        let err = from_value::<CreateProgramWorkout>(input).unwrap_err();
        assert_eq!(
            err.message(),
            "workout_id: rest days cannot have a workout assigned"
        );
    }

    #[test]
    fn training_day_without_workout_is_rejected() {
        let err = from_value::<CreateProgramWorkout>(json!({
            "week_number": 1,
            "day_of_week": 1,
        }))
        .unwrap_err();
        assert_eq!(
            err.message(),
            "workout_id: non-rest days must have a workout assigned"
        );
    }

    #[test]
    fn week_zero_is_rejected() {
        let err = from_value::<CreateProgramWorkout>(training_day(0, 1)).unwrap_err();
        assert!(err.message().starts_with("week_number:"), "{}", err.message());
    }

    #[test]
    fn day_seven_is_rejected() {
        assert!(from_value::<CreateProgramWorkout>(training_day(1, 7)).is_err());
    }

    // -- CreateProgram --------------------------------------------------------

    #[test]
    fn program_with_distinct_slots_is_accepted() {
        let input = program(
            2,
            vec![training_day(1, 1), rest_day(1, 2), training_day(2, 1)],
        );
        let created: CreateProgram = from_value(input).unwrap();
        assert_eq!(created.schedule.len(), 3);
    }

    #[test]
    fn duplicate_slot_is_rejected() {
        let input = program(4, vec![training_day(1, 1), rest_day(1, 1)]);
        let err = from_value::<CreateProgram>(input).unwrap_err();
        assert_eq!(
            err.message(),
            "schedule: Duplicate schedule entry for week 1, day Monday"
        );
    }

    #[test]
    fn entry_errors_carry_the_schedule_index() {
        let mut bad = rest_day(1, 3);
        bad["workout_id"] = json!(DbId::new_v4());
        let input = program(1, vec![training_day(1, 1), bad]);
        let err = from_value::<CreateProgram>(input).unwrap_err();
        assert_eq!(
            err.message(),
            "schedule[1].workout_id: rest days cannot have a workout assigned"
        );
    }

    #[test]
    fn duration_bounds_are_enforced() {
        assert!(from_value::<CreateProgram>(program(MIN_DURATION_WEEKS, vec![])).is_ok());
        assert!(from_value::<CreateProgram>(program(MAX_DURATION_WEEKS, vec![])).is_ok());
        assert!(from_value::<CreateProgram>(program(MIN_DURATION_WEEKS - 1, vec![])).is_err());
        let err = from_value::<CreateProgram>(program(MAX_DURATION_WEEKS + 1, vec![])).unwrap_err();
        assert_eq!(err.message(), "duration_weeks: must be between 1 and 52");
    }

    #[test]
    fn duration_defaults_to_one_week() {
        let created: CreateProgram = from_value(json!({ "name": "Deload" })).unwrap();
        assert_eq!(created.duration_weeks, 1);
        assert!(created.schedule.is_empty());
    }

    // -- Responses ------------------------------------------------------------

    #[test]
    fn response_orders_schedule_by_week_then_day() {
        let program = Program {
            program_id: DbId::new_v4(),
            creator_id: DbId::new_v4(),
            name: "Strength".into(),
            description: None,
            is_shared: false,
            duration_weeks: 2,
            timestamps: Timestamps::now(),
        };
        let entry = |week, day| ProgramWorkout {
            program_id: program.program_id,
            week_number: week,
            day_of_week: day,
            is_rest_day: true,
            workout_id: None,
            created: CreatedAt::now(),
        };
        let schedule = vec![
            ProgramWorkoutResponse::new(&entry(2, DayOfWeek::Monday), None),
            ProgramWorkoutResponse::new(&entry(1, DayOfWeek::Friday), None),
            ProgramWorkoutResponse::new(&entry(1, DayOfWeek::Sunday), None),
        ];

        let response = ProgramResponse::new(&program, schedule);
        let slots: Vec<(i32, DayOfWeek)> = response
            .schedule
            .iter()
            .map(|e| (e.week_number, e.day_of_week))
            .collect();
        assert_eq!(
            slots,
            vec![
                (1, DayOfWeek::Sunday),
                (1, DayOfWeek::Friday),
                (2, DayOfWeek::Monday)
            ]
        );
        assert_eq!(ProgramSummary::from(&program).duration_weeks, 2);
    }

    #[test]
    fn update_rejects_out_of_range_duration() {
        let err = from_value::<UpdateProgram>(json!({ "duration_weeks": 60 })).unwrap_err();
        assert!(err.message().starts_with("duration_weeks:"), "{}", err.message());
    }

    #[test]
    fn apply_updates_duration() {
        let mut program = Program {
            program_id: DbId::new_v4(),
            creator_id: DbId::new_v4(),
            name: "Strength".into(),
            description: None,
            is_shared: false,
            duration_weeks: 4,
            timestamps: Timestamps::now(),
        };
        program.apply(UpdateProgram {
            duration_weeks: Some(8),
            ..Default::default()
        });
        assert_eq!(program.duration_weeks, 8);
        assert_eq!(program.name, "Strength");
    }
}
