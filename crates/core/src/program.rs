//! Training program scheduling rules.
//!
//! A program spans `duration_weeks` weeks; each schedule entry occupies one
//! `(week_number, day_of_week)` slot and is either a rest day or points at a
//! workout template, never both.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Duration limits
// ---------------------------------------------------------------------------

/// Shortest allowed program, in weeks.
pub const MIN_DURATION_WEEKS: i32 = 1;

/// Longest allowed program, in weeks.
pub const MAX_DURATION_WEEKS: i32 = 52;

// ---------------------------------------------------------------------------
// Day of week
// ---------------------------------------------------------------------------

/// Day of the week, numbered 0 = Sunday through 6 = Saturday on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DayOfWeek {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl DayOfWeek {
    pub fn name(self) -> &'static str {
        match self {
            DayOfWeek::Sunday => "Sunday",
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
        }
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DayOfWeek::Sunday),
            1 => Ok(DayOfWeek::Monday),
            2 => Ok(DayOfWeek::Tuesday),
            3 => Ok(DayOfWeek::Wednesday),
            4 => Ok(DayOfWeek::Thursday),
            5 => Ok(DayOfWeek::Friday),
            6 => Ok(DayOfWeek::Saturday),
            other => Err(format!(
                "day_of_week must be between 0 (Sunday) and 6 (Saturday), got {other}"
            )),
        }
    }
}

impl From<DayOfWeek> for u8 {
    fn from(day: DayOfWeek) -> Self {
        day as u8
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// A rest day must not name a workout; any other day must.
pub fn validate_rest_day(is_rest_day: bool, has_workout: bool) -> Result<(), CoreError> {
    match (is_rest_day, has_workout) {
        (true, true) => Err(CoreError::Validation(
            "rest days cannot have a workout assigned".to_string(),
        )),
        (false, false) => Err(CoreError::Validation(
            "non-rest days must have a workout assigned".to_string(),
        )),
        _ => Ok(()),
    }
}

/// Return the first `(week, day)` slot that appears more than once.
pub fn find_duplicate_slot<I>(slots: I) -> Option<(i32, DayOfWeek)>
where
    I: IntoIterator<Item = (i32, DayOfWeek)>,
{
    let mut seen = HashSet::new();
    slots.into_iter().find(|slot| !seen.insert(*slot))
}

/// Reject a schedule in which two entries share a `(week, day)` slot.
pub fn validate_unique_slots<I>(slots: I) -> Result<(), CoreError>
where
    I: IntoIterator<Item = (i32, DayOfWeek)>,
{
    match find_duplicate_slot(slots) {
        Some((week, day)) => Err(CoreError::Validation(format!(
            "Duplicate schedule entry for week {week}, day {day}"
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    // -- DayOfWeek ------------------------------------------------------------

    #[test]
    fn day_of_week_serializes_as_number() {
        assert_eq!(serde_json::to_string(&DayOfWeek::Sunday).unwrap(), "0");
        assert_eq!(serde_json::to_string(&DayOfWeek::Saturday).unwrap(), "6");
    }

    #[test]
    fn day_of_week_parses_from_number() {
        let day: DayOfWeek = serde_json::from_str("3").unwrap();
        assert_eq!(day, DayOfWeek::Wednesday);
    }

    #[test]
    fn day_of_week_rejects_out_of_range() {
        assert!(serde_json::from_str::<DayOfWeek>("7").is_err());
        assert!(serde_json::from_str::<DayOfWeek>("-1").is_err());
        assert!(serde_json::from_str::<DayOfWeek>("\"monday\"").is_err());
    }

    // -- validate_rest_day ----------------------------------------------------

    #[test]
    fn rest_day_without_workout_is_valid() {
        assert!(validate_rest_day(true, false).is_ok());
    }

    #[test]
    fn training_day_with_workout_is_valid() {
        assert!(validate_rest_day(false, true).is_ok());
    }

    #[test]
    fn rest_day_with_workout_is_rejected() {
        assert_matches!(
            validate_rest_day(true, true),
            Err(CoreError::Validation(msg)) if msg.starts_with("rest days")
        );
    }

    #[test]
    fn training_day_without_workout_is_rejected() {
        assert_matches!(
            validate_rest_day(false, false),
            Err(CoreError::Validation(msg)) if msg.starts_with("non-rest days")
        );
    }

    // -- slots ----------------------------------------------------------------

    #[test]
    fn distinct_slots_are_valid() {
        let slots = [
            (1, DayOfWeek::Monday),
            (1, DayOfWeek::Wednesday),
            (2, DayOfWeek::Monday),
        ];
        assert!(validate_unique_slots(slots).is_ok());
    }

    #[test]
    fn empty_schedule_is_valid() {
        assert!(validate_unique_slots(Vec::new()).is_ok());
    }

    #[test]
    fn duplicate_slot_is_found() {
        let slots = [
            (1, DayOfWeek::Monday),
            (2, DayOfWeek::Friday),
            (1, DayOfWeek::Monday),
        ];
        assert_eq!(find_duplicate_slot(slots), Some((1, DayOfWeek::Monday)));
    }

    #[test]
    fn duplicate_slot_message_names_week_and_day() {
        let slots = [(3, DayOfWeek::Sunday), (3, DayOfWeek::Sunday)];
        let err = validate_unique_slots(slots).unwrap_err();
        assert_eq!(
            err.message(),
            "Duplicate schedule entry for week 3, day Sunday"
        );
    }
}
