pub mod exercises;
pub mod fitness;
pub mod health;
pub mod programs;
pub mod test_records;
pub mod users;
pub mod workout_logs;
pub mod workout_templates;
