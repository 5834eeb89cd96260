//! Pure domain rules for the fitness API.
//!
//! Nothing in this crate performs I/O. The record shapes live in
//! `fitness-db`; the predicates they are checked against live here so the
//! API layer and any future tooling share one definition.

pub mod error;
pub mod exercise;
pub mod program;
pub mod types;
pub mod validation;
pub mod workout;
pub mod workout_log;
