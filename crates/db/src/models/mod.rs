//! Record shapes and DTOs.
//!
//! Each submodule contains, per entity:
//! - a `Create*` DTO validated on construction
//! - an `Update*` DTO (all `Option` fields) where the entity is mutable
//! - the stored record struct
//! - a `*Response` shape returned to clients, nesting children
//! - a `*Summary` shape for lists where one is needed

pub mod common;
pub mod exercise;
pub mod program;
pub mod test_record;
pub mod user;
pub mod workout;
pub mod workout_log;
