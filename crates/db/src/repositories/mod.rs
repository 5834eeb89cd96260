//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that take
//! `&DatabaseConfig` as the first argument and go through
//! [`crate::query::execute_query`].

pub mod test_record_repo;

pub use test_record_repo::TestRecordRepo;
