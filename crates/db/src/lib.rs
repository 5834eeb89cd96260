//! Record shapes and database access for the fitness API.
//!
//! - [`models`]: create/update/record/response/summary shapes per entity.
//! - [`config`]: database connection settings.
//! - [`query`]: the single-statement data-access helper.
//! - [`repositories`]: typed wrappers over [`query::execute_query`].

pub mod config;
pub mod models;
pub mod query;
pub mod repositories;

pub use config::DatabaseConfig;
pub use query::{execute_query, DbError, QueryParam, Row};
