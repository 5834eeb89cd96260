//! Field sets shared by several records, embedded by value with
//! `#[serde(flatten)]`.

use chrono::Utc;
use fitness_core::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Creation and last-modification times for mutable records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamps {
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Timestamps {
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark the record as modified.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Timestamps {
    fn default() -> Self {
        Self::now()
    }
}

/// Creation time for append-only records (schedule entries and logs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedAt {
    pub created_at: Timestamp,
}

impl CreatedAt {
    pub fn now() -> Self {
        Self {
            created_at: Utc::now(),
        }
    }
}

impl Default for CreatedAt {
    fn default() -> Self {
        Self::now()
    }
}
