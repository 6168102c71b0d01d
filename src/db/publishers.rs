//! Publisher repository

use super::{Pool, Record, find_by_id};

/// Publisher record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublisherRecord {
    pub id: i32,
    pub name: String,
}

impl Record for PublisherRecord {
    fn id(&self) -> i32 {
        self.id
    }
}

pub struct PublisherRepository {
    pool: Pool,
}

impl PublisherRepository {
    pub(super) fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Get a publisher by ID
    pub fn get_by_id(&self, id: i32) -> Option<PublisherRecord> {
        find_by_id(&self.pool.read().publishers, id)
    }

    /// All publishers in insertion order
    pub fn list(&self) -> Vec<PublisherRecord> {
        self.pool.read().publishers.clone()
    }
}
