//! Author repository

use super::{Pool, Record, find_by_id, next_id};

/// Author record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRecord {
    pub id: i32,
    pub name: String,
}

impl Record for AuthorRecord {
    fn id(&self) -> i32 {
        self.id
    }
}

/// Input for appending an author
#[derive(Debug, Clone)]
pub struct CreateAuthor {
    pub name: String,
}

pub struct AuthorRepository {
    pool: Pool,
}

impl AuthorRepository {
    pub(super) fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Get an author by ID
    pub fn get_by_id(&self, id: i32) -> Option<AuthorRecord> {
        find_by_id(&self.pool.read().authors, id)
    }

    /// All authors in insertion order
    pub fn list(&self) -> Vec<AuthorRecord> {
        self.pool.read().authors.clone()
    }

    /// Append an author; the id is the current count plus one
    pub fn create(&self, input: CreateAuthor) -> AuthorRecord {
        let mut tables = self.pool.write();
        let record = AuthorRecord {
            id: next_id(&tables.authors),
            name: input.name,
        };
        tables.authors.push(record.clone());
        record
    }
}
