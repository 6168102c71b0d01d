//! In-memory record store
//!
//! All three collections live behind a single lock owned by [Database]. Handles are
//! cheap to clone and share the same tables, so every request sees every append.

pub mod authors;
pub mod books;
pub mod publishers;
pub mod seed;

use std::sync::Arc;

use parking_lot::RwLock;

pub use authors::{AuthorRecord, AuthorRepository, CreateAuthor};
pub use books::{AuthorBooksJoin, BookRecord, BookRepository, CreateBook};
pub use publishers::{PublisherRecord, PublisherRepository};

/// A record addressable by its integer id
pub trait Record: Clone {
    fn id(&self) -> i32;
}

/// The three ordered collections
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub authors: Vec<AuthorRecord>,
    pub books: Vec<BookRecord>,
    pub publishers: Vec<PublisherRecord>,
}

type Pool = Arc<RwLock<Tables>>;

/// Linear scan returning the first record with a matching id.
pub(crate) fn find_by_id<R: Record>(records: &[R], id: i32) -> Option<R> {
    records.iter().find(|r| r.id() == id).cloned()
}

/// Next id for an append: one past the current length, no collision check.
pub(crate) fn next_id<R>(records: &[R]) -> i32 {
    records.len() as i32 + 1
}

/// Row counts, used by the readiness endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableCounts {
    pub authors: usize,
    pub books: usize,
    pub publishers: usize,
}

/// Store handle providing repository access
#[derive(Clone)]
pub struct Database {
    pool: Pool,
}

impl Database {
    /// Wrap an existing set of tables
    pub fn new(tables: Tables) -> Self {
        Self {
            pool: Arc::new(RwLock::new(tables)),
        }
    }

    /// Create a store populated with the startup seed data
    pub fn seeded() -> Self {
        Self::new(seed::tables())
    }

    /// Get an author repository
    pub fn authors(&self) -> AuthorRepository {
        AuthorRepository::new(self.pool.clone())
    }

    /// Get a book repository
    pub fn books(&self) -> BookRepository {
        BookRepository::new(self.pool.clone())
    }

    /// Get a publisher repository
    pub fn publishers(&self) -> PublisherRepository {
        PublisherRepository::new(self.pool.clone())
    }

    pub fn counts(&self) -> TableCounts {
        let tables = self.pool.read();
        TableCounts {
            authors: tables.authors.len(),
            books: tables.books.len(),
            publishers: tables.publishers.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_id_returns_first_match() {
        let records = vec![
            AuthorRecord {
                id: 1,
                name: "first".to_string(),
            },
            AuthorRecord {
                id: 1,
                name: "duplicate".to_string(),
            },
        ];
        assert_eq!(find_by_id(&records, 1).map(|r| r.name), Some("first".to_string()));
        assert!(find_by_id(&records, 2).is_none());
    }

    #[test]
    fn test_next_id_on_empty_table() {
        let records: Vec<BookRecord> = Vec::new();
        assert_eq!(next_id(&records), 1);
    }

    #[test]
    fn test_seeded_counts() {
        let db = Database::seeded();
        assert_eq!(
            db.counts(),
            TableCounts {
                authors: 3,
                books: 8,
                publishers: 4,
            }
        );
    }

    #[test]
    fn test_clones_share_tables() {
        let db = Database::seeded();
        let other = db.clone();
        other.authors().create(CreateAuthor {
            name: "Shared".to_string(),
        });
        assert_eq!(db.counts().authors, 4);
    }
}
