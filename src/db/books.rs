//! Book repository and the book-side relation scans

use super::{Pool, Record, find_by_id, next_id};

/// Book record
///
/// `publisher_id` is `None` for books appended through [BookRepository::create],
/// which never receives a publisher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
    pub publisher_id: Option<i32>,
}

impl Record for BookRecord {
    fn id(&self) -> i32 {
        self.id
    }
}

/// Input for appending a book
#[derive(Debug, Clone)]
pub struct CreateBook {
    pub name: String,
    pub author_id: i32,
}

/// How an author's books are matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthorBooksJoin {
    /// Compare the book's own id against the author id.
    #[default]
    Legacy,
    /// Compare the book's author id against the author id.
    AuthorId,
}

impl AuthorBooksJoin {
    pub fn from_setting(value: &str) -> Option<Self> {
        match value {
            "legacy" => Some(AuthorBooksJoin::Legacy),
            "author_id" => Some(AuthorBooksJoin::AuthorId),
            _ => None,
        }
    }

    fn matches(self, book: &BookRecord, author_id: i32) -> bool {
        match self {
            AuthorBooksJoin::Legacy => book.id == author_id,
            AuthorBooksJoin::AuthorId => book.author_id == author_id,
        }
    }
}

pub struct BookRepository {
    pool: Pool,
}

impl BookRepository {
    pub(super) fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Get a book by ID
    pub fn get_by_id(&self, id: i32) -> Option<BookRecord> {
        find_by_id(&self.pool.read().books, id)
    }

    /// All books in insertion order
    pub fn list(&self) -> Vec<BookRecord> {
        self.pool.read().books.clone()
    }

    /// Books belonging to an author, matched according to `join`
    pub fn list_for_author(&self, author_id: i32, join: AuthorBooksJoin) -> Vec<BookRecord> {
        self.pool
            .read()
            .books
            .iter()
            .filter(|b| join.matches(b, author_id))
            .cloned()
            .collect()
    }

    /// First book in insertion order published by `publisher_id`
    pub fn first_by_publisher(&self, publisher_id: i32) -> Option<BookRecord> {
        self.pool
            .read()
            .books
            .iter()
            .find(|b| b.publisher_id == Some(publisher_id))
            .cloned()
    }

    /// Append a book without a publisher; the id is the current count plus one
    pub fn create(&self, input: CreateBook) -> BookRecord {
        let mut tables = self.pool.write();
        let record = BookRecord {
            id: next_id(&tables.books),
            name: input.name,
            author_id: input.author_id,
            publisher_id: None,
        };
        tables.books.push(record.clone());
        record
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::db::Database;

    fn ids(books: &[BookRecord]) -> Vec<i32> {
        books.iter().map(|b| b.id).collect()
    }

    #[test]
    fn test_join_from_setting() {
        assert_matches!(
            AuthorBooksJoin::from_setting("legacy"),
            Some(AuthorBooksJoin::Legacy)
        );
        assert_matches!(
            AuthorBooksJoin::from_setting("author_id"),
            Some(AuthorBooksJoin::AuthorId)
        );
        assert_matches!(AuthorBooksJoin::from_setting("authorid"), None);
    }

    #[test]
    fn test_legacy_join_compares_book_id() {
        let db = Database::seeded();
        let books = db.books().list_for_author(1, AuthorBooksJoin::Legacy);
        assert_eq!(ids(&books), vec![1]);

        let books = db.books().list_for_author(3, AuthorBooksJoin::Legacy);
        assert_eq!(ids(&books), vec![3]);
        assert_eq!(books[0].author_id, 1);

        assert!(db.books().list_for_author(42, AuthorBooksJoin::Legacy).is_empty());
    }

    #[test]
    fn test_author_id_join() {
        let db = Database::seeded();
        assert_eq!(
            ids(&db.books().list_for_author(1, AuthorBooksJoin::AuthorId)),
            vec![1, 2, 3]
        );
        assert_eq!(
            ids(&db.books().list_for_author(2, AuthorBooksJoin::AuthorId)),
            vec![4, 5, 6]
        );
        assert_eq!(
            ids(&db.books().list_for_author(3, AuthorBooksJoin::AuthorId)),
            vec![7, 8]
        );
    }

    #[test]
    fn test_first_by_publisher() {
        let db = Database::seeded();
        assert_eq!(db.books().first_by_publisher(1).map(|b| b.id), Some(1));
        assert_eq!(db.books().first_by_publisher(2).map(|b| b.id), Some(3));
        assert_eq!(db.books().first_by_publisher(3).map(|b| b.id), Some(2));
        assert_eq!(db.books().first_by_publisher(4).map(|b| b.id), Some(4));
        assert!(db.books().first_by_publisher(5).is_none());
    }

    #[test]
    fn test_create_leaves_publisher_unset() {
        let db = Database::seeded();
        let created = db.books().create(CreateBook {
            name: "Untitled".to_string(),
            author_id: 2,
        });
        assert_eq!(
            created,
            BookRecord {
                id: 9,
                name: "Untitled".to_string(),
                author_id: 2,
                publisher_id: None,
            }
        );
        assert_eq!(db.books().list().len(), 9);
        assert_eq!(db.books().get_by_id(9), Some(created));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_get_distinct_ids() {
        let db = Database::seeded();
        let handles: Vec<_> = (0..32)
            .map(|i| {
                let db = db.clone();
                tokio::spawn(async move {
                    db.books()
                        .create(CreateBook {
                            name: format!("Volume {i}"),
                            author_id: 1 + i % 3,
                        })
                        .id
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.expect("task panicked"));
        }
        ids.sort_unstable();
        assert_eq!(ids, (9..41).collect::<Vec<_>>());
        assert_eq!(db.books().list().len(), 40);
    }

    #[test]
    fn test_created_book_never_matches_a_publisher() {
        let db = Database::new(Default::default());
        db.books().create(CreateBook {
            name: "Orphan".to_string(),
            author_id: 1,
        });
        for publisher_id in 0..5 {
            assert!(db.books().first_by_publisher(publisher_id).is_none());
        }
    }
}
