//! GraphQL type definitions
//!
//! These types mirror the store records and carry the relation resolvers.

use async_graphql::{ComplexObject, Context, Result, SimpleObject};
use thiserror::Error;

use crate::db::{AuthorBooksJoin, AuthorRecord, BookRecord, Database, PublisherRecord};

/// Field-level failures surfaced by book resolvers
#[derive(Debug, Error)]
pub enum BookError {
    /// Books appended through `addBook` are stored without a publisher.
    #[error("book {book_id} has no publisher")]
    MissingPublisher { book_id: i32 },
}

/// This represents an author of a book
#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

impl From<AuthorRecord> for Author {
    fn from(r: AuthorRecord) -> Self {
        Self {
            id: r.id,
            name: r.name,
        }
    }
}

#[ComplexObject]
impl Author {
    async fn books(&self, ctx: &Context<'_>) -> Option<Vec<Option<Book>>> {
        let db = ctx.data_unchecked::<Database>();
        let join = *ctx.data_unchecked::<AuthorBooksJoin>();
        nullable_list(db.books().list_for_author(self.id, join))
    }
}

/// This represents a book written by an author
#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
    #[graphql(skip)]
    pub publisher_id: Option<i32>,
}

impl From<BookRecord> for Book {
    fn from(r: BookRecord) -> Self {
        Self {
            id: r.id,
            name: r.name,
            author_id: r.author_id,
            publisher_id: r.publisher_id,
        }
    }
}

#[ComplexObject]
impl Book {
    async fn publisherid(&self) -> Result<i32> {
        Ok(self.publisher_id.ok_or(BookError::MissingPublisher { book_id: self.id })?)
    }

    async fn author(&self, ctx: &Context<'_>) -> Option<Author> {
        let db = ctx.data_unchecked::<Database>();
        db.authors().get_by_id(self.author_id).map(Author::from)
    }

    async fn publisher(&self, ctx: &Context<'_>) -> Option<Publisher> {
        let db = ctx.data_unchecked::<Database>();
        self.publisher_id
            .and_then(|id| db.publishers().get_by_id(id))
            .map(Publisher::from)
    }
}

/// This represents a publisher of a book
#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct Publisher {
    pub id: i32,
    pub name: String,
}

impl From<PublisherRecord> for Publisher {
    fn from(r: PublisherRecord) -> Self {
        Self {
            id: r.id,
            name: r.name,
        }
    }
}

#[ComplexObject]
impl Publisher {
    async fn book(&self, ctx: &Context<'_>) -> Option<Book> {
        let db = ctx.data_unchecked::<Database>();
        db.books().first_by_publisher(self.id).map(Book::from)
    }
}

/// List fields are `[T]`: nullable list, nullable items. A failing `publisherid`
/// nulls one entry, not the list.
pub fn nullable_list<R, T: From<R>>(records: Vec<R>) -> Option<Vec<Option<T>>> {
    Some(records.into_iter().map(|r| Some(T::from(r))).collect())
}
