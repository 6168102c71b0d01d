//! GraphQL schema definition with queries and mutations

use async_graphql::extensions::Tracing;
use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::db::{AuthorBooksJoin, Database};

use super::mutations::{AuthorMutations, BookMutations};
use super::queries::{AuthorQueries, BookQueries, PublisherQueries};

/// Root Query
#[derive(MergedObject, Default)]
#[graphql(name = "Query")]
pub struct QueryRoot(BookQueries, AuthorQueries, PublisherQueries);

/// Root Mutation
#[derive(MergedObject, Default)]
#[graphql(name = "Mutation")]
pub struct MutationRoot(BookMutations, AuthorMutations);

/// The GraphQL schema type
pub type BookshelfSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema with all resolvers
pub fn build_schema(db: Database, author_books_join: AuthorBooksJoin) -> BookshelfSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(db)
    .data(author_books_join)
    .extension(Tracing)
    .finish()
}
