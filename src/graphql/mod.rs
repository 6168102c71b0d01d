//! GraphQL API over the in-memory store
//!
//! Queries and mutations are split per entity under `queries/` and `mutations/`
//! and combined with `#[derive(MergedObject)]` in `schema.rs`. Relation resolvers
//! live on the entity types in `types.rs`.

pub mod mutations;
pub mod queries;
pub mod routes;
mod schema;
pub mod types;

pub use schema::{BookshelfSchema, build_schema};
