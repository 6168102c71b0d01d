//! API route definitions
//!
//! The primary API is GraphQL at /graphql.
//! REST endpoints here are limited to liveness and readiness probes.

pub mod health;
