//! GraphQL transport for the dancer and dance class collections.
//!
//! The schema exposes the same operations as the REST controllers and shares their
//! services and validation tables. Resolvers read the database connection from schema
//! data and the caller's [`CurrentUser`](crate::server::middleware::auth::CurrentUser)
//! from request data.

pub mod handler;
pub mod mutation;
pub mod query;
pub mod types;


use async_graphql::{EmptySubscription, Schema};
use sea_orm::DatabaseConnection;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

pub type DanceSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema with the database connection available to every resolver.
pub fn create_schema(db: DatabaseConnection) -> DanceSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(db)
        .finish()
}
