//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the dance academy,
//! including REST and GraphQL endpoints, the Google login flow, business logic and data
//! access. The backend uses Axum as the web framework, SeaORM for database operations,
//! and async-graphql for the GraphQL schema.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - REST request handlers and DTO conversion
//! - **GraphQL Layer** (`graphql/`) - Schema, resolvers and the GraphQL HTTP handlers
//! - **Service Layer** (`service/`) - Not-found translation and the OAuth handshake
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Validation** (`validation`) - Field rule tables shared by both transports
//! - **Error Layer** (`error/`) - Application error types and HTTP/GraphQL mapping
//! - **Middleware** (`middleware/`) - Typed session access and the auth gate
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP clients, schema)
//! - **Startup** (`startup`) - Initialization of database, sessions, and clients
//! - **Router** (`router`) - Middleware chain, route table and API documentation
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** passes the request through CORS, body limit and session layers
//! 2. **Middleware** applies the auth gate to guarded routes
//! 3. **Controller** or **resolver** parses the id, validates the body, calls the service
//! 4. **Service** calls the repository and turns a missing document into `NotFound`
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod graphql;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
pub mod validation;
