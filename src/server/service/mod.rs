//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (REST and GraphQL) layer and the data (repository) layer. Services are
//! responsible for:
//!
//! - **Business Logic**: Turning missing documents into `NotFound` outcomes
//! - **Orchestration**: Coordinating repository calls and external identity requests
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod dance_class;
pub mod dancer;
pub mod oauth;
