//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert rows directly through SeaORM, bypassing
//! request validation, so tests can also seed documents the API would never accept.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let dancer = factory::dancer::create_dancer(&db).await?;
//!     let class = factory::dance_class::DanceClassFactory::new(&db)
//!         .name("Ballet")
//!         .dancer("Alice", "Smith", 12)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `dancer` - Create dancer entities
//! - `dance_class` - Create dance class entities with embedded dancers
//! - `helpers` - Shared utilities such as unique id generation

pub mod dance_class;
pub mod dancer;
pub mod helpers;

// Re-export commonly used factory functions for concise usage
pub use dance_class::create_dance_class;
pub use dancer::create_dancer;
