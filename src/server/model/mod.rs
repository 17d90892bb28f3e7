//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! dancers, dance classes, and the signed-in identity. Domain models are converted from
//! entity models at the repository boundary and transformed to DTOs at the controller
//! boundary.

pub mod dance_class;
pub mod dancer;
pub mod identity;
