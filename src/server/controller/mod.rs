//! HTTP request handlers.
//!
//! Controllers translate transport input (path segments and JSON bodies), run the
//! validation tables, call the service layer and map domain models to DTOs.

pub mod auth;
pub mod dance_class;
pub mod dancer;
pub mod home;

#[cfg(test)]
mod test;
