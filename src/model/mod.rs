//! Data transfer objects shared with API clients.
//!
//! These types define the JSON shapes sent and received over REST. Field names
//! are camelCase on the wire to match the public API contract.

pub mod api;
pub mod dance_class;
pub mod dancer;
pub mod user;
