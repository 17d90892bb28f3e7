//! SeaORM entities for the dance academy collections.

pub mod prelude;

pub mod dance_class;
pub mod dancer;
