pub use super::dance_class::Entity as DanceClass;
pub use super::dancer::Entity as Dancer;
