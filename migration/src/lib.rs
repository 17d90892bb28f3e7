pub use sea_orm_migration::prelude::*;

mod m20241001_000001_create_dancer_table;
mod m20241001_000002_create_dance_class_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241001_000001_create_dancer_table::Migration),
            Box::new(m20241001_000002_create_dance_class_table::Migration),
        ]
    }
}
